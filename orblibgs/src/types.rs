//! Type definitions shared between station and mission control

use std::cmp::Ordering;
use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering as AtomicOrdering};

/// Identifies one of the station's modules.
///
/// Drones hold this instead of a pointer to the module that owns them, so the
/// back-reference never takes part in ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModuleId {
    ControlCenter,
    ResearchLab,
    LifeSupportSystem,
}

impl ModuleId {
    pub const ALL: [ModuleId; 3] = [
        ModuleId::ControlCenter,
        ModuleId::ResearchLab,
        ModuleId::LifeSupportSystem,
    ];

    /// Name given to a module of this kind when it is built
    pub fn default_name(&self) -> &'static str {
        match self {
            ModuleId::ControlCenter => "Control Center",
            ModuleId::ResearchLab => "Research Lab",
            ModuleId::LifeSupportSystem => "Life Support System",
        }
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.default_name())
    }
}

/// Module name, fixed when the module is built
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleName(String);

impl ModuleName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Mission control identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MissionControlId(pub u32);

static NEXT_MISSION_CONTROL_ID: AtomicU32 = AtomicU32::new(1);

impl MissionControlId {
    /// Allocate an identifier not handed out before in this process
    pub fn next() -> Self {
        Self(NEXT_MISSION_CONTROL_ID.fetch_add(1, AtomicOrdering::Relaxed))
    }
}

impl Ord for MissionControlId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl PartialOrd for MissionControlId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Outcome of a lockdown attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockdownStatus {
    /// Password matched, the control center is locked down
    Engaged,
    /// Password did not match, nothing changed
    WrongPassword,
}

impl LockdownStatus {
    pub fn is_engaged(&self) -> bool {
        matches!(self, LockdownStatus::Engaged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_default_names() {
        assert_eq!(ModuleId::ControlCenter.default_name(), "Control Center");
        assert_eq!(ModuleId::ResearchLab.default_name(), "Research Lab");
        assert_eq!(ModuleId::LifeSupportSystem.to_string(), "Life Support System");
    }

    #[test]
    fn test_mission_control_ids_unique() {
        let id1 = MissionControlId::next();
        let id2 = MissionControlId::next();
        assert_ne!(id1, id2);
        assert!(id1 < id2);
    }

    #[test]
    fn test_lockdown_status() {
        assert!(LockdownStatus::Engaged.is_engaged());
        assert!(!LockdownStatus::WrongPassword.is_engaged());
    }
}
