//! Control center module
//!
//! Holds the station's lockdown state. The lock only ever moves from unlocked
//! to locked, and only with the right password.

use std::fmt;

use log::{info, warn};
use orblibgs::{LockdownStatus, ModuleId, ModuleName, StatusReport};

use crate::module::sealed::{Access, CoreAccess};
use crate::module::{ModuleCore, StationModule};

/// Security code guarding the lockdown. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct SecurityCode(String);

impl SecurityCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    fn matches(&self, password: &str) -> bool {
        self.0 == password
    }
}

impl fmt::Debug for SecurityCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecurityCode(<redacted>)")
    }
}

/// Control center
#[derive(Debug)]
pub struct ControlCenter {
    core: ModuleCore,
    is_locked_down: bool,
    security_code: SecurityCode,
}

impl ControlCenter {
    pub fn new(is_locked_down: bool, security_code: SecurityCode) -> Self {
        Self {
            core: ModuleCore::new(ModuleName::new(ModuleId::ControlCenter.default_name())),
            is_locked_down,
            security_code,
        }
    }

    pub fn is_locked_down(&self) -> bool {
        self.is_locked_down
    }

    /// Lock the control center down if the password matches the security code
    pub fn lockdown(&mut self, password: &str) -> LockdownStatus {
        if self.security_code.matches(password) {
            self.is_locked_down = true;
            info!("{} locked down", self.core.name());
            LockdownStatus::Engaged
        } else {
            warn!("{} refused lockdown: wrong password", self.core.name());
            StatusReport::WrongPassword.emit();
            LockdownStatus::WrongPassword
        }
    }

    /// Report the current lock state
    pub fn info_about_center(&self) -> StatusReport {
        let report = if self.is_locked_down {
            StatusReport::LockedDown
        } else {
            StatusReport::NotLockedDown
        };
        report.emit()
    }
}

impl StationModule for ControlCenter {
    fn module_id(&self) -> ModuleId {
        ModuleId::ControlCenter
    }

    fn core(&self) -> &ModuleCore {
        &self.core
    }
}

impl CoreAccess for ControlCenter {
    fn core_mut(&mut self, _: Access) -> &mut ModuleCore {
        &mut self.core
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn control_center() -> ControlCenter {
        ControlCenter::new(false, SecurityCode::new("62N28R"))
    }

    #[test]
    fn test_wrong_password_keeps_state() {
        let mut cc = control_center();
        assert_eq!(cc.lockdown("123"), LockdownStatus::WrongPassword);
        assert!(!cc.is_locked_down());
        assert_eq!(cc.lockdown(""), LockdownStatus::WrongPassword);
        assert_eq!(cc.lockdown("62n28r"), LockdownStatus::WrongPassword);
        assert!(!cc.is_locked_down());
    }

    #[test]
    fn test_lockdown_scenario() {
        let mut cc = control_center();
        assert_eq!(cc.info_about_center(), StatusReport::NotLockedDown);
        assert_eq!(cc.lockdown("123"), LockdownStatus::WrongPassword);
        assert!(!cc.is_locked_down());
        assert_eq!(cc.lockdown("62N28R"), LockdownStatus::Engaged);
        assert!(cc.is_locked_down());
        assert_eq!(cc.info_about_center().to_string(), "ControlCenter is locked down");
    }

    #[test]
    fn test_wrong_password_after_lockdown_stays_locked() {
        let mut cc = control_center();
        cc.lockdown("62N28R");
        assert_eq!(cc.lockdown("123"), LockdownStatus::WrongPassword);
        assert!(cc.is_locked_down());
    }

    #[test]
    fn test_info_is_idempotent() {
        let cc = control_center();
        assert_eq!(cc.info_about_center(), cc.info_about_center());
    }

    #[test]
    fn test_security_code_redacted() {
        let cc = control_center();
        let dump = format!("{:?}", cc);
        assert!(!dump.contains("62N28R"));
        assert_eq!(cc.name().as_str(), "Control Center");
        assert!(cc.drone().is_none());
    }
}
