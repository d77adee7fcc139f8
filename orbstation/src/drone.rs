//! Drone implementation for Orbitron
//!
//! A drone belongs to exactly one module. It names that module by id rather
//! than pointing at it.

use log::debug;
use orblibgs::{MissionControlId, ModuleId, StatusReport};

/// Drone attached to a station module
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drone {
    task: Option<String>,
    assigned_module: ModuleId,
    mission_control_link: Option<MissionControlId>,
}

impl Drone {
    /// Create a free drone for the given module
    pub(crate) fn new(assigned_module: ModuleId) -> Self {
        Self {
            task: None,
            assigned_module,
            mission_control_link: None,
        }
    }

    /// Get the current task label, if any
    pub fn task(&self) -> Option<&str> {
        self.task.as_deref()
    }

    /// Get the module this drone was built for
    pub fn assigned_module(&self) -> ModuleId {
        self.assigned_module
    }

    pub fn mission_control_link(&self) -> Option<MissionControlId> {
        self.mission_control_link
    }

    /// Report what the drone is doing
    pub fn drone_status(&self) -> StatusReport {
        let report = match &self.task {
            Some(task) => StatusReport::DroneWorking(task.clone()),
            None => StatusReport::DroneFree,
        };
        report.emit()
    }

    pub(crate) fn set_task(&mut self, task: String) {
        debug!("Drone for {} assigned task: {}", self.assigned_module, task);
        self.task = Some(task);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_drone_is_free() {
        let drone = Drone::new(ModuleId::ControlCenter);
        assert_eq!(drone.task(), None);
        assert_eq!(drone.assigned_module(), ModuleId::ControlCenter);
        assert_eq!(drone.mission_control_link(), None);
        assert_eq!(drone.drone_status(), StatusReport::DroneFree);
    }

    #[test]
    fn test_drone_with_task() {
        let mut drone = Drone::new(ModuleId::LifeSupportSystem);
        drone.set_task("Monitor and maintain oxygen levels".to_string());
        assert_eq!(
            drone.drone_status().to_string(),
            "Drone is currently working on: Monitor and maintain oxygen levels"
        );
    }

    #[test]
    fn test_status_does_not_mutate() {
        let mut drone = Drone::new(ModuleId::ResearchLab);
        drone.set_task("Collect".to_string());
        let before = drone.clone();
        drone.drone_status();
        drone.drone_status();
        assert_eq!(drone, before);
    }
}
