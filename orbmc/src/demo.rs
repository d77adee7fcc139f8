//! Demonstration run
//!
//! Builds a station from configuration, links mission control to it and walks
//! through drone tasking and the lockdown sequence.

use log::info;
use orblibgs::{ModuleId, OrbResult, StatusReport};
use orbstation::constants::{
    CONTROL_CENTER_TASK, DEMO_WRONG_PASSWORD, LIFE_SUPPORT_TASK, RESEARCH_LAB_TASK,
};
use orbstation::{lock_station, OrbitronSpaceStation, StationConfig, StationModule};

use crate::mission_control::MissionControl;

const DRONE_TASKS: [(ModuleId, &str); 3] = [
    (ModuleId::ControlCenter, CONTROL_CENTER_TASK),
    (ModuleId::ResearchLab, RESEARCH_LAB_TASK),
    (ModuleId::LifeSupportSystem, LIFE_SUPPORT_TASK),
];

/// Run the demonstration, returning every status line in the order printed
pub fn run_demo(config: &StationConfig) -> OrbResult<Vec<StatusReport>> {
    let mut reports = Vec::new();

    let station = OrbitronSpaceStation::from_config(config).into_shared();
    let mission_control = MissionControl::new(Some(&station));

    reports.push(mission_control.connect_to_space_station(&station)?);
    reports.push(mission_control.request_control_center_status()?);

    {
        let mut station = lock_station(&station)?;
        for (module_id, task) in DRONE_TASKS {
            station.assign_task_to_module(module_id, task);
        }
        for module_id in ModuleId::ALL {
            if let Some(drone) = station.module(module_id).drone() {
                reports.push(drone.drone_status());
            }
        }
    }

    reports.push(mission_control.request_oxygen_status()?);

    for password in [DEMO_WRONG_PASSWORD, config.security_code.as_str()] {
        let mut station = lock_station(&station)?;
        if !station.lock_down_orbitron(password).is_engaged() {
            reports.push(StatusReport::WrongPassword);
        }
        reports.push(station.control_center().info_about_center());
    }

    info!("Demonstration finished with {} status lines", reports.len());
    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_sequence() {
        let reports = run_demo(&StationConfig::default()).unwrap();
        let lines: Vec<String> = reports.iter().map(|r| r.to_string()).collect();
        assert_eq!(
            lines,
            [
                "The connection was successfully established",
                "ControlCenter is not under lock down",
                "Drone is currently working on: Monitor and control station security",
                "Drone is currently working on: Collect and analyze samples",
                "Drone is currently working on: Monitor and maintain oxygen levels",
                "Oxygen level: 100.0",
                "Wrong password",
                "ControlCenter is not under lock down",
                "ControlCenter is locked down",
            ]
        );
    }
}
