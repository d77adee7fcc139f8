//! End-to-end runs across station and mission control

use std::io::Write;

use orbmc::{run_demo, MissionControl, ModuleId, StatusReport};
use orbstation::{
    load_config, lock_station, ControlCenter, LifeSupportSystem, OrbitronSpaceStation,
    ResearchLab, SecurityCode, StationModule,
};
use tempfile::NamedTempFile;

#[test]
fn test_demo_with_config_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file
        .write_all(br#"{ "security_code": "OPEN-SESAME", "oxygen_level": 21.5 }"#)
        .unwrap();

    let config = load_config(temp_file.path()).unwrap();
    let reports = run_demo(&config).unwrap();

    assert!(reports.contains(&StatusReport::OxygenLevel(21.5)));
    assert_eq!(reports.last(), Some(&StatusReport::LockedDown));
}

#[test]
fn test_station_and_mission_control() {
    let mut control_center = ControlCenter::new(false, SecurityCode::new("62N28R"));
    let mut research_lab = ResearchLab::new();
    research_lab.add_samples("X");
    research_lab.add_samples("Y");
    assert!(control_center.drone().is_none());
    control_center.lockdown("123");
    assert!(!control_center.is_locked_down());

    let station =
        OrbitronSpaceStation::new(control_center, research_lab, LifeSupportSystem::new(100.0))
            .into_shared();

    let unlinked = MissionControl::new(None);
    assert_eq!(
        unlinked.request_control_center_status().unwrap(),
        StatusReport::NotConnected
    );

    let mission_control = MissionControl::new(Some(&station));
    mission_control.connect_to_space_station(&station).unwrap();
    assert_eq!(
        lock_station(&station).unwrap().mission_control_link(),
        Some(mission_control.id())
    );

    {
        let mut guard = lock_station(&station).unwrap();
        assert_eq!(guard.research_lab().samples(), ["X", "Y"]);
        OrbitronSpaceStation::assign_task_to_drone(guard.life_support_system_mut(), "Refill");
        let drone = guard.module(ModuleId::LifeSupportSystem).drone().unwrap();
        assert_eq!(
            mission_control.request_drone_status(drone),
            StatusReport::DroneWorking("Refill".to_string())
        );
        assert!(guard.lock_down_orbitron("62N28R").is_engaged());
    }

    assert_eq!(
        mission_control.request_control_center_status().unwrap(),
        StatusReport::LockedDown
    );
    assert_eq!(
        mission_control.request_oxygen_status().unwrap().to_string(),
        "Oxygen level: 100.0"
    );
}
