//! Orbitron space station
//!
//! The station owns the three modules. On construction it builds one drone per
//! module and hands it to that module.

use std::sync::{Arc, Mutex, MutexGuard};

use log::{debug, info};
use orblibgs::{LockdownStatus, MissionControlId, ModuleId, OrbError, OrbResult};

use crate::config::StationConfig;
use crate::control_center::{ControlCenter, SecurityCode};
use crate::drone::Drone;
use crate::life_support::LifeSupportSystem;
use crate::module::{core_mut, StationModule};
use crate::research_lab::ResearchLab;

/// Station handle shared with mission control
pub type SharedStation = Arc<Mutex<OrbitronSpaceStation>>;

/// Lock a shared station for the duration of the returned guard
pub fn lock_station(station: &SharedStation) -> OrbResult<MutexGuard<'_, OrbitronSpaceStation>> {
    station.lock().map_err(|_| OrbError::LockPoisoned)
}

/// The space station aggregate
#[derive(Debug)]
pub struct OrbitronSpaceStation {
    control_center: ControlCenter,
    research_lab: ResearchLab,
    life_support_system: LifeSupportSystem,
    mission_control_link: Option<MissionControlId>,
}

impl OrbitronSpaceStation {
    /// Take ownership of the modules and give each one a drone
    pub fn new(
        mut control_center: ControlCenter,
        mut research_lab: ResearchLab,
        mut life_support_system: LifeSupportSystem,
    ) -> Self {
        attach_new_drone(&mut control_center);
        attach_new_drone(&mut research_lab);
        attach_new_drone(&mut life_support_system);

        info!("Orbitron space station assembled");

        Self {
            control_center,
            research_lab,
            life_support_system,
            mission_control_link: None,
        }
    }

    /// Build the modules described by a configuration, then the station
    pub fn from_config(config: &StationConfig) -> Self {
        Self::new(
            ControlCenter::new(config.locked_down, SecurityCode::new(config.security_code.clone())),
            ResearchLab::new(),
            LifeSupportSystem::new(config.oxygen_level),
        )
    }

    /// Wrap the station in the handle mission control links to
    pub fn into_shared(self) -> SharedStation {
        Arc::new(Mutex::new(self))
    }

    pub fn control_center(&self) -> &ControlCenter {
        &self.control_center
    }

    pub fn control_center_mut(&mut self) -> &mut ControlCenter {
        &mut self.control_center
    }

    pub fn research_lab(&self) -> &ResearchLab {
        &self.research_lab
    }

    pub fn research_lab_mut(&mut self) -> &mut ResearchLab {
        &mut self.research_lab
    }

    pub fn life_support_system(&self) -> &LifeSupportSystem {
        &self.life_support_system
    }

    pub fn life_support_system_mut(&mut self) -> &mut LifeSupportSystem {
        &mut self.life_support_system
    }

    /// Resolve a module id to the module this station owns
    pub fn module(&self, module_id: ModuleId) -> &dyn StationModule {
        match module_id {
            ModuleId::ControlCenter => &self.control_center,
            ModuleId::ResearchLab => &self.research_lab,
            ModuleId::LifeSupportSystem => &self.life_support_system,
        }
    }

    pub fn module_mut(&mut self, module_id: ModuleId) -> &mut dyn StationModule {
        match module_id {
            ModuleId::ControlCenter => &mut self.control_center,
            ModuleId::ResearchLab => &mut self.research_lab,
            ModuleId::LifeSupportSystem => &mut self.life_support_system,
        }
    }

    pub fn mission_control_link(&self) -> Option<MissionControlId> {
        self.mission_control_link
    }

    /// Record which mission control is connected. Does not own it.
    pub fn set_mission_control_link(&mut self, mission_control: MissionControlId) {
        debug!("Mission control {:?} linked to station", mission_control);
        self.mission_control_link = Some(mission_control);
    }

    /// Lock the station down through the control center
    pub fn lock_down_orbitron(&mut self, password: &str) -> LockdownStatus {
        self.control_center.lockdown(password)
    }

    /// Give the drone of `module` a task. Does nothing if the module has no drone.
    ///
    /// Any module is accepted, whether or not this station owns it.
    pub fn assign_task_to_drone(module: &mut dyn StationModule, task: impl Into<String>) {
        if let Some(drone) = core_mut(module).drone_mut() {
            drone.set_task(task.into());
        }
    }

    /// Give the drone of one of this station's own modules a task
    pub fn assign_task_to_module(&mut self, module_id: ModuleId, task: impl Into<String>) {
        Self::assign_task_to_drone(self.module_mut(module_id), task);
    }
}

fn attach_new_drone(module: &mut dyn StationModule) {
    let drone = Drone::new(module.module_id());
    core_mut(module).attach_drone(drone);
}
