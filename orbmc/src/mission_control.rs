//! Mission control for Orbitron
//!
//! Holds a weak reference to the station, so a dropped station reads as
//! "not connected" instead of being kept alive.

use std::sync::{Arc, Mutex, Weak};

use log::{debug, info};
use orblibgs::{MissionControlId, OrbResult, StatusReport};
use orbstation::{lock_station, Drone, OrbitronSpaceStation, SharedStation};

/// Ground controller for a space station
#[derive(Debug)]
pub struct MissionControl {
    id: MissionControlId,
    space_station: Option<Weak<Mutex<OrbitronSpaceStation>>>,
}

impl MissionControl {
    /// Create a mission control, optionally already pointed at a station
    pub fn new(space_station: Option<&SharedStation>) -> Self {
        Self {
            id: MissionControlId::next(),
            space_station: space_station.map(Arc::downgrade),
        }
    }

    pub fn id(&self) -> MissionControlId {
        self.id
    }

    /// Get the station this controller points at, if it still exists
    pub fn space_station(&self) -> Option<SharedStation> {
        self.space_station.as_ref().and_then(Weak::upgrade)
    }

    /// Register this controller with a station.
    ///
    /// Only the station's link is set. The controller's own station reference
    /// comes from `new` and is left untouched.
    pub fn connect_to_space_station(&self, station: &SharedStation) -> OrbResult<StatusReport> {
        lock_station(station)?.set_mission_control_link(self.id);
        info!("Mission control {:?} connected to station", self.id);
        Ok(StatusReport::Connected.emit())
    }

    /// Ask the control center for its lock state
    pub fn request_control_center_status(&self) -> OrbResult<StatusReport> {
        let Some(station) = self.space_station() else {
            return Ok(self.not_connected());
        };
        let report = lock_station(&station)?.control_center().info_about_center();
        Ok(report)
    }

    /// Ask life support for the oxygen level
    pub fn request_oxygen_status(&self) -> OrbResult<StatusReport> {
        let Some(station) = self.space_station() else {
            return Ok(self.not_connected());
        };
        let report = lock_station(&station)?.life_support_system().oxy_status();
        Ok(report)
    }

    pub fn request_drone_status(&self, drone: &Drone) -> StatusReport {
        drone.drone_status()
    }

    fn not_connected(&self) -> StatusReport {
        debug!("Mission control {:?} has no station", self.id);
        StatusReport::NotConnected.emit()
    }
}
