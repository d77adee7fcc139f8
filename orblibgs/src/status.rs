//! Status reports for Orbitron
//!
//! Every line the station or mission control prints is one of these reports.

use std::fmt;

/// A human-readable status line
#[derive(Debug, Clone, PartialEq)]
pub enum StatusReport {
    WrongPassword,
    LockedDown,
    NotLockedDown,
    OxygenLevel(f64),
    DroneWorking(String),
    DroneFree,
    Connected,
    NotConnected,
}

impl StatusReport {
    /// Print the report on standard output and hand it back
    pub fn emit(self) -> Self {
        println!("{}", self);
        self
    }
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusReport::WrongPassword => write!(f, "Wrong password"),
            StatusReport::LockedDown => write!(f, "ControlCenter is locked down"),
            StatusReport::NotLockedDown => write!(f, "ControlCenter is not under lock down"),
            // Debug keeps the fractional part: 100.0 prints as "100.0"
            StatusReport::OxygenLevel(level) => write!(f, "Oxygen level: {:?}", level),
            StatusReport::DroneWorking(task) => write!(f, "Drone is currently working on: {}", task),
            StatusReport::DroneFree => write!(f, "Drone is free to use"),
            StatusReport::Connected => write!(f, "The connection was successfully established"),
            StatusReport::NotConnected => write!(f, "Orbitron Space Station not connected."),
        }
    }
}
