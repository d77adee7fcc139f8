//! Orbitron - Space Station Modules and Drones
//!
//! The station owns its three modules and one drone per module. Mission
//! control reaches it through a shared handle it does not own.

pub mod config;
pub mod control_center;
pub mod drone;
pub mod life_support;
pub mod module;
pub mod research_lab;
pub mod station;

pub use config::*;
pub use control_center::*;
pub use drone::*;
pub use life_support::*;
pub use module::*;
pub use research_lab::*;
pub use station::*;
