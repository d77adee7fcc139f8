//! Orbitron Ground/Station Library (orblibgs)
//!
//! This library contains definitions shared between the station software
//! (orbstation) and mission control (orbmc).

pub mod types;
pub mod status;
pub mod error;

pub use types::*;
pub use status::*;
pub use error::*;
