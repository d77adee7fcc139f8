//! Orbitron Mission Control Library (orbmc)
//!
//! Mission control links to a station without owning it and asks the
//! station's modules for their status.

pub mod demo;
pub mod mission_control;

pub use demo::*;
pub use mission_control::*;
pub use orblibgs::*;
