//! Orbitron main entry point
//!
//! Runs the mission control demonstration against a freshly built station.

use std::env;
use std::process;

use orbmc::run_demo;
use orbstation::{config::load_config, StationConfig};

fn main() {
    // Initialize logging
    env_logger::init();

    // Optional config file path from command line, built-in defaults otherwise
    let config = match env::args().nth(1) {
        Some(config_path) => match load_config(&config_path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading configuration from {}: {}", config_path, e);
                process::exit(1);
            }
        },
        None => StationConfig::default(),
    };

    if let Err(e) = run_demo(&config) {
        eprintln!("Error in demonstration: {}", e);
        process::exit(1);
    }
}
