//! Session simulator for balance checks.
//!
//! Plays many scripted sessions through the real `GameSession`, item, quest
//! and achievement code and aggregates how far players get.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::{RunStats, SimReport};
pub use runner::{run_simulation, simulate_single_run, SIM_SCENES};
