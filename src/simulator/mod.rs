//! Headless balance simulator.
//!
//! Auto-plays whole sessions to analyze:
//! - Draws needed per flush as upgrades accumulate
//! - The money curve across wins
//! - How long each prestige cycle takes
//!
//! Runs go through the same command engine as real play, with timers fired
//! immediately instead of waited for.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::SimReport;
pub use runner::{run_simulation, PrestigeCycle, RunStats};
