//! # Simlog
//!
//! Generate synthetic attitude telemetry for the replayer: a 360-degree
//! sweep of yaw, roll, and pitch in turn, then a return to zero.
//!
//! Sample execution:
//! ```text
//! simlog | fdai-replay
//! ```

use anyhow::Result;

use fdai_replay::config::Config;
use fdai_replay::generator::SweepGenerator;

fn main() -> Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    for sample in SweepGenerator::from_now(&config.generator) {
        println!("{}", sample.log_line());
    }

    Ok(())
}
