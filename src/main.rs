//! # FDAI Replay
//!
//! Replay recorded flight attitude telemetry to an FDAI driver board.
//!
//! Reads flight log lines from stdin, paces them so elapsed wall time
//! matches the timestamps in the log, and sends each roll/pitch/yaw sample
//! to the board over serial, waiting for an acknowledgement after every one.
//!
//! Sample execution:
//! ```text
//! mavlogdump 00000018.BIN | fdai-replay
//! simlog | fdai-replay
//! ```

use std::time::Duration;

use anyhow::Result;
use tokio::io::BufReader;
use tracing::info;

use fdai_replay::config::Config;
use fdai_replay::replay::Replayer;
use fdai_replay::serial::FdaiSerial;

/// Main entry point for the replayer
///
/// # Control Flow
///
/// 1. **Initialization**
///    - Set up logging with tracing subscriber
///    - Load configuration (optional path as first argument)
///    - Open the serial connection to the FDAI board
///
/// 2. **Replay Loop**
///    - Read log lines from stdin until end of input
///    - Drop, delay, or immediately send each sample per the pacing policy
///    - Handle Ctrl+C for early shutdown
///
/// 3. **Shutdown**
///    - Log session counters
///    - Clean exit
///
/// # Errors
///
/// Returns error if:
/// - The configuration file cannot be read
/// - No FDAI board can be opened
/// - A matched log line carries an invalid field
/// - A serial write or read fails
#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("FDAI Replay v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = match std::env::args().nth(1) {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    // Open the board before touching any input; no board means no session
    let mut serial = FdaiSerial::open_with_config(&config.serial)?;
    info!("FDAI serial port opened at: {}", serial.device_path());

    let mut replayer = Replayer::new(Duration::from_millis(config.replay.grace_ms));
    let stdin = BufReader::new(tokio::io::stdin());

    info!("Replaying attitude telemetry from stdin");
    info!("Press Ctrl+C to exit");

    tokio::select! {
        result = replayer.run(stdin, &mut serial) => {
            let stats = result?;
            info!(
                "Replay finished: {} sent, {} dropped, {} lines skipped",
                stats.accepted, stats.dropped, stats.skipped
            );
        }

        // Handle Ctrl+C for early shutdown
        _ = tokio::signal::ctrl_c() => {
            info!("Received Ctrl+C, shutting down...");
        }
    }

    Ok(())
}
