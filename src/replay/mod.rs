//! # Replay Module
//!
//! The timing-paced replay loop.
//!
//! Reads flight log lines one at a time, extracts attitude samples, paces
//! their delivery so elapsed wall time matches elapsed log time, and
//! exchanges each accepted sample with the FDAI board: one command line out,
//! then block until the board acknowledges. The loop is strictly sequential;
//! sample N+1 is never sent before the response to sample N has been read.

pub mod pacer;

use std::time::Duration;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::time::Instant;
use tracing::{debug, info};

use crate::error::Result;
use crate::serial::port_trait::AttitudeLink;
use crate::telemetry::{Sample, SampleParser};
use self::pacer::{Pacer, PacingDecision};

/// Counters for one replay session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplayStats {
    /// Samples sent to the board (after any pacing delay)
    pub accepted: u64,
    /// Samples discarded for being too far behind schedule
    pub dropped: u64,
    /// Input lines that did not match the sample pattern
    pub skipped: u64,
}

/// Replays a flight log stream to an FDAI board
///
/// Holds the line parser and the lazily-created pacing state. One `Replayer`
/// drives exactly one session; the origins captured from the first sample
/// are never reset.
pub struct Replayer {
    parser: SampleParser,
    grace: Duration,
    pacer: Option<Pacer>,
}

impl Replayer {
    /// Create a replayer with the given drop-grace window
    pub fn new(grace: Duration) -> Self {
        Self {
            parser: SampleParser::new(),
            grace,
            pacer: None,
        }
    }

    /// Run the session until the input stream is exhausted
    ///
    /// # Arguments
    ///
    /// * `input` - Flight log line source (usually buffered stdin)
    /// * `link` - FDAI board connection
    ///
    /// # Returns
    ///
    /// * `Result<ReplayStats>` - Session counters on normal end of input
    ///
    /// # Errors
    ///
    /// Returns error on the first malformed sample or device I/O failure.
    /// There is no partial-success mode; the caller gets either a completed
    /// session or the failure that ended it.
    pub async fn run<R, L>(&mut self, input: R, link: &mut L) -> Result<ReplayStats>
    where
        R: AsyncBufRead + Unpin,
        L: AttitudeLink + ?Sized,
    {
        let mut stats = ReplayStats::default();
        let mut lines = input.lines();

        while let Some(line) = lines.next_line().await? {
            match self.parser.parse_line(&line)? {
                Some(sample) => self.process_sample(sample, link, &mut stats).await?,
                None => {
                    debug!("Skipping unmatched line: {}", line);
                    stats.skipped += 1;
                }
            }
        }

        Ok(stats)
    }

    /// Pace one sample and, unless dropped, exchange it with the board
    async fn process_sample<L>(
        &mut self,
        sample: Sample,
        link: &mut L,
        stats: &mut ReplayStats,
    ) -> Result<()>
    where
        L: AttitudeLink + ?Sized,
    {
        let now = Instant::now();

        // First accepted sample anchors the session; it always sends
        let grace = self.grace;
        let pacer = self
            .pacer
            .get_or_insert_with(|| Pacer::start(sample.timestamp, now, grace));

        match pacer.decide(sample.timestamp, now) {
            PacingDecision::Drop { behind } => {
                info!(
                    "Dropping {} Roll {:.2} Pitch {:.2} Yaw {:.2} ({:.1}s behind)",
                    sample.timestamp, sample.roll, sample.pitch, sample.yaw,
                    behind.as_secs_f64()
                );
                stats.dropped += 1;
                return Ok(());
            }
            PacingDecision::Delay(delta) => {
                debug!("Delaying {:.3}s to match log time", delta.as_secs_f64());
                tokio::time::sleep(delta).await;
            }
            PacingDecision::SendNow => {}
        }

        info!(
            "{} Roll {:.2} Pitch {:.2} Yaw {:.2}",
            sample.timestamp, sample.roll, sample.pitch, sample.yaw
        );

        link.send_command(&sample.command_line()).await?;
        let response = link.read_response().await?;
        info!("Device response: {}", response);

        stats.accepted += 1;
        Ok(())
    }
}
