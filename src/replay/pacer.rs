//! # Replay Pacer
//!
//! The pacing policy at the heart of the replayer: given the session origins
//! (first sample's log timestamp and the wall-clock instant it was seen),
//! decide for every subsequent sample whether to drop it, delay before
//! sending, or send immediately.
//!
//! The decision compares two elapsed durations:
//!
//! - `log_elapsed` - how far into the log the sample's timestamp is
//! - `wall_elapsed` - how much real time has passed since the session started
//!
//! A sample more than the grace window behind wall time can never be caught
//! up without falling further behind, so it is dropped. A sample ahead of
//! wall time is delayed by the full difference. Everything in between is
//! sent immediately.
//!
//! Wall time is measured with `tokio::time::Instant` so the policy runs
//! deterministically under a paused test clock.

use chrono::NaiveDateTime;
use std::time::Duration;
use tokio::time::Instant;

/// Slack allowed before a late sample is dropped instead of sent
///
/// Applies only to the drop decision; a sample ahead of schedule is always
/// delayed by the full difference, never a shortened one.
pub const DEFAULT_GRACE: Duration = Duration::from_millis(500);

/// What to do with one sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PacingDecision {
    /// Sample is on schedule (or within the grace window behind): send now
    SendNow,
    /// Sample is ahead of schedule: sleep this long, then send
    Delay(Duration),
    /// Sample is too far behind schedule to catch up: discard it
    Drop {
        /// How far behind wall time the sample was at evaluation
        behind: Duration,
    },
}

/// Pacing state for one replay session
///
/// Holds the two origin anchors, set exactly once from the first accepted
/// sample. Each later sample is judged independently against these anchors;
/// no other state accumulates.
#[derive(Debug, Clone)]
pub struct Pacer {
    /// Timestamp of the first parsed sample
    log_origin: NaiveDateTime,
    /// Wall-clock instant captured when the first sample was parsed
    wall_origin: Instant,
    /// Drop slack (see [`DEFAULT_GRACE`])
    grace: Duration,
}

impl Pacer {
    /// Start a session from its first sample
    ///
    /// The first sample itself evaluates to `SendNow`: both elapsed
    /// durations are zero at the instant the origins are captured, so no
    /// special case is needed.
    pub fn start(log_origin: NaiveDateTime, wall_origin: Instant, grace: Duration) -> Self {
        Self { log_origin, wall_origin, grace }
    }

    /// Decide what to do with the sample stamped `timestamp`, evaluated at `now`
    ///
    /// Out-of-order input (timestamp before the origin) yields a negative
    /// log delta; it is clamped to zero, which falls through to `SendNow`
    /// or `Drop` like any other late sample.
    pub fn decide(&self, timestamp: NaiveDateTime, now: Instant) -> PacingDecision {
        let log_elapsed = (timestamp - self.log_origin).to_std().unwrap_or(Duration::ZERO);
        let wall_elapsed = now - self.wall_origin;

        if log_elapsed + self.grace < wall_elapsed {
            PacingDecision::Drop { behind: wall_elapsed - log_elapsed }
        } else if log_elapsed > wall_elapsed {
            PacingDecision::Delay(log_elapsed - wall_elapsed)
        } else {
            PacingDecision::SendNow
        }
    }
}
