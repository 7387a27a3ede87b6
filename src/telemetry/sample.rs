//! Attitude sample type and its two text renderings.

use chrono::NaiveDateTime;

/// Timestamp format used in flight log lines (microsecond precision)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// One attitude observation from a flight log
///
/// Angles are degrees as emitted by the log source. The range is
/// unconstrained; no normalization to 0-360 is performed anywhere.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    /// Absolute log timestamp, microsecond precision
    pub timestamp: NaiveDateTime,
    /// Roll angle in degrees
    pub roll: f64,
    /// Pitch angle in degrees
    pub pitch: f64,
    /// Yaw angle in degrees
    pub yaw: f64,
}

impl Sample {
    pub fn new(timestamp: NaiveDateTime, roll: f64, pitch: f64, yaw: f64) -> Self {
        Self { timestamp, roll, pitch, yaw }
    }

    /// Render the sample as a flight log line
    ///
    /// Produces the exact format the replayer's parser accepts:
    ///
    /// ```text
    /// 2024-01-01 00:00:00.000000: Roll : 0.00, Pitch : 0.00, Yaw : 10.00
    /// ```
    ///
    /// Angles are rendered to exactly two decimal places.
    pub fn log_line(&self) -> String {
        format!(
            "{}: Roll : {:.2}, Pitch : {:.2}, Yaw : {:.2}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.roll,
            self.pitch,
            self.yaw
        )
    }

    /// Render the sample as an FDAI board command
    ///
    /// The board protocol is a single ASCII line: a `>` marker, then roll,
    /// pitch, and yaw to two decimal places, space-separated,
    /// newline-terminated:
    ///
    /// ```text
    /// >12.50 -3.00 180.00\n
    /// ```
    pub fn command_line(&self) -> String {
        format!(">{:.2} {:.2} {:.2}\n", self.roll, self.pitch, self.yaw)
    }
}
