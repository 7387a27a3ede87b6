//! # Flight Log Line Parser
//!
//! Extracts attitude samples out of a free-form telemetry log stream.
//!
//! A log line either matches the expected sample pattern or it does not.
//! Non-matching lines (headers, unrelated messages, other record types) are
//! skipped silently. A line that matches the pattern but carries an invalid
//! timestamp or numeric field is fatal for the whole session: the data is
//! there but unreadable, and continuing would silently lose samples.

use chrono::NaiveDateTime;
use regex::Regex;

use super::sample::{Sample, TIMESTAMP_FORMAT};
use crate::error::{FdaiReplayError, Result};

/// Pattern a log line must match to become a sample
///
/// Requires, in order: a two-token timestamp followed by a colon, then
/// `Roll : <tok>`, `Pitch : <tok>`, `Yaw : <tok>`. Any other text on the
/// line is ignored. The yaw token runs to the next comma or whitespace so
/// multi-digit yaw values are captured in full, symmetric with roll and
/// pitch.
const SAMPLE_PATTERN: &str = r"(\S+ \S+):.*Roll : (\S+)[.,] Pitch : (\S+), Yaw : ([^,\s]+)";

/// Parser for attitude sample log lines
///
/// Holds the compiled sample pattern; build one per session and reuse it
/// for every line.
pub struct SampleParser {
    pattern: Regex,
}

impl SampleParser {
    pub fn new() -> Self {
        Self {
            // SAMPLE_PATTERN is a literal and always compiles
            pattern: Regex::new(SAMPLE_PATTERN).expect("sample pattern compiles"),
        }
    }

    /// Parse one log line
    ///
    /// # Returns
    ///
    /// * `Ok(None)` - line does not match the sample pattern (skip it)
    /// * `Ok(Some(sample))` - line matched and all fields parsed
    /// * `Err(MalformedSample)` - line matched but a field is invalid
    ///
    /// # Examples
    ///
    /// ```
    /// use fdai_replay::telemetry::SampleParser;
    ///
    /// let parser = SampleParser::new();
    /// let sample = parser
    ///     .parse_line("2024-01-01 00:00:00.000000: Roll : 0.00, Pitch : 0.00, Yaw : 10.00")
    ///     .unwrap()
    ///     .unwrap();
    /// assert_eq!(sample.yaw, 10.0);
    ///
    /// assert!(parser.parse_line("not a sample").unwrap().is_none());
    /// ```
    pub fn parse_line(&self, line: &str) -> Result<Option<Sample>> {
        let caps = match self.pattern.captures(line) {
            Some(caps) => caps,
            None => return Ok(None),
        };

        let timestamp = NaiveDateTime::parse_from_str(&caps[1], TIMESTAMP_FORMAT)
            .map_err(|e| FdaiReplayError::MalformedSample {
                line: line.to_string(),
                reason: format!("invalid timestamp {:?}: {}", &caps[1], e),
            })?;
        let roll = parse_angle(&caps[2], "Roll", line)?;
        let pitch = parse_angle(&caps[3], "Pitch", line)?;
        let yaw = parse_angle(&caps[4], "Yaw", line)?;

        Ok(Some(Sample::new(timestamp, roll, pitch, yaw)))
    }
}

impl Default for SampleParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse one captured angle field, naming the field in the error
fn parse_angle(token: &str, field: &str, line: &str) -> Result<f64> {
    token
        .parse::<f64>()
        .map_err(|e| FdaiReplayError::MalformedSample {
            line: line.to_string(),
            reason: format!("invalid {} value {:?}: {}", field, token, e),
        })
}
