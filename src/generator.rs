//! # Synthetic Telemetry Generator
//!
//! Produces a deterministic attitude sequence for exercising the replayer
//! without real flight data: three sequential 360-degree sweeps (yaw, then
//! roll, then pitch), then one final sample returning every axis to zero.
//!
//! Each sweep lasts `sweep_duration_secs` subdivided into `steps_per_second`
//! samples per second. Timestamps start at the generator's start instant
//! (whole seconds) and advance by `1/steps_per_second` continuously across
//! all three sweeps; there is no time reset between axes. The swept axis
//! interpolates linearly from 0 toward 360 (360 itself is never emitted) and
//! snaps back to 0 as soon as its sweep ends, so the other two axes always
//! read 0.
//!
//! Pure and deterministic: the same start instant and configuration produce
//! byte-identical output.

use chrono::{Local, NaiveDateTime, TimeDelta, Timelike};

use crate::config::GeneratorConfig;
use crate::telemetry::Sample;

/// Order of the three axis sweeps
const SWEEP_ORDER: [Axis; 3] = [Axis::Yaw, Axis::Roll, Axis::Pitch];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Roll,
    Pitch,
    Yaw,
}

/// Iterator over the synthetic sweep sequence
///
/// Yields `3 × sweep_duration_secs × steps_per_second + 1` samples in total.
#[derive(Debug, Clone)]
pub struct SweepGenerator {
    /// First sample's timestamp (whole seconds)
    start: NaiveDateTime,
    /// Samples per sweep
    steps_per_sweep: u32,
    /// Sample density
    steps_per_second: u32,
    /// Next sample index
    index: u32,
}

impl SweepGenerator {
    /// Create a generator starting at `start`
    ///
    /// `start` is truncated to whole seconds so the first timestamp has a
    /// zero fractional part, matching recorded logs that begin on a second
    /// boundary.
    pub fn new(start: NaiveDateTime, config: &GeneratorConfig) -> Self {
        Self {
            start: start.with_nanosecond(0).unwrap_or(start),
            steps_per_sweep: config.sweep_duration_secs * config.steps_per_second,
            steps_per_second: config.steps_per_second,
            index: 0,
        }
    }

    /// Create a generator starting at the current local time
    pub fn from_now(config: &GeneratorConfig) -> Self {
        Self::new(Local::now().naive_local(), config)
    }

    /// Total number of samples this generator yields
    pub fn total_samples(&self) -> u32 {
        3 * self.steps_per_sweep + 1
    }

    /// Build the sample at a given index
    fn sample_at(&self, index: u32) -> Sample {
        // Microseconds from the start, computed from the index rather than
        // accumulated, so no rounding drift across long runs
        let micros = index as i64 * 1_000_000 / self.steps_per_second as i64;
        let timestamp = self.start + TimeDelta::microseconds(micros);

        let sweep = (index / self.steps_per_sweep) as usize;
        if sweep >= SWEEP_ORDER.len() {
            // Final sample: everything back to zero
            return Sample::new(timestamp, 0.0, 0.0, 0.0);
        }

        let step = index % self.steps_per_sweep;
        let angle = step as f64 / self.steps_per_sweep as f64 * 360.0;

        let (roll, pitch, yaw) = match SWEEP_ORDER[sweep] {
            Axis::Yaw => (0.0, 0.0, angle),
            Axis::Roll => (angle, 0.0, 0.0),
            Axis::Pitch => (0.0, angle, 0.0),
        };
        Sample::new(timestamp, roll, pitch, yaw)
    }
}

impl Iterator for SweepGenerator {
    type Item = Sample;

    fn next(&mut self) -> Option<Sample> {
        if self.index >= self.total_samples() {
            return None;
        }
        let sample = self.sample_at(self.index);
        self.index += 1;
        Some(sample)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total_samples().saturating_sub(self.index) as usize;
        (remaining, Some(remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;
    use crate::telemetry::sample::TIMESTAMP_FORMAT;
    use crate::telemetry::SampleParser;

    fn config() -> GeneratorConfig {
        GeneratorConfig {
            sweep_duration_secs: 10,
            steps_per_second: 10,
        }
    }

    fn start() -> NaiveDateTime {
        NaiveDateTime::parse_from_str("2024-01-01 12:00:00.000000", TIMESTAMP_FORMAT).unwrap()
    }

    #[test]
    fn test_sample_count() {
        // 3 sweeps x 100 steps + final zero sample
        let samples: Vec<Sample> = SweepGenerator::new(start(), &config()).collect();
        assert_eq!(samples.len(), 301);
    }

    #[test]
    fn test_deterministic_output() {
        let first: Vec<String> = SweepGenerator::new(start(), &config())
            .map(|s| s.log_line())
            .collect();
        let second: Vec<String> = SweepGenerator::new(start(), &config())
            .map(|s| s.log_line())
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_timestamps_advance_by_step() {
        let samples: Vec<Sample> = SweepGenerator::new(start(), &config()).collect();

        assert_eq!(samples[0].timestamp, start());
        assert_eq!(samples[1].timestamp, start() + TimeDelta::milliseconds(100));
        // Continuous across sweep boundaries, no reset
        assert_eq!(samples[100].timestamp, start() + TimeDelta::seconds(10));
        assert_eq!(samples[200].timestamp, start() + TimeDelta::seconds(20));
        assert_eq!(samples[300].timestamp, start() + TimeDelta::seconds(30));
    }

    #[test]
    fn test_sweep_boundaries_pin_exact_triples() {
        let samples: Vec<Sample> = SweepGenerator::new(start(), &config()).collect();

        // Yaw sweep: starts at zero, ends one step short of 360
        assert_eq!((samples[0].roll, samples[0].pitch, samples[0].yaw), (0.0, 0.0, 0.0));
        assert_eq!(samples[1].yaw, 1.0 / 100.0 * 360.0);
        assert_eq!(samples[99].yaw, 99.0 / 100.0 * 360.0);

        // Roll sweep: yaw has snapped back to zero
        assert_eq!((samples[100].roll, samples[100].pitch, samples[100].yaw), (0.0, 0.0, 0.0));
        assert_eq!(samples[150].roll, 180.0);
        assert_eq!(samples[199].roll, 99.0 / 100.0 * 360.0);
        assert_eq!(samples[199].yaw, 0.0);

        // Pitch sweep: roll back to zero
        assert_eq!((samples[200].roll, samples[200].pitch, samples[200].yaw), (0.0, 0.0, 0.0));
        assert_eq!(samples[299].pitch, 99.0 / 100.0 * 360.0);
        assert_eq!(samples[299].roll, 0.0);

        // Final sample: all axes zero
        assert_eq!((samples[300].roll, samples[300].pitch, samples[300].yaw), (0.0, 0.0, 0.0));
    }

    #[test]
    fn test_start_truncated_to_whole_seconds() {
        let odd_start =
            NaiveDateTime::parse_from_str("2024-01-01 12:00:00.654321", TIMESTAMP_FORMAT).unwrap();
        let generator = SweepGenerator::new(odd_start, &config());
        let first = generator.clone().next().unwrap();
        assert_eq!(first.timestamp, start());
    }

    #[test]
    fn test_output_parses_back_through_replayer() {
        // Every generated line must survive the replayer's parser; angles
        // only within the 0.01-degree rendering resolution
        let parser = SampleParser::new();
        for sample in SweepGenerator::new(start(), &config()) {
            let parsed = parser.parse_line(&sample.log_line()).unwrap().unwrap();
            assert_eq!(parsed.timestamp, sample.timestamp);
            assert!((parsed.roll - sample.roll).abs() < 0.005);
            assert!((parsed.pitch - sample.pitch).abs() < 0.005);
            assert!((parsed.yaw - sample.yaw).abs() < 0.005);
        }
    }

    #[test]
    fn test_custom_configuration_scales_sample_count() {
        let config = GeneratorConfig {
            sweep_duration_secs: 2,
            steps_per_second: 5,
        };
        let samples: Vec<Sample> = SweepGenerator::new(start(), &config).collect();
        assert_eq!(samples.len(), 31);
        // Step is 200ms at 5 steps per second
        assert_eq!(samples[1].timestamp, start() + TimeDelta::milliseconds(200));
    }
}
