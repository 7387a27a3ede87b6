//! # Telemetry Module
//!
//! Attitude sample model and flight-log line parsing.
//!
//! This module handles:
//! - The `Sample` type (timestamp + roll/pitch/yaw in degrees)
//! - Matching free-form log lines against the expected sample pattern
//! - Rendering samples back into log lines and device command lines

pub mod parser;
pub mod sample;

pub use parser::SampleParser;
pub use sample::Sample;
