//! # FDAI Replay Library
//!
//! Replay recorded flight attitude telemetry to an FDAI driver board over serial.
//!
//! This library provides the core functionality for parsing attitude samples
//! (roll, pitch, yaw) out of a flight log stream, pacing their delivery so that
//! elapsed wall time matches the timestamps in the log, and exchanging each
//! sample with the FDAI driver board in a synchronous request/response protocol.

pub mod config;
pub mod error;
pub mod generator;
pub mod replay;
pub mod serial;
pub mod telemetry;
