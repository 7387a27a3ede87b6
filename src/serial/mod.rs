//! # Serial Communication Module
//!
//! Handles serial communication with the FDAI driver board.
//!
//! This module handles:
//! - Opening the serial port at 115,200 baud
//! - Auto-detecting the board across common USB serial device paths
//! - Writing attitude command lines
//! - Waiting for the board's acknowledgement after each command
//!
//! The protocol is strictly synchronous: one command line out, then block
//! until the board answers with at least one byte. A board that never
//! answers stalls the session indefinitely; that is accepted, there is no
//! timeout or reconnection logic.

pub mod port_trait;

use async_trait::async_trait;
use tokio_serial::SerialPortBuilderExt;
use tracing::{debug, info, warn};

use crate::config::SerialConfig;
use crate::error::{FdaiReplayError, Result};
use self::port_trait::AttitudeLink;

/// Baud rate of the FDAI driver board's serial interface
pub const FDAI_BAUD_RATE: u32 = 115_200;

/// Default device paths to try (in order of preference)
const DEFAULT_DEVICE_PATHS: &[&str] = &[
    "/dev/ttyUSB0", // USB-to-serial adapters (most common for the board)
    "/dev/ttyACM0", // USB CDC devices
];

/// FDAI Serial Port Handler
///
/// Manages the connection to the FDAI driver board via USB serial.
pub struct FdaiSerial {
    /// Serial port handle
    port: tokio_serial::SerialStream,
    /// Device path (e.g., /dev/ttyUSB0)
    device_path: String,
}

impl std::fmt::Debug for FdaiSerial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FdaiSerial")
            .field("device_path", &self.device_path)
            .finish_non_exhaustive()
    }
}

impl FdaiSerial {
    /// Open connection to the FDAI board
    ///
    /// Auto-detects the device by trying common paths at the default baud
    /// rate.
    ///
    /// # Errors
    ///
    /// Returns error if no board is found or the connection fails
    pub fn open() -> Result<Self> {
        Self::open_with_paths(DEFAULT_DEVICE_PATHS, FDAI_BAUD_RATE)
    }

    /// Open connection using paths and baud rate from configuration
    pub fn open_with_config(config: &SerialConfig) -> Result<Self> {
        let paths: Vec<&str> = config.ports.iter().map(String::as_str).collect();
        Self::open_with_paths(&paths, config.baud_rate)
    }

    /// Open connection to the FDAI board with custom device paths
    ///
    /// # Arguments
    ///
    /// * `paths` - Device paths to try (e.g., &["/dev/ttyUSB0"])
    /// * `baud_rate` - Serial baud rate
    ///
    /// # Returns
    ///
    /// * `Result<FdaiSerial>` - Connected serial port or error
    pub fn open_with_paths(paths: &[&str], baud_rate: u32) -> Result<Self> {
        for path in paths {
            debug!("Trying to open serial port: {}", path);

            match Self::open_port(path, baud_rate) {
                Ok(port) => {
                    info!("Successfully opened FDAI device at {}", path);
                    return Ok(Self {
                        port,
                        device_path: path.to_string(),
                    });
                }
                Err(e) => {
                    warn!("Failed to open {}: {}", path, e);
                    continue;
                }
            }
        }

        Err(FdaiReplayError::SerialPortNotFound(paths.join(", ")))
    }

    /// Open a specific serial port with 8N1 settings
    fn open_port(path: &str, baud_rate: u32) -> Result<tokio_serial::SerialStream> {
        let port = tokio_serial::new(path, baud_rate)
            .data_bits(tokio_serial::DataBits::Eight)
            .parity(tokio_serial::Parity::None)
            .stop_bits(tokio_serial::StopBits::One)
            .flow_control(tokio_serial::FlowControl::None)
            .open_native_async()
            .map_err(|e| FdaiReplayError::Serial(format!("Failed to open {}: {}", path, e)))?;

        Ok(port)
    }

    /// Get the device path of the opened serial port
    pub fn device_path(&self) -> &str {
        &self.device_path
    }
}

#[async_trait]
impl AttitudeLink for FdaiSerial {
    /// Write one attitude command line to the board
    ///
    /// # Arguments
    ///
    /// * `command` - Complete command line (`>` marker, three angles, newline)
    async fn send_command(&mut self, command: &str) -> Result<()> {
        use tokio::io::AsyncWriteExt;

        self.port
            .write_all(command.as_bytes())
            .await
            .map_err(|e| FdaiReplayError::Serial(format!("Failed to write command: {}", e)))?;

        self.port
            .flush()
            .await
            .map_err(|e| FdaiReplayError::Serial(format!("Failed to flush serial port: {}", e)))?;

        debug!("Sent command ({} bytes)", command.len());
        Ok(())
    }

    /// Wait for the board's acknowledgement
    ///
    /// Blocks until at least one byte arrives, reads what is available, and
    /// returns it as trimmed text. The wait is unbounded.
    async fn read_response(&mut self) -> Result<String> {
        use tokio::io::AsyncReadExt;

        let mut buf = [0u8; 256];
        let n = self
            .port
            .read(&mut buf)
            .await
            .map_err(|e| FdaiReplayError::Serial(format!("Failed to read response: {}", e)))?;

        if n == 0 {
            return Err(FdaiReplayError::Serial(
                "Device closed the connection".to_string(),
            ));
        }

        Ok(String::from_utf8_lossy(&buf[..n]).trim().to_string())
    }
}
