//! Trait abstraction for the FDAI board link to enable testing

use async_trait::async_trait;

use crate::error::Result;

/// Trait for the synchronous command/response exchange with the FDAI board
#[async_trait]
pub trait AttitudeLink: Send {
    /// Write one command line to the board
    async fn send_command(&mut self, command: &str) -> Result<()>;

    /// Wait for the board's response and return it, trimmed
    ///
    /// Blocks until at least one byte is available. The response content is
    /// opaque; it is only logged, never parsed.
    async fn read_response(&mut self) -> Result<String>;
}
