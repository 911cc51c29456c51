//! Session abstraction between the connection manager and the transport.
//!
//! The production implementation is the TLS session in [`crate::tls`];
//! tests substitute scripted sessions so retry and transport behavior can
//! be exercised without sockets or real delays.

use std::io::{self, Read, Write};
use std::time::Duration;

use crate::error::Result;

/// One established channel to the service.
///
/// Writes are expected to flush immediately (no internal coalescing), and
/// reads are non-blocking: callers gate them on [`Session::wait_readable`].
pub trait Session: Read + Write + Send {
    /// Waits up to `timeout` for the channel to become readable.
    ///
    /// Returns `Ok(true)` when data is available, `Ok(false)` when the
    /// timeout expired with nothing to read, and `Err` when the wait
    /// mechanism itself failed. These map to three distinct client errors.
    fn wait_readable(&mut self, timeout: Duration) -> io::Result<bool>;

    /// Shuts the channel down cleanly.
    fn close(&mut self) -> io::Result<()>;
}

/// Establishes sessions on behalf of the connection manager.
pub trait SessionFactory: Send {
    /// Performs one connection attempt.
    fn connect(&self) -> Result<Box<dyn Session>>;
}
