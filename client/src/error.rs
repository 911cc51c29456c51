//! Error types surfaced by the PassHolder client.

use std::fmt;
use std::io;

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, PassHolderError>;

/// Errors surfaced by the client.
///
/// Every failure path is a distinct variant so callers can tell a semantic
/// rejection by the service apart from a transport fault or a local
/// configuration problem.
#[derive(Debug)]
pub enum PassHolderError {
    /// Certificate or CA file unreadable at construction. Never retried.
    Configuration(String),
    /// TCP connect, name resolution or TLS handshake failure. Retried by
    /// the connection manager up to its bound.
    Connection { endpoint: String, reason: String },
    /// Short write: fewer bytes accepted than requested. The connection
    /// should be considered suspect after this.
    Write { written: usize, expected: usize },
    /// No response arrived within the select timeout.
    Timeout,
    /// The readiness wait itself failed.
    Wait(io::Error),
    /// Well-formed `e:<code>:<message>` rejection from the service.
    Service { code: String, message: String },
    /// Response that cannot be parsed into a success or service-error shape.
    Protocol(String),
    /// Empty request payload, rejected before any I/O.
    InvalidPayload,
    /// An operation was attempted without a held connection.
    NotConnected,
}

impl fmt::Display for PassHolderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PassHolderError::Configuration(msg) => write!(f, "{}", msg),
            PassHolderError::Connection { endpoint, reason } => {
                write!(f, "Unable to connect to '{}': {}", endpoint, reason)
            }
            PassHolderError::Write { written, expected } => write!(
                f,
                "Socket write error ({} bytes written instead of {} bytes)",
                written, expected
            ),
            PassHolderError::Timeout => write!(f, "No response received"),
            PassHolderError::Wait(err) => {
                write!(f, "Unable to wait for a stream availability: {}", err)
            }
            PassHolderError::Service { code, message } => {
                write!(f, "Service error {}: {}", code, message)
            }
            PassHolderError::Protocol(msg) => write!(f, "Malformed response: {}", msg),
            PassHolderError::InvalidPayload => write!(f, "Invalid payload"),
            PassHolderError::NotConnected => {
                write!(f, "Not connected to PassHolder service")
            }
        }
    }
}

impl std::error::Error for PassHolderError {}
