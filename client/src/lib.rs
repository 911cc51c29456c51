//! PassHolder Service Client
//!
//! Synchronous client for the remote pass "hold service" over a
//! mutually-authenticated TLS connection, speaking its line-oriented
//! `<tag>:<payload>` protocol.
//!
//! ```no_run
//! use logging::{LogLevel, Logger};
//! use passholder::{ClientConfig, PassHolderClient, TlsIdentity};
//!
//! fn main() -> passholder::Result<()> {
//!     let identity = TlsIdentity::new("provider.p12", "secret")?
//!         .with_root_certificate_authority("ca.pem")?;
//!     let logger = Logger::to_console(LogLevel::Info);
//!
//!     let mut client = PassHolderClient::new(
//!         ClientConfig::new("holder.example.com:9443"),
//!         identity,
//!         logger,
//!     );
//!     client.connect()?;
//!     let hash = client.hold("pass-serial-42")?;
//!     client.unhold(&hash)?;
//!     client.disconnect();
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod connection;
pub mod error;
pub mod protocol;
pub mod session;
pub mod tls;
pub mod transport;

mod client;

pub use client::PassHolderClient;
pub use config::ClientConfig;
pub use error::{PassHolderError, Result};
pub use protocol::Command;
pub use session::{Session, SessionFactory};
pub use tls::{TlsIdentity, TlsSession, TlsSessionFactory};
