//! Client facade for the PassHolder service.

use std::time::Duration;

use logging::Logger;

use crate::config::ClientConfig;
use crate::connection::ConnectionManager;
use crate::error::{PassHolderError, Result};
use crate::protocol::{self, Command};
use crate::session::SessionFactory;
use crate::tls::{TlsIdentity, TlsSessionFactory};
use crate::transport;

/// Persistent client for the remote pass hold service.
///
/// One client owns one logical connection; operations take `&mut self` and
/// exactly one request may be in flight at a time. Each of
/// [`hold`](Self::hold), [`unhold`](Self::unhold) and
/// [`remove`](Self::remove) is an encode, round-trip, decode cycle with no
/// per-request retry: retrying is a connection-establishment concern only.
pub struct PassHolderClient {
    connection: ConnectionManager,
    select_timeout: Duration,
}

impl PassHolderClient {
    /// Creates a client that connects over mutually-authenticated TLS.
    ///
    /// The certificate material in `identity` was already validated at its
    /// construction; nothing touches the network until
    /// [`connect`](Self::connect).
    pub fn new(config: ClientConfig, identity: TlsIdentity, logger: Logger) -> Self {
        let factory = TlsSessionFactory::new(
            config.endpoint.clone(),
            identity,
            config.connect_timeout,
        );
        Self::with_factory(config, Box::new(factory), logger)
    }

    /// Creates a client over a custom session factory.
    pub fn with_factory(
        config: ClientConfig,
        factory: Box<dyn SessionFactory>,
        logger: Logger,
    ) -> Self {
        PassHolderClient {
            select_timeout: config.select_timeout,
            connection: ConnectionManager::new(
                factory,
                config.endpoint,
                config.max_retries,
                config.retry_interval,
                logger,
            ),
        }
    }

    /// Establishes the connection, applying the configured retry policy.
    pub fn connect(&mut self) -> Result<()> {
        self.connection.connect()
    }

    /// Closes the connection if one is held. Idempotent.
    pub fn disconnect(&mut self) -> bool {
        self.connection.disconnect()
    }

    /// Whether a connection is currently held.
    pub fn is_connected(&self) -> bool {
        self.connection.is_connected()
    }

    /// Places a hold on a pass identifier and returns the service payload.
    pub fn hold(&mut self, pass: &str) -> Result<String> {
        self.request(Command::Hold(pass.to_string()))
    }

    /// Releases a hold by hash and returns the service payload.
    pub fn unhold(&mut self, hash: &str) -> Result<String> {
        self.request(Command::Unhold(hash.to_string()))
    }

    /// Removes a pass by hash and returns the service payload.
    pub fn remove(&mut self, hash: &str) -> Result<String> {
        self.request(Command::Remove(hash.to_string()))
    }

    fn request(&mut self, command: Command) -> Result<String> {
        let frame = command.encode();
        let session = self
            .connection
            .session_mut()
            .ok_or(PassHolderError::NotConnected)?;
        let response = transport::round_trip(session, frame.as_bytes(), self.select_timeout)?;
        protocol::decode(&response)
    }
}

impl Drop for PassHolderClient {
    fn drop(&mut self) {
        self.disconnect();
    }
}
