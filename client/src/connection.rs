//! Connection lifecycle: establish with bounded retry, hold, tear down.

use std::time::Duration;

use logging::Logger;

use crate::error::Result;
use crate::session::{Session, SessionFactory};

/// Owns the single logical connection to the service.
///
/// At most one session exists at a time. The transport borrows it per call
/// through [`ConnectionManager::session_mut`] and never retains it.
pub struct ConnectionManager {
    factory: Box<dyn SessionFactory>,
    endpoint: String,
    max_retries: u32,
    retry_interval: Duration,
    logger: Logger,
    session: Option<Box<dyn Session>>,
}

impl ConnectionManager {
    pub fn new(
        factory: Box<dyn SessionFactory>,
        endpoint: String,
        max_retries: u32,
        retry_interval: Duration,
        logger: Logger,
    ) -> Self {
        ConnectionManager {
            factory,
            endpoint,
            max_retries,
            retry_interval,
            logger,
            session: None,
        }
    }

    /// Establishes the connection, retrying up to `max_retries` additional
    /// times after the first failure with a fixed delay in between.
    ///
    /// Each failure is logged before the next attempt; the retry notice is
    /// not emitted after the final failure, whose error is returned as-is.
    pub fn connect(&mut self) -> Result<()> {
        let mut retries = 0;
        loop {
            self.logger.info(&format!("Trying {}...", self.endpoint));
            match self.factory.connect() {
                Ok(session) => {
                    self.session = Some(session);
                    self.logger
                        .info(&format!("Connected to {}.", self.endpoint));
                    return Ok(());
                }
                Err(err) => {
                    self.logger.error(&err.to_string());
                    if retries >= self.max_retries {
                        return Err(err);
                    }
                    retries += 1;
                    self.logger.info(&format!(
                        "Retrying to connect ({}/{})...",
                        retries, self.max_retries
                    ));
                    if !self.retry_interval.is_zero() {
                        std::thread::sleep(self.retry_interval);
                    }
                }
            }
        }
    }

    /// Closes the held session, if any.
    ///
    /// Returns whether a session was actually closed; calling this with no
    /// session held is a no-op returning false, never an error.
    pub fn disconnect(&mut self) -> bool {
        match self.session.take() {
            Some(mut session) => {
                let _ = session.close();
                self.logger.info("Disconnected.");
                true
            }
            None => false,
        }
    }

    /// Whether a session is currently held.
    pub fn is_connected(&self) -> bool {
        self.session.is_some()
    }

    /// Borrows the held session for one transport call.
    pub fn session_mut(&mut self) -> Option<&mut (dyn Session + 'static)> {
        self.session.as_deref_mut()
    }
}
