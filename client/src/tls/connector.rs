//! TLS session factory: resolve, connect, handshake.

use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

use native_tls::TlsConnector;

use super::identity::TlsIdentity;
use super::stream::TlsSession;
use crate::error::{PassHolderError, Result};
use crate::session::{Session, SessionFactory};

/// Builds TLS sessions to a fixed endpoint with a fixed identity.
pub struct TlsSessionFactory {
    endpoint: String,
    identity: TlsIdentity,
    connect_timeout: Duration,
}

impl TlsSessionFactory {
    pub fn new(endpoint: String, identity: TlsIdentity, connect_timeout: Duration) -> Self {
        TlsSessionFactory {
            endpoint,
            identity,
            connect_timeout,
        }
    }

    fn connection_error(&self, reason: impl ToString) -> PassHolderError {
        PassHolderError::Connection {
            endpoint: self.endpoint.clone(),
            reason: reason.to_string(),
        }
    }

    fn connect_tls(&self) -> Result<TlsSession> {
        let addr = self
            .endpoint
            .to_socket_addrs()
            .map_err(|e| self.connection_error(e))?
            .next()
            .ok_or_else(|| self.connection_error("no addresses resolved"))?;

        let stream = TcpStream::connect_timeout(&addr, self.connect_timeout)
            .map_err(|e| self.connection_error(e))?;

        let mut builder = TlsConnector::builder();
        builder.identity(self.identity.load_identity()?);
        match self.identity.load_root_certificate()? {
            Some(certificate) => {
                builder.add_root_certificate(certificate);
            }
            None => {
                // No trust root configured: peer verification is disabled.
                builder.danger_accept_invalid_certs(true);
                builder.danger_accept_invalid_hostnames(true);
            }
        }
        let connector = builder.build().map_err(|e| self.connection_error(e))?;

        // SNI hostname is the endpoint without the port.
        let hostname = self.endpoint.split(':').next().unwrap_or(&self.endpoint);

        let tls_stream = connector
            .connect(hostname, stream)
            .map_err(|e| self.connection_error(e))?;

        TlsSession::new(tls_stream).map_err(|e| self.connection_error(e))
    }
}

impl SessionFactory for TlsSessionFactory {
    fn connect(&self) -> Result<Box<dyn Session>> {
        Ok(Box::new(self.connect_tls()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_unreachable_endpoint_is_connection_error() {
        let dir = tempdir().unwrap();
        let cert = dir.path().join("provider.p12");
        fs::write(&cert, b"not-really-pkcs12").unwrap();
        let identity = TlsIdentity::new(&cert, "secret").unwrap();

        // Reserved TEST-NET-1 address, nothing listens there.
        let factory = TlsSessionFactory::new(
            "192.0.2.1:9443".to_string(),
            identity,
            Duration::from_millis(50),
        );

        match factory.connect() {
            Err(PassHolderError::Connection { endpoint, .. }) => {
                assert_eq!(endpoint, "192.0.2.1:9443");
            }
            other => panic!("Expected Connection error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_unresolvable_endpoint_is_connection_error() {
        let dir = tempdir().unwrap();
        let cert = dir.path().join("provider.p12");
        fs::write(&cert, b"not-really-pkcs12").unwrap();
        let identity = TlsIdentity::new(&cert, "secret").unwrap();

        let factory = TlsSessionFactory::new(
            "invalid.invalid:9443".to_string(),
            identity,
            Duration::from_millis(50),
        );

        assert!(matches!(
            factory.connect(),
            Err(PassHolderError::Connection { .. })
        ));
    }
}
