//! TLS session establishment for the PassHolder connection.

mod connector;
mod identity;
mod stream;

pub use connector::TlsSessionFactory;
pub use identity::TlsIdentity;
pub use stream::TlsSession;
