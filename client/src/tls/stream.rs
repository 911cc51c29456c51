//! TLS session wrapper with non-blocking reads and a readiness wait.

use std::io::{self, ErrorKind, Read, Write};
use std::net::{Shutdown, TcpStream};
use std::time::{Duration, Instant};

use crate::session::Session;

/// Poll step for the readiness wait.
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// TLS-wrapped TCP stream using native-tls.
///
/// The underlying socket runs non-blocking with `TCP_NODELAY`, so writes go
/// out immediately and reads must be gated on [`Session::wait_readable`].
pub struct TlsSession {
    stream: native_tls::TlsStream<TcpStream>,
}

impl TlsSession {
    /// Wraps a completed handshake and switches the socket to non-blocking
    /// unbuffered mode.
    pub(crate) fn new(stream: native_tls::TlsStream<TcpStream>) -> io::Result<Self> {
        stream.get_ref().set_nodelay(true)?;
        stream.get_ref().set_nonblocking(true)?;
        Ok(TlsSession { stream })
    }

    /// Get reference to the underlying TCP stream.
    pub fn get_ref(&self) -> &TcpStream {
        self.stream.get_ref()
    }
}

impl Read for TlsSession {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.stream.read(buf)
    }
}

impl Write for TlsSession {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.stream.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.stream.flush()
    }
}

impl Session for TlsSession {
    fn wait_readable(&mut self, timeout: Duration) -> io::Result<bool> {
        let deadline = Instant::now() + timeout;
        let mut probe = [0u8; 1];

        loop {
            match self.stream.get_ref().peek(&mut probe) {
                // Data (or an observable EOF) is waiting on the socket.
                Ok(_) => return Ok(true),
                Err(e) if e.kind() == ErrorKind::WouldBlock => {
                    let now = Instant::now();
                    if now >= deadline {
                        return Ok(false);
                    }
                    std::thread::sleep(POLL_INTERVAL.min(deadline - now));
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    fn close(&mut self) -> io::Result<()> {
        // close_notify is best effort on a non-blocking socket.
        let _ = self.stream.shutdown();
        match self.stream.get_ref().shutdown(Shutdown::Both) {
            Err(e) if e.kind() == ErrorKind::NotConnected => Ok(()),
            other => other,
        }
    }
}
