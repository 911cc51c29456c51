//! One request/response cycle over an established session.

use std::io::ErrorKind;
use std::time::Duration;

use crate::error::{PassHolderError, Result};
use crate::session::Session;

/// Sends `payload` and waits up to `select_timeout` for the response.
///
/// The write is a single unbuffered send: anything short of the full
/// payload is a [`PassHolderError::Write`] with both counts, never a
/// continuation write. The read is one-shot: the bytes available when the
/// session first reports readable are the whole response (the wire
/// protocol has no length prefix or terminator), and bytes arriving after
/// that event belong to no response.
pub fn round_trip(
    session: &mut dyn Session,
    payload: &[u8],
    select_timeout: Duration,
) -> Result<Vec<u8>> {
    if payload.is_empty() {
        return Err(PassHolderError::InvalidPayload);
    }

    let expected = payload.len();
    // A failed write or flush is reported as zero bytes written.
    let written = session.write(payload).unwrap_or(0);
    if written != expected {
        return Err(PassHolderError::Write { written, expected });
    }
    if session.flush().is_err() {
        return Err(PassHolderError::Write {
            written: 0,
            expected,
        });
    }

    match session.wait_readable(select_timeout) {
        Ok(true) => {}
        Ok(false) => return Err(PassHolderError::Timeout),
        Err(err) => return Err(PassHolderError::Wait(err)),
    }

    // Drain everything currently available as the full response.
    let mut response = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        match session.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => response.extend_from_slice(&chunk[..n]),
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(_) => break,
        }
    }

    Ok(response)
}
