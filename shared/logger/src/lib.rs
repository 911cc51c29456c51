//! Thread-safe asynchronous logging library.
//!
//! Messages are queued through a channel to a dedicated writer thread, so
//! callers never block on file I/O. Loggers are cheap to clone and clones
//! share the same writer.

pub mod error;
mod level;
mod logger;
mod message;
mod writer;

pub use error::{LoggingError, Result};
pub use level::LogLevel;
pub use logger::Logger;
