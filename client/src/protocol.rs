//! Wire protocol codec.
//!
//! Requests are `<tag>:<payload>` with tag `h`, `u` or `r`. Responses are
//! `s:<data>` on success or `e:<code>:<message>` on failure, one status tag
//! per response.

use crate::error::{PassHolderError, Result};

/// One of the three supported commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Place a hold on a pass identifier.
    Hold(String),
    /// Release a hold by hash.
    Unhold(String),
    /// Remove a pass by hash.
    Remove(String),
}

impl Command {
    /// Encodes the command as a wire frame.
    ///
    /// Payloads are not escaped: a payload containing `:` corrupts the
    /// framing, and keeping it out is the caller's responsibility.
    pub fn encode(&self) -> String {
        match self {
            Command::Hold(pass) => format!("h:{}", pass),
            Command::Unhold(hash) => format!("u:{}", hash),
            Command::Remove(hash) => format!("r:{}", hash),
        }
    }
}

/// Decodes a response frame into its success payload.
///
/// A `s:<data>` frame yields `data` verbatim; any other status must carry
/// `<code>:<message>` and becomes [`PassHolderError::Service`]. Frames that
/// fit neither shape are [`PassHolderError::Protocol`], kept distinct from
/// well-formed service rejections.
pub fn decode(raw: &[u8]) -> Result<String> {
    let text = std::str::from_utf8(raw)
        .map_err(|_| PassHolderError::Protocol("response is not valid UTF-8".to_string()))?;

    let Some((status, rest)) = text.split_once(':') else {
        return Err(PassHolderError::Protocol(format!(
            "no status delimiter in '{}'",
            text
        )));
    };

    if status == "s" {
        return Ok(rest.to_string());
    }

    let Some((code, message)) = rest.split_once(':') else {
        return Err(PassHolderError::Protocol(format!(
            "error response without code delimiter in '{}'",
            text
        )));
    };

    Err(PassHolderError::Service {
        code: code.to_string(),
        message: message.to_string(),
    })
}
