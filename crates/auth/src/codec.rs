//! Reversible obfuscation for secrets kept in the config file.
//!
//! This is plain base64 over the UTF-8 bytes. Anyone holding the file can
//! recover the original text; it only keeps credentials from sitting in the
//! file verbatim.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Stored value is not valid base64: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    #[error("Stored value is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

/// Obfuscate `text` for storage.
pub fn encode(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

/// Recover text previously produced by [`encode`].
pub fn decode(token: &str) -> Result<String, CodecError> {
    let bytes = STANDARD.decode(token.trim())?;
    Ok(String::from_utf8(bytes)?)
}
