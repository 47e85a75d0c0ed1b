//! Output that may arrive either as raw bytes or as text.
//!
//! Subprocess pipes produce bytes while callers usually hand over strings;
//! `Payload` keeps both forms behind one type with an explicit decode step.

use crate::error::Result;
use std::borrow::Cow;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    Bytes(Vec<u8>),
    Text(String),
}

impl Payload {
    /// Decode to text. Bytes must be valid UTF-8; text is returned unchanged.
    pub fn into_text(self) -> Result<String> {
        match self {
            Payload::Bytes(bytes) => Ok(String::from_utf8(bytes)?),
            Payload::Text(text) => Ok(text),
        }
    }

    /// Decode to text, replacing invalid UTF-8 sequences.
    pub fn to_text_lossy(&self) -> Cow<'_, str> {
        match self {
            Payload::Bytes(bytes) => String::from_utf8_lossy(bytes),
            Payload::Text(text) => Cow::Borrowed(text),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Payload::Bytes(bytes) => bytes,
            Payload::Text(text) => text.as_bytes(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }
}

impl Default for Payload {
    fn default() -> Self {
        Payload::Bytes(Vec::new())
    }
}

impl From<Vec<u8>> for Payload {
    fn from(bytes: Vec<u8>) -> Self {
        Payload::Bytes(bytes)
    }
}

impl From<&[u8]> for Payload {
    fn from(bytes: &[u8]) -> Self {
        Payload::Bytes(bytes.to_vec())
    }
}

impl From<String> for Payload {
    fn from(text: String) -> Self {
        Payload::Text(text)
    }
}

impl From<&str> for Payload {
    fn from(text: &str) -> Self {
        Payload::Text(text.to_string())
    }
}

/// Decode bytes as UTF-8, or pass text through unchanged.
pub fn decode(value: impl Into<Payload>) -> Result<String> {
    value.into().into_text()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BenchError;

    #[test]
    fn test_decode_bytes_and_text() {
        assert_eq!(decode(b"12345\n".to_vec()).unwrap(), "12345\n");
        assert_eq!(decode("already text").unwrap(), "already text");
        assert_eq!(decode("grüße".as_bytes()).unwrap(), "grüße");
    }

    #[test]
    fn test_decode_rejects_invalid_utf8() {
        let result = decode(vec![b'o', b'k', 0xc3]);
        assert!(matches!(result, Err(BenchError::Decode(_))));
    }

    #[test]
    fn test_lossy_and_empty() {
        let payload = Payload::Bytes(vec![b'a', 0xff]);
        assert_eq!(payload.to_text_lossy(), "a\u{fffd}");
        assert!(Payload::default().is_empty());
        assert!(!Payload::from("x").is_empty());
    }
}
