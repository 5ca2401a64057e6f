//! Incremental UTF-8 decoding of network chunks.

use crate::error::StreamError;

/// Decodes a byte stream chunk by chunk.
///
/// A multi-byte character split across chunks is held back (at most 3
/// bytes) until the rest arrives. Bytes that can never form valid UTF-8
/// are a terminal [`StreamError::Decode`].
#[derive(Debug, Default)]
pub struct Utf8Decoder {
    pending: Vec<u8>,
}

impl Utf8Decoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode `chunk`, prefixed by any bytes held back from the last call.
    pub fn decode(&mut self, chunk: &[u8]) -> Result<String, StreamError> {
        let mut bytes = std::mem::take(&mut self.pending);
        bytes.extend_from_slice(chunk);

        let checked = std::str::from_utf8(&bytes).map(|_| ());
        match checked {
            Ok(()) => String::from_utf8(bytes).map_err(decode_error),
            Err(e) if e.error_len().is_some() => Err(StreamError::Decode {
                message: e.to_string(),
            }),
            Err(e) => {
                self.pending = bytes.split_off(e.valid_up_to());
                String::from_utf8(bytes).map_err(decode_error)
            }
        }
    }

    /// Bytes waiting for the rest of their character.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Drop held-back bytes at end of stream, returning how many there were.
    pub fn finish(&mut self) -> usize {
        std::mem::take(&mut self.pending).len()
    }
}

fn decode_error(err: std::string::FromUtf8Error) -> StreamError {
    StreamError::Decode {
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_passthrough() {
        let mut decoder = Utf8Decoder::new();
        assert_eq!(decoder.decode(b"data: {}\n").unwrap(), "data: {}\n");
        assert_eq!(decoder.pending_len(), 0);
    }

    #[test]
    fn test_split_multibyte_character() {
        let text = "ção";
        let bytes = text.as_bytes();
        let mut decoder = Utf8Decoder::new();

        // 'ç' is two bytes; split inside it
        let first = decoder.decode(&bytes[..1]).unwrap();
        assert_eq!(first, "");
        assert_eq!(decoder.pending_len(), 1);

        let rest = decoder.decode(&bytes[1..]).unwrap();
        assert_eq!(rest, "ção");
        assert_eq!(decoder.pending_len(), 0);
    }

    #[test]
    fn test_four_byte_character_byte_by_byte() {
        let bytes = "☯️🌙".as_bytes();
        let mut decoder = Utf8Decoder::new();
        let mut out = String::new();
        for b in bytes {
            out.push_str(&decoder.decode(std::slice::from_ref(b)).unwrap());
        }
        assert_eq!(out, "☯️🌙");
    }

    #[test]
    fn test_invalid_bytes_fail() {
        let mut decoder = Utf8Decoder::new();
        let err = decoder.decode(&[b'a', 0xFF, b'b']).unwrap_err();
        assert!(matches!(err, StreamError::Decode { .. }));
    }

    #[test]
    fn test_finish_drops_incomplete_tail() {
        let mut decoder = Utf8Decoder::new();
        decoder.decode(&"é".as_bytes()[..1]).unwrap();
        assert_eq!(decoder.finish(), 1);
        assert_eq!(decoder.pending_len(), 0);
    }
}
