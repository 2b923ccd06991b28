//! Purpose: UTF-16 transcoding for files written by UTF-16-producing tools.
//! Exports: `decode`, `encode`, `Utf16Error`.
//! Role: The only place byte-order marks and code-unit pairing are interpreted.
//! Invariants: `FF FE` selects little-endian, `FE FF` big-endian; no mark means little-endian.
//! Invariants: The byte-order mark never reaches the decoded text.
use std::error::Error as StdError;
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Utf16Error {
    OddLength { len: usize },
    UnpairedSurrogate,
}

impl fmt::Display for Utf16Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Utf16Error::OddLength { len } => {
                write!(
                    f,
                    "byte length {len} is not a whole number of UTF-16 code units"
                )
            }
            Utf16Error::UnpairedSurrogate => write!(f, "unpaired surrogate in UTF-16 data"),
        }
    }
}

impl StdError for Utf16Error {}

pub fn decode(bytes: &[u8]) -> Result<String, Utf16Error> {
    let (body, big_endian) = match bytes {
        [0xff, 0xfe, rest @ ..] => (rest, false),
        [0xfe, 0xff, rest @ ..] => (rest, true),
        _ => (bytes, false),
    };
    if body.len() % 2 != 0 {
        return Err(Utf16Error::OddLength { len: bytes.len() });
    }
    let units: Vec<u16> = body
        .chunks_exact(2)
        .map(|pair| {
            if big_endian {
                u16::from_be_bytes([pair[0], pair[1]])
            } else {
                u16::from_le_bytes([pair[0], pair[1]])
            }
        })
        .collect();
    String::from_utf16(&units).map_err(|_| Utf16Error::UnpairedSurrogate)
}

/// Little-endian with a leading byte-order mark, the layout `decode` reverses.
pub fn encode(text: &str) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(2 + text.len() * 2);
    bytes.extend_from_slice(&[0xff, 0xfe]);
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    bytes
}
