//! UCS-2 user data: UTF-16 code units on the wire, big-endian.

use std::char::REPLACEMENT_CHARACTER;

use crate::{PduError, PduResult};

/// Encodes text into big-endian UTF-16 octets.
pub fn encode_ucs2(text: &str) -> Vec<u8> {
    let mut octets = Vec::with_capacity(text.len() * 2);
    for unit in text.encode_utf16() {
        octets.extend_from_slice(&unit.to_be_bytes());
    }
    octets
}

/// Decodes big-endian UTF-16 octets into text. Lone surrogates become
/// U+FFFD.
///
/// With `starts_with_header` the payload opens with a user data header (a
/// length octet followed by that many header octets), which is skipped.
pub fn decode_ucs2(octets: &[u8], starts_with_header: bool) -> PduResult<String> {
    let mut data = octets;
    if starts_with_header {
        let skip = match data.first() {
            Some(&len) => usize::from(len) + 1,
            None => return Err(PduError::IncorrectDataLength),
        };
        if data.len() <= skip {
            return Err(PduError::IncorrectDataLength);
        }
        data = &data[skip..];
    }
    if data.is_empty() {
        return Err(PduError::IncorrectDataLength);
    }
    if data.len() % 2 != 0 {
        return Err(PduError::UnevenNumber);
    }
    let units = data
        .chunks_exact(2)
        .map(|pair| u16::from_be_bytes([pair[0], pair[1]]));
    Ok(char::decode_utf16(units)
        .map(|r| r.unwrap_or(REPLACEMENT_CHARACTER))
        .collect())
}
