//! Uppercase hex strings, the form in which PDUs travel over the AT
//! protocol.

use std::fmt;

use crate::{PduError, PduResult};

/// Wraps an octet slice for display as an uppercase hex string, like
/// `DEADBEEF`, without a leading `0x`.
#[derive(Debug)]
pub struct HexData<'a>(pub &'a [u8]);

impl<'a> fmt::Display for HexData<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for b in self.0.iter() {
            write!(f, "{:02X}", b)?;
        }
        Ok(())
    }
}

impl<'a> HexData<'a> {
    /// Parses a hex string of even length into octets.
    pub fn decode(data: &str) -> PduResult<Vec<u8>> {
        if data.len() % 2 != 0 {
            return Err(PduError::UnevenLength);
        }
        data.as_bytes()
            .chunks(2)
            .map(|frame| {
                std::str::from_utf8(frame)
                    .ok()
                    .and_then(|x| u8::from_str_radix(x, 16).ok())
                    .ok_or(PduError::Unexpected)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_even_hex() {
        assert_eq!(
            HexData::decode("07919761989901F0").unwrap(),
            vec![0x07, 0x91, 0x97, 0x61, 0x98, 0x99, 0x01, 0xF0]
        );
    }

    #[test]
    fn rejects_uneven_length() {
        assert_eq!(HexData::decode("ABC").unwrap_err(), PduError::UnevenLength);
    }

    #[test]
    fn rejects_non_hex_rune() {
        assert_eq!(HexData::decode("GG").unwrap_err(), PduError::Unexpected);
        assert_eq!(HexData::decode("ЯЯ").unwrap_err(), PduError::Unexpected);
    }

    #[test]
    fn displays_uppercase() {
        assert_eq!(HexData(&[0xDE, 0xAD, 0xBE, 0xEF]).to_string(), "DEADBEEF");
        assert_eq!(HexData(&[]).to_string(), "");
    }
}
