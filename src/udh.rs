//! The user data header carried in front of the text when the UDHI flag is
//! set, reduced to the concatenation information element.

use crate::{PduError, PduResult};

/// Concatenation header of a multipart message: which part this is, out of
/// how many, correlated by the reference tag.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct UserDataHeader {
    /// Reference number shared by every part of the concatenated message.
    pub tag: u8,
    /// Total number of parts.
    pub total_number: u8,
    /// One-based position of this part.
    pub sequence: u8,
}

impl UserDataHeader {
    /// Reads the concatenation element out of user data that starts with a
    /// header (the UDH length octet included).
    pub fn read_from(octets: &[u8]) -> PduResult<UserDataHeader> {
        let header_len = match octets.first() {
            Some(&len) => usize::from(len) + 1,
            None => return Err(PduError::IncorrectUserDataHeaderLength),
        };
        // The header must leave text behind it and be long enough to hold a
        // concatenation element.
        if octets.len() <= header_len || header_len <= 5 {
            return Err(PduError::IncorrectUserDataHeaderLength);
        }
        Ok(UserDataHeader {
            tag: octets[3],
            total_number: octets[4],
            sequence: octets[5],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_concatenation_element() {
        // 05 | IEI 00, IE len 03, ref 2A, total 02, seq 01 | text...
        let data = [0x05, 0x00, 0x03, 0x2A, 0x02, 0x01, 0x00, 0x48];
        let udh = UserDataHeader::read_from(&data).unwrap();
        assert_eq!(udh.tag, 0x2A);
        assert_eq!(udh.total_number, 2);
        assert_eq!(udh.sequence, 1);
    }

    #[test]
    fn rejects_header_without_text() {
        let data = [0x05, 0x00, 0x03, 0x2A, 0x02, 0x01];
        assert_eq!(
            UserDataHeader::read_from(&data).unwrap_err(),
            PduError::IncorrectUserDataHeaderLength
        );
    }

    #[test]
    fn rejects_header_too_short_for_concatenation() {
        let data = [0x03, 0x00, 0x01, 0x2A, 0x00, 0x48];
        assert_eq!(
            UserDataHeader::read_from(&data).unwrap_err(),
            PduError::IncorrectUserDataHeaderLength
        );
        assert_eq!(
            UserDataHeader::read_from(&[]).unwrap_err(),
            PduError::IncorrectUserDataHeaderLength
        );
    }
}
