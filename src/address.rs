//! Address fields: phone numbers in their semi-octet wire form, plus the
//! type-of-address octet (3GPP TS 23.040 section 9.1.2.5).

use std::fmt;

use num_derive::FromPrimitive;
use num_traits::FromPrimitive;

use crate::semi_octet::{decode_semi_address, encode_semi};
use crate::{gsm7, PduError, PduResult};

/// Type-of-number nibble, pre-shifted to its position in the type octet.
#[repr(u8)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, FromPrimitive)]
pub enum TypeOfNumber {
    #[default]
    Unknown = 0x00,
    International = 0x10,
    National = 0x20,
    NetworkSpecific = 0x30,
    Subscriber = 0x40,
    /// Not a phone number at all: GSM 7-bit text naming the sender.
    Alphanumeric = 0x50,
    Abbreviated = 0x60,
}

/// Numbering-plan-identification nibble for E.164, the only plan emitted.
const NPI_E164: u8 = 0x01;

/// An address in either local or international format.
///
/// `number` holds the textual digits, prefixed with `+` for international
/// numbers, or the decoded text for alphanumeric sender addresses.
/// `type_of_number` records what the decoder saw; on emission the type
/// octet is derived from the textual form alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PhoneNumber {
    pub number: String,
    pub type_of_number: TypeOfNumber,
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.number)
    }
}

impl From<&str> for PhoneNumber {
    fn from(number: &str) -> Self {
        let type_of_number = if number.starts_with('+') {
            TypeOfNumber::International
        } else if number.is_empty() {
            TypeOfNumber::Unknown
        } else {
            TypeOfNumber::National
        };
        PhoneNumber {
            number: number.to_owned(),
            type_of_number,
        }
    }
}

impl PhoneNumber {
    pub fn is_empty(&self) -> bool {
        self.number.is_empty()
    }

    /// The type-of-address octet emitted for this number: international for
    /// a leading `+`, national otherwise, numbering plan always E.164.
    pub fn type_byte(&self) -> u8 {
        let ton = if self.number.starts_with('+') {
            TypeOfNumber::International
        } else {
            TypeOfNumber::National
        };
        0x80 | ton as u8 | NPI_E164
    }

    /// The number of digits in the address and its wire octets (the type
    /// octet followed by semi-octet packed digits).
    pub fn pdu(&self) -> PduResult<(usize, Vec<u8>)> {
        let digits: String = self
            .number
            .trim_start_matches('+')
            .chars()
            .filter(char::is_ascii_digit)
            .collect();
        if digits.is_empty() {
            return Err(PduError::InvalidAddress("no digits"));
        }
        if digits.len() > 16 {
            return Err(PduError::IncorrectSize("address length"));
        }
        let number: u64 = digits
            .parse()
            .map_err(|_| PduError::InvalidAddress("not a number"))?;
        let mut octets = Vec::with_capacity(digits.len() / 2 + 2);
        octets.push(self.type_byte());
        octets.extend(encode_semi(&[number]));
        Ok((digits.len(), octets))
    }

    /// Reconstructs an address from its wire octets (type octet plus
    /// semi-octet digits, without the leading length octet).
    pub fn read_from(octets: &[u8]) -> PduResult<PhoneNumber> {
        let type_octet = *octets
            .first()
            .ok_or(PduError::IncorrectSize("address type"))?;
        let ton = type_octet & 0x70;
        match TypeOfNumber::from_u8(ton) {
            Some(TypeOfNumber::Alphanumeric) => Ok(PhoneNumber {
                number: gsm7::decode_7bit(&octets[1..]),
                type_of_number: TypeOfNumber::Alphanumeric,
            }),
            Some(TypeOfNumber::International) => Ok(PhoneNumber {
                number: format!("+{}", decode_semi_address(&octets[1..])),
                type_of_number: TypeOfNumber::International,
            }),
            Some(TypeOfNumber::National) => Ok(PhoneNumber {
                number: decode_semi_address(&octets[1..]),
                type_of_number: TypeOfNumber::National,
            }),
            _ => Err(PduError::UnsupportedTypeOfNumber(ton)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hex::HexData;

    #[test]
    fn reads_international_number() {
        let subject = PhoneNumber::read_from(&HexData::decode("9121436587F9").unwrap()).unwrap();
        assert_eq!(subject.number, "+123456789");
        assert_eq!(subject.type_of_number, TypeOfNumber::International);
        assert_eq!(subject.type_byte(), 0x91);
    }

    #[test]
    fn reads_national_number() {
        let subject = PhoneNumber::read_from(&HexData::decode("A11032547698").unwrap()).unwrap();
        assert_eq!(subject.number, "0123456789");
        assert_eq!(subject.type_of_number, TypeOfNumber::National);
        assert_eq!(subject.type_byte(), 0xA1);
    }

    #[test]
    fn reads_alphanumeric_sender() {
        let subject = PhoneNumber::read_from(&HexData::decode("D061F1985C3603").unwrap()).unwrap();
        assert_eq!(subject.number, "abcdef");
        assert_eq!(subject.type_of_number, TypeOfNumber::Alphanumeric);
        // Emission has no alphanumeric form, so the derived type falls back
        // to national.
        assert_eq!(subject.type_byte(), 0xA1);
    }

    #[test]
    fn rejects_other_types_of_number() {
        for octets in [[0xB1, 0x21], [0xC1, 0x21], [0x81, 0x21], [0xF1, 0x21]] {
            assert!(matches!(
                PhoneNumber::read_from(&octets),
                Err(PduError::UnsupportedTypeOfNumber(_))
            ));
        }
    }

    #[test]
    fn emits_type_octet_and_digits() {
        let (len, octets) = PhoneNumber::from("+79269965690").pdu().unwrap();
        assert_eq!(len, 11);
        assert_eq!(octets, HexData::decode("919762995696F0").unwrap());
    }

    #[test]
    fn rejects_digitless_address() {
        assert_eq!(
            PhoneNumber::from("+").pdu().unwrap_err(),
            PduError::InvalidAddress("no digits")
        );
    }

    #[test]
    fn rejects_overlong_address() {
        assert_eq!(
            PhoneNumber::from("+12345678901234567").pdu().unwrap_err(),
            PduError::IncorrectSize("address length")
        );
    }
}
