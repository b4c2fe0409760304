//! Encoding and decoding of SMS messages in PDU format, as described by
//! 3GPP TS 23.040.
//!
//! The crate covers the three TPDU variants exchanged between a GSM modem
//! and the network (SMS-DELIVER, SMS-SUBMIT and SMS-STATUS-REPORT) together
//! with everything those frames are built out of: the GSM TS 03.38 7-bit
//! alphabet with its single-shift extension table, UCS-2 text, semi-octet
//! packed addresses and timestamps, and relative validity periods.
//!
//! The main entry points are [`Message::encode`] and [`Message::decode`],
//! which convert between the high-level [`Message`] record and the raw PDU
//! octets (SMSC prefix included) that an AT modem exchanges as hex over
//! `AT+CMGS` / `+CMT`. The lower layers ([`gsm7`], [`ucs2`], [`semi_octet`],
//! and friends) are usable on their own.
//!
//! Everything here is pure: no I/O, no shared state, and decoders never
//! alias their input.

use thiserror::Error;

pub mod address;
pub mod gsm7;
pub mod hex;
pub mod semi_octet;
pub mod status;
pub mod timestamp;
pub mod ucs2;
pub mod udh;
pub mod validity_period;

mod message;
mod reader;
mod tpdu;

pub use crate::address::{PhoneNumber, TypeOfNumber};
pub use crate::message::{DecodeError, Encoding, Message, MessageType};
pub use crate::status::{Status, StatusCategory};
pub use crate::timestamp::Timestamp;
pub use crate::udh::UserDataHeader;
pub use crate::validity_period::{
    EnhancedValidityPeriod, EnhancedVpFormat, RelativeValidityPeriod, ValidityPeriodFormat,
};

pub type PduResult<T> = Result<T, PduError>;

/// Every way a PDU can fail to encode or decode.
///
/// Errors are surfaced to the caller unchanged; the codec never recovers
/// internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PduError {
    /// The data coding scheme octet selects an encoding this codec does not
    /// speak (anything other than the 7-bit family and UCS-2).
    #[error("unsupported data coding scheme 0x{0:02X}")]
    UnknownEncoding(u8),
    /// The message type indicator selects a TPDU variant that is not
    /// implemented (SMS-COMMAND and the report variants).
    #[error("unsupported message type indicator 0x{0:02X}")]
    UnknownMessageType(u8),
    /// A declared length exceeds its bound, or a fixed-width field cannot
    /// be read in full.
    #[error("decoded incorrect size of field: {0}")]
    IncorrectSize(&'static str),
    /// SMS-SUBMIT carries an absolute or enhanced validity period, which
    /// this codec does not encode or decode at the message level.
    #[error("non-relative validity period support is not implemented")]
    NonRelative,
    /// The declared user data header length is inconsistent with the user
    /// data, or too short to hold a concatenation element.
    #[error("incorrect user data header length")]
    IncorrectUserDataHeaderLength,
    /// The address type octet carries a type-of-number other than
    /// international, national or alphanumeric.
    #[error("unsupported type of number 0x{0:02X}")]
    UnsupportedTypeOfNumber(u8),
    /// An address has no decimal digits, or more than fit an address field.
    #[error("invalid address: {0}")]
    InvalidAddress(&'static str),
    /// The enhanced validity period has its extension bit set.
    #[error("long enhanced validity period is not supported")]
    LongEnhancedVpNotSupported,
    /// The enhanced validity period has non-zero reserved bits (5..3).
    #[error("unknown reserved bits in enhanced validity period")]
    UnknownEnhancedVpReservedBits,
    /// The enhanced validity period sub-format is unrecognized.
    #[error("unknown validity period format 0x{0:02X}")]
    UnknownVpf(u8),
    /// A hex string has an odd number of characters.
    #[error("parse octets: uneven length of string")]
    UnevenLength,
    /// A hex string contains a non-hex character.
    #[error("parse octets: met a non-hex rune in string")]
    Unexpected,
    /// A UCS-2 payload has an odd number of octets.
    #[error("decode ucs2: uneven number of octets")]
    UnevenNumber,
    /// A UCS-2 payload is empty, or skipping its user data header leaves
    /// no text.
    #[error("decode ucs2: incorrect data length")]
    IncorrectDataLength,
    /// The decoded semi-octets do not denote a valid calendar date.
    #[error("timestamp does not denote a valid calendar date")]
    InvalidTimestamp,
}
