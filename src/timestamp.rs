//! Service-centre timestamps (TP-SCTS), 3GPP TS 23.040 section 9.2.3.11.
//!
//! Seven octets of swapped BCD: year, month, day, hour, minute, second and
//! a time zone expressed in quarters of an hour between local time and GMT.
//! Bit 3 of the zone octet as transmitted is the algebraic sign of that
//! difference (0: positive, 1: negative).

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, TimeZone, Timelike, Utc};

use crate::semi_octet::{decode_bcd2, encode_bcd2, swap};
use crate::{PduError, PduResult};

/// Width of the encoded timestamp.
pub const TIMESTAMP_LEN: usize = 7;

/// Sign bit of the zone octet, in transmitted (swapped) position.
const TZ_NEGATIVE: u8 = 0x08;

/// A message timestamp: an instant together with the fixed quarter-hour
/// offset it was transmitted in.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Timestamp(pub DateTime<FixedOffset>);

impl Default for Timestamp {
    fn default() -> Self {
        Timestamp(DateTime::<Utc>::UNIX_EPOCH.fixed_offset())
    }
}

impl From<DateTime<FixedOffset>> for Timestamp {
    fn from(date: DateTime<FixedOffset>) -> Self {
        Timestamp(date)
    }
}

impl Timestamp {
    /// Serializes into the seven semi-octet encoded bytes.
    pub fn pdu(&self) -> [u8; TIMESTAMP_LEN] {
        let date = self.0;
        let offset_seconds = date.offset().local_minus_utc();
        let quarters = (offset_seconds.unsigned_abs() / 900) as u8;

        let mut octets = [
            /* YY */ swap(encode_bcd2(date.year().rem_euclid(100) as u8)),
            /* MM */ swap(encode_bcd2(date.month() as u8)),
            /* DD */ swap(encode_bcd2(date.day() as u8)),
            /* hh */ swap(encode_bcd2(date.hour() as u8)),
            /* mm */ swap(encode_bcd2(date.minute() as u8)),
            /* ss */ swap(encode_bcd2(date.second() as u8)),
            /* zz */ swap(encode_bcd2(quarters)),
        ];
        if offset_seconds < 0 {
            octets[6] |= TZ_NEGATIVE;
        }
        octets
    }

    /// Reads a semi-octet encoded timestamp.
    ///
    /// Two-digit years resolve within the current millennium, so `99`
    /// decodes as 2099 today. The result carries the transmitted offset:
    /// its wall-clock reading equals the decoded calendar values.
    pub fn read_from(octets: &[u8]) -> PduResult<Timestamp> {
        if octets.len() < TIMESTAMP_LEN {
            return Err(PduError::IncorrectSize("timestamp"));
        }
        let millennium = (Utc::now().year() / 1000) * 1000;
        let year = millennium + i32::from(decode_bcd2(swap(octets[0])));
        let month = u32::from(decode_bcd2(swap(octets[1])));
        let day = u32::from(decode_bcd2(swap(octets[2])));
        let hour = u32::from(decode_bcd2(swap(octets[3])));
        let minute = u32::from(decode_bcd2(swap(octets[4])));
        let second = u32::from(decode_bcd2(swap(octets[5])));

        let negative = octets[6] & TZ_NEGATIVE != 0;
        let quarters = i32::from(decode_bcd2(swap(octets[6] & !TZ_NEGATIVE)));
        let mut offset_seconds = quarters * 15 * 60;
        if negative {
            offset_seconds = -offset_seconds;
        }

        let offset =
            FixedOffset::east_opt(offset_seconds).ok_or(PduError::InvalidTimestamp)?;
        let local = NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(hour, minute, second))
            .ok_or(PduError::InvalidTimestamp)?;
        let date = offset
            .from_local_datetime(&local)
            .single()
            .ok_or(PduError::InvalidTimestamp)?;
        Ok(Timestamp(date))
    }
}
