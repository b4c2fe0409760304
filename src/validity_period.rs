//! Validity periods: how long the service centre should keep trying to
//! deliver an SMS-SUBMIT (3GPP TS 23.040 section 9.2.3.12).

use std::time::Duration;

use num_derive::FromPrimitive;

use crate::{PduError, PduResult};

const MINUTE: u64 = 60;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;
const WEEK: u64 = 7 * DAY;

/// Format of the validity period field, bits 4..3 of the SMS-SUBMIT header.
#[repr(u8)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, FromPrimitive)]
pub enum ValidityPeriodFormat {
    #[default]
    FieldNotPresent = 0x00,
    Enhanced = 0x01,
    Relative = 0x02,
    Absolute = 0x03,
}

/// Relative validity period: a duration quantized into one octet over four
/// piecewise ranges (5-minute steps up to 12 hours, then half hours, days,
/// weeks).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct RelativeValidityPeriod(pub Duration);

impl From<Duration> for RelativeValidityPeriod {
    fn from(duration: Duration) -> Self {
        RelativeValidityPeriod(duration)
    }
}

impl RelativeValidityPeriod {
    /// The one-octet representation, saturating at 63 weeks.
    pub fn octet(&self) -> u8 {
        let secs = self.0.as_secs();
        if secs < 5 * MINUTE {
            0x00
        } else if secs < 12 * HOUR {
            (secs / (5 * MINUTE)) as u8
        } else if secs < 24 * HOUR {
            ((secs - 12 * HOUR) / (30 * MINUTE) + 143) as u8
        } else if secs < 744 * HOUR {
            (secs / DAY + 166) as u8
        } else {
            let weeks = secs / WEEK;
            if weeks > 62 {
                0xFF
            } else {
                (weeks + 192) as u8
            }
        }
    }

    /// The piecewise inverse of [`octet`](Self::octet).
    pub fn read_from(octet: u8) -> Self {
        let n = u64::from(octet);
        let secs = match octet {
            0..=143 => 5 * MINUTE * n,
            144..=167 => 12 * HOUR + 30 * MINUTE * (n - 143),
            168..=196 => DAY * (n - 166),
            _ => WEEK * (n - 192),
        };
        RelativeValidityPeriod(Duration::from_secs(secs))
    }
}

/// Width of the encoded enhanced validity period.
pub const ENHANCED_VP_LEN: usize = 7;

const ENHANCED_EXTENSION: u8 = 0b1000_0000;
const ENHANCED_SINGLE_SHOT: u8 = 0b0100_0000;
const ENHANCED_RESERVED: u8 = 0b0011_1000;
const ENHANCED_FORMAT: u8 = 0b0000_0111;

/// Sub-format of an enhanced validity period, bits 2..0 of its first octet.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum EnhancedVpFormat {
    #[default]
    NotPresent,
    /// The second octet is a relative validity period octet.
    Relative(RelativeValidityPeriod),
    /// The second octet is a plain seconds count in 1..=255.
    RelativeInteger(u8),
}

/// Enhanced validity period: seven octets, of which the first carries an
/// extension bit, a single-shot flag and the sub-format. Only the short
/// (extension bit clear) relative sub-formats are supported.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct EnhancedValidityPeriod {
    pub single_shot: bool,
    pub format: EnhancedVpFormat,
}

impl EnhancedValidityPeriod {
    /// Serializes into seven octets; the trailing reserved octets are zero.
    pub fn pdu(&self) -> [u8; ENHANCED_VP_LEN] {
        let mut octets = [0u8; ENHANCED_VP_LEN];
        if self.single_shot {
            octets[0] |= ENHANCED_SINGLE_SHOT;
        }
        match self.format {
            EnhancedVpFormat::NotPresent => {}
            EnhancedVpFormat::Relative(vp) => {
                octets[0] |= 0x01;
                octets[1] = vp.octet();
            }
            EnhancedVpFormat::RelativeInteger(seconds) => {
                octets[0] |= 0x02;
                octets[1] = seconds;
            }
        }
        octets
    }

    /// Reads an enhanced validity period from its seven octets.
    pub fn read_from(octets: &[u8]) -> PduResult<Self> {
        if octets.len() < ENHANCED_VP_LEN {
            return Err(PduError::IncorrectSize("enhanced validity period"));
        }
        let first = octets[0];
        if first & ENHANCED_EXTENSION != 0 {
            return Err(PduError::LongEnhancedVpNotSupported);
        }
        if first & ENHANCED_RESERVED != 0 {
            return Err(PduError::UnknownEnhancedVpReservedBits);
        }
        let single_shot = first & ENHANCED_SINGLE_SHOT != 0;
        let format = match first & ENHANCED_FORMAT {
            0x00 => EnhancedVpFormat::NotPresent,
            0x01 => EnhancedVpFormat::Relative(RelativeValidityPeriod::read_from(octets[1])),
            0x02 => EnhancedVpFormat::RelativeInteger(octets[1]),
            other => return Err(PduError::UnknownVpf(other)),
        };
        Ok(EnhancedValidityPeriod {
            single_shot,
            format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn relative(secs: u64) -> RelativeValidityPeriod {
        RelativeValidityPeriod(Duration::from_secs(secs))
    }

    #[test]
    fn encodes_range_boundaries() {
        assert_eq!(relative(0).octet(), 0x00);
        assert_eq!(relative(5 * MINUTE).octet(), 0x01);
        assert_eq!(relative(12 * HOUR + 30 * MINUTE).octet(), 0x90);
        assert_eq!(relative(2 * DAY).octet(), 0xA8);
        assert_eq!(relative(4 * DAY).octet(), 0xAA);
        assert_eq!(relative(62 * WEEK).octet(), 0xFE);
        assert_eq!(relative(80 * WEEK).octet(), 0xFF);
    }

    #[test]
    fn decodes_each_range() {
        assert_eq!(RelativeValidityPeriod::read_from(0x00), relative(0));
        assert_eq!(RelativeValidityPeriod::read_from(0x01), relative(5 * MINUTE));
        assert_eq!(RelativeValidityPeriod::read_from(143), relative(11 * HOUR + 55 * MINUTE));
        assert_eq!(RelativeValidityPeriod::read_from(144), relative(12 * HOUR + 30 * MINUTE));
        assert_eq!(RelativeValidityPeriod::read_from(167), relative(24 * HOUR));
        assert_eq!(RelativeValidityPeriod::read_from(0xAA), relative(4 * DAY));
        assert_eq!(RelativeValidityPeriod::read_from(196), relative(30 * DAY));
        assert_eq!(RelativeValidityPeriod::read_from(197), relative(5 * WEEK));
        assert_eq!(RelativeValidityPeriod::read_from(0xFF), relative(63 * WEEK));
    }

    #[test]
    fn quantized_durations_round_trip() {
        for secs in [
            10 * MINUTE,
            6 * HOUR,
            13 * HOUR,
            20 * HOUR,
            3 * DAY,
            30 * DAY,
            10 * WEEK,
            62 * WEEK,
        ] {
            let vp = relative(secs);
            assert_eq!(RelativeValidityPeriod::read_from(vp.octet()), vp, "{} secs", secs);
        }
    }

    #[test]
    fn enhanced_rejects_extension_bit() {
        let octets = [0x81, 0, 0, 0, 0, 0, 0];
        assert_eq!(
            EnhancedValidityPeriod::read_from(&octets).unwrap_err(),
            PduError::LongEnhancedVpNotSupported
        );
    }

    #[test]
    fn enhanced_rejects_reserved_bits() {
        for first in [0x08, 0x10, 0x20, 0x38] {
            let octets = [first, 0, 0, 0, 0, 0, 0];
            assert_eq!(
                EnhancedValidityPeriod::read_from(&octets).unwrap_err(),
                PduError::UnknownEnhancedVpReservedBits
            );
        }
    }

    #[test]
    fn enhanced_rejects_unknown_sub_formats() {
        for format in 0x03..=0x07 {
            let octets = [format, 0, 0, 0, 0, 0, 0];
            assert_eq!(
                EnhancedValidityPeriod::read_from(&octets).unwrap_err(),
                PduError::UnknownVpf(format)
            );
        }
    }

    #[test]
    fn enhanced_reads_relative_sub_formats() {
        let relative_vp = EnhancedValidityPeriod::read_from(&[0x01, 0xAA, 0, 0, 0, 0, 0]).unwrap();
        assert_eq!(
            relative_vp.format,
            EnhancedVpFormat::Relative(relative(4 * DAY))
        );
        assert!(!relative_vp.single_shot);

        let seconds = EnhancedValidityPeriod::read_from(&[0x42, 0x03, 0, 0, 0, 0, 0]).unwrap();
        assert!(seconds.single_shot);
        assert_eq!(seconds.format, EnhancedVpFormat::RelativeInteger(3));
    }

    #[test]
    fn enhanced_round_trips() {
        for vp in [
            EnhancedValidityPeriod::default(),
            EnhancedValidityPeriod {
                single_shot: true,
                format: EnhancedVpFormat::RelativeInteger(3),
            },
            EnhancedValidityPeriod {
                single_shot: false,
                format: EnhancedVpFormat::Relative(relative(5 * WEEK)),
            },
        ] {
            assert_eq!(EnhancedValidityPeriod::read_from(&vp.pdu()).unwrap(), vp);
        }
    }

    #[test]
    fn enhanced_rejects_short_input() {
        assert_eq!(
            EnhancedValidityPeriod::read_from(&[0x01, 0xAA]).unwrap_err(),
            PduError::IncorrectSize("enhanced validity period")
        );
    }
}
