//! Delivery status of an SMS-STATUS-REPORT (3GPP TS 23.040 section
//! 9.2.3.15).

use std::fmt;

/// Broad outcome class of a [`Status`] octet.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StatusCategory {
    /// Short message transaction completed.
    Complete,
    /// Temporary error, the service centre is still trying.
    TemporaryError,
    /// Permanent error, the service centre gave up.
    PermanentError,
    /// Temporary error, but the service centre gave up.
    FinalError,
    /// Reserved or service-centre-specific value.
    Unknown,
}

/// The raw TP-Status octet of an SMS-STATUS-REPORT.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Status(pub u8);

impl Status {
    pub const COMPLETED_RECEIVED: Status = Status(0x00);
    pub const COMPLETED_FORWARDED: Status = Status(0x01);
    pub const COMPLETED_REPLACED: Status = Status(0x02);

    pub const TEMPORARY_CONGESTION: Status = Status(0x20);
    pub const TEMPORARY_BUSY: Status = Status(0x21);
    pub const TEMPORARY_NO_RESPONSE_FROM_RECIPIENT: Status = Status(0x22);
    pub const TEMPORARY_SERVICE_REJECTED: Status = Status(0x23);
    pub const TEMPORARY_QUALITY_OF_SERVICE_NOT_AVAILABLE: Status = Status(0x24);
    pub const TEMPORARY_ERROR_IN_RECIPIENT: Status = Status(0x25);

    pub const PERMANENT_REMOTE_PROCEDURE_ERROR: Status = Status(0x40);
    pub const PERMANENT_INCOMPATIBLE_DESTINATION: Status = Status(0x41);
    pub const PERMANENT_CONNECTION_REJECTED: Status = Status(0x42);
    pub const PERMANENT_NOT_OBTAINABLE: Status = Status(0x43);
    pub const PERMANENT_QUALITY_OF_SERVICE_NOT_AVAILABLE: Status = Status(0x44);
    pub const PERMANENT_NO_INTERWORKING_AVAILABLE: Status = Status(0x45);
    pub const PERMANENT_VALIDITY_PERIOD_EXPIRED: Status = Status(0x46);
    pub const PERMANENT_DELETED_BY_SENDER: Status = Status(0x47);
    pub const PERMANENT_DELETED_BY_ADMINISTRATION: Status = Status(0x48);
    pub const PERMANENT_UNKNOWN_MESSAGE: Status = Status(0x49);

    pub const FINAL_CONGESTION: Status = Status(0x60);
    pub const FINAL_BUSY: Status = Status(0x61);
    pub const FINAL_NO_RESPONSE_FROM_RECIPIENT: Status = Status(0x62);
    pub const FINAL_SERVICE_REJECTED: Status = Status(0x63);
    pub const FINAL_QUALITY_OF_SERVICE_NOT_AVAILABLE: Status = Status(0x64);
    pub const FINAL_ERROR_IN_RECIPIENT: Status = Status(0x65);

    /// Resolves the octet into its outcome class. Values outside the
    /// assigned ranges are reserved or specific to a service centre, so
    /// they resolve to [`StatusCategory::Unknown`].
    pub fn category(self) -> StatusCategory {
        match self.0 {
            0x00..=0x02 => StatusCategory::Complete,
            0x20..=0x25 => StatusCategory::TemporaryError,
            0x40..=0x49 => StatusCategory::PermanentError,
            0x60..=0x65 => StatusCategory::FinalError,
            _ => StatusCategory::Unknown,
        }
    }

    /// Human-readable description of the assigned values.
    pub fn description(self) -> &'static str {
        match self.0 {
            0x00 => "short message received by the recipient",
            0x01 => "short message forwarded to the recipient, delivery unconfirmed",
            0x02 => "short message replaced by the service centre",
            0x20 | 0x60 => "congestion",
            0x21 | 0x61 => "recipient busy",
            0x22 | 0x62 => "no response from recipient",
            0x23 | 0x63 => "service rejected",
            0x24 | 0x44 | 0x64 => "quality of service not available",
            0x25 | 0x65 => "error in recipient",
            0x40 => "remote procedure error",
            0x41 => "incompatible destination",
            0x42 => "connection rejected by recipient",
            0x43 => "not obtainable",
            0x45 => "no interworking available",
            0x46 => "validity period expired",
            0x47 => "short message deleted by the sender",
            0x48 => "short message deleted by service centre administration",
            0x49 => "short message does not exist",
            _ => "reserved or service-centre-specific",
        }
    }
}

impl From<u8> for Status {
    fn from(octet: u8) -> Self {
        Status(octet)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "0x{:02X} ({})", self.0, self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assigned_values_resolve_to_their_category() {
        let complete = [
            Status::COMPLETED_RECEIVED,
            Status::COMPLETED_FORWARDED,
            Status::COMPLETED_REPLACED,
        ];
        for status in complete {
            assert_eq!(status.category(), StatusCategory::Complete);
        }
        for value in 0x20..=0x25 {
            assert_eq!(Status(value).category(), StatusCategory::TemporaryError);
        }
        for value in 0x40..=0x49 {
            assert_eq!(Status(value).category(), StatusCategory::PermanentError);
        }
        for value in 0x60..=0x65 {
            assert_eq!(Status(value).category(), StatusCategory::FinalError);
        }
    }

    #[test]
    fn reserved_values_resolve_to_unknown() {
        let reserved: &[(u8, u8)] = &[
            (0x03, 0x1F), // complete: reserved, then SC-specific
            (0x26, 0x3F), // temporary: reserved, then SC-specific
            (0x4A, 0x5F), // permanent: reserved, then SC-specific
            (0x66, 0x7F), // final: reserved, then SC-specific
            (0x80, 0xFF), // extension: reserved
        ];
        for &(begin, end) in reserved {
            for value in begin..=end {
                assert_eq!(
                    Status(value).category(),
                    StatusCategory::Unknown,
                    "Status({:#010b})",
                    value
                );
            }
        }
    }

    #[test]
    fn every_octet_resolves() {
        for value in 0..=255u8 {
            // The categorization is total; this is just the full sweep.
            let _ = Status(value).category();
            assert!(!Status(value).description().is_empty());
        }
    }
}
