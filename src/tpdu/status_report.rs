//! SMS-STATUS-REPORT: the service centre reporting what became of an
//! earlier SMS-SUBMIT (3GPP TS 23.040 section 9.2.2.3).

use super::{read_address, write_address};
use crate::address::PhoneNumber;
use crate::message::MessageType;
use crate::reader::Reader;
use crate::status::Status;
use crate::timestamp::{Timestamp, TIMESTAMP_LEN};
use crate::PduResult;

/// Wire-order fields of an SMS-STATUS-REPORT TPDU.
///
/// Everything after the status octet is governed by a parameter-indicator
/// octet, which itself may be absent when the input ends there.
#[derive(Debug, Clone)]
pub(crate) struct StatusReport {
    pub more_messages_to_send: bool,
    pub loop_prevention: bool,
    pub status_report_qualificator: bool,
    pub user_data_header_indicator: bool,

    pub message_reference: u8,
    pub destination_address: PhoneNumber,
    pub service_centre_timestamp: Timestamp,
    pub discharge_timestamp: Timestamp,
    pub status: Status,
    pub protocol_identifier: u8,
    pub data_coding_scheme: u8,
    pub user_data_length: u8,
    pub user_data: Vec<u8>,
}

impl StatusReport {
    pub(crate) fn write_into(&self, buf: &mut Vec<u8>) -> PduResult<()> {
        let mut header = MessageType::StatusReport as u8; // bits 1..0
        if !self.more_messages_to_send {
            header |= 0x01 << 2;
        }
        if self.loop_prevention {
            header |= 0x01 << 3;
        }
        if self.status_report_qualificator {
            header |= 0x01 << 5;
        }
        if self.user_data_header_indicator {
            header |= 0x01 << 6;
        }
        buf.push(header);
        buf.push(self.message_reference);
        write_address(buf, &self.destination_address)?;
        buf.extend_from_slice(&self.service_centre_timestamp.pdu());
        buf.extend_from_slice(&self.discharge_timestamp.pdu());
        buf.push(self.status.0);

        let mut indicator = 0u8;
        let mut trailer = Vec::new();
        if self.protocol_identifier != 0 {
            indicator |= 0x01;
            trailer.push(self.protocol_identifier);
        }
        if self.data_coding_scheme != 0 {
            indicator |= 0x01 << 1;
            trailer.push(self.data_coding_scheme);
        }
        if !self.user_data.is_empty() {
            indicator |= 0x01 << 2;
            trailer.push(self.user_data_length);
            trailer.extend_from_slice(&self.user_data);
        }
        buf.push(indicator);
        buf.extend_from_slice(&trailer);
        Ok(())
    }

    pub(crate) fn from_reader(reader: &mut Reader) -> PduResult<StatusReport> {
        let header = reader.read_u8("first octet")?;
        let more_messages_to_send = header >> 2 & 0x01 == 0x00;
        let loop_prevention = header >> 3 & 0x01 == 0x01;
        let status_report_qualificator = header >> 5 & 0x01 == 0x01;
        let user_data_header_indicator = header & 0x01 << 6 != 0;

        let message_reference = reader.read_u8("message reference")?;
        let destination_address = read_address(reader, "recipient address")?;
        let service_centre_timestamp =
            Timestamp::read_from(reader.read_exact(TIMESTAMP_LEN, "service centre timestamp")?)?;
        let discharge_timestamp =
            Timestamp::read_from(reader.read_exact(TIMESTAMP_LEN, "discharge timestamp")?)?;
        let status = Status(reader.read_u8("status")?);

        let mut protocol_identifier = 0;
        let mut data_coding_scheme = 0;
        let mut user_data_length = 0;
        let mut user_data = Vec::new();
        // A PDU ending right after the status octet is complete; the
        // parameter indicator and its fields are optional.
        if !reader.is_empty() {
            let parameters = reader.read_u8("parameter indicator")?;
            if parameters & 0x01 != 0 {
                protocol_identifier = reader.read_u8("protocol identifier")?;
            }
            if parameters & 0x01 << 1 != 0 {
                data_coding_scheme = reader.read_u8("data coding scheme")?;
            }
            if parameters & 0x01 << 2 != 0 {
                user_data_length = reader.read_u8("user data length")?;
                user_data = reader.read_up_to(usize::from(user_data_length)).to_vec();
            }
        }

        Ok(StatusReport {
            more_messages_to_send,
            loop_prevention,
            status_report_qualificator,
            user_data_header_indicator,
            message_reference,
            destination_address,
            service_centre_timestamp,
            discharge_timestamp,
            status,
            protocol_identifier,
            data_coding_scheme,
            user_data_length,
            user_data,
        })
    }
}
