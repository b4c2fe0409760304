//! SMS-DELIVER: a message on its way from the service centre to the
//! mobile (3GPP TS 23.040 section 9.2.2.1).

use super::{read_address, write_address};
use crate::address::PhoneNumber;
use crate::message::MessageType;
use crate::reader::Reader;
use crate::timestamp::{Timestamp, TIMESTAMP_LEN};
use crate::PduResult;

/// Wire-order fields of an SMS-DELIVER TPDU.
#[derive(Debug, Clone)]
pub(crate) struct Deliver {
    pub more_messages_to_send: bool,
    pub loop_prevention: bool,
    pub reply_path: bool,
    pub user_data_header_indicator: bool,
    pub status_report_indication: bool,

    pub originating_address: PhoneNumber,
    pub protocol_identifier: u8,
    pub data_coding_scheme: u8,
    pub service_centre_timestamp: Timestamp,
    pub user_data_length: u8,
    pub user_data: Vec<u8>,
}

impl Deliver {
    pub(crate) fn write_into(&self, buf: &mut Vec<u8>) -> PduResult<()> {
        let mut header = MessageType::Deliver as u8; // bits 1..0
        if !self.more_messages_to_send {
            header |= 0x01 << 2;
        }
        if self.loop_prevention {
            header |= 0x01 << 3;
        }
        if self.status_report_indication {
            header |= 0x01 << 4;
        }
        if self.user_data_header_indicator {
            header |= 0x01 << 6;
        }
        if self.reply_path {
            header |= 0x01 << 7;
        }
        buf.push(header);
        write_address(buf, &self.originating_address)?;
        buf.push(self.protocol_identifier);
        buf.push(self.data_coding_scheme);
        buf.extend_from_slice(&self.service_centre_timestamp.pdu());
        buf.push(self.user_data_length);
        buf.extend_from_slice(&self.user_data);
        Ok(())
    }

    pub(crate) fn from_reader(reader: &mut Reader) -> PduResult<Deliver> {
        let header = reader.read_u8("first octet")?;
        let more_messages_to_send = header >> 2 & 0x01 == 0x00;
        let loop_prevention = header >> 3 & 0x01 == 0x01;
        let status_report_indication = header >> 4 & 0x01 == 0x01;
        let user_data_header_indicator = header & 0x01 << 6 != 0;
        let reply_path = header & 0x01 << 7 != 0;

        let originating_address = read_address(reader, "originating address")?;
        let protocol_identifier = reader.read_u8("protocol identifier")?;
        let data_coding_scheme = reader.read_u8("data coding scheme")?;
        let service_centre_timestamp =
            Timestamp::read_from(reader.read_exact(TIMESTAMP_LEN, "service centre timestamp")?)?;
        let user_data_length = reader.read_u8("user data length")?;
        let user_data = reader.read_up_to(usize::from(user_data_length)).to_vec();

        Ok(Deliver {
            more_messages_to_send,
            loop_prevention,
            reply_path,
            user_data_header_indicator,
            status_report_indication,
            originating_address,
            protocol_identifier,
            data_coding_scheme,
            service_centre_timestamp,
            user_data_length,
            user_data,
        })
    }
}
