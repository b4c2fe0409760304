//! SMS-SUBMIT: a message on its way from the mobile to the service centre
//! (3GPP TS 23.040 section 9.2.2.2).

use num_traits::FromPrimitive;

use super::{read_address, write_address};
use crate::address::PhoneNumber;
use crate::message::MessageType;
use crate::reader::Reader;
use crate::validity_period::ValidityPeriodFormat;
use crate::{PduError, PduResult};

/// Wire-order fields of an SMS-SUBMIT TPDU.
#[derive(Debug, Clone)]
pub(crate) struct Submit {
    pub reject_duplicates: bool,
    pub validity_period_format: ValidityPeriodFormat,
    pub reply_path: bool,
    pub user_data_header_indicator: bool,
    pub status_report_request: bool,

    pub message_reference: u8,
    pub destination_address: PhoneNumber,
    pub protocol_identifier: u8,
    pub data_coding_scheme: u8,
    /// Raw relative validity octet; meaningful iff the format says so.
    pub validity_period: u8,
    pub user_data_length: u8,
    pub user_data: Vec<u8>,
}

impl Submit {
    pub(crate) fn write_into(&self, buf: &mut Vec<u8>) -> PduResult<()> {
        let mut header = MessageType::Submit as u8; // bits 1..0
        if self.reject_duplicates {
            header |= 0x01 << 2;
        }
        header |= (self.validity_period_format as u8) << 3; // bits 4..3
        if self.status_report_request {
            header |= 0x01 << 5;
        }
        if self.user_data_header_indicator {
            header |= 0x01 << 6;
        }
        if self.reply_path {
            header |= 0x01 << 7;
        }
        buf.push(header);
        buf.push(self.message_reference);
        write_address(buf, &self.destination_address)?;
        buf.push(self.protocol_identifier);
        buf.push(self.data_coding_scheme);
        if self.validity_period_format != ValidityPeriodFormat::FieldNotPresent {
            buf.push(self.validity_period);
        }
        buf.push(self.user_data_length);
        buf.extend_from_slice(&self.user_data);
        Ok(())
    }

    pub(crate) fn from_reader(reader: &mut Reader) -> PduResult<Submit> {
        let header = reader.read_u8("first octet")?;
        let reject_duplicates = header & 0x01 << 2 != 0;
        let validity_period_format = ValidityPeriodFormat::from_u8(header >> 3 & 0x03)
            .expect("ValidityPeriodFormat conversions should be exhaustive!");
        let status_report_request = header & 0x01 << 5 != 0;
        let user_data_header_indicator = header & 0x01 << 6 != 0;
        let reply_path = header & 0x01 << 7 != 0;

        let message_reference = reader.read_u8("message reference")?;
        let destination_address = read_address(reader, "destination address")?;
        let protocol_identifier = reader.read_u8("protocol identifier")?;
        let data_coding_scheme = reader.read_u8("data coding scheme")?;

        let validity_period = match validity_period_format {
            ValidityPeriodFormat::FieldNotPresent => 0,
            ValidityPeriodFormat::Relative => reader.read_u8("validity period")?,
            ValidityPeriodFormat::Enhanced | ValidityPeriodFormat::Absolute => {
                return Err(PduError::NonRelative)
            }
        };

        let user_data_length = reader.read_u8("user data length")?;
        let user_data = reader.read_up_to(usize::from(user_data_length)).to_vec();

        Ok(Submit {
            reject_duplicates,
            validity_period_format,
            reply_path,
            user_data_header_indicator,
            status_report_request,
            message_reference,
            destination_address,
            protocol_identifier,
            data_coding_scheme,
            validity_period,
            user_data_length,
            user_data,
        })
    }
}
