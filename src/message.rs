//! The high-level SMS message record and its PDU entry points.

use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
use thiserror::Error;

use crate::address::PhoneNumber;
use crate::reader::Reader;
use crate::status::Status;
use crate::timestamp::Timestamp;
use crate::tpdu::deliver::Deliver;
use crate::tpdu::status_report::StatusReport;
use crate::tpdu::submit::Submit;
use crate::udh::UserDataHeader;
use crate::validity_period::{RelativeValidityPeriod, ValidityPeriodFormat};
use crate::{gsm7, ucs2, PduError, PduResult};

/// Message type indicator, bits 1..0 of the first TPDU octet.
///
/// The report counterparts (SMS-DELIVER-REPORT and so on) share these
/// indicator values but travel in the opposite direction and are not
/// implemented.
#[repr(u8)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, FromPrimitive)]
pub enum MessageType {
    #[default]
    Deliver = 0x00,
    Submit = 0x01,
    StatusReport = 0x02,
}

/// Data coding scheme values understood by this codec, stored as the raw
/// DCS octet. The codec only distinguishes the 7-bit family from UCS-2;
/// the alternate 7-bit values are network variants seen in the wild.
#[repr(u8)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, FromPrimitive)]
pub enum Encoding {
    #[default]
    Gsm7Bit = 0x00,
    Gsm7Bit2 = 0x11,
    Gsm7Bit3 = 0x01,
    Ucs2 = 0x08,
}

impl Encoding {
    pub fn is_gsm7(self) -> bool {
        self != Encoding::Ucs2
    }

    /// The raw DCS octet.
    pub fn dcs(self) -> u8 {
        self as u8
    }
}

/// TP-PID for a plain short message.
const PROTOCOL_IDENTIFIER: u8 = 0x00;

/// Longest SMSC address field, in octets.
const MAX_SMSC_LEN: u8 = 16;

/// An SMS message in user-friendly form, including the advanced fields.
/// Complies with 3GPP TS 23.040.
///
/// Fields that do not apply to a message's type keep their default value:
/// timestamps only carry meaning for Deliver and StatusReport (the
/// discharge time only for the latter), validity periods only for Submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message {
    pub message_type: MessageType,
    pub encoding: Encoding,
    pub text: String,
    /// Originating address on Deliver, destination otherwise.
    pub address: PhoneNumber,
    /// Empty means the modem's configured SMSC is used.
    pub service_center_address: PhoneNumber,
    pub service_center_time: Timestamp,
    pub discharge_time: Timestamp,
    pub validity_period: RelativeValidityPeriod,
    pub validity_period_format: ValidityPeriodFormat,
    pub message_reference: u8,
    pub status: Status,
    /// Parsed concatenation header, when the user data carries one.
    pub user_data_header: Option<UserDataHeader>,

    pub reply_path: bool,
    pub user_data_starts_with_header: bool,
    pub status_report_indication: bool,
    pub status_report_request: bool,
    pub status_report_qualificator: bool,
    pub more_messages_to_send: bool,
    pub loop_prevention: bool,
    pub reject_duplicates: bool,
}

/// A decode failure, together with how far into the PDU the decoder got.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{source} (after {bytes_read} bytes)")]
pub struct DecodeError {
    pub bytes_read: usize,
    #[source]
    pub source: PduError,
}

impl Message {
    /// Serializes the message into PDU octets ready to be transferred.
    ///
    /// Returns the TPDU length (the SMSC prefix does not count towards it;
    /// this is the number `AT+CMGS` wants) together with the octets.
    pub fn encode(&self) -> PduResult<(usize, Vec<u8>)> {
        let mut buf = Vec::with_capacity(self.text.len() * 2 + 48);
        if self.service_center_address.is_empty() {
            buf.push(0x00);
        } else {
            let (_, octets) = self.service_center_address.pdu()?;
            buf.push(octets.len() as u8);
            buf.extend_from_slice(&octets);
        }
        let smsc_field_len = buf.len();

        match self.message_type {
            MessageType::Deliver => {
                let (user_data_length, user_data) = self.encode_user_data();
                Deliver {
                    more_messages_to_send: self.more_messages_to_send,
                    loop_prevention: self.loop_prevention,
                    reply_path: self.reply_path,
                    user_data_header_indicator: self.user_data_starts_with_header,
                    status_report_indication: self.status_report_indication,
                    originating_address: self.address.clone(),
                    protocol_identifier: PROTOCOL_IDENTIFIER,
                    data_coding_scheme: self.encoding.dcs(),
                    service_centre_timestamp: self.service_center_time,
                    user_data_length,
                    user_data,
                }
                .write_into(&mut buf)?;
            }
            MessageType::Submit => {
                let validity_period = match self.validity_period_format {
                    ValidityPeriodFormat::FieldNotPresent => 0,
                    ValidityPeriodFormat::Relative => self.validity_period.octet(),
                    ValidityPeriodFormat::Enhanced | ValidityPeriodFormat::Absolute => {
                        return Err(PduError::NonRelative)
                    }
                };
                let (user_data_length, user_data) = self.encode_user_data();
                Submit {
                    reject_duplicates: self.reject_duplicates,
                    validity_period_format: self.validity_period_format,
                    reply_path: self.reply_path,
                    user_data_header_indicator: self.user_data_starts_with_header,
                    status_report_request: self.status_report_request,
                    message_reference: self.message_reference,
                    destination_address: self.address.clone(),
                    protocol_identifier: PROTOCOL_IDENTIFIER,
                    data_coding_scheme: self.encoding.dcs(),
                    validity_period,
                    user_data_length,
                    user_data,
                }
                .write_into(&mut buf)?;
            }
            MessageType::StatusReport => {
                let (user_data_length, user_data) = if self.text.is_empty() {
                    (0, Vec::new())
                } else {
                    self.encode_user_data()
                };
                StatusReport {
                    more_messages_to_send: self.more_messages_to_send,
                    loop_prevention: self.loop_prevention,
                    status_report_qualificator: self.status_report_qualificator,
                    user_data_header_indicator: self.user_data_starts_with_header,
                    message_reference: self.message_reference,
                    destination_address: self.address.clone(),
                    service_centre_timestamp: self.service_center_time,
                    discharge_timestamp: self.discharge_time,
                    status: self.status,
                    protocol_identifier: PROTOCOL_IDENTIFIER,
                    data_coding_scheme: self.encoding.dcs(),
                    user_data_length,
                    user_data,
                }
                .write_into(&mut buf)?;
            }
        }

        Ok((buf.len() - smsc_field_len, buf))
    }

    /// Constructs a message from PDU octets. Returns the number of bytes
    /// read alongside; on failure the error reports how far the decoder
    /// got.
    pub fn decode(octets: &[u8]) -> Result<(usize, Message), DecodeError> {
        let mut reader = Reader::new(octets);
        match Message::decode_from(&mut reader) {
            Ok(message) => Ok((reader.position(), message)),
            Err(source) => Err(DecodeError {
                bytes_read: reader.position(),
                source,
            }),
        }
    }

    fn decode_from(reader: &mut Reader) -> PduResult<Message> {
        let smsc_len = reader.read_u8("SMSC length")?;
        if smsc_len > MAX_SMSC_LEN {
            return Err(PduError::IncorrectSize("SMSC length"));
        }
        let mut message = Message::default();
        if smsc_len > 0 {
            let octets = reader.read_exact(usize::from(smsc_len), "SMSC address")?;
            message.service_center_address = PhoneNumber::read_from(octets)?;
        }

        let header = reader
            .peek_u8()
            .ok_or(PduError::IncorrectSize("first octet"))?;
        match MessageType::from_u8(header & 0x03) {
            Some(MessageType::Deliver) => message.read_deliver(reader)?,
            Some(MessageType::Submit) => message.read_submit(reader)?,
            Some(MessageType::StatusReport) => message.read_status_report(reader)?,
            None => return Err(PduError::UnknownMessageType(header & 0x03)),
        }
        Ok(message)
    }

    fn encode_user_data(&self) -> (u8, Vec<u8>) {
        match self.encoding {
            Encoding::Ucs2 => {
                let user_data = ucs2::encode_ucs2(&self.text);
                (user_data.len() as u8, user_data)
            }
            _ => (
                gsm7::encoded_len(&self.text) as u8,
                gsm7::encode_7bit(&self.text),
            ),
        }
    }

    fn read_deliver(&mut self, reader: &mut Reader) -> PduResult<()> {
        let frame = Deliver::from_reader(reader)?;
        self.message_type = MessageType::Deliver;
        self.more_messages_to_send = frame.more_messages_to_send;
        self.loop_prevention = frame.loop_prevention;
        self.reply_path = frame.reply_path;
        self.user_data_starts_with_header = frame.user_data_header_indicator;
        self.status_report_indication = frame.status_report_indication;
        self.address = frame.originating_address;
        self.encoding = Encoding::from_u8(frame.data_coding_scheme)
            .ok_or(PduError::UnknownEncoding(frame.data_coding_scheme))?;
        self.service_center_time = frame.service_centre_timestamp;
        if frame.user_data_header_indicator {
            self.user_data_header = Some(UserDataHeader::read_from(&frame.user_data)?);
        }
        self.text = extract_text(
            &frame.user_data,
            self.encoding,
            frame.user_data_header_indicator,
            frame.user_data_length,
        )?;
        Ok(())
    }

    fn read_submit(&mut self, reader: &mut Reader) -> PduResult<()> {
        let frame = Submit::from_reader(reader)?;
        self.message_type = MessageType::Submit;
        self.reject_duplicates = frame.reject_duplicates;
        self.validity_period_format = frame.validity_period_format;
        self.reply_path = frame.reply_path;
        self.user_data_starts_with_header = frame.user_data_header_indicator;
        self.status_report_request = frame.status_report_request;
        self.message_reference = frame.message_reference;
        self.address = frame.destination_address;
        self.encoding = Encoding::from_u8(frame.data_coding_scheme)
            .ok_or(PduError::UnknownEncoding(frame.data_coding_scheme))?;
        if frame.validity_period_format != ValidityPeriodFormat::FieldNotPresent {
            self.validity_period = RelativeValidityPeriod::read_from(frame.validity_period);
        }
        if frame.user_data_header_indicator {
            self.user_data_header = Some(UserDataHeader::read_from(&frame.user_data)?);
        }
        self.text = extract_text(
            &frame.user_data,
            self.encoding,
            frame.user_data_header_indicator,
            frame.user_data_length,
        )?;
        Ok(())
    }

    fn read_status_report(&mut self, reader: &mut Reader) -> PduResult<()> {
        let frame = StatusReport::from_reader(reader)?;
        self.message_type = MessageType::StatusReport;
        self.more_messages_to_send = frame.more_messages_to_send;
        self.loop_prevention = frame.loop_prevention;
        self.status_report_qualificator = frame.status_report_qualificator;
        self.user_data_starts_with_header = frame.user_data_header_indicator;
        self.message_reference = frame.message_reference;
        self.address = frame.destination_address;
        self.service_center_time = frame.service_centre_timestamp;
        self.discharge_time = frame.discharge_timestamp;
        self.status = frame.status;
        self.encoding = Encoding::from_u8(frame.data_coding_scheme)
            .ok_or(PduError::UnknownEncoding(frame.data_coding_scheme))?;
        if !frame.user_data.is_empty() {
            if frame.user_data_header_indicator {
                self.user_data_header = Some(UserDataHeader::read_from(&frame.user_data)?);
            }
            self.text = extract_text(
                &frame.user_data,
                self.encoding,
                frame.user_data_header_indicator,
                frame.user_data_length,
            )?;
        }
        Ok(())
    }
}

fn extract_text(
    user_data: &[u8],
    encoding: Encoding,
    starts_with_header: bool,
    user_data_length: u8,
) -> PduResult<String> {
    match encoding {
        Encoding::Ucs2 => ucs2::decode_ucs2(user_data, starts_with_header),
        _ => {
            // Unpacking can spill one phantom septet past the declared
            // length; the character count caps it.
            let text = gsm7::decode_7bit(user_data);
            Ok(cut(text, usize::from(user_data_length)))
        }
    }
}

fn cut(text: String, n: usize) -> String {
    if n < text.chars().count() {
        text.chars().take(n).collect()
    } else {
        text
    }
}
