//! Low-level framing of the three TPDU variants.
//!
//! Each variant is a record mirroring the field sequence of 3GPP TS 23.040
//! section 9.2.2, read and written in wire order. The [`Message`] façade
//! maps these to and from its high-level form.
//!
//! [`Message`]: crate::Message

pub(crate) mod deliver;
pub(crate) mod status_report;
pub(crate) mod submit;

use crate::address::PhoneNumber;
use crate::reader::Reader;
use crate::{PduError, PduResult};

/// Longest address field, in semi-octets.
const MAX_ADDRESS_LEN: u8 = 16;

/// Writes an address field: digit count, type octet, packed digits.
fn write_address(buf: &mut Vec<u8>, address: &PhoneNumber) -> PduResult<()> {
    let (digits, octets) = address.pdu()?;
    buf.push(digits as u8);
    buf.extend_from_slice(&octets);
    Ok(())
}

/// Reads an address field. The length octet counts useful semi-octets, so
/// the value occupies half that many octets rounded up, plus the type
/// octet.
fn read_address(reader: &mut Reader, what: &'static str) -> PduResult<PhoneNumber> {
    let len = reader.read_u8(what)?;
    if len > MAX_ADDRESS_LEN {
        return Err(PduError::IncorrectSize(what));
    }
    let octets = reader.read_exact(blocks(usize::from(len), 2) + 1, what)?;
    PhoneNumber::read_from(octets)
}

fn blocks(n: usize, block: usize) -> usize {
    n.div_ceil(block)
}
