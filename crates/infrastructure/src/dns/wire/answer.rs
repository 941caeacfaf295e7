//! Single resource record in the answer section (RFC 1035 §4.1.3)
//!
//! Anchored at the question name's end plus QTYPE/QCLASS. Every field after
//! the answer name is addressed relative to that name's end.

use super::name::{decode_name, encode_name, skip_name};
use super::question::QUESTION_FIXED_LEN;
use super::{check_capacity, read_u16, read_u32, truncated, write_bytes, write_u16, write_u32, Message};
use beacon_dns_domain::CodecError;
use std::net::Ipv4Addr;

/// TYPE + CLASS + TTL + RDLENGTH following the owner name
pub const RR_FIXED_LEN: usize = 10;

const TYPE: usize = 0;
const CLASS: usize = 2;
const TTL: usize = 4;
const RDLENGTH: usize = 8;
const RDATA: usize = 10;

impl<B: AsRef<[u8]>> Message<B> {
    /// Offset where the answer name starts.
    pub fn answer_offset(&self) -> Result<usize, CodecError> {
        Ok(self.question_name_end()? + QUESTION_FIXED_LEN)
    }

    /// Offset right after the answer name's terminator.
    pub fn answer_name_end(&self) -> Result<usize, CodecError> {
        match self.answer_name_end {
            Some(end) => Ok(end),
            None => skip_name(self.as_bytes(), self.answer_offset()?),
        }
    }

    pub fn answer_name(&self) -> Result<String, CodecError> {
        decode_name(self.as_bytes(), self.answer_offset()?).map(|(name, _)| name)
    }

    pub fn answer_type(&self) -> Result<u16, CodecError> {
        read_u16(self.as_bytes(), self.answer_name_end()? + TYPE)
    }

    pub fn answer_class(&self) -> Result<u16, CodecError> {
        read_u16(self.as_bytes(), self.answer_name_end()? + CLASS)
    }

    /// Seconds the receiver may cache the record for.
    pub fn ttl(&self) -> Result<u32, CodecError> {
        read_u32(self.as_bytes(), self.answer_name_end()? + TTL)
    }

    pub fn rdlength(&self) -> Result<u16, CodecError> {
        read_u16(self.as_bytes(), self.answer_name_end()? + RDLENGTH)
    }

    /// The RDLENGTH bytes of RDATA.
    pub fn rdata(&self) -> Result<&[u8], CodecError> {
        let start = self.answer_name_end()? + RDATA;
        let len = self.rdlength()? as usize;
        let buf = self.as_bytes();
        buf.get(start..start + len)
            .ok_or_else(|| truncated(start, len, buf.len()))
    }

    pub(super) fn rdata_end(&self) -> Result<usize, CodecError> {
        let start = self.answer_name_end()? + RDATA;
        Ok(start + self.rdata()?.len())
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> Message<B> {
    pub fn set_answer_name(&mut self, name: &str) -> Result<(), CodecError> {
        let start = self.answer_offset()?;
        let end = encode_name(self.bytes_mut(), start, name)?;
        self.answer_name_end = Some(end);
        Ok(())
    }

    pub fn set_answer_type(&mut self, rtype: u16) -> Result<(), CodecError> {
        let offset = self.answer_name_end()? + TYPE;
        write_u16(self.bytes_mut(), offset, rtype)
    }

    pub fn set_answer_class(&mut self, class: u16) -> Result<(), CodecError> {
        let offset = self.answer_name_end()? + CLASS;
        write_u16(self.bytes_mut(), offset, class)
    }

    pub fn set_ttl(&mut self, ttl: u32) -> Result<(), CodecError> {
        let offset = self.answer_name_end()? + TTL;
        write_u32(self.bytes_mut(), offset, ttl)
    }

    /// Writes RDLENGTH alone. Prefer [`Message::set_rdata`], which keeps it in
    /// step with the data.
    pub fn set_rdlength(&mut self, len: u16) -> Result<(), CodecError> {
        let offset = self.answer_name_end()? + RDLENGTH;
        write_u16(self.bytes_mut(), offset, len)
    }

    /// Writes RDLENGTH and RDATA together. Nothing is written unless both fit.
    pub fn set_rdata(&mut self, data: &[u8]) -> Result<(), CodecError> {
        let name_end = self.answer_name_end()?;
        let capacity = self.as_bytes().len();
        let len = u16::try_from(data.len()).map_err(|_| CodecError::BufferCapacityExceeded {
            offset: name_end + RDATA,
            needed: data.len(),
            capacity: u16::MAX as usize,
        })?;
        check_capacity(capacity, name_end, RR_FIXED_LEN + data.len())?;

        let buf = self.bytes_mut();
        write_u16(buf, name_end + RDLENGTH, len)?;
        write_bytes(buf, name_end + RDATA, data)
    }

    /// A-record RDATA from a dotted quad such as `"8.8.8.8"`.
    ///
    /// Exactly four decimal octets in 0..=255 are accepted. They are written
    /// first octet first, which is the address in network byte order.
    pub fn set_rdata_ipv4(&mut self, literal: &str) -> Result<(), CodecError> {
        let addr: Ipv4Addr = literal
            .parse()
            .map_err(|_| CodecError::InvalidAddressLiteral(literal.to_string()))?;
        self.set_rdata(&addr.octets())
    }
}
