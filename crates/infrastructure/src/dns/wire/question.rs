use super::name::{decode_name, encode_name, skip_name};
use super::{read_u16, write_u16, Message, HEADER_LEN};
use beacon_dns_domain::CodecError;

/// QTYPE + QCLASS following the question name
pub const QUESTION_FIXED_LEN: usize = 4;

const QTYPE: usize = 0;
const QCLASS: usize = 2;

impl<B: AsRef<[u8]>> Message<B> {
    /// Offset right after the question name's terminator.
    pub fn question_name_end(&self) -> Result<usize, CodecError> {
        match self.question_name_end {
            Some(end) => Ok(end),
            None => skip_name(self.as_bytes(), HEADER_LEN),
        }
    }

    pub fn question_name(&self) -> Result<String, CodecError> {
        decode_name(self.as_bytes(), HEADER_LEN).map(|(name, _)| name)
    }

    pub fn question_type(&self) -> Result<u16, CodecError> {
        read_u16(self.as_bytes(), self.question_name_end()? + QTYPE)
    }

    pub fn question_class(&self) -> Result<u16, CodecError> {
        read_u16(self.as_bytes(), self.question_name_end()? + QCLASS)
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> Message<B> {
    /// Writes the question name and moves the anchor for QTYPE, QCLASS and
    /// the answer section. A previously written answer must be rewritten.
    pub fn set_question_name(&mut self, name: &str) -> Result<(), CodecError> {
        let end = encode_name(self.bytes_mut(), HEADER_LEN, name)?;
        self.question_name_end = Some(end);
        self.answer_name_end = None;
        Ok(())
    }

    pub fn set_question_type(&mut self, qtype: u16) -> Result<(), CodecError> {
        let offset = self.question_name_end()? + QTYPE;
        write_u16(self.bytes_mut(), offset, qtype)
    }

    pub fn set_question_class(&mut self, qclass: u16) -> Result<(), CodecError> {
        let offset = self.question_name_end()? + QCLASS;
        write_u16(self.bytes_mut(), offset, qclass)
    }
}
