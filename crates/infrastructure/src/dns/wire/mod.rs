//! DNS message wire codec (RFC 1035 §4.1)
//!
//! A [`Message`] is a byte buffer read and written in place at computed
//! offsets. There is no intermediate object model:
//!
//! ```text
//! 0      2      3      4         6         8         10        12
//! | ID   | FL1  | FL2  | QDCOUNT | ANCOUNT | NSCOUNT | ARCOUNT | QNAME ... | QTYPE | QCLASS |
//! | ANAME ... | TYPE | CLASS | TTL (4) | RDLENGTH | RDATA ... |
//! ```
//!
//! The question starts at offset 12. Everything after it is positioned
//! relative to the end of the preceding name, which the wrapper caches once a
//! name has been written or indexed and recomputes by rescanning otherwise.
//! Exactly one question and at most one answer are supported. Name
//! compression is not.

mod answer;
mod header;
pub mod name;
mod question;

pub use answer::RR_FIXED_LEN;
pub use question::QUESTION_FIXED_LEN;

use beacon_dns_domain::CodecError;

/// Classic DNS-over-UDP message limit (RFC 1035 §2.3.4)
pub const MAX_MESSAGE_SIZE: usize = 512;

pub const HEADER_LEN: usize = 12;

#[derive(Debug, Clone)]
pub struct Message<B> {
    buf: B,
    question_name_end: Option<usize>,
    answer_name_end: Option<usize>,
}

impl Message<[u8; MAX_MESSAGE_SIZE]> {
    /// A zero-filled outgoing message. All header fields read as zero.
    pub fn empty() -> Self {
        Self {
            buf: [0u8; MAX_MESSAGE_SIZE],
            question_name_end: None,
            answer_name_end: None,
        }
    }
}

impl<B: AsRef<[u8]>> Message<B> {
    /// Wraps `buf` without looking past the header.
    pub fn new(buf: B) -> Result<Self, CodecError> {
        let len = buf.as_ref().len();
        if len < HEADER_LEN {
            return Err(CodecError::TruncatedMessage {
                offset: 0,
                needed: HEADER_LEN,
                len,
            });
        }

        Ok(Self {
            buf,
            question_name_end: None,
            answer_name_end: None,
        })
    }

    /// Wraps `buf` and indexes the sections announced by the header.
    ///
    /// Fails unless the question (when QDCOUNT ≥ 1) and the answer (when
    /// ANCOUNT ≥ 1) lie entirely inside the buffer.
    pub fn parse(buf: B) -> Result<Self, CodecError> {
        let mut message = Self::new(buf)?;

        if message.qdcount() > 0 {
            let end = name::skip_name(message.as_bytes(), HEADER_LEN)?;
            read_array::<QUESTION_FIXED_LEN>(message.as_bytes(), end)?;
            message.question_name_end = Some(end);

            if message.ancount() > 0 {
                let end = name::skip_name(message.as_bytes(), end + QUESTION_FIXED_LEN)?;
                message.answer_name_end = Some(end);
                message.rdata()?;
            }
        }

        Ok(message)
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.buf.as_ref()
    }

    /// Number of leading bytes that make up the message: the header, plus the
    /// question when QDCOUNT ≥ 1, plus the answer when ANCOUNT ≥ 1.
    pub fn wire_len(&self) -> Result<usize, CodecError> {
        if self.qdcount() == 0 {
            return Ok(HEADER_LEN);
        }
        if self.ancount() > 0 {
            return self.rdata_end();
        }

        let end = self.question_name_end()? + QUESTION_FIXED_LEN;
        if end > self.as_bytes().len() {
            return Err(truncated(end - QUESTION_FIXED_LEN, QUESTION_FIXED_LEN, self.as_bytes().len()));
        }
        Ok(end)
    }

    /// The in-use prefix of the buffer, ready to hand to a socket.
    pub fn wire_bytes(&self) -> Result<&[u8], CodecError> {
        let len = self.wire_len()?;
        Ok(&self.as_bytes()[..len])
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> Message<B> {
    fn bytes_mut(&mut self) -> &mut [u8] {
        self.buf.as_mut()
    }
}

pub(crate) fn truncated(offset: usize, needed: usize, len: usize) -> CodecError {
    CodecError::TruncatedMessage {
        offset,
        needed,
        len,
    }
}

pub(crate) fn read_array<const N: usize>(buf: &[u8], offset: usize) -> Result<[u8; N], CodecError> {
    offset
        .checked_add(N)
        .and_then(|end| buf.get(offset..end))
        .and_then(|slice| slice.try_into().ok())
        .ok_or_else(|| truncated(offset, N, buf.len()))
}

pub(crate) fn read_u16(buf: &[u8], offset: usize) -> Result<u16, CodecError> {
    read_array::<2>(buf, offset).map(u16::from_be_bytes)
}

pub(crate) fn read_u32(buf: &[u8], offset: usize) -> Result<u32, CodecError> {
    read_array::<4>(buf, offset).map(u32::from_be_bytes)
}

/// Fails unless `needed` bytes starting at `offset` fit in a buffer of
/// `capacity` bytes.
pub(crate) fn check_capacity(capacity: usize, offset: usize, needed: usize) -> Result<(), CodecError> {
    match offset.checked_add(needed) {
        Some(end) if end <= capacity => Ok(()),
        _ => Err(CodecError::BufferCapacityExceeded {
            offset,
            needed,
            capacity,
        }),
    }
}

pub(crate) fn write_bytes(buf: &mut [u8], offset: usize, bytes: &[u8]) -> Result<(), CodecError> {
    check_capacity(buf.len(), offset, bytes.len())?;
    buf[offset..offset + bytes.len()].copy_from_slice(bytes);
    Ok(())
}

pub(crate) fn write_u16(buf: &mut [u8], offset: usize, value: u16) -> Result<(), CodecError> {
    write_bytes(buf, offset, &value.to_be_bytes())
}

pub(crate) fn write_u32(buf: &mut [u8], offset: usize, value: u32) -> Result<(), CodecError> {
    write_bytes(buf, offset, &value.to_be_bytes())
}
