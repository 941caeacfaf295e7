//! Fixed 12-byte header (RFC 1035 §4.1.1)
//!
//! ```text
//! byte 2: | QR | Opcode (4) | AA | TC | RD |
//! byte 3: | RA | Z (3)      | RCODE (4)    |
//! ```
//!
//! `Message::new` guarantees at least [`HEADER_LEN`] bytes, so none of these
//! accessors can fail.

use super::{Message, HEADER_LEN};

const ID: usize = 0;
const FLAGS_HI: usize = 2;
const FLAGS_LO: usize = 3;
const QDCOUNT: usize = 4;
const ANCOUNT: usize = 6;
const NSCOUNT: usize = 8;
const ARCOUNT: usize = 10;

const QR_MASK: u8 = 0x80;
const OPCODE_MASK: u8 = 0x78;
const OPCODE_SHIFT: u8 = 3;
const AA_MASK: u8 = 0x04;
const TC_MASK: u8 = 0x02;
const RD_MASK: u8 = 0x01;

const RA_MASK: u8 = 0x80;
const Z_MASK: u8 = 0x70;
const Z_SHIFT: u8 = 4;
const RCODE_MASK: u8 = 0x0F;

impl<B: AsRef<[u8]>> Message<B> {
    fn header(&self) -> &[u8] {
        &self.as_bytes()[..HEADER_LEN]
    }

    fn header_u16(&self, offset: usize) -> u16 {
        let h = self.header();
        u16::from_be_bytes([h[offset], h[offset + 1]])
    }

    pub fn id(&self) -> u16 {
        self.header_u16(ID)
    }

    /// `true` for a response, `false` for a query.
    pub fn qr(&self) -> bool {
        self.header()[FLAGS_HI] & QR_MASK != 0
    }

    pub fn opcode(&self) -> u8 {
        (self.header()[FLAGS_HI] & OPCODE_MASK) >> OPCODE_SHIFT
    }

    pub fn aa(&self) -> bool {
        self.header()[FLAGS_HI] & AA_MASK != 0
    }

    pub fn tc(&self) -> bool {
        self.header()[FLAGS_HI] & TC_MASK != 0
    }

    pub fn rd(&self) -> bool {
        self.header()[FLAGS_HI] & RD_MASK != 0
    }

    pub fn ra(&self) -> bool {
        self.header()[FLAGS_LO] & RA_MASK != 0
    }

    pub fn z(&self) -> u8 {
        (self.header()[FLAGS_LO] & Z_MASK) >> Z_SHIFT
    }

    pub fn rcode(&self) -> u8 {
        self.header()[FLAGS_LO] & RCODE_MASK
    }

    pub fn qdcount(&self) -> u16 {
        self.header_u16(QDCOUNT)
    }

    pub fn ancount(&self) -> u16 {
        self.header_u16(ANCOUNT)
    }

    pub fn nscount(&self) -> u16 {
        self.header_u16(NSCOUNT)
    }

    pub fn arcount(&self) -> u16 {
        self.header_u16(ARCOUNT)
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> Message<B> {
    fn header_mut(&mut self) -> &mut [u8] {
        &mut self.bytes_mut()[..HEADER_LEN]
    }

    fn set_header_u16(&mut self, offset: usize, value: u16) {
        self.header_mut()[offset..offset + 2].copy_from_slice(&value.to_be_bytes());
    }

    fn set_bits(&mut self, offset: usize, mask: u8, bits: u8) {
        let byte = &mut self.header_mut()[offset];
        *byte = (*byte & !mask) | (bits & mask);
    }

    fn set_flag(&mut self, offset: usize, mask: u8, on: bool) {
        self.set_bits(offset, mask, if on { mask } else { 0 });
    }

    pub fn set_id(&mut self, id: u16) {
        self.set_header_u16(ID, id);
    }

    pub fn set_qr(&mut self, response: bool) {
        self.set_flag(FLAGS_HI, QR_MASK, response);
    }

    /// Only the low four bits of `opcode` are kept.
    pub fn set_opcode(&mut self, opcode: u8) {
        self.set_bits(FLAGS_HI, OPCODE_MASK, opcode << OPCODE_SHIFT);
    }

    pub fn set_aa(&mut self, on: bool) {
        self.set_flag(FLAGS_HI, AA_MASK, on);
    }

    pub fn set_tc(&mut self, on: bool) {
        self.set_flag(FLAGS_HI, TC_MASK, on);
    }

    pub fn set_rd(&mut self, on: bool) {
        self.set_flag(FLAGS_HI, RD_MASK, on);
    }

    pub fn set_ra(&mut self, on: bool) {
        self.set_flag(FLAGS_LO, RA_MASK, on);
    }

    /// Only the low four bits of `rcode` are kept.
    pub fn set_rcode(&mut self, rcode: u8) {
        self.set_bits(FLAGS_LO, RCODE_MASK, rcode);
    }

    pub fn set_qdcount(&mut self, count: u16) {
        self.set_header_u16(QDCOUNT, count);
    }

    pub fn set_ancount(&mut self, count: u16) {
        self.set_header_u16(ANCOUNT, count);
    }

    pub fn set_nscount(&mut self, count: u16) {
        self.set_header_u16(NSCOUNT, count);
    }

    pub fn set_arcount(&mut self, count: u16) {
        self.set_header_u16(ARCOUNT, count);
    }
}
