//! Domain names in uncompressed label format (RFC 1035 §3.1)
//!
//! `"codecrafters.io"` is stored as `\x0ccodecrafters\x02io\x00`.

use super::{check_capacity, truncated};
use beacon_dns_domain::CodecError;

/// Longest label the 6-bit length field can describe
pub const MAX_LABEL_LEN: usize = 63;

/// Length bytes with either of these bits set are compression pointers
/// (`0b11`) or reserved extended label types (`0b01`, `0b10`).
const LABEL_TYPE_MASK: u8 = 0xC0;

/// Reads the name starting at `start`.
///
/// Returns the dot-joined labels (no trailing dot, empty for the root name)
/// and the offset immediately after the terminating zero byte. A label
/// holding a `.` byte is refused, since the joined string would read back as
/// different labels.
pub fn decode_name(buf: &[u8], start: usize) -> Result<(String, usize), CodecError> {
    let mut name = String::new();
    let end = walk_labels(buf, start, |offset, label| {
        let label =
            std::str::from_utf8(label).map_err(|_| CodecError::InvalidLabelEncoding { offset })?;
        if !name.is_empty() {
            name.push('.');
        }
        name.push_str(label);
        Ok(())
    })?;
    Ok((name, end))
}

/// Returns the offset immediately after the name starting at `start`
/// without materialising it.
pub fn skip_name(buf: &[u8], start: usize) -> Result<usize, CodecError> {
    walk_labels(buf, start, |_, _| Ok(()))
}

/// Writes `name` at `start` and returns the offset after its terminator.
///
/// A single trailing dot is accepted, and `""` or `"."` encode the root name.
/// Nothing is written unless the whole encoded name fits.
pub fn encode_name(buf: &mut [u8], start: usize, name: &str) -> Result<usize, CodecError> {
    let labels = split_labels(name)?;
    let needed = encoded_len(&labels);
    check_capacity(buf.len(), start, needed)?;

    let mut pos = start;
    for label in labels {
        buf[pos] = label.len() as u8;
        pos += 1;
        buf[pos..pos + label.len()].copy_from_slice(label.as_bytes());
        pos += label.len();
    }
    buf[pos] = 0;

    Ok(pos + 1)
}

/// Bytes `name` occupies on the wire, terminator included.
pub fn encoded_name_len(name: &str) -> Result<usize, CodecError> {
    split_labels(name).map(|labels| encoded_len(&labels))
}

fn encoded_len(labels: &[&str]) -> usize {
    labels.iter().map(|l| l.len() + 1).sum::<usize>() + 1
}

fn split_labels(name: &str) -> Result<Vec<&str>, CodecError> {
    let trimmed = name.strip_suffix('.').unwrap_or(name);
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    trimmed
        .split('.')
        .map(|label| {
            if label.is_empty() {
                Err(CodecError::EmptyLabel {
                    name: name.to_string(),
                })
            } else if label.len() > MAX_LABEL_LEN {
                Err(CodecError::LabelTooLong {
                    label: label.to_string(),
                    len: label.len(),
                })
            } else {
                Ok(label)
            }
        })
        .collect()
}

fn walk_labels<F>(buf: &[u8], start: usize, mut visit: F) -> Result<usize, CodecError>
where
    F: FnMut(usize, &[u8]) -> Result<(), CodecError>,
{
    let mut pos = start;
    loop {
        let len_byte = *buf.get(pos).ok_or_else(|| truncated(pos, 1, buf.len()))?;
        if len_byte == 0 {
            return Ok(pos + 1);
        }
        if len_byte & LABEL_TYPE_MASK != 0 {
            return Err(CodecError::UnsupportedLabel {
                offset: pos,
                byte: len_byte,
            });
        }

        let label_start = pos + 1;
        let label_len = len_byte as usize;
        let label = buf
            .get(label_start..label_start + label_len)
            .ok_or_else(|| truncated(label_start, label_len, buf.len()))?;
        if let Some(i) = label.iter().position(|&b| b == b'.') {
            return Err(CodecError::DotInLabel {
                offset: label_start + i,
            });
        }
        visit(label_start, label)?;
        pos = label_start + label_len;
    }
}
