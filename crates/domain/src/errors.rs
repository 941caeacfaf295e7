use thiserror::Error;

/// Failures of the DNS wire codec.
///
/// Every variant describes malformed input or a message that does not fit its
/// buffer. None of them are transient.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("Truncated message: need {needed} byte(s) at offset {offset}, buffer is {len} bytes")]
    TruncatedMessage {
        offset: usize,
        needed: usize,
        len: usize,
    },

    #[error("Label '{label}' is {len} bytes, the limit is 63")]
    LabelTooLong { label: String, len: usize },

    #[error("Empty label in domain name '{name}'")]
    EmptyLabel { name: String },

    #[error("Buffer capacity exceeded: need {needed} byte(s) at offset {offset}, capacity is {capacity}")]
    BufferCapacityExceeded {
        offset: usize,
        needed: usize,
        capacity: usize,
    },

    #[error("Invalid IPv4 address literal: {0}")]
    InvalidAddressLiteral(String),

    #[error("Unsupported label type 0x{byte:02x} at offset {offset}")]
    UnsupportedLabel { offset: usize, byte: u8 },

    #[error("Label at offset {offset} contains a '.' byte")]
    DotInLabel { offset: usize },

    #[error("Label at offset {offset} is not valid UTF-8")]
    InvalidLabelEncoding { offset: usize },

    #[error("Message carries no question")]
    MissingQuestion,
}
