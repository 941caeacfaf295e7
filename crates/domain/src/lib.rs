//! Beacon DNS Domain Layer
pub mod config;
pub mod errors;
pub mod record_type;

pub use config::{CliOverrides, Config, ConfigError};
pub use errors::CodecError;
pub use record_type::{RecordClass, RecordType};
