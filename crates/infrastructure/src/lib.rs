//! Beacon DNS Infrastructure Layer
pub mod dns;
