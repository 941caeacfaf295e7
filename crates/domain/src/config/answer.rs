use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

/// What the responder puts in the fabricated A record.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnswerConfig {
    /// TTL advertised to the client, in seconds
    #[serde(default = "default_ttl")]
    pub ttl: u32,

    /// Dotted-quad IPv4 address written as RDATA
    #[serde(default = "default_address")]
    pub address: String,
}

impl Default for AnswerConfig {
    fn default() -> Self {
        Self {
            ttl: default_ttl(),
            address: default_address(),
        }
    }
}

impl AnswerConfig {
    pub fn parsed_address(&self) -> Option<Ipv4Addr> {
        self.address.parse().ok()
    }
}

fn default_ttl() -> u32 {
    60
}

fn default_address() -> String {
    "8.8.8.8".to_string()
}
