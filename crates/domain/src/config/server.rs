use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    pub dns_port: u16,

    pub bind_address: String,

    /// Number of UDP sockets bound to the same address with SO_REUSEPORT,
    /// one worker task each.
    pub num_workers: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            dns_port: 2053,
            bind_address: "127.0.0.1".to_string(),
            num_workers: 1,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr_string(&self) -> String {
        if self.bind_address.contains(':') {
            format!("[{}]:{}", self.bind_address, self.dns_port)
        } else {
            format!("{}:{}", self.bind_address, self.dns_port)
        }
    }
}
