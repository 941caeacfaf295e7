pub mod server;
pub mod wire;
pub mod wire_response;

pub use server::DnsServerHandler;
pub use wire::{Message, MAX_MESSAGE_SIZE};
pub use wire_response::{build_answer_response, ResponsePolicy};
