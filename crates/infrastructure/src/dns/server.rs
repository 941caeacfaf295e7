use super::wire::Message;
use super::wire_response::{build_answer_response, ResponsePolicy};
use beacon_dns_domain::{CodecError, RecordType};
use tracing::{debug, trace, Level};

/// Turns one received datagram into the bytes to send back.
///
/// Holds no per-message state, so a single instance can be shared by every
/// UDP worker.
#[derive(Debug, Clone)]
pub struct DnsServerHandler {
    policy: ResponsePolicy,
}

impl DnsServerHandler {
    pub fn new(policy: ResponsePolicy) -> Self {
        Self { policy }
    }

    pub fn handle_datagram(&self, datagram: &[u8]) -> Result<Vec<u8>, CodecError> {
        let request = Message::parse(datagram)?;
        let response = build_answer_response(&request, &self.policy)?;
        let wire = response.wire_bytes()?;

        if tracing::enabled!(Level::DEBUG) {
            let qname = response.question_name()?;
            let qtype = response.question_type()?;
            let qclass = response.question_class()?;
            debug!(
                request_id = request.id(),
                response_id = response.id(),
                qr = response.qr(),
                qdcount = response.qdcount(),
                ancount = response.ancount(),
                qname = %qname,
                qtype = %RecordType::describe(qtype),
                qclass,
                "DNS query answered"
            );
        }
        trace!(request = ?datagram, response = ?wire, "DNS datagram bytes");

        Ok(wire.to_vec())
    }
}
