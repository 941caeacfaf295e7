use super::wire::{Message, MAX_MESSAGE_SIZE};
use beacon_dns_domain::config::AnswerConfig;
use beacon_dns_domain::{CodecError, RecordClass, RecordType};

/// What the responder puts in every answer it fabricates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponsePolicy {
    pub ttl: u32,
    /// Dotted-quad IPv4 address written as A-record RDATA
    pub address: String,
}

impl ResponsePolicy {
    pub fn new(ttl: u32, address: impl Into<String>) -> Self {
        Self {
            ttl,
            address: address.into(),
        }
    }
}

impl From<&AnswerConfig> for ResponsePolicy {
    fn from(config: &AnswerConfig) -> Self {
        Self::new(config.ttl, config.address.clone())
    }
}

/// Builds a one-question, one-answer A response to `request` in a fresh
/// 512-byte buffer.
///
/// The ID and the question (name, type, class) are copied from the request.
/// The answer reuses the question name with TYPE=A, CLASS=IN and the
/// policy's TTL and address.
pub fn build_answer_response<B: AsRef<[u8]>>(
    request: &Message<B>,
    policy: &ResponsePolicy,
) -> Result<Message<[u8; MAX_MESSAGE_SIZE]>, CodecError> {
    if request.qdcount() == 0 {
        return Err(CodecError::MissingQuestion);
    }

    let name = request.question_name()?;
    let qtype = request.question_type()?;
    let qclass = request.question_class()?;

    let mut response = Message::empty();
    response.set_id(request.id());
    response.set_qr(true);
    response.set_qdcount(1);
    response.set_ancount(1);

    response.set_question_name(&name)?;
    response.set_question_type(qtype)?;
    response.set_question_class(qclass)?;

    response.set_answer_name(&name)?;
    response.set_answer_type(RecordType::A.to_u16())?;
    response.set_answer_class(RecordClass::IN.to_u16())?;
    response.set_ttl(policy.ttl)?;
    response.set_rdata_ipv4(&policy.address)?;

    Ok(response)
}
