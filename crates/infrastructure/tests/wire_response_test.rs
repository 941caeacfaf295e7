use beacon_dns_domain::config::AnswerConfig;
use beacon_dns_domain::CodecError;
use beacon_dns_infrastructure::dns::wire::{Message, HEADER_LEN};
use beacon_dns_infrastructure::dns::{build_answer_response, DnsServerHandler, ResponsePolicy};

fn build_query(id: u16, flags: [u8; 2], domain: &str, qtype: u16, qclass: u16) -> Vec<u8> {
    let mut buf = vec![
        (id >> 8) as u8,
        id as u8,
        flags[0],
        flags[1],
        0x00, 0x01, // QDCOUNT = 1
        0x00, 0x00, // ANCOUNT = 0
        0x00, 0x00, // NSCOUNT = 0
        0x00, 0x00, // ARCOUNT = 0
    ];
    for label in domain.split('.') {
        buf.push(label.len() as u8);
        buf.extend_from_slice(label.as_bytes());
    }
    buf.push(0x00); // root label
    buf.extend_from_slice(&qtype.to_be_bytes());
    buf.extend_from_slice(&qclass.to_be_bytes());
    buf
}

#[test]
fn test_codecrafters_end_to_end() {
    let query = build_query(0x1234, [0x00, 0x00], "codecrafters.io", 1, 1);
    let request = Message::parse(query.as_slice()).unwrap();
    assert!(!request.qr());

    let policy = ResponsePolicy::new(60, "8.8.8.8");
    let response = build_answer_response(&request, &policy).unwrap();

    assert_eq!(response.id(), 0x1234);
    assert!(response.qr());
    assert_eq!(response.qdcount(), 1);
    assert_eq!(response.ancount(), 1);
    assert_eq!(response.question_name().unwrap(), "codecrafters.io");
    assert_eq!(response.question_type().unwrap(), 1);
    assert_eq!(response.question_class().unwrap(), 1);
    assert_eq!(response.answer_name().unwrap(), "codecrafters.io");
    assert_eq!(response.answer_type().unwrap(), 1);
    assert_eq!(response.answer_class().unwrap(), 1);
    assert_eq!(response.ttl().unwrap(), 60);
    assert_eq!(response.rdlength().unwrap(), 4);
    assert_eq!(response.rdata().unwrap(), &[8, 8, 8, 8]);

    let expected: &[u8] = b"\x12\x34\x80\x00\x00\x01\x00\x01\x00\x00\x00\x00\
\x0ccodecrafters\x02io\x00\x00\x01\x00\x01\
\x0ccodecrafters\x02io\x00\x00\x01\x00\x01\x00\x00\x00\x3c\x00\x04\x08\x08\x08\x08";
    assert_eq!(response.wire_bytes().unwrap(), expected);
}

#[test]
fn test_response_id_matches_request_for_all_extremes() {
    let policy = ResponsePolicy::new(60, "8.8.8.8");
    for id in [0u16, 1, 0x7FFF, 0x8000, u16::MAX] {
        let query = build_query(id, [0x01, 0x00], "example.com", 1, 1);
        let request = Message::parse(query.as_slice()).unwrap();
        let response = build_answer_response(&request, &policy).unwrap();
        assert_eq!(response.id(), id);
    }
}

#[test]
fn test_question_type_and_class_echoed_verbatim() {
    let query = build_query(9, [0x01, 0x00], "example.com", 28, 3);
    let request = Message::parse(query.as_slice()).unwrap();
    let response = build_answer_response(&request, &ResponsePolicy::new(5, "1.2.3.4")).unwrap();

    assert_eq!(response.question_type().unwrap(), 28);
    assert_eq!(response.question_class().unwrap(), 3);
    assert_eq!(response.answer_type().unwrap(), 1);
    assert_eq!(response.answer_class().unwrap(), 1);
    assert_eq!(response.ttl().unwrap(), 5);
    assert_eq!(response.rdata().unwrap(), &[1, 2, 3, 4]);
}

#[test]
fn test_request_without_question_is_refused() {
    let query = [0x12, 0x34, 0x01, 0x00, 0, 0, 0, 0, 0, 0, 0, 0];
    let request = Message::parse(&query[..]).unwrap();
    let result = build_answer_response(&request, &ResponsePolicy::new(60, "8.8.8.8"));
    assert!(matches!(result, Err(CodecError::MissingQuestion)));
}

#[test]
fn test_bad_policy_address_is_refused() {
    let query = build_query(1, [0x01, 0x00], "example.com", 1, 1);
    let request = Message::parse(query.as_slice()).unwrap();
    let result = build_answer_response(&request, &ResponsePolicy::new(60, "1.2.3"));
    assert_eq!(
        result.unwrap_err(),
        CodecError::InvalidAddressLiteral("1.2.3".to_string())
    );
}

#[test]
fn test_policy_from_answer_config() {
    let config = AnswerConfig {
        ttl: 300,
        address: "192.0.2.1".to_string(),
    };
    assert_eq!(
        ResponsePolicy::from(&config),
        ResponsePolicy::new(300, "192.0.2.1")
    );
}

#[test]
fn test_handler_returns_only_used_bytes() {
    let handler = DnsServerHandler::new(ResponsePolicy::new(60, "8.8.8.8"));
    let query = build_query(0xABCD, [0x01, 0x00], "example.com", 1, 1);

    let wire = handler.handle_datagram(&query).unwrap();

    let question_len = query.len() - HEADER_LEN;
    // answer = question name + TYPE..RDLENGTH + 4 bytes of RDATA
    assert_eq!(wire.len(), HEADER_LEN + 2 * question_len + 10);
    assert_eq!(&wire[..2], &[0xAB, 0xCD]);
    assert_eq!(&wire[wire.len() - 4..], &[8, 8, 8, 8]);
}

#[test]
fn test_handler_rejects_malformed_datagrams() {
    let handler = DnsServerHandler::new(ResponsePolicy::new(60, "8.8.8.8"));

    assert!(matches!(
        handler.handle_datagram(&[0x12, 0x34, 0x01]),
        Err(CodecError::TruncatedMessage { .. })
    ));

    let mut query = build_query(1, [0x01, 0x00], "example.com", 1, 1);
    query[HEADER_LEN] = 0x20; // first label claims 32 bytes
    assert!(matches!(
        handler.handle_datagram(&query),
        Err(CodecError::TruncatedMessage { .. })
    ));

    let mut compressed = build_query(1, [0x01, 0x00], "a", 1, 1);
    compressed[HEADER_LEN] = 0xC0;
    assert!(matches!(
        handler.handle_datagram(&compressed),
        Err(CodecError::UnsupportedLabel { .. })
    ));
}

#[test]
fn test_handler_refuses_answer_that_does_not_fit() {
    let handler = DnsServerHandler::new(ResponsePolicy::new(60, "8.8.8.8"));
    let huge_name = vec!["x".repeat(63); 4].join(".");
    let query = build_query(1, [0x01, 0x00], &huge_name, 1, 1);
    assert!(matches!(
        handler.handle_datagram(&query),
        Err(CodecError::BufferCapacityExceeded { .. })
    ));
}

fn query_with_raw_qname(qname: &[u8]) -> Vec<u8> {
    let mut buf = vec![
        0x12, 0x34, 0x01, 0x00, // ID + flags
        0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // QDCOUNT=1
    ];
    buf.extend_from_slice(qname);
    buf.extend_from_slice(&[0x00, 0x01, 0x00, 0x01]); // A, IN
    buf
}

#[test]
fn test_question_with_dot_inside_label_is_refused() {
    let handler = DnsServerHandler::new(ResponsePolicy::new(60, "8.8.8.8"));

    for qname in [&b"\x03a.b\x00"[..], &b"\x01.\x00"[..]] {
        let query = query_with_raw_qname(qname);
        assert!(matches!(
            Message::parse(query.as_slice()),
            Err(CodecError::DotInLabel { .. })
        ));
        assert!(
            matches!(
                handler.handle_datagram(&query),
                Err(CodecError::DotInLabel { .. })
            ),
            "qname {:?} must not be answered",
            qname
        );
    }
}

#[test]
fn test_echoed_question_bytes_match_request() {
    let handler = DnsServerHandler::new(ResponsePolicy::new(60, "8.8.8.8"));
    let query = query_with_raw_qname(b"\x03www\x07example\x03com\x00");

    let wire = handler.handle_datagram(&query).unwrap();

    assert_eq!(&wire[HEADER_LEN..query.len()], &query[HEADER_LEN..]);
}
