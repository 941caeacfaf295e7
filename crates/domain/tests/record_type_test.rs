use beacon_dns_domain::{RecordClass, RecordType};

#[test]
fn test_record_type_codes_roundtrip() {
    for rt in [
        RecordType::A,
        RecordType::NS,
        RecordType::CNAME,
        RecordType::SOA,
        RecordType::PTR,
        RecordType::MX,
        RecordType::TXT,
        RecordType::AAAA,
    ] {
        assert_eq!(RecordType::from_u16(rt.to_u16()), Some(rt));
        assert_eq!(rt.as_str().parse::<RecordType>(), Ok(rt));
    }
}

#[test]
fn test_a_record_is_type_one() {
    assert_eq!(RecordType::A.to_u16(), 1);
    assert_eq!(RecordClass::IN.to_u16(), 1);
}

#[test]
fn test_describe_unknown_type() {
    assert_eq!(RecordType::describe(1), "A");
    assert_eq!(RecordType::describe(65), "TYPE65");
}

#[test]
fn test_from_str_is_case_insensitive() {
    assert_eq!("aaaa".parse::<RecordType>(), Ok(RecordType::AAAA));
    assert!("BOGUS".parse::<RecordType>().is_err());
}

#[test]
fn test_record_class_display() {
    assert_eq!(RecordClass::IN.to_string(), "IN");
    assert_eq!(RecordClass::from_u16(3), Some(RecordClass::CH));
    assert_eq!(RecordClass::from_u16(255), None);
}
