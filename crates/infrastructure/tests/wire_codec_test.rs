mod helpers;

use doh_client_domain::{DomainError, RecordType, ResourceRecord};
use doh_client_infrastructure::dns::wire::{MessageBuilder, ResponseParser};
use helpers::{pointer, ResponseBuilder, QUESTION_NAME_OFFSET};

#[test]
fn test_single_a_record_round_trip() {
    let long_label = format!("{}.example", "z".repeat(63));
    for domain in ["example.com", "a.b.c.d.e", "xn--bcher-kva.example", long_label.as_str()] {
        let bytes = ResponseBuilder::new()
            .question(domain, 1)
            .answer(domain, 1, 3600, &[203, 0, 113, 9])
            .build();

        let records = ResponseParser::parse(&bytes).unwrap();
        assert_eq!(
            records,
            vec![ResourceRecord::new(domain, RecordType::A, 3600, "203.0.113.9")]
        );
    }
}

#[test]
fn test_query_built_by_builder_is_not_a_response() {
    let query = MessageBuilder::build_query("example.com", RecordType::A).unwrap();
    assert_eq!(ResponseParser::parse(&query), Err(DomainError::NotAResponse));
}

#[test]
fn test_query_with_response_bit_set_parses_question() {
    let mut message = MessageBuilder::build_query("example.com", RecordType::TXT).unwrap();
    message[2] |= 0x80;
    assert!(ResponseParser::parse(&message).unwrap().is_empty());
}

#[test]
fn test_compressed_answer_names_are_followed() {
    let bytes = ResponseBuilder::new()
        .question("example.com", 1)
        .raw_answer(&pointer(QUESTION_NAME_OFFSET), 1, 60, &[192, 0, 2, 1])
        .raw_answer(&pointer(QUESTION_NAME_OFFSET), 1, 60, &[192, 0, 2, 2])
        .build();

    let records = ResponseParser::parse(&bytes).unwrap();
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.name == "example.com"));
    assert_eq!(records[1].data, "192.0.2.2");
}

#[test]
fn test_partially_compressed_name() {
    // "www" followed by a pointer to the question's "example.com"
    let mut owner = b"\x03www".to_vec();
    owner.extend_from_slice(&pointer(QUESTION_NAME_OFFSET));

    let bytes = ResponseBuilder::new()
        .question("example.com", 5)
        .raw_answer(&owner, 1, 30, &[198, 51, 100, 1])
        .build();

    let records = ResponseParser::parse(&bytes).unwrap();
    assert_eq!(records[0].name, "www.example.com");
}

#[test]
fn test_pointer_loop_stops_decoding() {
    let good = ResponseBuilder::new()
        .question("example.com", 1)
        .answer("example.com", 1, 60, &[192, 0, 2, 1]);
    let offset = good.build().len() as u16;

    // the second answer's name points at itself
    let bytes = good
        .raw_answer(&pointer(offset), 1, 60, &[192, 0, 2, 2])
        .build();

    let records = ResponseParser::parse(&bytes).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].data, "192.0.2.1");
}

#[test]
fn test_truncated_trailing_record_is_dropped() {
    let bytes = ResponseBuilder::new()
        .question("example.com", 1)
        .answer("example.com", 1, 60, &[192, 0, 2, 1])
        .trailing(&[0xC0, 0x0C, 0x00, 0x01, 0x00])
        .build_with_answer_count(2);

    let records = ResponseParser::parse(&bytes).unwrap();
    assert_eq!(records.len(), 1);
}

#[test]
fn test_rdlength_past_end_is_dropped() {
    let mut bytes = ResponseBuilder::new()
        .question("example.com", 1)
        .answer("example.com", 1, 60, &[192, 0, 2, 1])
        .build();
    // claim 16 bytes of rdata while 4 are present
    let len = bytes.len();
    bytes[len - 6..len - 4].copy_from_slice(&16u16.to_be_bytes());

    assert!(ResponseParser::parse(&bytes).unwrap().is_empty());
}

#[test]
fn test_answer_count_larger_than_records() {
    let bytes = ResponseBuilder::new()
        .question("example.com", 1)
        .answer("example.com", 1, 60, &[192, 0, 2, 1])
        .build_with_answer_count(5);

    assert_eq!(ResponseParser::parse(&bytes).unwrap().len(), 1);
}

#[test]
fn test_mixed_types() {
    let aaaa = [
        0x20, 0x01, 0x0d, 0xb8, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x01,
    ];
    let bytes = ResponseBuilder::new()
        .question("example.com", 255)
        .answer("example.com", 28, 120, &aaaa)
        .answer("example.com", 15, 120, &[0, 10, 4, b'm', b'a', b'i', b'l', 0xC0, 0x0C])
        .answer("example.com", 65, 120, &[0x00, 0x01, 0x00])
        .build();

    let records = ResponseParser::parse(&bytes).unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].data, "2001:0db8:0000:0000:0000:0000:0000:0001");
    assert_eq!(records[1].record_type, RecordType::MX);
    assert_eq!(records[1].data, "000a046d61696cc00c");
    assert_eq!(records[2].record_type, RecordType::Unknown(65));
    assert_eq!(records[2].data, "000100");
}

#[test]
fn test_ttl_taken_verbatim() {
    let bytes = ResponseBuilder::new()
        .answer("example.com", 1, u32::MAX, &[10, 0, 0, 1])
        .build();

    assert_eq!(ResponseParser::parse(&bytes).unwrap()[0].ttl, u32::MAX);
}

#[test]
fn test_root_owner_name() {
    let bytes = ResponseBuilder::new()
        .answer(".", 2, 518400, b"\x01a\x0croot-servers\x03net\x00")
        .build();

    let records = ResponseParser::parse(&bytes).unwrap();
    assert_eq!(records[0].name, ".");
    assert_eq!(records[0].record_type, RecordType::NS);
}

#[test]
fn test_short_buffers_are_malformed() {
    for bytes in [&[][..], &[0x80][..], &[0x00, 0x00, 0x81, 0x80, 0, 0, 0, 1, 0, 0, 0][..]] {
        assert!(matches!(
            ResponseParser::parse(bytes),
            Err(DomainError::MalformedResponse(_))
        ));
    }
}

#[test]
fn test_response_bit_clear_yields_no_records() {
    let bytes = ResponseBuilder::new()
        .flags(0x0100)
        .question("example.com", 1)
        .answer("example.com", 1, 60, &[192, 0, 2, 1])
        .build();

    assert!(ResponseParser::parse(&bytes).is_err());
}
