//! DNS wire format (RFC 1035 §4) as carried unmodified by RFC 8484.

pub mod base64url;
pub mod message_builder;
pub mod reader;
pub mod response_parser;

pub use message_builder::MessageBuilder;
pub use reader::WireReader;
pub use response_parser::{ResponseParser, WireHeader};

/// Fixed size of the message header.
pub const HEADER_LEN: usize = 12;

/// Longest label permitted on the wire.
pub const MAX_LABEL_LEN: usize = 63;

/// Longest encoded name, length bytes and root terminator included.
pub const MAX_NAME_LEN: usize = 255;

pub const CLASS_IN: u16 = 1;
