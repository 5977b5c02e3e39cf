#![allow(dead_code, unused_imports)]

mod http_server_mock;
mod mock_ports;
mod wire_builder;

pub use http_server_mock::{CapturedRequest, MockHttpServer};
pub use mock_ports::{MockHttpTransport, MockSystemResolver};
pub use wire_builder::{encode_name, pointer, ResponseBuilder, QUESTION_NAME_OFFSET};
