//! DoH Client Infrastructure Layer
pub mod dns;
pub mod http;
pub mod system;
