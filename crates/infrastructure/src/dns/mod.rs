pub mod client;
pub mod json_answer;
pub mod strategy;
pub mod wire;

pub use client::{DohClient, SYSTEM_FALLBACK_TTL};
pub use json_answer::JsonAnswerDecoder;
pub use strategy::{DohStrategy, GetBinaryStrategy, JsonGetStrategy, PostBinaryStrategy, Strategy};
pub use wire::{MessageBuilder, ResponseParser};
