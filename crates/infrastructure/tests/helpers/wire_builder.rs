#![allow(dead_code)]

/// Builds synthetic DNS response messages byte by byte.
pub struct ResponseBuilder {
    flags: u16,
    questions: Vec<Vec<u8>>,
    answers: Vec<Vec<u8>>,
    trailing: Vec<u8>,
}

impl Default for ResponseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseBuilder {
    pub fn new() -> Self {
        Self {
            flags: 0x8180,
            questions: Vec::new(),
            answers: Vec::new(),
            trailing: Vec::new(),
        }
    }

    pub fn flags(mut self, flags: u16) -> Self {
        self.flags = flags;
        self
    }

    pub fn question(mut self, name: &str, qtype: u16) -> Self {
        let mut entry = encode_name(name);
        entry.extend_from_slice(&qtype.to_be_bytes());
        entry.extend_from_slice(&1u16.to_be_bytes());
        self.questions.push(entry);
        self
    }

    /// Answer whose owner name is given as raw wire bytes (labels or pointer).
    pub fn raw_answer(mut self, name: &[u8], rtype: u16, ttl: u32, rdata: &[u8]) -> Self {
        let mut entry = name.to_vec();
        entry.extend_from_slice(&rtype.to_be_bytes());
        entry.extend_from_slice(&1u16.to_be_bytes());
        entry.extend_from_slice(&ttl.to_be_bytes());
        entry.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
        entry.extend_from_slice(rdata);
        self.answers.push(entry);
        self
    }

    pub fn answer(self, name: &str, rtype: u16, ttl: u32, rdata: &[u8]) -> Self {
        let name = encode_name(name);
        self.raw_answer(&name, rtype, ttl, rdata)
    }

    /// Raw bytes appended after the last answer.
    pub fn trailing(mut self, bytes: &[u8]) -> Self {
        self.trailing.extend_from_slice(bytes);
        self
    }

    pub fn build(&self) -> Vec<u8> {
        self.build_with_answer_count(self.answers.len() as u16)
    }

    pub fn build_with_answer_count(&self, an_count: u16) -> Vec<u8> {
        let mut message = Vec::new();
        message.extend_from_slice(&0u16.to_be_bytes());
        message.extend_from_slice(&self.flags.to_be_bytes());
        message.extend_from_slice(&(self.questions.len() as u16).to_be_bytes());
        message.extend_from_slice(&an_count.to_be_bytes());
        message.extend_from_slice(&[0, 0, 0, 0]);
        for question in &self.questions {
            message.extend_from_slice(question);
        }
        for answer in &self.answers {
            message.extend_from_slice(answer);
        }
        message.extend_from_slice(&self.trailing);
        message
    }
}

pub fn encode_name(name: &str) -> Vec<u8> {
    let mut out = Vec::new();
    for label in name.trim_end_matches('.').split('.').filter(|l| !l.is_empty()) {
        out.push(label.len() as u8);
        out.extend_from_slice(label.as_bytes());
    }
    out.push(0);
    out
}

/// Offset of the first question name, the usual compression target.
pub const QUESTION_NAME_OFFSET: u16 = 12;

pub fn pointer(offset: u16) -> [u8; 2] {
    (0xC000 | offset).to_be_bytes()
}
