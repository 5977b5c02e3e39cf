use super::MAX_NAME_LEN;
use doh_client_domain::DomainError;

/// Bounds-checked cursor over a DNS message.
pub struct WireReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> WireReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.buf.len().saturating_sub(self.pos)
    }

    pub fn read_u8(&mut self) -> Result<u8, DomainError> {
        let byte = *self.buf.get(self.pos).ok_or_else(|| truncated("u8", self.pos))?;
        self.pos += 1;
        Ok(byte)
    }

    pub fn read_u16(&mut self) -> Result<u16, DomainError> {
        let bytes = self.read_bytes(2)?;
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    pub fn read_u32(&mut self) -> Result<u32, DomainError> {
        let bytes = self.read_bytes(4)?;
        Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], DomainError> {
        let end = self
            .pos
            .checked_add(len)
            .filter(|end| *end <= self.buf.len())
            .ok_or_else(|| truncated("field", self.pos))?;
        let buf = self.buf;
        let bytes = &buf[self.pos..end];
        self.pos = end;
        Ok(bytes)
    }

    pub fn skip(&mut self, len: usize) -> Result<(), DomainError> {
        self.read_bytes(len).map(|_| ())
    }

    /// Read a possibly compressed domain name (RFC 1035 §4.1.4).
    ///
    /// Every compression pointer must target an offset strictly lower than the
    /// previous jump (the first one: lower than the pointer itself), so a
    /// hostile message cannot make this loop. The cursor ends up just past the
    /// name as it appears at the current position. The root name reads as `.`.
    pub fn read_name(&mut self) -> Result<String, DomainError> {
        let mut labels: Vec<String> = Vec::new();
        let mut cursor = self.pos;
        let mut limit = usize::MAX;
        let mut resume_at: Option<usize> = None;
        let mut wire_len = 1;

        loop {
            let len = *self.buf.get(cursor).ok_or_else(|| truncated("label", cursor))?;

            match len & 0xC0 {
                0x00 if len == 0 => {
                    cursor += 1;
                    break;
                }
                0x00 => {
                    let start = cursor + 1;
                    let end = start + len as usize;
                    let label = self
                        .buf
                        .get(start..end)
                        .ok_or_else(|| truncated("label", cursor))?;

                    wire_len += label.len() + 1;
                    if wire_len > MAX_NAME_LEN {
                        return Err(DomainError::MalformedResponse(format!(
                            "name at offset {} exceeds {} bytes",
                            self.pos, MAX_NAME_LEN
                        )));
                    }

                    labels.push(String::from_utf8_lossy(label).into_owned());
                    cursor = end;
                }
                0xC0 => {
                    let low = *self
                        .buf
                        .get(cursor + 1)
                        .ok_or_else(|| truncated("pointer", cursor))?;
                    let target = (((len & 0x3F) as usize) << 8) | low as usize;

                    if target >= limit.min(cursor) {
                        return Err(DomainError::MalformedResponse(format!(
                            "compression pointer at offset {} does not point backwards",
                            cursor
                        )));
                    }

                    if resume_at.is_none() {
                        resume_at = Some(cursor + 2);
                    }
                    limit = target;
                    cursor = target;
                }
                _ => {
                    return Err(DomainError::MalformedResponse(format!(
                        "unsupported label type 0x{:02x} at offset {}",
                        len & 0xC0,
                        cursor
                    )));
                }
            }
        }

        self.pos = resume_at.unwrap_or(cursor);

        if labels.is_empty() {
            Ok(".".to_string())
        } else {
            Ok(labels.join("."))
        }
    }
}

fn truncated(what: &str, offset: usize) -> DomainError {
    DomainError::MalformedResponse(format!("truncated {} at offset {}", what, offset))
}
