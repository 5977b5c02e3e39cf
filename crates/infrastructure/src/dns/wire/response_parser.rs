use super::{WireReader, HEADER_LEN};
use doh_client_domain::{DomainError, RecordType, ResourceRecord};
use std::fmt::Write;
use std::net::Ipv4Addr;
use tracing::debug;

/// The fixed 12-byte message header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WireHeader {
    pub id: u16,
    pub flags: u16,
    pub qd_count: u16,
    pub an_count: u16,
    pub ns_count: u16,
    pub ar_count: u16,
}

impl WireHeader {
    pub fn parse(bytes: &[u8]) -> Result<Self, DomainError> {
        if bytes.len() < HEADER_LEN {
            return Err(DomainError::MalformedResponse(format!(
                "message is {} bytes, header needs {}",
                bytes.len(),
                HEADER_LEN
            )));
        }

        let mut reader = WireReader::new(bytes);
        Ok(Self {
            id: reader.read_u16()?,
            flags: reader.read_u16()?,
            qd_count: reader.read_u16()?,
            an_count: reader.read_u16()?,
            ns_count: reader.read_u16()?,
            ar_count: reader.read_u16()?,
        })
    }

    pub fn is_response(&self) -> bool {
        self.flags & 0x8000 != 0
    }

    pub fn rcode(&self) -> u8 {
        (self.flags & 0x000F) as u8
    }
}

pub struct ResponseParser;

impl ResponseParser {
    /// Decode the answer section of a response message.
    ///
    /// Only the header can make this fail. A truncated or malformed record ends
    /// decoding and the records read before it are returned.
    pub fn parse(bytes: &[u8]) -> Result<Vec<ResourceRecord>, DomainError> {
        let header = WireHeader::parse(bytes)?;
        if !header.is_response() {
            return Err(DomainError::NotAResponse);
        }

        debug!(
            rcode = header.rcode(),
            questions = header.qd_count,
            answers = header.an_count,
            "Parsing DNS response"
        );

        let mut reader = WireReader::new(bytes);
        reader.skip(HEADER_LEN)?;

        for index in 0..header.qd_count {
            if let Err(e) = reader.read_name().and_then(|_| reader.skip(4)) {
                debug!(question = index, error = %e, "Question section is truncated");
                return Ok(Vec::new());
            }
        }

        let mut records = Vec::with_capacity(header.an_count as usize);
        for index in 0..header.an_count {
            match Self::read_record(&mut reader) {
                Ok(record) => records.push(record),
                Err(e) => {
                    debug!(
                        answer = index,
                        decoded = records.len(),
                        error = %e,
                        "Stopped decoding answers"
                    );
                    break;
                }
            }
        }

        Ok(records)
    }

    fn read_record(reader: &mut WireReader<'_>) -> Result<ResourceRecord, DomainError> {
        let name = reader.read_name()?;
        let record_type = RecordType::from_u16(reader.read_u16()?);
        reader.skip(2)?; // class
        let ttl = reader.read_u32()?;
        let rdlength = reader.read_u16()? as usize;
        let rdata = reader.read_bytes(rdlength)?;

        Ok(ResourceRecord::new(
            name,
            record_type,
            ttl,
            render_rdata(record_type, rdata),
        ))
    }
}

/// Human-readable form of a record payload.
pub fn render_rdata(record_type: RecordType, rdata: &[u8]) -> String {
    match (record_type, rdata.len()) {
        (RecordType::A, 4) => Ipv4Addr::new(rdata[0], rdata[1], rdata[2], rdata[3]).to_string(),
        (RecordType::AAAA, 16) => rdata
            .chunks_exact(2)
            .map(|pair| format!("{:02x}{:02x}", pair[0], pair[1]))
            .collect::<Vec<_>>()
            .join(":"),
        _ => hex_dump(rdata),
    }
}

fn hex_dump(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        let _ = write!(out, "{:02x}", byte);
    }
    out
}
