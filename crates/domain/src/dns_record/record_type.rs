use std::fmt;
use std::str::FromStr;

/// DNS record type as carried in the 16-bit TYPE field.
///
/// The named variants are the types whose payloads this client knows how to
/// render; every other code survives decoding as [`RecordType::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    NS,
    CNAME,
    MX,
    TXT,
    AAAA,
    Unknown(u16),
}

impl RecordType {
    pub fn to_u16(&self) -> u16 {
        match self {
            RecordType::A => 1,
            RecordType::NS => 2,
            RecordType::CNAME => 5,
            RecordType::MX => 15,
            RecordType::TXT => 16,
            RecordType::AAAA => 28,
            RecordType::Unknown(code) => *code,
        }
    }

    pub fn from_u16(code: u16) -> Self {
        match code {
            1 => RecordType::A,
            2 => RecordType::NS,
            5 => RecordType::CNAME,
            15 => RecordType::MX,
            16 => RecordType::TXT,
            28 => RecordType::AAAA,
            other => RecordType::Unknown(other),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, RecordType::Unknown(_))
    }
}

impl From<u16> for RecordType {
    fn from(code: u16) -> Self {
        Self::from_u16(code)
    }
}

impl From<RecordType> for u16 {
    fn from(record_type: RecordType) -> Self {
        record_type.to_u16()
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordType::A => f.write_str("A"),
            RecordType::NS => f.write_str("NS"),
            RecordType::CNAME => f.write_str("CNAME"),
            RecordType::MX => f.write_str("MX"),
            RecordType::TXT => f.write_str("TXT"),
            RecordType::AAAA => f.write_str("AAAA"),
            // RFC 3597 presentation form
            RecordType::Unknown(code) => write!(f, "TYPE{}", code),
        }
    }
}

impl FromStr for RecordType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        match upper.as_str() {
            "A" => Ok(RecordType::A),
            "NS" => Ok(RecordType::NS),
            "CNAME" => Ok(RecordType::CNAME),
            "MX" => Ok(RecordType::MX),
            "TXT" => Ok(RecordType::TXT),
            "AAAA" => Ok(RecordType::AAAA),
            other => other
                .strip_prefix("TYPE")
                .unwrap_or(other)
                .parse::<u16>()
                .map(RecordType::from_u16)
                .map_err(|_| format!("Unknown record type: {}", s)),
        }
    }
}
