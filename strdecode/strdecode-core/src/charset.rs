use std::{fmt, str::FromStr};

use crate::error::DecodeError;

/// Character encodings the decoder knows how to turn into text.
///
/// The set is closed: names are resolved once with [`Charset::for_name`] and
/// the decoder matches on the variant afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Charset {
    /// 7-bit ASCII (`US-ASCII`)
    UsAscii,
    /// Latin-1 (`ISO-8859-1`)
    Iso8859_1,
    /// UTF-16 with optional byte-order mark, big-endian by default (`UTF-16`)
    Utf16,
}

impl Charset {
    pub const ALL: [Charset; 3] = [Self::UsAscii, Self::Iso8859_1, Self::Utf16];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UsAscii => "US-ASCII",
            Self::Iso8859_1 => "ISO-8859-1",
            Self::Utf16 => "UTF-16",
        }
    }

    /// Resolve a charset by canonical name or alias, ignoring ASCII case.
    pub fn for_name(name: &str) -> Result<Self, DecodeError> {
        let lowered = name.trim().to_ascii_lowercase();
        match lowered.as_str() {
            "us-ascii" | "ascii" | "iso646-us" | "us" => Ok(Self::UsAscii),
            "iso-8859-1" | "iso_8859_1" | "iso8859-1" | "latin1" | "l1" => Ok(Self::Iso8859_1),
            "utf-16" | "utf16" => Ok(Self::Utf16),
            _ => Err(DecodeError::UnsupportedEncoding {
                name: name.to_string(),
            }),
        }
    }

    /// Number of bytes in one code unit.
    pub fn unit_width(&self) -> usize {
        match self {
            Self::UsAscii | Self::Iso8859_1 => 1,
            Self::Utf16 => 2,
        }
    }

    pub fn is_single_byte(&self) -> bool {
        self.unit_width() == 1
    }
}

impl FromStr for Charset {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::for_name(s)
    }
}

impl TryFrom<&str> for Charset {
    type Error = DecodeError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::for_name(s)
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
