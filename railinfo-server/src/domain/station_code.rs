//! Station code type.

use std::fmt;

/// Maximum length of a station code.
const MAX_LEN: usize = 5;

/// Error returned when parsing an invalid station code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station code: {reason}")]
pub struct InvalidStationCode {
    reason: &'static str,
}

/// A valid Indian Railways station code.
///
/// Station codes are 1 to 5 uppercase ASCII letters (e.g. "NDLS" for New
/// Delhi, "BCT" for Mumbai Central). This type guarantees that any
/// `StationCode` value is valid by construction.
///
/// # Examples
///
/// ```
/// use railinfo_server::domain::StationCode;
///
/// let ndls = StationCode::parse("NDLS").unwrap();
/// assert_eq!(ndls.as_str(), "NDLS");
///
/// // Lowercase is rejected by `parse` but accepted by `parse_normalized`
/// assert!(StationCode::parse("ndls").is_err());
/// assert_eq!(StationCode::parse_normalized("ndls").unwrap().as_str(), "NDLS");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct StationCode {
    bytes: [u8; MAX_LEN],
    len: u8,
}

impl StationCode {
    /// Parse a station code from a string.
    ///
    /// The input must be 1 to 5 uppercase ASCII letters (A-Z).
    pub fn parse(s: &str) -> Result<Self, InvalidStationCode> {
        let input = s.as_bytes();

        if input.is_empty() || input.len() > MAX_LEN {
            return Err(InvalidStationCode {
                reason: "must be 1 to 5 characters",
            });
        }

        let mut bytes = [0u8; MAX_LEN];
        for (i, &b) in input.iter().enumerate() {
            if !b.is_ascii_uppercase() {
                return Err(InvalidStationCode {
                    reason: "must be uppercase ASCII letters A-Z",
                });
            }
            bytes[i] = b;
        }

        Ok(StationCode {
            bytes,
            len: input.len() as u8,
        })
    }

    /// Parse a station code, upcasing lowercase input first.
    ///
    /// Station codes are case-normalized on lookup: "ndls", "Ndls" and
    /// "NDLS" all resolve to the same code.
    pub fn parse_normalized(s: &str) -> Result<Self, InvalidStationCode> {
        Self::parse(&s.to_ascii_uppercase())
    }

    /// Returns the station code as a string slice.
    pub fn as_str(&self) -> &str {
        // SAFETY: We only store valid ASCII uppercase letters
        std::str::from_utf8(&self.bytes[..self.len as usize]).unwrap()
    }
}

impl fmt::Debug for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationCode({})", self.as_str())
    }
}

impl fmt::Display for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
