//! Train number type.

use std::fmt;

/// Error returned when parsing an invalid train number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid train number: {reason}")]
pub struct InvalidTrainNumber {
    reason: &'static str,
}

/// A valid 5-digit Indian Railways train number.
///
/// Train numbers are always exactly 5 ASCII digits (e.g. "12951" for the
/// Mumbai Rajdhani). This type guarantees that any `TrainNumber` value is
/// valid by construction.
///
/// # Examples
///
/// ```
/// use railinfo_server::domain::TrainNumber;
///
/// let rajdhani = TrainNumber::parse("12951").unwrap();
/// assert_eq!(rajdhani.as_str(), "12951");
///
/// // Wrong length is rejected
/// assert!(TrainNumber::parse("1295").is_err());
/// assert!(TrainNumber::parse("129511").is_err());
///
/// // Non-digits are rejected
/// assert!(TrainNumber::parse("12A51").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TrainNumber([u8; 5]);

impl TrainNumber {
    /// Parse a train number from a string.
    ///
    /// The input must be exactly 5 ASCII digits (0-9).
    pub fn parse(s: &str) -> Result<Self, InvalidTrainNumber> {
        let bytes = s.as_bytes();

        if bytes.len() != 5 {
            return Err(InvalidTrainNumber {
                reason: "must be exactly 5 characters",
            });
        }

        for &b in bytes {
            if !b.is_ascii_digit() {
                return Err(InvalidTrainNumber {
                    reason: "must be ASCII digits 0-9",
                });
            }
        }

        Ok(TrainNumber([bytes[0], bytes[1], bytes[2], bytes[3], bytes[4]]))
    }

    /// Returns the train number as a string slice.
    pub fn as_str(&self) -> &str {
        // SAFETY: We only store valid ASCII digits
        std::str::from_utf8(&self.0).unwrap()
    }
}

impl fmt::Debug for TrainNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TrainNumber({})", self.as_str())
    }
}

impl fmt::Display for TrainNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Roundtrip: parse then as_str returns the original
        #[test]
        fn roundtrip(s in "[0-9]{5}") {
            let number = TrainNumber::parse(&s).unwrap();
            prop_assert_eq!(number.as_str(), s.as_str());
        }

        /// Any 5-digit string can be parsed
        #[test]
        fn valid_always_parses(s in "[0-9]{5}") {
            prop_assert!(TrainNumber::parse(&s).is_ok());
        }

        /// Wrong-length strings are always rejected
        #[test]
        fn wrong_length_rejected(s in "[0-9]{0,4}|[0-9]{6,10}") {
            prop_assert!(TrainNumber::parse(&s).is_err());
        }

        /// Strings with letters are rejected
        #[test]
        fn letters_rejected(s in "[0-9A-Z]{5}".prop_filter("has letter", |s| s.chars().any(|c| c.is_ascii_uppercase()))) {
            prop_assert!(TrainNumber::parse(&s).is_err());
        }
    }
}
