use crate::error::{QrBillError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A bank account identifier validated by the ISO 7064 MOD 97-10 checksum.
///
/// An `Iban` can only be obtained through [`Iban::parse`], so every instance
/// is guaranteed to hold a normalized (whitespace-free, uppercase) value that
/// passes the checksum. Equality follows the normalized value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Iban(String);

impl Iban {
    /// Validates `input` and wraps it on success.
    ///
    /// Whitespace is stripped and letters are uppercased before validation,
    /// so `"ch93 0076 2011 6238 5295 7"` and `"CH9300762011623852957"` are
    /// accepted identically. Malformed input is a normal rejected case, never
    /// a panic.
    pub fn parse(input: &str) -> Result<Self> {
        let normalized: String = input
            .split_whitespace()
            .collect::<String>()
            .to_uppercase();

        if normalized.len() < 15 || normalized.len() > 34 {
            return Err(QrBillError::InvalidIban(format!(
                "length {} is outside 15..=34",
                normalized.len()
            )));
        }
        if !normalized.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(QrBillError::InvalidIban(
                "contains non-alphanumeric characters".to_string(),
            ));
        }
        if mod_97_remainder(&normalized) != 1 {
            return Err(QrBillError::InvalidIban(
                "checksum mismatch".to_string(),
            ));
        }

        Ok(Self(normalized))
    }

    /// The normalized identifier string.
    pub fn value(&self) -> &str {
        &self.0
    }
}

/// ISO 7064 MOD 97-10 over the rearranged identifier.
///
/// The first four characters move to the end, letters expand to two digits
/// (A=10 … Z=35), and the remainder is folded digit by digit so no big
/// integer is ever materialized. Valid identifiers yield 1.
fn mod_97_remainder(normalized: &str) -> u32 {
    let (head, tail) = normalized.split_at(4);
    let mut remainder: u32 = 0;
    for byte in tail.bytes().chain(head.bytes()) {
        let value = match byte {
            b'0'..=b'9' => u32::from(byte - b'0'),
            _ => u32::from(byte - b'A') + 10,
        };
        if value < 10 {
            remainder = (remainder * 10 + value) % 97;
        } else {
            remainder = (remainder * 10 + value / 10) % 97;
            remainder = (remainder * 10 + value % 10) % 97;
        }
    }
    remainder
}

impl fmt::Display for Iban {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Iban {
    type Err = QrBillError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Iban {
    type Error = QrBillError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Iban> for String {
    fn from(iban: Iban) -> Self {
        iban.0
    }
}
