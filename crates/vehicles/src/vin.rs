use serde::{Deserialize, Serialize};

use fleetcare_core::{DomainError, DomainResult, ValueObject};

/// Vehicle identification number, normalized to uppercase and trimmed.
///
/// Exactly 17 characters from `[A-HJ-NPR-Z0-9]` (I, O and Q are not valid
/// VIN characters).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vin(String);

impl Vin {
    pub fn new(raw: &str) -> DomainResult<Self> {
        let vin = raw.trim().to_uppercase();

        if vin.is_empty() {
            return Err(DomainError::validation("VIN is required"));
        }
        if vin.chars().count() != 17 {
            return Err(DomainError::validation(
                "VIN must be exactly 17 characters",
            ));
        }
        if !vin.bytes().all(Self::is_vin_char) {
            return Err(DomainError::validation(
                "VIN contains invalid characters (I, O and Q are not allowed)",
            ));
        }

        Ok(Self(vin))
    }

    fn is_vin_char(b: u8) -> bool {
        match b {
            b'I' | b'O' | b'Q' => false,
            b'A'..=b'Z' | b'0'..=b'9' => true,
            _ => false,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// World manufacturer identifier (first 3 characters).
    pub fn manufacturer_code(&self) -> &str {
        &self.0[..3]
    }
}

impl ValueObject for Vin {}

impl core::fmt::Display for Vin {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}
