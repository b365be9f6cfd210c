use serde::{Deserialize, Serialize};

use fleetcare_core::{DomainError, DomainResult, ValueObject};

/// License plate, normalized to uppercase and trimmed.
///
/// Accepted format is `XXX-###-XXX` (3 letters, dash, 3 digits, dash,
/// 3 letters), case-insensitive on input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LicensePlate(String);

impl LicensePlate {
    pub fn new(raw: &str) -> DomainResult<Self> {
        let plate = raw.trim().to_uppercase();

        if plate.is_empty() {
            return Err(DomainError::validation("license plate is required"));
        }
        if !Self::matches_format(&plate) {
            return Err(DomainError::validation(format!(
                "invalid license plate format '{raw}', expected ABC-123-XYZ"
            )));
        }

        Ok(Self(plate))
    }

    fn matches_format(plate: &str) -> bool {
        let bytes = plate.as_bytes();
        if bytes.len() != 11 {
            return false;
        }
        bytes.iter().enumerate().all(|(i, b)| match i {
            3 | 7 => *b == b'-',
            4..=6 => b.is_ascii_digit(),
            _ => b.is_ascii_uppercase(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for LicensePlate {}

impl core::fmt::Display for LicensePlate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn accepts_valid_plate_and_normalizes() {
        let plate = LicensePlate::new("  abc-123-xyz ").unwrap();
        assert_eq!(plate.as_str(), "ABC-123-XYZ");
    }

    #[test]
    fn rejects_empty_plate() {
        assert!(matches!(
            LicensePlate::new("   "),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn rejects_malformed_plates() {
        for raw in [
            "ABC123XYZ",
            "AB-123-XYZ",
            "ABC-12-XYZ",
            "ABC-123-XY",
            "123-ABC-123",
            "ABC-123-XYZ1",
            "ÁBC-123-XYZ",
        ] {
            assert!(
                matches!(LicensePlate::new(raw), Err(DomainError::Validation(_))),
                "expected rejection for {raw:?}"
            );
        }
    }

    proptest! {
        /// Property: every string matching the plate pattern (any letter case)
        /// is accepted and normalized to its uppercase form.
        #[test]
        fn every_well_formed_plate_is_accepted(raw in "[a-zA-Z]{3}-[0-9]{3}-[a-zA-Z]{3}") {
            let plate = LicensePlate::new(&raw).unwrap();
            prop_assert_eq!(plate.as_str(), raw.to_uppercase());
        }

        /// Property: strings that do not match the pattern are rejected.
        #[test]
        fn every_malformed_plate_is_rejected(raw in "[A-Z0-9-]{0,12}") {
            let well_formed = raw.len() == 11
                && raw.as_bytes().iter().enumerate().all(|(i, b)| match i {
                    3 | 7 => *b == b'-',
                    4..=6 => b.is_ascii_digit(),
                    _ => b.is_ascii_uppercase(),
                });
            prop_assume!(!well_formed);
            prop_assert!(LicensePlate::new(&raw).is_err());
        }
    }
}
