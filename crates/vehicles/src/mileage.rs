use serde::{Deserialize, Serialize};

use fleetcare_core::{DomainError, DomainResult, ValueObject};

/// Odometer reading in whole kilometers.
///
/// Bounded to `0..=999_999`; fractional readings are unrepresentable.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mileage(u32);

impl Mileage {
    pub const MAX_KM: u32 = 999_999;

    pub fn new(km: u32) -> DomainResult<Self> {
        if km > Self::MAX_KM {
            return Err(DomainError::validation(format!(
                "mileage {km} km exceeds the reasonable limit ({} km)",
                Self::MAX_KM
            )));
        }
        Ok(Self(km))
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// An odometer only moves forward: updates may never decrease.
    pub fn can_update_to(&self, new: Mileage) -> bool {
        new.0 >= self.0
    }

    pub fn difference(&self, other: Mileage) -> u32 {
        self.0.abs_diff(other.0)
    }
}

impl ValueObject for Mileage {}

impl core::fmt::Display for Mileage {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} km", group_thousands(self.0))
    }
}

/// Format an integer with `,` thousands separators (e.g. `50,000`).
pub(crate) fn group_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
