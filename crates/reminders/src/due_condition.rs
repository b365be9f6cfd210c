use chrono::{DateTime, Utc};

use fleetcare_core::{DomainError, DomainResult, ValueObject};
use fleetcare_vehicles::Mileage;

/// The trigger that marks a reminder overdue: an odometer threshold or a
/// calendar date.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DueCondition {
    Mileage(Mileage),
    Date(DateTime<Utc>),
}

impl DueCondition {
    pub fn by_mileage(threshold: Mileage) -> Self {
        DueCondition::Mileage(threshold)
    }

    pub fn by_date(due: DateTime<Utc>) -> Self {
        DueCondition::Date(due)
    }

    /// Build from the persisted `(type, value)` pair.
    ///
    /// `MILEAGE` values must parse to a non-negative integer, `DATE` values
    /// to an RFC 3339 timestamp.
    pub fn from_primitives(due_type: &str, value: &str) -> DomainResult<Self> {
        match due_type {
            "MILEAGE" => {
                let km: u32 = value.trim().parse().map_err(|_| {
                    DomainError::validation(format!("invalid due mileage '{value}'"))
                })?;
                Ok(DueCondition::Mileage(Mileage::new(km)?))
            }
            "DATE" => {
                let due = DateTime::parse_from_rfc3339(value.trim()).map_err(|_| {
                    DomainError::validation(format!("invalid due date '{value}'"))
                })?;
                Ok(DueCondition::Date(due.with_timezone(&Utc)))
            }
            other => Err(DomainError::validation(format!(
                "unknown due condition type '{other}'"
            ))),
        }
    }

    /// Persisted type tag.
    pub fn due_type(&self) -> &'static str {
        match self {
            DueCondition::Mileage(_) => "MILEAGE",
            DueCondition::Date(_) => "DATE",
        }
    }

    /// Persisted value string.
    pub fn due_value(&self) -> String {
        match self {
            DueCondition::Mileage(threshold) => threshold.value().to_string(),
            DueCondition::Date(due) => due.to_rfc3339(),
        }
    }

    /// Whether the condition has triggered for the given odometer reading
    /// and instant.
    pub fn is_due(&self, current_mileage: Mileage, now: DateTime<Utc>) -> bool {
        match self {
            DueCondition::Mileage(threshold) => current_mileage >= *threshold,
            DueCondition::Date(due) => now >= *due,
        }
    }

    /// Human-readable form (`50,000 km` or `2026-03-01`).
    pub fn display_value(&self) -> String {
        match self {
            DueCondition::Mileage(threshold) => threshold.to_string(),
            DueCondition::Date(due) => due.format("%Y-%m-%d").to_string(),
        }
    }
}

impl ValueObject for DueCondition {}

impl core::fmt::Display for DueCondition {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.due_type(), self.display_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn km(v: u32) -> Mileage {
        Mileage::new(v).unwrap()
    }

    #[test]
    fn parses_mileage_condition() {
        let due = DueCondition::from_primitives("MILEAGE", "50000").unwrap();
        assert_eq!(due, DueCondition::by_mileage(km(50_000)));
        assert_eq!(due.due_type(), "MILEAGE");
        assert_eq!(due.due_value(), "50000");
        assert_eq!(due.display_value(), "50,000 km");
    }

    #[test]
    fn parses_date_condition() {
        let due = DueCondition::from_primitives("DATE", "2026-03-01T00:00:00Z").unwrap();
        assert_eq!(due.due_type(), "DATE");
        assert_eq!(due.display_value(), "2026-03-01");
    }

    #[test]
    fn rejects_bad_inputs() {
        assert!(DueCondition::from_primitives("MILEAGE", "-5").is_err());
        assert!(DueCondition::from_primitives("MILEAGE", "soon").is_err());
        assert!(DueCondition::from_primitives("MILEAGE", "1000000").is_err());
        assert!(DueCondition::from_primitives("DATE", "next tuesday").is_err());
        assert!(DueCondition::from_primitives("WEATHER", "rainy").is_err());
    }

    #[test]
    fn mileage_condition_is_due_at_threshold() {
        let due = DueCondition::by_mileage(km(50_000));
        let now = Utc::now();
        assert!(!due.is_due(km(49_999), now));
        assert!(due.is_due(km(50_000), now));
        assert!(due.is_due(km(50_001), now));
    }

    #[test]
    fn date_condition_is_due_at_instant() {
        let now = Utc::now();
        let due = DueCondition::by_date(now);
        assert!(due.is_due(km(0), now));
        assert!(!due.is_due(km(0), now - chrono::Duration::seconds(1)));
    }
}
