use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use fleetcare_core::{DomainError, DomainResult, ValueObject};

/// Supported currencies.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Mxn,
    Usd,
}

impl Currency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::Mxn => "MXN",
            Currency::Usd => "USD",
        }
    }
}

impl core::fmt::Display for Currency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Currency {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MXN" => Ok(Currency::Mxn),
            "USD" => Ok(Currency::Usd),
            other => Err(DomainError::validation(format!("unknown currency '{other}'"))),
        }
    }
}

/// A monetary amount in a single currency.
///
/// Amounts are exact decimals with at most 2 fraction digits, between 0 and
/// 9,999,999.99 inclusive. Arithmetic and comparison across currencies fail
/// rather than silently producing a wrong result.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    pub fn new(amount: Decimal, currency: Currency) -> DomainResult<Self> {
        if amount.is_sign_negative() {
            return Err(DomainError::validation("amount cannot be negative"));
        }
        if amount > Decimal::new(999_999_999, 2) {
            return Err(DomainError::validation(
                "amount exceeds the reasonable limit (9,999,999.99)",
            ));
        }
        // normalize() strips trailing zeros, so 100.500 still passes.
        if amount.normalize().scale() > 2 {
            return Err(DomainError::validation(
                "amount can have at most 2 decimal places",
            ));
        }
        Ok(Self { amount, currency })
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn add(&self, other: &Money) -> DomainResult<Money> {
        self.ensure_same_currency(other, "add")?;
        Money::new(self.amount + other.amount, self.currency)
    }

    pub fn is_greater_than(&self, other: &Money) -> DomainResult<bool> {
        self.ensure_same_currency(other, "compare")?;
        Ok(self.amount > other.amount)
    }

    fn ensure_same_currency(&self, other: &Money, op: &str) -> DomainResult<()> {
        if self.currency != other.currency {
            return Err(DomainError::currency_mismatch(format!(
                "cannot {op} {} and {}",
                self.currency, other.currency
            )));
        }
        Ok(())
    }
}

impl ValueObject for Money {}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} ${:.2}", self.currency, self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn accepts_two_decimal_places() {
        let money = Money::new(dec("100.50"), Currency::Usd).unwrap();
        assert_eq!(money.amount(), dec("100.50"));
        assert_eq!(money.to_string(), "USD $100.50");
    }

    #[test]
    fn rejects_three_decimal_places() {
        assert!(matches!(
            Money::new(dec("100.999"), Currency::Mxn),
            Err(DomainError::Validation(_))
        ));
        // Trailing zeros beyond 2 places are not significant.
        assert!(Money::new(dec("100.500"), Currency::Mxn).is_ok());
    }

    #[test]
    fn rejects_negative_and_oversized_amounts() {
        assert!(Money::new(dec("-0.01"), Currency::Mxn).is_err());
        assert!(Money::new(dec("10000000.00"), Currency::Mxn).is_err());
        assert!(Money::new(dec("9999999.99"), Currency::Mxn).is_ok());
    }

    #[test]
    fn add_same_currency() {
        let a = Money::new(dec("100.50"), Currency::Mxn).unwrap();
        let b = Money::new(dec("50"), Currency::Mxn).unwrap();
        assert_eq!(a.add(&b).unwrap().amount(), dec("150.50"));
    }

    #[test]
    fn add_across_currencies_fails() {
        let usd = Money::new(dec("100.50"), Currency::Usd).unwrap();
        let mxn = Money::new(dec("50"), Currency::Mxn).unwrap();
        assert!(matches!(
            usd.add(&mxn),
            Err(DomainError::CurrencyMismatch(_))
        ));
    }

    #[test]
    fn compare_across_currencies_fails() {
        let usd = Money::new(dec("1"), Currency::Usd).unwrap();
        let mxn = Money::new(dec("1"), Currency::Mxn).unwrap();
        assert!(usd.is_greater_than(&mxn).is_err());
        let usd2 = Money::new(dec("2"), Currency::Usd).unwrap();
        assert!(usd2.is_greater_than(&usd).unwrap());
    }
}
