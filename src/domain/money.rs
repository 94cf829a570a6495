use rust_decimal::Decimal;
use std::fmt;

/// A strictly positive price, kept as a `Decimal` so it never passes
/// through floating point.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Amount(Decimal);

impl Amount {
    /// Panics on zero or negative values; in a `const` item that panic is a
    /// compile error, so menu prices are checked at build time.
    pub const fn new(value: Decimal) -> Self {
        assert!(
            !value.is_zero() && value.is_sign_positive(),
            "amount must be positive"
        );
        Self(value)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
