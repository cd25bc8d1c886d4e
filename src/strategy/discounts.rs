//! Built-in discount strategies

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::common::types::Money;
use crate::strategy::traits::{BoxedDiscount, DiscountStrategy};

/// Percentage-of-amount discount
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PercentageDiscount {
    key: String,
    /// Discount as a percentage of the base amount
    rate_percent: Decimal,
}

impl PercentageDiscount {
    pub fn new(key: impl Into<String>, rate_percent: Decimal) -> Self {
        Self {
            key: key.into(),
            rate_percent,
        }
    }

    /// Seasonal promotion: 10% of the base amount
    pub fn seasonal() -> Self {
        Self::new("seasonal", dec!(10.0))
    }

    /// Loyalty reward: 15% of the base amount
    pub fn loyalty() -> Self {
        Self::new("loyalty", dec!(15.0))
    }

    pub fn rate_percent(&self) -> Decimal {
        self.rate_percent
    }
}

impl DiscountStrategy for PercentageDiscount {
    fn key(&self) -> &str {
        &self.key
    }

    fn apply(&self, amount: Money) -> Money {
        amount * self.rate_percent / dec!(100.0)
    }
}

/// Fixed deduction regardless of the base amount
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatDiscount {
    key: String,
    amount: Money,
}

impl FlatDiscount {
    pub fn new(key: impl Into<String>, amount: Money) -> Self {
        Self {
            key: key.into(),
            amount,
        }
    }
}

impl DiscountStrategy for FlatDiscount {
    fn key(&self) -> &str {
        &self.key
    }

    fn apply(&self, _amount: Money) -> Money {
        self.amount
    }
}

/// Configurable discount kinds
///
/// Closed set deserialized from configuration. `into_strategy` matches
/// exhaustively with no wildcard arm, so a new kind added here fails to
/// compile until every consumer handles it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiscountKind {
    Seasonal,
    Loyalty,
    Percentage { key: String, rate_percent: Decimal },
    Flat { key: String, amount: Decimal },
}

impl DiscountKind {
    /// Registry key of the strategy this kind builds
    pub fn key(&self) -> &str {
        match self {
            DiscountKind::Seasonal => "seasonal",
            DiscountKind::Loyalty => "loyalty",
            DiscountKind::Percentage { key, .. } => key,
            DiscountKind::Flat { key, .. } => key,
        }
    }

    /// Build the boxed strategy this kind describes
    pub fn into_strategy(self) -> BoxedDiscount {
        match self {
            DiscountKind::Seasonal => Box::new(PercentageDiscount::seasonal()),
            DiscountKind::Loyalty => Box::new(PercentageDiscount::loyalty()),
            DiscountKind::Percentage { key, rate_percent } => {
                Box::new(PercentageDiscount::new(key, rate_percent))
            }
            DiscountKind::Flat { key, amount } => Box::new(FlatDiscount::new(key, amount)),
        }
    }
}
