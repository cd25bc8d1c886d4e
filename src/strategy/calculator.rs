//! Composite discount calculator

use crate::common::types::Money;
use crate::strategy::traits::BoxedDiscount;

/// Applies an ordered sequence of strategies to one amount
///
/// The sequence is fixed at construction. To change the composition,
/// build a new calculator; there is no runtime add/remove.
///
/// Insertion order is preserved when iterating. For the built-in
/// (commutative) strategies the order does not change the sum, but it
/// determines the order of [`breakdown`](Self::breakdown) entries and
/// keeps results deterministic for non-commutative extensions.
pub struct CompositeCalculator {
    discounts: Vec<BoxedDiscount>,
}

impl CompositeCalculator {
    pub fn new(discounts: Vec<BoxedDiscount>) -> Self {
        Self { discounts }
    }

    /// Total discount over `amount`
    ///
    /// Empty sequence yields zero. Negative amounts pass through to the
    /// strategies unchanged.
    pub fn total(&self, amount: Money) -> Money {
        self.discounts
            .iter()
            .map(|discount| discount.apply(amount))
            .sum()
    }

    /// Per-strategy contributions in insertion order
    pub fn breakdown(&self, amount: Money) -> Vec<(String, Money)> {
        self.discounts
            .iter()
            .map(|discount| (discount.key().to_string(), discount.apply(amount)))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.discounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.discounts.is_empty()
    }
}

impl std::fmt::Debug for CompositeCalculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompositeCalculator")
            .field(
                "discounts",
                &self
                    .discounts
                    .iter()
                    .map(|discount| discount.key())
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::discounts::{FlatDiscount, PercentageDiscount};
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn seasonal_and_loyalty() -> CompositeCalculator {
        CompositeCalculator::new(vec![
            Box::new(PercentageDiscount::seasonal()),
            Box::new(PercentageDiscount::loyalty()),
        ])
    }

    #[test]
    fn test_total_sums_strategies() {
        // 10% + 15% of 100 = 25
        let calculator = seasonal_and_loyalty();
        assert_eq!(calculator.total(dec!(100.0)), dec!(25.0));
    }

    #[test]
    fn test_empty_calculator_yields_zero() {
        let calculator = CompositeCalculator::new(vec![]);
        assert!(calculator.is_empty());
        assert_eq!(calculator.total(dec!(100.0)), dec!(0));
    }

    #[test]
    fn test_order_does_not_change_commutative_sum() {
        let forward = seasonal_and_loyalty();
        let reversed = CompositeCalculator::new(vec![
            Box::new(PercentageDiscount::loyalty()),
            Box::new(PercentageDiscount::seasonal()),
        ]);
        assert_eq!(forward.total(dec!(240.0)), reversed.total(dec!(240.0)));
    }

    #[test]
    fn test_breakdown_preserves_insertion_order() {
        let calculator = seasonal_and_loyalty();
        let breakdown = calculator.breakdown(dec!(100.0));
        assert_eq!(
            breakdown,
            vec![
                ("seasonal".to_string(), dec!(10.0)),
                ("loyalty".to_string(), dec!(15.0)),
            ]
        );
    }

    #[test]
    fn test_negative_amount_passes_through() {
        let calculator = seasonal_and_loyalty();
        assert_eq!(calculator.total(dec!(-100.0)), dec!(-25.0));
    }

    #[test]
    fn test_mixed_strategy_kinds() {
        let calculator = CompositeCalculator::new(vec![
            Box::new(PercentageDiscount::seasonal()),
            Box::new(FlatDiscount::new("welcome", dec!(5.0))),
        ]);
        assert_eq!(calculator.len(), 2);
        assert_eq!(calculator.total(dec!(100.0)), dec!(15.0));
    }
}
