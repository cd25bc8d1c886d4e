//! Discount strategy contract

use crate::common::types::Money;

/// Core discount strategy trait
///
/// A strategy is one named unit of pricing behavior. Implementations are
/// pure: `apply` takes the base amount and returns the discount it would
/// grant, with no internal state and no I/O.
///
/// # Implementation Notes
///
/// - `apply` must be deterministic: same input, same output
/// - The base amount is passed through unchanged, including negative
///   values; strategies do not clamp
/// - Logging and reporting live in capability-scoped sink traits, not here
///
/// # Example
///
/// ```
/// use ledger_engine::strategy::DiscountStrategy;
/// use rust_decimal::Decimal;
/// use rust_decimal_macros::dec;
///
/// struct HalfOff;
///
/// impl DiscountStrategy for HalfOff {
///     fn key(&self) -> &str { "half_off" }
///
///     fn apply(&self, amount: Decimal) -> Decimal {
///         amount / dec!(2)
///     }
/// }
///
/// assert_eq!(HalfOff.apply(dec!(100)), dec!(50));
/// ```
pub trait DiscountStrategy: Send + Sync {
    /// Stable identifier for this strategy, used as the registry key
    fn key(&self) -> &str;

    /// Compute the discount granted on `amount`
    fn apply(&self, amount: Money) -> Money;
}

/// Boxed strategy for dynamic dispatch
pub type BoxedDiscount = Box<dyn DiscountStrategy>;
