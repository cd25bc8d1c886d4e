//! Pluggable discount strategies
//!
//! # Architecture
//!
//! ```text
//! config (DiscountKind list)
//!       │
//!       ▼
//! StrategyRegistry ── key → BoxedDiscount
//!       │  composite_for(keys)           (wiring time)
//!       ▼
//! CompositeCalculator ── owns ordered Vec<BoxedDiscount>
//!       │  total(amount) / breakdown(amount)   (call time)
//!       ▼
//! Money
//! ```
//!
//! Strategies are resolved once, at wiring time. A built calculator owns
//! its strategy sequence and never consults the registry again.
//!
//! # Components
//!
//! - [`DiscountStrategy`]: trait for implementing discount strategies
//! - [`CompositeCalculator`]: ordered aggregation over one amount
//! - [`StrategyRegistry`]: key-to-strategy wiring table
//! - [`DiscountKind`]: closed, config-deserializable strategy catalog

mod calculator;
mod discounts;
mod registry;
mod traits;

pub use calculator::CompositeCalculator;
pub use discounts::{DiscountKind, FlatDiscount, PercentageDiscount};
pub use registry::StrategyRegistry;
pub use traits::{BoxedDiscount, DiscountStrategy};
