//! Strategy registry

use std::collections::HashMap;

use crate::common::errors::{EngineError, Result};
use crate::strategy::calculator::CompositeCalculator;
use crate::strategy::discounts::DiscountKind;
use crate::strategy::traits::{BoxedDiscount, DiscountStrategy};

/// Registry mapping strategy keys to implementations
///
/// The registry is a wiring-time structure: it resolves key lists into
/// calculators during construction. A built calculator owns its
/// strategies outright, so later registry changes never affect it, and
/// nothing looks strategies up at call time.
#[derive(Default)]
pub struct StrategyRegistry {
    strategies: HashMap<String, BoxedDiscount>,
}

impl StrategyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from configured discount kinds
    pub fn from_kinds(kinds: Vec<DiscountKind>) -> Self {
        let mut registry = Self::new();
        for kind in kinds {
            registry.register(kind.into_strategy());
        }
        registry
    }

    /// Register a strategy under its own key
    ///
    /// Last registration wins; the replaced entry, if any, is returned.
    pub fn register(&mut self, strategy: BoxedDiscount) -> Option<BoxedDiscount> {
        self.strategies.insert(strategy.key().to_string(), strategy)
    }

    pub fn get(&self, key: &str) -> Option<&dyn DiscountStrategy> {
        self.strategies.get(key).map(|s| s.as_ref())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.strategies.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.strategies.keys().map(|k| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    /// Resolve an ordered key list into a calculator
    ///
    /// Fails with [`EngineError::UnknownStrategy`] naming the first
    /// missing key. Resolution consumes the registry entries so the
    /// calculator owns its strategies; re-wire by building a new
    /// registry from the same kinds.
    pub fn composite_for<I, S>(mut self, keys: I) -> Result<CompositeCalculator>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut discounts = Vec::new();
        for key in keys {
            let key = key.as_ref();
            let strategy = self
                .strategies
                .remove(key)
                .ok_or_else(|| EngineError::UnknownStrategy(key.to_string()))?;
            discounts.push(strategy);
        }
        Ok(CompositeCalculator::new(discounts))
    }

    /// Resolve every registered strategy, ordered by key, into a calculator
    pub fn composite_all(self) -> CompositeCalculator {
        let mut entries: Vec<_> = self.strategies.into_iter().collect();
        entries.sort_by(|(a, _), (b, _)| a.cmp(b));
        CompositeCalculator::new(entries.into_iter().map(|(_, s)| s).collect())
    }
}
