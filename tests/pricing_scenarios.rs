//! Integration tests for strategy registration and composite pricing
//!
//! To run these tests:
//! ```
//! cargo test --test pricing_scenarios
//! ```

mod common;

use common::{stock_calculator, stock_registry};
use ledger_engine::{
    AppConfig, CompositeCalculator, DiscountKind, DiscountStrategy, EngineError, FlatDiscount,
    Money, StrategyRegistry,
};
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

// ============================================================================
// Composite totals
// ============================================================================

#[test]
fn test_stock_calculator_totals_twenty_five_over_hundred() {
    let calculator = stock_calculator();
    assert_eq!(calculator.total(dec!(100.0)), dec!(25.0));
}

#[test]
fn test_permuting_commutative_strategies_is_stable() {
    let forward = stock_calculator();
    let reversed = stock_registry()
        .composite_for(["loyalty", "seasonal"])
        .unwrap();

    for amount in [dec!(0), dec!(1.0), dec!(99.99), dec!(-250.0), dec!(1000.0)] {
        assert_eq!(forward.total(amount), reversed.total(amount));
    }
}

#[test]
fn test_empty_calculator_totals_zero() {
    let calculator = StrategyRegistry::new()
        .composite_for(Vec::<String>::new())
        .unwrap();
    assert!(calculator.is_empty());
    assert_eq!(calculator.total(dec!(500.0)), dec!(0));
}

#[test]
fn test_new_strategy_composes_without_touching_consumers() {
    // Extending the composition means registering one more strategy and
    // rebuilding; the calculator and its callers stay unchanged.
    struct RoundingRebate;

    impl DiscountStrategy for RoundingRebate {
        fn key(&self) -> &str {
            "rounding_rebate"
        }

        fn apply(&self, amount: Money) -> Money {
            amount - amount.trunc()
        }
    }

    let mut registry = stock_registry();
    registry.register(Box::new(RoundingRebate));
    let calculator = registry
        .composite_for(["seasonal", "loyalty", "rounding_rebate"])
        .unwrap();

    // 10.05 + 15.075 + 0.50 over 100.50
    assert_eq!(calculator.total(dec!(100.50)), dec!(25.625));
}

// ============================================================================
// Registry wiring
// ============================================================================

#[test]
fn test_missing_key_fails_at_wiring_time() {
    let err = stock_registry()
        .composite_for(["seasonal", "black_friday"])
        .unwrap_err();
    match err {
        EngineError::UnknownStrategy(key) => assert_eq!(key, "black_friday"),
        other => panic!("expected UnknownStrategy, got {other:?}"),
    }
}

#[test]
fn test_registry_changes_never_reach_built_calculators() {
    let mut registry = stock_registry();
    registry.register(Box::new(FlatDiscount::new("welcome", dec!(5.0))));
    let calculator = registry.composite_for(["seasonal", "welcome"]).unwrap();

    // Rebuild the registry with a different welcome rate; the existing
    // calculator keeps the strategies it owns.
    let mut registry = stock_registry();
    registry.register(Box::new(FlatDiscount::new("welcome", dec!(50.0))));

    assert_eq!(calculator.total(dec!(100.0)), dec!(15.0));
}

// ============================================================================
// Config-driven wiring
// ============================================================================

const DISCOUNT_CONFIG: &str = r#"
[account]
account_id = "BANK123"
opening_balance = "1000"

[[discounts]]
kind = "seasonal"

[[discounts]]
kind = "loyalty"

[[discounts]]
kind = "percentage"
key = "vip"
rate_percent = "25"
"#;

fn parse_config(toml: &str) -> AppConfig {
    config::Config::builder()
        .add_source(config::File::from_str(toml, config::FileFormat::Toml))
        .build()
        .unwrap()
        .try_deserialize()
        .unwrap()
}

#[test]
fn test_config_builds_ordered_calculator() {
    let app_config = parse_config(DISCOUNT_CONFIG);
    assert_eq!(app_config.account.account_id, "BANK123");
    assert_eq!(app_config.account.opening_balance, dec!(1000));

    let keys: Vec<String> = app_config
        .discounts
        .iter()
        .map(|kind| kind.key().to_string())
        .collect();
    assert_eq!(keys, vec!["seasonal", "loyalty", "vip"]);

    let calculator: CompositeCalculator = StrategyRegistry::from_kinds(app_config.discounts)
        .composite_for(&keys)
        .unwrap();
    // 10% + 15% + 25% of 100
    assert_eq!(calculator.total(dec!(100.0)), dec!(50.0));
}

#[test]
fn test_config_round_trips_discount_kinds() {
    let kinds = vec![
        DiscountKind::Seasonal,
        DiscountKind::Flat {
            key: "welcome".to_string(),
            amount: dec!(5.0),
        },
    ];
    let json = serde_json::to_string(&kinds).unwrap();
    let parsed: Vec<DiscountKind> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, kinds);
}
