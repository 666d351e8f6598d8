//! Black-box scenarios against the public validator API.

use std::sync::Arc;

use fruitshop_core::DomainError;
use fruitshop_inventory::{FruitRecord, FruitStore, InMemoryFruitStore, OperationTable, Validator};

const BALANCE: &str = "b";
const PURCHASE: &str = "p";
const RETURN: &str = "r";
const SUPPLY: &str = "s";
const INVALID_OPERATION: &str = "z";
const VALID_QUANTITY: i64 = 50;
const INVALID_QUANTITY: i64 = -20;
const BANANA: &str = "banana";
const INVALID_FRUIT: &str = "jfij12ll";

struct Fixture {
    store: Arc<InMemoryFruitStore>,
    validator: Validator<Arc<InMemoryFruitStore>>,
}

impl Fixture {
    fn new() -> Self {
        fruitshop_observability::init();

        let store = Arc::new(InMemoryFruitStore::new());
        let validator = Validator::new(OperationTable::standard(), Arc::clone(&store));
        Self { store, validator }
    }

    fn record(&self, code: &str) -> FruitRecord {
        FruitRecord::new(BANANA, VALID_QUANTITY, code)
    }
}

impl Drop for Fixture {
    fn drop(&mut self) {
        self.store.clear_storage();
    }
}

#[test]
fn valid_balance_is_stored() {
    let fx = Fixture::new();
    fx.validator.validate(&fx.record(BALANCE)).unwrap();

    assert!(fx.store.contains_fruit(BANANA));
    assert_eq!(fx.store.quantity(BANANA), Some(VALID_QUANTITY));
}

#[test]
fn valid_operation_order_is_applied() {
    let fx = Fixture::new();
    for code in [BALANCE, SUPPLY, RETURN, PURCHASE, PURCHASE] {
        fx.validator.validate(&fx.record(code)).unwrap();
    }

    assert!(fx.store.contains_fruit(BANANA));
    assert_eq!(fx.store.quantity(BANANA), Some(VALID_QUANTITY));
}

#[test]
fn invalid_fruit_is_rejected() {
    let fx = Fixture::new();
    fx.validator.validate(&fx.record(BALANCE)).unwrap();

    let err = fx
        .validator
        .validate(&FruitRecord::new(INVALID_FRUIT, VALID_QUANTITY, SUPPLY))
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation(_)));
    assert!(!fx.store.contains_fruit(INVALID_FRUIT));
}

#[test]
fn negative_quantity_is_rejected() {
    let fx = Fixture::new();
    let err = fx
        .validator
        .validate(&FruitRecord::new(BANANA, INVALID_QUANTITY, BALANCE))
        .unwrap_err();

    assert!(matches!(err, DomainError::Validation(_)));
    assert!(!fx.store.contains_fruit(BANANA));
}

#[test]
fn invalid_operation_is_rejected() {
    let fx = Fixture::new();
    let err = fx.validator.validate(&fx.record(INVALID_OPERATION)).unwrap_err();

    assert!(matches!(err, DomainError::Validation(_)));
}

#[test]
fn purchase_beyond_stock_is_rejected() {
    let fx = Fixture::new();
    fx.validator.validate(&fx.record(BALANCE)).unwrap();
    fx.validator.validate(&fx.record(PURCHASE)).unwrap();

    let err = fx.validator.validate(&fx.record(PURCHASE)).unwrap_err();
    assert!(matches!(err, DomainError::InvariantViolation(_)));
    assert_eq!(fx.store.quantity(BANANA), Some(0));
}

#[test]
fn supply_before_balance_is_rejected() {
    let fx = Fixture::new();
    let result = fx
        .validator
        .validate_all(&[fx.record(SUPPLY), fx.record(BALANCE)]);

    assert!(result.is_err());
    assert!(!fx.store.contains_fruit(BANANA));
}

#[test]
fn storage_is_empty_after_clear() {
    let fx = Fixture::new();
    fx.validator.validate(&fx.record(BALANCE)).unwrap();
    fx.validator
        .validate(&FruitRecord::new("apple", 3, BALANCE))
        .unwrap();
    assert_eq!(fx.store.snapshot().len(), 2);

    fx.validator.clear_storage();
    assert!(fx.store.snapshot().is_empty());
}
