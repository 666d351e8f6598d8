//! Stock update strategies and the operation -> strategy table.

use std::collections::HashMap;

use fruitshop_core::{DomainError, DomainResult};

use crate::record::Operation;

/// Computes the new stock level for one operation.
///
/// Strategies are pure: they never touch the store. `current` is `None` when
/// the fruit has no inventory entry yet.
pub trait OperationStrategy: Send + Sync {
    fn apply(&self, current: Option<i64>, quantity: i64) -> DomainResult<i64>;
}

/// Sets the stock level directly, overwriting any previous value.
#[derive(Debug, Default, Copy, Clone)]
pub struct BalanceStrategy;

/// Adds incoming stock.
#[derive(Debug, Default, Copy, Clone)]
pub struct SupplyStrategy;

/// Adds stock returned by a customer.
#[derive(Debug, Default, Copy, Clone)]
pub struct ReturnStrategy;

/// Removes sold stock.
#[derive(Debug, Default, Copy, Clone)]
pub struct PurchaseStrategy;

fn require_entry(current: Option<i64>) -> DomainResult<i64> {
    current.ok_or_else(|| DomainError::not_found("no inventory entry for fruit"))
}

fn add_stock(current: Option<i64>, quantity: i64) -> DomainResult<i64> {
    require_entry(current)?
        .checked_add(quantity)
        .ok_or_else(|| DomainError::invariant("stock overflow"))
}

impl OperationStrategy for BalanceStrategy {
    fn apply(&self, _current: Option<i64>, quantity: i64) -> DomainResult<i64> {
        Ok(quantity)
    }
}

impl OperationStrategy for SupplyStrategy {
    fn apply(&self, current: Option<i64>, quantity: i64) -> DomainResult<i64> {
        add_stock(current, quantity)
    }
}

impl OperationStrategy for ReturnStrategy {
    fn apply(&self, current: Option<i64>, quantity: i64) -> DomainResult<i64> {
        add_stock(current, quantity)
    }
}

impl OperationStrategy for PurchaseStrategy {
    fn apply(&self, current: Option<i64>, quantity: i64) -> DomainResult<i64> {
        let available = require_entry(current)?;
        if quantity > available {
            return Err(DomainError::invariant(format!(
                "insufficient stock: requested {quantity}, available {available}"
            )));
        }
        Ok(available - quantity)
    }
}

/// Mapping from operation to strategy.
///
/// The table decides which operations are accepted: an operation missing
/// here is rejected even though its code parses.
pub struct OperationTable {
    strategies: HashMap<Operation, Box<dyn OperationStrategy>>,
}

impl OperationTable {
    /// Empty table (no operations accepted).
    pub fn new() -> Self {
        Self {
            strategies: HashMap::new(),
        }
    }

    /// Table with the four standard operations registered.
    pub fn standard() -> Self {
        Self::new()
            .with(Operation::Balance, BalanceStrategy)
            .with(Operation::Supply, SupplyStrategy)
            .with(Operation::Return, ReturnStrategy)
            .with(Operation::Purchase, PurchaseStrategy)
    }

    pub fn register(&mut self, operation: Operation, strategy: impl OperationStrategy + 'static) {
        self.strategies.insert(operation, Box::new(strategy));
    }

    /// Builder-style [`register`](Self::register).
    pub fn with(mut self, operation: Operation, strategy: impl OperationStrategy + 'static) -> Self {
        self.register(operation, strategy);
        self
    }

    pub fn get(&self, operation: Operation) -> Option<&dyn OperationStrategy> {
        self.strategies.get(&operation).map(|s| s.as_ref())
    }

    pub fn contains(&self, operation: Operation) -> bool {
        self.strategies.contains_key(&operation)
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}

impl Default for OperationTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl core::fmt::Debug for OperationTable {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut codes: Vec<&str> = self.strategies.keys().map(|op| op.code()).collect();
        codes.sort_unstable();
        f.debug_struct("OperationTable").field("codes", &codes).finish()
    }
}
