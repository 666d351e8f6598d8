use fruitshop_core::{DomainError, DomainResult};

use crate::config::{RebalancePolicy, ValidatorConfig};
use crate::record::{FruitName, FruitRecord, Operation, Quantity};
use crate::store::FruitStore;
use crate::strategy::OperationTable;

/// Checks incoming records and applies them to the inventory store.
///
/// A record is accepted only if it is well formed (registered operation code,
/// alphabetic fruit name, non-negative quantity) and its preconditions hold
/// against the current stock. Rejected records leave the store untouched.
#[derive(Debug)]
pub struct Validator<S>
where
    S: FruitStore,
{
    operations: OperationTable,
    store: S,
    config: ValidatorConfig,
}

/// A record that passed the structural checks.
#[derive(Debug)]
struct Parsed {
    fruit: FruitName,
    operation: Operation,
    quantity: Quantity,
}

/// A record that was applied, with the stock level it produced.
#[derive(Debug)]
struct Accepted {
    fruit: FruitName,
    operation: Operation,
    quantity: Quantity,
    stock: i64,
}

impl<S> Validator<S>
where
    S: FruitStore,
{
    pub fn new(operations: OperationTable, store: S) -> Self {
        Self::with_config(operations, store, ValidatorConfig::default())
    }

    pub fn with_config(operations: OperationTable, store: S, config: ValidatorConfig) -> Self {
        Self {
            operations,
            store,
            config,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> ValidatorConfig {
        self.config
    }

    /// Validate one record and, if it is accepted, apply it to the store.
    ///
    /// The ordering checks and the stock update run under a single store
    /// update, so concurrent validators sharing a store cannot lose writes.
    pub fn validate(&self, record: &FruitRecord) -> DomainResult<()> {
        match self.check(record).and_then(|parsed| self.apply(parsed)) {
            Ok(accepted) => {
                tracing::debug!(
                    fruit = %accepted.fruit,
                    operation = %accepted.operation,
                    quantity = accepted.quantity.get(),
                    stock = accepted.stock,
                    "record applied"
                );
                Ok(())
            }
            Err(err) => {
                tracing::warn!(
                    fruit = record.fruit(),
                    operation = record.operation_code(),
                    quantity = record.quantity(),
                    %err,
                    "record rejected"
                );
                Err(err)
            }
        }
    }

    /// Validate records in order, halting at the first rejected one.
    ///
    /// Returns the number of records applied.
    pub fn validate_all<'a, I>(&self, records: I) -> DomainResult<usize>
    where
        I: IntoIterator<Item = &'a FruitRecord>,
    {
        let mut applied = 0;
        for record in records {
            self.validate(record)?;
            applied += 1;
        }
        Ok(applied)
    }

    pub fn contains_fruit(&self, fruit: &str) -> bool {
        self.store.contains_fruit(fruit)
    }

    pub fn quantity(&self, fruit: &str) -> Option<i64> {
        self.store.quantity(fruit)
    }

    pub fn clear_storage(&self) {
        self.store.clear_storage()
    }

    /// Structural checks: registered operation, fruit name, quantity.
    fn check(&self, record: &FruitRecord) -> DomainResult<Parsed> {
        let operation = record.operation()?;
        if !self.operations.contains(operation) {
            return Err(DomainError::validation(format!(
                "operation code '{operation}' is not registered"
            )));
        }

        let fruit = FruitName::parse(record.fruit())?;
        let quantity = Quantity::new(record.quantity())?;

        Ok(Parsed {
            fruit,
            operation,
            quantity,
        })
    }

    /// Ordering checks and strategy, applied atomically against the store.
    fn apply(&self, parsed: Parsed) -> DomainResult<Accepted> {
        let Parsed {
            fruit,
            operation,
            quantity,
        } = parsed;
        let strategy = self.operations.get(operation).ok_or_else(|| {
            DomainError::validation(format!("operation code '{operation}' is not registered"))
        })?;

        let stock = self.store.update(fruit.as_str(), &mut |current| {
            self.ensure_ordering(&fruit, operation, current)?;
            let stock = strategy.apply(current, quantity.get())?;
            if stock < 0 {
                return Err(DomainError::invariant(format!(
                    "stock for '{fruit}' cannot go negative"
                )));
            }
            Ok(stock)
        })?;

        Ok(Accepted {
            fruit,
            operation,
            quantity,
            stock,
        })
    }

    fn ensure_ordering(
        &self,
        fruit: &FruitName,
        operation: Operation,
        current: Option<i64>,
    ) -> DomainResult<()> {
        if operation.requires_balance() && current.is_none() {
            return Err(DomainError::invariant(format!(
                "no balance registered for '{fruit}' before {operation:?}"
            )));
        }
        if operation == Operation::Balance
            && current.is_some()
            && self.config.rebalance == RebalancePolicy::Reject
        {
            return Err(DomainError::conflict(format!(
                "balance for '{fruit}' already registered"
            )));
        }
        Ok(())
    }
}
