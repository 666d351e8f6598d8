//! Fruit shop inventory domain module.
//!
//! Incoming records (balance/supply/return/purchase of a fruit) are checked
//! and applied to an in-memory inventory. Business rules are deterministic
//! domain logic (no IO, no HTTP, no file parsing).

pub mod config;
pub mod record;
pub mod store;
pub mod strategy;
pub mod validator;

pub use config::{RebalancePolicy, ValidatorConfig};
pub use record::{FruitName, FruitRecord, Operation, Quantity};
pub use store::{FruitStore, InMemoryFruitStore, UpdateFn};
pub use strategy::{
    BalanceStrategy, OperationStrategy, OperationTable, PurchaseStrategy, ReturnStrategy,
    SupplyStrategy,
};
pub use validator::Validator;
