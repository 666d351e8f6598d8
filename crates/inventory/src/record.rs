use core::str::FromStr;

use serde::{Deserialize, Serialize};

use fruitshop_core::{DomainError, DomainResult, ValueObject};

/// Inventory operation carried by a record.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    /// Sets the absolute starting quantity for a fruit.
    #[serde(rename = "b")]
    Balance,
    /// Adds incoming stock.
    #[serde(rename = "s")]
    Supply,
    /// Adds stock returned by a customer.
    #[serde(rename = "r")]
    Return,
    /// Removes sold stock; must not exceed what is available.
    #[serde(rename = "p")]
    Purchase,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Balance,
        Operation::Supply,
        Operation::Return,
        Operation::Purchase,
    ];

    /// Single-letter wire code.
    pub fn code(self) -> &'static str {
        match self {
            Operation::Balance => "b",
            Operation::Supply => "s",
            Operation::Return => "r",
            Operation::Purchase => "p",
        }
    }

    pub fn from_code(code: &str) -> DomainResult<Self> {
        match code.trim() {
            "b" => Ok(Operation::Balance),
            "s" => Ok(Operation::Supply),
            "r" => Ok(Operation::Return),
            "p" => Ok(Operation::Purchase),
            other => Err(DomainError::validation(format!(
                "unknown operation code '{other}'"
            ))),
        }
    }

    /// Whether the fruit must already have a registered balance.
    pub fn requires_balance(self) -> bool {
        !matches!(self, Operation::Balance)
    }
}

impl core::fmt::Display for Operation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Operation {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

/// One incoming inventory record.
///
/// The operation is kept as its raw code so that unrecognised codes reach the
/// validator instead of failing at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FruitRecord {
    fruit: String,
    quantity: i64,
    operation: String,
}

impl FruitRecord {
    pub fn new(fruit: impl Into<String>, quantity: i64, operation: impl Into<String>) -> Self {
        Self {
            fruit: fruit.into(),
            quantity,
            operation: operation.into(),
        }
    }

    /// Typed constructor for a known operation.
    pub fn of(fruit: impl Into<String>, quantity: i64, operation: Operation) -> Self {
        Self::new(fruit, quantity, operation.code())
    }

    pub fn fruit(&self) -> &str {
        &self.fruit
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn operation_code(&self) -> &str {
        &self.operation
    }

    pub fn operation(&self) -> DomainResult<Operation> {
        Operation::from_code(&self.operation)
    }
}

/// Validated fruit name: non-blank and purely alphabetic.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FruitName(String);

impl FruitName {
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let name = raw.trim();
        if name.is_empty() {
            return Err(DomainError::validation("fruit name cannot be empty"));
        }
        if !name.chars().all(char::is_alphabetic) {
            return Err(DomainError::validation(format!(
                "fruit name '{name}' must contain only letters"
            )));
        }
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for FruitName {}

impl core::fmt::Display for FruitName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Non-negative record quantity.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quantity(i64);

impl Quantity {
    pub fn new(value: i64) -> DomainResult<Self> {
        if value < 0 {
            return Err(DomainError::validation(format!(
                "quantity cannot be negative (got {value})"
            )));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl ValueObject for Quantity {}
