use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use fruitshop_core::{DomainError, DomainResult};

/// Closure computing a new quantity from the current one (`None` if absent).
pub type UpdateFn<'a> = dyn FnMut(Option<i64>) -> DomainResult<i64> + 'a;

/// Inventory storage: fruit name -> quantity on hand.
pub trait FruitStore: Send + Sync {
    fn contains_fruit(&self, fruit: &str) -> bool;
    fn quantity(&self, fruit: &str) -> Option<i64>;
    /// Insert or overwrite the quantity for a fruit.
    fn put(&self, fruit: &str, quantity: i64) -> DomainResult<()>;
    /// Atomically read, recompute and store the quantity for a fruit.
    ///
    /// The entry is written only if `f` succeeds; concurrent updates to the
    /// same store are serialized. Returns the stored quantity.
    fn update(&self, fruit: &str, f: &mut UpdateFn<'_>) -> DomainResult<i64>;
    /// Remove every entry (full reset between runs).
    fn clear_storage(&self);
    /// All entries, sorted by fruit name.
    fn snapshot(&self) -> Vec<(String, i64)>;
}

impl<S> FruitStore for Arc<S>
where
    S: FruitStore + ?Sized,
{
    fn contains_fruit(&self, fruit: &str) -> bool {
        (**self).contains_fruit(fruit)
    }

    fn quantity(&self, fruit: &str) -> Option<i64> {
        (**self).quantity(fruit)
    }

    fn put(&self, fruit: &str, quantity: i64) -> DomainResult<()> {
        (**self).put(fruit, quantity)
    }

    fn update(&self, fruit: &str, f: &mut UpdateFn<'_>) -> DomainResult<i64> {
        (**self).update(fruit, f)
    }

    fn clear_storage(&self) {
        (**self).clear_storage()
    }

    fn snapshot(&self) -> Vec<(String, i64)> {
        (**self).snapshot()
    }
}

/// In-memory store for a single session.
#[derive(Debug)]
pub struct InMemoryFruitStore {
    inner: RwLock<HashMap<String, i64>>,
}

impl InMemoryFruitStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }
}

fn poisoned() -> DomainError {
    DomainError::invariant("inventory store lock poisoned")
}

impl Default for InMemoryFruitStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FruitStore for InMemoryFruitStore {
    fn contains_fruit(&self, fruit: &str) -> bool {
        match self.inner.read() {
            Ok(map) => map.contains_key(fruit),
            Err(_) => false,
        }
    }

    fn quantity(&self, fruit: &str) -> Option<i64> {
        let map = self.inner.read().ok()?;
        map.get(fruit).copied()
    }

    fn put(&self, fruit: &str, quantity: i64) -> DomainResult<()> {
        let mut map = self.inner.write().map_err(|_| poisoned())?;
        map.insert(fruit.to_string(), quantity);
        Ok(())
    }

    fn update(&self, fruit: &str, f: &mut UpdateFn<'_>) -> DomainResult<i64> {
        let mut map = self.inner.write().map_err(|_| poisoned())?;
        let quantity = f(map.get(fruit).copied())?;
        map.insert(fruit.to_string(), quantity);
        Ok(quantity)
    }

    fn clear_storage(&self) {
        if let Ok(mut map) = self.inner.write() {
            map.clear();
        }
    }

    fn snapshot(&self) -> Vec<(String, i64)> {
        let map = match self.inner.read() {
            Ok(m) => m,
            Err(_) => return vec![],
        };

        let mut entries: Vec<(String, i64)> =
            map.iter().map(|(k, v)| (k.clone(), *v)).collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
    }
}
