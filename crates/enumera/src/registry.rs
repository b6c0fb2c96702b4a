//! Process-wide registry cache.
//!
//! Maps concrete enum type identity to its partition of entries. The key
//! is `std::any::TypeId`, so two equally named types in different modules
//! can never collide. A partition is filled exactly once, on the first
//! operation against its type, and never invalidated afterwards.
//!
//! Queries take the read lock; the first fill takes the write lock,
//! re-checks the partition under it, and either installs the fully built
//! entry set or discards its work if another caller won the race. Readers
//! never observe a partially filled partition.

use crate::definition::Definition;
use crate::entry::{Entry, canonical};
use crate::enumerated::Enumerated;
use std::any::TypeId;
use std::collections::HashMap;
use std::sync::{LazyLock, PoisonError, RwLock, RwLockReadGuard};

static REGISTRY: LazyLock<RwLock<HashMap<TypeId, Partition>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

/// Entry set of one concrete enum type, in definition order.
#[derive(Debug, Default)]
struct Partition {
    entries: Vec<Entry>,
    index: HashMap<String, usize>,
}

impl Partition {
    fn from_definition(definition: &Definition) -> Self {
        let mut partition = Self::default();
        for entry in definition.entries() {
            partition.insert(entry);
        }
        partition
    }

    /// Insert under the canonical key. A later entry for the same key
    /// replaces the earlier one in place, keeping its position.
    fn insert(&mut self, entry: Entry) {
        let key = entry.canonical_name();
        match self.index.get(&key) {
            Some(&slot) => self.entries[slot] = entry,
            None => {
                self.index.insert(key, self.entries.len());
                self.entries.push(entry);
            }
        }
    }

    fn get(&self, name: &str) -> Option<&Entry> {
        self.index
            .get(&canonical(name))
            .map(|&slot| &self.entries[slot])
    }
}

/// Whether the partition for `T` has been filled.
pub fn is_filled<T: Enumerated>() -> bool {
    read().contains_key(&TypeId::of::<T>())
}

/// Fill the partition for `T` on first use. No-op afterwards.
pub(crate) fn ensure<T: Enumerated>() {
    if is_filled::<T>() {
        return;
    }
    // Built outside the write lock; first install wins.
    let partition = Partition::from_definition(&T::definition());
    let mut registry = REGISTRY.write().unwrap_or_else(PoisonError::into_inner);
    registry.entry(TypeId::of::<T>()).or_insert(partition);
}

/// Ordered snapshot of the entries defined for `T`.
pub(crate) fn entries<T: Enumerated>() -> Vec<Entry> {
    ensure::<T>();
    read()
        .get(&TypeId::of::<T>())
        .map(|partition| partition.entries.clone())
        .unwrap_or_default()
}

/// Case-insensitive entry lookup for `T`. Absence is `None`, never an
/// error.
pub(crate) fn lookup<T: Enumerated>(name: &str) -> Option<Entry> {
    ensure::<T>();
    read()
        .get(&TypeId::of::<T>())
        .and_then(|partition| partition.get(name).cloned())
}

fn read() -> RwLockReadGuard<'static, HashMap<TypeId, Partition>> {
    REGISTRY.read().unwrap_or_else(PoisonError::into_inner)
}
