use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::hash::Hash;

pub trait DashMapExtension<K: Eq + Hash, V: Clone> {
  /// Stores the value built by `make` only if `key` is vacant.
  ///
  /// Returns `Ok(stored)` when the value was inserted, or `Err(existing)` with
  /// the value already present. `make` is not called for an occupied key.
  fn store_if_absent_with<F>(&self, key: K, make: F) -> Result<V, V>
  where
    F: FnOnce() -> V;
}

impl<K: Eq + Hash, V: Clone> DashMapExtension<K, V> for DashMap<K, V> {
  fn store_if_absent_with<F>(&self, key: K, make: F) -> Result<V, V>
  where
    F: FnOnce() -> V, {
    match self.entry(key) {
      Entry::Occupied(entry) => Err(entry.get().clone()),
      Entry::Vacant(entry) => Ok(entry.insert(make()).clone()),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_store_if_absent_with_vacant_key() {
    let map = DashMap::<String, u32>::new();
    let result = map.store_if_absent_with("a".to_string(), || 1);
    assert_eq!(result, Ok(1));
    assert_eq!(*map.get("a").unwrap(), 1);
  }

  #[test]
  fn test_store_if_absent_with_occupied_key_keeps_existing() {
    let map = DashMap::<String, u32>::new();
    map.insert("a".to_string(), 1);
    let mut called = false;
    let result = map.store_if_absent_with("a".to_string(), || {
      called = true;
      2
    });
    assert_eq!(result, Err(1));
    assert!(!called);
    assert_eq!(*map.get("a").unwrap(), 1);
  }
}
