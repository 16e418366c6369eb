use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, PoisonError, RwLock};

/// Key/value store for persistence records.
///
/// Backs the in-memory repositories. Every method is atomic with respect to
/// the others, so check-then-write sequences that must not race go through
/// [`RecordStore::insert_unless`].
pub trait RecordStore<K, V>: Send + Sync {
    fn get(&self, key: &K) -> Option<V>;

    /// First stored value matching `predicate` (iteration order unspecified).
    fn find(&self, predicate: &dyn Fn(&V) -> bool) -> Option<V>;

    fn upsert(&self, key: K, value: V);

    /// Insert `value` unless the key is taken or a stored value satisfies
    /// `conflicts`. Returns whether the value was inserted.
    fn insert_unless(&self, key: K, value: V, conflicts: &dyn Fn(&V) -> bool) -> bool;

    fn remove(&self, key: &K) -> Option<V>;
}

impl<K, V, S> RecordStore<K, V> for Arc<S>
where
    S: RecordStore<K, V> + ?Sized,
{
    fn get(&self, key: &K) -> Option<V> {
        (**self).get(key)
    }

    fn find(&self, predicate: &dyn Fn(&V) -> bool) -> Option<V> {
        (**self).find(predicate)
    }

    fn upsert(&self, key: K, value: V) {
        (**self).upsert(key, value)
    }

    fn insert_unless(&self, key: K, value: V, conflicts: &dyn Fn(&V) -> bool) -> bool {
        (**self).insert_unless(key, value, conflicts)
    }

    fn remove(&self, key: &K) -> Option<V> {
        (**self).remove(key)
    }
}

/// In-memory store for tests and local runs.
///
/// A panic while holding the lock cannot leave a record half-written, so a
/// poisoned lock is recovered rather than reported.
#[derive(Debug)]
pub struct InMemoryRecordStore<K, V> {
    inner: RwLock<HashMap<K, V>>,
}

impl<K, V> InMemoryRecordStore<K, V> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }
}

impl<K, V> Default for InMemoryRecordStore<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> RecordStore<K, V> for InMemoryRecordStore<K, V>
where
    K: Eq + Hash + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    fn get(&self, key: &K) -> Option<V> {
        let map = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        map.get(key).cloned()
    }

    fn find(&self, predicate: &dyn Fn(&V) -> bool) -> Option<V> {
        let map = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        map.values().find(|&v| predicate(v)).cloned()
    }

    fn upsert(&self, key: K, value: V) {
        let mut map = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        map.insert(key, value);
    }

    fn insert_unless(&self, key: K, value: V, conflicts: &dyn Fn(&V) -> bool) -> bool {
        let mut map = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        if map.contains_key(&key) || map.values().any(conflicts) {
            return false;
        }
        map.insert(key, value);
        true
    }

    fn remove(&self, key: &K) -> Option<V> {
        let mut map = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        map.remove(key)
    }
}
