//! `HashTable`: an open-addressing hash table with linear probing.
//!
//! All entries live directly in a boxed slot array; an empty slot is `None`.
//! There are no tombstones: removal empties the slot and re-seats the rest of
//! the contiguous run after it, so a lookup may stop at the first empty slot.
//!
//! Key properties:
//! - **Linear probing**: probe sequence is `home, home + 1, ...` with wraparound,
//!   where `home = hash(key) mod capacity`
//! - **Grow at 70% load**: checked before an insertion is placed, doubles capacity
//! - **Shrink at 25% load**: checked after a removal, halves capacity down to
//!   [`MIN_CAPACITY`]
//! - **Total API**: absent keys produce `None`, never a panic or error

use core::hash::{BuildHasher, Hash};
use core::mem;
use std::collections::hash_map::RandomState;

use tracing::debug;

/// Capacity used by [`HashTable::new`] and the floor for shrinking.
pub const MIN_CAPACITY: usize = 20;

/// Load factor (as a ratio `GROW_NUMERATOR / GROW_DENOMINATOR`) at which the
/// table doubles before placing a new entry.
const GROW_NUMERATOR: usize = 7;
const GROW_DENOMINATOR: usize = 10;

/// Load factor (`1 / SHRINK_DIVISOR`) at or below which the table halves
/// after a removal.
const SHRINK_DIVISOR: usize = 4;

/// One occupied slot.
#[derive(Debug, Clone)]
struct Bucket<K, V> {
    key: K,
    value: V,
}

/// Open-addressing hash table mapping keys to values.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `insert` | \(O(1)\) average | may trigger an \(O(n)\) rehash on growth |
/// | `remove` | \(O(1)\) average | re-seats the following run; may shrink |
/// | `get` / `contains_key` | \(O(1)\) average | stops at the first empty slot |
/// | `len` / `capacity` | \(O(1)\) | |
#[derive(Clone)]
pub struct HashTable<K, V, S = RandomState> {
    slots: Box<[Option<Bucket<K, V>>]>,
    len: usize,
    hash_builder: S,
}

impl<K, V> HashTable<K, V, RandomState>
where
    K: Eq + Hash,
{
    /// Creates an empty table with [`MIN_CAPACITY`] slots.
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty table with exactly `capacity` slots.
    ///
    /// A capacity of zero selects [`MIN_CAPACITY`]. Smaller non-zero capacities
    /// are honored; the table grows out of them as entries arrive.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, RandomState::new())
    }
}

impl<K, V, S> HashTable<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    /// Creates an empty table with the given capacity and hasher.
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        let capacity = if capacity == 0 { MIN_CAPACITY } else { capacity };
        Self {
            slots: empty_slots(capacity),
            len: 0,
            hash_builder,
        }
    }

    /// Returns the number of live entries.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the table holds no entries.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the current load factor (entries / slots).
    #[inline]
    pub fn load_factor(&self) -> f32 {
        self.len as f32 / self.slots.len() as f32
    }

    /// Home slot of `key` for the current capacity.
    #[inline(always)]
    fn home(&self, key: &K) -> usize {
        (self.hash_builder.hash_one(key) % self.slots.len() as u64) as usize
    }

    /// Probes for `key`, stopping at the first empty slot.
    ///
    /// Returns the index of the slot holding `key`, if any.
    fn find(&self, key: &K) -> Option<usize> {
        let capacity = self.slots.len();
        let mut idx = self.home(key);

        for _ in 0..capacity {
            match &self.slots[idx] {
                None => return None,
                Some(bucket) if bucket.key == *key => return Some(idx),
                Some(_) => idx = (idx + 1) % capacity,
            }
        }
        None
    }

    /// Places a bucket into the first empty slot on its probe path.
    ///
    /// The caller guarantees the key is not already present and that at
    /// least one slot is empty.
    fn seat(&mut self, bucket: Bucket<K, V>) {
        let capacity = self.slots.len();
        let mut idx = self.home(&bucket.key);
        while self.slots[idx].is_some() {
            idx = (idx + 1) % capacity;
        }
        self.slots[idx] = Some(bucket);
        self.len += 1;
    }

    /// Returns `true` if the table contains `key`.
    #[inline]
    pub fn contains_key(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Returns a shared reference to the value for `key`.
    #[inline]
    pub fn get(&self, key: &K) -> Option<&V> {
        let idx = self.find(key)?;
        self.slots[idx].as_ref().map(|bucket| &bucket.value)
    }

    /// Returns an exclusive reference to the value for `key`.
    #[inline]
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let idx = self.find(key)?;
        self.slots[idx].as_mut().map(|bucket| &mut bucket.value)
    }

    /// Inserts `value` under `key`, returning the value it replaced.
    ///
    /// The growth check runs before the entry is placed, so an update of an
    /// existing key can still double the table.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if self.len * GROW_DENOMINATOR >= self.slots.len() * GROW_NUMERATOR {
            self.resize(self.slots.len() * 2);
        }

        if let Some(bucket) = self.find(&key).and_then(|idx| self.slots[idx].as_mut()) {
            return Some(mem::replace(&mut bucket.value, value));
        }

        self.seat(Bucket { key, value });
        None
    }

    /// Removes `key`, returning its value if it was present.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let idx = self.find(key)?;
        let removed = self.slots[idx].take()?;
        self.len -= 1;

        // Re-seat the run that follows the hole so no probe path crosses it.
        let capacity = self.slots.len();
        let mut next = (idx + 1) % capacity;
        for _ in 1..capacity {
            let Some(bucket) = self.slots[next].take() else {
                break;
            };
            self.len -= 1;
            self.seat(bucket);
            next = (next + 1) % capacity;
        }

        if self.len * SHRINK_DIVISOR <= capacity && capacity > MIN_CAPACITY {
            self.resize((capacity / 2).max(MIN_CAPACITY));
        }

        Some(removed.value)
    }

    /// Removes every entry, keeping the current capacity.
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = None;
        }
        self.len = 0;
    }

    /// Rehashes every live entry into a fresh slot array of `new_capacity`.
    fn resize(&mut self, new_capacity: usize) {
        debug!(
            from = self.slots.len(),
            to = new_capacity,
            len = self.len,
            "resizing hash table"
        );
        let old_slots = mem::replace(&mut self.slots, empty_slots(new_capacity));
        self.len = 0;
        for bucket in old_slots.into_vec().into_iter().flatten() {
            self.seat(bucket);
        }
    }
}

impl<K, V, S> HashTable<K, V, S> {
    /// Iterates over all entries in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.slots
            .iter()
            .filter_map(|slot| slot.as_ref().map(|bucket| (&bucket.key, &bucket.value)))
    }

    /// Iterates over all keys in slot order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(key, _)| key)
    }

    /// Iterates over all values in slot order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, value)| value)
    }
}

fn empty_slots<K, V>(capacity: usize) -> Box<[Option<Bucket<K, V>>]> {
    (0..capacity).map(|_| None).collect()
}

impl<K, V> Default for HashTable<K, V, RandomState>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> core::fmt::Debug for HashTable<K, V, S>
where
    K: core::fmt::Debug,
    V: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, S> Extend<(K, V)> for HashTable<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for HashTable<K, V, RandomState>
where
    K: Eq + Hash,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::hash::{BuildHasherDefault, Hasher};

    /// Hashes a `u64` key to itself, so home slots are predictable.
    #[derive(Default)]
    struct IdentityHasher(u64);

    impl Hasher for IdentityHasher {
        fn finish(&self) -> u64 {
            self.0
        }

        fn write(&mut self, bytes: &[u8]) {
            for &b in bytes {
                self.0 = (self.0 << 8) | u64::from(b);
            }
        }

        fn write_u64(&mut self, n: u64) {
            self.0 = n;
        }
    }

    type IdentityTable<V> = HashTable<u64, V, BuildHasherDefault<IdentityHasher>>;

    fn identity_table<V>(capacity: usize) -> IdentityTable<V> {
        HashTable::with_capacity_and_hasher(capacity, BuildHasherDefault::default())
    }

    /// Every live key must be reachable from its home slot before any hole.
    fn assert_probe_invariant<V>(table: &IdentityTable<V>) {
        let capacity = table.capacity();
        for (idx, slot) in table.slots.iter().enumerate() {
            let Some(bucket) = slot else { continue };
            let mut probe = table.home(&bucket.key);
            while probe != idx {
                assert!(
                    table.slots[probe].is_some(),
                    "hole at {probe} before key {} seated at {idx}",
                    bucket.key
                );
                probe = (probe + 1) % capacity;
            }
        }
    }

    #[test]
    fn hash_table_basic() {
        let mut table = HashTable::with_capacity(10);
        assert_eq!(table.capacity(), 10);
        assert!(table.is_empty());

        table.insert(1, "value1");
        table.insert(2, "value2");
        table.insert(3, "value3");

        assert_eq!(table.len(), 3);
        assert!(table.contains_key(&1));
        assert!(!table.contains_key(&4));
        assert_eq!(table.get(&2), Some(&"value2"));
        assert_eq!(table.get(&4), None);

        assert_eq!(table.remove(&2), Some("value2"));
        assert!(!table.contains_key(&2));
        assert_eq!(table.len(), 2);

        assert_eq!(table.insert(2, "new_value2"), None);
        assert_eq!(table.get(&2), Some(&"new_value2"));
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn hash_table_update_replaces_value() {
        let mut table = HashTable::new();
        assert_eq!(table.insert("a", 1), None);
        assert_eq!(table.insert("a", 2), Some(1));
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(&"a"), Some(&2));

        *table.get_mut(&"a").unwrap() += 10;
        assert_eq!(table.get(&"a"), Some(&12));
    }

    #[test]
    fn hash_table_grows_and_shrinks_back_to_minimum() {
        let mut table = HashTable::with_capacity(10);
        for i in 1..=15 {
            table.insert(i, i * 2);
        }
        assert_eq!(table.len(), 15);
        assert_eq!(table.capacity(), 40);
        for i in 1..=15 {
            assert_eq!(table.get(&i), Some(&(i * 2)));
        }

        for i in 1..=15 {
            assert_eq!(table.remove(&i), Some(i * 2));
        }
        assert!(table.is_empty());
        assert_eq!(table.capacity(), MIN_CAPACITY);
    }

    #[test]
    fn hash_table_grows_before_placing() {
        let mut table = HashTable::new();
        for i in 0..14 {
            table.insert(i, ());
        }
        assert_eq!(table.capacity(), MIN_CAPACITY);

        // 14 / 20 reaches the threshold, so the next insert doubles first.
        table.insert(14, ());
        assert_eq!(table.capacity(), 2 * MIN_CAPACITY);
        assert_eq!(table.len(), 15);
    }

    #[test]
    fn hash_table_update_at_threshold_still_grows() {
        let mut table = HashTable::new();
        for i in 0..14 {
            table.insert(i, i);
        }
        assert_eq!(table.capacity(), MIN_CAPACITY);

        assert_eq!(table.insert(3, 300), Some(3));
        assert_eq!(table.capacity(), 2 * MIN_CAPACITY);
        assert_eq!(table.len(), 14);
        assert_eq!(table.get(&3), Some(&300));
        for i in (0..14).filter(|&i| i != 3) {
            assert_eq!(table.get(&i), Some(&i));
        }
    }

    #[test]
    fn hash_table_remove_absent_is_noop() {
        let mut table = HashTable::new();
        table.insert(1, 1);
        assert_eq!(table.remove(&2), None);
        assert_eq!(table.len(), 1);
        assert_eq!(table.capacity(), MIN_CAPACITY);
    }

    #[test]
    fn hash_table_remove_reseats_colliding_run() {
        let mut table = identity_table(MIN_CAPACITY);
        // 0, 20, 40 share home slot 0; 1 is displaced to slot 3 behind them.
        for key in [0u64, 20, 40, 1] {
            table.insert(key, key);
        }
        assert_probe_invariant(&table);

        assert_eq!(table.remove(&0), Some(0));
        assert_probe_invariant(&table);
        for key in [20u64, 40, 1] {
            assert_eq!(table.get(&key), Some(&key));
        }
        assert!(!table.contains_key(&0));
    }

    #[test]
    fn hash_table_remove_reseats_across_wraparound() {
        let mut table = identity_table(MIN_CAPACITY);
        // Home slot 19 overflows into 0 and 1.
        for key in [19u64, 39, 59] {
            table.insert(key, ());
        }
        table.remove(&19);
        assert_probe_invariant(&table);
        assert!(table.contains_key(&39));
        assert!(table.contains_key(&59));
    }

    #[test]
    fn hash_table_full_tiny_table_terminates() {
        let mut table = HashTable::with_capacity(1);
        table.insert(7, 'a');
        assert_eq!(table.capacity(), 1);
        assert!(!table.contains_key(&8));
        assert_eq!(table.get(&8), None);

        table.insert(8, 'b');
        assert_eq!(table.capacity(), 2);
        assert_eq!(table.get(&7), Some(&'a'));
        assert_eq!(table.get(&8), Some(&'b'));
    }

    #[test]
    fn hash_table_iterates_live_entries() {
        let table: HashTable<_, _> = (0..5).map(|i| (i, i * i)).collect();
        let mut entries: Vec<_> = table.iter().map(|(k, v)| (*k, *v)).collect();
        entries.sort_unstable();
        assert_eq!(entries, vec![(0, 0), (1, 1), (2, 4), (3, 9), (4, 16)]);
        assert_eq!(table.keys().count(), 5);
        assert_eq!(table.values().sum::<i32>(), 30);
    }

    #[test]
    fn hash_table_clear_keeps_capacity() {
        let mut table = HashTable::new();
        for i in 0..30 {
            table.insert(i, ());
        }
        let capacity = table.capacity();
        table.clear();
        assert!(table.is_empty());
        assert_eq!(table.capacity(), capacity);
        assert!(!table.contains_key(&3));
    }
}
