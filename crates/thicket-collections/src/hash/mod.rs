//! Open-addressed hash dictionary.
//!
//! Linear probing over a slot table that keeps tombstones for deleted
//! entries so probe chains stay intact. The table grows once occupied plus
//! tombstoned slots pass the high-water mark and shrinks once live entries
//! fall under the low-water mark; every resize rehashes into a fresh table
//! without tombstones.

pub mod iter;

use std::fmt;
use std::hash::{BuildHasher, Hash};

use tracing::debug;

use crate::config::HashConfig;
use crate::error::CollectionError;

pub use fnv::{FnvBuildHasher, FnvHasher};
pub use iter::Iter;

#[derive(Clone, Debug)]
pub(crate) enum Slot<K, V> {
    Empty,
    Occupied(K, V),
    Deleted,
}

enum Probe {
    Found(usize),
    Vacant(usize),
    Full,
}

#[derive(Clone)]
pub struct HashDictionary<K, V, S = FnvBuildHasher> {
    slots: Vec<Slot<K, V>>,
    count: usize,
    deleted: usize,
    config: HashConfig,
    hasher: S,
}

impl<K: Hash + Eq, V> HashDictionary<K, V, FnvBuildHasher> {
    pub fn new() -> Self {
        Self::with_config(HashConfig::default())
    }

    pub fn with_config(config: HashConfig) -> Self {
        Self::with_hasher(config, FnvBuildHasher::default())
    }
}

impl<K: Hash + Eq, V> Default for HashDictionary<K, V, FnvBuildHasher> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> HashDictionary<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    pub fn with_hasher(config: HashConfig, hasher: S) -> Self {
        let config = config.normalized();
        Self {
            slots: empty_slots(config.initial_capacity),
            count: 0,
            deleted: 0,
            config,
            hasher,
        }
    }

    /// Inserts or overwrites the value stored under `key`.
    pub fn save(&mut self, key: K, value: V) {
        if (self.count + self.deleted) * 100 / self.capacity() > self.config.max_load_percent {
            self.resize(self.capacity() * self.config.resize_factor);
        }
        loop {
            match self.probe(&key) {
                Probe::Found(pos) => {
                    self.slots[pos] = Slot::Occupied(key, value);
                    return;
                }
                Probe::Vacant(pos) => {
                    if matches!(self.slots[pos], Slot::Deleted) {
                        self.deleted -= 1;
                    }
                    self.slots[pos] = Slot::Occupied(key, value);
                    self.count += 1;
                    return;
                }
                Probe::Full => self.resize(self.capacity() * self.config.resize_factor),
            }
        }
    }

    pub fn contains(&self, key: &K) -> bool {
        matches!(self.probe(key), Probe::Found(_))
    }

    pub fn get(&self, key: &K) -> Result<&V, CollectionError> {
        match self.probe(key) {
            Probe::Found(pos) => match &self.slots[pos] {
                Slot::Occupied(_, v) => Ok(v),
                _ => Err(CollectionError::KeyNotFound),
            },
            _ => Err(CollectionError::KeyNotFound),
        }
    }

    pub fn get_mut(&mut self, key: &K) -> Result<&mut V, CollectionError> {
        match self.probe(key) {
            Probe::Found(pos) => match &mut self.slots[pos] {
                Slot::Occupied(_, v) => Ok(v),
                _ => Err(CollectionError::KeyNotFound),
            },
            _ => Err(CollectionError::KeyNotFound),
        }
    }

    /// Removes `key`, leaving a tombstone in its slot.
    pub fn delete(&mut self, key: &K) -> Result<V, CollectionError> {
        if !self.contains(key) {
            return Err(CollectionError::KeyNotFound);
        }
        let capacity = self.capacity();
        if self.count * 100 / capacity < self.config.min_load_percent
            && capacity > self.config.initial_capacity
        {
            // Never below what keeps the live entries under the high-water mark.
            let floor = self.count * 100 / self.config.max_load_percent + 1;
            let target = (capacity / self.config.resize_factor)
                .max(self.config.initial_capacity)
                .max(floor);
            if target < capacity {
                self.resize(target);
            }
        }
        let Probe::Found(pos) = self.probe(key) else {
            return Err(CollectionError::KeyNotFound);
        };
        match std::mem::replace(&mut self.slots[pos], Slot::Deleted) {
            Slot::Occupied(_, v) => {
                self.count -= 1;
                self.deleted += 1;
                Ok(v)
            }
            other => {
                self.slots[pos] = other;
                Err(CollectionError::KeyNotFound)
            }
        }
    }

    fn home(&self, key: &K) -> usize {
        (self.hasher.hash_one(key) % self.capacity() as u64) as usize
    }

    fn probe(&self, key: &K) -> Probe {
        let capacity = self.capacity();
        let mut pos = self.home(key);
        let mut reusable = None;
        for _ in 0..capacity {
            match &self.slots[pos] {
                Slot::Empty => return Probe::Vacant(reusable.unwrap_or(pos)),
                Slot::Occupied(k, _) if k == key => return Probe::Found(pos),
                Slot::Deleted if reusable.is_none() => reusable = Some(pos),
                _ => {}
            }
            pos = if pos + 1 == capacity { 0 } else { pos + 1 };
        }
        reusable.map_or(Probe::Full, Probe::Vacant)
    }

    /// Rehashes every live entry into a fresh table of at least `capacity`
    /// slots, widening it further if the entries do not fit.
    fn resize(&mut self, capacity: usize) {
        let mut capacity = capacity.max(self.count).max(1);
        debug!(
            from = self.capacity(),
            to = capacity,
            live = self.count,
            tombstones = self.deleted,
            "resizing hash dictionary"
        );
        let mut entries: Vec<(K, V)> = drain_live(std::mem::take(&mut self.slots)).collect();
        self.deleted = 0;
        loop {
            self.slots = empty_slots(capacity);
            let mut rest = entries.into_iter();
            let mut spilled = None;
            for (k, v) in rest.by_ref() {
                match self.probe(&k) {
                    Probe::Found(pos) | Probe::Vacant(pos) => self.slots[pos] = Slot::Occupied(k, v),
                    Probe::Full => {
                        spilled = Some((k, v));
                        break;
                    }
                }
            }
            let Some(spilled) = spilled else {
                return;
            };
            entries = drain_live(std::mem::take(&mut self.slots))
                .chain(std::iter::once(spilled))
                .chain(rest)
                .collect();
            capacity *= self.config.resize_factor;
        }
    }
}

impl<K, V, S> HashDictionary<K, V, S> {
    pub fn size(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Number of slots in the table, live or not.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Visits live entries in slot order until `visitor` returns `false`.
    pub fn iterate<F>(&self, mut visitor: F)
    where
        F: FnMut(&K, &V) -> bool,
    {
        for slot in &self.slots {
            if let Slot::Occupied(k, v) = slot {
                if !visitor(k, v) {
                    return;
                }
            }
        }
    }

    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.slots)
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|(_, v)| v)
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut V> + '_ {
        self.slots.iter_mut().filter_map(|slot| match slot {
            Slot::Occupied(_, v) => Some(v),
            _ => None,
        })
    }
}

impl<'a, K, V, S> IntoIterator for &'a HashDictionary<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for HashDictionary<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

fn drain_live<K, V>(slots: Vec<Slot<K, V>>) -> impl Iterator<Item = (K, V)> {
    slots.into_iter().filter_map(|slot| match slot {
        Slot::Occupied(k, v) => Some((k, v)),
        _ => None,
    })
}

fn empty_slots<K, V>(capacity: usize) -> Vec<Slot<K, V>> {
    let mut slots = Vec::with_capacity(capacity);
    slots.resize_with(capacity, || Slot::Empty);
    slots
}
