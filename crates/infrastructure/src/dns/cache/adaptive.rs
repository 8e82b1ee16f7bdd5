//! Adaptive replacement cache
//!
//! Two resident lists split the capacity between entries seen once
//! (`recent`) and entries seen at least twice (`frequent`). Two ghost lists
//! remember the keys recently evicted from each side; a hit on a ghost moves
//! the `target` size of `recent` toward the side that would have kept it.

use lru::LruCache;
use rustc_hash::FxBuildHasher;
use std::hash::Hash;
use std::num::NonZeroUsize;

pub struct AdaptiveCache<K, V> {
    capacity: usize,
    target: usize,
    recent: LruCache<K, V, FxBuildHasher>,
    frequent: LruCache<K, V, FxBuildHasher>,
    recent_ghosts: LruCache<K, (), FxBuildHasher>,
    frequent_ghosts: LruCache<K, (), FxBuildHasher>,
}

impl<K: Hash + Eq + Clone, V> AdaptiveCache<K, V> {
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            capacity: capacity.get(),
            target: 0,
            recent: LruCache::unbounded_with_hasher(FxBuildHasher),
            frequent: LruCache::unbounded_with_hasher(FxBuildHasher),
            recent_ghosts: LruCache::with_hasher(capacity, FxBuildHasher),
            frequent_ghosts: LruCache::with_hasher(capacity, FxBuildHasher),
        }
    }

    /// Looks up `key`, promoting it to the frequent list on a hit.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        if let Some(value) = self.recent.pop(key) {
            self.frequent.put(key.clone(), value);
            return self.frequent.peek(key);
        }
        self.frequent.get(key)
    }

    /// Inserts or replaces `key`, returning the resident entry evicted to make room.
    pub fn put(&mut self, key: K, value: V) -> Option<(K, V)> {
        if self.recent.pop(&key).is_some() {
            self.frequent.put(key, value);
            return None;
        }

        if self.frequent.contains(&key) {
            self.frequent.put(key, value);
            return None;
        }

        if self.recent_ghosts.contains(&key) {
            let delta = (self.frequent_ghosts.len() / self.recent_ghosts.len()).max(1);
            self.target = (self.target + delta).min(self.capacity);

            let evicted = self.make_room(false);
            self.recent_ghosts.pop(&key);
            self.frequent.put(key, value);
            return evicted;
        }

        if self.frequent_ghosts.contains(&key) {
            let delta = (self.recent_ghosts.len() / self.frequent_ghosts.len()).max(1);
            self.target = self.target.saturating_sub(delta);

            let evicted = self.make_room(true);
            self.frequent_ghosts.pop(&key);
            self.frequent.put(key, value);
            return evicted;
        }

        let evicted = self.make_room(false);

        if self.recent_ghosts.len() > self.capacity - self.target {
            self.recent_ghosts.pop_lru();
        }
        if self.frequent_ghosts.len() > self.target {
            self.frequent_ghosts.pop_lru();
        }

        self.recent.put(key, value);
        evicted
    }

    pub fn contains(&self, key: &K) -> bool {
        self.recent.contains(key) || self.frequent.contains(key)
    }

    pub fn len(&self) -> usize {
        self.recent.len() + self.frequent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn make_room(&mut self, frequent_ghost_hit: bool) -> Option<(K, V)> {
        if self.len() < self.capacity {
            return None;
        }

        let recent_len = self.recent.len();
        let take_recent = recent_len > 0
            && (recent_len > self.target || (recent_len == self.target && frequent_ghost_hit));

        if take_recent || self.frequent.is_empty() {
            let (key, value) = self.recent.pop_lru()?;
            self.recent_ghosts.put(key.clone(), ());
            Some((key, value))
        } else {
            let (key, value) = self.frequent.pop_lru()?;
            self.frequent_ghosts.put(key.clone(), ());
            Some((key, value))
        }
    }
}
