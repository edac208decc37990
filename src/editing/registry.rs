// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Registry of live handles keyed by `(kind, index)`.
//!
//! The registry is the only place a handle's index lives. Entries are added
//! and removed one key at a time, never rebuilt wholesale, so a handle whose
//! key survives an update keeps its identity (and whatever transient UI
//! state the scene attached to it).

use crate::model::{HandleKey, HandleKind};
use kurbo::Point;
use std::collections::BTreeMap;

/// A registered handle and the position it was last placed at
#[derive(Debug, Clone, PartialEq)]
pub struct Entry<H> {
    pub handle: H,
    pub position: Point,
}

/// Map from handle key to live handle
#[derive(Debug, Clone)]
pub struct HandleRegistry<H> {
    entries: BTreeMap<HandleKey, Entry<H>>,
}

impl<H> HandleRegistry<H> {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, key: HandleKey) -> bool {
        self.entries.contains_key(&key)
    }

    pub fn get(&self, key: HandleKey) -> Option<&Entry<H>> {
        self.entries.get(&key)
    }

    pub fn get_mut(&mut self, key: HandleKey) -> Option<&mut Entry<H>> {
        self.entries.get_mut(&key)
    }

    /// Registered keys, anchors first, each kind by ascending index
    pub fn keys(&self) -> impl Iterator<Item = HandleKey> + '_ {
        self.entries.keys().copied()
    }

    /// Number of registered handles of `kind`
    pub fn count(&self, kind: HandleKind) -> usize {
        self.entries.keys().filter(|key| key.kind == kind).count()
    }

    /// Register a handle under `key`. The key must be free.
    pub fn insert(&mut self, key: HandleKey, handle: H, position: Point) {
        let previous = self.entries.insert(key, Entry { handle, position });
        debug_assert!(previous.is_none(), "handle {key} registered twice");
    }

    /// Unregister the handle under `key`
    pub fn remove(&mut self, key: HandleKey) -> Option<H> {
        self.entries.remove(&key).map(|entry| entry.handle)
    }

    /// Unregister every handle of `kind` whose index is `>= start`
    ///
    /// Removed handles are returned in ascending index order.
    pub fn remove_from(&mut self, kind: HandleKind, start: usize) -> Vec<(HandleKey, H)> {
        let stale: Vec<HandleKey> = self
            .entries
            .range(HandleKey::new(kind, start)..=HandleKey::new(kind, usize::MAX))
            .map(|(key, _)| *key)
            .collect();

        stale
            .into_iter()
            .filter_map(|key| self.entries.remove(&key).map(|entry| (key, entry.handle)))
            .collect()
    }

    /// Unregister everything
    pub fn drain(&mut self) -> Vec<(HandleKey, H)> {
        std::mem::take(&mut self.entries)
            .into_iter()
            .map(|(key, entry)| (key, entry.handle))
            .collect()
    }
}

impl<H> Default for HandleRegistry<H> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry_with(keys: &[HandleKey]) -> HandleRegistry<u32> {
        let mut registry = HandleRegistry::new();
        for (n, key) in keys.iter().enumerate() {
            registry.insert(*key, n as u32, Point::ZERO);
        }
        registry
    }

    #[test]
    fn insert_and_lookup() {
        let mut registry = HandleRegistry::new();
        registry.insert(HandleKey::anchor(0), "a0", Point::new(1.0, 1.0));

        assert!(registry.contains(HandleKey::anchor(0)));
        assert!(!registry.contains(HandleKey::control(0)));
        assert_eq!(registry.get(HandleKey::anchor(0)).unwrap().handle, "a0");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn remove_from_only_touches_one_kind() {
        let mut registry = registry_with(&[
            HandleKey::anchor(0),
            HandleKey::anchor(1),
            HandleKey::anchor(2),
            HandleKey::control(1),
            HandleKey::control(2),
        ]);

        let removed = registry.remove_from(HandleKind::Anchor, 1);
        let removed_keys: Vec<_> = removed.iter().map(|(key, _)| *key).collect();
        assert_eq!(removed_keys, vec![HandleKey::anchor(1), HandleKey::anchor(2)]);

        assert_eq!(registry.count(HandleKind::Anchor), 1);
        assert_eq!(registry.count(HandleKind::Control), 2);
    }

    #[test]
    fn remove_from_past_the_end_is_a_noop() {
        let mut registry = registry_with(&[HandleKey::anchor(0), HandleKey::control(1)]);
        assert!(registry.remove_from(HandleKind::Control, 2).is_empty());
        assert!(registry.remove_from(HandleKind::Anchor, 1).is_empty());
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn remove_from_zero_clears_the_kind() {
        let mut registry = registry_with(&[HandleKey::anchor(0), HandleKey::anchor(1)]);
        assert_eq!(registry.remove_from(HandleKind::Anchor, 0).len(), 2);
        assert!(registry.is_empty());
    }

    #[test]
    fn keys_are_ordered() {
        let registry = registry_with(&[
            HandleKey::control(2),
            HandleKey::anchor(1),
            HandleKey::control(1),
            HandleKey::anchor(0),
        ]);
        let keys: Vec<_> = registry.keys().collect();
        assert_eq!(
            keys,
            vec![
                HandleKey::anchor(0),
                HandleKey::anchor(1),
                HandleKey::control(1),
                HandleKey::control(2),
            ]
        );
    }

    #[test]
    fn drain_empties_the_registry() {
        let mut registry = registry_with(&[HandleKey::anchor(0), HandleKey::control(1)]);
        assert_eq!(registry.drain().len(), 2);
        assert!(registry.is_empty());
    }

    #[test]
    fn remove_single_key() {
        let mut registry = registry_with(&[HandleKey::anchor(0), HandleKey::anchor(1)]);
        assert_eq!(registry.remove(HandleKey::anchor(1)), Some(1));
        assert_eq!(registry.remove(HandleKey::anchor(1)), None);
        assert_eq!(registry.len(), 1);
    }
}
