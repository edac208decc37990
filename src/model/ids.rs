// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Identifiers for store subscriptions and scene handles.
//!
//! Each owner (a `PointStore`, a scene) keeps its own `IdCounter`, so ids are
//! unique per owner and never reused while that owner lives. A destroyed
//! handle therefore leaves no id that a later handle could be confused with.

use std::cell::Cell;
use std::fmt;

/// Identifies one listener registered on a `PointStore`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

/// Identifies one visual handle object owned by a scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandleId(u64);

impl SubscriptionId {
    pub(crate) fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
}

impl HandleId {
    pub(crate) fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for HandleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic id source, starting at 1
#[derive(Debug, Default)]
pub(crate) struct IdCounter(Cell<u64>);

impl IdCounter {
    pub(crate) fn next(&self) -> u64 {
        let id = self.0.get() + 1;
        self.0.set(id);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_is_monotonic() {
        let counter = IdCounter::default();
        assert_eq!(counter.next(), 1);
        assert_eq!(counter.next(), 2);
        assert_eq!(counter.next(), 3);
    }

    #[test]
    fn handle_id_display() {
        assert_eq!(HandleId::from_raw(7).to_string(), "#7");
    }
}
