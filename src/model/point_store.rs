// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! The authoritative point list of an edited polyline.
//!
//! `PointStore` holds the points as an `Rc<[Point]>` that is swapped out
//! wholesale on every edit, so a snapshot handed out by `read` never changes
//! under its holder. Every edit funnels through `replace`, which runs all
//! subscribed listeners synchronously before it returns: by the time the
//! caller regains control, every listener has seen the new list.
//!
//! Listeners must not call `replace` themselves. A nested `replace` is
//! rejected with `StoreError::ReentrantReplace` instead of recursing.

use super::ids::{IdCounter, SubscriptionId};
use crate::error::StoreError;
use kurbo::Point;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

/// Change listener, called with the new point list
pub type Listener = Rc<dyn Fn(&[Point])>;

/// Ordered list of polyline points with change notification
pub struct PointStore {
    points: RefCell<Rc<[Point]>>,
    listeners: RefCell<Vec<(SubscriptionId, Listener)>>,
    ids: IdCounter,
    notifying: Cell<bool>,
}

impl PointStore {
    /// Create a store holding `points`
    pub fn new(points: Vec<Point>) -> Self {
        Self {
            points: RefCell::new(Rc::from(points)),
            listeners: RefCell::new(Vec::new()),
            ids: IdCounter::default(),
            notifying: Cell::new(false),
        }
    }

    /// Create a store ready to be shared with an editor
    pub fn shared(points: Vec<Point>) -> Rc<Self> {
        Rc::new(Self::new(points))
    }

    /// Current point list
    pub fn read(&self) -> Rc<[Point]> {
        Rc::clone(&self.points.borrow())
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.points.borrow().len()
    }

    /// Whether the polyline has no points
    pub fn is_empty(&self) -> bool {
        self.points.borrow().is_empty()
    }

    /// Point at `index`, if any
    pub fn get(&self, index: usize) -> Option<Point> {
        self.points.borrow().get(index).copied()
    }

    /// Replace the whole point list and notify every listener
    pub fn replace(&self, points: Vec<Point>) -> Result<(), StoreError> {
        if self.notifying.get() {
            tracing::warn!("[point_store] replace called from a change listener, ignoring");
            return Err(StoreError::ReentrantReplace);
        }

        let points: Rc<[Point]> = Rc::from(points);
        *self.points.borrow_mut() = Rc::clone(&points);
        self.notify(&points);
        Ok(())
    }

    /// Overwrite the point at `index`, keeping the length
    pub fn set_point(&self, index: usize, point: Point) -> Result<(), StoreError> {
        let mut points = self.read().to_vec();
        let len = points.len();
        let slot = points
            .get_mut(index)
            .ok_or(StoreError::IndexOutOfRange { index, len })?;
        *slot = point;
        self.replace(points)
    }

    /// Insert a point at `index`, shifting later points up by one
    pub fn insert_point(&self, index: usize, point: Point) -> Result<(), StoreError> {
        let mut points = self.read().to_vec();
        if index > points.len() {
            return Err(StoreError::IndexOutOfRange {
                index,
                len: points.len(),
            });
        }
        points.insert(index, point);
        self.replace(points)
    }

    /// Remove the point at `index`, shifting later points down by one
    pub fn remove_point(&self, index: usize) -> Result<Point, StoreError> {
        let mut points = self.read().to_vec();
        if index >= points.len() {
            return Err(StoreError::IndexOutOfRange {
                index,
                len: points.len(),
            });
        }
        let removed = points.remove(index);
        self.replace(points)?;
        Ok(removed)
    }

    /// Register a listener, called after every `replace`
    pub fn subscribe(&self, listener: impl Fn(&[Point]) + 'static) -> SubscriptionId {
        let id = SubscriptionId::from_raw(self.ids.next());
        self.listeners.borrow_mut().push((id, Rc::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    /// Number of registered listeners
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    fn notify(&self, points: &[Point]) {
        // Listeners are cloned out so they may (un)subscribe while running.
        let listeners: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();

        let _guard = NotifyGuard::enter(&self.notifying);
        for listener in listeners {
            listener(points);
        }
    }
}

impl fmt::Debug for PointStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointStore")
            .field("points", &self.points.borrow())
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl Default for PointStore {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

/// Clears the notifying flag even if a listener panics
struct NotifyGuard<'a>(&'a Cell<bool>);

impl<'a> NotifyGuard<'a> {
    fn enter(flag: &'a Cell<bool>) -> Self {
        flag.set(true);
        Self(flag)
    }
}

impl Drop for NotifyGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}
