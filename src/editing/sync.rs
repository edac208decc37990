// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Reconciles the handle registry with the current point list.
//!
//! For a polyline of `n` points the consistent handle set is:
//!
//! - anchors `0..n`, anchor `i` at point `i`
//! - controls `1..n`, control `i` at the midpoint of points `i - 1` and `i`
//!
//! `sync` reaches that set from whatever handles exist: it reuses every
//! handle whose key is still in range, moves it only if its position
//! changed, creates the keys that are missing and destroys the keys that
//! fell off the end. Indices are positional, so after an insert or delete
//! the low keys are reused and the high keys created or destroyed; handles
//! never migrate between keys.

use super::gesture::GestureBridge;
use super::registry::HandleRegistry;
use crate::model::{HandleKey, HandleKind};
use crate::scene::{HandleStyle, Scene};
use kurbo::Point;
use std::cell::RefCell;
use std::rc::Rc;

/// What one reconciliation changed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub created: usize,
    pub moved: usize,
    pub destroyed: usize,
}

impl SyncReport {
    /// Whether the handle set was already consistent
    pub fn is_noop(&self) -> bool {
        *self == Self::default()
    }
}

/// The handles a point list calls for, anchors first, each kind by index
pub fn consistent_handles(points: &[Point]) -> impl Iterator<Item = (HandleKey, Point)> + '_ {
    let anchors = points
        .iter()
        .enumerate()
        .map(|(i, point)| (HandleKey::anchor(i), *point));
    let controls = points
        .windows(2)
        .enumerate()
        .map(|(i, pair)| (HandleKey::control(i + 1), pair[0].midpoint(pair[1])));
    anchors.chain(controls)
}

/// Owns the handle registry for one attachment and keeps it consistent
pub struct Synchronizer<S: Scene> {
    scene: Rc<RefCell<S>>,
    style: HandleStyle,
    bridge: GestureBridge,
    registry: HandleRegistry<S::Handle>,
}

impl<S: Scene> Synchronizer<S> {
    pub fn new(scene: Rc<RefCell<S>>, style: HandleStyle, bridge: GestureBridge) -> Self {
        Self {
            scene,
            style,
            bridge,
            registry: HandleRegistry::new(),
        }
    }

    pub fn registry(&self) -> &HandleRegistry<S::Handle> {
        &self.registry
    }

    /// Bring the handles in line with `points`
    pub fn sync(&mut self, points: &[Point]) -> SyncReport {
        let mut report = SyncReport::default();
        let mut scene = self.scene.borrow_mut();

        for (key, position) in consistent_handles(points) {
            if let Some(entry) = self.registry.get_mut(key) {
                // The scene may have moved the handle itself during a drag,
                // so compare against where it really is.
                match scene.position(&entry.handle) {
                    Some(current) => {
                        if current != position {
                            scene.set_position(&entry.handle, position);
                            report.moved += 1;
                            tracing::trace!(
                                "[sync] moved {} to ({}, {})",
                                key,
                                position.x,
                                position.y
                            );
                        }
                        entry.position = position;
                        continue;
                    }
                    None => {
                        // Destroyed outside the editor, recreate it below
                        tracing::debug!("[sync] {} vanished from the scene", key);
                        self.registry.remove(key);
                    }
                }
            }

            let handle = scene.create_handle(key, position, &self.style);
            scene.bind_gestures(&handle, self.bridge.bindings_for(key));
            self.registry.insert(key, handle, position);
            report.created += 1;
            tracing::trace!("[sync] created {} at ({}, {})", key, position.x, position.y);
        }

        let n = points.len();
        let stale = self
            .registry
            .remove_from(HandleKind::Anchor, n)
            .into_iter()
            .chain(self.registry.remove_from(HandleKind::Control, n));
        for (key, handle) in stale {
            scene.destroy_handle(handle);
            report.destroyed += 1;
            tracing::trace!("[sync] destroyed {}", key);
        }

        tracing::debug!(
            "[sync] n={} created={} moved={} destroyed={}",
            n,
            report.created,
            report.moved,
            report.destroyed
        );
        report
    }

    /// Destroy every handle. Returns how many were destroyed.
    pub fn clear(&mut self) -> usize {
        let mut scene = self.scene.borrow_mut();
        let handles = self.registry.drain();
        let count = handles.len();
        for (_, handle) in handles {
            scene.destroy_handle(handle);
        }
        count
    }
}
