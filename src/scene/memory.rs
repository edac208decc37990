// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Headless in-memory scene.
//!
//! `MemoryScene` keeps handle objects in a table instead of drawing them.
//! It backs the test suite and the demo binary, and doubles as a reference
//! for how a real scene should dispatch gestures: the pointer helpers
//! (`drag_to`, `click`, `double_click`) take the shared `Rc<RefCell<_>>`,
//! update the handle, clone its callback out and drop the borrow before
//! invoking it.

use super::{ClickTracker, GestureBindings, HandleStyle, Scene};
use crate::error::EditError;
use crate::model::ids::IdCounter;
use crate::model::{HandleId, HandleKey, HandleKind};
use crate::settings;
use kurbo::Point;
use serde::Serialize;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use std::time::Instant;

/// A handle object as the scene stores it
#[derive(Debug, Clone)]
pub struct SceneHandle {
    pub key: HandleKey,
    pub position: Point,
    pub radius: f64,
    pub fill: String,
    pub draggable: bool,
    bindings: Option<GestureBindings>,
}

impl SceneHandle {
    /// Whether gesture callbacks are attached
    pub fn is_bound(&self) -> bool {
        self.bindings.is_some()
    }
}

/// Serializable view of one handle
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HandleSnapshot {
    pub kind: HandleKind,
    pub index: usize,
    pub x: f64,
    pub y: f64,
}

/// Scene that stores handles in memory
#[derive(Debug, Default)]
pub struct MemoryScene {
    handles: BTreeMap<HandleId, SceneHandle>,
    ids: IdCounter,
    created: usize,
    destroyed: usize,
    clicks: ClickTracker,
}

impl MemoryScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scene ready to be shared with an editor
    pub fn shared() -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Number of live handles
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    pub fn get(&self, id: HandleId) -> Option<&SceneHandle> {
        self.handles.get(&id)
    }

    /// Iterate over live handles in creation order
    pub fn iter(&self) -> impl Iterator<Item = (HandleId, &SceneHandle)> {
        self.handles.iter().map(|(id, handle)| (*id, handle))
    }

    /// Find the live handle tagged with `key`
    pub fn find_handle(&self, key: HandleKey) -> Option<HandleId> {
        self.handles
            .iter()
            .find(|(_, handle)| handle.key == key)
            .map(|(id, _)| *id)
    }

    /// Find a handle by its tag, e.g. `"1-anchor"`
    pub fn find_by_tag(&self, tag: &str) -> Option<HandleId> {
        self.find_handle(HandleKey::from_tag(tag)?)
    }

    /// Position of the handle tagged with `key`
    pub fn position_of(&self, key: HandleKey) -> Option<Point> {
        let id = self.find_handle(key)?;
        self.handles.get(&id).map(|handle| handle.position)
    }

    /// Total handles ever created
    pub fn created_count(&self) -> usize {
        self.created
    }

    /// Total handles ever destroyed
    pub fn destroyed_count(&self) -> usize {
        self.destroyed
    }

    /// Closest handle to `pos` within `max_dist` (defaults to the hit
    /// distance from `settings`)
    ///
    /// Anchors win ties against controls so a point stays grabbable when a
    /// short segment puts its midpoint on top of it.
    pub fn hit_test(&self, pos: Point, max_dist: Option<f64>) -> Option<HandleId> {
        let max_dist = max_dist.unwrap_or(settings::hit_test::MAX_DISTANCE);

        let hit = self
            .handles
            .iter()
            .map(|(id, handle)| (*id, handle.key.kind, handle.position.distance(pos)))
            .filter(|(_, _, dist)| *dist <= max_dist)
            .min_by(|a, b| a.2.total_cmp(&b.2).then(a.1.cmp(&b.1)))
            .map(|(id, _, _)| id);

        tracing::trace!("[hit_test] pos=({}, {}) hit={:?}", pos.x, pos.y, hit);
        hit
    }

    /// All handles sorted by key
    pub fn snapshot(&self) -> Vec<HandleSnapshot> {
        let mut snapshot: Vec<_> = self
            .handles
            .values()
            .map(|handle| HandleSnapshot {
                kind: handle.key.kind,
                index: handle.key.index,
                x: handle.position.x,
                y: handle.position.y,
            })
            .collect();
        snapshot.sort_by_key(|handle| (handle.kind, handle.index));
        snapshot
    }

    /// Snapshot rendered as pretty JSON
    pub fn snapshot_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.snapshot())
    }

    /// Drag handle `id` to `pos` and fire its drag-move callback
    ///
    /// Returns `Ok(false)` when the handle does not exist or has no
    /// callbacks bound.
    pub fn drag_to(scene: &Rc<RefCell<Self>>, id: HandleId, pos: Point) -> Result<bool, EditError> {
        let callback = {
            let mut this = scene.borrow_mut();
            let Some(handle) = this.handles.get_mut(&id) else {
                return Ok(false);
            };
            handle.position = pos;
            match &handle.bindings {
                Some(bindings) => Rc::clone(&bindings.on_drag_move),
                None => return Ok(false),
            }
        };

        tracing::trace!("[memory_scene] drag {} to ({}, {})", id, pos.x, pos.y);
        callback(pos)?;
        Ok(true)
    }

    /// Deliver a single click on handle `id` at time `now`
    ///
    /// Fires the double-click callback when this click completes a
    /// double-click. Returns whether a callback fired.
    pub fn click(
        scene: &Rc<RefCell<Self>>,
        id: HandleId,
        at: Point,
        now: Instant,
    ) -> Result<bool, EditError> {
        let is_double = {
            let mut this = scene.borrow_mut();
            if !this.handles.contains_key(&id) {
                return Ok(false);
            }
            this.clicks.register(id, at, now)
        };

        if is_double {
            Self::double_click(scene, id)
        } else {
            Ok(false)
        }
    }

    /// Fire the double-click callback of handle `id` directly
    pub fn double_click(scene: &Rc<RefCell<Self>>, id: HandleId) -> Result<bool, EditError> {
        let callback = {
            let this = scene.borrow();
            let Some(callback) = this
                .handles
                .get(&id)
                .and_then(|handle| handle.bindings.as_ref())
                .and_then(|bindings| bindings.on_double_click.clone())
            else {
                return Ok(false);
            };
            callback
        };

        tracing::trace!("[memory_scene] double-click {}", id);
        callback()?;
        Ok(true)
    }
}

impl Scene for MemoryScene {
    type Handle = HandleId;

    fn create_handle(&mut self, key: HandleKey, position: Point, style: &HandleStyle) -> HandleId {
        let id = HandleId::from_raw(self.ids.next());
        self.handles.insert(
            id,
            SceneHandle {
                key,
                position,
                radius: style.radius,
                fill: style.fill_for(key.kind).to_string(),
                draggable: true,
                bindings: None,
            },
        );
        self.created += 1;
        id
    }

    fn position(&self, handle: &HandleId) -> Option<Point> {
        self.handles.get(handle).map(|handle| handle.position)
    }

    fn set_position(&mut self, handle: &HandleId, position: Point) {
        if let Some(handle) = self.handles.get_mut(handle) {
            handle.position = position;
        }
    }

    fn bind_gestures(&mut self, handle: &HandleId, bindings: GestureBindings) {
        if let Some(handle) = self.handles.get_mut(handle) {
            handle.bindings = Some(bindings);
        }
    }

    fn destroy_handle(&mut self, handle: HandleId) {
        if self.handles.remove(&handle).is_some() {
            self.destroyed += 1;
            self.clicks.forget(handle);
        }
    }
}
