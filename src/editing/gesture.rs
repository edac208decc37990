// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Turns handle gestures into point-list edits.
//!
//! Each handle gets its callbacks once, when it is created, with the
//! handle's index captured in the closures. That captured index stays right
//! for the handle's whole life because the synchronizer never moves a handle
//! to a different key: after an insert or delete the handle already sitting
//! at each key is reused, so "the handle at key k" always edits point k.
//!
//! The bridge only ever writes to the `PointStore`. It never touches the
//! handle registry; the handles catch up through the store's change
//! notification, exactly as they do for edits made by anyone else.

use crate::error::EditError;
use crate::model::{HandleKey, HandleKind, PointStore};
use crate::scene::GestureBindings;
use kurbo::Point;
use std::rc::{Rc, Weak};

/// Edits a point store in response to handle gestures
#[derive(Debug, Clone)]
pub struct GestureBridge {
    store: Weak<PointStore>,
}

impl GestureBridge {
    pub fn new(store: &Rc<PointStore>) -> Self {
        Self {
            store: Rc::downgrade(store),
        }
    }

    /// Callbacks for the handle at `key`
    ///
    /// Anchors move their point on drag and delete it on double-click.
    /// Controls insert a new point on drag and ignore double-clicks.
    pub fn bindings_for(&self, key: HandleKey) -> GestureBindings {
        let index = key.index;
        match key.kind {
            HandleKind::Anchor => {
                let drag = self.clone();
                let click = self.clone();
                GestureBindings {
                    on_drag_move: Rc::new(move |pos: Point| -> Result<(), EditError> {
                        drag.move_anchor(index, pos)
                    }),
                    on_double_click: Some(Rc::new(move || -> Result<(), EditError> {
                        click.delete_anchor(index)
                    })),
                }
            }
            HandleKind::Control => {
                let drag = self.clone();
                GestureBindings {
                    on_drag_move: Rc::new(move |pos: Point| -> Result<(), EditError> {
                        drag.insert_at_control(index, pos)
                    }),
                    on_double_click: None,
                }
            }
        }
    }

    /// Anchor drag-move: overwrite point `index` with `pos`
    pub fn move_anchor(&self, index: usize, pos: Point) -> Result<(), EditError> {
        let store = self.store()?;
        tracing::debug!("[gesture] move anchor {} to ({}, {})", index, pos.x, pos.y);
        store
            .set_point(index, pos)
            .map_err(|err| rejected("move anchor", err.into()))
    }

    /// Control drag-move: insert a point at `index`, between the points
    /// that were at `index - 1` and `index`
    pub fn insert_at_control(&self, index: usize, pos: Point) -> Result<(), EditError> {
        let store = self.store()?;
        let len = store.len();
        if index == 0 || index >= len {
            return Err(rejected("insert point", EditError::NoSegment { index, len }));
        }
        tracing::debug!("[gesture] insert point {} at ({}, {})", index, pos.x, pos.y);
        store
            .insert_point(index, pos)
            .map_err(|err| rejected("insert point", err.into()))
    }

    /// Anchor double-click: remove point `index`
    pub fn delete_anchor(&self, index: usize) -> Result<(), EditError> {
        let store = self.store()?;
        tracing::debug!("[gesture] delete anchor {}", index);
        store
            .remove_point(index)
            .map(|_| ())
            .map_err(|err| rejected("delete anchor", err.into()))
    }

    fn store(&self) -> Result<Rc<PointStore>, EditError> {
        self.store.upgrade().ok_or(EditError::StoreDropped)
    }
}

fn rejected(action: &str, err: EditError) -> EditError {
    tracing::warn!("[gesture] {} rejected: {}", action, err);
    err
}
