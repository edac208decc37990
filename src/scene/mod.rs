// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! The scene-graph capability the line editor draws its handles into.
//!
//! The editor never draws anything itself. It asks a `Scene` to create,
//! move and destroy circular handle objects, and hands it the gesture
//! callbacks to run when the user drags or double-clicks one. Dispatching
//! pointer events to those callbacks is the scene's job.
//!
//! Callbacks re-enter the editor: a drag edits the point list, the point
//! list notifies the editor, and the editor calls back into the scene to
//! reposition handles, all before the callback returns. A scene must
//! therefore release any borrow of itself before invoking a callback (clone
//! the `Rc` out of its handle table first, as `MemoryScene` does).

pub mod click;
pub mod memory;
pub mod style;

pub use click::ClickTracker;
pub use memory::{HandleSnapshot, MemoryScene, SceneHandle};
pub use style::HandleStyle;

use crate::error::EditError;
use crate::model::HandleKey;
use kurbo::Point;
use std::fmt;
use std::rc::Rc;

/// Called on every drag-move with the handle's live position
pub type DragCallback = Rc<dyn Fn(Point) -> Result<(), EditError>>;

/// Called on double-click
pub type ClickCallback = Rc<dyn Fn() -> Result<(), EditError>>;

/// Gesture callbacks bound to one handle
#[derive(Clone)]
pub struct GestureBindings {
    pub on_drag_move: DragCallback,
    /// Only anchors react to double-click
    pub on_double_click: Option<ClickCallback>,
}

impl fmt::Debug for GestureBindings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GestureBindings")
            .field("on_double_click", &self.on_double_click.is_some())
            .finish_non_exhaustive()
    }
}

/// Scene-graph operations the editor needs
pub trait Scene {
    /// Reference to a live handle object
    type Handle: Clone + fmt::Debug;

    /// Create a circular handle tagged with `key`
    fn create_handle(&mut self, key: HandleKey, position: Point, style: &HandleStyle)
        -> Self::Handle;

    /// Where a handle currently is, including any move the scene made
    /// itself while dispatching a drag. `None` for destroyed handles.
    fn position(&self, handle: &Self::Handle) -> Option<Point>;

    /// Move a handle
    fn set_position(&mut self, handle: &Self::Handle, position: Point);

    /// Attach gesture callbacks, replacing any previous ones
    fn bind_gestures(&mut self, handle: &Self::Handle, bindings: GestureBindings);

    /// Remove a handle and drop its callbacks
    fn destroy_handle(&mut self, handle: Self::Handle);
}
