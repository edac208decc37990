// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! `LineEditor` - attaches a handle overlay to a polyline's point store.
//!
//! Attaching runs one reconciliation and subscribes to the store. From then
//! on every `replace` on the store, whether it came from a handle gesture or
//! from any other code, re-runs the reconciliation before `replace`
//! returns. Detaching (or dropping the editor) unsubscribes and destroys
//! every handle.

use super::gesture::GestureBridge;
use super::sync::{SyncReport, Synchronizer};
use crate::error::EditError;
use crate::model::{HandleKey, PointStore, SubscriptionId};
use crate::scene::{HandleStyle, Scene};
use kurbo::Point;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Live link between an editor and one point store
struct Attachment<S: Scene> {
    store: Weak<PointStore>,
    subscription: SubscriptionId,
    synchronizer: Rc<RefCell<Synchronizer<S>>>,
}

/// Handle overlay for one polyline
pub struct LineEditor<S: Scene + 'static> {
    scene: Rc<RefCell<S>>,
    style: HandleStyle,
    attachment: Option<Attachment<S>>,
}

impl<S: Scene + 'static> LineEditor<S> {
    /// Create a detached editor drawing into `scene` with the default style
    pub fn new(scene: Rc<RefCell<S>>) -> Self {
        Self::with_style(scene, HandleStyle::default())
    }

    /// Create a detached editor drawing into `scene` with `style`
    pub fn with_style(scene: Rc<RefCell<S>>, style: HandleStyle) -> Self {
        Self {
            scene,
            style,
            attachment: None,
        }
    }

    pub fn style(&self) -> &HandleStyle {
        &self.style
    }

    pub fn is_attached(&self) -> bool {
        self.attachment.is_some()
    }

    /// Attach to `store`: create the handles for its current points and
    /// follow every later change
    pub fn attach(&mut self, store: &Rc<PointStore>) -> Result<(), EditError> {
        if self.attachment.is_some() {
            return Err(EditError::AlreadyAttached);
        }

        let synchronizer = Rc::new(RefCell::new(Synchronizer::new(
            Rc::clone(&self.scene),
            self.style.clone(),
            GestureBridge::new(store),
        )));

        let report = synchronizer.borrow_mut().sync(&store.read());

        let weak = Rc::downgrade(&synchronizer);
        let subscription = store.subscribe(move |points| {
            if let Some(synchronizer) = weak.upgrade() {
                synchronizer.borrow_mut().sync(points);
            }
        });

        tracing::info!(
            "[line_editor] attached to {} points, {} handles",
            store.len(),
            report.created
        );

        self.attachment = Some(Attachment {
            store: Rc::downgrade(store),
            subscription,
            synchronizer,
        });
        Ok(())
    }

    /// Stop following the store and destroy every handle
    ///
    /// Returns how many handles were destroyed; 0 if not attached.
    pub fn detach(&mut self) -> usize {
        let Some(attachment) = self.attachment.take() else {
            return 0;
        };

        if let Some(store) = attachment.store.upgrade() {
            store.unsubscribe(attachment.subscription);
        }
        let destroyed = attachment.synchronizer.borrow_mut().clear();
        tracing::info!("[line_editor] detached, destroyed {} handles", destroyed);
        destroyed
    }

    /// Reconcile against the store's current points
    ///
    /// Not needed in normal operation, since the subscription already does
    /// this on every change. Returns `None` when detached or when the store
    /// is gone.
    pub fn resync(&self) -> Option<SyncReport> {
        let attachment = self.attachment.as_ref()?;
        let store = attachment.store.upgrade()?;
        let points = store.read();
        let report = attachment.synchronizer.borrow_mut().sync(&points);
        Some(report)
    }

    /// Number of live handles
    pub fn handle_count(&self) -> usize {
        self.with_synchronizer(|sync| sync.registry().len())
            .unwrap_or(0)
    }

    /// Keys of all live handles, anchors first
    pub fn keys(&self) -> Vec<HandleKey> {
        self.with_synchronizer(|sync| sync.registry().keys().collect())
            .unwrap_or_default()
    }

    /// The scene handle registered under `key`
    pub fn handle(&self, key: HandleKey) -> Option<S::Handle> {
        self.with_synchronizer(|sync| sync.registry().get(key).map(|entry| entry.handle.clone()))
            .flatten()
    }

    /// Where the handle under `key` was last placed
    pub fn handle_position(&self, key: HandleKey) -> Option<Point> {
        self.with_synchronizer(|sync| sync.registry().get(key).map(|entry| entry.position))
            .flatten()
    }

    fn with_synchronizer<T>(&self, f: impl FnOnce(&Synchronizer<S>) -> T) -> Option<T> {
        let attachment = self.attachment.as_ref()?;
        let synchronizer = attachment.synchronizer.borrow();
        Some(f(&synchronizer))
    }
}

impl<S: Scene + 'static> Drop for LineEditor<S> {
    fn drop(&mut self) {
        self.detach();
    }
}
