// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Handle overlay: registry, reconciliation and gesture handling

pub mod editor;
pub mod gesture;
pub mod registry;
pub mod sync;

pub use editor::LineEditor;
pub use gesture::GestureBridge;
pub use registry::HandleRegistry;
pub use sync::{SyncReport, Synchronizer, consistent_handles};
