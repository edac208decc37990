// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Polyline data model

pub mod handle;
pub mod ids;
pub mod point_store;

pub use handle::{HandleKey, HandleKind};
pub use ids::{HandleId, SubscriptionId};
pub use point_store::PointStore;
