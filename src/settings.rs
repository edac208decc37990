// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Editor settings and configuration constants.
//!
//! This module holds the defaults the overlay falls back to when no style
//! file is given. Per-run overrides for handle appearance live in
//! `scene::style::HandleStyle`, which reads its defaults from here.

// ============================================================================
// HANDLE SETTINGS
// ============================================================================
/// Radius of the circle drawn for every handle (screen pixels)
const HANDLE_RADIUS: f64 = 10.0;

/// Fill colour for anchor handles (one per polyline point)
const ANCHOR_FILL: &str = "#f0f0f0";

/// Fill colour for control handles (segment midpoints)
const CONTROL_FILL: &str = "#909090";

// ============================================================================
// HIT TEST SETTINGS
// ============================================================================
/// Maximum distance from a handle centre that still counts as a hit
/// (screen pixels). Slightly larger than the radius so small handles stay
/// easy to grab.
const HIT_DISTANCE: f64 = 12.0;

// ============================================================================
// DOUBLE CLICK SETTINGS
// ============================================================================
/// Two clicks closer together than this form a double-click
const DOUBLE_CLICK_TIME_MS: u64 = 500;

/// Two clicks further apart than this never form a double-click
const DOUBLE_CLICK_DISTANCE_PX: f64 = 10.0;

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Handle appearance defaults
pub mod handle {
    /// Circle radius (screen pixels)
    pub const RADIUS: f64 = super::HANDLE_RADIUS;

    /// Anchor fill colour (hex)
    pub const ANCHOR_FILL: &str = super::ANCHOR_FILL;

    /// Control fill colour (hex)
    pub const CONTROL_FILL: &str = super::CONTROL_FILL;
}

/// Hit testing for pointer input
pub mod hit_test {
    /// Maximum pick distance (screen pixels)
    pub const MAX_DISTANCE: f64 = super::HIT_DISTANCE;
}

/// Double-click recognition windows
pub mod double_click {
    use std::time::Duration;

    /// Maximum time between the two clicks
    pub const TIME: Duration = Duration::from_millis(super::DOUBLE_CLICK_TIME_MS);

    /// Maximum distance between the two clicks (screen pixels)
    pub const DISTANCE: f64 = super::DOUBLE_CLICK_DISTANCE_PX;
}
