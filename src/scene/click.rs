// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Double-click recognition for hosts that only deliver single clicks.

use crate::model::HandleId;
use crate::settings;
use kurbo::Point;
use std::time::{Duration, Instant};

/// Tracks the previous click to decide whether the next one completes a
/// double-click
#[derive(Debug, Clone)]
pub struct ClickTracker {
    last: Option<(HandleId, Instant, Point)>,
    window: Duration,
    max_distance: f64,
}

impl ClickTracker {
    pub fn new() -> Self {
        Self::with_limits(settings::double_click::TIME, settings::double_click::DISTANCE)
    }

    pub fn with_limits(window: Duration, max_distance: f64) -> Self {
        Self {
            last: None,
            window,
            max_distance,
        }
    }

    /// Record a click on `target` and report whether it completes a
    /// double-click
    ///
    /// Both clicks must land on the same handle, within the time window and
    /// within the distance limit. A completed double-click resets tracking so
    /// a third click starts fresh instead of cascading.
    pub fn register(&mut self, target: HandleId, at: Point, now: Instant) -> bool {
        let is_double = match self.last {
            Some((last_target, last_time, last_pos)) => {
                last_target == target
                    && now.saturating_duration_since(last_time) < self.window
                    && at.distance(last_pos) < self.max_distance
            }
            None => false,
        };

        self.last = if is_double {
            None
        } else {
            Some((target, now, at))
        };
        is_double
    }

    /// Forget the previous click if it was on `target`
    pub fn forget(&mut self, target: HandleId) {
        if self.last.is_some_and(|(last_target, _, _)| last_target == target) {
            self.last = None;
        }
    }
}

impl Default for ClickTracker {
    fn default() -> Self {
        Self::new()
    }
}
