// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Handle kinds and the `(kind, index)` key every handle is registered under.
//!
//! A key is positional: `HandleKey::anchor(2)` always means "the handle for
//! the third point of whatever the polyline currently is". When a point is
//! inserted or removed, the points behind it change keys, not the handles.

use serde::Serialize;
use std::fmt;

/// What a handle stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HandleKind {
    /// One point of the polyline
    Anchor,
    /// The midpoint of the segment ending at its index
    Control,
}

impl HandleKind {
    pub fn as_str(self) -> &'static str {
        match self {
            HandleKind::Anchor => "anchor",
            HandleKind::Control => "control",
        }
    }
}

/// Registry key for a handle
///
/// Ordered by kind first, then index, so all anchors sort before all
/// controls and a range over one kind is contiguous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandleKey {
    pub kind: HandleKind,
    pub index: usize,
}

impl HandleKey {
    pub fn new(kind: HandleKind, index: usize) -> Self {
        Self { kind, index }
    }

    /// Key of the anchor for point `index`
    pub fn anchor(index: usize) -> Self {
        Self::new(HandleKind::Anchor, index)
    }

    /// Key of the control between points `index - 1` and `index`
    pub fn control(index: usize) -> Self {
        Self::new(HandleKind::Control, index)
    }

    /// Scene tag used to look a handle up by name, e.g. `1-anchor`
    pub fn tag(&self) -> String {
        self.to_string()
    }

    /// Parse a tag produced by [`HandleKey::tag`]
    pub fn from_tag(tag: &str) -> Option<Self> {
        let (index, kind) = tag.split_once('-')?;
        let index = index.parse().ok()?;
        let kind = match kind {
            "anchor" => HandleKind::Anchor,
            "control" => HandleKind::Control,
            _ => return None,
        };
        Some(Self::new(kind, index))
    }
}

impl fmt::Display for HandleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.index, self.kind.as_str())
    }
}
