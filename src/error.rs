// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Error types for point-list edits and editor lifecycle.

use thiserror::Error;

/// Errors raised by `PointStore` edits
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// An edit addressed a point that does not exist
    #[error("point index {index} is out of range for a polyline of {len} points")]
    IndexOutOfRange { index: usize, len: usize },

    /// `replace` was called from inside a change listener
    #[error("point list replaced while change listeners were still running")]
    ReentrantReplace,
}

/// Errors raised by the line editor and its gesture callbacks
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    /// `attach` was called on an editor that is already attached
    #[error("line editor is already attached to a point store")]
    AlreadyAttached,

    /// A gesture fired after the point store it edits was dropped
    #[error("point store was dropped while handles were still live")]
    StoreDropped,

    /// A control handle addressed a segment that does not exist
    #[error("control {index} has no segment in a polyline of {len} points")]
    NoSegment { index: usize, len: usize },

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_errors_convert_into_edit_errors() {
        let err: EditError = StoreError::IndexOutOfRange { index: 3, len: 2 }.into();
        assert_eq!(
            err,
            EditError::Store(StoreError::IndexOutOfRange { index: 3, len: 2 })
        );
        assert_eq!(
            err.to_string(),
            "point index 3 is out of range for a polyline of 2 points"
        );
    }
}
