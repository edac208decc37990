// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Line Editor: keeps a polyline's draggable handles in sync with its points
//!
//! A `LineEditor` attaches to a `PointStore` and draws one anchor handle per
//! point and one control handle per segment midpoint into a `Scene`.
//! Dragging an anchor moves its point, dragging a control inserts a point,
//! double-clicking an anchor deletes its point. Every edit, from a gesture
//! or from elsewhere, flows through the store's change notification back
//! into a single reconciliation pass.

pub mod demo;
pub mod editing;
pub mod error;
pub mod model;
pub mod scene;
pub mod settings;

pub use editing::{LineEditor, SyncReport};
pub use error::{EditError, StoreError};
pub use kurbo::Point;
pub use model::{HandleId, HandleKey, HandleKind, PointStore};
pub use scene::{GestureBindings, HandleStyle, MemoryScene, Scene};

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Entry point for the headless `line-editor` demo
pub fn run() -> Result<()> {
    // Initialize tracing subscriber (can be controlled via RUST_LOG env var)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("line_editor=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {e}"))?;

    let style = handle_command_line_args()?;

    let stdout = std::io::stdout();
    demo::run_script(style, &demo::script(), &mut stdout.lock())
}

/// Load the handle style named by the first argument, if any
fn handle_command_line_args() -> Result<HandleStyle> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() <= 1 {
        return Ok(HandleStyle::default());
    }

    let style_path = PathBuf::from(&args[1]);
    tracing::info!("Loading handle style from: {}", style_path.display());
    HandleStyle::load(&style_path)
        .with_context(|| "Usage: line-editor [path/to/handles.toml]".to_string())
}
