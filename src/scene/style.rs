// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Handle appearance, loadable from a TOML file.
//!
//! Every field is optional in the file; missing ones fall back to the
//! constants in `settings::handle`.
//!
//! ```toml
//! radius = 8.0
//! anchor_fill = "#ffffff"
//! control_fill = "#808080"
//! ```

use crate::model::HandleKind;
use crate::settings;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How the scene should draw handles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandleStyle {
    /// Circle radius (screen pixels)
    pub radius: f64,
    /// Anchor fill colour (hex)
    pub anchor_fill: String,
    /// Control fill colour (hex)
    pub control_fill: String,
}

impl Default for HandleStyle {
    fn default() -> Self {
        Self {
            radius: settings::handle::RADIUS,
            anchor_fill: settings::handle::ANCHOR_FILL.to_string(),
            control_fill: settings::handle::CONTROL_FILL.to_string(),
        }
    }
}

impl HandleStyle {
    /// Parse a style from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let style: HandleStyle = toml::from_str(text).context("Invalid handle style")?;
        anyhow::ensure!(
            style.radius.is_finite() && style.radius > 0.0,
            "Handle radius must be a positive number, got {}",
            style.radius
        );
        Ok(style)
    }

    /// Load a style from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read handle style: {}", path.display()))?;
        Self::from_toml_str(&text)
            .with_context(|| format!("Failed to load handle style: {}", path.display()))
    }

    /// Fill colour for a handle of `kind`
    pub fn fill_for(&self, kind: HandleKind) -> &str {
        match kind {
            HandleKind::Anchor => &self.anchor_fill,
            HandleKind::Control => &self.control_fill,
        }
    }
}
