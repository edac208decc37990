// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Line Editor: headless demo of the polyline handle overlay

fn main() -> anyhow::Result<()> {
    line_editor::run()
}
