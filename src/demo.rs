// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Scripted headless session used by the `line-editor` binary.
//!
//! Attaches an editor to a sample polyline in a `MemoryScene`, plays a short
//! sequence of gestures and external edits against it, and prints the
//! handle table as JSON after each step.

use crate::editing::LineEditor;
use crate::model::{HandleKey, PointStore};
use crate::scene::{HandleStyle, MemoryScene};
use anyhow::{Context, Result, anyhow};
use kurbo::Point;
use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// The polyline the demo starts from
pub fn sample_points() -> Vec<Point> {
    vec![
        Point::new(30.0, 75.0),
        Point::new(123.0, 234.0),
        Point::new(315.0, 225.0),
        Point::new(104.0, 127.0),
    ]
}

/// One scripted step
#[derive(Debug, Clone)]
pub enum Step {
    /// Drag the handle with this key to a position
    Drag(HandleKey, Point),
    /// Click the handle with this key twice in quick succession
    DoubleClick(HandleKey),
    /// Replace the whole point list from outside the editor
    Replace(Vec<Point>),
}

/// The gesture script the demo plays
pub fn script() -> Vec<Step> {
    vec![
        Step::Drag(HandleKey::anchor(1), Point::new(140.0, 260.0)),
        Step::Drag(HandleKey::control(2), Point::new(240.0, 300.0)),
        Step::DoubleClick(HandleKey::anchor(3)),
        Step::Replace(vec![
            Point::new(40.0, 40.0),
            Point::new(60.0, 60.0),
        ]),
    ]
}

/// Run `steps` against a fresh editor, writing a JSON snapshot after each
pub fn run_script(style: HandleStyle, steps: &[Step], out: &mut impl Write) -> Result<()> {
    let store = PointStore::shared(sample_points());
    let scene = MemoryScene::shared();
    let mut editor = LineEditor::with_style(Rc::clone(&scene), style);
    editor.attach(&store)?;

    write_snapshot(out, "attach", &scene)?;

    let mut clock = Instant::now();
    for step in steps {
        let label = match step {
            Step::Drag(key, pos) => {
                let id = find(&scene, *key)?;
                MemoryScene::drag_to(&scene, id, *pos)?;
                format!("drag {key} to ({}, {})", pos.x, pos.y)
            }
            Step::DoubleClick(key) => {
                let id = find(&scene, *key)?;
                let at = scene
                    .borrow()
                    .get(id)
                    .map(|handle| handle.position)
                    .unwrap_or_default();
                MemoryScene::click(&scene, id, at, clock)?;
                clock += Duration::from_millis(120);
                MemoryScene::click(&scene, id, at, clock)?;
                format!("double-click {key}")
            }
            Step::Replace(points) => {
                store.replace(points.clone())?;
                format!("replace with {} points", points.len())
            }
        };
        // Keep separate steps from reading as a double-click
        clock += Duration::from_secs(1);

        tracing::info!("{} -> {} points, {} handles", label, store.len(), editor.handle_count());
        write_snapshot(out, &label, &scene)?;
    }

    editor.detach();
    Ok(())
}

fn find(scene: &Rc<RefCell<MemoryScene>>, key: HandleKey) -> Result<crate::model::HandleId> {
    scene
        .borrow()
        .find_handle(key)
        .ok_or_else(|| anyhow!("No handle tagged {}", key.tag()))
}

fn write_snapshot(out: &mut impl Write, label: &str, scene: &Rc<RefCell<MemoryScene>>) -> Result<()> {
    let json = scene
        .borrow()
        .snapshot_json()
        .context("Failed to serialize handle snapshot")?;
    writeln!(out, "# {label}\n{json}").context("Failed to write snapshot")?;
    Ok(())
}
