// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

use line_editor::editing::consistent_handles;
use line_editor::{HandleKey, LineEditor, MemoryScene, Point, PointStore};
use proptest::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Debug)]
enum Op {
    DragAnchor { idx: u8, x: i16, y: i16 },
    DragControl { idx: u8, x: i16, y: i16 },
    DoubleClickAnchor { idx: u8 },
    Replace { points: Vec<(i16, i16)> },
}

fn point_strategy() -> impl Strategy<Value = (i16, i16)> {
    (any::<i16>(), any::<i16>())
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (any::<u8>(), any::<i16>(), any::<i16>()).prop_map(|(idx, x, y)| Op::DragAnchor {
            idx,
            x,
            y
        }),
        (any::<u8>(), any::<i16>(), any::<i16>()).prop_map(|(idx, x, y)| Op::DragControl {
            idx,
            x,
            y
        }),
        any::<u8>().prop_map(|idx| Op::DoubleClickAnchor { idx }),
        prop::collection::vec(point_strategy(), 0..8).prop_map(|points| Op::Replace { points }),
    ]
}

fn to_points(coords: &[(i16, i16)]) -> Vec<Point> {
    coords
        .iter()
        .map(|&(x, y)| Point::new(x as f64, y as f64))
        .collect()
}

/// Apply `op` through the scene, picking an index that exists right now
fn apply_op(store: &PointStore, scene: &Rc<RefCell<MemoryScene>>, op: Op) {
    let n = store.len();
    match op {
        Op::DragAnchor { idx, x, y } => {
            if n == 0 {
                return;
            }
            let key = HandleKey::anchor(idx as usize % n);
            let id = scene.borrow().find_handle(key).unwrap();
            let pos = Point::new(x as f64, y as f64);
            assert!(MemoryScene::drag_to(scene, id, pos).unwrap());
            assert_eq!(store.get(key.index), Some(pos));
            assert_eq!(store.len(), n);
        }
        Op::DragControl { idx, x, y } => {
            if n < 2 {
                return;
            }
            let key = HandleKey::control(1 + idx as usize % (n - 1));
            let id = scene.borrow().find_handle(key).unwrap();
            let pos = Point::new(x as f64, y as f64);
            assert!(MemoryScene::drag_to(scene, id, pos).unwrap());
            assert_eq!(store.get(key.index), Some(pos));
            assert_eq!(store.len(), n + 1);
        }
        Op::DoubleClickAnchor { idx } => {
            if n == 0 {
                return;
            }
            let key = HandleKey::anchor(idx as usize % n);
            let id = scene.borrow().find_handle(key).unwrap();
            assert!(MemoryScene::double_click(scene, id).unwrap());
            assert_eq!(store.len(), n - 1);
        }
        Op::Replace { points } => {
            store.replace(to_points(&points)).unwrap();
        }
    }
}

/// The scene holds exactly the handles the current points call for
fn assert_consistent(store: &PointStore, scene: &MemoryScene) {
    let points = store.read();
    let expected: Vec<(HandleKey, Point)> = consistent_handles(&points).collect();
    assert_eq!(scene.len(), expected.len());
    for (key, position) in expected {
        assert_eq!(scene.position_of(key), Some(position), "handle {key}");
    }
    let controls = points.len().saturating_sub(1);
    assert_eq!(scene.len(), points.len() + controls);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn handles_track_points(
        initial in prop::collection::vec(point_strategy(), 0..6),
        ops in prop::collection::vec(op_strategy(), 1..40),
    ) {
        let store = PointStore::shared(to_points(&initial));
        let scene = MemoryScene::shared();
        let mut editor = LineEditor::new(Rc::clone(&scene));
        editor.attach(&store).unwrap();
        assert_consistent(&store, &scene.borrow());

        for op in ops {
            apply_op(&store, &scene, op);
            assert_consistent(&store, &scene.borrow());

            // Reconciling again changes nothing and keeps every handle
            let before: Vec<_> = editor.keys().into_iter().map(|k| editor.handle(k)).collect();
            let report = editor.resync().unwrap();
            prop_assert!(report.is_noop());
            let after: Vec<_> = editor.keys().into_iter().map(|k| editor.handle(k)).collect();
            prop_assert_eq!(before, after);
        }

        let live = scene.borrow().len();
        prop_assert_eq!(editor.detach(), live);
        prop_assert!(scene.borrow().is_empty());
    }
}

#[test]
fn move_insert_delete_scenarios() {
    let store = PointStore::shared(to_points(&[(10, 10), (30, 30)]));
    let scene = MemoryScene::shared();
    let mut editor = LineEditor::new(Rc::clone(&scene));
    editor.attach(&store).unwrap();

    // Move
    let anchor = scene.borrow().find_by_tag("1-anchor").unwrap();
    MemoryScene::drag_to(&scene, anchor, Point::new(100.0, 100.0)).unwrap();
    assert_eq!(&*store.read(), &to_points(&[(10, 10), (100, 100)])[..]);
    assert_eq!(
        scene.borrow().position_of(HandleKey::control(1)),
        Some(Point::new(55.0, 55.0))
    );

    // Insert
    store.replace(to_points(&[(10, 10), (30, 30)])).unwrap();
    let control = scene.borrow().find_by_tag("1-control").unwrap();
    MemoryScene::drag_to(&scene, control, Point::new(25.0, 30.0)).unwrap();
    assert_eq!(&*store.read(), &to_points(&[(10, 10), (25, 30), (30, 30)])[..]);
    assert_eq!(
        scene.borrow().position_of(HandleKey::control(1)),
        Some(Point::new(17.5, 20.0))
    );
    assert_eq!(
        scene.borrow().position_of(HandleKey::control(2)),
        Some(Point::new(27.5, 30.0))
    );

    // Delete
    store.replace(to_points(&[(10, 10), (20, 20), (30, 30)])).unwrap();
    let anchor = scene.borrow().find_by_tag("1-anchor").unwrap();
    MemoryScene::double_click(&scene, anchor).unwrap();
    assert_eq!(&*store.read(), &to_points(&[(10, 10), (30, 30)])[..]);
    assert_eq!(
        scene.borrow().position_of(HandleKey::anchor(1)),
        Some(Point::new(30.0, 30.0))
    );
    assert_eq!(scene.borrow().find_by_tag("2-anchor"), None);
    assert_eq!(scene.borrow().find_by_tag("2-control"), None);

    // External update
    store.replace(to_points(&[(40, 40), (60, 60)])).unwrap();
    assert_eq!(
        scene.borrow().position_of(HandleKey::anchor(0)),
        Some(Point::new(40.0, 40.0))
    );
    assert_eq!(
        scene.borrow().position_of(HandleKey::anchor(1)),
        Some(Point::new(60.0, 60.0))
    );
}
