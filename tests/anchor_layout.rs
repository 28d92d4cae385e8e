//! Anchor-based resize propagation.

mod common;

use common::{container, leaf, new_log, watch};
use skin_ui_core::event::HookKind;
use skin_ui_core::geom::{Rect, Size};
use skin_ui_core::widget::{Anchors, UiTree};

#[test]
fn left_right_anchored_child_stretches_and_keeps_its_left_edge() {
    let mut tree = UiTree::new();
    let root = container(&mut tree, Rect::new(0.0, 0.0, 100.0, 60.0));
    let child = leaf(&mut tree, "a", Rect::new(10.0, 5.0, 30.0, 20.0));
    tree.add_child(root, child).expect("attach");
    tree.set_anchors(child, Anchors::new(true, true, true, false));

    tree.set_size(root, Size::new(120.0, 60.0));

    let bounds = tree.get(child).unwrap().bounds();
    assert_eq!(bounds.x, 10.0);
    assert_eq!(bounds.width, 50.0, "right margin of 60 is preserved");
    assert_eq!((bounds.y, bounds.height), (5.0, 20.0));
}

#[test]
fn right_only_anchored_child_shifts_by_the_width_delta() {
    let mut tree = UiTree::new();
    let root = container(&mut tree, Rect::new(0.0, 0.0, 100.0, 60.0));
    let child = leaf(&mut tree, "a", Rect::new(70.0, 5.0, 20.0, 20.0));
    tree.add_child(root, child).expect("attach");
    tree.set_anchors(child, Anchors::new(false, true, true, false));

    tree.set_size(root, Size::new(140.0, 60.0));

    let bounds = tree.get(child).unwrap().bounds();
    assert_eq!((bounds.x, bounds.width), (110.0, 20.0));
}

#[test]
fn unanchored_child_recenters_proportionally() {
    let mut tree = UiTree::new();
    let root = container(&mut tree, Rect::new(0.0, 0.0, 100.0, 100.0));
    let child = leaf(&mut tree, "a", Rect::new(40.0, 40.0, 20.0, 20.0));
    tree.add_child(root, child).expect("attach");
    tree.set_anchors(child, Anchors::none());

    tree.set_size(root, Size::new(200.0, 100.0));

    let bounds = tree.get(child).unwrap().bounds();
    // Horizontal center 50 scales to 100; vertical axis untouched.
    assert_eq!((bounds.x, bounds.y), (90.0, 40.0));
    assert_eq!((bounds.width, bounds.height), (20.0, 20.0));
}

#[test]
fn default_anchors_leave_the_child_alone() {
    let mut tree = UiTree::new();
    let root = container(&mut tree, Rect::new(0.0, 0.0, 100.0, 100.0));
    let child = leaf(&mut tree, "a", Rect::new(10.0, 10.0, 20.0, 20.0));
    tree.add_child(root, child).expect("attach");

    tree.set_size(root, Size::new(250.0, 175.0));

    assert_eq!(
        tree.get(child).unwrap().bounds(),
        Rect::new(10.0, 10.0, 20.0, 20.0)
    );
}

#[test]
fn resize_propagates_through_nested_containers() {
    let mut tree = UiTree::new();
    let root = container(&mut tree, Rect::new(0.0, 0.0, 100.0, 100.0));
    let panel = container(&mut tree, Rect::new(10.0, 10.0, 80.0, 80.0));
    let inner = leaf(&mut tree, "inner", Rect::new(60.0, 10.0, 10.0, 10.0));
    tree.add_child(root, panel).expect("attach");
    tree.add_child(panel, inner).expect("attach");
    tree.set_anchors(panel, Anchors::all());
    tree.set_anchors(inner, Anchors::new(false, true, true, false));

    tree.set_size(root, Size::new(150.0, 100.0));

    // Panel stretches by the parent delta; the inner node shifts with the
    // panel's new width.
    let panel_bounds = tree.get(panel).unwrap().bounds();
    assert_eq!((panel_bounds.x, panel_bounds.width), (10.0, 130.0));
    let inner_bounds = tree.get(inner).unwrap().bounds();
    assert_eq!((inner_bounds.x, inner_bounds.width), (110.0, 10.0));
}

#[test]
fn geometry_changes_raise_moved_and_resized() {
    let log = new_log();
    let mut tree = UiTree::new();
    let root = container(&mut tree, Rect::new(0.0, 0.0, 100.0, 100.0));
    let child = leaf(&mut tree, "a", Rect::new(70.0, 5.0, 20.0, 20.0));
    tree.add_child(root, child).expect("attach");
    tree.set_anchors(child, Anchors::new(false, true, true, false));
    watch(&mut tree, child, HookKind::Moved, "a", &log);
    watch(&mut tree, root, HookKind::Resized, "root", &log);

    tree.set_size(root, Size::new(140.0, 100.0));

    assert_eq!(common::entries(&log), vec!["root Resized", "a Moved"]);
}
