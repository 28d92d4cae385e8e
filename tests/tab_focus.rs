//! Tab-order focus chain traversal.

mod common;

use common::{container, leaf, root_view};
use skin_ui_core::geom::Rect;
use skin_ui_core::input::{Key, KeyInput};
use skin_ui_core::widget::UiTree;

#[test]
fn tied_tab_indices_break_on_vertical_then_horizontal_position() {
    let mut tree = UiTree::new();
    let root = container(&mut tree, Rect::new(0.0, 0.0, 200.0, 200.0));
    let low = leaf(&mut tree, "low", Rect::new(0.0, 80.0, 20.0, 20.0));
    let high = leaf(&mut tree, "high", Rect::new(50.0, 10.0, 20.0, 20.0));
    let late = leaf(&mut tree, "late", Rect::new(0.0, 0.0, 20.0, 20.0));
    for id in [low, high, late] {
        tree.add_child(root, id).expect("attach");
        tree.set_tab_stop(id, true);
    }
    tree.set_tab_index(low, 0);
    tree.set_tab_index(high, 0);
    tree.set_tab_index(late, 1);

    // Tab index 0 pair first, smaller y wins the tie.
    assert_eq!(tree.next_control(root, None, true), Some(high));
    assert_eq!(tree.next_control(root, Some(high), true), Some(low));
    assert_eq!(tree.next_control(root, Some(low), true), Some(late));
    assert_eq!(tree.next_control(root, Some(late), true), None);

    // Backward traversal mirrors the ordering.
    assert_eq!(tree.next_control(root, None, false), Some(late));
    assert_eq!(tree.next_control(root, Some(late), false), Some(low));
}

#[test]
fn non_tab_stops_are_skipped_unless_containers() {
    let mut tree = UiTree::new();
    let root = container(&mut tree, Rect::new(0.0, 0.0, 200.0, 200.0));
    let plain = leaf(&mut tree, "plain", Rect::new(0.0, 0.0, 20.0, 20.0));
    let panel = container(&mut tree, Rect::new(0.0, 40.0, 50.0, 50.0));
    tree.add_child(root, plain).expect("attach");
    tree.add_child(root, panel).expect("attach");

    // The leaf is not a tab stop; the container is eligible by being one.
    assert_eq!(tree.next_control(root, None, true), Some(panel));
    assert_eq!(tree.next_control(root, Some(panel), true), None);
}

#[test]
fn do_tab_descends_into_a_focused_container_until_exhausted() {
    let mut tree = UiTree::new();
    let root = container(&mut tree, Rect::new(0.0, 0.0, 200.0, 200.0));
    let panel = container(&mut tree, Rect::new(0.0, 0.0, 100.0, 100.0));
    let x = leaf(&mut tree, "x", Rect::new(0.0, 0.0, 20.0, 20.0));
    let y = leaf(&mut tree, "y", Rect::new(0.0, 30.0, 20.0, 20.0));
    let button = leaf(&mut tree, "button", Rect::new(0.0, 150.0, 20.0, 20.0));
    tree.add_child(root, panel).expect("attach");
    tree.add_child(panel, x).expect("attach");
    tree.add_child(panel, y).expect("attach");
    tree.add_child(root, button).expect("attach");
    for id in [x, y, button] {
        tree.set_tab_stop(id, true);
    }
    tree.set_tab_index(button, 1);

    assert!(tree.do_tab(root, true, true));
    assert_eq!(tree.focused_child(root), Some(panel));

    assert!(tree.do_tab(root, true, true));
    assert_eq!(tree.focused_child(panel), Some(x));

    assert!(tree.do_tab(root, true, true));
    assert_eq!(tree.focused_child(panel), Some(y));

    // Panel's chain exhausts; the root advances its own pointer.
    assert!(tree.do_tab(root, true, true));
    assert_eq!(tree.focused_child(panel), None);
    assert_eq!(tree.focused_child(root), Some(button));

    // Whole chain exhausts: callers decide whether to wrap.
    assert!(!tree.do_tab(root, true, true));
    assert_eq!(tree.focused_child(root), None);
}

#[test]
fn do_tab_on_an_empty_container_reports_exhaustion() {
    let mut tree = UiTree::new();
    let root = container(&mut tree, Rect::new(0.0, 0.0, 100.0, 100.0));
    assert!(!tree.do_tab(root, true, true));
}

#[test]
fn root_view_retries_tab_from_the_start_on_exhaustion() {
    let mut tree = UiTree::new();
    let root = container(&mut tree, Rect::new(0.0, 0.0, 200.0, 200.0));
    let a = leaf(&mut tree, "a", Rect::new(0.0, 0.0, 20.0, 20.0));
    let b = leaf(&mut tree, "b", Rect::new(0.0, 30.0, 20.0, 20.0));
    tree.add_child(root, a).expect("attach");
    tree.add_child(root, b).expect("attach");
    tree.set_tab_stop(a, true);
    tree.set_tab_stop(b, true);
    let mut view = root_view(tree, root);

    let tab = KeyInput::new(Key::Tab);
    view.key_down(tab);
    assert_eq!(view.tree().focused_child(view.root()), Some(a));
    view.key_down(tab);
    assert_eq!(view.tree().focused_child(view.root()), Some(b));
    // Exhausted; the retry wraps focus back to the first stop.
    view.key_down(tab);
    assert_eq!(view.tree().focused_child(view.root()), Some(a));
}
