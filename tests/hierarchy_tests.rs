//! Node Hierarchy Tests
//!
//! Tests for:
//! - World transform composition order
//! - Model-wide and subtree name lookup
//! - Bind pose versus current pose

use glam::{Mat4, Quat, Vec3};

use armature::{Node, NodeKind, NodeTree};

const EPSILON: f32 = 1e-5;

fn mat_approx(a: Mat4, b: Mat4) -> bool {
    a.abs_diff_eq(b, EPSILON)
}

fn node(name: &str, local: Mat4) -> Node {
    Node::new(name, NodeKind::Node, local)
}

/// A -> B -> C with non-commuting local transforms.
fn create_chain() -> (NodeTree, [Mat4; 3], [armature::NodeHandle; 3]) {
    let a = Mat4::from_rotation_translation(Quat::from_rotation_z(0.5), Vec3::new(1.0, 0.0, 0.0));
    let b = Mat4::from_scale_rotation_translation(
        Vec3::new(2.0, 1.0, 1.0),
        Quat::from_rotation_x(-0.3),
        Vec3::new(0.0, 2.0, 0.0),
    );
    let c = Mat4::from_rotation_translation(Quat::from_rotation_y(1.1), Vec3::new(0.0, 0.0, 3.0));

    let mut tree = NodeTree::new();
    let ha = tree.add_root(node("A", a));
    let hb = tree.add_child(node("B", b), ha);
    let hc = tree.add_child(node("C", c), hb);
    (tree, [a, b, c], [ha, hb, hc])
}

#[test]
fn root_world_equals_its_precomputed() {
    let (mut tree, [a, ..], [ha, ..]) = create_chain();
    assert!(mat_approx(tree.world_transform(ha).unwrap(), a));

    let posed = Mat4::from_translation(Vec3::new(5.0, 5.0, 5.0));
    tree.get_mut(ha).unwrap().set_precomputed(posed);
    assert!(mat_approx(tree.world_transform(ha).unwrap(), posed));
}

#[test]
fn chain_composes_parent_first() {
    let (tree, [a, b, c], [_, _, hc]) = create_chain();
    let world = tree.world_transform(hc).unwrap();

    assert!(mat_approx(world, a * b * c));
    assert!(!mat_approx(world, c * b * a));
}

#[test]
fn world_transform_follows_current_pose() {
    let (mut tree, [a, _, c], [_, hb, hc]) = create_chain();
    let posed_b = Mat4::from_translation(Vec3::new(0.0, -4.0, 0.0));
    tree.get_mut(hb).unwrap().set_precomputed(posed_b);

    assert!(mat_approx(tree.world_transform(hc).unwrap(), a * posed_b * c));
    assert!(!mat_approx(tree.bind_world_transform(hc).unwrap(), a * posed_b * c));

    tree.reset_pose();
    assert!(mat_approx(
        tree.world_transform(hc).unwrap(),
        tree.bind_world_transform(hc).unwrap()
    ));
}

#[test]
fn parent_and_children_links() {
    let (tree, _, [ha, hb, hc]) = create_chain();

    assert_eq!(tree.roots(), &[ha]);
    assert_eq!(tree.get(ha).unwrap().parent(), None);
    assert_eq!(tree.get(hb).unwrap().parent(), Some(ha));
    assert_eq!(tree.get(hb).unwrap().children(), &[hc]);
    assert!(tree.get(hc).unwrap().children().is_empty());
    assert_eq!(tree.len(), 3);
}

#[test]
fn find_by_name_searches_roots_then_descendants() {
    let mut tree = NodeTree::new();
    let first = tree.add_root(node("first", Mat4::IDENTITY));
    let deep = tree.add_child(node("x", Mat4::IDENTITY), first);
    let deeper = tree.add_child(node("y", Mat4::IDENTITY), deep);
    let second = tree.add_root(node("second", Mat4::IDENTITY));
    let shallow_y = tree.add_child(node("y", Mat4::IDENTITY), second);

    assert_eq!(tree.find_by_name("second"), Some(second));
    assert_eq!(tree.find_by_name("x"), Some(deep));
    // Pre-order within the first root beats a shallower match under a later root.
    assert_eq!(tree.find_by_name("y"), Some(deeper));
    assert_eq!(tree.find_in_subtree(second, "y"), Some(shallow_y));
    assert_eq!(tree.find_in_subtree(second, "second"), Some(second));
    assert_eq!(tree.find_by_name("nope"), None);
}

#[test]
fn children_are_searched_before_later_siblings() {
    let mut tree = NodeTree::new();
    let root = tree.add_root(node("root", Mat4::IDENTITY));
    let left = tree.add_child(node("left", Mat4::IDENTITY), root);
    let nested = tree.add_child(node("target", Mat4::IDENTITY), left);
    let _sibling = tree.add_child(node("target", Mat4::IDENTITY), root);

    assert_eq!(tree.find_by_name("target"), Some(nested));
}

#[test]
fn stale_parent_makes_a_root() {
    use slotmap::Key;

    let mut tree = NodeTree::new();
    let orphan_parent = armature::NodeHandle::null();
    assert!(orphan_parent.is_null());

    let orphan = tree.add_child(node("orphan", Mat4::IDENTITY), orphan_parent);
    assert_eq!(tree.roots(), &[orphan]);
    assert_eq!(tree.get(orphan).unwrap().parent(), None);
    assert!(tree.world_transform(orphan_parent).is_none());
}
