//! The three binary-tree variants.
//!
//! Each structure owns its arena and root and exposes its own operation
//! set; the caller picks a variant and routes to it, there is no
//! polymorphic interface.  Keys are `f64`, compared with `total_cmp`
//! after the finite-key precondition, so the comparator order and the
//! numeric order agree.

use std::cmp::Ordering;

use treeviz_forest::types::{push_tree_node, Color, TreeArena};
use treeviz_forest::{avl, bst, layout, red_black};

use crate::error::{ensure_finite, EngineError};
use crate::scene::{fit_view_box, format_key, wrap_label, Scene, SceneEdge, SceneNode};

fn cmp(a: &f64, b: &f64) -> Ordering {
    a.total_cmp(b)
}

fn binary_scene(arena: &TreeArena<f64>, root: Option<u32>) -> Scene {
    let mut nodes = Vec::new();
    let mut edges = Vec::new();
    for id in bst::in_order(arena, root) {
        let n = &arena[id as usize];
        let label = format_key(n.key);
        nodes.push(SceneNode {
            id,
            lines: wrap_label(&label),
            label,
            color: Some(n.color.into()),
            x: n.x,
            y: n.y,
            is_min_root: false,
        });
        for child in [n.l, n.r].into_iter().flatten() {
            edges.push(SceneEdge {
                from: id,
                to: child,
            });
        }
    }
    let bounds = layout::binary_bounds(arena, root);
    Scene {
        nodes,
        edges,
        bounds: bounds.map(Into::into),
        view_box: fit_view_box(bounds),
    }
}

/// Plain binary search tree: unbalanced insert and delete.
#[derive(Debug, Default)]
pub struct Bst {
    arena: TreeArena<f64>,
    root: Option<u32>,
}

impl Bst {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `key`; duplicates land in the right subtree.
    pub fn insert(&mut self, key: f64) -> Result<(), EngineError> {
        ensure_finite(key)?;
        let node = push_tree_node(&mut self.arena, key, Color::Black);
        self.root = bst::insert(&mut self.arena, self.root, node, &cmp);
        Ok(())
    }

    /// Delete one occurrence of `key`; absent keys are a silent no-op.
    pub fn remove(&mut self, key: f64) -> Result<(), EngineError> {
        ensure_finite(key)?;
        self.root = bst::remove(&mut self.arena, self.root, &key, &cmp);
        Ok(())
    }

    pub fn contains(&self, key: f64) -> bool {
        key.is_finite() && bst::find(&self.arena, self.root, &key, &cmp).is_some()
    }

    pub fn values_in_order(&self) -> Vec<f64> {
        values_in_order(&self.arena, self.root)
    }

    pub fn len(&self) -> usize {
        bst::in_order(&self.arena, self.root).len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Recompute draw coordinates; run after any mutation, before `scene`.
    pub fn layout(&mut self) {
        layout::layout_binary(&mut self.arena, self.root);
    }

    pub fn scene(&self) -> Scene {
        binary_scene(&self.arena, self.root)
    }
}

/// Height-balanced tree; every insert rebalances globally.
#[derive(Debug, Default)]
pub struct Avl {
    arena: TreeArena<f64>,
    root: Option<u32>,
}

impl Avl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: f64) -> Result<(), EngineError> {
        ensure_finite(key)?;
        let node = push_tree_node(&mut self.arena, key, Color::Black);
        self.root = avl::insert(&mut self.arena, self.root, node, &cmp);
        Ok(())
    }

    pub fn contains(&self, key: f64) -> bool {
        key.is_finite() && bst::find(&self.arena, self.root, &key, &cmp).is_some()
    }

    pub fn values_in_order(&self) -> Vec<f64> {
        values_in_order(&self.arena, self.root)
    }

    pub fn len(&self) -> usize {
        bst::in_order(&self.arena, self.root).len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn layout(&mut self) {
        layout::layout_binary(&mut self.arena, self.root);
    }

    pub fn scene(&self) -> Scene {
        binary_scene(&self.arena, self.root)
    }
}

/// Color-balanced tree; inserts recolor and rotate to keep the red-black
/// invariants, and the scene carries each node's color tag.
#[derive(Debug, Default)]
pub struct RedBlack {
    arena: TreeArena<f64>,
    root: Option<u32>,
}

impl RedBlack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: f64) -> Result<(), EngineError> {
        ensure_finite(key)?;
        let node = push_tree_node(&mut self.arena, key, Color::Red);
        self.root = red_black::insert(&mut self.arena, self.root, node, &cmp);
        Ok(())
    }

    pub fn contains(&self, key: f64) -> bool {
        key.is_finite() && bst::find(&self.arena, self.root, &key, &cmp).is_some()
    }

    pub fn values_in_order(&self) -> Vec<f64> {
        values_in_order(&self.arena, self.root)
    }

    pub fn len(&self) -> usize {
        bst::in_order(&self.arena, self.root).len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn layout(&mut self) {
        layout::layout_binary(&mut self.arena, self.root);
    }

    pub fn scene(&self) -> Scene {
        binary_scene(&self.arena, self.root)
    }
}

fn values_in_order(arena: &TreeArena<f64>, root: Option<u32>) -> Vec<f64> {
    bst::in_order(arena, root)
        .into_iter()
        .map(|i| arena[i as usize].key)
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bst_insert_and_remove() {
        let mut tree = Bst::new();
        for k in [5.0, 3.0, 7.0, 2.0, 4.0, 6.0, 8.0] {
            tree.insert(k).unwrap();
        }
        tree.remove(2.0).unwrap();
        assert_eq!(tree.values_in_order(), vec![3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
        tree.remove(5.0).unwrap();
        assert_eq!(tree.values_in_order(), vec![3.0, 4.0, 6.0, 7.0, 8.0]);
    }

    #[test]
    fn invalid_key_leaves_the_tree_untouched() {
        let mut tree = Bst::new();
        tree.insert(1.0).unwrap();
        assert_eq!(tree.insert(f64::NAN), Err(EngineError::InvalidKey));
        assert_eq!(tree.remove(f64::INFINITY), Err(EngineError::InvalidKey));
        assert_eq!(tree.values_in_order(), vec![1.0]);
        assert!(!tree.contains(f64::NAN));
    }

    #[test]
    fn avl_keeps_sorted_order() {
        let mut tree = Avl::new();
        for k in [3.0, 2.0, 1.0] {
            tree.insert(k).unwrap();
        }
        assert_eq!(tree.values_in_order(), vec![1.0, 2.0, 3.0]);
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn red_black_scene_exports_color_tags() {
        let mut tree = RedBlack::new();
        for k in [10.0, 20.0, 30.0] {
            tree.insert(k).unwrap();
        }
        tree.layout();
        let scene = tree.scene();
        assert_eq!(scene.nodes.len(), 3);
        assert!(scene.nodes.iter().all(|n| n.color.is_some()));
        assert_eq!(scene.edges.len(), 2);
    }

    #[test]
    fn empty_tree_scene_uses_the_default_view_box() {
        let tree = Bst::new();
        let scene = tree.scene();
        assert!(scene.nodes.is_empty());
        assert!(scene.bounds.is_none());
        assert_eq!(scene.view_box.to_string(), "0 0 1000 600");
    }
}
