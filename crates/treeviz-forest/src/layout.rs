//! Coordinate assignment.
//!
//! Layout is a deterministic pure function of tree shape: re-running it on
//! an unchanged structure writes identical coordinates.  It mutates the
//! `x`/`y` fields in place and returns nothing; callers re-run it after
//! every structural change before drawing.

use crate::types::{HeapArena, HeapNode, TreeArena, TreeNode};

/// Horizontal gap between adjacent in-order slots.
pub const H_GAP: f64 = 70.0;
/// Vertical gap between tree levels.
pub const V_GAP: f64 = 90.0;
/// Node radius assumed by view-box padding downstream.
pub const NODE_R: f64 = 18.0;

// ── binary trees ──────────────────────────────────────────────────────────

/// `x = in-order index × H_GAP`, `y = depth × V_GAP` (root at depth 0).
///
/// Every node owns a distinct in-order index, so no two nodes ever share
/// an `x` and the tree cannot draw on top of itself, whatever its shape.
pub fn layout_binary<K>(arena: &mut TreeArena<K>, root: Option<u32>) {
    fn walk<K>(arena: &mut TreeArena<K>, node: Option<u32>, depth: u32, index: &mut u32) {
        let Some(n) = node else {
            return;
        };
        walk(arena, arena[n as usize].l, depth + 1, index);
        arena[n as usize].x = f64::from(*index) * H_GAP;
        arena[n as usize].y = f64::from(depth) * V_GAP;
        *index += 1;
        walk(arena, arena[n as usize].r, depth + 1, index);
    }

    let mut index = 0;
    walk(arena, root, 0, &mut index);
}

// ── binomial forests ──────────────────────────────────────────────────────

/// Horizontal room a root tree claims: `2^degree × H_GAP`.
fn tree_width(degree: u32) -> f64 {
    (1u64 << degree) as f64 * H_GAP
}

/// Root trees sit left to right, each centered in a slot proportional to
/// its size; within a tree, children spread at fixed `H_GAP` spacing
/// centered beneath their parent, one `V_GAP` per level.
pub fn layout_forest<K>(arena: &mut HeapArena<K>, head: Option<u32>) {
    let mut offset = 0.0;
    let mut curr = head;
    while let Some(root) = curr {
        let width = tree_width(arena[root as usize].degree);
        lay_tree(arena, root, offset + width / 2.0, 0);
        offset += width + H_GAP;
        curr = arena[root as usize].sibling;
    }
}

fn lay_tree<K>(arena: &mut HeapArena<K>, node: u32, x: f64, depth: u32) {
    arena[node as usize].x = x;
    arena[node as usize].y = f64::from(depth) * V_GAP;

    let mut kids = Vec::new();
    let mut child = arena[node as usize].child;
    while let Some(c) = child {
        kids.push(c);
        child = arena[c as usize].sibling;
    }

    let span = (kids.len().saturating_sub(1)) as f64 * H_GAP;
    for (i, kid) in kids.into_iter().enumerate() {
        lay_tree(arena, kid, x - span / 2.0 + i as f64 * H_GAP, depth + 1);
    }
}

// ── bounds ────────────────────────────────────────────────────────────────

/// Extreme coordinates over the laid-out nodes of a structure.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    fn of_point(x: f64, y: f64) -> Self {
        Self {
            min_x: x,
            max_x: x,
            min_y: y,
            max_y: y,
        }
    }

    fn cover(&mut self, x: f64, y: f64) {
        self.min_x = self.min_x.min(x);
        self.max_x = self.max_x.max(x);
        self.min_y = self.min_y.min(y);
        self.max_y = self.max_y.max(y);
    }
}

/// Bounding box of a binary tree, or `None` when empty.
pub fn binary_bounds<K>(arena: &[TreeNode<K>], root: Option<u32>) -> Option<Bounds> {
    fn walk<K>(arena: &[TreeNode<K>], node: Option<u32>, bounds: &mut Option<Bounds>) {
        let Some(n) = node else {
            return;
        };
        let (x, y) = (arena[n as usize].x, arena[n as usize].y);
        match bounds {
            None => *bounds = Some(Bounds::of_point(x, y)),
            Some(b) => b.cover(x, y),
        }
        walk(arena, arena[n as usize].l, bounds);
        walk(arena, arena[n as usize].r, bounds);
    }

    let mut bounds = None;
    walk(arena, root, &mut bounds);
    bounds
}

/// Bounding box of a binomial forest, or `None` when empty.
pub fn forest_bounds<K>(arena: &[HeapNode<K>], head: Option<u32>) -> Option<Bounds> {
    fn walk<K>(arena: &[HeapNode<K>], node: u32, bounds: &mut Option<Bounds>) {
        let (x, y) = (arena[node as usize].x, arena[node as usize].y);
        match bounds {
            None => *bounds = Some(Bounds::of_point(x, y)),
            Some(b) => b.cover(x, y),
        }
        let mut child = arena[node as usize].child;
        while let Some(c) = child {
            walk(arena, c, bounds);
            child = arena[c as usize].sibling;
        }
    }

    let mut bounds = None;
    let mut curr = head;
    while let Some(root) = curr {
        walk(arena, root, &mut bounds);
        curr = arena[root as usize].sibling;
    }
    bounds
}

// ── Tests ─────────────────────────────────────────────────────────────────
