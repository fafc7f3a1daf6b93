//! Binomial-heap facade.

use std::cmp::Ordering;

use treeviz_forest::types::HeapArena;
use treeviz_forest::{binomial, layout};

use crate::error::{ensure_finite, EngineError};
use crate::scene::{fit_view_box, format_key, wrap_label, Scene, SceneEdge, SceneNode};

fn cmp(a: &f64, b: &f64) -> Ordering {
    a.total_cmp(b)
}

/// Mergeable min-heap of `f64` keys.
#[derive(Debug, Default)]
pub struct Heap {
    arena: HeapArena<f64>,
    head: Option<u32>,
    len: usize,
}

impl Heap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `key` as an independent entry; duplicates are fine.
    pub fn insert(&mut self, key: f64) -> Result<(), EngineError> {
        ensure_finite(key)?;
        self.head = Some(binomial::insert(&mut self.arena, self.head, key, &cmp));
        self.len += 1;
        Ok(())
    }

    /// Smallest key without removing it; `None` on empty.
    pub fn find_min(&self) -> Option<f64> {
        binomial::find_min(&self.arena, self.head, &cmp).map(|n| self.arena[n as usize].key)
    }

    /// Remove and return the smallest key; `None` on empty.
    pub fn extract_min(&mut self) -> Option<f64> {
        let (head, extracted) = binomial::extract_min(&mut self.arena, self.head, &cmp);
        self.head = head;
        extracted.map(|n| {
            self.len -= 1;
            self.arena[n as usize].key
        })
    }

    /// Absorb `other` into this heap.  The merged forest is consolidated
    /// so at most one tree of each degree remains.
    pub fn union_with(&mut self, other: Heap) {
        let offset = self.arena.len() as u32;
        let Heap { arena, head, len } = other;
        for mut node in arena {
            node.parent = node.parent.map(|i| i + offset);
            node.child = node.child.map(|i| i + offset);
            node.sibling = node.sibling.map(|i| i + offset);
            self.arena.push(node);
        }
        let shifted = head.map(|h| h + offset);
        self.head = binomial::union(&mut self.arena, self.head, shifted, &cmp);
        self.len += len;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Recompute draw coordinates; run after any mutation, before `scene`.
    pub fn layout(&mut self) {
        layout::layout_forest(&mut self.arena, self.head);
    }

    /// Export the forest; the minimum root is flagged so renderers can
    /// highlight it.
    pub fn scene(&self) -> Scene {
        let min_root = binomial::find_min(&self.arena, self.head, &cmp);

        let mut nodes = Vec::new();
        let mut edges = Vec::new();
        let mut roots = self.head;
        while let Some(root) = roots {
            self.collect_tree(root, min_root == Some(root), &mut nodes, &mut edges);
            roots = self.arena[root as usize].sibling;
        }

        let bounds = layout::forest_bounds(&self.arena, self.head);
        Scene {
            nodes,
            edges,
            bounds: bounds.map(Into::into),
            view_box: fit_view_box(bounds),
        }
    }

    fn collect_tree(
        &self,
        node: u32,
        is_min_root: bool,
        nodes: &mut Vec<SceneNode>,
        edges: &mut Vec<SceneEdge>,
    ) {
        let n = &self.arena[node as usize];
        let label = format_key(n.key);
        nodes.push(SceneNode {
            id: node,
            lines: wrap_label(&label),
            label,
            color: None,
            x: n.x,
            y: n.y,
            is_min_root,
        });

        let mut child = n.child;
        while let Some(c) = child {
            edges.push(SceneEdge {
                from: node,
                to: c,
            });
            self.collect_tree(c, false, nodes, edges);
            child = self.arena[c as usize].sibling;
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_find_min() {
        let mut heap = Heap::new();
        for k in [7.0, 1.0, 9.0, 2.0, 5.0] {
            heap.insert(k).unwrap();
        }
        assert_eq!(heap.find_min(), Some(1.0));
        assert_eq!(heap.len(), 5);
    }

    #[test]
    fn extract_min_drains_in_sorted_order() {
        let mut heap = Heap::new();
        for k in [4.0, 8.0, 6.0, 1.0, 3.0] {
            heap.insert(k).unwrap();
        }
        assert_eq!(heap.extract_min(), Some(1.0));
        assert_ne!(heap.find_min(), Some(1.0));
        let mut rest = Vec::new();
        while let Some(k) = heap.extract_min() {
            rest.push(k);
        }
        assert_eq!(rest, vec![3.0, 4.0, 6.0, 8.0]);
        assert!(heap.is_empty());
        assert_eq!(heap.len(), 0);
    }

    #[test]
    fn empty_heap_operations_are_absent() {
        let mut heap = Heap::new();
        assert_eq!(heap.find_min(), None);
        assert_eq!(heap.extract_min(), None);
    }

    #[test]
    fn union_absorbs_the_other_heap() {
        let mut a = Heap::new();
        for k in [5.0, 9.0] {
            a.insert(k).unwrap();
        }
        let mut b = Heap::new();
        for k in [2.0, 7.0, 4.0] {
            b.insert(k).unwrap();
        }
        a.union_with(b);
        assert_eq!(a.len(), 5);
        assert_eq!(a.find_min(), Some(2.0));
        let mut drained = Vec::new();
        while let Some(k) = a.extract_min() {
            drained.push(k);
        }
        assert_eq!(drained, vec![2.0, 4.0, 5.0, 7.0, 9.0]);
    }

    #[test]
    fn union_with_an_empty_heap_changes_nothing() {
        let mut a = Heap::new();
        for k in [3.0, 1.0] {
            a.insert(k).unwrap();
        }
        a.union_with(Heap::new());
        assert_eq!(a.len(), 2);
        assert_eq!(a.find_min(), Some(1.0));
    }

    #[test]
    fn scene_flags_exactly_one_min_root() {
        let mut heap = Heap::new();
        for k in [7.0, 1.0, 9.0] {
            heap.insert(k).unwrap();
        }
        heap.layout();
        let scene = heap.scene();
        assert_eq!(scene.nodes.len(), 3);
        assert_eq!(scene.nodes.iter().filter(|n| n.is_min_root).count(), 1);
        assert!(scene.nodes.iter().all(|n| n.color.is_none()));
    }

    #[test]
    fn invalid_key_is_rejected_before_mutation() {
        let mut heap = Heap::new();
        assert_eq!(heap.insert(f64::NAN), Err(EngineError::InvalidKey));
        assert!(heap.is_empty());
    }
}
