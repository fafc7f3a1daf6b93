//! AVL insertion.
//!
//! Insert is a plain BST attach followed by a rebalance of the WHOLE tree,
//! bottom-up, with subtree heights recomputed by full traversal on every
//! visit.  That costs more than the minimal ancestors-only algorithm with
//! cached heights, but it cannot go stale and it is easy to audit.

use std::cmp::Ordering;

use crate::bst;
use crate::rotate::{rotate_left, rotate_right};
use crate::types::{TreeArena, TreeNode};

/// Height of a subtree; an absent node has height 0.
pub fn height<K>(arena: &[TreeNode<K>], node: Option<u32>) -> u32 {
    match node {
        None => 0,
        Some(n) => {
            let l = height(arena, arena[n as usize].l);
            let r = height(arena, arena[n as usize].r);
            1 + l.max(r)
        }
    }
}

/// `height(left) - height(right)`; 0 for an absent node.
pub fn balance_factor<K>(arena: &[TreeNode<K>], node: Option<u32>) -> i32 {
    match node {
        None => 0,
        Some(n) => {
            height(arena, arena[n as usize].l) as i32 - height(arena, arena[n as usize].r) as i32
        }
    }
}

/// Attach `node` with BST ordering, then rebalance and return the new root.
pub fn insert<K, C>(
    arena: &mut TreeArena<K>,
    root: Option<u32>,
    node: u32,
    comparator: &C,
) -> Option<u32>
where
    C: Fn(&K, &K) -> Ordering,
{
    let root = bst::insert(arena, root, node, comparator);
    rebalance(arena, root)
}

/// Rebalance children first, then this node.  Rotations repair the parent's
/// child slot themselves, so only the subtree's (possibly new) root needs
/// returning.
fn rebalance<K>(arena: &mut TreeArena<K>, node: Option<u32>) -> Option<u32> {
    let Some(n) = node else {
        return None;
    };

    rebalance(arena, arena[n as usize].l);
    rebalance(arena, arena[n as usize].r);

    let bf = balance_factor(arena, Some(n));
    if bf > 1 {
        if balance_factor(arena, arena[n as usize].l) >= 0 {
            return Some(rotate_right(arena, n));
        }
        // LR: left child leans right.
        let l = arena[n as usize].l.expect("left child exists");
        rotate_left(arena, l);
        return Some(rotate_right(arena, n));
    }
    if bf < -1 {
        if balance_factor(arena, arena[n as usize].r) <= 0 {
            return Some(rotate_left(arena, n));
        }
        // RL: right child leans left.
        let r = arena[n as usize].r.expect("right child exists");
        rotate_right(arena, r);
        return Some(rotate_left(arena, n));
    }
    Some(n)
}

/// BST checks plus the AVL balance bound at every node.
pub fn assert_avl<K, C>(
    arena: &[TreeNode<K>],
    root: Option<u32>,
    comparator: &C,
) -> Result<(), String>
where
    C: Fn(&K, &K) -> Ordering,
{
    bst::assert_bst(arena, root, comparator)?;

    fn validate<K>(arena: &[TreeNode<K>], node: Option<u32>) -> Result<(), String> {
        let Some(n) = node else {
            return Ok(());
        };
        let bf = balance_factor(arena, Some(n));
        if !(-1..=1).contains(&bf) {
            return Err(format!("AVL balance violated: bf={bf}"));
        }
        validate(arena, arena[n as usize].l)?;
        validate(arena, arena[n as usize].r)
    }

    validate(arena, root)
}

// ── Tests ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bst::in_order;
    use crate::types::{push_tree_node, Color};

    fn cmp(a: &i64, b: &i64) -> std::cmp::Ordering {
        a.cmp(b)
    }

    fn build(keys: &[i64]) -> (TreeArena<i64>, Option<u32>) {
        let mut arena = TreeArena::new();
        let mut root = None;
        for &k in keys {
            let n = push_tree_node(&mut arena, k, Color::Black);
            root = insert(&mut arena, root, n, &cmp);
            assert_avl(&arena, root, &cmp).unwrap();
        }
        (arena, root)
    }

    fn keys_in_order(arena: &[TreeNode<i64>], root: Option<u32>) -> Vec<i64> {
        in_order(arena, root)
            .into_iter()
            .map(|i| arena[i as usize].key)
            .collect()
    }

    #[test]
    fn ll_case_promotes_the_middle_key() {
        let (arena, root) = build(&[3, 2, 1]);
        let r = root.unwrap();
        assert_eq!(arena[r as usize].key, 2);
        assert_eq!(arena[arena[r as usize].l.unwrap() as usize].key, 1);
        assert_eq!(arena[arena[r as usize].r.unwrap() as usize].key, 3);
    }

    #[test]
    fn rr_case_promotes_the_middle_key() {
        let (arena, root) = build(&[1, 2, 3]);
        assert_eq!(arena[root.unwrap() as usize].key, 2);
    }

    #[test]
    fn lr_and_rl_cases() {
        let (arena, root) = build(&[3, 1, 2]);
        assert_eq!(arena[root.unwrap() as usize].key, 2);
        let (arena, root) = build(&[1, 3, 2]);
        assert_eq!(arena[root.unwrap() as usize].key, 2);
    }

    #[test]
    fn ascending_run_stays_balanced() {
        let (arena, root) = build(&(1..=32).collect::<Vec<_>>());
        assert!(height(&arena, root) <= 7);
        assert_eq!(keys_in_order(&arena, root), (1..=32).collect::<Vec<_>>());
    }

    #[test]
    fn duplicates_keep_order_non_decreasing() {
        let (arena, root) = build(&[2, 2, 2, 1, 1, 3]);
        assert_eq!(keys_in_order(&arena, root), vec![1, 1, 2, 2, 2, 3]);
    }
}
