//! Plain binary-search-tree operations.
//!
//! These are the shared foundation of all three binary variants: AVL and
//! red-black inserts start with the same descent.  Keys compare through a
//! caller-supplied comparator; a key that is not `Less` than the current
//! node (equal keys included) descends RIGHT, so duplicates land in the
//! right subtree.

use std::cmp::Ordering;

use crate::types::{TreeArena, TreeNode};

// ── helpers ───────────────────────────────────────────────────────────────

#[inline]
fn get_p<K>(arena: &[TreeNode<K>], idx: u32) -> Option<u32> {
    arena[idx as usize].p
}
#[inline]
fn get_l<K>(arena: &[TreeNode<K>], idx: u32) -> Option<u32> {
    arena[idx as usize].l
}
#[inline]
fn get_r<K>(arena: &[TreeNode<K>], idx: u32) -> Option<u32> {
    arena[idx as usize].r
}
#[inline]
fn set_p<K>(arena: &mut TreeArena<K>, idx: u32, v: Option<u32>) {
    arena[idx as usize].p = v;
}
#[inline]
fn set_l<K>(arena: &mut TreeArena<K>, idx: u32, v: Option<u32>) {
    arena[idx as usize].l = v;
}
#[inline]
fn set_r<K>(arena: &mut TreeArena<K>, idx: u32, v: Option<u32>) {
    arena[idx as usize].r = v;
}

/// Replace `node` with `child` in `parent`'s child slot (or make `child`
/// the root when `parent` is absent).  Returns the new root.
fn replace_child<K>(
    arena: &mut TreeArena<K>,
    root: Option<u32>,
    parent: Option<u32>,
    node: u32,
    child: Option<u32>,
) -> Option<u32> {
    if let Some(c) = child {
        set_p(arena, c, parent);
    }
    match parent {
        Some(p) => {
            if get_l(arena, p) == Some(node) {
                set_l(arena, p, child);
            } else {
                set_r(arena, p, child);
            }
            root
        }
        None => child,
    }
}

// ── traversal ─────────────────────────────────────────────────────────────

/// Leftmost node of the subtree rooted at `root`.
pub fn first<K>(arena: &[TreeNode<K>], root: Option<u32>) -> Option<u32> {
    let mut curr = root;
    while let Some(idx) = curr {
        match get_l(arena, idx) {
            Some(l) => curr = Some(l),
            None => return Some(idx),
        }
    }
    curr
}

/// In-order successor of `node`.
pub fn next<K>(arena: &[TreeNode<K>], node: u32) -> Option<u32> {
    if let Some(r) = get_r(arena, node) {
        let mut curr = r;
        while let Some(l) = get_l(arena, curr) {
            curr = l;
        }
        return Some(curr);
    }
    let mut curr = node;
    let mut p = get_p(arena, node);
    while let Some(pi) = p {
        if get_r(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// Indices of the whole tree in key order.
pub fn in_order<K>(arena: &[TreeNode<K>], root: Option<u32>) -> Vec<u32> {
    let mut out = Vec::new();
    let mut curr = first(arena, root);
    while let Some(idx) = curr {
        out.push(idx);
        curr = next(arena, idx);
    }
    out
}

// ── search ────────────────────────────────────────────────────────────────

/// Ordered lookup.  Returns the first node whose key compares `Equal`.
pub fn find<K, C>(arena: &[TreeNode<K>], root: Option<u32>, key: &K, comparator: &C) -> Option<u32>
where
    C: Fn(&K, &K) -> Ordering,
{
    let mut curr = root;
    while let Some(idx) = curr {
        match comparator(key, &arena[idx as usize].key) {
            Ordering::Equal => return Some(idx),
            Ordering::Less => curr = get_l(arena, idx),
            Ordering::Greater => curr = get_r(arena, idx),
        }
    }
    None
}

// ── mutation ──────────────────────────────────────────────────────────────

/// Attach the already-allocated `node` to the tree rooted at `root`.
///
/// Walks down comparing; `Less` goes left, everything else goes right.
/// Sets the new leaf's parent link and returns the (unchanged unless the
/// tree was empty) root.
pub fn insert<K, C>(
    arena: &mut TreeArena<K>,
    root: Option<u32>,
    node: u32,
    comparator: &C,
) -> Option<u32>
where
    C: Fn(&K, &K) -> Ordering,
{
    let Some(mut curr) = root else {
        return Some(node);
    };

    loop {
        let goes_left =
            comparator(&arena[node as usize].key, &arena[curr as usize].key) == Ordering::Less;
        let down = if goes_left {
            get_l(arena, curr)
        } else {
            get_r(arena, curr)
        };
        match down {
            Some(d) => curr = d,
            None => {
                if goes_left {
                    set_l(arena, curr, Some(node));
                } else {
                    set_r(arena, curr, Some(node));
                }
                set_p(arena, node, Some(curr));
                return root;
            }
        }
    }
}

/// Delete the first node matching `key`.
///
/// A node with at most one child is spliced out.  A node with two children
/// takes its in-order successor's key, and the successor's own node is
/// removed from the right subtree instead.  An absent key is a silent
/// no-op; returns `None` once the tree is empty.
pub fn remove<K, C>(
    arena: &mut TreeArena<K>,
    root: Option<u32>,
    key: &K,
    comparator: &C,
) -> Option<u32>
where
    K: Clone,
    C: Fn(&K, &K) -> Ordering,
{
    let Some(node) = find(arena, root, key, comparator) else {
        return root;
    };

    let l = get_l(arena, node);
    let r = get_r(arena, node);

    if let (Some(_), Some(r)) = (l, r) {
        // Two children: copy the successor's key into `node`, then splice
        // the successor (leftmost of the right subtree, so it has no left
        // child) out of its slot.
        let succ = first(arena, Some(r)).expect("right subtree is non-empty");
        arena[node as usize].key = arena[succ as usize].key.clone();

        let succ_p = get_p(arena, succ);
        let succ_r = get_r(arena, succ);
        set_p(arena, succ, None);
        set_r(arena, succ, None);
        return replace_child(arena, root, succ_p, succ, succ_r);
    }

    let p = get_p(arena, node);
    set_p(arena, node, None);
    set_l(arena, node, None);
    set_r(arena, node, None);
    replace_child(arena, root, p, node, l.or(r))
}

// ── validation ────────────────────────────────────────────────────────────

/// Check parent-link integrity and that the in-order key sequence is
/// non-decreasing (duplicates are legal and sit in right subtrees).
pub fn assert_bst<K, C>(
    arena: &[TreeNode<K>],
    root: Option<u32>,
    comparator: &C,
) -> Result<(), String>
where
    C: Fn(&K, &K) -> Ordering,
{
    let Some(root) = root else {
        return Ok(());
    };

    if get_p(arena, root).is_some() {
        return Err("Root has parent".to_string());
    }

    fn validate_links<K>(arena: &[TreeNode<K>], node: u32) -> Result<(), String> {
        if let Some(l) = get_l(arena, node) {
            if get_p(arena, l) != Some(node) {
                return Err("Broken parent link on left child".to_string());
            }
            validate_links(arena, l)?;
        }
        if let Some(r) = get_r(arena, node) {
            if get_p(arena, r) != Some(node) {
                return Err("Broken parent link on right child".to_string());
            }
            validate_links(arena, r)?;
        }
        Ok(())
    }

    validate_links(arena, root)?;

    let mut curr = first(arena, Some(root));
    let mut prev: Option<u32> = None;
    while let Some(idx) = curr {
        if let Some(pv) = prev {
            if comparator(&arena[pv as usize].key, &arena[idx as usize].key) == Ordering::Greater {
                return Err("Node order violated".to_string());
            }
        }
        prev = Some(idx);
        curr = next(arena, idx);
    }

    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────
