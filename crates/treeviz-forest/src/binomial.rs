//! Binomial min-heap operations.
//!
//! A heap is a root list of binomial trees chained through `sibling`,
//! strictly increasing in degree once consolidation has run.  Linking
//! always compares keys and makes the smaller key the parent, so the
//! min-heap property holds on every edge no matter which order trees
//! arrive in.

use std::cmp::Ordering;

use crate::types::{push_heap_node, HeapArena, HeapNode};

// ── root-list plumbing ────────────────────────────────────────────────────

/// Merge two degree-sorted root lists into one, stable for equal degrees
/// (`a`'s tree comes first).  Consumes both chains; the result is NOT yet
/// consolidated.
pub fn merge_root_lists<K>(
    arena: &mut HeapArena<K>,
    a: Option<u32>,
    b: Option<u32>,
) -> Option<u32> {
    let mut head: Option<u32> = None;
    let mut tail: Option<u32> = None;
    let (mut x, mut y) = (a, b);

    while let (Some(xi), Some(yi)) = (x, y) {
        let take = if arena[xi as usize].degree <= arena[yi as usize].degree {
            x = arena[xi as usize].sibling;
            xi
        } else {
            y = arena[yi as usize].sibling;
            yi
        };
        match tail {
            None => head = Some(take),
            Some(t) => arena[t as usize].sibling = Some(take),
        }
        tail = Some(take);
    }

    let rest = x.or(y);
    match tail {
        None => rest,
        Some(t) => {
            arena[t as usize].sibling = rest;
            head
        }
    }
}

/// Link two trees of equal degree.  The smaller key becomes the parent
/// (first argument wins ties); the loser is prepended to the winner's
/// child list and the winner's degree grows by one.  Returns the winner.
pub fn link<K, C>(arena: &mut HeapArena<K>, a: u32, b: u32, comparator: &C) -> u32
where
    C: Fn(&K, &K) -> Ordering,
{
    debug_assert_eq!(arena[a as usize].degree, arena[b as usize].degree);

    let b_wins = comparator(&arena[b as usize].key, &arena[a as usize].key) == Ordering::Less;
    let (parent, child) = if b_wins { (b, a) } else { (a, b) };

    arena[child as usize].parent = Some(parent);
    arena[child as usize].sibling = arena[parent as usize].child;
    arena[parent as usize].child = Some(child);
    arena[parent as usize].degree += 1;
    parent
}

// ── heap operations ───────────────────────────────────────────────────────

/// Merge two heaps and consolidate until no two roots share a degree.
///
/// The scan looks one tree ahead: when the NEXT-next root also has the
/// current degree the link is deferred one step, so at most two same-degree
/// roots are ever adjacent at the scan position.  Returns the new head, or
/// `None` when both inputs were empty.
pub fn union<K, C>(
    arena: &mut HeapArena<K>,
    h1: Option<u32>,
    h2: Option<u32>,
    comparator: &C,
) -> Option<u32>
where
    C: Fn(&K, &K) -> Ordering,
{
    let mut head = merge_root_lists(arena, h1, h2)?;

    let mut prev: Option<u32> = None;
    let mut curr = head;
    while let Some(next) = arena[curr as usize].sibling {
        let same = arena[curr as usize].degree == arena[next as usize].degree;
        let next_next = arena[next as usize].sibling;
        let three_in_a_row = same
            && next_next
                .map(|nn| arena[nn as usize].degree == arena[next as usize].degree)
                .unwrap_or(false);

        if !same || three_in_a_row {
            prev = Some(curr);
            curr = next;
            continue;
        }

        let winner = link(arena, curr, next, comparator);
        arena[winner as usize].sibling = next_next;
        match prev {
            None => head = winner,
            Some(p) => arena[p as usize].sibling = Some(winner),
        }
        curr = winner;
    }

    Some(head)
}

/// Wrap `key` in a singleton tree and union it into the heap.  Returns the
/// new head (a heap that just grew is never empty).
pub fn insert<K, C>(arena: &mut HeapArena<K>, head: Option<u32>, key: K, comparator: &C) -> u32
where
    C: Fn(&K, &K) -> Ordering,
{
    let node = push_heap_node(arena, key);
    union(arena, head, Some(node), comparator).expect("union of a non-empty heap")
}

/// Root with the smallest key; leftmost wins ties.  `None` on empty.
pub fn find_min<K, C>(arena: &[HeapNode<K>], head: Option<u32>, comparator: &C) -> Option<u32>
where
    C: Fn(&K, &K) -> Ordering,
{
    let mut best = head?;
    let mut curr = arena[best as usize].sibling;
    while let Some(c) = curr {
        if comparator(&arena[c as usize].key, &arena[best as usize].key) == Ordering::Less {
            best = c;
        }
        curr = arena[c as usize].sibling;
    }
    Some(best)
}

/// Splice the minimum root out, promote its children (reversed, parents
/// cleared) to a root list of their own, and union the two lists back
/// together.  Returns `(new_head, extracted)`; `(None, None)` on empty.
///
/// The extracted node is reset to a detached singleton (no links,
/// degree 0) so the caller can re-insert it if it wants to.
pub fn extract_min<K, C>(
    arena: &mut HeapArena<K>,
    head: Option<u32>,
    comparator: &C,
) -> (Option<u32>, Option<u32>)
where
    C: Fn(&K, &K) -> Ordering,
{
    let Some(h) = head else {
        return (None, None);
    };

    // Minimum root and its predecessor in one scan.
    let mut min = h;
    let mut min_prev: Option<u32> = None;
    let mut prev = h;
    let mut curr = arena[h as usize].sibling;
    while let Some(c) = curr {
        if comparator(&arena[c as usize].key, &arena[min as usize].key) == Ordering::Less {
            min = c;
            min_prev = Some(prev);
        }
        prev = c;
        curr = arena[c as usize].sibling;
    }

    let rest = match min_prev {
        None => arena[min as usize].sibling,
        Some(p) => {
            arena[p as usize].sibling = arena[min as usize].sibling;
            Some(h)
        }
    };

    // Children become roots in reverse order (smallest degree first).
    let mut promoted: Option<u32> = None;
    let mut child = arena[min as usize].child;
    while let Some(c) = child {
        let next = arena[c as usize].sibling;
        arena[c as usize].sibling = promoted;
        arena[c as usize].parent = None;
        promoted = Some(c);
        child = next;
    }

    arena[min as usize].child = None;
    arena[min as usize].sibling = None;
    arena[min as usize].degree = 0;

    (union(arena, rest, promoted, comparator), Some(min))
}

// ── validation ────────────────────────────────────────────────────────────

/// Check the full heap shape: strictly increasing root degrees, min-heap
/// key order on every edge, parent/sibling link integrity, and `2^degree`
/// nodes per tree.
pub fn assert_binomial<K, C>(
    arena: &[HeapNode<K>],
    head: Option<u32>,
    comparator: &C,
) -> Result<(), String>
where
    C: Fn(&K, &K) -> Ordering,
{
    fn check_tree<K, C>(
        arena: &[HeapNode<K>],
        node: u32,
        expected_parent: Option<u32>,
        comparator: &C,
    ) -> Result<u64, String>
    where
        C: Fn(&K, &K) -> Ordering,
    {
        if arena[node as usize].parent != expected_parent {
            return Err("Broken parent link".to_string());
        }

        let degree = arena[node as usize].degree;
        let mut size: u64 = 1;
        let mut expected_child_degree = degree;
        let mut child = arena[node as usize].child;
        while let Some(c) = child {
            if comparator(&arena[node as usize].key, &arena[c as usize].key) == Ordering::Greater {
                return Err("Heap order violated".to_string());
            }
            // First child of a degree-d node has degree d-1, then d-2, ...
            if expected_child_degree == 0 {
                return Err("Too many children for degree".to_string());
            }
            expected_child_degree -= 1;
            if arena[c as usize].degree != expected_child_degree {
                return Err(format!(
                    "Child degree mismatch: expected {expected_child_degree}, got {}",
                    arena[c as usize].degree
                ));
            }
            size += check_tree(arena, c, Some(node), comparator)?;
            child = arena[c as usize].sibling;
        }
        if expected_child_degree != 0 {
            return Err("Too few children for degree".to_string());
        }
        if size != 1u64 << degree {
            return Err(format!("Tree of degree {degree} has {size} nodes"));
        }
        Ok(size)
    }

    let mut last_degree: Option<u32> = None;
    let mut curr = head;
    while let Some(root) = curr {
        if let Some(d) = last_degree {
            if arena[root as usize].degree <= d {
                return Err("Root degrees not strictly increasing".to_string());
            }
        }
        last_degree = Some(arena[root as usize].degree);
        check_tree(arena, root, None, comparator)?;
        curr = arena[root as usize].sibling;
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn cmp(a: &i64, b: &i64) -> std::cmp::Ordering {
        a.cmp(b)
    }

    fn build(keys: &[i64]) -> (HeapArena<i64>, Option<u32>) {
        let mut arena = HeapArena::new();
        let mut head = None;
        for &k in keys {
            head = Some(insert(&mut arena, head, k, &cmp));
            assert_binomial(&arena, head, &cmp).unwrap();
        }
        (arena, head)
    }

    #[test]
    fn singleton_has_degree_zero() {
        let mut arena = HeapArena::new();
        let n = push_heap_node(&mut arena, 10);
        assert_eq!(arena[n as usize].degree, 0);
        assert_eq!(arena[n as usize].key, 10);
        assert!(arena[n as usize].parent.is_none());
    }

    #[test]
    fn linking_two_singletons_keeps_the_smaller_on_top() {
        let mut arena = HeapArena::new();
        let a = push_heap_node(&mut arena, 5);
        let b = push_heap_node(&mut arena, 3);
        let merged = union(&mut arena, Some(a), Some(b), &cmp).unwrap();
        assert_eq!(arena[merged as usize].key, 3);
        assert_eq!(arena[merged as usize].degree, 1);
        let child = arena[merged as usize].child.unwrap();
        assert_eq!(arena[child as usize].key, 5);
        assert_eq!(arena[child as usize].parent, Some(merged));
    }

    #[test]
    fn link_tie_keeps_the_first_argument() {
        let mut arena = HeapArena::new();
        let a = push_heap_node(&mut arena, 7);
        let b = push_heap_node(&mut arena, 7);
        assert_eq!(link(&mut arena, a, b, &cmp), a);
    }

    #[test]
    fn union_with_empty_returns_the_other_unchanged() {
        let (mut arena, head) = build(&[4, 2, 9]);
        assert_eq!(union(&mut arena, head, None, &cmp), head);
        assert_eq!(union(&mut arena, None, head, &cmp), head);
        assert!(union::<i64, _>(&mut arena, None, None, &cmp).is_none());
    }

    #[test]
    fn find_min_scans_the_root_list() {
        let (arena, head) = build(&[7, 1, 9, 2, 5]);
        let min = find_min(&arena, head, &cmp).unwrap();
        assert_eq!(arena[min as usize].key, 1);
    }

    #[test]
    fn find_min_on_empty_is_none() {
        let arena: HeapArena<i64> = HeapArena::new();
        assert!(find_min(&arena, None, &cmp).is_none());
    }

    #[test]
    fn extract_min_removes_exactly_the_minimum() {
        let (mut arena, head) = build(&[4, 8, 6, 1, 3]);
        let (rest, extracted) = extract_min(&mut arena, head, &cmp);
        assert_eq!(arena[extracted.unwrap() as usize].key, 1);
        assert_binomial(&arena, rest, &cmp).unwrap();
        let min2 = find_min(&arena, rest, &cmp).unwrap();
        assert_ne!(arena[min2 as usize].key, 1);
        assert_eq!(arena[min2 as usize].key, 3);
    }

    #[test]
    fn extract_min_on_empty_is_absent() {
        let mut arena: HeapArena<i64> = HeapArena::new();
        assert_eq!(extract_min(&mut arena, None, &cmp), (None, None));
    }

    #[test]
    fn draining_yields_sorted_keys() {
        let (mut arena, mut head) = build(&[9, 4, 7, 1, 8, 2, 6, 3, 5]);
        let mut drained = Vec::new();
        loop {
            let (rest, extracted) = extract_min(&mut arena, head, &cmp);
            head = rest;
            match extracted {
                Some(n) => drained.push(arena[n as usize].key),
                None => break,
            }
            assert_binomial(&arena, head, &cmp).unwrap();
        }
        assert_eq!(drained, (1..=9).collect::<Vec<_>>());
        assert!(head.is_none());
    }

    #[test]
    fn degrees_follow_the_binary_representation() {
        // 13 = 0b1101 keys -> trees of degree 0, 2 and 3.
        let (arena, head) = build(&(1..=13).collect::<Vec<_>>());
        let mut degrees = Vec::new();
        let mut curr = head;
        while let Some(r) = curr {
            degrees.push(arena[r as usize].degree);
            curr = arena[r as usize].sibling;
        }
        assert_eq!(degrees, vec![0, 2, 3]);
    }

    #[test]
    fn duplicate_keys_are_independent_entries() {
        let (mut arena, head) = build(&[5, 5, 5]);
        let (rest, extracted) = extract_min(&mut arena, head, &cmp);
        assert_eq!(arena[extracted.unwrap() as usize].key, 5);
        let min = find_min(&arena, rest, &cmp).unwrap();
        assert_eq!(arena[min as usize].key, 5);
    }
}
