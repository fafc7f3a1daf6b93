//! Red-black insertion.
//!
//! A new node enters RED via the shared BST descent, then a fixup walk
//! climbs while the parent is RED: a RED uncle means recolor and continue
//! from the grandparent; a BLACK (or absent) uncle means an inner-child
//! pre-rotation if needed, a recolor, and one rotation at the grandparent,
//! which ends the walk.  The root is forced BLACK afterwards.

use std::cmp::Ordering;

use crate::bst;
use crate::rotate::{rotate_left, rotate_right};
use crate::types::{Color, TreeArena, TreeNode};

#[inline]
fn is_red<K>(arena: &[TreeNode<K>], node: Option<u32>) -> bool {
    node.map(|n| arena[n as usize].color == Color::Red)
        .unwrap_or(false)
}

#[inline]
fn set_color<K>(arena: &mut TreeArena<K>, node: u32, color: Color) {
    arena[node as usize].color = color;
}

/// Attach `node` (recolored RED), restore the red-black invariants, and
/// return the new root.
pub fn insert<K, C>(
    arena: &mut TreeArena<K>,
    root: Option<u32>,
    node: u32,
    comparator: &C,
) -> Option<u32>
where
    C: Fn(&K, &K) -> Ordering,
{
    set_color(arena, node, Color::Red);
    let mut root = bst::insert(arena, root, node, comparator);

    let mut z = node;
    while let Some(p) = arena[z as usize].p {
        if arena[p as usize].color != Color::Red {
            break;
        }
        // A RED parent is never the root, so the grandparent exists.
        let gp = arena[p as usize].p.expect("red parent has a grandparent");

        if arena[gp as usize].l == Some(p) {
            let uncle = arena[gp as usize].r;
            if is_red(arena, uncle) {
                set_color(arena, p, Color::Black);
                set_color(arena, uncle.expect("uncle is red"), Color::Black);
                set_color(arena, gp, Color::Red);
                z = gp;
            } else {
                if arena[p as usize].r == Some(z) {
                    // Inner child: straighten into the outer case first.
                    z = p;
                    let top = rotate_left(arena, z);
                    if arena[top as usize].p.is_none() {
                        root = Some(top);
                    }
                }
                let zp = arena[z as usize].p.expect("outer child has a parent");
                set_color(arena, zp, Color::Black);
                set_color(arena, gp, Color::Red);
                let top = rotate_right(arena, gp);
                if arena[top as usize].p.is_none() {
                    root = Some(top);
                }
            }
        } else {
            let uncle = arena[gp as usize].l;
            if is_red(arena, uncle) {
                set_color(arena, p, Color::Black);
                set_color(arena, uncle.expect("uncle is red"), Color::Black);
                set_color(arena, gp, Color::Red);
                z = gp;
            } else {
                if arena[p as usize].l == Some(z) {
                    z = p;
                    let top = rotate_right(arena, z);
                    if arena[top as usize].p.is_none() {
                        root = Some(top);
                    }
                }
                let zp = arena[z as usize].p.expect("outer child has a parent");
                set_color(arena, zp, Color::Black);
                set_color(arena, gp, Color::Red);
                let top = rotate_left(arena, gp);
                if arena[top as usize].p.is_none() {
                    root = Some(top);
                }
            }
        }
    }

    if let Some(r) = root {
        set_color(arena, r, Color::Black);
    }
    root
}

/// BST checks plus: root is BLACK, no RED node has a RED child, and every
/// root-to-leaf path crosses the same number of BLACK nodes.
pub fn assert_red_black<K, C>(
    arena: &[TreeNode<K>],
    root: Option<u32>,
    comparator: &C,
) -> Result<(), String>
where
    C: Fn(&K, &K) -> Ordering,
{
    bst::assert_bst(arena, root, comparator)?;

    let Some(root) = root else {
        return Ok(());
    };
    if arena[root as usize].color != Color::Black {
        return Err("Root is not black".to_string());
    }

    fn black_height<K>(arena: &[TreeNode<K>], node: Option<u32>) -> Result<usize, String> {
        let Some(n) = node else {
            return Ok(0);
        };
        let l = arena[n as usize].l;
        let r = arena[n as usize].r;

        if arena[n as usize].color == Color::Red && (is_red(arena, l) || is_red(arena, r)) {
            return Err("Red node has red child".to_string());
        }

        let lh = black_height(arena, l)?;
        let rh = black_height(arena, r)?;
        if lh != rh {
            return Err("Black height mismatch".to_string());
        }

        Ok(lh + usize::from(arena[n as usize].color == Color::Black))
    }

    black_height(arena, Some(root)).map(|_| ())
}

// ── Tests ─────────────────────────────────────────────────────────────────
