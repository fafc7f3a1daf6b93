//! Single rotations shared by the AVL and red-black engines.
//!
//! Both rotations relink parent pointers on every seam they touch: the
//! promoted child, the displaced grandchild, and the old parent's child
//! slot.  In-order key sequence is preserved.

use crate::types::TreeArena;

#[inline]
fn set_p<K>(arena: &mut TreeArena<K>, idx: u32, v: Option<u32>) {
    arena[idx as usize].p = v;
}

/// Hook `child` into `parent`'s slot where `node` used to be.
fn relink_parent<K>(arena: &mut TreeArena<K>, parent: Option<u32>, node: u32, child: u32) {
    if let Some(p) = parent {
        if arena[p as usize].l == Some(node) {
            arena[p as usize].l = Some(child);
        } else {
            arena[p as usize].r = Some(child);
        }
    }
}

/// Rotate left around `x`:
///
/// ```text
///   x                y
///    \              /
///     y     →      x
///    /              \
///   b                b
/// ```
///
/// `x` must have a right child.  Returns the subtree's new root `y`.
pub fn rotate_left<K>(arena: &mut TreeArena<K>, x: u32) -> u32 {
    let y = arena[x as usize].r.expect("rotate_left needs a right child");
    let b = arena[y as usize].l;
    let p = arena[x as usize].p;

    arena[x as usize].r = b;
    if let Some(b) = b {
        set_p(arena, b, Some(x));
    }

    set_p(arena, y, p);
    relink_parent(arena, p, x, y);

    arena[y as usize].l = Some(x);
    set_p(arena, x, Some(y));
    y
}

/// Rotate right around `y`:
///
/// ```text
///     y            x
///    /              \
///   x       →        y
///    \              /
///     b            b
/// ```
///
/// `y` must have a left child.  Returns the subtree's new root `x`.
pub fn rotate_right<K>(arena: &mut TreeArena<K>, y: u32) -> u32 {
    let x = arena[y as usize].l.expect("rotate_right needs a left child");
    let b = arena[x as usize].r;
    let p = arena[y as usize].p;

    arena[y as usize].l = b;
    if let Some(b) = b {
        set_p(arena, b, Some(y));
    }

    set_p(arena, x, p);
    relink_parent(arena, p, y, x);

    arena[x as usize].r = Some(y);
    set_p(arena, y, Some(x));
    x
}

// ── Tests ─────────────────────────────────────────────────────────────────
