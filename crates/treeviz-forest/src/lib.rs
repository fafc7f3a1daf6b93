//! Arena-based engine for classic teaching data structures.
//!
//! Provides the pure, side-effect-free operations behind an interactive
//! tree visualizer: binary search tree, AVL tree, red-black tree and
//! binomial min-heap, plus the deterministic layout pass that assigns
//! draw coordinates.
//!
//! Instead of raw pointers, all links (`parent`, `left`, `right`,
//! `child`, `sibling`) are `Option<u32>` indices into a caller-owned
//! `Vec` arena.  Operations take the arena as `&mut Vec<_>` plus a root
//! index and hand back the new root; the caller treats every returned
//! root as authoritative.  The arena index doubles as a stable node id.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`TreeNode`], [`HeapNode`], [`Color`], arena aliases |
//! [`bst`] | ordered insert/delete/find, in-order traversal |
//! [`rotate`] | single rotations shared by AVL and red-black |
//! [`avl`] | height-balanced insert |
//! [`red_black`] | color-balanced insert |
//! [`binomial`] | mergeable min-heap (link, union, extract-min) |
//! [`layout`] | coordinate assignment and bounding boxes |
//! [`print`] | ASCII debug dumps |

pub mod avl;
pub mod binomial;
pub mod bst;
pub mod layout;
pub mod print;
pub mod red_black;
pub mod rotate;
pub mod types;

pub use layout::{Bounds, H_GAP, NODE_R, V_GAP};
pub use rotate::{rotate_left, rotate_right};
pub use types::{
    push_heap_node, push_tree_node, Color, HeapArena, HeapNode, TreeArena, TreeNode,
};
