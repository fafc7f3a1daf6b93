//! Engine facade for an interactive tree visualizer.
//!
//! The presentation layer parses user input into a numeric key, picks the
//! active structure variant, calls one operation on it, re-runs `layout()`
//! and draws the exported [`Scene`].  Each variant owns its node arena
//! (see `treeviz-forest`) and exposes its own operation set; there is no
//! unified polymorphic interface, routing is the caller's job.
//!
//! The engine is synchronous and pure: no I/O, no timers, no hidden
//! state.  The only error it can surface is [`EngineError::InvalidKey`],
//! raised before any mutation when a key is NaN or infinite; everything
//! else (deleting an absent key, extracting from an empty heap) is a
//! defined no-op or an absent result.
//!
//! ```
//! use treeviz::{Avl, Heap};
//!
//! let mut tree = Avl::new();
//! for key in [3.0, 2.0, 1.0] {
//!     tree.insert(key).unwrap();
//! }
//! assert_eq!(tree.values_in_order(), vec![1.0, 2.0, 3.0]);
//!
//! tree.layout();
//! let scene = tree.scene();
//! assert_eq!(scene.nodes.len(), 3);
//!
//! let mut heap = Heap::new();
//! for key in [4.0, 8.0, 1.0] {
//!     heap.insert(key).unwrap();
//! }
//! assert_eq!(heap.extract_min(), Some(1.0));
//! ```

use serde::{Deserialize, Serialize};

pub mod binary;
pub mod error;
pub mod heap;
pub mod scene;

pub use binary::{Avl, Bst, RedBlack};
pub use error::EngineError;
pub use heap::Heap;
pub use scene::{NodeColor, Scene, SceneBounds, SceneEdge, SceneNode, ViewBox};

/// Which structure variant the caller is driving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TreeKind {
    #[serde(rename = "BST")]
    Bst,
    #[serde(rename = "AVL")]
    Avl,
    #[serde(rename = "RBT")]
    RedBlack,
    #[serde(rename = "BH")]
    BinomialHeap,
}
