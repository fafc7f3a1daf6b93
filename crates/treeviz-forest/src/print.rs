//! Debug printers.
//!
//! Indented ASCII dumps for eyeballing a structure in a test failure or a
//! REPL; no behavioral weight.

use std::fmt::Debug;

use crate::types::{Color, HeapNode, TreeNode};

/// Render a binary tree, one node per line, `∅` for an absent child.
pub fn print_binary<K: Debug>(arena: &[TreeNode<K>], node: Option<u32>, tab: &str) -> String {
    match node {
        None => "∅".to_string(),
        Some(i) => {
            let n = &arena[i as usize];
            let left = print_binary(arena, n.l, &format!("{tab}  "));
            let right = print_binary(arena, n.r, &format!("{tab}  "));
            let color = if n.color == Color::Red { "R" } else { "B" };
            format!(
                "Node[{i}] [{color}] {{ {:?} }}\n{tab}L={left}\n{tab}R={right}",
                n.key
            )
        }
    }
}

/// Render a binomial forest, each root tree indented by level.
pub fn print_forest<K: Debug>(arena: &[HeapNode<K>], head: Option<u32>) -> String {
    fn tree<K: Debug>(arena: &[HeapNode<K>], node: u32, tab: &str, out: &mut String) {
        let n = &arena[node as usize];
        out.push_str(&format!("{tab}Node[{node}] [d={}] {{ {:?} }}\n", n.degree, n.key));
        let mut child = n.child;
        while let Some(c) = child {
            tree(arena, c, &format!("{tab}  "), out);
            child = arena[c as usize].sibling;
        }
    }

    let mut out = String::new();
    let mut curr = head;
    while let Some(root) = curr {
        tree(arena, root, "", &mut out);
        curr = arena[root as usize].sibling;
    }
    if out.is_empty() {
        out.push('∅');
    }
    out
}

// ── Tests ─────────────────────────────────────────────────────────────────
