//! Render-scene export.
//!
//! A [`Scene`] is the hand-off to the presentation layer: node positions,
//! logical color tags, edges, and a view box fitted to the laid-out
//! coordinates.  Palette choice, node radius and edge styling stay on the
//! rendering side.

use serde::{Deserialize, Serialize};
use std::fmt;

use treeviz_forest::{Bounds, Color};

/// Padding around the extreme nodes when fitting the view box.
const MARGIN: f64 = 50.0;
/// The view box never shrinks below this, so small trees stay readable.
const MIN_WIDTH: f64 = 1000.0;
const MIN_HEIGHT: f64 = 600.0;
/// Labels longer than this many characters wrap onto a second line.
const LABEL_WIDTH: usize = 3;

/// Logical node color, serialized the way renderers expect it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeColor {
    Red,
    Black,
}

impl From<Color> for NodeColor {
    fn from(color: Color) -> Self {
        match color {
            Color::Red => NodeColor::Red,
            Color::Black => NodeColor::Black,
        }
    }
}

/// One drawable node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneNode {
    /// Stable id (the arena index).
    pub id: u32,
    pub label: String,
    /// `label` split for display; one entry unless the label is long.
    pub lines: Vec<String>,
    /// Color tag for binary-tree nodes; absent for heap nodes.
    pub color: Option<NodeColor>,
    pub x: f64,
    pub y: f64,
    /// Set on the root of the minimum tree in a heap scene.
    pub is_min_root: bool,
}

/// Parent-to-child edge between two scene nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneEdge {
    pub from: u32,
    pub to: u32,
}

/// Extreme node coordinates, when the structure is non-empty.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneBounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl From<Bounds> for SceneBounds {
    fn from(b: Bounds) -> Self {
        Self {
            min_x: b.min_x,
            max_x: b.max_x,
            min_y: b.min_y,
            max_y: b.max_y,
        }
    }
}

/// SVG-style view box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for ViewBox {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: MIN_WIDTH,
            height: MIN_HEIGHT,
        }
    }
}

impl fmt::Display for ViewBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.x, self.y, self.width, self.height)
    }
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub nodes: Vec<SceneNode>,
    pub edges: Vec<SceneEdge>,
    pub bounds: Option<SceneBounds>,
    pub view_box: ViewBox,
}

impl Scene {
    /// JSON form for renderer bridges that speak text (WASM, FFI, IPC).
    /// Scene values are plain finite numbers and strings, so this cannot
    /// fail.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("scene is plain data")
    }
}

/// Fit a view box around `bounds`: pad by the margin, enforce the minimum
/// size, and center the content inside any leftover space.  An empty
/// structure gets the default box.
pub fn fit_view_box(bounds: Option<Bounds>) -> ViewBox {
    let Some(b) = bounds else {
        return ViewBox::default();
    };

    let width = b.max_x - b.min_x + MARGIN * 2.0;
    let height = b.max_y - b.min_y + MARGIN * 2.0;
    let final_width = MIN_WIDTH.max(width);
    let final_height = MIN_HEIGHT.max(height);

    let x = b.min_x - MARGIN - (final_width - width) / 2.0;
    let y = b.min_y - MARGIN - (final_height - height) / 2.0;

    ViewBox {
        x,
        y,
        width: final_width,
        height: final_height,
    }
}

/// Display form of a key; integral values print without a trailing `.0`.
pub(crate) fn format_key(key: f64) -> String {
    format!("{key}")
}

/// Split a label for in-node display: short labels stay whole, longer
/// ones break into two roughly equal lines.
pub fn wrap_label(label: &str) -> Vec<String> {
    let chars: Vec<char> = label.chars().collect();
    if chars.len() <= LABEL_WIDTH {
        return vec![label.to_string()];
    }
    let mid = chars.len().div_ceil(2);
    vec![
        chars[..mid].iter().collect(),
        chars[mid..].iter().collect(),
    ]
}

// ── Tests ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_bounds_yield_the_default_box() {
        assert_eq!(fit_view_box(None), ViewBox::default());
        assert_eq!(ViewBox::default().to_string(), "0 0 1000 600");
    }

    #[test]
    fn small_content_is_centered_in_the_minimum_box() {
        // A single node at the origin.
        let b = Bounds {
            min_x: 0.0,
            max_x: 0.0,
            min_y: 0.0,
            max_y: 0.0,
        };
        let vb = fit_view_box(Some(b));
        assert_eq!(vb.width, 1000.0);
        assert_eq!(vb.height, 600.0);
        // Content (100x100 with margins) centered: offset pulls left/up.
        assert_eq!(vb.x, -50.0 - (1000.0 - 100.0) / 2.0);
        assert_eq!(vb.y, -50.0 - (600.0 - 100.0) / 2.0);
    }

    #[test]
    fn wide_content_grows_the_box() {
        let b = Bounds {
            min_x: 0.0,
            max_x: 2000.0,
            min_y: 0.0,
            max_y: 90.0,
        };
        let vb = fit_view_box(Some(b));
        assert_eq!(vb.width, 2100.0);
        assert_eq!(vb.x, -50.0);
        assert_eq!(vb.height, 600.0);
    }

    #[test]
    fn short_labels_stay_whole() {
        assert_eq!(wrap_label("7"), vec!["7"]);
        assert_eq!(wrap_label("123"), vec!["123"]);
    }

    #[test]
    fn long_labels_split_in_the_middle() {
        assert_eq!(wrap_label("1234"), vec!["12", "34"]);
        assert_eq!(wrap_label("12345"), vec!["123", "45"]);
    }

    #[test]
    fn integral_keys_print_without_decimals() {
        assert_eq!(format_key(5.0), "5");
        assert_eq!(format_key(2.5), "2.5");
    }

    #[test]
    fn color_tags_serialize_lowercase() {
        assert_eq!(
            serde_json::to_string(&NodeColor::Red).unwrap(),
            "\"red\"".to_string()
        );
    }
}
