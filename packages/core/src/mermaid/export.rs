//! Export a node store to a Mermaid flowchart string.
//!
//! Output shape, in fixed order:
//!
//! ```text
//! graph TB
//!     subgraph -
//!         api_gateway((api gateway))
//!     end
//!     subgraph .
//!         api_gateway((api gateway))-->2
//!         2((2))
//!     end
//! ```
//!
//! The `-` block declares parent-kind nodes; the `.` block carries one edge
//! line per relation, walking ALL nodes in store order, and is omitted
//! entirely while the store holds one node or fewer.

use crate::models::Node;
use crate::services::NodeStore;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// Layout direction keyword for the diagram header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    /// `TB` - top to bottom (the default)
    #[default]
    TopBottom,
    /// `BT` - bottom to top
    BottomTop,
    /// `LR` - left to right
    LeftRight,
    /// `RL` - right to left
    RightLeft,
}

impl Direction {
    /// Parse a direction from its Mermaid keyword (case-insensitive).
    ///
    /// Unrecognized input is `None`, matching the crate's not-found
    /// convention.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "TB" | "TD" => Some(Direction::TopBottom),
            "BT" => Some(Direction::BottomTop),
            "LR" => Some(Direction::LeftRight),
            "RL" => Some(Direction::RightLeft),
            _ => None,
        }
    }

    /// The Mermaid keyword emitted in the `graph` header line.
    pub fn as_keyword(&self) -> &'static str {
        match self {
            Direction::TopBottom => "TB",
            Direction::BottomTop => "BT",
            Direction::LeftRight => "LR",
            Direction::RightLeft => "RL",
        }
    }
}

/// Generation settings for [`store_to_mermaid`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagramConfig {
    /// Layout direction declared in the header line
    #[serde(default)]
    pub direction: Direction,
}

/// Make a user-supplied id safe for emission inside the flowchart grammar.
///
/// Characters outside `[A-Za-z0-9_]` become `_` so an id can never bleed
/// into the `((...))` delimiters or the `-->` arrow, and the bare `end`
/// keyword (which would close a subgraph early) gets a trailing underscore.
pub fn identifier_to_safe(id: &str) -> String {
    let safe: String = id
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    if safe == "end" {
        return "end_".to_string();
    }
    safe
}

/// Strip the label delimiters from a display name.
fn label_to_safe(name: &str) -> String {
    name.replace(['(', ')'], "")
}

fn push_declaration(out: &mut String, node: &Node) {
    let _ = write!(
        out,
        "{}(({}))",
        identifier_to_safe(&node.id),
        label_to_safe(&node.name)
    );
}

/// Render the store as Mermaid flowchart text.
///
/// Pure and total: never fails, performs no validation of relation targets,
/// and produces identical text for identical stores. An empty store yields
/// the header plus an empty parents block.
///
/// # Examples
///
/// ```rust
/// use flowtree_core::models::{Node, NodeKind};
/// use flowtree_core::services::NodeStore;
/// use flowtree_core::mermaid::{store_to_mermaid, DiagramConfig};
///
/// let mut store = NodeStore::new();
/// store.insert(Node::new_with_kind("1", NodeKind::Parent));
/// let text = store_to_mermaid(&store, &DiagramConfig::default());
/// assert!(text.starts_with("graph TB\n"));
/// assert!(text.contains("1((1))"));
/// ```
pub fn store_to_mermaid(store: &NodeStore, config: &DiagramConfig) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "graph {}", config.direction.as_keyword());

    // Roots block: parent-kind nodes only, store order.
    out.push_str("    subgraph -\n");
    for node in store.parents() {
        out.push_str("        ");
        push_declaration(&mut out, node);
        out.push('\n');
    }
    out.push_str("    end\n");

    // Relations block: every node, store order; one line per relation, or a
    // standalone declaration so orphans stay visible. Skipped at <= 1 node.
    if store.len() > 1 {
        out.push_str("    subgraph .\n");
        for node in store.iter() {
            if node.relations.is_empty() {
                out.push_str("        ");
                push_declaration(&mut out, node);
                out.push('\n');
            } else {
                for target in &node.relations {
                    out.push_str("        ");
                    push_declaration(&mut out, node);
                    let _ = writeln!(out, "-->{}", identifier_to_safe(target));
                }
            }
        }
        out.push_str("    end\n");
    }

    out
}
