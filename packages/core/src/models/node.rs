//! Node Data Structures
//!
//! This module defines the core `Node` struct and its role tag. A node is
//! one vertex of the user-built tree: it carries its own id, a display name
//! derived from that id, a kind (parent vs child), and an ordered list of
//! outgoing relation targets.
//!
//! Relation targets are plain identifiers, not references: a node may point
//! at an id that was never inserted into the store. That looseness is
//! intentional and lets users wire edges to nodes they have not created yet.
//!
//! # Examples
//!
//! ```rust
//! use flowtree_core::models::{Node, NodeKind};
//!
//! let root = Node::new_with_kind("1", NodeKind::Parent);
//! assert_eq!(root.name, "1");
//!
//! let mut child = Node::new("billing_service");
//! child.relations.push("1".to_string());
//! assert_eq!(child.name, "billing service");
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role tag for a node: where it is placed in the rendered layout.
///
/// Parent nodes are emitted in the top roots block of the diagram; every
/// node (parent or child) participates in the relations block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// Root-level node, rendered in the roots block
    Parent,
    /// Leaf/relation-bearing node (the default for new nodes)
    #[default]
    Child,
}

/// Derive the display name for a node id.
///
/// Cosmetic only: the `_` separator becomes a space so multi-word ids read
/// naturally as labels. No other normalization is applied. Hyphens are left
/// alone because `-` is load-bearing in the Mermaid arrow syntax and users
/// expect hyphenated ids to survive round trips unchanged.
pub fn derive_name(id: &str) -> String {
    id.replace('_', " ")
}

/// One vertex of the user-built tree.
///
/// # Fields
///
/// - `id`: unique identifier within a store; doubles as the relation target
///   key other nodes use to point here
/// - `name`: display label, always derived from `id` via [`derive_name`]
/// - `kind`: parent (root block) vs child (relations block only)
/// - `relations`: ordered outbound edge targets; may name ids that do not
///   (yet) exist in the store
/// - `created_at` / `modified_at`: bookkeeping timestamps; `modified_at` is
///   touched whenever relations change or the node is rewritten
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    /// Unique identifier within the store
    pub id: String,

    /// Human-readable label derived from `id`
    pub name: String,

    /// Parent (root block) or child (relations block only)
    #[serde(default)]
    pub kind: NodeKind,

    /// Ordered outbound relation targets (by id)
    #[serde(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub relations: Vec<String>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last modification timestamp
    pub modified_at: DateTime<Utc>,
}

impl Node {
    /// Create a new child node with a name derived from `id`.
    ///
    /// Pure construction: never fails, regardless of the id's content.
    pub fn new(id: impl Into<String>) -> Self {
        Self::new_with_kind(id, NodeKind::Child)
    }

    /// Create a new node of the given kind with a name derived from `id`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use flowtree_core::models::{Node, NodeKind};
    /// let node = Node::new_with_kind("api_gateway", NodeKind::Parent);
    /// assert_eq!(node.id, "api_gateway");
    /// assert_eq!(node.name, "api gateway");
    /// assert_eq!(node.kind, NodeKind::Parent);
    /// assert!(node.relations.is_empty());
    /// ```
    pub fn new_with_kind(id: impl Into<String>, kind: NodeKind) -> Self {
        let id = id.into();
        let now = Utc::now();
        Self {
            name: derive_name(&id),
            id,
            kind,
            relations: Vec::new(),
            created_at: now,
            modified_at: now,
        }
    }

    /// Whether this node is rendered in the roots block.
    pub fn is_parent(&self) -> bool {
        self.kind == NodeKind::Parent
    }

    /// Update the modification timestamp.
    pub(crate) fn touch(&mut self) {
        self.modified_at = Utc::now();
    }
}
