//! Node Store - Core CRUD Operations
//!
//! This module provides the authoritative in-memory node collection:
//!
//! - CRUD operations (insert, find, remove)
//! - Relation management (append_relation, rename with relation rewrite)
//! - Ordered iteration for deterministic diagram output
//!
//! # Ordering
//!
//! The store is a plain ordered list, not a map. Diagram generation walks
//! nodes in insertion order, so two stores built by the same sequence of
//! operations always render identical text.
//!
//! # Permissive relations
//!
//! `append_relation` does not require the relation target to exist in the
//! store. Users wire edges to ids they have not created yet; the generator
//! happily emits edges to undeclared identifiers and the external renderer
//! materializes them as bare nodes.

use crate::models::{Node, NodeKind};

/// Ordered, owning collection of nodes.
///
/// All mutating operations work on `&mut self` and are total: not-found
/// conditions are signaled through return values, never through errors or
/// panics.
///
/// # Examples
///
/// ```rust
/// use flowtree_core::models::{Node, NodeKind};
/// use flowtree_core::services::NodeStore;
///
/// let mut store = NodeStore::new();
/// store.insert(Node::new_with_kind("1", NodeKind::Parent));
/// store.insert(Node::new("2"));
/// store.append_relation("2", "1");
///
/// assert_eq!(store.len(), 2);
/// assert_eq!(store.find_by_id("2").unwrap().relations, vec!["1"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeStore {
    nodes: Vec<Node>,
}

impl NodeStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes currently held.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the store holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate all nodes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Iterate parent-kind nodes in insertion order.
    pub fn parents(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|n| n.is_parent())
    }

    /// Append `node` unless a record with the same id already exists.
    ///
    /// Duplicate insert is a silent no-op that retains the original record,
    /// which makes insert idempotent and keeps ids unique by construction.
    /// Returns `true` when the node was actually appended.
    pub fn insert(&mut self, node: Node) -> bool {
        if self.find_by_id(&node.id).is_some() {
            tracing::debug!("Ignoring duplicate insert for node '{}'", node.id);
            return false;
        }
        tracing::debug!("Inserting node '{}' ({:?})", node.id, node.kind);
        self.nodes.push(node);
        true
    }

    /// Find a node by id; `None` when absent.
    pub fn find_by_id(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    /// Remove the node with the given id, returning it.
    ///
    /// When no node matches, the store is unchanged and `None` is returned.
    /// Relations held by other nodes that point at the removed id are left
    /// in place (the diagram keeps showing the dangling edge).
    pub fn remove_by_id(&mut self, id: &str) -> Option<Node> {
        let index = self.nodes.iter().position(|n| n.id == id)?;
        tracing::debug!("Removing node '{}'", id);
        Some(self.nodes.remove(index))
    }

    /// Append `child_id` to the relations of the node whose id is
    /// `parent_id`.
    ///
    /// The target `child_id` is not required to exist in the store. When no
    /// node has `parent_id` the store is unchanged (silent no-op). Returns
    /// `true` when a node was updated.
    pub fn append_relation(&mut self, parent_id: &str, child_id: &str) -> bool {
        match self.find_by_id_mut(parent_id) {
            Some(node) => {
                node.relations.push(child_id.to_string());
                node.touch();
                tracing::debug!("Appended relation '{}' --> '{}'", parent_id, child_id);
                true
            }
            None => {
                tracing::debug!(
                    "Ignoring relation append: no node with id '{}'",
                    parent_id
                );
                false
            }
        }
    }

    /// Rename the node `old_id` to `new_id`, rewriting relations.
    ///
    /// Composed as remove + insert of a fresh record carrying the new id
    /// (kind and relations carried over, name re-derived), followed by a
    /// rewrite of every other node's relation entries equal to `old_id`.
    ///
    /// No-op when `old_id` is absent, or when `new_id` is already taken
    /// (renaming onto an occupied id would silently drop the node through
    /// the idempotent insert, so the whole operation is refused instead).
    /// Returns `true` when the rename happened.
    pub fn rename(&mut self, old_id: &str, new_id: &str) -> bool {
        if old_id != new_id && self.find_by_id(new_id).is_some() {
            tracing::warn!(
                "Refusing rename '{}' -> '{}': target id already exists",
                old_id,
                new_id
            );
            return false;
        }
        let Some(old) = self.remove_by_id(old_id) else {
            tracing::debug!("Ignoring rename: no node with id '{}'", old_id);
            return false;
        };

        let mut renamed = Node::new_with_kind(new_id, old.kind);
        renamed.relations = old.relations;
        renamed.created_at = old.created_at;
        self.insert(renamed);

        for node in &mut self.nodes {
            let mut rewritten = false;
            for target in &mut node.relations {
                if target.as_str() == old_id {
                    *target = new_id.to_string();
                    rewritten = true;
                }
            }
            if rewritten {
                node.touch();
            }
        }
        tracing::debug!("Renamed node '{}' -> '{}'", old_id, new_id);
        true
    }

    /// Drop every node.
    pub fn clear(&mut self) {
        tracing::debug!("Clearing store ({} nodes)", self.nodes.len());
        self.nodes.clear();
    }

    /// Convenience: build and insert a node in one step.
    ///
    /// The node's name is derived from `id` as usual. Returns `true` when
    /// the node was appended (same idempotence as [`NodeStore::insert`]).
    pub fn create(&mut self, id: &str, kind: NodeKind) -> bool {
        self.insert(Node::new_with_kind(id, kind))
    }
}

#[cfg(test)]
#[path = "node_store_test.rs"]
mod node_store_test;
