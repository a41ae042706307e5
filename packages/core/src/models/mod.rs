//! Data Models
//!
//! This module contains the core data structures used throughout Flowtree:
//!
//! - `Node` - a vertex in the user-built tree (identity, label, role,
//!   outgoing relations)
//! - `NodeKind` - role tag distinguishing root-level "parent" nodes from
//!   relation-bearing "child" nodes

mod node;

pub use node::{derive_name, Node, NodeKind};
