//! Flowtree Core
//!
//! This crate provides the data model, node store, and diagram generation
//! for the Flowtree interactive diagram editor.
//!
//! # Architecture
//!
//! - **In-Memory Store**: a single ordered [`NodeStore`] is the authority;
//!   there is no database layer and no persistence of the store itself
//! - **Pure Generation**: the Mermaid exporter is a total function over the
//!   store; all layout and parsing is owned by the external renderer
//! - **Injected Boundaries**: user input and diagram rendering enter through
//!   the [`InputProvider`] and [`DiagramRenderer`] traits, keeping the core
//!   headless and testable
//!
//! # Modules
//!
//! - [`models`] - Data structures (Node, NodeKind)
//! - [`services`] - Node store and editor orchestration
//! - [`mermaid`] - Diagram text generation

pub mod mermaid;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use mermaid::{store_to_mermaid, DiagramConfig, Direction};
pub use models::{Node, NodeKind};
pub use services::{DiagramEditor, DiagramRenderer, EditorError, InputProvider, NodeStore};
