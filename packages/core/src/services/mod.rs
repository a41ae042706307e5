//! Business Services
//!
//! This module contains the core logic services:
//!
//! - `NodeStore` - the authoritative in-memory node collection and its
//!   CRUD-style primitives
//! - `DiagramEditor` - application state tying one store, one diagram
//!   config, and the injected input/render boundaries together
//!
//! Services coordinate between user interactions and diagram generation:
//! every editor operation is one store mutation followed by one render.

pub mod editor;
pub mod error;
pub mod node_store;

pub use editor::{DiagramEditor, DiagramRenderer, InputProvider};
pub use error::EditorError;
pub use node_store::NodeStore;
