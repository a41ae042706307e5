//! Mermaid diagram text generation.
//!
//! Pure, total transform from a [`NodeStore`](crate::services::NodeStore)
//! to the flowchart grammar consumed by the external Mermaid renderer. No
//! layout, parsing, or validation happens here; malformed output is the
//! renderer's error to raise.

mod export;

pub use export::{identifier_to_safe, store_to_mermaid, DiagramConfig, Direction};
