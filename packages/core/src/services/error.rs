//! Service Layer Error Types
//!
//! The store and the generator are total: not-found lookups return `None`,
//! duplicate inserts and relation appends to missing parents are silent
//! no-ops. Errors only exist at the injected boundaries, where an input
//! provider or an external renderer can genuinely fail.

use thiserror::Error;

/// Editor boundary errors
///
/// Raised by input providers and diagram renderers; the core's own data
/// operations never produce these.
#[derive(Error, Debug)]
pub enum EditorError {
    /// The external renderer rejected the diagram text
    #[error("Render failed: {context}")]
    RenderFailed { context: String },

    /// The input provider could not deliver a prompt response
    #[error("Input failed: {context}")]
    InputFailed { context: String },

    /// Underlying I/O failure (stdin, diagram file writes)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl EditorError {
    /// Create a render failed error
    pub fn render_failed(context: impl Into<String>) -> Self {
        Self::RenderFailed {
            context: context.into(),
        }
    }

    /// Create an input failed error
    pub fn input_failed(context: impl Into<String>) -> Self {
        Self::InputFailed {
            context: context.into(),
        }
    }
}
