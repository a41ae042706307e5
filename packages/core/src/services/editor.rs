//! Diagram Editor - Application State and Orchestration
//!
//! This module replaces the page-lifetime globals of earlier prototypes with
//! an explicit state object: one [`NodeStore`], one [`DiagramConfig`], the
//! monotonic id counter, and the two injected boundaries (input provider and
//! diagram renderer).
//!
//! Every user-facing operation is one store mutation followed by one render.
//! In this single-threaded core that pair is naturally atomic; a port to a
//! multi-threaded host must wrap each operation in a lock or single-writer
//! queue to keep the same effective atomicity.

use crate::mermaid::{store_to_mermaid, DiagramConfig, Direction};
use crate::models::{Node, NodeKind};
use crate::services::error::EditorError;
use crate::services::node_store::NodeStore;

/// Source of user-supplied answers to editor prompts.
///
/// `Ok(None)` models a cancelled prompt (the original UI's dismissed
/// `prompt()` dialog); the operation in progress becomes a no-op.
pub trait InputProvider {
    fn prompt(&mut self, message: &str) -> Result<Option<String>, EditorError>;
}

/// External render boundary.
///
/// Receives the generated diagram text and the name of the element/file the
/// host should render into. Grammar errors in the text are this side's to
/// surface, not the generator's.
pub trait DiagramRenderer {
    fn render(&mut self, text: &str, target: &str) -> Result<(), EditorError>;
}

/// Id of the seed root node every fresh editor starts from.
const SEED_ROOT_ID: &str = "1";

/// Interactive editor state: store, config, counter, and boundaries.
///
/// # Examples
///
/// ```rust
/// use flowtree_core::services::{DiagramEditor, DiagramRenderer, InputProvider};
/// use flowtree_core::services::EditorError;
///
/// struct OneAnswer(Option<String>);
/// impl InputProvider for OneAnswer {
///     fn prompt(&mut self, _m: &str) -> Result<Option<String>, EditorError> {
///         Ok(self.0.take())
///     }
/// }
///
/// struct Discard;
/// impl DiagramRenderer for Discard {
///     fn render(&mut self, _t: &str, _g: &str) -> Result<(), EditorError> {
///         Ok(())
///     }
/// }
///
/// let mut editor = DiagramEditor::new(OneAnswer(Some("1".into())), Discard, "out");
/// editor.add_node().unwrap();
/// assert_eq!(editor.store().len(), 2);
/// ```
pub struct DiagramEditor<I, R> {
    store: NodeStore,
    config: DiagramConfig,
    input: I,
    renderer: R,
    target: String,
    counter: u64,
    last_diagram: String,
}

impl<I: InputProvider, R: DiagramRenderer> DiagramEditor<I, R> {
    /// Create an editor seeded with the single root node `1`.
    pub fn new(input: I, renderer: R, target: impl Into<String>) -> Self {
        Self::with_config(input, renderer, target, DiagramConfig::default())
    }

    /// Create an editor with an explicit diagram config.
    pub fn with_config(
        input: I,
        renderer: R,
        target: impl Into<String>,
        config: DiagramConfig,
    ) -> Self {
        let mut editor = Self {
            store: Self::seed_store(),
            config,
            input,
            renderer,
            target: target.into(),
            counter: 1,
            last_diagram: String::new(),
        };
        editor.last_diagram = store_to_mermaid(&editor.store, &editor.config);
        editor
    }

    fn seed_store() -> NodeStore {
        let mut store = NodeStore::new();
        store.insert(Node::new_with_kind(SEED_ROOT_ID, NodeKind::Parent));
        store
    }

    /// The current store (read-only; mutations go through editor operations).
    pub fn store(&self) -> &NodeStore {
        &self.store
    }

    /// The most recently generated diagram text.
    pub fn diagram(&self) -> &str {
        &self.last_diagram
    }

    /// The injected input provider, for hosts that drive their own command
    /// loop over the same input channel the prompts use.
    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    /// Insert `id` as a child record when no node carries it yet, so a
    /// relation from `id` always has a home.
    fn ensure_node(&mut self, id: &str) {
        if self.store.find_by_id(id).is_none() {
            self.store.insert(Node::new(id));
        }
    }

    /// Prompt for a parent id and hang a freshly numbered child under it.
    ///
    /// The new node's id comes from the monotonic counter. A parent id that
    /// names no existing node is materialized as a child record first, so
    /// the edge always lands. Cancelled or empty prompt: no-op, no render.
    /// Returns the new node's id, or `None` when cancelled.
    pub fn add_node(&mut self) -> Result<Option<String>, EditorError> {
        let Some(parent_id) = self.prompt_id("Parent node id:")? else {
            return Ok(None);
        };
        self.counter += 1;
        let id = self.counter.to_string();
        tracing::info!("Adding node '{}' under '{}'", id, parent_id);

        self.ensure_node(&parent_id);
        self.store.insert(Node::new(id.clone()));
        self.store.append_relation(&parent_id, &id);
        self.refresh()?;
        Ok(Some(id))
    }

    /// Prompt for an id and insert it as a root (parent-kind) node.
    ///
    /// Duplicate ids are silently retained as-is per store semantics.
    pub fn add_root(&mut self) -> Result<Option<String>, EditorError> {
        let Some(id) = self.prompt_id("New root id:")? else {
            return Ok(None);
        };
        tracing::info!("Adding root '{}'", id);
        self.store.create(&id, NodeKind::Parent);
        self.refresh()?;
        Ok(Some(id))
    }

    /// Prompt for source and target ids and append the relation.
    ///
    /// A missing source node is materialized first; the target may name a
    /// node that was never inserted.
    pub fn connect(&mut self) -> Result<bool, EditorError> {
        let Some(from) = self.prompt_id("Edge source id:")? else {
            return Ok(false);
        };
        let Some(to) = self.prompt_id("Edge target id:")? else {
            return Ok(false);
        };
        tracing::info!("Connecting '{}' --> '{}'", from, to);
        self.ensure_node(&from);
        self.store.append_relation(&from, &to);
        self.refresh()?;
        Ok(true)
    }

    /// Prompt for old and new ids and rename the node, rewriting relations.
    ///
    /// Returns whether the rename happened (a missing old id or an occupied
    /// new id leaves the store untouched and skips the render).
    pub fn rename_node(&mut self) -> Result<bool, EditorError> {
        let Some(old_id) = self.prompt_id("Node id to rename:")? else {
            return Ok(false);
        };
        let Some(new_id) = self.prompt_id("New id:")? else {
            return Ok(false);
        };
        if !self.store.rename(&old_id, &new_id) {
            return Ok(false);
        }
        tracing::info!("Renamed '{}' -> '{}'", old_id, new_id);
        self.refresh()?;
        Ok(true)
    }

    /// Prompt for an id and remove the matching node.
    ///
    /// Returns whether a node was removed; a miss skips the render.
    pub fn remove_node(&mut self) -> Result<bool, EditorError> {
        let Some(id) = self.prompt_id("Node id to remove:")? else {
            return Ok(false);
        };
        if self.store.remove_by_id(&id).is_none() {
            return Ok(false);
        }
        tracing::info!("Removed node '{}'", id);
        self.refresh()?;
        Ok(true)
    }

    /// Reset to the seed state (single root `1`, counter 1) and re-render.
    pub fn clear(&mut self) -> Result<(), EditorError> {
        tracing::info!("Clearing editor state");
        self.store = Self::seed_store();
        self.counter = 1;
        self.refresh()
    }

    /// Change the layout direction and re-render.
    pub fn set_direction(&mut self, direction: Direction) -> Result<(), EditorError> {
        self.config.direction = direction;
        self.refresh()
    }

    /// Regenerate the diagram text and hand it to the renderer.
    pub fn refresh(&mut self) -> Result<(), EditorError> {
        self.last_diagram = store_to_mermaid(&self.store, &self.config);
        self.renderer.render(&self.last_diagram, &self.target)
    }

    /// Prompt and normalize: trimmed, empty answers count as cancelled.
    fn prompt_id(&mut self, message: &str) -> Result<Option<String>, EditorError> {
        match self.input.prompt(message)? {
            Some(answer) => {
                let answer = answer.trim();
                if answer.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(answer.to_string()))
                }
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    /// Input provider fed from a fixed script; `None` entries model a
    /// cancelled prompt.
    struct ScriptedInput {
        answers: VecDeque<Option<String>>,
    }

    impl ScriptedInput {
        fn new(answers: &[Option<&str>]) -> Self {
            Self {
                answers: answers.iter().map(|a| a.map(str::to_string)).collect(),
            }
        }
    }

    impl InputProvider for ScriptedInput {
        fn prompt(&mut self, _message: &str) -> Result<Option<String>, EditorError> {
            Ok(self.answers.pop_front().flatten())
        }
    }

    /// Renderer recording every rendered text behind a shared handle.
    #[derive(Clone, Default)]
    struct CollectingRenderer {
        rendered: Rc<RefCell<Vec<String>>>,
    }

    impl CollectingRenderer {
        fn count(&self) -> usize {
            self.rendered.borrow().len()
        }
    }

    impl DiagramRenderer for CollectingRenderer {
        fn render(&mut self, text: &str, _target: &str) -> Result<(), EditorError> {
            self.rendered.borrow_mut().push(text.to_string());
            Ok(())
        }
    }

    fn editor(
        answers: &[Option<&str>],
        renderer: &CollectingRenderer,
    ) -> DiagramEditor<ScriptedInput, CollectingRenderer> {
        DiagramEditor::new(ScriptedInput::new(answers), renderer.clone(), "diagram")
    }

    #[test]
    fn fresh_editor_holds_the_seed_root() {
        let renderer = CollectingRenderer::default();
        let editor = editor(&[], &renderer);

        assert_eq!(editor.store().len(), 1);
        assert!(editor.store().find_by_id("1").unwrap().is_parent());
        assert!(editor.diagram().starts_with("graph TB\n"));
    }

    #[test]
    fn add_node_mints_counter_id_and_wires_edge() {
        let renderer = CollectingRenderer::default();
        let mut editor = editor(&[Some("1")], &renderer);

        let added = editor.add_node().unwrap();
        assert_eq!(added.as_deref(), Some("2"));
        assert_eq!(editor.store().find_by_id("1").unwrap().relations, vec!["2"]);
        assert!(editor.diagram().contains("1((1))-->2"));
        assert_eq!(renderer.count(), 1);
    }

    #[test]
    fn add_node_materializes_unknown_parent() {
        let renderer = CollectingRenderer::default();
        let mut editor = editor(&[Some("elsewhere")], &renderer);

        editor.add_node().unwrap();
        let parent = editor.store().find_by_id("elsewhere").unwrap();
        assert_eq!(parent.kind, NodeKind::Child);
        assert_eq!(parent.relations, vec!["2"]);
    }

    #[test]
    fn cancelled_prompt_is_a_noop_without_render() {
        let renderer = CollectingRenderer::default();
        let mut editor = editor(&[None], &renderer);

        assert!(editor.add_node().unwrap().is_none());
        assert_eq!(editor.store().len(), 1);
        assert_eq!(renderer.count(), 0);
    }

    #[test]
    fn blank_answer_counts_as_cancelled() {
        let renderer = CollectingRenderer::default();
        let mut editor = editor(&[Some("   ")], &renderer);

        assert!(editor.add_node().unwrap().is_none());
        assert_eq!(editor.store().len(), 1);
    }

    #[test]
    fn clear_resets_to_seed_and_restarts_counter() {
        let renderer = CollectingRenderer::default();
        let mut editor = editor(&[Some("1"), Some("1"), Some("1")], &renderer);
        editor.add_node().unwrap();
        editor.add_node().unwrap();
        assert_eq!(editor.store().len(), 3);

        editor.clear().unwrap();
        assert_eq!(editor.store().len(), 1);
        assert!(!editor.diagram().contains("subgraph ."));

        // Counter restarts: the next node is "2" again.
        assert_eq!(editor.add_node().unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn set_direction_changes_the_header() {
        let renderer = CollectingRenderer::default();
        let mut editor = editor(&[], &renderer);

        editor.set_direction(Direction::RightLeft).unwrap();
        assert!(editor.diagram().starts_with("graph RL\n"));
    }

    #[test]
    fn failed_render_propagates() {
        struct FailingRenderer;
        impl DiagramRenderer for FailingRenderer {
            fn render(&mut self, _t: &str, _g: &str) -> Result<(), EditorError> {
                Err(EditorError::render_failed("syntax error near 'end'"))
            }
        }

        let mut editor = DiagramEditor::new(
            ScriptedInput::new(&[Some("1")]),
            FailingRenderer,
            "diagram",
        );
        let err = editor.add_node().unwrap_err();
        assert!(matches!(err, EditorError::RenderFailed { .. }));
    }
}
