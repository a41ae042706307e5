//! End-to-end editor flows: scripted prompts in, rendered diagram text out.

use flowtree_core::services::{DiagramEditor, DiagramRenderer, EditorError, InputProvider};
use flowtree_core::{DiagramConfig, Direction, NodeKind};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Input provider fed from a fixed script of prompt answers.
struct Script(VecDeque<Option<String>>);

impl Script {
    fn new(answers: &[Option<&str>]) -> Self {
        Self(answers.iter().map(|a| a.map(str::to_string)).collect())
    }
}

impl InputProvider for Script {
    fn prompt(&mut self, _message: &str) -> Result<Option<String>, EditorError> {
        Ok(self.0.pop_front().flatten())
    }
}

/// Renderer recording every (text, target) pair it receives.
#[derive(Clone, Default)]
struct Recorder(Rc<RefCell<Vec<(String, String)>>>);

impl DiagramRenderer for Recorder {
    fn render(&mut self, text: &str, target: &str) -> Result<(), EditorError> {
        self.0.borrow_mut().push((text.to_string(), target.to_string()));
        Ok(())
    }
}

impl Recorder {
    fn last_text(&self) -> String {
        self.0.borrow().last().expect("at least one render").0.clone()
    }

    fn count(&self) -> usize {
        self.0.borrow().len()
    }
}

#[test]
fn build_small_tree_then_render() {
    let recorder = Recorder::default();
    let script = Script::new(&[
        Some("1"), // add: child 2 under root 1
        Some("1"), // add: child 3 under root 1
        Some("2"), // add: child 4 under 2
    ]);
    let mut editor = DiagramEditor::new(script, recorder.clone(), "mermaid-diagram");

    editor.add_node().unwrap();
    editor.add_node().unwrap();
    editor.add_node().unwrap();

    assert_eq!(recorder.count(), 3);
    let text = recorder.last_text();
    assert!(text.starts_with("graph TB\n"));
    assert!(text.contains("1((1))-->2"));
    assert!(text.contains("1((1))-->3"));
    assert!(text.contains("2((2))-->4"));
    assert_eq!(editor.store().len(), 4);

    // Every render targets the configured element name.
    assert!(recorder
        .0
        .borrow()
        .iter()
        .all(|(_, target)| target == "mermaid-diagram"));
}

#[test]
fn rename_flow_rewrites_diagram_edges() {
    let recorder = Recorder::default();
    let script = Script::new(&[
        Some("1"),        // add: child 2 under 1
        Some("1"),        // rename: old id
        Some("backbone"), // rename: new id
    ]);
    let mut editor = DiagramEditor::new(script, recorder.clone(), "out");

    editor.add_node().unwrap();
    assert!(editor.rename_node().unwrap());

    let text = recorder.last_text();
    assert!(text.contains("backbone((backbone))-->2"));
    assert!(!text.contains("1((1))"));
    assert!(editor.store().find_by_id("backbone").unwrap().is_parent());
}

#[test]
fn remove_flow_drops_node_but_keeps_dangling_edges() {
    let recorder = Recorder::default();
    let script = Script::new(&[
        Some("1"), // add: child 2 under 1
        Some("1"), // add: child 3 under 1
        Some("2"), // remove node 2
    ]);
    let mut editor = DiagramEditor::new(script, recorder.clone(), "out");

    editor.add_node().unwrap();
    editor.add_node().unwrap();
    assert!(editor.remove_node().unwrap());

    let text = recorder.last_text();
    // Node 2 is gone as a record, but root 1 still points at it.
    assert!(editor.store().find_by_id("2").is_none());
    assert!(text.contains("1((1))-->2"));
    assert!(!text.contains("2((2))"));
}

#[test]
fn connect_and_root_flow_builds_forest() {
    let recorder = Recorder::default();
    let script = Script::new(&[
        Some("backend"),  // root: second tree root
        Some("backend"),  // connect: source
        Some("1"),        // connect: target
    ]);
    let mut editor = DiagramEditor::new(script, recorder.clone(), "out");

    editor.add_root().unwrap();
    assert!(editor.connect().unwrap());

    let text = recorder.last_text();
    // Both roots sit in the roots block.
    let roots_block: String = text
        .lines()
        .skip(1)
        .take_while(|l| !l.trim_start().starts_with("end"))
        .collect();
    assert!(roots_block.contains("1((1))"));
    assert!(roots_block.contains("backend((backend))"));
    assert!(text.contains("backend((backend))-->1"));
}

#[test]
fn clear_returns_to_seed_diagram() {
    let recorder = Recorder::default();
    let script = Script::new(&[Some("1"), Some("1")]);
    let mut editor = DiagramEditor::new(script, recorder.clone(), "out");

    editor.add_node().unwrap();
    editor.add_node().unwrap();
    editor.clear().unwrap();

    let text = recorder.last_text();
    assert_eq!(text, "graph TB\n    subgraph -\n        1((1))\n    end\n");
    assert_eq!(editor.store().len(), 1);
}

#[test]
fn direction_config_flows_through_to_header() {
    let recorder = Recorder::default();
    let config = DiagramConfig {
        direction: Direction::LeftRight,
    };
    let mut editor =
        DiagramEditor::with_config(Script::new(&[Some("1")]), recorder.clone(), "out", config);

    editor.add_node().unwrap();
    assert!(recorder.last_text().starts_with("graph LR\n"));
}

#[test]
fn exhausted_script_cancels_cleanly() {
    let recorder = Recorder::default();
    let mut editor = DiagramEditor::new(Script::new(&[]), recorder.clone(), "out");

    assert!(editor.add_node().unwrap().is_none());
    assert!(!editor.connect().unwrap());
    assert_eq!(recorder.count(), 0);
    assert_eq!(editor.store().len(), 1);
    assert_eq!(
        editor.store().find_by_id("1").map(|n| n.kind),
        Some(NodeKind::Parent)
    );
}
