//! Flowtree Interactive Editor Binary
//!
//! Terminal front-end for `flowtree-core`: a command loop drives the editor
//! through its own input-provider seam, and the generated Mermaid text is
//! rendered to stdout or to a `.mmd` file.
//!
//! # Usage
//!
//! ```bash
//! # Render diagrams to stdout after every command
//! cargo run --bin flowtree-editor
//!
//! # Write diagrams to flowchart.mmd instead
//! cargo run --bin flowtree-editor -- --out .
//! ```
//!
//! # Commands
//!
//! - `add` - prompt for a parent id, hang a new numbered node under it
//! - `root` - prompt for an id, insert it as a root node
//! - `connect` - prompt for source and target ids, add the edge
//! - `rename` - prompt for old and new ids
//! - `remove` - prompt for an id to delete
//! - `dir <tb|bt|lr|rl>` - change layout direction
//! - `clear` - reset to the seed diagram
//! - `show` - re-render without mutating
//! - `save <path>` - write the current diagram text to a file
//! - `quit` - exit
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Logging level (e.g., "info", "debug", "trace")

use std::env;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use flowtree_core::services::{DiagramEditor, DiagramRenderer, EditorError, InputProvider};
use flowtree_core::Direction;

/// Default render target name, mirroring the element id the web
/// prototypes rendered into.
const RENDER_TARGET: &str = "flowchart";

/// Prompt-driven input over stdin lines. EOF reads as a cancelled prompt.
struct StdinInput {
    lines: io::Lines<io::StdinLock<'static>>,
}

impl StdinInput {
    fn new() -> Self {
        Self {
            lines: io::stdin().lock().lines(),
        }
    }
}

impl InputProvider for StdinInput {
    fn prompt(&mut self, message: &str) -> Result<Option<String>, EditorError> {
        print!("{} ", message);
        io::stdout().flush()?;
        match self.lines.next() {
            Some(line) => Ok(Some(line?)),
            None => Ok(None),
        }
    }
}

/// Renderer printing the diagram text to stdout.
struct StdoutRenderer;

impl DiagramRenderer for StdoutRenderer {
    fn render(&mut self, text: &str, target: &str) -> Result<(), EditorError> {
        println!("--- {} ---", target);
        print!("{}", text);
        println!("-----------");
        Ok(())
    }
}

/// Renderer writing `<target>.mmd` into a base directory.
struct MmdFileRenderer {
    base_dir: PathBuf,
}

impl MmdFileRenderer {
    fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }
}

impl DiagramRenderer for MmdFileRenderer {
    fn render(&mut self, text: &str, target: &str) -> Result<(), EditorError> {
        let path = self.base_dir.join(format!("{}.mmd", target));
        std::fs::write(&path, text)?;
        tracing::debug!("Wrote diagram to {}", path.display());
        Ok(())
    }
}

/// Either render flavor, picked from the command line.
enum Renderer {
    Stdout(StdoutRenderer),
    File(MmdFileRenderer),
}

impl DiagramRenderer for Renderer {
    fn render(&mut self, text: &str, target: &str) -> Result<(), EditorError> {
        match self {
            Renderer::Stdout(r) => r.render(text, target),
            Renderer::File(r) => r.render(text, target),
        }
    }
}

fn save_diagram(path: &str, text: &str) -> Result<(), EditorError> {
    std::fs::write(Path::new(path), text)?;
    Ok(())
}

fn print_help() {
    println!("commands: add, root, connect, rename, remove, dir <tb|bt|lr|rl>,");
    println!("          clear, show, save <path>, help, quit");
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = env::args().collect();
    let renderer = match args.iter().position(|a| a == "--out") {
        Some(i) => {
            let dir = args
                .get(i + 1)
                .ok_or_else(|| anyhow::anyhow!("--out requires a directory"))?;
            Renderer::File(MmdFileRenderer::new(dir))
        }
        None => Renderer::Stdout(StdoutRenderer),
    };

    tracing::info!("Flowtree interactive editor");
    print_help();

    let mut editor = DiagramEditor::new(StdinInput::new(), renderer, RENDER_TARGET);
    editor.refresh()?;

    loop {
        let Some(line) = editor.input_mut().prompt("flowtree>")? else {
            break;
        };
        let mut parts = line.split_whitespace();
        let command = parts.next().unwrap_or("");
        let argument = parts.next();

        match command {
            "" => {}
            "add" => {
                if editor.add_node()?.is_none() {
                    println!("cancelled");
                }
            }
            "root" => {
                if editor.add_root()?.is_none() {
                    println!("cancelled");
                }
            }
            "connect" => {
                if !editor.connect()? {
                    println!("cancelled");
                }
            }
            "rename" => {
                if !editor.rename_node()? {
                    println!("nothing renamed");
                }
            }
            "remove" => {
                if !editor.remove_node()? {
                    println!("nothing removed");
                }
            }
            "dir" => match argument.and_then(Direction::parse) {
                Some(direction) => editor.set_direction(direction)?,
                None => println!("usage: dir <tb|bt|lr|rl>"),
            },
            "clear" => editor.clear()?,
            "show" => editor.refresh()?,
            "save" => match argument {
                Some(path) => {
                    save_diagram(path, editor.diagram())?;
                    println!("saved {}", path);
                }
                None => println!("usage: save <path>"),
            },
            "help" => print_help(),
            "quit" | "exit" => break,
            other => println!("unknown command '{}' (try 'help')", other),
        }
    }

    Ok(())
}
