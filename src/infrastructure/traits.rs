//! I/O boundary traits for testability
//!
//! These traits abstract the external collaborators (markup conversion,
//! document fetching, interactive selection, the render surface), allowing
//! the navigation engine to be tested with mock implementations.

use std::io;
use std::path::PathBuf;

use crate::application::view::{DepthView, Panel};

/// Markup conversion abstraction: lightweight markup in, HTML fragment out.
pub trait MarkupConverter: Send + Sync {
    fn convert(&self, source: &str) -> String;
}

/// External instructions document store, addressed by relative path.
pub trait DocumentStore: Send + Sync {
    /// Return the raw text contents of a document.
    fn fetch(&self, path: &str) -> io::Result<String>;
}

/// Item for FZF-style selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionItem {
    /// Display text shown in selector
    pub display: String,
    /// Raw choice key as it appears in the tree
    pub value: String,
}

/// Interactive FZF-style single-select abstraction.
pub trait Selector: Send + Sync {
    /// Present items to user and return selected one.
    /// Returns None if user cancels (Esc/Ctrl-C).
    fn select_one(
        &self,
        items: &[SelectionItem],
        prompt: &str,
    ) -> Result<Option<SelectionItem>, String>;
}

/// Render surface adapter. The engine emits declarative fragments; an
/// implementation reconciles them against its substrate, honoring
/// replace-by-depth, a single active item per depth, and clear-on-deeper-
/// select.
pub trait RenderSurface {
    /// Discard everything rendered at `base_depth` and deeper, render the
    /// given views at consecutive depths from `base_depth`, and replace the
    /// panel region.
    fn apply(&mut self, base_depth: usize, views: &[DepthView], panel: Option<&Panel>);
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// CommonMark converter backed by pulldown-cmark.
#[derive(Debug, Default)]
pub struct PulldownConverter;

impl MarkupConverter for PulldownConverter {
    fn convert(&self, source: &str) -> String {
        use pulldown_cmark::{html, Options, Parser};

        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);

        let parser = Parser::new_ext(source, options);
        let mut out = String::new();
        html::push_html(&mut out, parser);
        out
    }
}

/// CommonMark converter backed by comrak. Interchangeable with
/// [`PulldownConverter`]; which one a host wires in depends on the markup
/// dialect its documents use.
#[derive(Debug, Default)]
pub struct ComrakConverter;

impl MarkupConverter for ComrakConverter {
    fn convert(&self, source: &str) -> String {
        comrak::markdown_to_html(source, &comrak::Options::default())
    }
}

/// Document store reading files beneath a base directory.
#[derive(Debug)]
pub struct FileDocumentStore {
    base_dir: PathBuf,
}

impl FileDocumentStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }
}

impl DocumentStore for FileDocumentStore {
    fn fetch(&self, path: &str) -> io::Result<String> {
        std::fs::read_to_string(self.base_dir.join(path))
    }
}

/// Real selector implementation using skim (FZF-like).
#[derive(Debug, Default)]
pub struct SkimSelector;

impl Selector for SkimSelector {
    fn select_one(
        &self,
        items: &[SelectionItem],
        prompt: &str,
    ) -> Result<Option<SelectionItem>, String> {
        use skim::prelude::*;
        use std::io::Cursor;

        if items.is_empty() {
            return Ok(None);
        }

        // Build input as newline-separated display strings
        let input = items
            .iter()
            .map(|i| i.display.as_str())
            .collect::<Vec<_>>()
            .join("\n");

        let options = SkimOptionsBuilder::default()
            .prompt(Some(prompt))
            .height(Some("50%"))
            .multi(false)
            .build()
            .map_err(|e| format!("failed to build skim options: {e}"))?;

        let item_reader = SkimItemReader::default();
        let items_arc = item_reader.of_bufread(Cursor::new(input));

        let output = Skim::run_with(&options, Some(items_arc));

        match output {
            Some(out) if out.is_abort => Ok(None),
            Some(out) => {
                if let Some(selected) = out.selected_items.first() {
                    let display = selected.output().to_string();
                    // Find the matching item
                    let item = items.iter().find(|i| i.display == display).cloned();
                    Ok(item)
                } else {
                    Ok(None)
                }
            }
            None => Ok(None),
        }
    }
}
