//! Navigation session
//!
//! Converts a stream of discrete selection events into an updated current
//! path and a fully consistent set of render fragments. At most one choice
//! list exists per depth; re-selecting a shallower choice trims everything
//! deeper before re-expanding, so there is no separate "back" operation.

use std::io;
use std::sync::Arc;

use itertools::Itertools;
use tracing::{debug, warn};

use crate::application::error::ApplicationResult;
use crate::application::view::{
    ChecklistEntry, ChoiceEntry, DepthView, FetchRequest, FetchTicket, Panel, PanelBody,
    RenderUpdate,
};
use crate::domain::{
    title_case, DecisionTree, DomainError, InstallDoc, InternalNode, LeafNode, Node,
    FEATURE_DEFAULTS,
};
use crate::infrastructure::traits::MarkupConverter;

/// What became of a fetched document handed to [`WizardSession::complete_fetch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The document was converted (for `*.md`) or used verbatim and now
    /// fills the instructions panel.
    Rendered,
    /// The fetch failed; the panel shows an explicit error state and
    /// navigation is unaffected.
    Failed,
    /// A newer selection superseded the fetch; the result was discarded.
    Stale,
}

/// One user's walk through the decision tree.
///
/// Owns the immutable tree and the only mutable navigation state: the
/// current path, the per-depth view stack derived from it, and the fetch
/// generation counter.
pub struct WizardSession {
    tree: DecisionTree,
    converter: Arc<dyn MarkupConverter>,
    current_path: Vec<String>,
    views: Vec<DepthView>,
    panel: Option<Panel>,
    generation: u64,
}

impl WizardSession {
    /// Start a session at the root prompt (current path empty, depth-0
    /// choice list rendered).
    pub fn new(tree: DecisionTree, converter: Arc<dyn MarkupConverter>) -> Self {
        let root_view = depth_view(tree.root());
        Self {
            tree,
            converter,
            current_path: Vec::new(),
            views: vec![root_view],
            panel: None,
            generation: 0,
        }
    }

    /// Apply one selection event.
    ///
    /// `path` must extend the current path by exactly one label or
    /// re-navigate to any previously rendered level; it is resolved against
    /// the tree before any state changes, so an `InvalidPath` never leaves a
    /// partial render behind. Pointer and keyboard activation both funnel
    /// into this one operation.
    ///
    /// Returns the re-rendered tail: the list whose active entry changed and
    /// everything below it, plus the replaced panel region and, for
    /// by-reference leaves, a fetch request.
    pub fn select<S: AsRef<str>>(&mut self, path: &[S]) -> ApplicationResult<RenderUpdate> {
        let Some(depth) = path.len().checked_sub(1) else {
            return Err(DomainError::InvalidPath {
                path: String::new(),
            }
            .into());
        };
        debug!("select: {}", joined(path));

        let reachable = depth <= self.current_path.len()
            && path[..depth]
                .iter()
                .zip(&self.current_path)
                .all(|(a, b)| a.as_ref() == b);
        if !reachable {
            return Err(DomainError::InvalidPath { path: joined(path) }.into());
        }
        let Some(node) = self.tree.lookup(path) else {
            return Err(DomainError::InvalidPath { path: joined(path) }.into());
        };

        self.generation += 1;
        self.current_path = path.iter().map(|s| s.as_ref().to_string()).collect();

        // Trim back to the selected level, then mark exactly one entry
        // active among its siblings.
        self.views.truncate(depth + 1);
        let selected = path[depth].as_ref();
        for entry in &mut self.views[depth].choices {
            entry.active = entry.key == selected;
        }

        let mut fetch = None;
        match node {
            Node::Internal(internal) => {
                self.views.push(depth_view(internal));
                self.panel = None;
            }
            Node::Leaf(leaf) => {
                let (panel, request) = leaf_panel(leaf, self.converter.as_ref(), self.generation);
                self.panel = Some(panel);
                fetch = request;
            }
            Node::Link(link) => {
                self.panel = Some(Panel::Link {
                    text: link.text.clone(),
                    href: link.href.clone(),
                });
            }
        }

        Ok(RenderUpdate {
            base_depth: depth,
            views: self.views[depth..].to_vec(),
            panel: self.panel.clone(),
            fetch,
        })
    }

    /// Apply the result of a document fetch started by an earlier `select`.
    ///
    /// The panel is replaced atomically. A ticket from a superseded
    /// selection no longer matches the session generation and its result is
    /// discarded, not rendered.
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        result: io::Result<String>,
    ) -> FetchOutcome {
        if ticket.0 != self.generation {
            debug!("discarding stale fetch result (ticket {})", ticket.0);
            return FetchOutcome::Stale;
        }
        let body_slot = match self.panel.as_mut() {
            Some(Panel::Instructions { body, .. }) => body,
            _ => return FetchOutcome::Stale,
        };
        let path = match body_slot {
            PanelBody::Pending { path } => path.clone(),
            _ => return FetchOutcome::Stale,
        };

        match result {
            Ok(text) => {
                let html = if path.ends_with(".md") {
                    self.converter.convert(&text)
                } else {
                    text
                };
                *body_slot = PanelBody::Html(html);
                FetchOutcome::Rendered
            }
            Err(e) => {
                warn!("fetching instructions {path} failed: {e}");
                *body_slot = PanelBody::Failed {
                    path,
                    message: e.to_string(),
                };
                FetchOutcome::Failed
            }
        }
    }

    /// The rendered choice lists, one per depth, shallowest first.
    pub fn views(&self) -> &[DepthView] {
        &self.views
    }

    pub fn panel(&self) -> Option<&Panel> {
        self.panel.as_ref()
    }

    pub fn current_path(&self) -> &[String] {
        &self.current_path
    }

    pub fn tree(&self) -> &DecisionTree {
        &self.tree
    }
}

fn depth_view(node: &InternalNode) -> DepthView {
    DepthView {
        prompt: node.prompt().to_string(),
        choices: node
            .labels()
            .map(|key| ChoiceEntry {
                key: key.to_string(),
                label: title_case(key),
                active: false,
            })
            .collect(),
    }
}

fn leaf_panel(
    leaf: &LeafNode,
    converter: &dyn MarkupConverter,
    generation: u64,
) -> (Panel, Option<FetchRequest>) {
    let checklist = build_checklist(leaf);
    let (body, fetch) = match leaf.install() {
        Some(InstallDoc::Markdown(text)) => (PanelBody::Html(converter.convert(text)), None),
        Some(InstallDoc::Html(markup)) => (PanelBody::Html(markup.clone()), None),
        Some(InstallDoc::File(path)) => (
            PanelBody::Pending { path: path.clone() },
            Some(FetchRequest {
                ticket: FetchTicket(generation),
                path: path.clone(),
            }),
        ),
        None => {
            warn!("leaf has no instructions payload");
            (PanelBody::Missing, None)
        }
    };
    (Panel::Instructions { checklist, body }, fetch)
}

/// The official flag first, then the fixed defaults with per-feature
/// overrides applied, then overrides naming unknown features in their
/// insertion order.
fn build_checklist(leaf: &LeafNode) -> Vec<ChecklistEntry> {
    let mut entries = vec![checklist_entry("official", leaf.official())];
    for (name, default) in FEATURE_DEFAULTS {
        entries.push(checklist_entry(
            name,
            leaf.feature_override(name).unwrap_or(*default),
        ));
    }
    for (name, enabled) in leaf.features() {
        if FEATURE_DEFAULTS.iter().all(|(known, _)| *known != name) {
            entries.push(checklist_entry(name, enabled));
        }
    }
    entries
}

fn checklist_entry(name: &str, enabled: bool) -> ChecklistEntry {
    ChecklistEntry {
        name: name.to_string(),
        label: title_case(name),
        enabled,
    }
}

fn joined<S: AsRef<str>>(path: &[S]) -> String {
    path.iter().map(AsRef::as_ref).join(".")
}
