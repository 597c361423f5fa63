//! Declarative render fragments emitted by the navigation session.
//!
//! The session never touches a UI substrate directly; it produces these
//! plain values and a render surface adapter reconciles them against
//! whatever substrate is in use (terminal, DOM, test recorder).

/// One selectable entry in a choice list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceEntry {
    /// Raw key as it appears in the tree; selection input uses this.
    pub key: String,
    /// Human-readable display label (title-cased raw key).
    pub label: String,
    /// At most one entry per depth is active.
    pub active: bool,
}

/// The rendered fragment set for one nesting depth: a prompt header plus an
/// ordered choice list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepthView {
    pub prompt: String,
    pub choices: Vec<ChoiceEntry>,
}

impl DepthView {
    pub fn active(&self) -> Option<&ChoiceEntry> {
        self.choices.iter().find(|c| c.active)
    }
}

/// One line of the feature checklist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistEntry {
    pub name: String,
    pub label: String,
    pub enabled: bool,
}

/// Body of the instructions panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelBody {
    /// Converted (or pass-through) HTML fragment, ready for display.
    Html(String),
    /// A document fetch is in flight; the panel keeps this state until the
    /// matching `complete_fetch` arrives.
    Pending { path: String },
    /// The fetch failed; an explicit error state local to the panel.
    Failed { path: String, message: String },
    /// The leaf carries no instructions payload, a configuration defect
    /// surfaced as a visible placeholder.
    Missing,
}

/// The terminal panel rendered for a leaf or link node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Panel {
    Instructions {
        checklist: Vec<ChecklistEntry>,
        body: PanelBody,
    },
    Link {
        text: String,
        href: String,
    },
}

/// Opaque, generation-stamped token tying an in-flight document fetch to the
/// selection that started it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(pub(crate) u64);

/// Issued when a selection lands on a by-reference leaf. The host performs
/// the fetch and hands the result back through `complete_fetch`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub ticket: FetchTicket,
    pub path: String,
}

/// The re-rendered tail after a selection: everything at `base_depth` and
/// deeper is discarded and replaced by `views`; the panel region is always
/// replaced wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderUpdate {
    pub base_depth: usize,
    pub views: Vec<DepthView>,
    pub panel: Option<Panel>,
    pub fetch: Option<FetchRequest>,
}
