//! Decision tree model: core data structures
//!
//! The tree is constructed once (in code or from TOML) and is read-only for
//! the lifetime of a session. The only operations are child lookup by label
//! and variant discrimination; the variant of every node is decided at
//! construction time.

use std::fmt;

/// Fixed default feature mapping for leaves. Leaf overrides take precedence
/// per feature name; features a leaf does not mention fall back to these.
pub const FEATURE_DEFAULTS: &[(&str, bool)] = &[
    ("auto_installer", false),
    ("auto_updater", false),
    ("in_editor_configuration", false),
];

/// A node in the decision tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Presents a further single-select choice.
    Internal(InternalNode),
    /// Terminal node holding official/feature/instructions data.
    Leaf(LeafNode),
    /// Terminal node that is purely an external reference.
    Link(LinkNode),
}

impl Node {
    pub fn as_internal(&self) -> Option<&InternalNode> {
        match self {
            Node::Internal(n) => Some(n),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, Node::Internal(_))
    }
}

impl From<InternalNode> for Node {
    fn from(n: InternalNode) -> Self {
        Node::Internal(n)
    }
}

impl From<LeafNode> for Node {
    fn from(n: LeafNode) -> Self {
        Node::Leaf(n)
    }
}

impl From<LinkNode> for Node {
    fn from(n: LinkNode) -> Self {
        Node::Link(n)
    }
}

/// A choice point: a prompt plus an ordered label -> child mapping.
///
/// Children keep insertion order because it controls render order. Labels
/// are unique within one node; the tree is trusted input, so this is only
/// checked in debug builds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InternalNode {
    prompt: String,
    children: Vec<(String, Node)>,
}

impl InternalNode {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            children: Vec::new(),
        }
    }

    /// Append a choice. Builder-style, used by in-code trees and the TOML
    /// decoder alike.
    pub fn choice(mut self, label: impl Into<String>, node: impl Into<Node>) -> Self {
        let label = label.into();
        debug_assert!(
            self.child(&label).is_none(),
            "duplicate choice label: {label}"
        );
        self.children.push((label, node.into()));
        self
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn child(&self, label: &str) -> Option<&Node> {
        self.children
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, n)| n)
    }

    /// Choice labels in insertion order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.children.iter().map(|(l, _)| l.as_str())
    }

    pub fn children(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.children.iter().map(|(l, n)| (l.as_str(), n))
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// Instructions payload of a leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallDoc {
    /// Inline markdown, converted to HTML before display.
    Markdown(String),
    /// Pre-formatted markup, passed through untouched.
    Html(String),
    /// Relative path to an external instructions document, fetched on
    /// selection. `*.md` documents are converted, anything else is used
    /// verbatim.
    File(String),
}

/// Terminal node: official-support flag, feature overrides, instructions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafNode {
    official: bool,
    features: Vec<(String, bool)>,
    install: Option<InstallDoc>,
}

impl LeafNode {
    pub fn new(official: bool) -> Self {
        Self {
            official,
            features: Vec::new(),
            install: None,
        }
    }

    /// Override one feature flag. Unknown feature names are kept and
    /// rendered after the defaults, in insertion order.
    pub fn feature(mut self, name: impl Into<String>, enabled: bool) -> Self {
        self.features.push((name.into(), enabled));
        self
    }

    pub fn markdown(mut self, text: impl Into<String>) -> Self {
        self.install = Some(InstallDoc::Markdown(text.into()));
        self
    }

    pub fn html(mut self, markup: impl Into<String>) -> Self {
        self.install = Some(InstallDoc::Html(markup.into()));
        self
    }

    pub fn file(mut self, path: impl Into<String>) -> Self {
        self.install = Some(InstallDoc::File(path.into()));
        self
    }

    pub fn official(&self) -> bool {
        self.official
    }

    /// The explicit override for `name`, if any.
    pub fn feature_override(&self, name: &str) -> Option<bool> {
        self.features
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| *v)
    }

    pub fn features(&self) -> impl Iterator<Item = (&str, bool)> {
        self.features.iter().map(|(n, v)| (n.as_str(), *v))
    }

    /// A leaf without a payload is a configuration defect; callers render a
    /// visible placeholder instead of failing.
    pub fn install(&self) -> Option<&InstallDoc> {
        self.install.as_ref()
    }
}

/// Terminal node rendered as a single actionable external reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkNode {
    pub text: String,
    pub href: String,
}

impl LinkNode {
    pub fn new(text: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            href: href.into(),
        }
    }
}

impl fmt::Display for LinkNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.text, self.href)
    }
}

/// The whole navigation graph. Wrapping the root `InternalNode` directly
/// makes a non-internal root unrepresentable, so the "root is always a
/// choice" invariant holds by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionTree {
    root: InternalNode,
}

impl DecisionTree {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            root: InternalNode::new(prompt),
        }
    }

    pub fn choice(mut self, label: impl Into<String>, node: impl Into<Node>) -> Self {
        self.root = self.root.choice(label, node);
        self
    }

    pub fn root(&self) -> &InternalNode {
        &self.root
    }

    /// Resolve a path by sequential child lookup. Returns `None` if any
    /// prefix misses; the empty path names no node.
    pub fn lookup<S: AsRef<str>>(&self, path: &[S]) -> Option<&Node> {
        let (first, rest) = path.split_first()?;
        let mut node = self.root.child(first.as_ref())?;
        for label in rest {
            node = node.as_internal()?.child(label.as_ref())?;
        }
        Some(node)
    }
}

impl From<InternalNode> for DecisionTree {
    fn from(root: InternalNode) -> Self {
        Self { root }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DecisionTree {
        DecisionTree::new("Which editor are you using?")
            .choice("emacs", LeafNode::new(false).markdown("use eglot"))
            .choice(
                "vim",
                InternalNode::new("Which client?")
                    .choice("coc", LeafNode::new(false).feature("auto_installer", true))
                    .choice("docs", LinkNode::new("docs", "https://example.com")),
            )
    }

    #[test]
    fn given_tree_when_looking_up_nested_path_then_returns_node() {
        let tree = sample();
        assert!(matches!(
            tree.lookup(&["vim", "coc"]),
            Some(Node::Leaf(leaf)) if leaf.feature_override("auto_installer") == Some(true)
        ));
        assert!(matches!(tree.lookup(&["vim", "docs"]), Some(Node::Link(_))));
    }

    #[test]
    fn given_tree_when_looking_up_missing_prefix_then_returns_none() {
        let tree = sample();
        assert!(tree.lookup(&["vim", "ycm"]).is_none());
        assert!(tree.lookup(&["emacs", "deeper"]).is_none());
        assert!(tree.lookup::<&str>(&[]).is_none());
    }

    #[test]
    fn given_internal_node_when_iterating_labels_then_insertion_order_is_kept() {
        let tree = sample();
        let labels: Vec<_> = tree.root().labels().collect();
        assert_eq!(labels, vec!["emacs", "vim"]);
    }
}
