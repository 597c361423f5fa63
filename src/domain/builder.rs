//! Tree decoding from TOML documents.
//!
//! Variant discrimination happens here, at construction time: a table with
//! a `prompt` key is a choice point, one with `href` is a link, one with
//! `official` is a leaf. Document order is preserved and becomes render
//! order.

use toml::{Table, Value};

use crate::domain::error::{DomainError, TreeResult};
use crate::domain::node::{DecisionTree, InternalNode, LeafNode, LinkNode, Node};

/// Decode a decision tree from a TOML document.
///
/// The top level must carry a `prompt` key; every other top-level table is a
/// choice of the root. Example:
///
/// ```toml
/// prompt = "Which editor are you using?"
///
/// ["Visual Studio Code"]
/// official = true
/// features = { auto_updater = true }
/// install.text = "Install the extension."
/// ```
pub fn from_toml(text: &str) -> TreeResult<DecisionTree> {
    let table: Table = text.parse().map_err(|e: toml::de::Error| {
        DomainError::MalformedNode {
            label: "(document)".to_string(),
            message: e.message().to_string(),
        }
    })?;

    let prompt = expect_str(&table, "prompt", "(document)")?;
    let mut root = InternalNode::new(prompt);
    for (label, value) in &table {
        if label == "prompt" {
            continue;
        }
        root = root.choice(label, decode_node(label, value)?);
    }
    Ok(root.into())
}

fn decode_node(label: &str, value: &Value) -> TreeResult<Node> {
    let table = value.as_table().ok_or_else(|| malformed(label, "expected a table"))?;

    if table.contains_key("prompt") {
        decode_internal(label, table).map(Node::Internal)
    } else if table.contains_key("href") {
        decode_link(label, table).map(Node::Link)
    } else if table.contains_key("official") {
        decode_leaf(label, table).map(Node::Leaf)
    } else {
        Err(malformed(
            label,
            "node is neither a choice (prompt), a leaf (official), nor a link (href)",
        ))
    }
}

fn decode_internal(label: &str, table: &Table) -> TreeResult<InternalNode> {
    let mut node = InternalNode::new(expect_str(table, "prompt", label)?);
    for (child_label, value) in table {
        if child_label == "prompt" {
            continue;
        }
        node = node.choice(child_label, decode_node(child_label, value)?);
    }
    if node.is_empty() {
        return Err(malformed(label, "choice node has no children"));
    }
    Ok(node)
}

fn decode_link(label: &str, table: &Table) -> TreeResult<LinkNode> {
    let href = expect_str(table, "href", label)?;
    let text = match table.get("text") {
        Some(v) => v
            .as_str()
            .ok_or_else(|| malformed(label, "`text` must be a string"))?,
        None => label,
    };
    Ok(LinkNode::new(text, href))
}

fn decode_leaf(label: &str, table: &Table) -> TreeResult<LeafNode> {
    let official = table
        .get("official")
        .and_then(Value::as_bool)
        .ok_or_else(|| malformed(label, "`official` must be a boolean"))?;

    let mut leaf = LeafNode::new(official);

    if let Some(features) = table.get("features") {
        let features = features
            .as_table()
            .ok_or_else(|| malformed(label, "`features` must be a table of booleans"))?;
        for (name, value) in features {
            let enabled = value
                .as_bool()
                .ok_or_else(|| malformed(label, "`features` must be a table of booleans"))?;
            leaf = leaf.feature(name, enabled);
        }
    }

    // A leaf without any install key is tolerated here; the session renders
    // it as a visible placeholder rather than failing the whole tree.
    if let Some(install) = table.get("install") {
        let install = install
            .as_table()
            .ok_or_else(|| malformed(label, "`install` must be a table"))?;
        if let Some(text) = install.get("text") {
            let text = text
                .as_str()
                .ok_or_else(|| malformed(label, "`install.text` must be a string"))?;
            leaf = leaf.markdown(text);
        } else if let Some(html) = install.get("html") {
            let html = html
                .as_str()
                .ok_or_else(|| malformed(label, "`install.html` must be a string"))?;
            leaf = leaf.html(html);
        } else if let Some(file) = install.get("file") {
            let file = file
                .as_str()
                .ok_or_else(|| malformed(label, "`install.file` must be a string"))?;
            leaf = leaf.file(file);
        } else {
            return Err(malformed(
                label,
                "`install` needs one of `text`, `html`, `file`",
            ));
        }
    }

    Ok(leaf)
}

fn expect_str<'t>(table: &'t Table, key: &str, label: &str) -> TreeResult<&'t str> {
    table
        .get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| malformed(label, &format!("`{key}` must be a string")))
}

fn malformed(label: &str, message: &str) -> DomainError {
    DomainError::MalformedNode {
        label: label.to_string(),
        message: message.to_string(),
    }
}
