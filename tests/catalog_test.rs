//! Tests for the built-in editor catalog, navigated through a real session

use std::sync::Arc;

use lswizard::application::{Panel, PanelBody, WizardSession};
use lswizard::catalog;
use lswizard::domain::{DecisionTree, Node};
use lswizard::infrastructure::traits::PulldownConverter;
use lswizard::util::testing;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

#[test]
fn given_catalog_when_built_then_root_prompt_and_order_match() {
    let tree = catalog::default_tree();

    assert_eq!(tree.root().prompt(), "Which editor are you using?");
    let labels: Vec<_> = tree.root().labels().collect();
    assert_eq!(
        labels,
        vec![
            "Visual Studio Code",
            "Sublime Text",
            "Neovim / Vim8",
            "Emacs"
        ]
    );
}

#[test]
fn given_catalog_when_looking_up_vscode_then_official_with_features() {
    let tree = catalog::default_tree();

    let Some(Node::Leaf(leaf)) = tree.lookup(&["Visual Studio Code"]) else {
        panic!("VS Code should be a leaf");
    };
    assert!(leaf.official());
    assert_eq!(leaf.feature_override("auto_updater"), Some(true));
    assert_eq!(leaf.feature_override("in_editor_configuration"), Some(true));
    assert_eq!(leaf.feature_override("auto_installer"), None);
}

#[test]
fn given_catalog_when_looking_up_nested_branches_then_prompts_match() {
    let tree = catalog::default_tree();

    assert!(matches!(
        tree.lookup(&["Sublime Text"]),
        Some(Node::Internal(n)) if n.prompt() == "Which version?"
    ));
    assert!(matches!(
        tree.lookup(&["Neovim / Vim8", "CoC"]),
        Some(Node::Internal(n)) if n.prompt() == "Extension or manual?"
    ));
    assert!(matches!(
        tree.lookup(&["Neovim / Vim8", "nvim-lspconfig"]),
        Some(Node::Link(_))
    ));
}

/// Collect every valid path through a tree, longest ones ending at
/// terminal nodes.
fn all_paths(tree: &DecisionTree) -> Vec<Vec<String>> {
    fn walk(label: &str, node: &Node, prefix: &[String], out: &mut Vec<Vec<String>>) {
        let mut path = prefix.to_vec();
        path.push(label.to_string());
        out.push(path.clone());
        if let Node::Internal(internal) = node {
            for (child_label, child) in internal.children() {
                walk(child_label, child, &path, out);
            }
        }
    }

    let mut out = Vec::new();
    for (label, node) in tree.root().children() {
        walk(label, node, &[], &mut out);
    }
    out
}

#[test]
fn given_every_valid_path_when_selected_stepwise_then_rendered_view_matches_lookup() {
    let tree = catalog::default_tree();

    for path in all_paths(&tree) {
        let mut session = WizardSession::new(tree.clone(), Arc::new(PulldownConverter));
        for depth in 1..=path.len() {
            session.select(&path[..depth]).unwrap();
        }

        match tree.lookup(&path).unwrap() {
            Node::Internal(internal) => {
                let view = &session.views()[path.len()];
                assert_eq!(view.prompt, internal.prompt(), "at {path:?}");
                assert_eq!(view.choices.len(), internal.len(), "at {path:?}");
            }
            Node::Leaf(_) => {
                assert!(
                    matches!(session.panel(), Some(Panel::Instructions { .. })),
                    "at {path:?}"
                );
            }
            Node::Link(_) => {
                assert!(matches!(session.panel(), Some(Panel::Link { .. })), "at {path:?}");
            }
        }
    }
}

#[test]
fn given_catalog_leaves_when_rendered_then_none_are_missing_instructions() {
    let tree = catalog::default_tree();

    for path in all_paths(&tree) {
        let Some(node) = tree.lookup(&path) else {
            panic!("path {path:?} should resolve");
        };
        match node {
            Node::Leaf(leaf) => assert!(
                leaf.install().is_some(),
                "catalog leaf {path:?} must carry instructions"
            ),
            Node::Link(link) => assert!(
                link.href.starts_with("https://"),
                "catalog link {path:?} must point somewhere real"
            ),
            Node::Internal(internal) => assert!(
                !internal.is_empty(),
                "catalog choice {path:?} must have children"
            ),
        }
    }
}

#[test]
fn given_vscode_selection_when_rendered_then_instructions_are_html() {
    let mut session =
        WizardSession::new(catalog::default_tree(), Arc::new(PulldownConverter));

    session.select(&["Visual Studio Code"]).unwrap();

    match session.panel() {
        Some(Panel::Instructions { checklist, body }) => {
            assert_eq!(checklist[0].name, "official");
            assert!(checklist[0].enabled);
            match body {
                PanelBody::Html(html) => {
                    assert!(html.contains("<a href="), "markdown links become anchors: {html}")
                }
                other => panic!("expected html body, got {other:?}"),
            }
        }
        other => panic!("expected instructions panel, got {other:?}"),
    }
}
