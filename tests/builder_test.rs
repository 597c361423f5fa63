//! Tests for TOML tree decoding

use lswizard::domain::{from_toml, DomainError, InstallDoc, Node};
use lswizard::util::testing;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

const SAMPLE: &str = r#"
prompt = "Which editor are you using?"

["Visual Studio Code"]
official = true
features = { auto_updater = true, in_editor_configuration = true }
install.text = "Install the extension."

["Sublime Text"]
prompt = "Which version?"

["Sublime Text"."Sublime Text 3"]
official = false
install.text = "ST3 snippet"

["Sublime Text"."Sublime Text 4"]
official = false
install.text = "ST4 snippet"

[nvim-lspconfig]
href = "https://example.com/lspconfig"
text = "lspconfig server list"

[kate]
official = true
install.file = "kate.md"
"#;

#[test]
fn given_sample_document_when_decoding_then_discriminates_all_variants() {
    let tree = from_toml(SAMPLE).unwrap();

    assert_eq!(tree.root().prompt(), "Which editor are you using?");
    assert!(matches!(
        tree.lookup(&["Visual Studio Code"]),
        Some(Node::Leaf(leaf)) if leaf.official()
    ));
    assert!(matches!(
        tree.lookup(&["Sublime Text"]),
        Some(Node::Internal(n)) if n.prompt() == "Which version?"
    ));
    assert!(matches!(
        tree.lookup(&["Sublime Text", "Sublime Text 3"]),
        Some(Node::Leaf(_))
    ));
    assert!(matches!(
        tree.lookup(&["nvim-lspconfig"]),
        Some(Node::Link(link)) if link.text == "lspconfig server list"
    ));
}

#[test]
fn given_sample_document_when_decoding_then_document_order_is_render_order() {
    let tree = from_toml(SAMPLE).unwrap();

    let labels: Vec<_> = tree.root().labels().collect();
    assert_eq!(
        labels,
        vec![
            "Visual Studio Code",
            "Sublime Text",
            "nvim-lspconfig",
            "kate"
        ]
    );
}

#[test]
fn given_features_table_when_decoding_then_override_order_is_kept() {
    let tree = from_toml(SAMPLE).unwrap();

    let Some(Node::Leaf(leaf)) = tree.lookup(&["Visual Studio Code"]) else {
        panic!("expected leaf");
    };
    let features: Vec<_> = leaf.features().collect();
    assert_eq!(
        features,
        vec![("auto_updater", true), ("in_editor_configuration", true)]
    );
}

#[test]
fn given_install_file_reference_when_decoding_then_payload_is_by_reference() {
    let tree = from_toml(SAMPLE).unwrap();

    let Some(Node::Leaf(leaf)) = tree.lookup(&["kate"]) else {
        panic!("expected leaf");
    };
    assert_eq!(leaf.install(), Some(&InstallDoc::File("kate.md".to_string())));
}

#[test]
fn given_link_without_text_when_decoding_then_label_is_the_text() {
    let tree = from_toml(
        r#"
prompt = "Pick"

[docs]
href = "https://example.com"
"#,
    )
    .unwrap();

    assert!(matches!(
        tree.lookup(&["docs"]),
        Some(Node::Link(link)) if link.text == "docs"
    ));
}

#[test]
fn given_document_without_root_prompt_when_decoding_then_errors() {
    let result = from_toml("[editor]\nofficial = true\n");
    assert!(matches!(
        result,
        Err(DomainError::MalformedNode { label, .. }) if label == "(document)"
    ));
}

#[test]
fn given_node_without_discriminating_key_when_decoding_then_errors() {
    let result = from_toml("prompt = \"Pick\"\n\n[editor]\nsomething = 1\n");
    let err = result.err().expect("undiscriminated node must error");
    assert!(err.to_string().contains("editor"), "error names the node: {err}");
}

#[test]
fn given_non_boolean_feature_when_decoding_then_errors() {
    let result = from_toml(
        "prompt = \"Pick\"\n\n[editor]\nofficial = true\nfeatures = { auto_updater = \"yes\" }\n",
    );
    assert!(result.is_err());
}

#[test]
fn given_install_without_known_key_when_decoding_then_errors() {
    let result =
        from_toml("prompt = \"Pick\"\n\n[editor]\nofficial = true\ninstall = { url = \"x\" }\n");
    assert!(result.is_err());
}

#[test]
fn given_choice_node_without_children_when_decoding_then_errors() {
    let result = from_toml("prompt = \"Pick\"\n\n[editor]\nprompt = \"Empty choice\"\n");
    assert!(result.is_err());
}

#[test]
fn given_leaf_without_install_when_decoding_then_tolerated() {
    // A payload-less leaf is a configuration defect surfaced at render time,
    // not a decode error.
    let tree = from_toml("prompt = \"Pick\"\n\n[editor]\nofficial = false\n").unwrap();
    assert!(matches!(
        tree.lookup(&["editor"]),
        Some(Node::Leaf(leaf)) if leaf.install().is_none()
    ));
}
