//! Command dispatch and execution

use std::io;
use std::sync::Arc;

use clap::CommandFactory;
use clap_complete::generate;
use termtree::Tree;
use tracing::{debug, instrument};

use crate::application::WizardSession;
use crate::catalog;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output::{self, TerminalSurface};
use crate::config::Settings;
use crate::domain::{self, title_case, DecisionTree, Node};
use crate::infrastructure::traits::{
    DocumentStore, FileDocumentStore, PulldownConverter, RenderSurface, SelectionItem, Selector,
    SkimSelector,
};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Wizard) => _wizard(cli),
        Some(Commands::Show { labels }) => _show(cli, labels),
        Some(Commands::Tree) => _tree(cli),
        Some(Commands::Config { command }) => _config(command),
        Some(Commands::Completion { shell }) => _completion(*shell),
        None => _wizard(cli),
    }
}

/// Load the decision tree: explicit `-f` flag, then the configured tree
/// file, then the built-in catalog.
fn load_tree(cli: &Cli, settings: &Settings) -> CliResult<DecisionTree> {
    let path = cli.tree_file.as_ref().or(settings.tree_file.as_ref());
    match path {
        Some(path) => {
            debug!("loading tree from {}", path.display());
            let text = std::fs::read_to_string(path)
                .map_err(|e| CliError::io(format!("read tree file {}", path.display()), e))?;
            Ok(domain::from_toml(&text).map_err(crate::application::ApplicationError::from)?)
        }
        None => Ok(catalog::default_tree()),
    }
}

#[instrument(skip(cli))]
fn _wizard(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load()?;
    let tree = load_tree(cli, &settings)?;
    let store = FileDocumentStore::new(&settings.instructions_dir);
    let selector = SkimSelector;
    let mut surface = TerminalSurface;
    let mut session = WizardSession::new(tree, Arc::new(PulldownConverter));

    // The depth currently being prompted. Cancelling steps one level back
    // up; selecting at a shallower depth re-navigates and trims.
    let mut cursor = 0usize;
    loop {
        let (prompt, items) = {
            let view = &session.views()[cursor];
            let items: Vec<SelectionItem> = view
                .choices
                .iter()
                .map(|c| SelectionItem {
                    display: c.label.clone(),
                    value: c.key.clone(),
                })
                .collect();
            (format!("{} ", view.prompt), items)
        };

        let Some(picked) = selector
            .select_one(&items, &prompt)
            .map_err(|message| CliError::Selector { message })?
        else {
            if cursor == 0 {
                return Ok(());
            }
            cursor -= 1;
            continue;
        };

        let mut path: Vec<String> = session.current_path()[..cursor].to_vec();
        path.push(picked.value);
        let update = session.select(&path)?;

        if let Some(request) = update.fetch.clone() {
            let result = store.fetch(&request.path);
            session.complete_fetch(request.ticket, result);
        }
        surface.apply(update.base_depth, &update.views, session.panel());

        // On a terminal node the panel was just shown; keep prompting at the
        // same depth so a sibling can be explored next.
        if session.panel().is_none() {
            cursor = path.len();
        }
    }
}

#[instrument(skip(cli))]
fn _show(cli: &Cli, labels: &[String]) -> CliResult<()> {
    let settings = Settings::load()?;
    let tree = load_tree(cli, &settings)?;
    let store = FileDocumentStore::new(&settings.instructions_dir);
    let mut session = WizardSession::new(tree, Arc::new(PulldownConverter));

    let mut fetch = None;
    for depth in 1..=labels.len() {
        fetch = session.select(&labels[..depth])?.fetch;
    }
    if let Some(request) = fetch {
        let result = store.fetch(&request.path);
        session.complete_fetch(request.ticket, result);
    }

    let mut surface = TerminalSurface;
    surface.apply(0, session.views(), session.panel());
    Ok(())
}

#[instrument(skip(cli))]
fn _tree(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load()?;
    let tree = load_tree(cli, &settings)?;

    let display = Tree::new(tree.root().prompt().to_string())
        .with_leaves(tree.root().children().map(|(l, n)| node_tree(l, n)));
    output::info(&display);
    Ok(())
}

fn node_tree(label: &str, node: &Node) -> Tree<String> {
    match node {
        Node::Internal(internal) => Tree::new(format!("{}: {}", title_case(label), internal.prompt()))
            .with_leaves(internal.children().map(|(l, n)| node_tree(l, n))),
        Node::Leaf(leaf) => Tree::new(format!(
            "{} [{}]",
            title_case(label),
            if leaf.official() { "official" } else { "community" }
        )),
        Node::Link(link) => Tree::new(format!("{} -> {}", title_case(label), link.href)),
    }
}

fn _config(command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = Settings::load()?;
            output::info(&settings.to_toml()?);
        }
        ConfigCommands::Template => output::info(&Settings::template()),
    }
    Ok(())
}

fn _completion(shell: clap_complete::Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
