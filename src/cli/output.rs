//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use colored::Colorize;

use crate::application::view::{DepthView, Panel, PanelBody};
use crate::infrastructure::traits::RenderSurface;

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print warning (yellow "Warning:" prefix) to stderr
pub fn warning(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "Warning".yellow(), msg);
}

/// Print section header (cyan bold)
pub fn header(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg.to_string().cyan().bold());
}

/// Print checklist line: green checkmark or red cross
pub fn check(label: &(impl std::fmt::Display + ?Sized), enabled: bool) {
    if enabled {
        println!("  {} {}", "✓".green(), label);
    } else {
        println!("  {} {}", "✗".red(), label);
    }
}

/// Print a selectable choice, highlighting the active one
pub fn choice(label: &(impl std::fmt::Display + ?Sized), active: bool, indent: usize) {
    let pad = "  ".repeat(indent);
    if active {
        println!("{pad}  {} {}", "▸".green(), label.to_string().bold());
    } else {
        println!("{pad}    {}", label);
    }
}

/// Print indented detail (no color)
pub fn detail(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("  {}", msg);
}

/// Print plain output (no color, for data/markup)
pub fn info(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg);
}

/// Render surface that prints fragments to stdout.
///
/// A terminal cannot erase what it already printed, so the replace-by-depth
/// contract degenerates to printing the re-rendered tail; nesting depth is
/// shown as indentation instead.
#[derive(Debug, Default)]
pub struct TerminalSurface;

impl RenderSurface for TerminalSurface {
    fn apply(&mut self, base_depth: usize, views: &[DepthView], panel: Option<&Panel>) {
        for (offset, view) in views.iter().enumerate() {
            let depth = base_depth + offset;
            println!("{}{}", "  ".repeat(depth), view.prompt.as_str().cyan().bold());
            for entry in &view.choices {
                choice(&entry.label, entry.active, depth);
            }
        }

        match panel {
            None => {}
            Some(Panel::Link { text, href }) => {
                header("Instructions");
                println!("  {} <{}>", text, href.as_str().underline());
            }
            Some(Panel::Instructions { checklist, body }) => {
                header("Features");
                for entry in checklist {
                    check(&entry.label, entry.enabled);
                }
                header("Instructions");
                match body {
                    PanelBody::Html(html) => info(html),
                    PanelBody::Pending { path } => detail(&format!("fetching {path}...")),
                    PanelBody::Failed { path, message } => {
                        warning(&format!("could not load instructions {path}: {message}"))
                    }
                    PanelBody::Missing => {
                        detail("No instructions are available for this selection yet.")
                    }
                }
            }
        }
    }
}
