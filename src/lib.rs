//! lswizard: editor setup wizard for language servers
//!
//! A user navigates a decision tree of choices (editor, then sub-choices)
//! until reaching a leaf describing official-support status, supported
//! features, and install instructions. The navigation engine lives in
//! [`application::WizardSession`]; the tree model in [`domain`]; the
//! collaborator seams (markup conversion, document fetching, selection,
//! rendering) in [`infrastructure`].

pub mod application;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
