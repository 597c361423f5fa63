//! Application layer: the navigation controller
//!
//! This layer orchestrates the domain model and depends on I/O boundary traits.

pub mod error;
pub mod session;
pub mod view;

pub use error::{ApplicationError, ApplicationResult};
pub use session::{FetchOutcome, WizardSession};
pub use view::{
    ChecklistEntry, ChoiceEntry, DepthView, FetchRequest, FetchTicket, Panel, PanelBody,
    RenderUpdate,
};
