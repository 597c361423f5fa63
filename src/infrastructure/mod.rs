//! Infrastructure layer: collaborator implementations
//!
//! This layer implements the I/O boundary traits the engine depends on.

pub mod traits;

pub use traits::{
    ComrakConverter, DocumentStore, FileDocumentStore, MarkupConverter, PulldownConverter,
    RenderSurface, SelectionItem, Selector, SkimSelector,
};
