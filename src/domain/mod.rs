//! Domain layer: the decision tree model
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod builder;
pub mod error;
pub mod label;
pub mod node;

pub use builder::from_toml;
pub use error::{DomainError, TreeResult};
pub use label::title_case;
pub use node::{
    DecisionTree, InstallDoc, InternalNode, LeafNode, LinkNode, Node, FEATURE_DEFAULTS,
};
