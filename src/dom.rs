//! Report tree model

pub mod builder;
pub mod model;

pub use builder::DomBuilder;
pub use model::{Document, Element, Node, NodeKind};
