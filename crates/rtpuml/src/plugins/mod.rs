//! Diagram plugins
//!
//! One renderer per diagram kind, plus the [`Generator`] that walks a model
//! and writes every document through a [`crate::core::DocumentSink`].

pub mod class;
pub mod composition;
pub mod generator;
pub mod state;

pub use class::*;
pub use composition::*;
pub use generator::*;
pub use state::*;
