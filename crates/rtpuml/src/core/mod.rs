//! Core abstractions for diagram generation
//!
//! Name resolution, output scoping, document persistence and the reflow
//! pass shared by every diagram renderer.

mod config;
mod error;
pub mod logging;
mod names;
mod reflow;
mod renderer;
mod scope;
mod sink;

pub use config::*;
pub use error::*;
pub use logging::*;
pub use names::*;
pub use reflow::*;
pub use renderer::*;
pub use scope::*;
pub use sink::*;
