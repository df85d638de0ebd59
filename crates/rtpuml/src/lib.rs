//! rtpuml - Generate PlantUML diagrams from UML-RT models
//!
//! Walks a model of packages, capsules and hierarchical state machines and
//! writes a tree of PlantUML documents: one class diagram for the whole
//! model, plus a composition diagram and (when present) a state machine
//! diagram per capsule.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use rtpuml::model::{Capsule, Connector, Model, Package, Port};
//!
//! let p1 = Port::new("p1");
//! let p2 = Port::new("p2");
//! let foo = Capsule::new("Foo")
//!     .with_connector(Connector::between(&p1, &p2))
//!     .with_port(p1)
//!     .with_port(p2);
//! let model = Model::new("Demo").with_root(Package::new("Demo").with_capsule(foo));
//!
//! let emitted = rtpuml::generate(&model, "target/diagrams").unwrap();
//! assert!(emitted);
//! ```
//!
//! # Advanced Usage
//!
//! For more control, pick the resolver, sink and configuration yourself:
//!
//! ```rust
//! use rtpuml::prelude::*;
//! use rtpuml::model::{Capsule, Model, Package};
//!
//! let model = Model::new("Demo").with_root(Package::new("Demo").with_capsule(Capsule::new("Top")));
//! let names = QualifiedNames::resolve(&model);
//! let mut sink = MemorySink::new();
//!
//! let generator = Generator::with_config(GeneratorConfig::default().with_indent(Indent::Spaces(2)));
//! assert!(generator.generate(&model, &names, &mut sink).unwrap());
//! assert!(sink.get("Demo/Top/composition.puml").is_some());
//! ```

pub mod core;
pub mod model;
pub mod plugins;

use std::path::Path;

pub use core::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{
        reflow, DocumentSink, FileSink, GeneratorConfig, GeneratorError, Indent, MemorySink,
        NameResolver, NameTable, QualifiedNames, Renderer,
    };
    pub use crate::plugins::{ClassRenderer, CompositionRenderer, Generator, StateRenderer};
}

/// Generate every diagram of `model` below `out_dir`
///
/// Creates `out_dir` (and its parents) if needed, resolves qualified names
/// for all ports and states and runs the default [`plugins::Generator`].
///
/// # Returns
/// * `Ok(false)` - The model has no capsules; nothing was written
/// * `Ok(true)` - All documents were written
/// * `Err` - The output directory is unusable, a write failed, or assembled
///   diagram text was unbalanced
pub fn generate(model: &model::Model, out_dir: impl AsRef<Path>) -> Result<bool> {
    generate_with_config(model, out_dir, GeneratorConfig::default())
}

/// Like [`generate`], with an explicit configuration
pub fn generate_with_config(
    model: &model::Model,
    out_dir: impl AsRef<Path>,
    config: GeneratorConfig,
) -> Result<bool> {
    let mut sink = FileSink::create(out_dir.as_ref())?;
    let names = QualifiedNames::resolve(model);
    plugins::Generator::with_config(config).generate(model, &names, &mut sink)
}
