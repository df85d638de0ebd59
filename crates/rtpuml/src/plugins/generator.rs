//! Generator coordinating the emission of every diagram of a model
//!
//! The traversal is depth first and fully deterministic:
//! class diagram → imported models → packages → capsules, each in
//! declaration order. Every package and capsule is entered as a scope, so
//! documents land in a directory tree mirroring the model.

use tracing::{debug, info, span, Level};

use crate::core::{DocumentSink, GeneratorConfig, NameResolver, Renderer, Result, Scope};
use crate::model::{Capsule, Model, Package};
use crate::plugins::{ClassRenderer, CompositionRenderer, StateRenderer};

/// Generator that runs all diagram renderers over a model
#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    /// Create a generator with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Emit all documents for `model` into `sink`
    ///
    /// Returns `Ok(false)` without touching the sink if the model declares
    /// no capsule at all, `Ok(true)` once every document has been written.
    ///
    /// # Errors
    /// Fails if a location cannot be created, a document cannot be written,
    /// or assembled text does not reflow. Documents written before the
    /// failure are left in place.
    pub fn generate<S>(
        &self,
        model: &Model,
        names: &dyn NameResolver,
        sink: &mut S,
    ) -> Result<bool>
    where
        S: DocumentSink + ?Sized,
    {
        let generate_span = span!(Level::INFO, "generate", model = %model.name);
        let _enter = generate_span.enter();

        if !model.has_capsules() {
            info!("Model has no capsules, nothing to generate");
            return Ok(false);
        }

        let mut scope = Scope::new(sink);

        let class = ClassRenderer::new();
        let class_doc = class.render(model, &self.config)?;
        scope.write(&self.config.class_file, &class_doc)?;
        debug!(renderer = class.name(), file = %self.config.class_file, "Document written");

        let traversal = Traversal {
            config: &self.config,
            composition: CompositionRenderer::new(model, names),
            state: StateRenderer::new(names).with_guards(self.config.render_guards),
        };
        traversal.model(model, &mut scope)?;

        info!("Generation completed");
        Ok(true)
    }
}

/// Renderers shared by one generation run
struct Traversal<'a> {
    config: &'a GeneratorConfig,
    composition: CompositionRenderer<'a>,
    state: StateRenderer<'a>,
}

impl Traversal<'_> {
    fn model<S>(&self, model: &Model, scope: &mut Scope<'_, S>) -> Result<()>
    where
        S: DocumentSink + ?Sized,
    {
        for import in &model.imports {
            self.model(import, scope)?;
        }
        self.package(&model.root, scope)
    }

    fn package<S>(&self, package: &Package, scope: &mut Scope<'_, S>) -> Result<()>
    where
        S: DocumentSink + ?Sized,
    {
        let package_span = span!(Level::DEBUG, "package", name = %package.name);
        let _enter = package_span.enter();

        let mut scope = scope.enter(&package.name)?;
        for nested in &package.packages {
            self.package(nested, &mut *scope)?;
        }
        for capsule in &package.capsules {
            self.capsule(capsule, &mut *scope)?;
        }
        Ok(())
    }

    fn capsule<S>(&self, capsule: &Capsule, scope: &mut Scope<'_, S>) -> Result<()>
    where
        S: DocumentSink + ?Sized,
    {
        let capsule_span = span!(Level::DEBUG, "capsule", name = %capsule.name);
        let _enter = capsule_span.enter();

        let mut scope = scope.enter(&capsule.name)?;

        self.emit(&mut *scope, &self.composition, capsule, &self.config.composition_file)?;
        if capsule.state_machine.is_some() {
            self.emit(&mut *scope, &self.state, capsule, &self.config.state_machine_file)?;
        }
        Ok(())
    }

    fn emit<S, R>(
        &self,
        scope: &mut Scope<'_, S>,
        renderer: &R,
        capsule: &Capsule,
        file_name: &str,
    ) -> Result<()>
    where
        S: DocumentSink + ?Sized,
        R: Renderer<Capsule>,
    {
        let document = renderer.render(capsule, self.config)?;
        scope.write(file_name, &document)?;
        debug!(
            renderer = renderer.name(),
            location = %scope.location().join("/"),
            file = file_name,
            "Document written"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MemorySink, NameTable, QualifiedNames};
    use crate::model::{Class, StateMachine, State};

    #[test]
    fn test_renderer_names() {
        let model = Model::new("App");
        let names = NameTable::new();
        assert_eq!(ClassRenderer::new().name(), "class");
        assert_eq!(CompositionRenderer::new(&model, &names).name(), "composition");
        assert_eq!(StateRenderer::new(&names).name(), "state");
    }

    #[test]
    fn test_generator_default_config() {
        let generator = Generator::default();
        assert_eq!(generator.config(), &GeneratorConfig::default());
    }

    #[test]
    fn test_empty_model_generates_nothing() {
        let model = Model::new("Empty").with_root(Package::new("Empty").with_class(Class::new("A")));
        let mut sink = MemorySink::new();
        let emitted = Generator::new()
            .generate(&model, &NameTable::new(), &mut sink)
            .unwrap();
        assert!(!emitted);
        assert!(sink.is_empty());
        assert!(sink.locations().is_empty());
    }

    #[test]
    fn test_layout_of_documents() {
        let model = Model::new("App").with_root(
            Package::new("App")
                .with_capsule(Capsule::new("Top"))
                .with_package(
                    Package::new("ctl").with_capsule(
                        Capsule::new("Ctrl")
                            .with_state_machine(StateMachine::new().with_state(State::simple("Idle"))),
                    ),
                ),
        );
        let names = QualifiedNames::resolve(&model);
        let mut sink = MemorySink::new();
        assert!(Generator::new().generate(&model, &names, &mut sink).unwrap());

        assert_eq!(
            sink.paths(),
            vec![
                "App/Top/composition.puml",
                "App/ctl/Ctrl/composition.puml",
                "App/ctl/Ctrl/statemachine.puml",
                "class.puml",
            ]
        );
    }

    #[test]
    fn test_custom_file_names() {
        let config = GeneratorConfig {
            class_file: "classes.txt".to_string(),
            composition_file: "structure.txt".to_string(),
            ..GeneratorConfig::default()
        };
        let model = Model::new("App").with_root(Package::new("App").with_capsule(Capsule::new("Top")));
        let mut sink = MemorySink::new();
        Generator::with_config(config)
            .generate(&model, &QualifiedNames::resolve(&model), &mut sink)
            .unwrap();
        assert_eq!(sink.paths(), vec!["App/Top/structure.txt", "classes.txt"]);
    }
}
