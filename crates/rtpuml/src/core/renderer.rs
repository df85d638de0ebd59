//! Core renderer trait for diagram documents
//!
//! A renderer only produces the body of a diagram as brace-delimited
//! blocks and never decides on indentation. [`Renderer::render`] wraps the
//! body in the `@startuml`/`@enduml` frame and hands the result to
//! [`reflow`], which owns every whitespace decision.

use super::{reflow, GeneratorConfig, Result};

/// Core trait for diagram renderers
///
/// `T` is the model element a document is generated for: the whole model
/// for class diagrams, a capsule for composition and state machine
/// diagrams.
pub trait Renderer<T: ?Sized> {
    /// Diagram body without frame or indentation
    fn render_body(&self, subject: &T) -> String;

    /// Name written after `@startuml`
    fn diagram_name(&self, subject: &T) -> String;

    /// Get the name of this renderer
    fn name(&self) -> &'static str;

    /// Complete, reflowed document for `subject`
    fn render(&self, subject: &T, config: &GeneratorConfig) -> Result<String> {
        let raw = assemble(
            &self.diagram_name(subject),
            &config.skin_params,
            &self.render_body(subject),
        );
        reflow(&raw, config.indent)
    }
}

/// Frame a diagram body as a PlantUML document
pub fn assemble(name: &str, skin_params: &[String], body: &str) -> String {
    let mut raw = format!("@startuml {}\n", name);
    for param in skin_params {
        raw.push_str(&format!("skinparam {}\n", param));
    }
    raw.push_str(body);
    raw.push_str("\n@enduml\n");
    raw
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Indent;

    struct Fixed;

    impl Renderer<str> for Fixed {
        fn render_body(&self, subject: &str) -> String {
            format!("node {} {{\n      leaf\n}}", subject)
        }

        fn diagram_name(&self, subject: &str) -> String {
            format!("{}-fixed", subject)
        }

        fn name(&self) -> &'static str {
            "fixed"
        }
    }

    #[test]
    fn test_assemble_frame() {
        let raw = assemble("X", &["componentstyle uml2".to_string()], "body");
        assert_eq!(raw, "@startuml X\nskinparam componentstyle uml2\nbody\n@enduml\n");
    }

    #[test]
    fn test_render_reflows_body() {
        let config = GeneratorConfig::default();
        let doc = Fixed.render("n", &config).unwrap();
        assert_eq!(
            doc,
            "@startuml n-fixed\nskinparam componentstyle uml2\nnode n {\n\tleaf\n}\n@enduml"
        );
    }

    #[test]
    fn test_render_honors_indent_and_params() {
        let config = GeneratorConfig::default()
            .with_indent(Indent::Spaces(2))
            .with_skin_params(Vec::<String>::new());
        let doc = Fixed.render("n", &config).unwrap();
        assert_eq!(doc, "@startuml n-fixed\nnode n {\n  leaf\n}\n@enduml");
    }
}
