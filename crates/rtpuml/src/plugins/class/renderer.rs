//! Class diagram renderer
//!
//! Renders the package tree of a model, imports first, as nested folders
//! holding one class box per capsule and per passive class.

use crate::core::Renderer;
use crate::model::{Attribute, Capsule, Class, Model, Operation, Package, Parameter};
use tracing::trace;

/// Class diagram renderer
#[derive(Debug, Default, Clone, Copy)]
pub struct ClassRenderer;

impl ClassRenderer {
    pub fn new() -> Self {
        Self
    }

    fn model(&self, model: &Model) -> String {
        let imports: Vec<String> = model.imports.iter().map(|m| self.model(m)).collect();
        format!("{}\n{}", imports.join("\n"), self.package(&model.root))
    }

    fn package(&self, package: &Package) -> String {
        trace!(package = %package.name, "Rendering package");
        let capsules: Vec<String> = package.capsules.iter().map(|c| self.capsule(c)).collect();
        let classes: Vec<String> = package.classes.iter().map(|c| self.class(c)).collect();
        let packages: Vec<String> = package.packages.iter().map(|p| self.package(p)).collect();
        format!(
            "package {} <<Folder>> {{\n{}\n{}\n{}\n}}",
            package.name,
            capsules.join("\n"),
            classes.join("\n"),
            packages.join("\n")
        )
    }

    fn capsule(&self, capsule: &Capsule) -> String {
        class_box(&capsule.name, &capsule.attributes, &capsule.operations)
    }

    fn class(&self, class: &Class) -> String {
        class_box(&class.name, &class.attributes, &class.operations)
    }
}

impl Renderer<Model> for ClassRenderer {
    fn render_body(&self, model: &Model) -> String {
        self.model(model)
    }

    fn diagram_name(&self, model: &Model) -> String {
        model.name.clone()
    }

    fn name(&self) -> &'static str {
        "class"
    }
}

fn class_box(name: &str, attributes: &[Attribute], operations: &[Operation]) -> String {
    let attributes: Vec<String> = attributes.iter().map(attribute).collect();
    let operations: Vec<String> = operations.iter().map(operation).collect();
    format!(
        "class {} {{\n{}\n{}\n}}",
        name,
        attributes.join("\n"),
        operations.join("\n")
    )
}

/// `[n]` for replicated elements, nothing otherwise
fn replication(count: u32) -> String {
    if count > 1 {
        format!("[{}]", count)
    } else {
        String::new()
    }
}

/// `+name: Type[n]`
fn attribute(attr: &Attribute) -> String {
    format!(
        "{}{}: {}{}",
        attr.visibility.marker(),
        attr.name,
        attr.type_name,
        replication(attr.replication)
    )
}

/// `+name(a: A, b: B[2]): Ret`
fn operation(op: &Operation) -> String {
    let parameters: Vec<String> = op.parameters.iter().map(parameter).collect();
    let ret = op
        .return_type
        .as_ref()
        .map(|t| format!(": {}", t))
        .unwrap_or_default();
    format!(
        "{}{}({}){}",
        op.visibility.marker(),
        op.name,
        parameters.join(", "),
        ret
    )
}

fn parameter(param: &Parameter) -> String {
    format!(
        "{}: {}{}",
        param.name,
        param.type_name,
        replication(param.replication)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GeneratorConfig;
    use crate::model::Visibility;

    #[test]
    fn test_attribute_rendering() {
        assert_eq!(attribute(&Attribute::new("count", "int")), "+count: int");
        assert_eq!(
            attribute(
                &Attribute::new("buf", "byte")
                    .with_replication(16)
                    .with_visibility(Visibility::Protected)
            ),
            "#buf: byte[16]"
        );
    }

    #[test]
    fn test_visibility_fallback() {
        let attr = Attribute::new("secret", "int").with_visibility(Visibility::Private);
        assert_eq!(attribute(&attr), "+secret: int");
        let attr = Attribute::new("shared", "int").with_visibility(Visibility::Package);
        assert_eq!(attribute(&attr), "~shared: int");
    }

    #[test]
    fn test_operation_rendering() {
        let op = Operation::new("send")
            .with_parameter(Parameter::new("to", "Addr"))
            .with_parameter(Parameter::new("data", "byte").with_replication(8))
            .with_return_type("bool");
        assert_eq!(operation(&op), "+send(to: Addr, data: byte[8]): bool");

        let op = Operation::new("reset").with_visibility(Visibility::Package);
        assert_eq!(operation(&op), "~reset()");
    }

    #[test]
    fn test_class_diagram_document() {
        let model = Model::new("Demo").with_root(
            Package::new("Demo")
                .with_capsule(
                    Capsule::new("Top").with_attribute(Attribute::new("n", "int")),
                )
                .with_class(
                    Class::new("Point")
                        .with_attribute(Attribute::new("x", "double"))
                        .with_operation(Operation::new("norm").with_return_type("double")),
                )
                .with_package(Package::new("util").with_class(Class::new("Empty"))),
        );

        let doc = ClassRenderer::new()
            .render(&model, &GeneratorConfig::default())
            .unwrap();
        let expected = "@startuml Demo\n\
                        skinparam componentstyle uml2\n\
                        package Demo <<Folder>> {\n\
                        \tclass Top {\n\
                        \t\t+n: int\n\
                        \t}\n\
                        \tclass Point {\n\
                        \t\t+x: double\n\
                        \t\t+norm(): double\n\
                        \t}\n\
                        \tpackage util <<Folder>> {\n\
                        \t\tclass Empty {\n\
                        \t\t}\n\
                        \t}\n\
                        }\n\
                        @enduml";
        assert_eq!(doc, expected);
    }

    #[test]
    fn test_imports_come_first() {
        let lib = Model::new("Lib").with_root(Package::new("Lib").with_class(Class::new("Timer")));
        let model = Model::new("App").with_import(lib);
        let body = ClassRenderer::new().render_body(&model);
        let lib_at = body.find("package Lib").unwrap();
        let app_at = body.find("package App").unwrap();
        assert!(lib_at < app_at);
    }
}
