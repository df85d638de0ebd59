//! UML-RT model consumed by the generators
//!
//! The model is an ownership tree: a [`Model`] owns its root [`Package`],
//! packages own capsules and classes, capsules own ports, parts, connectors
//! and an optional state machine. Cross references (connector ends, part
//! types, transition endpoints) point at an [`ElementId`] instead of
//! borrowing, so the tree stays plain data and can be loaded from JSON.
//!
//! The generators never mutate a model.

mod behavior;
mod structure;

pub use behavior::*;
pub use structure::*;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque identity of a model element
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Allocate an identity no other call in this process has returned
    pub fn fresh() -> Self {
        Self(format!("_id{}", NEXT_ID.fetch_add(1, Ordering::Relaxed)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Root of a model: a named root package plus imported models
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    pub name: String,
    #[serde(default)]
    pub imports: Vec<Model>,
    pub root: Package,
}

impl Model {
    /// Create an empty model whose root package carries the model name
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            root: Package::new(name.clone()),
            name,
            imports: Vec::new(),
        }
    }

    pub fn with_import(mut self, model: Model) -> Self {
        self.imports.push(model);
        self
    }

    pub fn with_root(mut self, root: Package) -> Self {
        self.root = root;
        self
    }

    /// Load a model from its JSON representation
    pub fn from_json(json: &str) -> crate::core::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the model to pretty-printed JSON
    pub fn to_json(&self) -> crate::core::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Visit every capsule of this model, imports first, in declaration order
    pub fn capsules(&self) -> Vec<&Capsule> {
        let mut capsules = Vec::new();
        self.collect_capsules(&mut capsules);
        capsules
    }

    fn collect_capsules<'a>(&'a self, out: &mut Vec<&'a Capsule>) {
        for import in &self.imports {
            import.collect_capsules(out);
        }
        self.root.collect_capsules(out);
    }

    /// Whether the model (including imports) declares at least one capsule
    pub fn has_capsules(&self) -> bool {
        self.imports.iter().any(Model::has_capsules) || self.root.has_capsules()
    }
}

/// A named grouping of packages, capsules and classes
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Package {
    pub name: String,
    #[serde(default)]
    pub packages: Vec<Package>,
    #[serde(default)]
    pub capsules: Vec<Capsule>,
    #[serde(default)]
    pub classes: Vec<Class>,
}

impl Package {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_package(mut self, package: Package) -> Self {
        self.packages.push(package);
        self
    }

    pub fn with_capsule(mut self, capsule: Capsule) -> Self {
        self.capsules.push(capsule);
        self
    }

    pub fn with_class(mut self, class: Class) -> Self {
        self.classes.push(class);
        self
    }

    fn collect_capsules<'a>(&'a self, out: &mut Vec<&'a Capsule>) {
        for package in &self.packages {
            package.collect_capsules(out);
        }
        out.extend(self.capsules.iter());
    }

    fn has_capsules(&self) -> bool {
        !self.capsules.is_empty() || self.packages.iter().any(Package::has_capsules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_ids_are_unique() {
        let a = ElementId::fresh();
        let b = ElementId::fresh();
        assert_ne!(a, b);
    }

    #[test]
    fn test_model_root_named_after_model() {
        let model = Model::new("Demo");
        assert_eq!(model.root.name, "Demo");
        assert!(!model.has_capsules());
    }

    #[test]
    fn test_has_capsules_in_nested_package() {
        let model = Model::new("Demo").with_root(
            Package::new("Demo").with_package(Package::new("inner").with_capsule(Capsule::new("Top"))),
        );
        assert!(model.has_capsules());
    }

    #[test]
    fn test_has_capsules_in_import() {
        let lib = Model::new("Lib").with_root(Package::new("Lib").with_capsule(Capsule::new("Timer")));
        let model = Model::new("App").with_import(lib);
        assert!(model.has_capsules());
        assert_eq!(model.capsules().len(), 1);
    }

    #[test]
    fn test_json_round_trip_keeps_ids() {
        let port = Port::new("p");
        let port_id = port.id.clone();
        let model = Model::new("App")
            .with_root(Package::new("App").with_capsule(Capsule::new("Top").with_port(port)));
        let json = model.to_json().unwrap();
        let loaded = Model::from_json(&json).unwrap();
        assert_eq!(loaded, model);
        assert_eq!(loaded.root.capsules[0].ports[0].id, port_id);
    }

    #[test]
    fn test_json_defaults() {
        let json = r#"{
            "name": "App",
            "root": {
                "name": "App",
                "capsules": [{ "name": "Top", "ports": [{ "name": "p" }] }]
            }
        }"#;
        let model = Model::from_json(json).unwrap();
        let top = &model.root.capsules[0];
        assert_eq!(top.name, "Top");
        assert!(top.state_machine.is_none());
        assert!(!top.ports[0].internal);
        assert!(model.imports.is_empty());
    }

    #[test]
    fn test_json_with_unrecognized_kinds() {
        let json = r#"{
            "name": "App",
            "root": {
                "name": "App",
                "capsules": [{
                    "name": "Top",
                    "attributes": [{ "name": "n", "type": "int", "visibility": "IMPLEMENTATION" }],
                    "state_machine": {
                        "states": [
                            { "type": "pseudo", "id": "deep", "kind": "DEEP_HISTORY" },
                            { "type": "simple", "id": "idle", "name": "Idle" }
                        ],
                        "transitions": [{ "source": "idle", "target": "deep" }]
                    }
                }]
            }
        }"#;
        let model = Model::from_json(json).unwrap();
        let top = &model.root.capsules[0];
        assert_eq!(top.attributes[0].visibility, Visibility::Other);
        let machine = top.state_machine.as_ref().unwrap();
        assert_eq!(machine.region.states[0].pseudo_kind(), Some(PseudoKind::Other));
    }
}
