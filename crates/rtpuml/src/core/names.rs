//! Cross-reference tokens for ports and states
//!
//! Diagrams refer to ports and states through an alias that must be a
//! valid PlantUML identifier and must not collide with any other element in
//! the same run. [`NameResolver`] is the lookup the generators consume;
//! [`QualifiedNames`] builds a [`NameTable`] from the qualified path of
//! every port and state.

use crate::model::{Capsule, ElementId, Model, Package, Region};
use std::collections::{HashMap, HashSet};
use tracing::{debug, trace, warn};

/// Lookup from element identity to its diagram token
pub trait NameResolver {
    /// The token of `id`, or `None` if the element is unknown
    fn token(&self, id: &ElementId) -> Option<&str>;

    /// The token of `id`, falling back to the raw identity
    ///
    /// Models are not validated, so a dangling reference is logged and
    /// rendered as-is instead of failing the run.
    fn token_or_id<'a>(&'a self, id: &'a ElementId) -> &'a str {
        self.token(id).unwrap_or_else(|| {
            warn!(id = %id, "No token for element, using its identity");
            id.as_str()
        })
    }
}

/// Token table filled by a resolver or by hand
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameTable {
    tokens: HashMap<ElementId, String>,
}

impl NameTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign `token` to `id`, replacing any previous token
    pub fn insert(&mut self, id: ElementId, token: impl Into<String>) {
        self.tokens.insert(id, token.into());
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// All entries sorted by token
    pub fn entries(&self) -> Vec<(&ElementId, &str)> {
        let mut entries: Vec<_> = self
            .tokens
            .iter()
            .map(|(id, token)| (id, token.as_str()))
            .collect();
        entries.sort_by(|a, b| a.1.cmp(b.1));
        entries
    }
}

impl NameResolver for NameTable {
    fn token(&self, id: &ElementId) -> Option<&str> {
        self.tokens.get(id).map(String::as_str)
    }
}

impl NameResolver for HashMap<ElementId, String> {
    fn token(&self, id: &ElementId) -> Option<&str> {
        self.get(id).map(String::as_str)
    }
}

/// Resolver deriving tokens from qualified element paths
///
/// A port of capsule `Top` in package `app` gets `app__Top__port`; a state
/// nested in composite `Busy` gets `app__Top__Busy__Working`. Characters
/// that PlantUML does not accept in an alias become `_`, and a numeric
/// suffix keeps tokens unique.
#[derive(Debug, Default)]
pub struct QualifiedNames {
    table: NameTable,
    taken: HashSet<String>,
}

const SEPARATOR: &str = "__";

impl QualifiedNames {
    /// Build the token table for every port and state in `model`
    pub fn resolve(model: &Model) -> NameTable {
        let mut names = Self::default();
        names.visit_model(model);
        debug!(tokens = names.table.len(), "Resolved qualified names");
        names.table
    }

    fn visit_model(&mut self, model: &Model) {
        for import in &model.imports {
            self.visit_model(import);
        }
        self.visit_package(&model.root, &[]);
    }

    fn visit_package(&mut self, package: &Package, parent: &[&str]) {
        let mut path = parent.to_vec();
        path.push(&package.name);

        for nested in &package.packages {
            self.visit_package(nested, &path);
        }
        for capsule in &package.capsules {
            self.visit_capsule(capsule, &path);
        }
    }

    fn visit_capsule(&mut self, capsule: &Capsule, parent: &[&str]) {
        let mut path = parent.to_vec();
        path.push(&capsule.name);

        for port in &capsule.ports {
            self.assign(&port.id, &path, &port.name);
        }
        if let Some(machine) = &capsule.state_machine {
            self.visit_region(&machine.region, &path);
        }
    }

    fn visit_region(&mut self, region: &Region, parent: &[&str]) {
        for state in &region.states {
            self.assign(state.id(), parent, state.name());
            if let Some(nested) = state.region() {
                let mut path = parent.to_vec();
                path.push(state.name());
                self.visit_region(nested, &path);
            }
        }
    }

    fn assign(&mut self, id: &ElementId, parent: &[&str], name: &str) {
        if self.table.token(id).is_some() {
            return;
        }

        let mut segments = parent.to_vec();
        segments.push(name);
        let base = sanitize(&segments.join(SEPARATOR));

        let mut token = base.clone();
        let mut suffix = 2;
        while self.taken.contains(&token) {
            token = format!("{}_{}", base, suffix);
            suffix += 1;
        }

        trace!(id = %id, token = %token, "Assigned token");
        self.taken.insert(token.clone());
        self.table.insert(id.clone(), token);
    }
}

/// Replace everything outside `[A-Za-z0-9_]` with `_`
fn sanitize(raw: &str) -> String {
    let token: String = raw
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    if token.is_empty() {
        "_".to_string()
    } else {
        token
    }
}
