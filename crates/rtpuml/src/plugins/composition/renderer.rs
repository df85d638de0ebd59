//! Composition diagram renderer
//!
//! Renders the internal structure of one capsule: a component per part
//! with the externally visible ports of the part's capsule type, the
//! capsule's own ports, and a line per connector.

use crate::core::{NameResolver, Renderer};
use crate::model::{Capsule, Connector, ElementId, Model, Part, Port};
use std::collections::HashMap;
use tracing::{trace, warn};

/// Composition diagram renderer
pub struct CompositionRenderer<'a> {
    names: &'a dyn NameResolver,
    capsules: HashMap<&'a ElementId, &'a Capsule>,
}

impl<'a> CompositionRenderer<'a> {
    /// Part types are looked up among all capsules of `model`, imports included
    pub fn new(model: &'a Model, names: &'a dyn NameResolver) -> Self {
        let capsules = model.capsules().into_iter().map(|c| (&c.id, c)).collect();
        Self { names, capsules }
    }

    fn part(&self, part: &Part) -> String {
        let style = if part.plugin {
            " #line.dashed"
        } else if part.optional {
            " #lightgray"
        } else {
            ""
        };

        let ports: Vec<String> = match self.capsules.get(&part.capsule) {
            Some(capsule) => capsule.external_ports().map(|p| self.port(p)).collect(),
            None => {
                warn!(part = %part.name, capsule = %part.capsule, "Unknown capsule type for part");
                Vec::new()
            }
        };

        trace!(part = %part.name, ports = ports.len(), "Rendering part");
        format!("component {}{} {{\n{}\n}}", part.name, style, ports.join("\n"))
    }

    fn port(&self, port: &Port) -> String {
        format!("port \"{}\" as {}", port.name, self.names.token_or_id(&port.id))
    }

    fn connector(&self, connector: &Connector) -> String {
        format!(
            "{} -u0)- {}",
            self.names.token_or_id(&connector.end1.port),
            self.names.token_or_id(&connector.end2.port)
        )
    }
}

impl Renderer<Capsule> for CompositionRenderer<'_> {
    fn render_body(&self, capsule: &Capsule) -> String {
        let parts: Vec<String> = capsule.parts.iter().map(|p| self.part(p)).collect();
        let ports: Vec<String> = capsule.ports.iter().map(|p| self.port(p)).collect();
        let connectors: Vec<String> = capsule
            .connectors
            .iter()
            .map(|c| self.connector(c))
            .collect();
        format!(
            "component {} {{\n{}\n{}\n{}\n}}",
            capsule.name,
            parts.join("\n"),
            ports.join("\n"),
            connectors.join("\n")
        )
    }

    fn diagram_name(&self, capsule: &Capsule) -> String {
        format!("{}-composition", capsule.name)
    }

    fn name(&self) -> &'static str {
        "composition"
    }
}
