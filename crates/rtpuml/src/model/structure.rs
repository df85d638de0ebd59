//! Structural elements: classes, capsules, parts, ports and connectors

use super::{ElementId, StateMachine};
use serde::{Deserialize, Serialize};

fn one() -> u32 {
    1
}

/// Visibility kind of an attribute or operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
    Package,
    /// Any visibility kind this crate has no name for
    #[serde(other)]
    Other,
}

impl Visibility {
    /// Class diagram marker for this visibility
    ///
    /// Only public, protected and package visibility have their own marker;
    /// every other kind is shown as public.
    pub fn marker(self) -> char {
        match self {
            Visibility::Public => '+',
            Visibility::Protected => '#',
            Visibility::Package => '~',
            Visibility::Private | Visibility::Other => '+',
        }
    }
}

/// Typed attribute of a class or capsule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default = "one")]
    pub replication: u32,
    #[serde(default)]
    pub visibility: Visibility,
}

impl Attribute {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            replication: 1,
            visibility: Visibility::default(),
        }
    }

    pub fn with_replication(mut self, replication: u32) -> Self {
        self.replication = replication;
        self
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }
}

/// Operation parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default = "one")]
    pub replication: u32,
}

impl Parameter {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            replication: 1,
        }
    }

    pub fn with_replication(mut self, replication: u32) -> Self {
        self.replication = replication;
        self
    }
}

/// Operation of a class or capsule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    pub name: String,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default)]
    pub return_type: Option<String>,
    #[serde(default)]
    pub visibility: Visibility,
}

impl Operation {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
            return_type: None,
            visibility: Visibility::default(),
        }
    }

    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn with_return_type(mut self, return_type: impl Into<String>) -> Self {
        self.return_type = Some(return_type.into());
        self
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }
}

/// Passive class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Class {
    pub name: String,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default)]
    pub operations: Vec<Operation>,
}

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            operations: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn with_operation(mut self, operation: Operation) -> Self {
        self.operations.push(operation);
        self
    }
}

/// Interaction point of a capsule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Port {
    #[serde(default = "ElementId::fresh")]
    pub id: ElementId,
    pub name: String,
    /// Internal ports are not visible from outside the capsule
    #[serde(default)]
    pub internal: bool,
}

impl Port {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ElementId::fresh(),
            name: name.into(),
            internal: false,
        }
    }

    pub fn internal(name: impl Into<String>) -> Self {
        Self {
            internal: true,
            ..Self::new(name)
        }
    }

    pub fn with_id(mut self, id: impl Into<ElementId>) -> Self {
        self.id = id.into();
        self
    }
}

/// Typed slot of a capsule holding instances of another capsule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    pub name: String,
    /// Identity of the capsule type
    pub capsule: ElementId,
    #[serde(default)]
    pub plugin: bool,
    #[serde(default)]
    pub optional: bool,
    #[serde(default = "one")]
    pub replication: u32,
}

impl Part {
    pub fn new(name: impl Into<String>, capsule: &Capsule) -> Self {
        Self::of_type(name, capsule.id.clone())
    }

    pub fn of_type(name: impl Into<String>, capsule: ElementId) -> Self {
        Self {
            name: name.into(),
            capsule,
            plugin: false,
            optional: false,
            replication: 1,
        }
    }

    pub fn plugin(mut self) -> Self {
        self.plugin = true;
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn with_replication(mut self, replication: u32) -> Self {
        self.replication = replication;
        self
    }
}

/// One side of a connector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectorEnd {
    pub port: ElementId,
    /// Part owning the port, or `None` for a port of the capsule itself
    #[serde(default)]
    pub part: Option<String>,
}

impl ConnectorEnd {
    pub fn new(port: &Port) -> Self {
        Self {
            port: port.id.clone(),
            part: None,
        }
    }

    pub fn on_part(part: impl Into<String>, port: &Port) -> Self {
        Self {
            port: port.id.clone(),
            part: Some(part.into()),
        }
    }
}

/// Undirected binding between two ports
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connector {
    pub end1: ConnectorEnd,
    pub end2: ConnectorEnd,
}

impl Connector {
    pub fn new(end1: ConnectorEnd, end2: ConnectorEnd) -> Self {
        Self { end1, end2 }
    }

    /// Connect two ports of the owning capsule
    pub fn between(a: &Port, b: &Port) -> Self {
        Self::new(ConnectorEnd::new(a), ConnectorEnd::new(b))
    }
}

/// Active class with structure and optional behavior
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Capsule {
    #[serde(default = "ElementId::fresh")]
    pub id: ElementId,
    pub name: String,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default)]
    pub operations: Vec<Operation>,
    #[serde(default)]
    pub parts: Vec<Part>,
    #[serde(default)]
    pub ports: Vec<Port>,
    #[serde(default)]
    pub connectors: Vec<Connector>,
    #[serde(default)]
    pub state_machine: Option<StateMachine>,
}

impl Capsule {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ElementId::fresh(),
            name: name.into(),
            attributes: Vec::new(),
            operations: Vec::new(),
            parts: Vec::new(),
            ports: Vec::new(),
            connectors: Vec::new(),
            state_machine: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<ElementId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn with_operation(mut self, operation: Operation) -> Self {
        self.operations.push(operation);
        self
    }

    pub fn with_part(mut self, part: Part) -> Self {
        self.parts.push(part);
        self
    }

    pub fn with_port(mut self, port: Port) -> Self {
        self.ports.push(port);
        self
    }

    pub fn with_connector(mut self, connector: Connector) -> Self {
        self.connectors.push(connector);
        self
    }

    pub fn with_state_machine(mut self, state_machine: StateMachine) -> Self {
        self.state_machine = Some(state_machine);
        self
    }

    /// Ports visible from outside the capsule
    pub fn external_ports(&self) -> impl Iterator<Item = &Port> {
        self.ports.iter().filter(|p| !p.internal)
    }
}
