//! Behavioral elements: hierarchical state machines

use super::ElementId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a pseudostate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PseudoKind {
    Initial,
    Choice,
    Join,
    Fork,
    Junction,
    History,
    EntryPoint,
    ExitPoint,
    Terminate,
    /// Any pseudostate kind this crate has no name for
    #[serde(other)]
    Other,
}

impl fmt::Display for PseudoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PseudoKind::Initial => "initial",
            PseudoKind::Choice => "choice",
            PseudoKind::Join => "join",
            PseudoKind::Fork => "fork",
            PseudoKind::Junction => "junction",
            PseudoKind::History => "history",
            PseudoKind::EntryPoint => "entryPoint",
            PseudoKind::ExitPoint => "exitPoint",
            PseudoKind::Terminate => "terminate",
            PseudoKind::Other => "other",
        };
        f.write_str(name)
    }
}

/// Vertex of a state machine region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum State {
    Simple {
        #[serde(default = "ElementId::fresh")]
        id: ElementId,
        name: String,
    },
    Composite {
        #[serde(default = "ElementId::fresh")]
        id: ElementId,
        name: String,
        #[serde(default)]
        region: Region,
    },
    Pseudo {
        #[serde(default = "ElementId::fresh")]
        id: ElementId,
        #[serde(default)]
        name: String,
        kind: PseudoKind,
    },
}

impl State {
    pub fn simple(name: impl Into<String>) -> Self {
        State::Simple {
            id: ElementId::fresh(),
            name: name.into(),
        }
    }

    pub fn composite(name: impl Into<String>, region: Region) -> Self {
        State::Composite {
            id: ElementId::fresh(),
            name: name.into(),
            region,
        }
    }

    /// Pseudostate named after its kind
    pub fn pseudo(kind: PseudoKind) -> Self {
        State::Pseudo {
            id: ElementId::fresh(),
            name: kind.to_string(),
            kind,
        }
    }

    pub fn pseudo_named(name: impl Into<String>, kind: PseudoKind) -> Self {
        State::Pseudo {
            id: ElementId::fresh(),
            name: name.into(),
            kind,
        }
    }

    pub fn with_id(mut self, new_id: impl Into<ElementId>) -> Self {
        match &mut self {
            State::Simple { id, .. } | State::Composite { id, .. } | State::Pseudo { id, .. } => {
                *id = new_id.into();
            }
        }
        self
    }

    pub fn id(&self) -> &ElementId {
        match self {
            State::Simple { id, .. } | State::Composite { id, .. } | State::Pseudo { id, .. } => id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            State::Simple { name, .. }
            | State::Composite { name, .. }
            | State::Pseudo { name, .. } => name,
        }
    }

    /// The pseudostate kind, if this is a pseudostate
    pub fn pseudo_kind(&self) -> Option<PseudoKind> {
        match self {
            State::Pseudo { kind, .. } => Some(*kind),
            State::Simple { .. } | State::Composite { .. } => None,
        }
    }

    /// The nested region of a composite state
    pub fn region(&self) -> Option<&Region> {
        match self {
            State::Composite { region, .. } => Some(region),
            State::Simple { .. } | State::Pseudo { .. } => None,
        }
    }
}

/// Directed transition between two states of the same or an enclosing region
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub source: ElementId,
    pub target: ElementId,
    /// Signal names of the triggers, in declaration order
    #[serde(default)]
    pub triggers: Vec<String>,
    #[serde(default)]
    pub guard: Option<String>,
}

impl Transition {
    pub fn new(source: &State, target: &State) -> Self {
        Self::between(source.id().clone(), target.id().clone())
    }

    pub fn between(source: ElementId, target: ElementId) -> Self {
        Self {
            source,
            target,
            triggers: Vec::new(),
            guard: None,
        }
    }

    pub fn with_trigger(mut self, signal: impl Into<String>) -> Self {
        self.triggers.push(signal.into());
        self
    }

    pub fn with_guard(mut self, guard: impl Into<String>) -> Self {
        self.guard = Some(guard.into());
        self
    }
}

/// States and the transitions between them
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Region {
    #[serde(default)]
    pub states: Vec<State>,
    #[serde(default)]
    pub transitions: Vec<Transition>,
}

impl Region {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(mut self, state: State) -> Self {
        self.states.push(state);
        self
    }

    pub fn with_transition(mut self, transition: Transition) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Every state of this region and of all nested regions, depth first
    pub fn all_states(&self) -> Vec<&State> {
        let mut states = Vec::new();
        self.collect_states(&mut states);
        states
    }

    fn collect_states<'a>(&'a self, out: &mut Vec<&'a State>) {
        for state in &self.states {
            out.push(state);
            if let Some(region) = state.region() {
                region.collect_states(out);
            }
        }
    }
}

/// Behavior of a capsule: the top region of a state machine
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StateMachine {
    #[serde(flatten)]
    pub region: Region,
}

impl StateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(mut self, state: State) -> Self {
        self.region.states.push(state);
        self
    }

    pub fn with_transition(mut self, transition: Transition) -> Self {
        self.region.transitions.push(transition);
        self
    }
}
