//! State machine diagram renderer
//!
//! Renders the state machine of a capsule, recursing into composite
//! states. Initial and history pseudostates have no box of their own: they
//! only show up as the `[*]` and `[H*]` ends of transitions.

use crate::core::{NameResolver, Renderer};
use crate::model::{Capsule, ElementId, PseudoKind, Region, State, Transition};
use std::collections::HashMap;
use tracing::{debug, trace};

const START_MARKER: &str = "[*]";
const HISTORY_MARKER: &str = "[H*]";

/// State machine diagram renderer
pub struct StateRenderer<'a> {
    names: &'a dyn NameResolver,
    render_guards: bool,
}

impl<'a> StateRenderer<'a> {
    pub fn new(names: &'a dyn NameResolver) -> Self {
        Self {
            names,
            render_guards: false,
        }
    }

    /// Append `[guard]` to transition labels
    pub fn with_guards(mut self, render_guards: bool) -> Self {
        self.render_guards = render_guards;
        self
    }

    fn region(&self, region: &Region, kinds: &HashMap<&ElementId, PseudoKind>) -> String {
        let states: Vec<String> = region
            .states
            .iter()
            .map(|s| self.state(s, kinds))
            .collect();
        let transitions: Vec<String> = region
            .transitions
            .iter()
            .map(|t| self.transition(t, kinds))
            .collect();
        format!("{}\n{}", states.join("\n"), transitions.join("\n"))
    }

    fn state(&self, state: &State, kinds: &HashMap<&ElementId, PseudoKind>) -> String {
        match state {
            State::Simple { id, name } => {
                format!("state \"{}\" as {}", name, self.names.token_or_id(id))
            }
            State::Composite { id, name, region } => {
                trace!(state = %name, "Rendering composite state");
                format!(
                    "state \"{}\" as {} {{\n{}\n}}",
                    name,
                    self.names.token_or_id(id),
                    self.region(region, kinds)
                )
            }
            State::Pseudo { id, kind, .. } => self.pseudostate(id, *kind),
        }
    }

    fn pseudostate(&self, id: &ElementId, kind: PseudoKind) -> String {
        let stereotype = match kind {
            PseudoKind::Choice => "choice",
            PseudoKind::Join => "join",
            PseudoKind::EntryPoint => "entryPoint",
            PseudoKind::ExitPoint => "exitPoint",
            // Drawn through their transitions
            PseudoKind::Initial | PseudoKind::History => return String::new(),
            PseudoKind::Fork
            | PseudoKind::Junction
            | PseudoKind::Terminate
            | PseudoKind::Other => {
                debug!(kind = %kind, "Pseudostate kind has no diagram element");
                return String::new();
            }
        };
        format!("state {} <<{}>>", self.names.token_or_id(id), stereotype)
    }

    fn transition(&self, transition: &Transition, kinds: &HashMap<&ElementId, PseudoKind>) -> String {
        let source = match kinds.get(&transition.source) {
            Some(PseudoKind::Initial) => START_MARKER,
            _ => self.names.token_or_id(&transition.source),
        };
        let target = match kinds.get(&transition.target) {
            Some(PseudoKind::History) => HISTORY_MARKER,
            _ => self.names.token_or_id(&transition.target),
        };

        let mut line = format!("{} --> {}", source, target);
        if let Some(label) = self.label(transition) {
            line.push_str(" : ");
            line.push_str(&label);
        }
        line
    }

    fn label(&self, transition: &Transition) -> Option<String> {
        let triggers = transition.triggers.join(",");
        let guard = match &transition.guard {
            Some(guard) if self.render_guards => Some(format!("[{}]", guard)),
            _ => None,
        };
        match (triggers.is_empty(), guard) {
            (true, None) => None,
            (false, None) => Some(triggers),
            (true, Some(guard)) => Some(guard),
            (false, Some(guard)) => Some(format!("{} {}", triggers, guard)),
        }
    }
}

/// Pseudostate kind of every pseudostate in `region`, nested regions included
fn pseudo_kinds(region: &Region) -> HashMap<&ElementId, PseudoKind> {
    region
        .all_states()
        .into_iter()
        .filter_map(|s| s.pseudo_kind().map(|kind| (s.id(), kind)))
        .collect()
}

impl Renderer<Capsule> for StateRenderer<'_> {
    fn render_body(&self, capsule: &Capsule) -> String {
        match &capsule.state_machine {
            Some(machine) => self.region(&machine.region, &pseudo_kinds(&machine.region)),
            None => String::new(),
        }
    }

    fn diagram_name(&self, capsule: &Capsule) -> String {
        format!("{}-statemachine", capsule.name)
    }

    fn name(&self) -> &'static str {
        "state"
    }
}
