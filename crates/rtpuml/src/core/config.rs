//! Generator configuration
//!
//! Controls document file names, the skin parameter preamble, the
//! indentation unit used by reflow and whether transition guards are shown.

use std::fmt;
use std::str::FromStr;

/// Indentation unit written by reflow for each nesting level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Indent {
    /// One tab per level
    #[default]
    Tab,
    /// A fixed number of spaces per level
    Spaces(usize),
}

impl Indent {
    /// The whitespace written for a single level
    pub fn unit(&self) -> String {
        match self {
            Indent::Tab => "\t".to_string(),
            Indent::Spaces(n) => " ".repeat(*n),
        }
    }
}

impl fmt::Display for Indent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Indent::Tab => write!(f, "tab"),
            Indent::Spaces(n) => write!(f, "spaces:{}", n),
        }
    }
}

impl FromStr for Indent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        if lower == "tab" || lower == "tabs" {
            return Ok(Indent::Tab);
        }
        match lower.strip_prefix("spaces:") {
            Some(count) => count
                .parse()
                .map(Indent::Spaces)
                .map_err(|_| format!("Invalid space count: {}", count)),
            None => Err(format!("Unknown indent style: {}", s)),
        }
    }
}

/// Configuration for a generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub indent: Indent,
    /// Emitted as `skinparam <param>` right after `@startuml`
    pub skin_params: Vec<String>,
    pub class_file: String,
    pub composition_file: String,
    pub state_machine_file: String,
    /// Append `[guard]` to transition labels. Off by default: guards are
    /// not part of the generated state machine diagrams.
    pub render_guards: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            indent: Indent::Tab,
            skin_params: vec!["componentstyle uml2".to_string()],
            class_file: "class.puml".to_string(),
            composition_file: "composition.puml".to_string(),
            state_machine_file: "statemachine.puml".to_string(),
            render_guards: false,
        }
    }
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_skin_params<I, S>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skin_params = params.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_render_guards(mut self, render_guards: bool) -> Self {
        self.render_guards = render_guards;
        self
    }
}
