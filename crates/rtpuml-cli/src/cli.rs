//! Command-line interface for the rtpuml utility
//!
//! Provides a CLI to generate PlantUML diagrams from a JSON-serialized
//! UML-RT model.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use rtpuml::core::logging::init_logging;
use rtpuml::model::Model;
use rtpuml::plugins::Generator;
use rtpuml::{reflow, FileSink, GeneratorConfig, Indent, QualifiedNames};

/// rtpuml - Generate PlantUML diagrams from UML-RT models
#[derive(Parser)]
#[command(name = "rtpuml")]
#[command(about = "Generate PlantUML class, composition and state machine diagrams from UML-RT models")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Set log level (trace|debug|info|warn|error), overrides RTPUML_LOG_LEVEL and RUST_LOG
    #[arg(long, value_enum, global = true)]
    pub log_level: Option<LogLevel>,

    /// Set log format (compact|pretty|json), overrides RTPUML_LOG_FORMAT
    #[arg(long, value_enum, global = true)]
    pub log_format: Option<LogFormat>,
}

impl Cli {
    /// Level and format handed to `init_logging`
    ///
    /// Flags left unset stay `None` so the environment and the library
    /// defaults apply.
    pub fn logging_args(&self) -> (Option<&'static str>, Option<&'static str>) {
        (
            self.log_level.map(|level| level.as_str()),
            self.log_format.map(|format| format.as_str()),
        )
    }
}

/// Log level options
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate all diagrams of a model into a directory
    Generate {
        /// JSON model file (use - for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Output directory, created if missing
        #[arg(short, long)]
        output: PathBuf,

        /// Indent with N spaces instead of tabs
        #[arg(long, value_name = "N")]
        indent_spaces: Option<usize>,

        /// Append transition guards to state machine labels
        #[arg(long)]
        render_guards: bool,

        /// Skin parameter line, repeatable (replaces the default preamble)
        #[arg(long = "skin-param", value_name = "P")]
        skin_params: Vec<String>,
    },

    /// Re-indent existing diagram source by brace depth
    Reflow {
        /// Input file (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file (use - for stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Indent with N spaces instead of tabs
        #[arg(long, value_name = "N")]
        indent_spaces: Option<usize>,
    },

    /// Show the token resolved for every port and state
    Names {
        /// JSON model file (use - for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Show in JSON format
        #[arg(long)]
        json: bool,
    },
}

fn indent_of(indent_spaces: Option<usize>) -> Indent {
    match indent_spaces {
        Some(n) => Indent::Spaces(n),
        None => Indent::Tab,
    }
}

fn is_stdio(path: &Path) -> bool {
    path.to_string_lossy() == "-"
}

/// Main CLI application
#[derive(Default)]
pub struct RtpumlApp;

impl RtpumlApp {
    pub fn new() -> Self {
        Self
    }

    /// Run the application with the given CLI arguments
    pub fn run(&self, cli: Cli) -> Result<()> {
        let (log_level, log_format) = cli.logging_args();
        if let Err(e) = init_logging(log_level, log_format) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }

        if cli.verbose {
            eprintln!("rtpuml v{}", env!("CARGO_PKG_VERSION"));
        }

        match cli.command {
            Commands::Generate {
                input,
                output,
                indent_spaces,
                render_guards,
                skin_params,
            } => {
                let mut config = GeneratorConfig::default()
                    .with_indent(indent_of(indent_spaces))
                    .with_render_guards(render_guards);
                if !skin_params.is_empty() {
                    config = config.with_skin_params(skin_params);
                }
                let emitted = self.generate_command(&input, &output, config)?;
                if !emitted {
                    println!("Model declares no capsules, nothing generated");
                } else if cli.verbose {
                    eprintln!("Diagrams written to {}", output.display());
                }
                Ok(())
            }
            Commands::Reflow {
                input,
                output,
                indent_spaces,
            } => self.reflow_command(input, output, indent_of(indent_spaces)),
            Commands::Names { input, json } => {
                let table = self.names_command(&input, json)?;
                self.write_output(None, &table)
            }
        }
    }

    /// Handle the generate command
    ///
    /// Returns whether any document was written.
    pub fn generate_command(
        &self,
        input: &Path,
        output: &Path,
        config: GeneratorConfig,
    ) -> Result<bool> {
        let model = self.load_model(input)?;
        let mut sink = FileSink::create(output)
            .with_context(|| format!("Cannot prepare output directory '{}'", output.display()))?;
        let names = QualifiedNames::resolve(&model);
        debug!(tokens = names.len(), "Resolved names");

        let emitted = Generator::with_config(config)
            .generate(&model, &names, &mut sink)
            .with_context(|| format!("Failed to generate diagrams for model '{}'", model.name))?;
        info!(emitted, output = %output.display(), "Generation finished");
        Ok(emitted)
    }

    /// Handle the reflow command
    pub fn reflow_command(
        &self,
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        indent: Indent,
    ) -> Result<()> {
        let content = self.read_input(input)?;
        let reflowed = reflow(&content, indent).context("Cannot reflow input")?;
        self.write_output(output, &reflowed)
    }

    /// Handle the names command, returning the rendered table
    pub fn names_command(&self, input: &Path, json: bool) -> Result<String> {
        let model = self.load_model(input)?;
        let names = QualifiedNames::resolve(&model);

        if json {
            let map: serde_json::Map<String, serde_json::Value> = names
                .entries()
                .into_iter()
                .map(|(id, token)| (id.to_string(), serde_json::Value::from(token)))
                .collect();
            Ok(serde_json::to_string_pretty(&map)?)
        } else {
            let width = names
                .entries()
                .iter()
                .map(|(_, token)| token.len())
                .max()
                .unwrap_or(0);
            Ok(names
                .entries()
                .into_iter()
                .map(|(id, token)| format!("{:width$}  {}", token, id, width = width))
                .collect::<Vec<_>>()
                .join("\n"))
        }
    }

    fn load_model(&self, input: &Path) -> Result<Model> {
        let content = self.read_input(Some(input.to_path_buf()))?;
        Model::from_json(&content)
            .with_context(|| format!("Failed to load model from '{}'", input.display()))
    }

    /// Read input from file or stdin
    pub fn read_input(&self, input: Option<PathBuf>) -> Result<String> {
        match input {
            Some(path) if !is_stdio(&path) => fs::read_to_string(&path)
                .with_context(|| format!("Failed to read input file '{}'", path.display())),
            _ => {
                let mut content = String::new();
                io::stdin()
                    .read_to_string(&mut content)
                    .context("Failed to read standard input")?;
                Ok(content)
            }
        }
    }

    /// Write output to file or stdout
    pub fn write_output(&self, output: Option<PathBuf>, content: &str) -> Result<()> {
        let terminated = if content.is_empty() || content.ends_with('\n') {
            content.to_string()
        } else {
            format!("{}\n", content)
        };

        match output {
            Some(path) if !is_stdio(&path) => fs::write(&path, terminated)
                .with_context(|| format!("Failed to write output file '{}'", path.display())),
            _ => {
                let mut stdout = io::stdout();
                stdout.write_all(terminated.as_bytes())?;
                stdout.flush()?;
                Ok(())
            }
        }
    }
}
