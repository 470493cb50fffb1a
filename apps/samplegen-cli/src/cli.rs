//! CLI argument parsing.
//!
//! Defines the command-line interface for samplegen using clap.
//! Supports five subcommands: `list`, `show`, `generate`, `check`, and
//! `models`.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use samplegen_core::{AuthMode, Capability, DEFAULT_CONFIG_FILE, Language, SampleQuery};

use crate::app::App;

/// samplegen - code sample generator for the OpenAI v1 API surface
#[derive(Parser)]
#[command(name = "samplegen")]
#[command(
    author,
    version,
    about = "Generate runnable API code samples from builtin templates"
)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    command: Commands,

    /// Path to the configuration file.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Directory of custom templates layered over the builtin set.
    #[arg(long, global = true, value_name = "DIR")]
    templates: Option<PathBuf>,
}

/// Available samplegen commands.
#[derive(Subcommand)]
pub enum Commands {
    /// List available samples.
    List {
        #[command(flatten)]
        select: SelectArgs,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show one sample's metadata and template, or its rendered source.
    Show {
        /// Sample id (e.g. "python-chat-completion-key-auth") or
        /// language/capability/auth-mode path.
        target: String,

        /// Print the rendered source instead of the metadata.
        #[arg(long)]
        rendered: bool,

        /// Output metadata as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Render samples and write them to the output directory.
    Generate {
        #[command(flatten)]
        select: SelectArgs,

        #[command(flatten)]
        values: ValueArgs,

        /// Output directory (defaults to the configured one).
        #[arg(long, short = 'o', value_name = "DIR")]
        out: Option<PathBuf>,
    },

    /// Render and verify samples without writing any files.
    Check {
        #[command(flatten)]
        select: SelectArgs,

        #[command(flatten)]
        values: ValueArgs,
    },

    /// List deployable models and their capabilities.
    Models {
        /// Only models supporting this capability.
        #[arg(long)]
        capability: Option<Capability>,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },
}

/// Filters narrowing which samples a command operates on.
#[derive(Args)]
pub struct SelectArgs {
    /// Only samples for this language (e.g. "python", "go").
    #[arg(long)]
    pub language: Option<Language>,

    /// Only samples for this capability (e.g. "chat-completion").
    #[arg(long)]
    pub capability: Option<Capability>,

    /// Only samples for this auth mode ("key" or "entra").
    #[arg(long)]
    pub auth: Option<AuthMode>,

    /// Only samples carrying this tag.
    #[arg(long)]
    pub tag: Option<String>,
}

impl SelectArgs {
    pub fn into_query(self) -> SampleQuery {
        SampleQuery {
            language: self.language,
            capability: self.capability,
            auth_mode: self.auth,
            tag: self.tag,
            ..SampleQuery::default()
        }
    }
}

/// Substitution values applied when rendering.
#[derive(Args)]
pub struct ValueArgs {
    /// Substitution value as NAME=VALUE; may be repeated.
    #[arg(long = "set", value_name = "NAME=VALUE")]
    pub set: Vec<String>,

    /// Fail on any placeholder not covered by config or --set instead of
    /// filling in stand-in values.
    #[arg(long)]
    pub no_defaults: bool,
}

impl Cli {
    /// Executes the parsed CLI command.
    pub fn run(self) -> Result<()> {
        let app = App::new(&self.config, self.templates.as_deref())?;

        match self.command {
            Commands::List { select, json } => app.list(&select.into_query(), json),
            Commands::Show {
                target,
                rendered,
                json,
            } => app.show(&target, rendered, json),
            Commands::Generate {
                select,
                values,
                out,
            } => app.generate(&select.into_query(), &values, out),
            Commands::Check { select, values } => app.check(&select.into_query(), &values),
            Commands::Models { capability, json } => app.models(capability, json),
        }
    }
}
