//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::factory::WorkflowKind;

/// Workflow Factory - run factory-built workflows step by step.
#[derive(Debug, Parser)]
#[command(name = "workflow-factory")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Show per-step timing after each workflow
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only show errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run workflows (default if no command specified)
    Run(RunArgs),

    /// List available workflows and their steps
    List(ListArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `run` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RunArgs {
    /// Workflows to run, in order (comma-separated; default: all)
    #[arg(
        short,
        long,
        value_enum,
        value_delimiter = ',',
        env = "WORKFLOW_FACTORY_WORKFLOWS"
    )]
    pub workflow: Vec<WorkflowKind>,
}

impl RunArgs {
    /// Workflows to run, falling back to all built-ins in default order.
    pub fn selected(&self) -> Vec<WorkflowKind> {
        if self.workflow.is_empty() {
            WorkflowKind::ALL.to_vec()
        } else {
            self.workflow.clone()
        }
    }
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
