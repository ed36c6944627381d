//! CLI command definitions and execution
//!
//! This module contains all CLI commands and their implementations.
//! Every command loads the config fresh from disk; nothing is cached between runs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pasta_core::{ConfigManager, Target, TargetManager};
use pasta_s3::S3Client;

use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig};

mod copy;
mod login;
mod paste;
mod target;
mod targets;

/// Name of the object holding the clipboard inside a target's bucket
pub const CLIPBOARD_OBJECT: &str = "default-object";

/// copy-pasta - a clipboard shared through S3
///
/// Pipe text in to copy it, run `copy-pasta paste` anywhere to get it back.
#[derive(Parser, Debug)]
#[command(name = "copy-pasta")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format: human-readable or JSON
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true, default_value = "false")]
    pub no_color: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, default_value = "false")]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, global = true, default_value = "false")]
    pub debug: bool,

    /// Config file (default: ~/.copy-pastarc)
    #[arg(long, global = true, env = "COPY_PASTA_CONFIG")]
    pub config: Option<PathBuf>,

    /// S3-compatible endpoint URL (default: AWS S3)
    #[arg(long, global = true, env = "COPY_PASTA_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Region used for requests and as the location of new buckets
    #[arg(long, global = true, env = "COPY_PASTA_REGION", default_value = "us-east-1")]
    pub region: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Copy stdin to the clipboard (default)
    Copy(copy::CopyArgs),

    /// Print the clipboard to stdout
    Paste(paste::PasteArgs),

    /// Register a target and make it current
    Login(login::LoginArgs),

    /// Change the current target to an existing one
    Target(target::TargetArgs),

    /// List configured targets
    Targets,
}

/// Settings shared by every command
#[derive(Debug, Clone)]
pub struct Context {
    pub output: OutputConfig,
    pub config: Option<PathBuf>,
    pub endpoint: Option<String>,
    pub region: String,
}

impl Context {
    /// Formatter honoring the output flags
    pub fn formatter(&self) -> Formatter {
        Formatter::new(self.output.clone())
    }

    /// Target manager over the selected config file
    pub fn target_manager(&self) -> pasta_core::Result<TargetManager> {
        match &self.config {
            Some(path) => Ok(TargetManager::with_config_manager(ConfigManager::with_path(
                path.clone(),
            ))),
            None => TargetManager::new(),
        }
    }

    /// Object-store client bound to `target`
    pub async fn connect(&self, target: &Target) -> pasta_core::Result<S3Client> {
        S3Client::new(target, self.endpoint.as_deref(), &self.region).await
    }
}

/// Execute the CLI command and return an exit code
pub async fn execute(cli: Cli) -> ExitCode {
    let ctx = Context {
        output: OutputConfig {
            json: cli.json,
            no_color: cli.no_color,
            quiet: cli.quiet,
        },
        config: cli.config,
        endpoint: cli.endpoint,
        region: cli.region,
    };

    match cli.command {
        None => copy::execute(copy::CopyArgs::default(), &ctx).await,
        Some(Commands::Copy(args)) => copy::execute(args, &ctx).await,
        Some(Commands::Paste(args)) => paste::execute(args, &ctx).await,
        Some(Commands::Login(args)) => login::execute(args, &ctx),
        Some(Commands::Target(args)) => target::execute(args, &ctx),
        Some(Commands::Targets) => targets::execute(&ctx),
    }
}

/// Report `error` and return the matching exit code
pub(crate) fn fail(formatter: &Formatter, context: &str, error: &pasta_core::Error) -> ExitCode {
    formatter.error(&format!("{context}: {error}"));
    ExitCode::from_error(error)
}
