//! # jsr-cli
//!
//! Command-line client for the JSR package registry.
//!
//! Handles argument parsing, sets up logging, resolves registry settings from
//! `jsr.toml`, the environment and flags, and dispatches to the command
//! handlers. Query results are printed to stdout as JSON.

use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};
use jsr_core::error::JsrResult;
use jsr_core::types::{PackageRef, Protocol};
use jsr_registry::api::{DependencyKind, DependencyType};
use tracing::{debug, error};

mod commands;
mod output;

use commands::CommandContext;
use output::OutputHandler;

/// Query package metadata, files and module graphs on a JSR registry
#[derive(Parser)]
#[command(name = "jsr", version, about = "Query the JSR package registry")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub registry: RegistryArgs,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Registry overrides; they take priority over jsr.toml and the environment
#[derive(Args, Debug, Default)]
pub struct RegistryArgs {
    /// Registry host, optionally with a port
    #[arg(long, global = true, value_name = "HOST[:PORT]")]
    pub hostname: Option<String>,

    /// Talk to the registry over plain HTTP
    #[arg(long, global = true)]
    pub http: bool,

    /// Request timeout in seconds
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show a package's versions
    Meta {
        /// Package as @scope/name
        package: PackageRef,
        /// Only yanked versions
        #[arg(long, conflicts_with = "unyanked")]
        yanked: bool,
        /// Only versions that are not yanked
        #[arg(long)]
        unyanked: bool,
    },
    /// List the files of a package version
    Files {
        /// Package as @scope/name@version
        package: PackageRef,
        /// Only hidden files (name starts with '.' or '_')
        #[arg(long, conflicts_with = "visible")]
        hidden: bool,
        /// Only files that are not hidden
        #[arg(long)]
        visible: bool,
    },
    /// Show the module graph of a package version
    Deps {
        /// Package as @scope/name@version
        package: PackageRef,
        /// Only this module, e.g. /mod.ts
        #[arg(long)]
        module: Option<String>,
        /// Only imports or only exports
        #[arg(long, value_enum)]
        kind: Option<KindArg>,
        /// Only static or only dynamic dependencies
        #[arg(long = "type", value_enum)]
        dependency_type: Option<TypeArg>,
    },
    /// Summarize a package version
    Info {
        /// Package as @scope/name@version
        package: PackageRef,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Import,
    Export,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TypeArg {
    Static,
    Dynamic,
}

impl From<KindArg> for DependencyKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Import => DependencyKind::Import,
            KindArg::Export => DependencyKind::Export,
        }
    }
}

impl From<TypeArg> for DependencyType {
    fn from(dependency_type: TypeArg) -> Self {
        match dependency_type {
            TypeArg::Static => DependencyType::Static,
            TypeArg::Dynamic => DependencyType::Dynamic,
        }
    }
}

impl RegistryArgs {
    /// Registry section holding only the flags that were given
    pub fn to_section(&self) -> jsr_config::RegistrySection {
        jsr_config::RegistrySection {
            hostname: self.hostname.clone(),
            protocol: self.http.then_some(Protocol::Http),
            timeout_secs: self.timeout,
            ..Default::default()
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_logging(cli.verbose);
    setup_panic_handler();

    debug!("Starting jsr v{}", env!("CARGO_PKG_VERSION"));

    match run_cli(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            OutputHandler::new().error(&err);
            ExitCode::FAILURE
        }
    }
}

fn run_cli(cli: Cli) -> JsrResult<()> {
    let rt = tokio::runtime::Runtime::new().map_err(|e| {
        jsr_core::error::JsrError::io("Failed to create async runtime".to_string(), e)
    })?;

    rt.block_on(async {
        let ctx = CommandContext::from_env(cli.registry.to_section()).await?;
        commands::dispatch_command(cli.command, &ctx).await
    })
}

fn setup_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "jsr={level},jsr_registry={level},jsr_config={level}"
        ))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn setup_panic_handler() {
    std::panic::set_hook(Box::new(|panic_info| {
        error!("jsr encountered an unexpected error: {}", panic_info);
        eprintln!("jsr crashed! This is a bug.");
        eprintln!("Error: {}", panic_info);
    }));
}
