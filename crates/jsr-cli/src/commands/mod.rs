//! Command implementations and dispatch logic.
//!
//! Each command module exposes `run`, which fetches and filters data and
//! returns it, and `execute`, which prints the result through the context's
//! output handler.

use std::time::Duration;

use camino::Utf8PathBuf;
use jsr_config::{ConfigLoader, RegistrySection};
use jsr_core::error::{JsrError, JsrResult};
use jsr_registry::client::default_client_builder;
use jsr_registry::{ClientOptions, RegistryClient};
use reqwest::header::{HeaderName, HeaderValue};
use tracing::info;

pub mod deps;
pub mod files;
pub mod info;
pub mod meta;


use crate::{output::OutputHandler, Commands};

/// Shared context for all commands
pub struct CommandContext {
    pub client: RegistryClient,
    pub output: OutputHandler,
}

impl CommandContext {
    /// Create a context around an existing client
    pub fn new(client: RegistryClient) -> Self {
        Self {
            client,
            output: OutputHandler::new(),
        }
    }

    /// Resolve settings from jsr.toml files, the environment and `overrides`
    pub async fn from_env(overrides: RegistrySection) -> JsrResult<Self> {
        let cwd = std::env::current_dir()
            .map_err(|e| JsrError::io("Failed to get current directory".to_string(), e))?;
        let cwd = Utf8PathBuf::try_from(cwd).map_err(|e| {
            JsrError::invalid_config("cwd", format!("Current directory is not UTF-8: {}", e))
        })?;

        let settings = ConfigLoader::new(cwd).load(overrides).await?;
        let client = build_client(&settings)?;

        Ok(Self::new(client))
    }
}

/// Build a registry client from resolved settings
pub fn build_client(settings: &RegistrySection) -> JsrResult<RegistryClient> {
    let mut builder = default_client_builder();
    if let Some(timeout) = settings.timeout_secs {
        builder = builder.timeout(Duration::from_secs(timeout));
    }
    if let Some(user_agent) = &settings.user_agent {
        builder = builder.user_agent(user_agent.clone());
    }
    let http_client = builder.build().map_err(|e| {
        JsrError::invalid_config("http_client", format!("Failed to create HTTP client: {}", e))
    })?;

    let mut options = ClientOptions::default().http_client(http_client);
    if let Some(protocol) = settings.protocol {
        options = options.protocol(protocol);
    }
    if let Some(hostname) = &settings.hostname {
        options = options.hostname(hostname.clone());
    }

    if !settings.headers.is_empty() {
        let headers = parse_headers(settings)?;
        options = options.middleware(move |request| {
            for (name, value) in &headers {
                request.headers_mut().insert(name.clone(), value.clone());
            }
        });
    }

    RegistryClient::with_options(options)
}

fn parse_headers(settings: &RegistrySection) -> JsrResult<Vec<(HeaderName, HeaderValue)>> {
    settings
        .headers
        .iter()
        .map(|(name, value)| {
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                JsrError::invalid_config("registry.headers", format!("'{}': {}", name, e))
            })?;
            let header_value = HeaderValue::from_str(value).map_err(|e| {
                JsrError::invalid_config("registry.headers", format!("'{}': {}", name, e))
            })?;
            Ok((header_name, header_value))
        })
        .collect()
}

/// Dispatch a command to its handler
pub async fn dispatch_command(command: Commands, ctx: &CommandContext) -> JsrResult<()> {
    match command {
        Commands::Meta {
            package,
            yanked,
            unyanked,
        } => {
            info!("Fetching metadata for {}", package);
            meta::execute(&package, meta::VersionFilter::from_flags(yanked, unyanked), ctx).await
        }
        Commands::Files {
            package,
            hidden,
            visible,
        } => {
            info!("Listing files of {}", package);
            files::execute(&package, files::FileFilter::from_flags(hidden, visible), ctx).await
        }
        Commands::Deps {
            package,
            module,
            kind,
            dependency_type,
        } => {
            info!("Reading module graph of {}", package);
            let query = deps::DepsQuery {
                module,
                kind: kind.map(Into::into),
                dependency_type: dependency_type.map(Into::into),
            };
            deps::execute(&package, &query, ctx).await
        }
        Commands::Info { package } => {
            info!("Summarizing {}", package);
            info::execute(&package, ctx).await
        }
    }
}
