//! Client configuration: caller overrides merged over defaults

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use jsr_core::error::JsrError;
use jsr_core::types::Protocol;
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::{Client, ClientBuilder, Request};

use crate::RegistryResult;

/// Registry used when no hostname is configured
pub const DEFAULT_HOSTNAME: &str = "jsr.io";

/// Hook run on every outgoing request before it is sent
pub type Middleware = Arc<dyn Fn(&mut Request) + Send + Sync>;

static HOSTNAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^([a-zA-Z0-9]([a-zA-Z0-9-]*[a-zA-Z0-9])?(\.[a-zA-Z0-9]([a-zA-Z0-9-]*[a-zA-Z0-9])?)*)?(:(?P<port>[0-9]{1,5}))?$",
    )
    .expect("hostname pattern is valid")
});

/// Caller-supplied overrides; every `None` field falls back to its default
#[derive(Clone, Default)]
pub struct ClientOptions {
    pub protocol: Option<Protocol>,
    pub hostname: Option<String>,
    pub http_client: Option<Client>,
    pub middleware: Option<Middleware>,
}

/// Resolved, validated configuration owned by a `RegistryClient`
#[derive(Clone)]
pub struct ClientConfig {
    pub protocol: Protocol,
    pub hostname: String,
    pub http_client: Client,
    pub middleware: Option<Middleware>,
}

impl ClientOptions {
    pub fn protocol(mut self, protocol: Protocol) -> Self {
        self.protocol = Some(protocol);
        self
    }

    pub fn hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = Some(hostname.into());
        self
    }

    pub fn http_client(mut self, http_client: Client) -> Self {
        self.http_client = Some(http_client);
        self
    }

    pub fn middleware<F>(mut self, middleware: F) -> Self
    where
        F: Fn(&mut Request) + Send + Sync + 'static,
    {
        self.middleware = Some(Arc::new(middleware));
        self
    }
}

impl ClientConfig {
    /// Merge `options` over the defaults and validate the result
    ///
    /// An empty hostname counts as unset and falls back to [`DEFAULT_HOSTNAME`].
    pub fn from_options(options: ClientOptions) -> RegistryResult<Self> {
        let protocol = options.protocol.unwrap_or_default();

        let hostname = match options.hostname {
            Some(hostname) if !hostname.is_empty() => hostname,
            _ => DEFAULT_HOSTNAME.to_string(),
        };
        validate_hostname(&hostname)?;

        let http_client = match options.http_client {
            Some(client) => client,
            None => default_http_client()?,
        };

        Ok(Self {
            protocol,
            hostname,
            http_client,
            middleware: options.middleware,
        })
    }

    /// `{protocol}://{hostname}` without a trailing slash
    pub fn base_url(&self) -> String {
        format!("{}://{}", self.protocol.scheme(), self.hostname)
    }
}

/// Check `hostname` against the `host[:port]` grammar
///
/// Labels are alphanumeric with inner hyphens, separated by single dots. The
/// port, when present, must fit in 16 bits and follow a host. The empty
/// string is accepted.
pub fn validate_hostname(hostname: &str) -> RegistryResult<()> {
    if hostname.starts_with(':') {
        return Err(JsrError::invalid_config(
            "hostname",
            format!("'{}' has a port but no host", hostname),
        ));
    }


    let captures = HOSTNAME_PATTERN.captures(hostname).ok_or_else(|| {
        JsrError::invalid_config(
            "hostname",
            format!("'{}' is not a valid hostname[:port]", hostname),
        )
    })?;

    if let Some(port) = captures.name("port") {
        if port.as_str().parse::<u16>().is_err() {
            return Err(JsrError::invalid_config(
                "hostname",
                format!("port {} in '{}' is out of range", port.as_str(), hostname),
            ));
        }
    }

    Ok(())
}

/// Transport builder with the defaults used when no client is supplied
pub fn default_client_builder() -> ClientBuilder {
    ClientBuilder::new()
        // Connection pooling configuration
        .pool_max_idle_per_host(50)
        .pool_idle_timeout(Duration::from_secs(90))
        // Request timeout
        .timeout(Duration::from_secs(30))
        .gzip(true)
        .user_agent(concat!("jsr-rs/", env!("CARGO_PKG_VERSION")))
}

fn default_http_client() -> RegistryResult<Client> {
    default_client_builder().build().map_err(|e| {
        JsrError::invalid_config("http_client", format!("Failed to create HTTP client: {}", e))
    })
}

impl fmt::Debug for ClientOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientOptions")
            .field("protocol", &self.protocol)
            .field("hostname", &self.hostname)
            .field("http_client", &self.http_client.is_some())
            .field("middleware", &self.middleware.is_some())
            .finish()
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("protocol", &self.protocol)
            .field("hostname", &self.hostname)
            .field("middleware", &self.middleware.is_some())
            .finish_non_exhaustive()
    }
}
