//! HTTP client for the JSR registry API

use reqwest::header::{HeaderValue, ACCEPT};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use jsr_core::error::JsrError;
use jsr_core::types::PackageRef;

use crate::api::{self, Package, PackageMeta};
use crate::RegistryResult;

mod config;

pub use config::{
    default_client_builder, validate_hostname, ClientConfig, ClientOptions, Middleware,
    DEFAULT_HOSTNAME,
};

/// Client for one JSR registry host
///
/// Holds only its immutable configuration, so clones can be shared freely
/// between tasks.
#[derive(Debug, Clone)]
pub struct RegistryClient {
    config: ClientConfig,
}

impl RegistryClient {
    /// Create a client for `https://jsr.io` with the default transport
    pub fn new() -> RegistryResult<Self> {
        Self::with_options(ClientOptions::default())
    }

    /// Create a client from caller overrides
    ///
    /// Fails with `InvalidConfig` when the hostname does not validate; no
    /// request is made in that case.
    pub fn with_options(options: ClientOptions) -> RegistryResult<Self> {
        let config = ClientConfig::from_options(options)?;
        debug!(base_url = %config.base_url(), "created registry client");
        Ok(Self { config })
    }

    /// Resolved configuration of this client
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// `{protocol}://{hostname}` requests are sent to
    pub fn base_url(&self) -> String {
        self.config.base_url()
    }

    /// Fetch the metadata document of `@scope/name`
    pub async fn fetch_package_meta(&self, scope: &str, name: &str) -> RegistryResult<PackageMeta> {
        PackageRef::validate_segment("scope", scope)?;
        PackageRef::validate_segment("name", name)?;

        self.get_json(&api::meta_segments(scope, name)).await
    }

    /// Fetch the file manifest and module graph of `@scope/name@version`
    pub async fn fetch_package(
        &self,
        scope: &str,
        name: &str,
        version: &str,
    ) -> RegistryResult<Package> {
        PackageRef::validate_segment("scope", scope)?;
        PackageRef::validate_segment("name", name)?;
        PackageRef::validate_segment("version", version)?;

        self.get_json(&api::package_segments(scope, name, version)).await
    }

    /// Fetch metadata for a parsed package reference; its version is ignored
    pub async fn fetch_package_meta_ref(&self, package: &PackageRef) -> RegistryResult<PackageMeta> {
        self.fetch_package_meta(&package.scope, &package.name).await
    }

    /// Fetch the descriptor for a parsed reference, which must name a version
    pub async fn fetch_package_ref(&self, package: &PackageRef) -> RegistryResult<Package> {
        let version = package.require_version()?;
        self.fetch_package(&package.scope, &package.name, version).await
    }

    /// Send a GET for the endpoint at `segments` and decode the JSON body into `T`
    async fn get_json<T: DeserializeOwned>(&self, segments: &[String]) -> RegistryResult<T> {
        let url = self.endpoint_url(segments)?;

        let mut request = self
            .config
            .http_client
            .get(url.clone())
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .build()
            .map_err(|e| JsrError::request(url.as_str(), format!("Failed to build request: {}", e), e))?;

        if let Some(middleware) = &self.config.middleware {
            middleware(&mut request);
        }

        debug!(method = %request.method(), url = %request.url(), "sending registry request");

        let response = self
            .config
            .http_client
            .execute(request)
            .await
            .map_err(|e| JsrError::request(url.as_str(), format!("Failed to send request: {}", e), e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| JsrError::request(url.as_str(), format!("Failed to read response body: {}", e), e))?;

        debug!(url = %url, status = status.as_u16(), bytes = body.len(), "registry responded");

        if !status.is_success() {
            warn!(url = %url, status = status.as_u16(), "registry returned non-success status");
            return Err(JsrError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| JsrError::Decode {
            url: url.to_string(),
            message: e.to_string(),
            source: e,
        })
    }

    /// Base URL with `segments` appended, each percent-encoded
    fn endpoint_url(&self, segments: &[String]) -> RegistryResult<Url> {
        let base = self.base_url();
        let mut url = Url::parse(&base).map_err(|e| {
            JsrError::invalid_argument("url", format!("'{}' is not a valid URL: {}", base, e))
        })?;
        url.path_segments_mut()
            .map_err(|_| {
                JsrError::invalid_argument("url", format!("'{}' cannot be a base URL", base))
            })?
            .clear()
            .extend(segments);
        Ok(url)
    }
}
