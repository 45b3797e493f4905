//! jsr.toml configuration parsing and serialization

use std::collections::BTreeMap;

use camino::Utf8Path;
use jsr_core::error::JsrError;
use jsr_core::types::Protocol;
use serde::{Deserialize, Serialize};

use crate::ConfigResult;

/// Complete jsr.toml configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsrToml {
    /// Registry connection settings
    #[serde(default)]
    pub registry: RegistrySection,
}

/// `[registry]` section; every field is optional so sections can be layered
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct RegistrySection {
    /// Registry host, optionally with a port (`jsr.io`, `localhost:8000`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,

    /// `https` or `http`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<Protocol>,

    /// Whole-request timeout of the HTTP transport
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    /// User-Agent sent with every request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,

    /// Extra headers added to every request
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,
}

impl RegistrySection {
    /// Overlay `other` onto `self`: set fields in `other` win, headers merge
    pub fn merge_from(&mut self, other: RegistrySection) {
        if other.hostname.is_some() {
            self.hostname = other.hostname;
        }
        if other.protocol.is_some() {
            self.protocol = other.protocol;
        }
        if other.timeout_secs.is_some() {
            self.timeout_secs = other.timeout_secs;
        }
        if other.user_agent.is_some() {
            self.user_agent = other.user_agent;
        }
        self.headers.extend(other.headers);
    }
}

/// Parse jsr.toml content; `origin` names the source in error messages
pub fn parse_jsr_toml(content: &str, origin: &str) -> ConfigResult<JsrToml> {
    let config: JsrToml = ::toml::from_str(content).map_err(|e| {
        let (line, column) = e
            .span()
            .map(|span| line_column(content, span.start))
            .unwrap_or((0, 0));
        JsrError::ConfigParse {
            path: origin.to_string(),
            message: e.message().to_string(),
            line,
            column,
        }
    })?;

    validate_config(&config)?;

    Ok(config)
}

/// Serialize configuration back to TOML
pub fn serialize_jsr_toml(config: &JsrToml) -> ConfigResult<String> {
    ::toml::to_string_pretty(config).map_err(|e| {
        JsrError::invalid_config("jsr.toml", format!("Failed to serialize: {}", e))
    })
}

/// Validate values serde cannot check on its own
pub fn validate_config(config: &JsrToml) -> ConfigResult<()> {
    let registry = &config.registry;

    if registry.timeout_secs == Some(0) {
        return Err(JsrError::invalid_config(
            "registry.timeout-secs",
            "must be greater than zero",
        ));
    }

    if let Some(user_agent) = &registry.user_agent {
        if !is_valid_header_value(user_agent) {
            return Err(JsrError::invalid_config(
                "registry.user-agent",
                "must be printable ASCII",
            ));
        }
    }

    for (name, value) in &registry.headers {
        if !is_valid_header_name(name) {
            return Err(JsrError::invalid_config(
                "registry.headers",
                format!("'{}' is not a valid header name", name),
            ));
        }
        if !is_valid_header_value(value) {
            return Err(JsrError::invalid_config(
                "registry.headers",
                format!("value of '{}' must be printable ASCII", name),
            ));
        }
    }

    Ok(())
}

/// Load and parse jsr.toml from file path
pub async fn load_from_file(path: &Utf8Path) -> ConfigResult<JsrToml> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| JsrError::io(format!("Failed to read {}", path), e))?;

    parse_jsr_toml(&content, path.as_str())
}

/// RFC 7230 token characters
fn is_valid_header_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b"!#$%&'*+-.^_`|~".contains(&b))
}

fn is_valid_header_value(value: &str) -> bool {
    value.bytes().all(|b| b == b'\t' || (b' '..=b'~').contains(&b))
}

/// 1-based line and column of a byte offset
fn line_column(content: &str, offset: usize) -> (usize, usize) {
    let before = &content[..offset.min(content.len())];
    let line = before.matches('\n').count() + 1;
    let column = before.rfind('\n').map_or(before.len(), |i| before.len() - i - 1) + 1;
    (line, column)
}
