//! Package references in `@scope/name[@version]` form.

use std::fmt;
use std::str::FromStr;

use crate::error::{JsrError, JsrResult};

/// Characters with URL meaning that never appear in scopes, names or versions
const RESERVED_CHARS: [char; 5] = ['/', '\\', '?', '#', '%'];

/// A reference to a package, optionally pinned to one version
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageRef {
    pub scope: String,
    pub name: String,
    pub version: Option<String>,
}

impl PackageRef {
    /// Create a reference to a package without a version
    pub fn new(scope: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            scope: scope.into(),
            name: name.into(),
            version: None,
        }
    }

    /// Pin this reference to a version
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Version, or an error naming the missing piece
    pub fn require_version(&self) -> JsrResult<&str> {
        self.version.as_deref().ok_or_else(|| {
            JsrError::invalid_argument(
                "version",
                format!("'{}' does not name a version (expected @scope/name@version)", self),
            )
        })
    }

    /// Check that a scope, name or version segment is usable in a registry path
    ///
    /// Rejects dot segments and characters a URL would read as path, query,
    /// fragment or escape syntax.
    pub fn validate_segment(field: &str, value: &str) -> JsrResult<()> {
        if value.is_empty() {
            return Err(JsrError::invalid_argument(field, "must not be empty"));
        }
        if value == "." || value == ".." {
            return Err(JsrError::invalid_argument(
                field,
                format!("'{}' is not a valid path segment", value),
            ));
        }
        if let Some(c) = value
            .chars()
            .find(|c| RESERVED_CHARS.contains(c) || c.is_whitespace() || c.is_control())
        {
            return Err(JsrError::invalid_argument(
                field,
                format!("'{}' must not contain {:?}", value, c),
            ));
        }
        Ok(())
    }
}

impl fmt::Display for PackageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}/{}", self.scope, self.name)?;
        if let Some(version) = &self.version {
            write!(f, "@{}", version)?;
        }
        Ok(())
    }
}

impl FromStr for PackageRef {
    type Err = JsrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rest = s.strip_prefix('@').ok_or_else(|| {
            JsrError::invalid_argument("package", format!("'{}' must start with '@'", s))
        })?;
        let (scope, rest) = rest.split_once('/').ok_or_else(|| {
            JsrError::invalid_argument("package", format!("'{}' is missing '/name'", s))
        })?;
        let (name, version) = match rest.split_once('@') {
            Some((name, version)) => (name, Some(version)),
            None => (rest, None),
        };

        Self::validate_segment("scope", scope)?;
        Self::validate_segment("name", name)?;
        if let Some(version) = version {
            Self::validate_segment("version", version)?;
        }

        Ok(Self {
            scope: scope.to_string(),
            name: name.to_string(),
            version: version.map(str::to_string),
        })
    }
}
