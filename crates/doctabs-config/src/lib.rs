//! Configuration for the documentation-site tooling.
//!
//! Parses `doctabs.toml` with serde and provides auto-discovery of the config
//! file in parent directories. The file carries the two endpoint URLs the
//! example snippets are rewritten against:
//!
//! ```toml
//! [endpoints]
//! rest_url = "${DOCS_REST_URL:-http://localhost:8001}"
//! graphql_url = "${DOCS_GRAPHQL_URL:-http://localhost:8000}"
//! ```
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `endpoints.rest_url`
//! - `endpoints.graphql_url`

mod expand;

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "doctabs.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Endpoint configuration.
    pub endpoints: Endpoints,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Configured API endpoints, plus the URLs derived from them.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Endpoints {
    /// REST API base URL.
    pub rest_url: String,
    /// GraphQL API base URL.
    pub graphql_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            rest_url: "http://localhost:8001".to_owned(),
            graphql_url: "http://localhost:8000".to_owned(),
        }
    }
}

impl Endpoints {
    /// GraphQL query endpoint.
    #[must_use]
    pub fn graphql_endpoint(&self) -> String {
        format!("{}/api/graphql", self.graphql_url)
    }

    /// Generated REST API reference (Swagger UI).
    #[must_use]
    pub fn rest_docs_url(&self) -> String {
        format!("{}/api/docs", self.rest_url)
    }

    /// Interactive GraphQL playground the "open" action links to.
    #[must_use]
    pub fn playground_url(&self) -> String {
        format!("{}/graphql", self.graphql_url)
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`endpoints.rest_url`").
        field: String,
        /// Error message (e.g., "`${DOCS_REST_URL}` not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise searches
    /// for `doctabs.toml` in the current directory and parents, falling back
    /// to defaults when none exists.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit `config_path` doesn't exist or parsing,
    /// expansion or validation fails.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            return Self::load_from_file(path);
        }
        if let Some(discovered) = Self::discover_config() {
            return Self::load_from_file(&discovered);
        }
        Ok(Self::default())
    }

    /// Search for the config file in the current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;
        config.normalize();
        config.config_path = Some(path.to_path_buf());
        config.validate()?;

        Ok(config)
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.endpoints.rest_url = expand::expand_env(&self.endpoints.rest_url, "endpoints.rest_url")?;
        self.endpoints.graphql_url =
            expand::expand_env(&self.endpoints.graphql_url, "endpoints.graphql_url")?;
        Ok(())
    }

    /// Strip trailing slashes so derived URLs concatenate cleanly.
    fn normalize(&mut self) {
        let trim = |url: &mut String| {
            while url.ends_with('/') {
                url.pop();
            }
        };
        trim(&mut self.endpoints.rest_url);
        trim(&mut self.endpoints.graphql_url);
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.endpoints.rest_url, "endpoints.rest_url")?;
        require_http_url(&self.endpoints.rest_url, "endpoints.rest_url")?;
        require_non_empty(&self.endpoints.graphql_url, "endpoints.graphql_url")?;
        require_http_url(&self.endpoints.graphql_url, "endpoints.graphql_url")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.endpoints.rest_url, "http://localhost:8001");
        assert_eq!(config.endpoints.graphql_url, "http://localhost:8000");
        assert!(config.config_path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.endpoints, Endpoints::default());
    }

    #[test]
    fn test_parse_endpoints() {
        let toml = r#"
[endpoints]
rest_url = "https://api.shop.dev"
graphql_url = "https://graphql.shop.dev"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.endpoints.rest_url, "https://api.shop.dev");
        assert_eq!(config.endpoints.graphql_url, "https://graphql.shop.dev");
    }

    #[test]
    fn test_derived_urls() {
        let endpoints = Endpoints {
            rest_url: "https://api.shop.dev".to_owned(),
            graphql_url: "https://graphql.shop.dev".to_owned(),
        };
        assert_eq!(
            endpoints.graphql_endpoint(),
            "https://graphql.shop.dev/api/graphql"
        );
        assert_eq!(endpoints.rest_docs_url(), "https://api.shop.dev/api/docs");
        assert_eq!(
            endpoints.playground_url(),
            "https://graphql.shop.dev/graphql"
        );
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[endpoints]\nrest_url = \"https://api.shop.dev/\"\ngraphql_url = \"http://localhost:8000\""
        )
        .unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        // Trailing slash trimmed during load
        assert_eq!(config.endpoints.rest_url, "https://api.shop.dev");
        assert_eq!(config.config_path.as_deref(), Some(file.path()));
    }

    #[test]
    fn test_load_missing_explicit_path() {
        let err = Config::load(Some(Path::new("/nonexistent/doctabs.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_expands_env() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("DOCTABS_CFG_TEST_URL", "https://api.shop.dev");
        }

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[endpoints]\nrest_url = \"${{DOCTABS_CFG_TEST_URL}}\"\ngraphql_url = \"${{DOCTABS_CFG_TEST_GQL:-http://localhost:8000}}\""
        )
        .unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.endpoints.rest_url, "https://api.shop.dev");
        assert_eq!(config.endpoints.graphql_url, "http://localhost:8000");

        unsafe {
            std::env::remove_var("DOCTABS_CFG_TEST_URL");
        }
    }

    #[test]
    fn test_validate_empty_rest_url() {
        let config = Config {
            endpoints: Endpoints {
                rest_url: String::new(),
                ..Endpoints::default()
            },
            config_path: None,
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("endpoints.rest_url"));
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn test_validate_invalid_scheme() {
        let config = Config {
            endpoints: Endpoints {
                graphql_url: "ftp://shop.dev".to_owned(),
                ..Endpoints::default()
            },
            config_path: None,
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("endpoints.graphql_url"));
        assert!(err.to_string().contains("http"));
    }

    #[test]
    fn test_load_rejects_invalid_url() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[endpoints]\nrest_url = \"not-a-url\"").unwrap();

        let err = Config::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_load_rejects_bad_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[endpoints\nrest_url = ").unwrap();

        let err = Config::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
