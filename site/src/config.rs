//! Deployment configuration.
//!
//! Values are layered, lowest precedence first: built-in defaults, an
//! optional `cddf-site.toml`, `CDDF_*` environment variables, then CLI flags
//! (applied by the binary via [`SiteConfig::apply_overrides`]).
//!
//! ```toml
//! repo_url = "https://github.com/example/cddf"
//! logo_src = "/assets/poster.png"
//! ```

use crate::content::{DEFAULT_LOGO_SRC, DEFAULT_REPO_URL, RepoLink};
use crate::error::{Result, SiteError};
use serde::Deserialize;
use std::path::Path;

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "cddf-site.toml";

/// Environment variable overriding [`SiteConfig::repo_url`].
pub const ENV_REPO_URL: &str = "CDDF_REPO_URL";

/// Environment variable overriding [`SiteConfig::logo_src`].
pub const ENV_LOGO_SRC: &str = "CDDF_LOGO_SRC";

/// Values a deployment may change without touching code.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Repository URL used by every GitHub link on the page
    pub repo_url: String,
    /// Path or URL of the logo/poster image
    pub logo_src: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            repo_url: DEFAULT_REPO_URL.to_string(),
            logo_src: DEFAULT_LOGO_SRC.to_string(),
        }
    }
}

impl SiteConfig {
    /// Load config from a specific file. The file must exist.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| SiteError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    /// Load `cddf-site.toml` from `dir`, or defaults if it doesn't exist.
    pub fn load_or_default(dir: &Path) -> Result<Self> {
        let path = dir.join(DEFAULT_CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from_path(&path)
    }

    fn parse(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|source| SiteError::ParseConfig {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply `CDDF_*` variables from the process environment.
    pub fn with_env(self) -> Self {
        self.with_env_from(|key| std::env::var(key).ok())
    }

    /// Apply `CDDF_*` variables from an arbitrary lookup. Empty values are ignored.
    pub fn with_env_from(self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let repo_url = lookup(ENV_REPO_URL).filter(|v| !v.is_empty());
        let logo_src = lookup(ENV_LOGO_SRC).filter(|v| !v.is_empty());
        self.apply_overrides(repo_url, logo_src)
    }

    /// Replace fields that have an explicit override.
    pub fn apply_overrides(mut self, repo_url: Option<String>, logo_src: Option<String>) -> Self {
        if let Some(url) = repo_url {
            self.repo_url = url;
        }
        if let Some(src) = logo_src {
            self.logo_src = src;
        }
        self
    }

    /// The configured repository link.
    pub fn repo_link(&self) -> RepoLink {
        RepoLink::new(self.repo_url.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.repo_url, DEFAULT_REPO_URL);
        assert_eq!(config.logo_src, DEFAULT_LOGO_SRC);
        assert_eq!(config.repo_link().url, DEFAULT_REPO_URL);
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let temp = TempDir::new().expect("temp dir");
        let config = SiteConfig::load_or_default(temp.path()).expect("defaults");
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let temp = TempDir::new().expect("temp dir");
        let err = SiteConfig::load_from_path(&temp.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, SiteError::ReadConfig { .. }));
    }

    #[test]
    fn test_load_partial_config() {
        let temp = TempDir::new().expect("temp dir");
        std::fs::write(
            temp.path().join(DEFAULT_CONFIG_FILE),
            "repo_url = \"https://example.org/cddf\"\n",
        )
        .expect("write config");

        let config = SiteConfig::load_or_default(temp.path()).expect("load");
        assert_eq!(config.repo_url, "https://example.org/cddf");
        assert_eq!(config.logo_src, DEFAULT_LOGO_SRC);
    }

    #[test]
    fn test_invalid_toml_reports_path() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("bad.toml");
        std::fs::write(&path, "repo_url = [").expect("write config");

        let err = SiteConfig::load_from_path(&path).unwrap_err();
        assert!(matches!(err, SiteError::ParseConfig { .. }));
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("typo.toml");
        std::fs::write(&path, "repo_ulr = \"x\"\n").expect("write config");

        assert!(SiteConfig::load_from_path(&path).is_err());
    }

    #[test]
    fn test_env_overrides_file_and_cli_overrides_env() {
        let env: HashMap<&str, &str> = [
            (ENV_REPO_URL, "https://env.example/cddf"),
            (ENV_LOGO_SRC, ""),
        ]
        .into_iter()
        .collect();

        let config = SiteConfig::default()
            .with_env_from(|key| env.get(key).map(|v| v.to_string()));
        assert_eq!(config.repo_url, "https://env.example/cddf");
        assert_eq!(config.logo_src, DEFAULT_LOGO_SRC);

        let config = config.apply_overrides(Some("https://cli.example/cddf".into()), None);
        assert_eq!(config.repo_url, "https://cli.example/cddf");
    }
}
