use crate::install::PackageManager;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_PROJECT_NAME: &str = "myshop";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unable to read configuration file `{path}`: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration file `{path}`: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Generator settings, loaded from an optional TOML file.
///
/// ```toml
/// project = "boutique"
/// output_dir = "projects"
/// install = true
/// docker = false
/// package_manager = "npm"
/// install_args = ["ci"]
/// ```
///
/// Missing keys fall back to their defaults, unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    pub project: String,
    pub output_dir: PathBuf,
    pub install: bool,
    pub docker: bool,
    pub package_manager: String,
    pub install_args: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            project: DEFAULT_PROJECT_NAME.to_string(),
            output_dir: PathBuf::from("."),
            install: false,
            docker: false,
            package_manager: "npm".to_string(),
            install_args: vec!["ci".to_string()],
        }
    }
}

impl GeneratorConfig {
    pub fn from_toml_str(content: &str, origin: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_toml_str(&content, path)?;
        debug!(?path, ?config, "Configuration loaded");
        Ok(config)
    }

    pub fn package_manager(&self) -> PackageManager {
        PackageManager::new(self.package_manager.clone(), self.install_args.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::install::DependencyInstaller;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.project, "myshop");
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert!(!config.install);
        assert!(!config.docker);
        assert_eq!(config.package_manager(), PackageManager::npm());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config =
            GeneratorConfig::from_toml_str("project = \"boutique\"\ndocker = true\n", Path::new("x"))
                .unwrap();

        assert_eq!(config.project, "boutique");
        assert!(config.docker);
        assert_eq!(config.package_manager, "npm");
        assert_eq!(config.install_args, vec!["ci".to_string()]);
    }

    #[test]
    fn test_custom_package_manager() {
        let config = GeneratorConfig::from_toml_str(
            "package_manager = \"pnpm\"\ninstall_args = [\"install\", \"--frozen-lockfile\"]\n",
            Path::new("x"),
        )
        .unwrap();

        let package_manager = config.package_manager();
        assert_eq!(package_manager.program(), "pnpm");
        assert_eq!(
            package_manager.args(),
            ["install".to_string(), "--frozen-lockfile".to_string()]
        );
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let result = GeneratorConfig::from_toml_str("projetc = \"typo\"\n", Path::new("bad.toml"));
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(file, "project = \"demo\"\ninstall = true").unwrap();

        let config = GeneratorConfig::load(file.path()).unwrap();
        assert_eq!(config.project, "demo");
        assert!(config.install);
    }

    #[test]
    fn test_load_missing_file() {
        let result = GeneratorConfig::load(Path::new("/definitely/not/here/shopgen.toml"));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}
