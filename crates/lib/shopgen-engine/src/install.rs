use std::path::Path;
use std::process::Command;
use thiserror::Error;
use tracing::{error, info, warn};

/// Why a dependency installation did not complete.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InstallFailure {
    #[error("`{program}` was not found on PATH")]
    ExecutableNotFound { program: String },

    #[error("`{program}` could not be started: {reason}")]
    Spawn { program: String, reason: String },

    #[error("process exited with status {code}")]
    ExitStatus { code: i32 },

    #[error("process was terminated by a signal")]
    Terminated,
}

/// Result of one installation attempt.
///
/// A failed install is reported here and never as an error; the
/// orchestrator turns it into an operator warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    Succeeded,
    Failed(InstallFailure),
}

impl InstallOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, InstallOutcome::Succeeded)
    }
}

/// Installs the dependencies of a generated subtree.
pub trait DependencyInstaller {
    /// Name of the tool, used in operator-facing instructions.
    fn program(&self) -> &str;

    /// Runs the installation with `directory` as working directory and
    /// blocks until it finishes.
    fn install(&self, directory: &Path) -> InstallOutcome;
}

/// A package manager invoked as a child process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageManager {
    program: String,
    args: Vec<String>,
}

impl PackageManager {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// `npm ci`, a clean install from the lockfile.
    pub fn npm() -> Self {
        Self::new("npm", vec!["ci".to_string()])
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl Default for PackageManager {
    fn default() -> Self {
        Self::npm()
    }
}

impl DependencyInstaller for PackageManager {
    fn program(&self) -> &str {
        &self.program
    }

    #[tracing::instrument(skip_all, fields(program = %self.program, directory = ?directory))]
    fn install(&self, directory: &Path) -> InstallOutcome {
        // Resolving through PATH first also picks up `npm.cmd` on Windows.
        let executable = match which::which(&self.program) {
            Ok(executable) => executable,
            Err(_) => {
                warn!("Package manager executable not found");
                return InstallOutcome::Failed(InstallFailure::ExecutableNotFound {
                    program: self.program.clone(),
                });
            }
        };

        info!(args = ?self.args, "Installing dependencies");
        let status = Command::new(&executable)
            .args(&self.args)
            .current_dir(directory)
            .status();

        match status {
            Ok(status) if status.success() => InstallOutcome::Succeeded,
            Ok(status) => {
                warn!(code = ?status.code(), "Dependency installation failed");
                InstallOutcome::Failed(match status.code() {
                    Some(code) => InstallFailure::ExitStatus { code },
                    None => InstallFailure::Terminated,
                })
            }
            Err(spawn_error) => {
                error!(%spawn_error, "Unable to start package manager");
                InstallOutcome::Failed(InstallFailure::Spawn {
                    program: self.program.clone(),
                    reason: spawn_error.to_string(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_is_npm_clean_install() {
        let package_manager = PackageManager::default();
        assert_eq!(package_manager.program(), "npm");
        assert_eq!(package_manager.args(), ["ci".to_string()]);
    }

    #[test]
    fn test_missing_executable_is_reported() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let package_manager = PackageManager::new("shopgen-missing-package-manager", vec![]);

        let outcome = package_manager.install(temp_dir.path());

        assert_eq!(
            outcome,
            InstallOutcome::Failed(InstallFailure::ExecutableNotFound {
                program: "shopgen-missing-package-manager".to_string(),
            })
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_non_zero_exit_is_reported() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let package_manager =
            PackageManager::new("sh", vec!["-c".to_string(), "exit 3".to_string()]);

        let outcome = package_manager.install(temp_dir.path());

        assert_eq!(
            outcome,
            InstallOutcome::Failed(InstallFailure::ExitStatus { code: 3 })
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_runs_inside_target_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let package_manager =
            PackageManager::new("sh", vec!["-c".to_string(), "touch installed".to_string()]);

        let outcome = package_manager.install(temp_dir.path());

        assert!(outcome.is_success());
        assert!(temp_dir.path().join("installed").exists());
    }

    #[test]
    fn test_failure_messages() {
        let failure = InstallFailure::ExecutableNotFound {
            program: "npm".to_string(),
        };
        assert_eq!(failure.to_string(), "`npm` was not found on PATH");

        let failure = InstallFailure::ExitStatus { code: 1 };
        assert_eq!(failure.to_string(), "process exited with status 1");

        let failure = InstallFailure::Spawn {
            program: "npm".to_string(),
            reason: "permission denied".to_string(),
        };
        assert_eq!(
            failure.to_string(),
            "`npm` could not be started: permission denied"
        );

        assert_eq!(
            InstallFailure::Terminated.to_string(),
            "process was terminated by a signal"
        );
    }
}
