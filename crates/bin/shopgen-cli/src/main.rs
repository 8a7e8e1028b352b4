use crate::cli::Cli;
use crate::error::CliError;
use clap::Parser;
use shopgen_engine::prelude::{GenerationResult, Scaffolder, ScaffoldError, TemplateCatalog};
use std::io::Write;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

mod cli;
mod error;

const DEFAULT_LOG_FILTER: &str = "warn";

fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;

    let env_filter = log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref());
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(env_filter);
    tracing_subscriber::registry().with(fmt_layer).init();

    let cli = Cli::parse();

    Ok(run(&cli, &mut std::io::stdout().lock()))
}

/// `RUST_LOG` when set, otherwise only warnings and errors.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    match directives {
        Some(directives) if !directives.trim().is_empty() => EnvFilter::new(directives),
        _ => EnvFilter::new(DEFAULT_LOG_FILTER),
    }
}

/// Fatal errors exit with failure; a degraded install still succeeds.
fn run(cli: &Cli, out: &mut dyn Write) -> ExitCode {
    match scaffold(cli, out) {
        Ok(result) => {
            if result.is_degraded() {
                // Progress output is best effort.
                let _ = writeln!(
                    out,
                    "\n⚠️  Dependencies were not installed, see the warning above."
                );
            }
            ExitCode::SUCCESS
        }
        Err(error) => {
            report(&error);
            ExitCode::FAILURE
        }
    }
}

fn scaffold(cli: &Cli, out: &mut dyn Write) -> Result<GenerationResult, CliError> {
    let config = cli.resolve_config()?;
    debug!(?config, "Resolved configuration");

    let catalog = TemplateCatalog::builtin()?;
    let mut scaffolder = Scaffolder::new(
        catalog,
        config.package_manager(),
        config.output_dir.clone(),
    );
    let result = scaffolder.run(&cli::project_request(&config), out)?;

    Ok(result)
}

fn report(error: &CliError) {
    match error {
        CliError::Config(error) => {
            eprintln!("😢 Invalid configuration: {error}");
        }
        CliError::Catalog(error) => {
            eprintln!("😭 Broken template catalog: {error}");
        }
        CliError::Scaffold(ScaffoldError::Validation(error)) => {
            eprintln!("😢 Error: {error}. No files were written.");
        }
        CliError::Scaffold(ScaffoldError::Write(error)) => {
            eprintln!("😭 {error}");
            eprintln!("   Files written before the failure were left in place.");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopgen_engine::prelude::CatalogError;
    use tempfile::TempDir;
    use tracing_subscriber::filter::LevelFilter;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("shopgen").chain(args.iter().copied()))
            .expect("Failed to parse arguments")
    }

    #[test]
    fn test_invalid_project_fails_without_writing() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let output_dir = temp_dir.path().to_string_lossy().to_string();
        let mut out = Vec::new();

        let code = run(
            &cli(&["--project", "../escape", "--output-dir", &output_dir]),
            &mut out,
        );

        assert_eq!(code, ExitCode::FAILURE);
        assert!(out.is_empty());
        assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_missing_package_manager_still_succeeds() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let output_dir = temp_dir.path().to_string_lossy().to_string();
        let mut out = Vec::new();

        let code = run(
            &cli(&[
                "--project",
                "demo",
                "--install",
                "--package-manager",
                "shopgen-missing-package-manager",
                "--output-dir",
                &output_dir,
            ]),
            &mut out,
        );

        let out = String::from_utf8(out).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
        assert!(out.contains("Could not install dependencies"));
        assert!(out.contains("Dependencies were not installed"));
        assert!(temp_dir.path().join("demo/backend/package.json").is_file());
    }

    #[test]
    fn test_successful_run_exits_zero() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let output_dir = temp_dir.path().to_string_lossy().to_string();
        let mut out = Vec::new();

        let code = run(
            &cli(&["--project", "demo", "--docker", "--output-dir", &output_dir]),
            &mut out,
        );

        let out = String::from_utf8(out).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
        assert!(out.contains("docker compose up --build"));
        assert!(!out.contains("Dependencies were not installed"));
    }

    #[test]
    fn test_write_failure_exits_non_zero() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        std::fs::create_dir_all(temp_dir.path().join("demo/README.md")).unwrap();
        let output_dir = temp_dir.path().to_string_lossy().to_string();

        let code = run(
            &cli(&["--project", "demo", "--output-dir", &output_dir]),
            &mut Vec::new(),
        );

        assert_eq!(code, ExitCode::FAILURE);
    }

    #[test]
    fn test_catalog_errors_reach_the_cli_directly() {
        let error = CliError::from(CatalogError::DuplicatePath("README.md".to_string()));

        assert!(matches!(
            error,
            CliError::Catalog(CatalogError::DuplicatePath(ref path)) if path == "README.md"
        ));
        assert!(error.to_string().contains("`README.md`"));
    }

    #[test]
    fn test_log_filter_defaults_to_warn() {
        assert_eq!(log_filter(None).max_level_hint(), Some(LevelFilter::WARN));
        assert_eq!(
            log_filter(Some("  ")).max_level_hint(),
            Some(LevelFilter::WARN)
        );
        assert_eq!(
            log_filter(Some("debug")).max_level_hint(),
            Some(LevelFilter::DEBUG)
        );
    }
}
