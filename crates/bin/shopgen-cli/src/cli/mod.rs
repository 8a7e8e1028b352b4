use clap::Parser;
use shopgen_engine::prelude::{ConfigError, GeneratorConfig, ProjectRequest};
use std::path::PathBuf;

/// Scaffold a full-stack e-commerce application.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// The name of the project directory to create [default: myshop]
    #[arg(short, long)]
    pub project: Option<String>,

    /// Run the package manager's clean install in the backend and frontend directories
    #[arg(short, long)]
    pub install: bool,

    /// Show Docker instructions at the end instead of local development ones
    #[arg(short, long)]
    pub docker: bool,

    /// Directory in which the project directory is created [default: .]
    ///
    /// Files already present in the project directory are overwritten.
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Package manager used for dependency installation [default: npm]
    #[arg(long)]
    pub package_manager: Option<String>,

    /// Path to a TOML file providing defaults for any of the options above
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Layers flags over the configuration file over built-in defaults.
    pub fn resolve_config(&self) -> Result<GeneratorConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => GeneratorConfig::load(path)?,
            None => GeneratorConfig::default(),
        };

        if let Some(project) = &self.project {
            config.project = project.clone();
        }
        if let Some(output_dir) = &self.output_dir {
            config.output_dir = output_dir.clone();
        }
        if let Some(package_manager) = &self.package_manager {
            config.package_manager = package_manager.clone();
        }
        config.install |= self.install;
        config.docker |= self.docker;

        Ok(config)
    }
}

pub fn project_request(config: &GeneratorConfig) -> ProjectRequest {
    ProjectRequest {
        project_name: config.project.clone(),
        install_deps: config.install,
        show_docker_instructions: config.docker,
    }
}
