use shopgen_engine::prelude::{CatalogError, ConfigError, ScaffoldError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("A configuration error occurred: {0}")]
    Config(#[from] ConfigError),

    #[error("A template catalog error occurred: {0}")]
    Catalog(#[from] CatalogError),

    #[error("A scaffolding error occurred: {0}")]
    Scaffold(#[from] ScaffoldError),
}
