//! Template-to-filesystem generation engine behind `shopgen`.
//!
//! A run goes through the [`validator`], the [`resolver`], the [`writer`]
//! for each catalog entry, and finally the [`orchestrator`] which installs
//! dependencies and prints follow-up instructions.
//!
//! ```rust,no_run
//! use shopgen_engine::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = TemplateCatalog::builtin()?;
//! let mut scaffolder = Scaffolder::new(catalog, PackageManager::npm(), ".");
//!
//! let request = ProjectRequest {
//!     project_name: "myshop".to_string(),
//!     install_deps: false,
//!     show_docker_instructions: true,
//! };
//! let result = scaffolder.run(&request, &mut std::io::stdout())?;
//! println!("{} files written", result.written.len());
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod install;
pub mod instructions;
pub mod orchestrator;
pub mod prelude;
pub mod resolver;
pub mod validator;
pub mod writer;
