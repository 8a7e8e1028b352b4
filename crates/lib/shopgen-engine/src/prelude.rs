pub use crate::catalog::{CatalogError, TemplateCatalog, TemplateEntry};
pub use crate::config::{ConfigError, DEFAULT_PROJECT_NAME, GeneratorConfig};
pub use crate::error::*;
pub use crate::install::{DependencyInstaller, InstallFailure, InstallOutcome, PackageManager};
pub use crate::instructions::{InstructionSet, Instructions};
pub use crate::orchestrator::{GenerationResult, Phase, ProjectRequest, Scaffolder};
pub use crate::resolver::{PathResolver, ResolvedEntry};
pub use crate::validator::ProjectName;
pub use crate::validator::error::ValidationError;
pub use crate::writer::FileWriter;
