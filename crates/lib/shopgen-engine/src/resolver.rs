use crate::catalog::TemplateCatalog;
use crate::validator::ProjectName;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A catalog entry placed under a concrete project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEntry<'c> {
    /// Destination path, relative to the output directory and starting
    /// with the project name.
    pub path: PathBuf,
    pub content: &'c str,
}

impl ResolvedEntry<'_> {
    pub fn parent(&self) -> Option<&Path> {
        self.path.parent()
    }
}

pub struct PathResolver;

impl PathResolver {
    /// Maps every catalog entry to `<project>/<relative_path>`.
    ///
    /// The output keeps catalog order. Entries are independent of each
    /// other: every parent directory is derived from the entry itself, so
    /// they can be written in any order.
    #[tracing::instrument(skip_all, fields(project = %project))]
    pub fn resolve<'c>(project: &ProjectName, catalog: &'c TemplateCatalog) -> Vec<ResolvedEntry<'c>> {
        let root = Path::new(project.as_str());

        let resolved: Vec<_> = catalog
            .entries()
            .iter()
            .map(|entry| {
                let path = entry
                    .segments()
                    .fold(root.to_path_buf(), |path, segment| path.join(segment));

                ResolvedEntry {
                    path,
                    content: entry.content.as_str(),
                }
            })
            .collect();

        debug!(entries = resolved.len(), "Resolved template destinations");
        resolved
    }
}
