use std::collections::HashSet;
use std::sync::OnceLock;
use thiserror::Error;
use tracing::{debug, error};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("A duplicate template path was found: `{0}`")]
    DuplicatePath(String),

    #[error("Template path `{path}` is invalid: {reason}")]
    InvalidPath { path: String, reason: String },
}

/// One file the generator knows how to emit.
///
/// `relative_path` is slash separated and relative to the project root.
/// `content` never depends on the project name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateEntry {
    pub relative_path: String,
    pub content: String,
}

impl TemplateEntry {
    pub fn new(relative_path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            relative_path: relative_path.into(),
            content: content.into(),
        }
    }

    /// Splits the relative path into its directory and file components.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.relative_path.split('/')
    }
}

/// Immutable, ordered collection of templates with unique paths.
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    entries: Vec<TemplateEntry>,
}

macro_rules! template {
    ($path:literal) => {
        TemplateEntry::new($path, include_str!(concat!("../templates/", $path)))
    };
}

impl TemplateCatalog {
    pub fn new(entries: Vec<TemplateEntry>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            Self::check_path(&entry.relative_path)?;

            if !seen.insert(entry.relative_path.as_str()) {
                error!(path = %entry.relative_path, "Duplicated template path detected");
                return Err(CatalogError::DuplicatePath(entry.relative_path.clone()));
            }
        }

        debug!(entries = entries.len(), "Template catalog constructed");
        Ok(Self { entries })
    }

    /// The storefront catalog shipped with the generator.
    ///
    /// Built on first access and shared for the rest of the process.
    pub fn builtin() -> Result<&'static TemplateCatalog, CatalogError> {
        static BUILTIN: OnceLock<Result<TemplateCatalog, CatalogError>> = OnceLock::new();

        BUILTIN
            .get_or_init(|| Self::new(builtin_entries()))
            .as_ref()
            .map_err(Clone::clone)
    }

    pub fn entries(&self) -> &[TemplateEntry] {
        &self.entries
    }

    pub fn get(&self, relative_path: &str) -> Option<&TemplateEntry> {
        self.entries
            .iter()
            .find(|entry| entry.relative_path == relative_path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn check_path(path: &str) -> Result<(), CatalogError> {
        let invalid = |reason: &str| CatalogError::InvalidPath {
            path: path.to_string(),
            reason: reason.to_string(),
        };

        if path.is_empty() {
            return Err(invalid("path is empty"));
        }
        if path.starts_with('/') {
            return Err(invalid("path must be relative"));
        }
        if path.contains('\\') {
            return Err(invalid("path must use `/` as separator"));
        }

        for segment in path.split('/') {
            match segment {
                "" => return Err(invalid("path contains an empty segment")),
                "." | ".." => return Err(invalid("path contains a relative segment")),
                _ => {}
            }
        }

        Ok(())
    }
}

fn builtin_entries() -> Vec<TemplateEntry> {
    vec![
        // Backend
        template!("backend/package.json"),
        template!("backend/server.js"),
        template!("backend/config/db.js"),
        template!("backend/middleware/auth.js"),
        template!("backend/models/User.js"),
        template!("backend/models/Product.js"),
        template!("backend/models/Order.js"),
        template!("backend/routes/auth.js"),
        template!("backend/routes/products.js"),
        template!("backend/routes/orders.js"),
        template!("backend/controllers/authController.js"),
        template!("backend/controllers/productController.js"),
        template!("backend/controllers/orderController.js"),
        template!("backend/utils/errorHandler.js"),
        template!("backend/.env.example"),
        // Frontend
        template!("frontend/package.json"),
        template!("frontend/index.html"),
        template!("frontend/tailwind.config.js"),
        template!("frontend/postcss.config.js"),
        template!("frontend/src/main.jsx"),
        template!("frontend/src/App.jsx"),
        template!("frontend/src/index.css"),
        template!("frontend/src/context/AuthContext.jsx"),
        template!("frontend/src/context/CartContext.jsx"),
        template!("frontend/src/components/NavBar.jsx"),
        template!("frontend/src/pages/Home.jsx"),
        template!("frontend/src/pages/Product.jsx"),
        template!("frontend/src/pages/Cart.jsx"),
        template!("frontend/src/pages/Login.jsx"),
        template!("frontend/src/pages/Register.jsx"),
        template!("frontend/src/pages/Orders.jsx"),
        template!("frontend/.env.example"),
        // Containers
        template!("docker/docker-compose.yml"),
        template!("backend/Dockerfile"),
        template!("frontend/Dockerfile"),
        // Root
        template!("README.md"),
    ]
}
