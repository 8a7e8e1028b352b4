pub mod error;

use crate::validator::error::{ValidationError, ValidationResult};
use std::fmt;
use tracing::{debug, info};
use unicode_normalization::char::is_combining_mark;

/// Device names that cannot be used as a path segment on Windows.
const RESERVED_NAMES: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

/// A project name that is safe to use as a single directory component.
///
/// The only way to obtain one is through [`ProjectName::parse`], so every
/// value flowing into path resolution has already passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectName(String);

impl ProjectName {
    #[tracing::instrument(skip_all, fields(name = candidate))]
    pub fn parse(candidate: &str) -> ValidationResult<Self> {
        info!("Validating project name");

        if let Err(validation_error) = Self::check(candidate) {
            debug!(%validation_error, "Project name rejected");
            return Err(validation_error);
        }

        Ok(Self(candidate.to_string()))
    }

    fn check(candidate: &str) -> ValidationResult<()> {
        if candidate.is_empty() {
            return Err(ValidationError::Empty);
        }

        if candidate.contains("..") {
            return Err(ValidationError::ParentTraversal {
                name: candidate.to_string(),
            });
        }

        for (position, character) in candidate.chars().enumerate() {
            if character == '/' || character == '\\' {
                return Err(ValidationError::PathSeparator {
                    name: candidate.to_string(),
                    character,
                    position,
                });
            }

            if position == 0 {
                if !(character.is_alphabetic() || character == '_') {
                    return Err(ValidationError::LeadingCharacter {
                        name: candidate.to_string(),
                        character,
                    });
                }
            } else if !(character.is_alphanumeric()
                || character == '_'
                || is_combining_mark(character))
            {
                return Err(ValidationError::InvalidCharacter {
                    name: candidate.to_string(),
                    character,
                    position,
                });
            }
        }

        if RESERVED_NAMES
            .iter()
            .any(|reserved| reserved.eq_ignore_ascii_case(candidate))
        {
            return Err(ValidationError::ReservedName {
                name: candidate.to_string(),
            });
        }

        Ok(())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
