use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("The project name must not be empty")]
    Empty,

    #[error("The project name `{name}` contains a `..` sequence")]
    ParentTraversal { name: String },

    #[error("The project name `{name}` contains the path separator `{character}` at position {position}")]
    PathSeparator {
        name: String,
        character: char,
        position: usize,
    },

    #[error("The project name `{name}` must start with a letter or `_`, found `{character}`")]
    LeadingCharacter { name: String, character: char },

    #[error("The project name `{name}` contains the invalid character `{character}` at position {position}")]
    InvalidCharacter {
        name: String,
        character: char,
        position: usize,
    },

    #[error("The project name `{name}` is a reserved device name")]
    ReservedName { name: String },
}

pub type ValidationResult<T> = Result<T, ValidationError>;
