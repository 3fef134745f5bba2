use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating type metadata
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Failed to read manifest {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid manifest JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Package name must not be empty")]
    EmptyPackageName,

    #[error("Type name must not be empty")]
    EmptyTypeName,

    #[error("Type '{0}' is declared more than once")]
    DuplicateType(String),

    #[error("Method '{method}' on type '{type_name}' has no declaring file")]
    MissingDeclaringFile { type_name: String, method: String },
}

pub type ModelResult<T> = Result<T, ModelError>;
