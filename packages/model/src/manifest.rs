use crate::error::{ModelError, ModelResult};
use crate::types::TypeDescriptor;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Type metadata for one package, as written by a front end
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageManifest {
    /// Package name used in generated `package` clauses
    pub name: String,

    /// Import path of the package itself, never imported by its own files
    #[serde(default)]
    pub path: String,

    /// Directory generated files are written into
    #[serde(default)]
    pub directory: String,

    #[serde(default)]
    pub types: Vec<TypeDescriptor>,
}

impl PackageManifest {
    /// Load and validate a manifest file
    pub fn load(path: &Path) -> ModelResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> ModelResult<Self> {
        let manifest: PackageManifest = serde_json::from_str(json)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Reject descriptors the generation engine assumes are well formed
    pub fn validate(&self) -> ModelResult<()> {
        if self.name.is_empty() {
            return Err(ModelError::EmptyPackageName);
        }

        let mut seen = HashSet::new();
        for ty in &self.types {
            if ty.name.is_empty() {
                return Err(ModelError::EmptyTypeName);
            }
            if !seen.insert(ty.name.as_str()) {
                return Err(ModelError::DuplicateType(ty.name.clone()));
            }
            if let Some(m) = ty.methods.iter().find(|m| m.file.is_empty()) {
                return Err(ModelError::MissingDeclaringFile {
                    type_name: ty.name.clone(),
                    method: m.name.clone(),
                });
            }
        }

        Ok(())
    }
}
