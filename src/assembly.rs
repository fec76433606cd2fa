//! Assembly descriptors supplied by the Unity compilation pipeline.
//!
//! The Unity side exports `CompilationPipeline.GetAssemblies` as a JSON array;
//! this module only reads it, it never computes anything about assemblies.

use std::fs;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};

use crate::error::{IoContext, ZedResult, ZedUnityError};

/// One compiled unit as Unity sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssemblyDescriptor {
    /// Assembly name (e.g. "Assembly-CSharp"), stable across regenerations
    pub name: String,
    /// Source files, absolute or relative to the project root
    #[serde(default)]
    pub source_files: Vec<PathBuf>,
    /// Preprocessor symbols in the order Unity reports them
    #[serde(default)]
    pub defines: Vec<String>,
    /// Names of other assemblies this one depends on
    #[serde(default)]
    pub assembly_references: Vec<String>,
    /// Absolute paths of prebuilt DLL dependencies
    #[serde(default)]
    pub compiled_assembly_references: Vec<PathBuf>,
}

impl AssemblyDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source_files: Vec::new(),
            defines: Vec::new(),
            assembly_references: Vec::new(),
            compiled_assembly_references: Vec::new(),
        }
    }
}

/// Supplies the current assembly set each time a sync is requested.
pub trait AssemblySource {
    fn assemblies(&self) -> ZedResult<Vec<AssemblyDescriptor>>;
}

impl AssemblySource for Vec<AssemblyDescriptor> {
    fn assemblies(&self) -> ZedResult<Vec<AssemblyDescriptor>> {
        Ok(self.clone())
    }
}

/// Reads the assembly manifest written by the Unity editor shim.
///
/// The file is re-read on every call so a fresh export is always picked up.
#[derive(Debug, Clone)]
pub struct ManifestAssemblySource {
    manifest_path: PathBuf,
}

impl ManifestAssemblySource {
    pub fn new(manifest_path: PathBuf) -> Self {
        Self { manifest_path }
    }

    pub fn manifest_path(&self) -> &Path {
        &self.manifest_path
    }
}

impl AssemblySource for ManifestAssemblySource {
    fn assemblies(&self) -> ZedResult<Vec<AssemblyDescriptor>> {
        let content = fs::read_to_string(&self.manifest_path).with_io_context(|| {
            format!("Failed to read assembly manifest {}", self.manifest_path.display())
        })?;

        let assemblies: Vec<AssemblyDescriptor> =
            serde_json::from_str(&content).map_err(|e| ZedUnityError::Manifest {
                path: self.manifest_path.clone(),
                message: e.to_string(),
            })?;

        if let Some(empty) = assemblies.iter().position(|a| a.name.trim().is_empty()) {
            return Err(ZedUnityError::Manifest {
                path: self.manifest_path.clone(),
                message: format!("assembly at index {} has an empty name", empty),
            });
        }

        log::debug!(
            "Loaded {} assemblies from {}",
            assemblies.len(),
            self.manifest_path.display()
        );
        Ok(assemblies)
    }
}
