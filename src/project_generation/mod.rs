//! Project generation module
//!
//! Generates MSBuild `.csproj` files for every Unity assembly plus a matching
//! `.sln`, so OmniSharp running inside Zed can load the project. It also seeds
//! `omnisharp.json` and `.zed/settings.json` on first run.
//!
//! Every pass rewrites every project file; nothing is cached between passes.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use crate::assembly::AssemblyDescriptor;
use crate::error::{IoContext, ZedResult, ZedUnityError};

pub mod config_files;
pub mod csproj;
pub mod guid;
pub mod paths;
pub mod solution;

pub use guid::deterministic_guid;

pub const PROJECT_FILE_EXTENSION: &str = "csproj";
pub const SOLUTION_FILE_EXTENSION: &str = "sln";

// Unity 2021+ uses net48, earlier releases net471; v4.7.1 loads in both
pub const TARGET_FRAMEWORK: &str = "v4.7.1";
pub const LANG_VERSION: &str = "9.0";

#[cfg(windows)]
const NEW_LINE: &str = "\r\n";
#[cfg(not(windows))]
const NEW_LINE: &str = "\n";

/// A project file written during one generation pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRecord {
    pub name: String,
    pub guid: String,
    pub path: PathBuf,
}

/// Generates project, solution and editor configuration files for a Unity project
#[derive(Debug, Clone)]
pub struct ProjectGeneration {
    project_directory: PathBuf,
}

impl ProjectGeneration {
    /// Relative directories are resolved against the working directory; if that
    /// is unavailable the path is kept as given.
    pub fn new(project_directory: PathBuf) -> Self {
        let project_directory =
            paths::absolute_root(&project_directory).unwrap_or(project_directory);
        Self { project_directory }
    }

    pub fn project_directory(&self) -> &Path {
        &self.project_directory
    }

    /// Writes one `.csproj` per assembly, the `.sln`, and the configuration files
    /// that are still missing.
    ///
    /// Returns the number of project files written. Invalid assembly names are
    /// rejected before anything is written. The first IO failure aborts the pass;
    /// files written before it stay on disk.
    pub fn generate_all(&self, assemblies: &[AssemblyDescriptor]) -> ZedResult<usize> {
        let start_time = std::time::Instant::now();

        for assembly in assemblies {
            validate_assembly_name(&assembly.name)?;
        }

        let mut projects = Vec::with_capacity(assemblies.len());
        for assembly in assemblies {
            projects.push(csproj::write_project_file(&self.project_directory, assembly)?);
        }

        solution::write_solution_file(&self.project_directory, &projects)?;
        config_files::write_omnisharp_json(&self.project_directory)?;
        config_files::write_zed_settings(&self.project_directory)?;

        log::info!(
            "Generated {} .csproj file(s), .sln, and Zed settings in {:.2}ms",
            projects.len(),
            start_time.elapsed().as_secs_f64() * 1000.0
        );
        Ok(projects.len())
    }
}

/// The name becomes a file name and a quoted `.sln` field, which has no escaping
fn validate_assembly_name(name: &str) -> ZedResult<()> {
    let reason = if name.trim().is_empty() {
        "name is empty"
    } else if name.contains('"') {
        "name contains a double quote"
    } else if name.contains(['/', '\\']) {
        "name contains a path separator"
    } else {
        return Ok(());
    };

    Err(ZedUnityError::InvalidAssemblyName {
        name: name.to_string(),
        reason,
    })
}

fn write_file(path: &Path, bytes: &[u8]) -> ZedResult<()> {
    fs::write(path, bytes).with_io_context(|| format!("Failed to write {}", path.display()))
}

/// Line-oriented text builder with two-space indentation
#[derive(Default)]
struct Document {
    text: String,
}

impl Document {
    fn line(&mut self, depth: usize, content: &str) {
        let _ = write!(self.text, "{:width$}{}{}", "", content, NEW_LINE, width = depth * 2);
    }

    fn finish(self) -> String {
        self.text
    }
}

#[cfg(test)]
#[path = "generation_tests.rs"]
mod tests;
