//! Zed as Unity's external code editor.
//!
//! [`ExternalCodeEditor`] is the narrow surface the host calls: it lists
//! installations, opens files and regenerates project files when assets change.
//! [`ZedCodeEditor`] implements it on top of project generation, discovery and a
//! process launcher, so everything can be driven without Unity running.

use std::path::{Path, PathBuf};

use crate::arguments::{build_open_file_args, build_open_project_args, is_zed_path};
use crate::assembly::AssemblySource;
use crate::discovery::{EDITOR_NAME, ZedDiscovery};
use crate::error::{ZedResult, ZedUnityError};
use crate::launcher::ProcessLauncher;
use crate::preferences::PreferenceStore;
use crate::project_generation::ProjectGeneration;
use crate::unity_project::UnityProject;

/// Asset types whose changes affect the generated projects
const SYNC_EXTENSIONS: [&str; 3] = ["cs", "asmdef", "asmref"];

/// An editor installation offered to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Installation {
    pub name: String,
    pub path: PathBuf,
}

impl Installation {
    fn zed(path: PathBuf) -> Self {
        Self {
            name: EDITOR_NAME.to_string(),
            path,
        }
    }
}

/// Notifications the host editor sends to its external code editor
pub trait ExternalCodeEditor {
    fn installations(&self) -> Vec<Installation>;

    fn try_get_installation_for_path(&self, editor_path: &str) -> Option<Installation>;

    /// Called when the user selects this editor, with the selected executable
    fn initialize(&mut self, editor_installation_path: &str);

    /// Opens the project, or `file_path` at `line`/`column` (values below 1 are ignored).
    /// Returns false if Zed could not be launched.
    fn open_project(&mut self, file_path: &str, line: i32, column: i32) -> bool;

    /// Regenerates everything, returning the number of project files
    fn sync_all(&mut self) -> ZedResult<usize>;

    /// Regenerates when a script or assembly definition changed; returns whether it did
    fn sync_if_needed(
        &mut self,
        added_files: &[String],
        deleted_files: &[String],
        moved_files: &[String],
        moved_from_files: &[String],
        imported_files: &[String],
    ) -> ZedResult<bool>;
}

pub struct ZedCodeEditor<A, L, P> {
    project: UnityProject,
    generation: ProjectGeneration,
    discovery: ZedDiscovery,
    assemblies: A,
    launcher: L,
    preferences: P,
}

impl<A, L, P> ZedCodeEditor<A, L, P>
where
    A: AssemblySource,
    L: ProcessLauncher,
    P: PreferenceStore,
{
    pub fn new(
        project: UnityProject,
        discovery: ZedDiscovery,
        assemblies: A,
        launcher: L,
        preferences: P,
    ) -> Self {
        let generation = ProjectGeneration::new(project.project_path().to_path_buf());
        Self {
            project,
            generation,
            discovery,
            assemblies,
            launcher,
            preferences,
        }
    }

    pub fn project(&self) -> &UnityProject {
        &self.project
    }

    pub fn preferences(&self) -> &P {
        &self.preferences
    }

    pub fn preferences_mut(&mut self) -> &mut P {
        &mut self.preferences
    }

    /// Explicit path first, then the host's current editor if it is Zed, then discovery
    pub fn resolve_editor_path(&self) -> Option<String> {
        if let Some(path) = self.preferences.editor_path() {
            return Some(path);
        }

        if let Some(current) = self.preferences.current_editor_path() {
            if is_zed_path(&current) {
                return Some(current);
            }
        }

        self.discovery
            .installations()
            .next()
            .map(|p| p.to_string_lossy().into_owned())
    }

    /// Zed arguments for opening the project, and `file_path` in it when given
    pub fn build_open_args(&self, file_path: &str, line: i32, column: i32) -> String {
        let project_root = self.project.project_path().to_string_lossy();
        let project_args = build_open_project_args(&project_root);

        if file_path.is_empty() {
            return project_args;
        }

        // pass the project root as well so the file opens in the right workspace
        format!("{} {}", project_args, build_open_file_args(file_path, line, column))
    }
}

impl<A, L, P> ExternalCodeEditor for ZedCodeEditor<A, L, P>
where
    A: AssemblySource,
    L: ProcessLauncher,
    P: PreferenceStore,
{
    fn installations(&self) -> Vec<Installation> {
        self.discovery.installations().map(Installation::zed).collect()
    }

    fn try_get_installation_for_path(&self, editor_path: &str) -> Option<Installation> {
        if !is_zed_path(editor_path) {
            return None;
        }
        Some(Installation::zed(PathBuf::from(editor_path)))
    }

    fn initialize(&mut self, editor_installation_path: &str) {
        if let Err(e) = self.preferences.set_editor_path(editor_installation_path) {
            log::warn!("Failed to store editor path {}: {}", editor_installation_path, e);
        }
    }

    fn open_project(&mut self, file_path: &str, line: i32, column: i32) -> bool {
        let Some(editor_path) = self.resolve_editor_path() else {
            log::error!("{}", ZedUnityError::EditorNotFound);
            return false;
        };

        let args = self.build_open_args(file_path, line, column);
        self.launcher.launch(&editor_path, &args)
    }

    fn sync_all(&mut self) -> ZedResult<usize> {
        let assemblies = self.assemblies.assemblies()?;
        self.generation.generate_all(&assemblies)
    }

    fn sync_if_needed(
        &mut self,
        added_files: &[String],
        deleted_files: &[String],
        moved_files: &[String],
        moved_from_files: &[String],
        imported_files: &[String],
    ) -> ZedResult<bool> {
        if !self.preferences.sync_on_change() {
            log::debug!("Sync on change disabled, skipping");
            return Ok(false);
        }

        let needs_sync = added_files
            .iter()
            .chain(deleted_files)
            .chain(moved_files)
            .chain(moved_from_files)
            .chain(imported_files)
            .any(|f| affects_projects(f));

        if !needs_sync {
            return Ok(false);
        }

        self.sync_all()?;
        Ok(true)
    }
}

/// Only scripts and assembly definitions change what the projects contain
pub fn affects_projects(path: &str) -> bool {
    Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .map(|ext| SYNC_EXTENSIONS.iter().any(|s| ext.eq_ignore_ascii_case(s)))
        .unwrap_or(false)
}

#[cfg(test)]
#[path = "code_editor_tests.rs"]
mod tests;
