//! Unity project layout and version detection.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{IoContext, ZedResult, ZedUnityError};
use crate::project_generation::SOLUTION_FILE_EXTENSION;
use crate::project_generation::paths::absolute_root;

const PROJECT_VERSION_FILE: &str = "ProjectVersion.txt";
const EDITOR_VERSION_KEY: &str = "m_EditorVersion:";

/// A Unity project on disk, identified by its root directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnityProject {
    project_path: PathBuf,
}

impl UnityProject {
    /// Creates a new UnityProject for the specified project path.
    ///
    /// # Examples
    ///
    /// ```
    /// use zed_unity::unity_project::UnityProject;
    /// use std::path::PathBuf;
    ///
    /// let project = UnityProject::new(PathBuf::from("/path/to/unity/MyGame"));
    /// assert_eq!(project.name(), "MyGame");
    /// ```
    ///
    /// A relative path is resolved against the current working directory.
    pub fn new(project_path: PathBuf) -> Self {
        let project_path = absolute_root(&project_path).unwrap_or(project_path);
        Self { project_path }
    }

    /// Unity reports `Application.dataPath` (the `Assets` folder); the project is its parent.
    pub fn from_assets_dir(assets_path: &Path) -> Option<Self> {
        assets_path.parent().map(|p| Self::new(p.to_path_buf()))
    }

    /// Returns the project path.
    pub fn project_path(&self) -> &Path {
        &self.project_path
    }

    pub fn assets_path(&self) -> PathBuf {
        self.project_path.join("Assets")
    }

    /// Base name of the project directory, which is also the solution's name
    pub fn name(&self) -> String {
        self.project_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Detects the Unity version the project was last opened with.
    ///
    /// Reads `m_EditorVersion` from `ProjectSettings/ProjectVersion.txt`,
    /// e.g. "6000.0.51f1".
    pub fn detect_unity_version(&self) -> ZedResult<String> {
        let version_file = self.project_path.join("ProjectSettings").join(PROJECT_VERSION_FILE);
        let content = fs::read_to_string(&version_file)
            .with_io_context(|| format!("Failed to read {}", version_file.display()))?;

        content
            .lines()
            .find_map(|line| line.trim().strip_prefix(EDITOR_VERSION_KEY))
            .map(|version| version.trim().to_string())
            .filter(|version| !version.is_empty())
            .ok_or_else(|| ZedUnityError::ProjectSettings {
                path: version_file.clone(),
                message: format!("missing {}", EDITOR_VERSION_KEY),
            })
    }

    /// First `.sln` in the project root, the file OmniSharp is pointed at
    pub fn find_solution(&self) -> Option<PathBuf> {
        let entries = fs::read_dir(&self.project_path).ok()?;
        let mut solutions: Vec<PathBuf> = entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file()
                    && path.extension().and_then(|e| e.to_str()) == Some(SOLUTION_FILE_EXTENSION)
            })
            .collect();
        solutions.sort();
        solutions.into_iter().next()
    }
}
