//! Test utilities shared across the codebase

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use tempfile::TempDir;

use crate::assembly::AssemblyDescriptor;

/// A throwaway Unity project layout (`<tmp>/<name>/Assets`) removed on drop
pub struct TestProject {
    _temp_dir: TempDir,
    root: PathBuf,
}

impl TestProject {
    pub fn new(name: &str) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let root = temp_dir.path().join(name);
        fs::create_dir_all(root.join("Assets")).expect("Failed to create Assets dir");
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Creates an empty source file below the project root and returns its absolute path
    pub fn add_source(&self, relative: &str) -> PathBuf {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create source dir");
        }
        fs::write(&path, "public class Placeholder {}\n").expect("Failed to write source file");
        path
    }
}

/// Serializes tests that read or change the process working directory
static WORKING_DIRECTORY: Mutex<()> = Mutex::new(());

pub fn lock_working_directory() -> MutexGuard<'static, ()> {
    WORKING_DIRECTORY.lock().unwrap_or_else(|e| e.into_inner())
}

/// Runs with the working directory set to `path`, restoring the previous one on drop
pub struct WorkingDirectoryGuard {
    previous: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl WorkingDirectoryGuard {
    pub fn enter(path: &Path) -> Self {
        let lock = lock_working_directory();
        let previous = env::current_dir().expect("Failed to read working directory");
        env::set_current_dir(path).expect("Failed to change working directory");
        Self {
            previous,
            _lock: lock,
        }
    }
}

impl Drop for WorkingDirectoryGuard {
    fn drop(&mut self) {
        let _ = env::set_current_dir(&self.previous);
    }
}

/// Two assemblies where `Game.Core` depends on `Game.Utils`, the usual shape of a small project
pub fn sample_assemblies(project: &TestProject) -> Vec<AssemblyDescriptor> {
    let mut utils = AssemblyDescriptor::new("Game.Utils");
    utils.source_files = vec![project.add_source("Assets/Utils/MathUtil.cs")];
    utils.defines = vec!["UNITY_EDITOR".to_string()];
    utils.compiled_assembly_references =
        vec![PathBuf::from("/opt/unity/Editor/Data/Managed/UnityEngine.dll")];

    let mut core = AssemblyDescriptor::new("Game.Core");
    core.source_files = vec![
        project.add_source("Assets/Core/Player.cs"),
        project.add_source("Assets/Core/Enemy.cs"),
    ];
    core.defines = vec!["UNITY_EDITOR".to_string(), "DEBUG".to_string()];
    core.assembly_references = vec!["Game.Utils".to_string()];
    core.compiled_assembly_references = vec![
        PathBuf::from("/opt/unity/Editor/Data/Managed/UnityEngine.dll"),
        PathBuf::from("/opt/unity/Editor/Data/Managed/UnityEditor.dll"),
    ];

    vec![utils, core]
}
