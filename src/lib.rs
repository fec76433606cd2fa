//! Zed integration for Unity
//!
//! Generates the MSBuild project and solution files OmniSharp needs to understand
//! a Unity project, and finds and launches Zed to open files at a given location.

/// Per-user directory name under the platform's data and config directories
pub const APP_DIRECTORY_NAME: &str = "ZedUnity";

pub mod arguments;
pub mod assembly;
pub mod cli;
pub mod code_editor;
pub mod discovery;
pub mod error;
pub mod launcher;
pub mod logging;
pub mod preferences;
pub mod project_generation;
pub mod unity_project;
#[cfg(test)]
pub(crate) mod test_utils;
