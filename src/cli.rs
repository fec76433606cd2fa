//! Command-line interface for the Unity editor shim and for manual use.

use std::path::PathBuf;
use clap::{Args, Parser, Subcommand};
use log::info;

use crate::assembly::ManifestAssemblySource;
use crate::code_editor::{ExternalCodeEditor, ZedCodeEditor};
use crate::discovery::ZedDiscovery;
use crate::error::{IoContext, ZedResult, ZedUnityError};
use crate::launcher::SystemLauncher;
use crate::project_generation::paths::absolute_root;
use crate::preferences::{EDITOR_PATH_KEY, JsonPreferenceStore, PreferenceStore};
use crate::unity_project::UnityProject;

/// Top-level CLI parser for `zed_unity`.
#[derive(Debug, Parser)]
#[command(name = "zed_unity", version, about = "Use Zed as the external script editor for Unity")]
pub struct Cli {
    /// Unity project root (the folder containing Assets)
    #[arg(long, global = true)]
    pub project: Option<PathBuf>,

    /// Preferences file, defaults to the user config directory
    #[arg(long, global = true)]
    pub preferences: Option<PathBuf>,

    /// Log debug output
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Regenerate every .csproj, the .sln and missing Zed/OmniSharp settings
    Sync {
        /// Assembly manifest exported by the Unity editor
        #[arg(long)]
        assemblies: PathBuf,
    },
    /// Regenerate only if a script or assembly definition changed
    SyncIfNeeded {
        #[arg(long)]
        assemblies: PathBuf,
        #[command(flatten)]
        changes: ChangeSets,
    },
    /// Open the project, or a file at a line and column, in Zed
    Open {
        #[arg(long)]
        file: Option<String>,
        #[arg(long, default_value_t = -1, allow_negative_numbers = true)]
        line: i32,
        #[arg(long, default_value_t = -1, allow_negative_numbers = true)]
        column: i32,
    },
    /// List discovered Zed installations
    Installations,
    /// Update stored preferences
    Configure {
        #[arg(long, conflicts_with = "clear_editor_path")]
        editor_path: Option<String>,
        #[arg(long)]
        clear_editor_path: bool,
        #[arg(long)]
        current_editor_path: Option<String>,
        #[arg(long)]
        sync_on_change: Option<bool>,
    },
    /// Show the project and editor the other commands would use
    Status,
}

/// The five change sets Unity reports after an asset import
#[derive(Debug, Default, Args)]
pub struct ChangeSets {
    #[arg(long, num_args = 1..)]
    pub added: Vec<String>,
    #[arg(long, num_args = 1..)]
    pub deleted: Vec<String>,
    #[arg(long, num_args = 1..)]
    pub moved: Vec<String>,
    #[arg(long, num_args = 1..)]
    pub moved_from: Vec<String>,
    #[arg(long, num_args = 1..)]
    pub imported: Vec<String>,
}

type CliEditor = ZedCodeEditor<ManifestAssemblySource, SystemLauncher, JsonPreferenceStore>;

/// Runs a parsed command, returning false when the command failed without an error value
pub fn run(cli: Cli) -> ZedResult<bool> {
    let project_path = match cli.project {
        Some(path) => absolute_root(&path)
            .with_io_context(|| format!("Failed to resolve project root {}", path.display()))?,
        None => std::env::current_dir()?,
    };
    let project = UnityProject::new(project_path);
    let preferences_path = match cli.preferences {
        Some(path) => path,
        None => JsonPreferenceStore::default_path()?,
    };
    let preferences = JsonPreferenceStore::open(preferences_path)?;
    info!("Project root: {}", project.project_path().display());

    let editor = |assemblies: PathBuf, preferences: JsonPreferenceStore| -> CliEditor {
        ZedCodeEditor::new(
            project.clone(),
            ZedDiscovery::for_current_platform(),
            ManifestAssemblySource::new(assemblies),
            SystemLauncher,
            preferences,
        )
    };

    match cli.command {
        Command::Sync { assemblies } => {
            let count = editor(assemblies, preferences).sync_all()?;
            println!("Generated {} project file(s)", count);
        }
        Command::SyncIfNeeded {
            assemblies,
            changes,
        } => {
            let synced = editor(assemblies, preferences).sync_if_needed(
                &changes.added,
                &changes.deleted,
                &changes.moved,
                &changes.moved_from,
                &changes.imported,
            )?;
            println!("{}", if synced { "regenerated" } else { "up to date" });
        }
        Command::Open { file, line, column } => {
            let mut editor = editor(PathBuf::new(), preferences);
            if !editor.open_project(file.as_deref().unwrap_or(""), line, column) {
                eprintln!("Failed to open Zed, see the log for details");
                return Ok(false);
            }
        }
        Command::Installations => {
            for path in ZedDiscovery::for_current_platform().installations() {
                println!("{}", path.display());
            }
        }
        Command::Configure {
            editor_path,
            clear_editor_path,
            current_editor_path,
            sync_on_change,
        } => {
            let mut preferences = preferences;
            if let Some(path) = editor_path {
                preferences.set_editor_path(&path)?;
            }
            if clear_editor_path {
                preferences.remove(EDITOR_PATH_KEY)?;
            }
            if let Some(path) = current_editor_path {
                preferences.set_current_editor_path(&path)?;
            }
            if let Some(enabled) = sync_on_change {
                preferences.set_sync_on_change(enabled)?;
            }
            println!("Preferences saved to {}", preferences.path().display());
        }
        Command::Status => {
            let editor = editor(PathBuf::new(), preferences);
            println!("Project root: {}", project.project_path().display());
            match project.detect_unity_version() {
                Ok(version) => println!("Unity version: {}", version),
                Err(e) => println!("Unity version: unknown ({})", e),
            }
            match project.find_solution() {
                Some(solution) => println!("Solution: {}", solution.display()),
                None => println!("Solution: not generated yet"),
            }
            match editor.resolve_editor_path() {
                Some(path) => println!("Zed: {}", path),
                None => println!("Zed: {}", ZedUnityError::EditorNotFound),
            }
            println!("Sync on change: {}", editor.preferences().sync_on_change());
        }
    }

    Ok(true)
}
