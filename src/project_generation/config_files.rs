//! OmniSharp and Zed workspace configuration.
//!
//! Both files are only created when absent. An existing file is never touched,
//! user edits win over newer defaults.

use std::fs;
use std::path::{Path, PathBuf};

use super::write_file;
use crate::error::{IoContext, ZedResult};

pub const OMNISHARP_JSON: &str = "omnisharp.json";
pub const ZED_SETTINGS_DIR: &str = ".zed";
pub const ZED_SETTINGS_FILE: &str = "settings.json";

pub const DEFAULT_OMNISHARP_JSON: &str = r#"{
  "RoslynExtensionsOptions": {
    "enableDecompilationSupport": false,
    "enableImportCompletion": true,
    "enableAnalyzersSupport": true
  },
  "FormattingOptions": {
    "enableEditorConfigSupport": true,
    "useTabs": false,
    "tabSize": 4,
    "indentationSize": 4
  },
  "MsBuildOptions": {
    "loadProjectsOnDemand": false
  },
  "Plugins": {
    "locationPaths": []
  }
}
"#;

pub const DEFAULT_ZED_SETTINGS_JSON: &str = r##"{
  "languages": {
    "C#": {
      "language_servers": ["omnisharp"],
      "format_on_save": "off"
    }
  },
  "lsp": {
    "omnisharp": {
      "initialization_options": {
        "RoslynExtensionsOptions": {
          "enableDecompilationSupport": false,
          "enableImportCompletion": true
        }
      }
    }
  }
}
"##;

pub fn omnisharp_json_path(project_directory: &Path) -> PathBuf {
    project_directory.join(OMNISHARP_JSON)
}

pub fn zed_settings_path(project_directory: &Path) -> PathBuf {
    project_directory.join(ZED_SETTINGS_DIR).join(ZED_SETTINGS_FILE)
}

/// Writes `omnisharp.json` if it does not exist yet. Returns whether it wrote.
pub fn write_omnisharp_json(project_directory: &Path) -> ZedResult<bool> {
    write_if_absent(&omnisharp_json_path(project_directory), DEFAULT_OMNISHARP_JSON)
}

/// Writes `.zed/settings.json` if it does not exist yet. Returns whether it wrote.
pub fn write_zed_settings(project_directory: &Path) -> ZedResult<bool> {
    let settings_dir = project_directory.join(ZED_SETTINGS_DIR);
    fs::create_dir_all(&settings_dir)
        .with_io_context(|| format!("Failed to create {}", settings_dir.display()))?;

    write_if_absent(&zed_settings_path(project_directory), DEFAULT_ZED_SETTINGS_JSON)
}

fn write_if_absent(path: &Path, content: &str) -> ZedResult<bool> {
    if path.exists() {
        log::debug!("Keeping existing {}", path.display());
        return Ok(false);
    }

    write_file(path, content.as_bytes())?;
    log::info!("Created default {}", path.display());
    Ok(true)
}
