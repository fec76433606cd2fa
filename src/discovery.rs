//! Discovers Zed installations on the current platform.
//!
//! Each platform has a short fixed list of install locations. Only locations that
//! exist are reported, followed by the bare `zed` command which is always offered
//! and left for the OS to resolve through `PATH` at launch time.

use std::iter;
use std::path::PathBuf;

pub const EDITOR_NAME: &str = "Zed";
pub const EDITOR_COMMAND: &str = "zed";

/// Platform specific search strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    Unix,
}

impl Platform {
    /// The platform this binary was compiled for
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Unix
        }
    }

    /// Fixed install locations to probe, in priority order, without the bare command
    pub fn candidate_paths(self, roots: &SearchRoots) -> Vec<PathBuf> {
        match self {
            Platform::Windows => {
                let mut paths = Vec::new();
                if let Some(local_app_data) = &roots.local_app_data {
                    // installer: %LOCALAPPDATA%\Programs\Zed\zed.exe
                    paths.push(local_app_data.join("Programs").join("Zed").join("zed.exe"));
                    // self-updating bundle: %LOCALAPPDATA%\Zed\bin\zed.exe
                    paths.push(local_app_data.join("Zed").join("bin").join("zed.exe"));
                }
                if let Some(home) = &roots.home {
                    let scoop = home.join("scoop");
                    paths.push(scoop.join("apps").join("zed").join("current").join("zed.exe"));
                    paths.push(scoop.join("shims").join("zed.exe"));
                }
                paths
            }
            Platform::MacOs => vec![
                PathBuf::from("/Applications/Zed.app/Contents/MacOS/zed"),
                PathBuf::from("/Applications/Zed Preview.app/Contents/MacOS/zed"),
            ],
            Platform::Unix => {
                let mut paths = Vec::new();
                if let Some(home) = &roots.home {
                    paths.push(home.join(".local").join("bin").join("zed"));
                }
                paths.push(PathBuf::from("/usr/local/bin/zed"));
                paths.push(PathBuf::from("/usr/bin/zed"));
                paths.push(PathBuf::from("/snap/bin/zed"));
                paths
            }
        }
    }
}

/// Base directories the per-user candidates hang off
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchRoots {
    /// `%LOCALAPPDATA%` on Windows
    pub local_app_data: Option<PathBuf>,
    pub home: Option<PathBuf>,
}

impl SearchRoots {
    pub fn from_env() -> Self {
        Self {
            local_app_data: dirs::data_local_dir(),
            home: dirs::home_dir(),
        }
    }
}

/// Finds Zed executables for one platform
#[derive(Debug, Clone)]
pub struct ZedDiscovery {
    platform: Platform,
    roots: SearchRoots,
}

impl ZedDiscovery {
    pub fn new(platform: Platform, roots: SearchRoots) -> Self {
        Self { platform, roots }
    }

    pub fn for_current_platform() -> Self {
        Self::new(Platform::current(), SearchRoots::from_env())
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Existing install locations followed by the bare `zed` command.
    ///
    /// The filesystem is probed lazily while iterating; every call starts over.
    /// The bare command is not checked, callers that need a verified executable
    /// must check it themselves.
    pub fn installations(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.platform
            .candidate_paths(&self.roots)
            .into_iter()
            .filter(|path| path.is_file())
            .chain(iter::once(PathBuf::from(EDITOR_COMMAND)))
    }
}
