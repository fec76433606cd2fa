//! Fire-and-forget process launching

use std::process::{Command, Stdio};

use crate::arguments::split_arguments;
use crate::error::{ZedResult, ZedUnityError};

/// Starts an editor process. Implementations never panic on failure.
pub trait ProcessLauncher {
    /// Returns false if the process could not be started
    fn launch(&self, executable: &str, arguments: &str) -> bool;
}

/// Launches through the operating system without waiting for the child
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLauncher;

impl SystemLauncher {
    /// Spawns `executable` detached with null stdio and returns its pid
    pub fn spawn(&self, executable: &str, arguments: &str) -> ZedResult<u32> {
        let args = split_arguments(arguments);
        let mut command = build_command(executable, &args);
        command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        let child = command.spawn().map_err(|e| ZedUnityError::Launch {
            executable: executable.to_string(),
            source: e,
        })?;
        Ok(child.id())
    }
}

impl ProcessLauncher for SystemLauncher {
    fn launch(&self, executable: &str, arguments: &str) -> bool {
        match self.spawn(executable, arguments) {
            Ok(pid) => {
                log::info!("Launched {} {} (pid {})", executable, arguments, pid);
                true
            }
            Err(e) => {
                log::error!("Failed to launch Zed: {}", e);
                false
            }
        }
    }
}

fn build_command(executable: &str, args: &[String]) -> Command {
    // macOS application bundles are started through LaunchServices
    if cfg!(target_os = "macos") && executable.trim_end_matches('/').ends_with(".app") {
        let mut command = Command::new("open");
        command.arg("-a").arg(executable).arg("--args").args(args);
        return command;
    }

    let mut command = Command::new(executable);
    command.args(args);
    command
}
