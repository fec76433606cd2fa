//! File logging for the CLI.
//!
//! The Unity shim starts a fresh process per request, so each run truncates the
//! log and starts it with a header naming the version and process.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use log::{LevelFilter, Log, Metadata, Record};

use crate::APP_DIRECTORY_NAME;
use crate::error::{ZedResult, ZedUnityError};

pub const LOG_FILE_NAME: &str = "zed_unity.log";

struct FileLogger {
    file: Mutex<File>,
    level: LevelFilter,
}

impl FileLogger {
    fn create(file_path: &Path, level: LevelFilter) -> io::Result<Self> {
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(file_path)?;
        writeln!(
            file,
            "zed_unity {} (pid {}), level {}",
            env!("CARGO_PKG_VERSION"),
            std::process::id(),
            level
        )?;

        Ok(FileLogger {
            file: Mutex::new(file),
            level,
        })
    }
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if let Ok(mut file) = self.file.lock() {
            let _ = writeln!(
                file,
                "[{}] [{}] [{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target().trim_start_matches("zed_unity::"),
                record.args()
            );
            let _ = file.flush();
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}

/// `{local data dir}/ZedUnity/zed_unity.log`
pub fn get_log_file_path() -> ZedResult<PathBuf> {
    let data_dir = dirs::data_local_dir().ok_or(ZedUnityError::NoDataDirectory {
        kind: "local data",
    })?;

    Ok(data_dir.join(APP_DIRECTORY_NAME).join(LOG_FILE_NAME))
}

/// Installs the file logger; `verbose` lowers the threshold from info to debug
pub fn init_logger(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let logger = FileLogger::create(&get_log_file_path()?, level)?;

    log::set_boxed_logger(Box::new(logger)).map(|()| log::set_max_level(level))?;

    Ok(())
}
