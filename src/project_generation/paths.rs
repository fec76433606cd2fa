use std::env;
use std::io;
use std::path::{Component, Path, PathBuf, MAIN_SEPARATOR_STR};

/// Resolves a project root against the process working directory.
///
/// Relative paths written into generated files are computed from this root, so it
/// must be absolute and free of `.`/`..` before any file is generated.
pub fn absolute_root(path: &Path) -> io::Result<PathBuf> {
    if path.is_absolute() {
        return Ok(normalized_components(path).iter().collect());
    }
    Ok(absolute_from(&env::current_dir()?, path))
}

/// `path` joined onto `working_directory` with `.` and `..` resolved lexically
pub fn absolute_from(working_directory: &Path, path: &Path) -> PathBuf {
    let joined = working_directory.join(path);
    normalized_components(&joined).iter().collect()
}

/// Returns `full` relative to the directory `base`, joined with the platform separator.
///
/// Relative inputs are taken to be relative to `base` already. When the two paths
/// share no root (another drive on Windows) the full path is returned unchanged.
pub fn make_relative_path(base: &Path, full: &Path) -> String {
    let full: PathBuf = if full.is_absolute() {
        full.to_path_buf()
    } else {
        base.join(full)
    };

    let base_parts = normalized_components(base);
    let full_parts = normalized_components(&full);

    let base_root: Vec<_> = base_parts.iter().take_while(|c| is_root(c)).collect();
    let full_root: Vec<_> = full_parts.iter().take_while(|c| is_root(c)).collect();
    if base_root != full_root {
        return full.to_string_lossy().into_owned();
    }

    let common = base_parts
        .iter()
        .zip(full_parts.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut segments: Vec<String> = Vec::new();
    for _ in common..base_parts.len() {
        segments.push("..".to_string());
    }
    for part in &full_parts[common..] {
        segments.push(part.as_os_str().to_string_lossy().into_owned());
    }

    segments.join(MAIN_SEPARATOR_STR)
}

fn is_root(component: &Component) -> bool {
    matches!(component, Component::Prefix(_) | Component::RootDir)
}

fn normalized_components(path: &Path) -> Vec<Component<'_>> {
    let mut parts: Vec<Component> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(parts.last(), Some(Component::Normal(_))) {
                    parts.pop();
                } else {
                    parts.push(component);
                }
            }
            other => parts.push(other),
        }
    }
    parts
}
