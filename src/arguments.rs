//! Zed command-line construction.
//!
//! Zed opens a location with `zed path:line:column` and a workspace with
//! `zed <folder>`. Each argument is wrapped in double quotes when it contains a
//! space so the launcher can split the combined string back into arguments.

use std::path::Path;

use crate::discovery::EDITOR_COMMAND;

/// Returns true if the given path points to a Zed executable
pub fn is_zed_path(path: &str) -> bool {
    if path.is_empty() {
        return false;
    }

    let file_name = path.rsplit(['/', '\\']).next().unwrap_or(path);
    Path::new(file_name)
        .file_stem()
        .map(|stem| stem.to_string_lossy().eq_ignore_ascii_case(EDITOR_COMMAND))
        .unwrap_or(false)
}

/// Builds the argument that opens `file_path`, optionally at a line and column.
///
/// The column is only emitted together with a line; values below 1 mean "not given".
pub fn build_open_file_args(file_path: &str, line: i32, column: i32) -> String {
    let file_path = file_path.replace('\\', "/");

    if line < 1 {
        return quote(file_path);
    }

    if column < 1 {
        return quote(format!("{}:{}", file_path, line));
    }

    quote(format!("{}:{}:{}", file_path, line, column))
}

/// Builds the argument that opens a project folder as the workspace
pub fn build_open_project_args(project_path: &str) -> String {
    quote(project_path.replace('\\', "/"))
}

fn quote(value: String) -> String {
    if value.contains(' ') {
        format!("\"{}\"", value)
    } else {
        value
    }
}

/// Splits an argument string on whitespace, keeping double-quoted runs together.
///
/// Quotes themselves are dropped. This is the inverse of the quoting above.
pub fn split_arguments(arguments: &str) -> Vec<String> {
    let mut result = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut has_token = false;

    for ch in arguments.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                has_token = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if has_token {
                    result.push(std::mem::take(&mut current));
                    has_token = false;
                }
            }
            c => {
                current.push(c);
                has_token = true;
            }
        }
    }

    if has_token {
        result.push(current);
    }
    result
}
