//! Supporting helpers shared by the CLI printers.

use owo_colors::OwoColorize;
use std::path::Path;

/// Colors are enabled for non-machine outputs unless `NO_COLOR` is set.
pub fn use_colors(output: &str) -> bool {
    output == "human" && std::env::var_os("NO_COLOR").is_none()
}

fn stderr_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

pub fn error_prefix() -> String {
    if stderr_colors() {
        "error:".red().bold().to_string()
    } else {
        "error:".to_string()
    }
}

pub fn note_prefix() -> String {
    if stderr_colors() {
        "note:".cyan().bold().to_string()
    } else {
        "note:".to_string()
    }
}

pub fn info_prefix() -> String {
    if stderr_colors() {
        "info:".blue().bold().to_string()
    } else {
        "info:".to_string()
    }
}

/// Reject an output mode outside `allowed`.
pub fn check_output_mode(output: &str, allowed: &[&str]) -> Result<(), String> {
    if allowed.contains(&output) {
        Ok(())
    } else {
        Err(format!(
            "unknown output mode '{}' (expected {})",
            output,
            allowed.join("|")
        ))
    }
}

/// Render `file` relative to `root` when it lives below it.
pub fn display_path(root: &Path, file: &str) -> String {
    let p = Path::new(file);
    if p.is_relative() {
        return file.to_string();
    }
    match pathdiff::diff_paths(p, root) {
        Some(rel) if !rel.starts_with("..") => rel.to_string_lossy().to_string(),
        _ => file.to_string(),
    }
}
