//! Resolution of the declared output file list.

use std::path::{Path, PathBuf};

use eyre::{Context, Result};

/// Resolve the output paths given on the command line.
///
/// A single argument names an output manifest: a file holding a
/// semicolon-separated list of paths. Two or more arguments are the paths
/// themselves.
pub fn resolve_outputs(args: &[PathBuf]) -> Result<Vec<String>> {
    match args {
        [manifest] => read_output_manifest(manifest),
        paths => Ok(paths.iter().map(|p| p.display().to_string()).collect()),
    }
}

/// Read a semicolon-separated output manifest.
pub fn read_output_manifest(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read output manifest '{}'", path.display()))?;
    Ok(parse_output_manifest(&content))
}

/// Split manifest content on `;`, trimming entries and dropping empty ones.
pub fn parse_output_manifest(content: &str) -> Vec<String> {
    content
        .split(';')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}
