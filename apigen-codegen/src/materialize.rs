//! Writing namespaces to their entry files.
//!
//! The caller declares every output file up front. Each declared path maps to
//! a namespace through its location below the API directory:
//! `out/api/tf/compat/__init__.py` is namespace `tf.compat`, and
//! `out/api/__init__.py` is the root namespace.

use std::{
    fs::OpenOptions,
    path::{Path, PathBuf},
};

use indexmap::IndexMap;
use log::{debug, info};

use crate::{Error, ModuleImportsBuilder, Result};

/// Header written at the top of every generated file.
pub const GENERATED_FILE_HEADER: &str = r#""""Imports for Python API.

This file is MACHINE GENERATED! Do not edit.
Generated by: apigen.
"""
"#;

/// Name of the entry file of each namespace.
pub const ENTRY_FILE: &str = "__init__.py";

/// Declared output files, keyed by the namespace they hold.
#[derive(Debug, Clone)]
pub struct OutputLayout {
    api_dir: String,
    files: IndexMap<String, PathBuf>,
}

impl OutputLayout {
    /// Map declared output paths to namespaces.
    ///
    /// Every path must contain `/<api_dir>/`; the last occurrence marks the
    /// root of the API tree. If two paths map to the same namespace the
    /// later one wins.
    pub fn from_paths<I, S>(paths: I, api_dir: &str) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let api_dir = api_dir.trim_matches('/').to_string();
        let mut files = IndexMap::new();

        for path in paths {
            let path = path.as_ref();
            let namespace = namespace_for_path(path, &api_dir).ok_or_else(|| {
                Error::OutsideApiDir {
                    path: path.to_string(),
                    api_dir: api_dir.clone(),
                }
            })?;
            let normalized: PathBuf = Path::new(path).components().collect();
            files.insert(namespace, normalized);
        }

        Ok(Self { api_dir, files })
    }

    /// Declared file of a namespace.
    pub fn path_for(&self, namespace: &str) -> Option<&Path> {
        self.files.get(namespace).map(PathBuf::as_path)
    }

    /// Declared (namespace, path) pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.files.iter().map(|(ns, p)| (ns.as_str(), p.as_path()))
    }

    /// The path a namespace's file is expected at, relative to the API tree's parent.
    pub fn expected_path(&self, namespace: &str) -> String {
        if namespace.is_empty() {
            format!("{}/{}", self.api_dir, ENTRY_FILE)
        } else {
            format!(
                "{}/{}/{}",
                self.api_dir,
                namespace.replace('.', "/"),
                ENTRY_FILE
            )
        }
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Namespace key of an output path, or None if it is outside the API tree.
pub fn namespace_for_path(path: &str, api_dir: &str) -> Option<String> {
    let normalized = path.replace('\\', "/");
    let marker = format!("/{}/", api_dir.trim_matches('/'));
    let start = normalized.rfind(&marker)? + marker.len();
    let below_api = &normalized[start..];
    let module_dir = below_api.rsplit_once('/').map_or("", |(dir, _)| dir);

    Some(module_dir.replace('/', ".").trim_matches('.').to_string())
}

/// Render a namespace's file content.
pub fn render_file(statements: &[String]) -> String {
    format!("{}{}", GENERATED_FILE_HEADER, statements.join("\n"))
}

/// Statistics from materializing the API tree.
#[derive(Debug, Default)]
pub struct MaterializeStats {
    /// Files that did not exist before the run.
    pub created: Vec<PathBuf>,
    /// Files written with a header and statements.
    pub written: Vec<PathBuf>,
    /// Declared files no namespace wrote to; they are left as they were.
    pub untouched: Vec<PathBuf>,
}

/// A file that would be written, for dry runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    pub namespace: String,
    pub path: PathBuf,
    pub content: String,
}

/// Create every declared file, then write each namespace's statements.
///
/// Namespaces without a declared file do not stop the run; they are
/// collected and reported together as [`Error::MissingOutputs`] after all
/// other files were written.
pub fn create_api_files(
    layout: &OutputLayout,
    imports: &ModuleImportsBuilder,
) -> Result<MaterializeStats> {
    let mut stats = MaterializeStats::default();

    for (_, path) in layout.iter() {
        if touch(path)? {
            stats.created.push(path.to_path_buf());
        }
    }

    let mut missing = Vec::new();
    for (namespace, statements) in imports.iter() {
        let Some(path) = layout.path_for(namespace) else {
            missing.push(format!("\"{}\"", layout.expected_path(namespace)));
            continue;
        };
        std::fs::write(path, render_file(statements)).map_err(|e| Error::io(path, e))?;
        debug!("wrote {} statements to {}", statements.len(), path.display());
        stats.written.push(path.to_path_buf());
    }

    check_missing(missing)?;

    stats.untouched = layout
        .iter()
        .filter(|(ns, _)| !imports.has_namespace(ns))
        .map(|(_, path)| path.to_path_buf())
        .collect();

    info!(
        "generated {} files ({} newly created)",
        stats.written.len(),
        stats.created.len()
    );
    Ok(stats)
}

/// Render what [`create_api_files`] would write, without touching the disk.
///
/// Declared files without statements are listed with empty content.
pub fn preview(layout: &OutputLayout, imports: &ModuleImportsBuilder) -> Result<Vec<PreviewFile>> {
    let missing: Vec<String> = imports
        .namespaces()
        .filter(|ns| layout.path_for(ns).is_none())
        .map(|ns| format!("\"{}\"", layout.expected_path(ns)))
        .collect();
    check_missing(missing)?;

    Ok(layout
        .iter()
        .map(|(namespace, path)| {
            let content = if imports.has_namespace(namespace) {
                render_file(imports.imports(namespace))
            } else {
                String::new()
            };
            PreviewFile {
                namespace: namespace.to_string(),
                path: path.to_path_buf(),
                content,
            }
        })
        .collect())
}

fn check_missing(mut missing: Vec<String>) -> Result<()> {
    if missing.is_empty() {
        return Ok(());
    }
    missing.sort();
    Err(Error::MissingOutputs { paths: missing })
}

/// Create `path` and its parents if missing, keeping existing content.
///
/// Returns whether the file was newly created.
fn touch(path: &Path) -> Result<bool> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    let existed = path.exists();
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| Error::io(path, e))?;
    Ok(!existed)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_namespace_for_path() {
        assert_eq!(namespace_for_path("out/api/__init__.py", "api").as_deref(), Some(""));
        assert_eq!(
            namespace_for_path("out/api/tf/__init__.py", "api").as_deref(),
            Some("tf")
        );
        assert_eq!(
            namespace_for_path("out/api/tf/compat/__init__.py", "api").as_deref(),
            Some("tf.compat")
        );
        assert_eq!(
            namespace_for_path(r"C:\out\api\tf\__init__.py", "api").as_deref(),
            Some("tf")
        );
        assert_eq!(namespace_for_path("out/lib/tf/__init__.py", "api"), None);
        assert_eq!(namespace_for_path("api/__init__.py", "api"), None);
    }

    #[test]
    fn test_last_api_dir_marker_wins() {
        assert_eq!(
            namespace_for_path("/src/api/gen/api/tf/__init__.py", "api").as_deref(),
            Some("tf")
        );
    }

    #[test]
    fn test_api_dir_slashes_are_trimmed() {
        assert_eq!(
            namespace_for_path("out/gen_api/tf/__init__.py", "/gen_api/").as_deref(),
            Some("tf")
        );
    }

    #[test]
    fn test_layout_rejects_path_outside_api_dir() {
        let err = OutputLayout::from_paths(["out/api/__init__.py", "out/lib/__init__.py"], "api")
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Output files must be in api/ directory, found out/lib/__init__.py."
        );
    }

    #[test]
    fn test_expected_path() {
        let layout = OutputLayout::from_paths(Vec::<String>::new(), "api").unwrap();
        assert_eq!(layout.expected_path(""), "api/__init__.py");
        assert_eq!(layout.expected_path("tf.compat"), "api/tf/compat/__init__.py");
    }

    #[test]
    fn test_render_file() {
        let content = render_file(&["import a".to_string(), "import b".to_string()]);
        assert!(content.starts_with("\"\"\"Imports for Python API."));
        assert!(content.ends_with("\"\"\"\nimport a\nimport b"));
    }

    #[test]
    fn test_create_api_files_writes_and_touches() {
        let temp = TempDir::new().unwrap();
        let api = temp.path().join("api");
        let root = api.join(ENTRY_FILE);
        let tf = api.join("tf").join(ENTRY_FILE);
        let unused = api.join("unused").join(ENTRY_FILE);

        let layout = OutputLayout::from_paths(
            [&root, &tf, &unused].map(|p| p.display().to_string()),
            "api",
        )
        .unwrap();

        let mut imports = ModuleImportsBuilder::new();
        imports.add_import("", "pkg.api", "tf", "tf").unwrap();
        imports.add_import("tf", "pkg.impl", "Foo", "Foo").unwrap();

        let stats = create_api_files(&layout, &imports).unwrap();

        assert_eq!(stats.created.len(), 3);
        assert_eq!(stats.written.len(), 2);
        assert_eq!(stats.untouched.len(), 1);
        assert_eq!(
            fs::read_to_string(&tf).unwrap(),
            format!("{}from pkg.impl import Foo", GENERATED_FILE_HEADER)
        );
        assert_eq!(fs::read_to_string(&unused).unwrap(), "");
    }

    #[test]
    fn test_existing_file_is_overwritten() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("api").join(ENTRY_FILE);
        fs::create_dir_all(root.parent().unwrap()).unwrap();
        fs::write(&root, "stale").unwrap();

        let layout = OutputLayout::from_paths([root.display().to_string()], "api").unwrap();
        let mut imports = ModuleImportsBuilder::new();
        imports.add_import("", "m", "x", "x").unwrap();

        let stats = create_api_files(&layout, &imports).unwrap();

        assert!(stats.created.is_empty());
        assert_eq!(
            fs::read_to_string(&root).unwrap(),
            format!("{}from m import x", GENERATED_FILE_HEADER)
        );
    }

    #[test]
    fn test_missing_outputs_aggregated() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("api").join(ENTRY_FILE);
        let layout = OutputLayout::from_paths([root.display().to_string()], "api").unwrap();

        let mut imports = ModuleImportsBuilder::new();
        imports.add_import("", "m", "x", "x").unwrap();
        imports.add_import("tf.b", "m", "y", "y").unwrap();
        imports.add_import("tf.a", "m", "z", "z").unwrap();

        let err = create_api_files(&layout, &imports).unwrap_err();

        match err {
            Error::MissingOutputs { paths } => assert_eq!(
                paths,
                vec![
                    "\"api/tf/a/__init__.py\"".to_string(),
                    "\"api/tf/b/__init__.py\"".to_string(),
                ]
            ),
            other => panic!("unexpected error: {other:?}"),
        }
        // declared files are still written
        assert_eq!(
            fs::read_to_string(&root).unwrap(),
            format!("{}from m import x", GENERATED_FILE_HEADER)
        );
    }

    #[test]
    fn test_preview_does_not_write() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("api").join(ENTRY_FILE);
        let layout = OutputLayout::from_paths([root.display().to_string()], "api").unwrap();

        let mut imports = ModuleImportsBuilder::new();
        imports.add_import("", "m", "x", "x").unwrap();

        let files = preview(&layout, &imports).unwrap();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].namespace, "");
        assert!(files[0].content.ends_with("from m import x"));
        assert!(!root.exists());
    }

    #[test]
    fn test_preview_reports_missing_outputs() {
        let layout = OutputLayout::from_paths(Vec::<String>::new(), "api").unwrap();
        let mut imports = ModuleImportsBuilder::new();
        imports.add_import("tf", "m", "x", "x").unwrap();

        let err = preview(&layout, &imports).unwrap_err();
        assert!(matches!(err, Error::MissingOutputs { .. }));
    }
}
