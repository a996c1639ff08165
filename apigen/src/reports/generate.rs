//! Generate command report data structures.

use super::output::{Output, Report};

/// Report data from API generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Number of registered modules (scanned or not).
    pub module_count: usize,
    /// Number of exports found by the scan.
    pub export_count: usize,
    /// Number of namespaces with statements.
    pub namespace_count: usize,
    /// Total statements across all namespaces.
    pub statement_count: usize,
    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

/// Result when files were written to disk.
#[derive(Debug, Default)]
pub struct WrittenResult {
    /// Files written with statements.
    pub written: Vec<String>,
    /// Files that did not exist before.
    pub created: Vec<String>,
    /// Declared files no namespace wrote to.
    pub untouched: Vec<String>,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    pub path: String,
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Preview(files) => {
                for file in files {
                    out.divider(&file.path);
                    out.preformatted(&file.content);
                }
                out.divider("Summary");
                out.preformatted(&format!("{} files would be generated", files.len()));
            }
            GenerationResult::Written(written) => {
                out.key_value("Modules", &self.module_count.to_string());
                out.key_value("Exports", &self.export_count.to_string());
                out.key_value(
                    "Namespaces",
                    &format!(
                        "{} ({} statements)",
                        self.namespace_count, self.statement_count
                    ),
                );

                if !written.created.is_empty() {
                    out.newline();
                    out.section("New files");
                    for path in &written.created {
                        out.added_item(path);
                    }
                }

                if !written.untouched.is_empty() {
                    out.newline();
                    out.section("Declared but empty");
                    for path in &written.untouched {
                        out.list_item(path);
                    }
                }

                out.newline();
                out.preformatted(&format!("Generated {} files", written.written.len()));
            }
        }
    }
}
