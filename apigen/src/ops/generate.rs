//! Generate operation - scan the registry and write the API tree.

use apigen_codegen::{OutputLayout, create_api_files, pipeline::Pipeline, preview};
use apigen_registry::{GeneratorConfig, Registry};
use eyre::{Context, Result};
use log::info;

use crate::reports::{GenerateReport, GenerationResult, PreviewFile, WrittenResult};

/// Options for the generate operation.
pub struct GenerateOptions {
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// The output layout is validated before anything runs, so a path outside
/// the API directory fails without touching the disk.
pub fn generate(
    registry: &Registry,
    config: &GeneratorConfig,
    outputs: &[String],
    opts: GenerateOptions,
) -> Result<GenerateReport> {
    let layout = OutputLayout::from_paths(outputs, &config.api_dir)?;

    let ctx = Pipeline::new()
        .run(registry, config)
        .wrap_err("Failed to build API imports")?;
    info!(
        "{} exports in {} namespaces",
        ctx.exports.len(),
        ctx.namespace_count()
    );

    let result = if opts.dry_run {
        let files = preview(&layout, &ctx.imports)?
            .into_iter()
            .map(|f| PreviewFile {
                path: f.path.display().to_string(),
                content: f.content,
            })
            .collect();
        GenerationResult::Preview(files)
    } else {
        let stats = create_api_files(&layout, &ctx.imports)?;
        GenerationResult::Written(WrittenResult {
            written: paths_to_strings(&stats.written),
            created: paths_to_strings(&stats.created),
            untouched: paths_to_strings(&stats.untouched),
        })
    };

    Ok(GenerateReport {
        module_count: registry.modules().len(),
        export_count: ctx.exports.len(),
        namespace_count: ctx.namespace_count(),
        statement_count: ctx.imports.statement_count(),
        result,
    })
}

fn paths_to_strings(paths: &[std::path::PathBuf]) -> Vec<String> {
    paths.iter().map(|p| p.display().to_string()).collect()
}
