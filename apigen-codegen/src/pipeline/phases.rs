//! Built-in pipeline phases.

use super::{GenerationContext, Phase};
use crate::{ExportSource, Result, expand_namespaces, scan_exports};

/// Collects exports from the registry.
pub struct ScanPhase;

impl Phase for ScanPhase {
    fn name(&self) -> &'static str {
        "scan"
    }

    fn run(&self, ctx: &mut GenerationContext<'_>) -> Result<()> {
        ctx.exports = scan_exports(ctx.registry, ctx.config);
        Ok(())
    }
}

/// Turns exports into per-namespace statements.
pub struct BuildPhase;

impl Phase for BuildPhase {
    fn name(&self) -> &'static str {
        "build"
    }

    fn run(&self, ctx: &mut GenerationContext<'_>) -> Result<()> {
        for export in &ctx.exports {
            match &export.source {
                ExportSource::Symbol(member) => ctx.imports.add_import(
                    &export.namespace,
                    &export.source_module,
                    member,
                    &export.dest_name,
                )?,
                ExportSource::Constant(value) => {
                    ctx.imports
                        .add_constant(&export.namespace, value, &export.dest_name)?
                }
            }
        }
        Ok(())
    }
}

/// Binds every namespace into its parent.
pub struct ExpandPhase;

impl Phase for ExpandPhase {
    fn name(&self) -> &'static str {
        "expand"
    }

    fn run(&self, ctx: &mut GenerationContext<'_>) -> Result<()> {
        expand_namespaces(&mut ctx.imports, &ctx.config.output_module)
    }
}
