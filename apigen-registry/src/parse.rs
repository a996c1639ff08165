//! Registry parsing from files and strings.

use std::{
    collections::{HashMap, HashSet},
    str::FromStr,
};

use indexmap::IndexMap;
use log::{debug, warn};
use serde::Deserialize;

use crate::{
    ConstantDecl, ConstantValue, Error, ExportTable, GeneratorConfig, Module, Registry, Result,
    SymbolArena, SymbolId,
    error::SourceContext,
    validate::{find_nth_name_span, find_quoted_span, find_symbol_span, validate_dotted_path},
};

/// Default filename used in diagnostics for registries parsed from strings.
pub const DEFAULT_FILENAME: &str = "exports.toml";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRegistry {
    #[serde(default)]
    generator: GeneratorConfig,
    #[serde(default)]
    symbols: IndexMap<String, RawSymbol>,
    #[serde(default)]
    modules: Vec<RawModule>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawSymbol {
    exports: Vec<String>,
    wraps: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawModule {
    name: String,
    #[serde(default)]
    members: IndexMap<String, String>,
    #[serde(default)]
    constants: Vec<RawConstant>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConstant {
    exports: Vec<String>,
    value: toml::Value,
}

impl FromStr for Registry {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_registry(s, DEFAULT_FILENAME).map(|(_, registry)| registry)
    }
}

/// Parse a registry document, returning its generator settings and contents.
pub fn parse_registry(content: &str, filename: &str) -> Result<(GeneratorConfig, Registry)> {
    let ctx = SourceContext::new(content, filename);
    let raw: RawRegistry = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;

    validate_config(&raw.generator, &ctx)?;
    let (symbols, keys) = lower_symbols(&raw.symbols, &ctx)?;
    let exports = lower_exports(&raw.symbols, &symbols, &keys, &ctx)?;
    let modules = lower_modules(&raw.modules, &keys, &ctx)?;

    debug!(
        "loaded {} symbols, {} exported, {} modules from {}",
        symbols.len(),
        exports.len(),
        modules.len(),
        filename
    );

    Ok((raw.generator, Registry::from_parts(symbols, exports, modules)))
}

fn validate_config(config: &GeneratorConfig, ctx: &SourceContext) -> Result<()> {
    for name in [&config.package, &config.output_module] {
        if let Some(reason) = validate_dotted_path(name) {
            return Err(ctx.invalid_module_name_error(
                name.as_str(),
                reason,
                find_quoted_span(ctx.src(), name),
            ));
        }
    }
    Ok(())
}

/// Allocate every symbol, then resolve `wraps` references and reject cycles.
fn lower_symbols(
    raw: &IndexMap<String, RawSymbol>,
    ctx: &SourceContext,
) -> Result<(SymbolArena, HashMap<String, SymbolId>)> {
    let mut arena = SymbolArena::new();
    let mut keys = HashMap::new();

    for key in raw.keys() {
        keys.insert(key.clone(), arena.alloc(key.as_str()));
    }

    for (key, symbol) in raw {
        let Some(target) = &symbol.wraps else {
            continue;
        };
        let wraps = *keys.get(target).ok_or_else(|| {
            ctx.unknown_symbol_error(
                target.as_str(),
                format!("'wraps' of symbol '{}'", key),
                find_quoted_span(ctx.src(), target),
            )
        })?;
        arena.set_wraps(keys[key], wraps);
    }

    for key in raw.keys() {
        if let Some(start) = arena.find_cycle(keys[key]) {
            let name = arena.get(start).key.clone();
            let span = find_symbol_span(ctx.src(), &name);
            return Err(ctx.decorator_cycle_error(name, span));
        }
    }

    Ok((arena, keys))
}

fn lower_exports(
    raw: &IndexMap<String, RawSymbol>,
    arena: &SymbolArena,
    keys: &HashMap<String, SymbolId>,
    ctx: &SourceContext,
) -> Result<ExportTable> {
    let mut table = ExportTable::new();

    for (key, symbol) in raw {
        if symbol.exports.is_empty() {
            continue;
        }
        validate_paths(&symbol.exports, ctx)?;

        let id = keys[key];
        if arena.get(id).is_decorator() {
            // The scanner reads metadata from the unwrapped object only.
            warn!(
                "symbol '{}' wraps another symbol; its exports are ignored",
                key
            );
            continue;
        }
        table.register(id, symbol.exports.iter().cloned());
    }

    Ok(table)
}

fn lower_modules(
    raw: &[RawModule],
    keys: &HashMap<String, SymbolId>,
    ctx: &SourceContext,
) -> Result<Vec<Module>> {
    let mut seen = HashSet::new();
    let mut modules = Vec::with_capacity(raw.len());

    for raw_module in raw {
        let name = raw_module.name.as_str();
        if let Some(reason) = validate_dotted_path(name) {
            return Err(ctx.invalid_module_name_error(
                name,
                reason,
                find_nth_name_span(ctx.src(), name, 0),
            ));
        }
        if !seen.insert(name) {
            return Err(
                ctx.duplicate_module_error(name, find_nth_name_span(ctx.src(), name, 1))
            );
        }

        let mut module = Module::new(name);

        for (member, key) in &raw_module.members {
            let id = *keys.get(key).ok_or_else(|| {
                ctx.unknown_symbol_error(
                    key.as_str(),
                    format!("member '{}' of module '{}'", member, name),
                    find_quoted_span(ctx.src(), key),
                )
            })?;
            module.add_member(member.as_str(), id);
        }

        for constant in &raw_module.constants {
            validate_paths(&constant.exports, ctx)?;
            let value = ConstantValue::try_from(&constant.value)
                .map_err(|ty| ctx.invalid_constant_error(name, ty, None))?;
            module.add_constant(ConstantDecl {
                exports: constant.exports.clone(),
                value,
            });
        }

        modules.push(module);
    }

    Ok(modules)
}

fn validate_paths(paths: &[String], ctx: &SourceContext) -> Result<()> {
    for path in paths {
        if let Some(reason) = validate_dotted_path(path) {
            return Err(ctx.invalid_export_path_error(
                path.as_str(),
                reason,
                find_quoted_span(ctx.src(), path),
            ));
        }
    }
    Ok(())
}
