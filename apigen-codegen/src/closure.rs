//! Parent-namespace bindings.
//!
//! Importing `foo.bar.Value` only works if `foo` binds `bar`, and the root
//! binds `foo`. This module adds those bindings for every namespace that
//! received statements.

use log::debug;

use crate::{ModuleImportsBuilder, Result};

/// Bind every namespace segment into its parent, up to the root.
///
/// Each segment is imported from `output_module` extended by the segments
/// already walked, e.g. for `tf.compat` the root gets
/// `from <output_module> import tf` and `tf` gets
/// `from <output_module>.tf import compat`. Goes through
/// [`ModuleImportsBuilder::add_import`], so a segment colliding with a real
/// export of the same name fails with `SymbolExposedTwice`.
pub fn expand_namespaces(imports: &mut ModuleImportsBuilder, output_module: &str) -> Result<()> {
    let namespaces: Vec<String> = imports
        .namespaces()
        .filter(|ns| !ns.is_empty())
        .map(str::to_string)
        .collect();

    for namespace in &namespaces {
        let mut parent = String::new();
        for segment in namespace.split('.') {
            let import_from = if parent.is_empty() {
                output_module.to_string()
            } else {
                format!("{}.{}", output_module, parent)
            };
            imports.add_import(&parent, &import_from, segment, segment)?;

            if !parent.is_empty() {
                parent.push('.');
            }
            parent.push_str(segment);
        }
        debug!("bound namespace '{}' into its parents", namespace);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    const OUTPUT: &str = "pkg.api";

    #[test]
    fn test_nested_namespace_bound_at_each_level() {
        let mut imports = ModuleImportsBuilder::new();
        imports.add_import("pkg.sub", "pkg.impl", "Name", "Name").unwrap();

        expand_namespaces(&mut imports, OUTPUT).unwrap();

        assert_eq!(imports.imports(""), &["from pkg.api import pkg".to_string()]);
        assert_eq!(imports.imports("pkg"), &["from pkg.api.pkg import sub".to_string()]);
        assert_eq!(
            imports.imports("pkg.sub"),
            &["from pkg.impl import Name".to_string()]
        );
    }

    #[test]
    fn test_shared_prefixes_bound_once() {
        let mut imports = ModuleImportsBuilder::new();
        imports.add_import("tf.a", "m", "X", "X").unwrap();
        imports.add_import("tf.b", "m", "Y", "Y").unwrap();
        imports.add_import("tf", "m", "Z", "Z").unwrap();

        expand_namespaces(&mut imports, OUTPUT).unwrap();

        assert_eq!(imports.imports(""), &["from pkg.api import tf".to_string()]);
        assert_eq!(
            imports.imports("tf"),
            &[
                "from m import Z".to_string(),
                "from pkg.api.tf import a".to_string(),
                "from pkg.api.tf import b".to_string(),
            ]
        );
    }

    #[test]
    fn test_root_only_is_untouched() {
        let mut imports = ModuleImportsBuilder::new();
        imports.add_import("", "m", "X", "X").unwrap();

        expand_namespaces(&mut imports, OUTPUT).unwrap();

        assert_eq!(imports.len(), 1);
        assert_eq!(imports.imports(""), &["from m import X".to_string()]);
    }

    #[test]
    fn test_segment_colliding_with_export() {
        let mut imports = ModuleImportsBuilder::new();
        imports.add_import("tf", "m", "nn", "nn").unwrap();
        imports.add_import("tf.nn", "m", "relu", "relu").unwrap();

        let err = expand_namespaces(&mut imports, OUTPUT).unwrap_err();

        assert!(matches!(err, Error::SymbolExposedTwice { ref name } if name == "tf.nn"));
    }

    #[test]
    fn test_expansion_is_idempotent() {
        let mut imports = ModuleImportsBuilder::new();
        imports.add_import("tf.compat", "m", "X", "X").unwrap();

        expand_namespaces(&mut imports, OUTPUT).unwrap();
        let first = imports.clone().into_module_imports();
        expand_namespaces(&mut imports, OUTPUT).unwrap();

        assert_eq!(imports.into_module_imports(), first);
    }
}
