//! Statement rendering for generated entry files.

use apigen_registry::ConstantValue;

/// Formats an import statement.
///
/// An empty `source_module` renders a bare `import`. The `as` clause is only
/// emitted when the destination name differs from the source name.
pub fn format_import(source_module: &str, source_name: &str, dest_name: &str) -> String {
    match (source_module.is_empty(), source_name == dest_name) {
        (false, true) => format!("from {} import {}", source_module, source_name),
        (false, false) => format!(
            "from {} import {} as {}",
            source_module, source_name, dest_name
        ),
        (true, true) => format!("import {}", source_name),
        (true, false) => format!("import {} as {}", source_name, dest_name),
    }
}

/// Formats a constant assignment such as `BAR = 7`.
pub fn format_constant(dest_name: &str, value: &ConstantValue) -> String {
    format!("{} = {}", dest_name, value)
}

/// The global key used to detect two different exports under one name.
pub fn full_export_name(namespace: &str, dest_name: &str) -> String {
    if namespace.is_empty() {
        dest_name.to_string()
    } else {
        format!("{}.{}", namespace, dest_name)
    }
}

/// Split a dotted export path into (destination namespace, leaf name).
///
/// `tf.math.add` becomes `("tf.math", "add")`; a single segment lands in the
/// root namespace.
pub fn split_export_path(path: &str) -> (&str, &str) {
    path.rsplit_once('.').unwrap_or(("", path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_import() {
        assert_eq!(format_import("m", "x", "x"), "from m import x");
        assert_eq!(format_import("m", "x", "y"), "from m import x as y");
        assert_eq!(format_import("", "x", "x"), "import x");
        assert_eq!(format_import("", "x", "y"), "import x as y");
    }

    #[test]
    fn test_format_constant() {
        assert_eq!(format_constant("BAR", &ConstantValue::Integer(7)), "BAR = 7");
        assert_eq!(
            format_constant("NAME", &ConstantValue::String("tf".into())),
            "NAME = 'tf'"
        );
    }

    #[test]
    fn test_full_export_name() {
        assert_eq!(full_export_name("", "X"), "X");
        assert_eq!(full_export_name("tf.compat", "Foo"), "tf.compat.Foo");
    }

    #[test]
    fn test_split_export_path() {
        assert_eq!(split_export_path("tf.math.add"), ("tf.math", "add"));
        assert_eq!(split_export_path("tf.Foo"), ("tf", "Foo"));
        assert_eq!(split_export_path("Foo"), ("", "Foo"));
    }
}
