//! Validation helpers for registry loading.

use miette::SourceSpan;

/// Validate a dotted path such as `tf.math.add` or a module name.
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn validate_dotted_path(path: &str) -> Option<&'static str> {
    if path.is_empty() {
        return Some("path cannot be empty");
    }

    if path.chars().any(char::is_whitespace) {
        return Some("path cannot contain whitespace");
    }

    if path.split('.').any(str::is_empty) {
        return Some("dotted segments cannot be empty, e.g. 'tf..Foo' or '.Foo'");
    }

    None
}

/// Find the span of a quoted string value in the TOML source.
///
/// Points inside the quotes. Matches the first occurrence, which is good
/// enough for labels; there is no fallback to a wrong location.
pub(crate) fn find_quoted_span(src: &str, value: &str) -> Option<SourceSpan> {
    for quote in ['"', '\''] {
        let pattern = format!("{quote}{value}{quote}");
        if let Some(pos) = src.find(&pattern) {
            return Some(SourceSpan::from((pos + 1, value.len())));
        }
    }
    None
}

/// Find the span of a symbol table header like `[symbols.Foo]`.
pub(crate) fn find_symbol_span(src: &str, key: &str) -> Option<SourceSpan> {
    // (pattern, characters before the key)
    let patterns = [
        (format!("[symbols.{}]", key), 9usize),
        (format!("[symbols.\"{}\"]", key), 10usize),
    ];

    for (pattern, skip) in &patterns {
        if let Some(pos) = src.find(pattern.as_str()) {
            return Some(SourceSpan::from((pos + skip, key.len())));
        }
    }

    // inline form: symbols = { Foo = { ... } }
    find_quoted_span(src, key)
}

/// Find the span of the n-th occurrence of a `name = "<value>"` pair.
pub(crate) fn find_nth_name_span(src: &str, value: &str, nth: usize) -> Option<SourceSpan> {
    let pattern = format!("name = \"{}\"", value);
    let pos = src.match_indices(&pattern).nth(nth).map(|(pos, _)| pos)?;
    // The value starts after 'name = "' (8 characters)
    Some(SourceSpan::from((pos + 8, value.len())))
}
