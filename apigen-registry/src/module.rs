//! Scanned library modules and their constant exports.

use std::fmt;

use indexmap::IndexMap;

use crate::SymbolId;

/// A loaded module of the scanned library.
#[derive(Debug, Clone, PartialEq)]
pub struct Module {
    /// Fully-qualified dotted name (e.g. `tensorflow.python.ops.math_ops`).
    pub name: String,
    members: IndexMap<String, SymbolId>,
    constants: Vec<ConstantDecl>,
}

impl Module {
    /// Create a module with no members.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: IndexMap::new(),
            constants: Vec::new(),
        }
    }

    /// Bind a member name to a symbol.
    pub fn with_member(mut self, name: impl Into<String>, symbol: SymbolId) -> Self {
        self.add_member(name, symbol);
        self
    }

    /// Declare a constant exported under the given paths.
    pub fn with_constant<I, S>(mut self, exports: I, value: ConstantValue) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.constants.push(ConstantDecl {
            exports: exports.into_iter().map(Into::into).collect(),
            value,
        });
        self
    }

    pub fn add_member(&mut self, name: impl Into<String>, symbol: SymbolId) {
        self.members.insert(name.into(), symbol);
    }

    pub fn add_constant(&mut self, decl: ConstantDecl) {
        self.constants.push(decl);
    }

    /// Members in declaration order.
    pub fn members(&self) -> impl Iterator<Item = (&str, SymbolId)> {
        self.members.iter().map(|(name, id)| (name.as_str(), *id))
    }

    /// Members sorted by name, the order attribute listing yields.
    pub fn sorted_members(&self) -> Vec<(&str, SymbolId)> {
        let mut members: Vec<_> = self.members().collect();
        members.sort_by_key(|(name, _)| *name);
        members
    }

    pub fn member(&self, name: &str) -> Option<SymbolId> {
        self.members.get(name).copied()
    }

    pub fn constants(&self) -> &[ConstantDecl] {
        &self.constants
    }

    /// Check if this module lives inside `package` (e.g. `tensorflow.*`).
    pub fn is_in_package(&self, package: &str) -> bool {
        self.name
            .strip_prefix(package)
            .is_some_and(|rest| rest.starts_with('.'))
    }

    /// Check if any segment below the top-level package is one of `excluded`.
    pub fn is_in_excluded_area(&self, excluded: &[String]) -> bool {
        self.name
            .split('.')
            .skip(1)
            .any(|segment| excluded.iter().any(|e| e == segment))
    }
}

/// A constant exported by value from a module.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantDecl {
    /// Dotted public paths the constant is assigned to.
    pub exports: Vec<String>,
    pub value: ConstantValue,
}

/// Literal value of an exported constant.
#[derive(Debug, Clone, PartialEq)]
pub enum ConstantValue {
    Integer(i64),
    Float(f64),
    Boolean(bool),
    String(String),
}

/// Renders the value as a Python literal.
impl fmt::Display for ConstantValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstantValue::Integer(i) => write!(f, "{}", i),
            ConstantValue::Float(x) if x.is_nan() => f.write_str("float('nan')"),
            ConstantValue::Float(x) if x.is_infinite() => {
                let sign = if x.is_sign_negative() { "-" } else { "" };
                write!(f, "float('{}inf')", sign)
            }
            // Debug keeps the fractional part of whole numbers ("1.0", not "1")
            ConstantValue::Float(x) => write!(f, "{:?}", x),
            ConstantValue::Boolean(true) => f.write_str("True"),
            ConstantValue::Boolean(false) => f.write_str("False"),
            ConstantValue::String(s) => {
                f.write_str("'")?;
                for c in s.chars() {
                    match c {
                        '\\' => f.write_str("\\\\")?,
                        '\'' => f.write_str("\\'")?,
                        '\n' => f.write_str("\\n")?,
                        '\r' => f.write_str("\\r")?,
                        '\t' => f.write_str("\\t")?,
                        c if c.is_control() => write!(f, "\\x{:02x}", c as u32)?,
                        _ => write!(f, "{}", c)?,
                    }
                }
                f.write_str("'")
            }
        }
    }
}

impl From<i64> for ConstantValue {
    fn from(value: i64) -> Self {
        ConstantValue::Integer(value)
    }
}

impl From<f64> for ConstantValue {
    fn from(value: f64) -> Self {
        ConstantValue::Float(value)
    }
}

impl From<bool> for ConstantValue {
    fn from(value: bool) -> Self {
        ConstantValue::Boolean(value)
    }
}

impl From<&str> for ConstantValue {
    fn from(value: &str) -> Self {
        ConstantValue::String(value.to_string())
    }
}

impl TryFrom<&toml::Value> for ConstantValue {
    type Error = &'static str;

    fn try_from(value: &toml::Value) -> Result<Self, Self::Error> {
        match value {
            toml::Value::Integer(i) => Ok(ConstantValue::Integer(*i)),
            toml::Value::Float(x) => Ok(ConstantValue::Float(*x)),
            toml::Value::Boolean(b) => Ok(ConstantValue::Boolean(*b)),
            toml::Value::String(s) => Ok(ConstantValue::String(s.clone())),
            other => Err(other.type_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SymbolArena;

    #[test]
    fn test_constant_rendering() {
        assert_eq!(ConstantValue::from(7).to_string(), "7");
        assert_eq!(ConstantValue::from(-3).to_string(), "-3");
        assert_eq!(ConstantValue::from(1.0).to_string(), "1.0");
        assert_eq!(ConstantValue::from(0.5).to_string(), "0.5");
        assert_eq!(ConstantValue::from(true).to_string(), "True");
        assert_eq!(ConstantValue::from(false).to_string(), "False");
        assert_eq!(ConstantValue::from("abc").to_string(), "'abc'");
        assert_eq!(ConstantValue::from("it's").to_string(), r"'it\'s'");
        assert_eq!(ConstantValue::from(r"a\b").to_string(), r"'a\\b'");
    }

    #[test]
    fn test_non_finite_floats_render_as_calls() {
        assert_eq!(ConstantValue::from(f64::INFINITY).to_string(), "float('inf')");
        assert_eq!(ConstantValue::from(f64::NEG_INFINITY).to_string(), "float('-inf')");
        assert_eq!(ConstantValue::from(f64::NAN).to_string(), "float('nan')");
        assert_eq!(ConstantValue::from(-2.5).to_string(), "-2.5");
    }

    #[test]
    fn test_control_characters_are_escaped() {
        assert_eq!(ConstantValue::from("a\nb").to_string(), r"'a\nb'");
        assert_eq!(ConstantValue::from("a\rb").to_string(), r"'a\rb'");
        assert_eq!(ConstantValue::from("a\tb").to_string(), r"'a\tb'");
        assert_eq!(ConstantValue::from("a\u{7}b\u{7f}").to_string(), r"'a\x07b\x7f'");
        assert_eq!(ConstantValue::from("caf\u{e9}").to_string(), "'caf\u{e9}'");
    }

    #[test]
    fn test_constant_from_toml() {
        let value = toml::Value::Integer(7);
        assert_eq!(ConstantValue::try_from(&value), Ok(ConstantValue::Integer(7)));

        let value = toml::Value::Array(vec![]);
        assert_eq!(ConstantValue::try_from(&value), Err("array"));
    }

    #[test]
    fn test_package_membership() {
        let module = Module::new("tensorflow.python.ops");
        assert!(module.is_in_package("tensorflow"));
        assert!(!module.is_in_package("tensor"));
        assert!(!module.is_in_package("tensorflow.python.ops"));
        assert!(!Module::new("tensorflow").is_in_package("tensorflow"));
    }

    #[test]
    fn test_excluded_area() {
        let excluded = vec!["contrib".to_string()];
        assert!(Module::new("tensorflow.contrib").is_in_excluded_area(&excluded));
        assert!(Module::new("tensorflow.contrib.layers").is_in_excluded_area(&excluded));
        assert!(!Module::new("tensorflow.python.contribution").is_in_excluded_area(&excluded));
        assert!(!Module::new("contrib.tensorflow").is_in_excluded_area(&excluded));
    }

    #[test]
    fn test_sorted_members() {
        let mut arena = SymbolArena::new();
        let a = arena.alloc("a");
        let b = arena.alloc("b");
        let module = Module::new("pkg.mod").with_member("zeta", a).with_member("alpha", b);

        let names: Vec<_> = module.sorted_members().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["alpha", "zeta"]);
        assert_eq!(module.member("zeta"), Some(a));
    }
}
