//! Generator settings, read from the `[generator]` table of the registry.

use serde::Deserialize;

/// Default top-level package whose modules are scanned.
pub const DEFAULT_PACKAGE: &str = "tensorflow";

/// Default module path that generated files are importable as.
pub const DEFAULT_OUTPUT_MODULE: &str = "tensorflow.tools.api.generator.api";

/// Default directory name every output path must contain.
pub const DEFAULT_API_DIR: &str = "api";

/// Settings that steer scanning and file layout.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Only modules inside this package are scanned.
    pub package: String,
    /// Module path the generated API package is importable as.
    pub output_module: String,
    /// Directory name marking the root of the generated API tree.
    pub api_dir: String,
    /// Sub-areas (module name segments) that never produce exports.
    pub excluded: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            package: DEFAULT_PACKAGE.to_string(),
            output_module: DEFAULT_OUTPUT_MODULE.to_string(),
            api_dir: DEFAULT_API_DIR.to_string(),
            excluded: vec!["contrib".to_string()],
        }
    }
}

impl GeneratorConfig {
    /// Override the output module.
    pub fn with_output_module(mut self, output_module: impl Into<String>) -> Self {
        self.output_module = output_module.into();
        self
    }

    /// Override the API directory name.
    pub fn with_api_dir(mut self, api_dir: impl Into<String>) -> Self {
        self.api_dir = api_dir.into();
        self
    }

    /// Override the scanned package.
    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = package.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.package, "tensorflow");
        assert_eq!(config.api_dir, "api");
        assert_eq!(config.excluded, vec!["contrib"]);
    }

    #[test]
    fn test_partial_table() {
        let config: GeneratorConfig = toml::from_str(r#"output_module = "pkg.api""#).unwrap();
        assert_eq!(config.output_module, "pkg.api");
        assert_eq!(config.api_dir, "api");
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result: Result<GeneratorConfig, _> = toml::from_str(r#"out_module = "pkg.api""#);
        assert!(result.is_err());
    }
}
