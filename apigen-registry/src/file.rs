use std::path::{Path, PathBuf};

use crate::{Error, GeneratorConfig, Registry, Result, parse::parse_registry};

/// Represents an export registry file with both raw content and parsed registry.
#[derive(Debug)]
pub struct RegistryToml {
    path: PathBuf,
    content: String,
    config: GeneratorConfig,
    registry: Registry,
}

impl RegistryToml {
    /// Open and parse a registry file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let (config, registry) = parse_registry(&content, &filename)?;

        Ok(Self {
            path,
            content,
            config,
            registry,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Settings from the `[generator]` table (defaults when absent).
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Split into settings and registry.
    pub fn into_parts(self) -> (GeneratorConfig, Registry) {
        (self.config, self.registry)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_open_registry_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("exports.toml");
        std::fs::write(
            &path,
            "[generator]\napi_dir = \"gen\"\n\n[[modules]]\nname = \"tensorflow.a\"\n",
        )
        .unwrap();

        let file = RegistryToml::open(&path).unwrap();

        assert_eq!(file.path(), path);
        assert_eq!(file.config().api_dir, "gen");
        assert!(file.registry().module("tensorflow.a").is_some());
        assert!(file.content().contains("[generator]"));
    }

    #[test]
    fn test_open_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = RegistryToml::open(temp.path().join("nope.toml")).unwrap_err();

        assert!(matches!(*err, Error::Io { .. }));
    }
}
