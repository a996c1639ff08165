use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for registry operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Keeps the registry text and its filename together so that errors found
/// after deserialization can still point into the original document.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    pub fn unknown_symbol_error(
        &self,
        name: impl Into<String>,
        referenced_by: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::UnknownSymbol {
            src: self.named_source(),
            span,
            name: name.into(),
            referenced_by: referenced_by.into(),
        })
    }

    pub fn decorator_cycle_error(
        &self,
        name: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::DecoratorCycle {
            src: self.named_source(),
            span,
            name: name.into(),
        })
    }

    pub fn invalid_export_path_error(
        &self,
        path: impl Into<String>,
        reason: &'static str,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidExportPath {
            src: self.named_source(),
            span,
            path: path.into(),
            reason,
        })
    }

    pub fn invalid_module_name_error(
        &self,
        name: impl Into<String>,
        reason: &'static str,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidModuleName {
            src: self.named_source(),
            span,
            name: name.into(),
            reason,
        })
    }

    pub fn duplicate_module_error(
        &self,
        name: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::DuplicateModule {
            src: self.named_source(),
            span,
            name: name.into(),
        })
    }

    pub fn invalid_constant_error(
        &self,
        module: impl Into<String>,
        ty: &'static str,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidConstant {
            src: self.named_source(),
            span,
            module: module.into(),
            ty,
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("pass the export registry with '--registry <path>'"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse export registry")]
    #[diagnostic(code(apigen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("unknown symbol '{name}' referenced by {referenced_by}")]
    #[diagnostic(
        code(apigen::unknown_symbol),
        help("declare it as a [symbols.{name}] table")
    )]
    UnknownSymbol {
        #[source_code]
        src: NamedSource<String>,
        #[label("not declared under [symbols]")]
        span: Option<SourceSpan>,
        name: String,
        referenced_by: String,
    },

    #[error("decorator chain of '{name}' loops back on itself")]
    #[diagnostic(
        code(apigen::decorator_cycle),
        help("every 'wraps' chain must end at a symbol without 'wraps'")
    )]
    DecoratorCycle {
        #[source_code]
        src: NamedSource<String>,
        #[label("cycle starts here")]
        span: Option<SourceSpan>,
        name: String,
    },

    #[error("invalid export path '{path}'")]
    #[diagnostic(code(apigen::invalid_export_path), help("{reason}"))]
    InvalidExportPath {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid path")]
        span: Option<SourceSpan>,
        path: String,
        reason: &'static str,
    },

    #[error("invalid module name '{name}'")]
    #[diagnostic(code(apigen::invalid_module_name), help("{reason}"))]
    InvalidModuleName {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid module name")]
        span: Option<SourceSpan>,
        name: String,
        reason: &'static str,
    },

    #[error("module '{name}' is declared more than once")]
    #[diagnostic(code(apigen::duplicate_module))]
    DuplicateModule {
        #[source_code]
        src: NamedSource<String>,
        #[label("declared again here")]
        span: Option<SourceSpan>,
        name: String,
    },

    #[error("unsupported {ty} constant in module '{module}'")]
    #[diagnostic(
        code(apigen::invalid_constant),
        help("constant values must be integers, floats, booleans or strings")
    )]
    InvalidConstant {
        #[source_code]
        src: NamedSource<String>,
        #[label("unsupported value")]
        span: Option<SourceSpan>,
        module: String,
        ty: &'static str,
    },
}
