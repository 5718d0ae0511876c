use handlebars::{RenderError, TemplateError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Broad failure classes reported by the command surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    FileAccess,
    Decode,
    TemplateParse,
    TemplateExecution,
    Output,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("{}", .0)]
    Configuration(String),

    #[error("{}: open {} file: {}", .path, .file_description, .original)]
    FileAccess {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("{}: decode variables: {}", .path, .original)]
    Yaml {
        path: String,
        original: serde_yaml::Error,
    },

    #[error("{}: decode variables: expected a single document", .path)]
    MultipleDocuments { path: String },

    #[error("{}: variables must be a mapping, found {}", .path, .found)]
    NotAMapping { path: String, found: &'static str },

    #[error("{}: variables contain a {} key, only scalar keys are supported", .path, .found)]
    UnsupportedKey { path: String, found: &'static str },

    #[error("parse template file: template is not valid UTF-8: {}", .0)]
    TemplateEncoding(#[from] std::str::Utf8Error),

    #[error("parse template file: {}", .0)]
    Parse(#[from] TemplateError),

    #[error("execute template: {}", .0)]
    Render(#[from] RenderError),

    #[error("write output: {}", .0)]
    Stdio(std::io::Error),
}

impl Error {
    pub fn configuration(message: &str) -> Self {
        Self::Configuration(message.to_string())
    }

    pub fn file_access(file_description: &str, path: &str, original: std::io::Error) -> Self {
        Self::FileAccess {
            file_description: file_description.to_string(),
            path: path.to_string(),
            original,
        }
    }

    pub fn yaml_error(path: &str, original: serde_yaml::Error) -> Self {
        Self::Yaml {
            path: path.to_string(),
            original,
        }
    }

    pub fn not_a_mapping(path: &str, found: &'static str) -> Self {
        Self::NotAMapping {
            path: path.to_string(),
            found,
        }
    }

    pub fn unsupported_key(path: &str, found: &'static str) -> Self {
        Self::UnsupportedKey {
            path: path.to_string(),
            found,
        }
    }

    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Configuration(_) => ErrorKind::Configuration,
            Self::FileAccess { .. } => ErrorKind::FileAccess,
            Self::Yaml { .. }
            | Self::MultipleDocuments { .. }
            | Self::NotAMapping { .. }
            | Self::UnsupportedKey { .. } => ErrorKind::Decode,
            Self::TemplateEncoding(_) | Self::Parse(_) => ErrorKind::TemplateParse,
            Self::Render(_) => ErrorKind::TemplateExecution,
            Self::Stdio(_) => ErrorKind::Output,
        }
    }
}
