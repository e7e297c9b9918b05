// ABOUTME: Template source loading from inline strings or files
// ABOUTME: Provides the TemplateSource enum and file-not-found handling

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::error::{LoaderError, Result};

/// Where a template's text comes from
#[derive(Debug, Clone)]
pub enum TemplateSource {
    /// A template held directly in source or memory
    Inline(String),
    /// A template read from a file on disk
    File(PathBuf),
}

impl TemplateSource {
    pub fn inline(template: impl Into<String>) -> Self {
        Self::Inline(template.into())
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::File(path.into())
    }

    /// Load the template text
    pub fn load(&self) -> Result<String> {
        match self {
            Self::Inline(template) => Ok(template.clone()),
            Self::File(path) => read_template_file(path),
        }
    }

    /// Human-readable origin for diagnostics
    pub fn describe(&self) -> String {
        match self {
            Self::Inline(_) => "inline template".to_string(),
            Self::File(path) => path.display().to_string(),
        }
    }
}

fn read_template_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => LoaderError::TemplateNotFound {
            path: path.to_path_buf(),
        },
        _ => LoaderError::IoError {
            path: path.to_path_buf(),
            source,
        },
    })
}
