// ABOUTME: Error types for template and variable loading
// ABOUTME: Defines specific error types for loader module operations

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Template file not found: {path}")]
    TemplateNotFound { path: PathBuf },

    #[error("Variables file not found: {path}")]
    VariablesNotFound { path: PathBuf },

    #[error("Failed to read {path}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse variables file: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Invalid variables document: {0}")]
    InvalidDocument(String),
}

pub type Result<T> = std::result::Result<T, LoaderError>;
