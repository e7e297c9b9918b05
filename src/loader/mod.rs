// ABOUTME: Input loader module for templates and variable documents
// ABOUTME: Exports template source and YAML variable file loading

pub mod error;
pub mod template;
pub mod variables;

pub use error::{LoaderError, Result};
pub use template::TemplateSource;
pub use variables::{load_variables, parse_variables};
