// ABOUTME: Main library module for the genconf configuration renderer
// ABOUTME: Exports all core modules and provides the public API

pub mod cli;
pub mod loader;
pub mod template;

// Re-export commonly used types
pub use cli::{App, Args, Config};
pub use loader::{LoaderError, TemplateSource};
pub use template::{TemplateEngine, TemplateError, VariableSet};

// Error handling
pub type Result<T> = anyhow::Result<T>;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
