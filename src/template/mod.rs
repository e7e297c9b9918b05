// ABOUTME: Template engine module for genconf configuration rendering
// ABOUTME: Provides placeholder substitution and variable set handling

pub mod engine;
pub mod error;
pub mod vars;

pub use engine::TemplateEngine;
pub use error::{Result, TemplateError};
pub use vars::VariableSet;
