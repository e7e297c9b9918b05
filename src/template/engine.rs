// ABOUTME: Main template engine implementation using Handlebars
// ABOUTME: Provides template rendering and placeholder substitution

use handlebars::{Handlebars, RenderError, RenderErrorReason};

use super::error::{Result, TemplateError};
use super::vars::VariableSet;

#[derive(Clone)]
pub struct TemplateEngine {
    handlebars: Handlebars<'static>,
}

impl TemplateEngine {
    /// Create a new template engine
    pub fn new() -> Self {
        let mut handlebars = Handlebars::new();

        // Every placeholder must resolve to a supplied variable
        handlebars.set_strict_mode(true);
        handlebars.set_dev_mode(false);

        // Disable HTML escaping since we're generating device configuration, not HTML
        handlebars.register_escape_fn(handlebars::no_escape);

        Self { handlebars }
    }

    /// Render a template string with the given variable set
    pub fn render(&self, template: &str, variables: &VariableSet) -> Result<String> {
        let context = variables.to_json();
        self.handlebars
            .render_template(template, &context)
            .map_err(classify_render_error)
    }

    /// Validate template syntax without rendering
    pub fn validate(&self, template: &str) -> Result<()> {
        let mut probe = Handlebars::new();
        probe
            .register_template_string("probe", template)
            .map_err(|e| TemplateError::SyntaxError(e.to_string()))?;
        Ok(())
    }

    /// Check if a string contains placeholder markers
    pub fn has_placeholders(&self, text: &str) -> bool {
        text.contains("{{") && text.contains("}}")
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Surface strict-mode lookup failures as a dedicated error variant
fn classify_render_error(err: RenderError) -> TemplateError {
    match err.reason() {
        RenderErrorReason::MissingVariable(path) => TemplateError::MissingVariable(
            path.clone().unwrap_or_else(|| "<unknown>".to_string()),
        ),
        _ => TemplateError::RenderError(err.to_string()),
    }
}
