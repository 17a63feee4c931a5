//! Template rendering for the generated project files.
//! The rendering engine sits behind [`TemplateRenderer`]; the functions in this
//! module only hand it a finished [`ProjectModel`].
use crate::error::{Error, Result};
use crate::model::ProjectModel;
use crate::templates::{FILTERS_TEMPLATE, PROJECT_TEMPLATE};
use minijinja::Environment;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String>;
}

/// Escapes the characters that are not allowed verbatim in XML text or attributes.
pub fn xml_escape(value: String) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a new renderer with block trimming and the `xml` filter enabled.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_keep_trailing_newline(true);
        env.add_filter("xml", xml_escape);
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// Renders a template string using MiniJinja.
    ///
    /// # Errors
    /// * `Error::MinijinjaError` if the template cannot be parsed or rendered
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String> {
        let mut env = self.env.clone();
        env.add_template("temp", template).map_err(Error::MinijinjaError)?;

        let tmpl = env.get_template("temp").map_err(Error::MinijinjaError)?;

        tmpl.render(context).map_err(Error::MinijinjaError)
    }
}

fn model_context(model: &ProjectModel) -> Result<serde_json::Value> {
    Ok(serde_json::to_value(model)?)
}

/// Renders the project file (`.vcxproj`).
pub fn render_project(renderer: &dyn TemplateRenderer, model: &ProjectModel) -> Result<String> {
    renderer.render(PROJECT_TEMPLATE, &model_context(model)?)
}

/// Renders the filter file (`.vcxproj.filters`).
pub fn render_filters(renderer: &dyn TemplateRenderer, model: &ProjectModel) -> Result<String> {
    renderer.render(FILTERS_TEMPLATE, &model_context(model)?)
}
