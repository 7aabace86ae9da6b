//! String template rendering.

use crate::error::{Error, Result};
use minijinja::{Environment, UndefinedBehavior};
use std::collections::HashMap;

/// Token that routes a template through the engine instead of plain
/// placeholder substitution.
const BLOCK_MARKER: &str = "{%";

/// Replace `{{key}}` placeholders with the paired values.
///
/// Placeholders with no matching key are left in place.
pub fn render(template: &str, variables: &[(&str, &str)]) -> String {
    let mut result = template.to_string();

    for (key, value) in variables {
        let placeholder = format!("{{{{{}}}}}", key);
        result = result.replace(&placeholder, value);
    }

    result
}

/// Replace `{{key}}` placeholders from a map.
pub fn render_map(template: &str, variables: &HashMap<String, String>) -> String {
    let mut result = template.to_string();

    for (key, value) in variables {
        let placeholder = format!("{{{{{}}}}}", key);
        result = result.replace(&placeholder, value);
    }

    result
}

/// Whether the template contains a `{{key}}` placeholder.
pub fn is_present(template: &str, key: &str) -> bool {
    let placeholder = format!("{{{{{}}}}}", key);
    template.contains(&placeholder)
}

/// Render a template that may use block syntax (`{% if %}`, `{% for %}`).
///
/// Templates without block syntax take the plain placeholder path and cannot
/// fail. Templates with block syntax are compiled by the template engine;
/// compile and render failures (including undefined variables) surface as
/// `template.render_failed` errors.
pub fn render_compiled(template: &str, variables: &HashMap<String, String>) -> Result<String> {
    if !template.contains(BLOCK_MARKER) {
        return Ok(render_map(template, variables));
    }

    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.render_str(template, variables)
        .map_err(|e| Error::template_render_failed(e.to_string()))
}
