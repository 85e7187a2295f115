//! Template resolution and rendering
//!
//! Templates are plain strings with `{{variable}}` placeholders. Where
//! template source lives (files, database, embedded constants) is the
//! resolver's business; the dispatcher only asks for source by name.

use std::collections::HashMap;

/// Template lookup by name
#[cfg_attr(test, mockall::automock)]
pub trait TemplateResolver: Send + Sync {
    /// Return the template source, or `None` when the name is unknown
    fn resolve(&self, name: &str) -> Option<String>;
}

/// In-memory resolver keyed by template name
#[derive(Debug, Clone, Default)]
pub struct MemoryResolver {
    templates: HashMap<String, String>,
}

impl MemoryResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a template under a name
    pub fn insert(&mut self, name: impl Into<String>, source: impl Into<String>) -> &mut Self {
        self.templates.insert(name.into(), source.into());
        self
    }
}

impl TemplateResolver for MemoryResolver {
    fn resolve(&self, name: &str) -> Option<String> {
        self.templates.get(name).cloned()
    }
}

/// Rendering engine with variable substitution
///
/// Variable keys are whitespace-normalized and values HTML-escaped on
/// insertion; substitution itself is a plain string replace.
#[derive(Debug, Default)]
pub struct TemplateEngine {
    variables: HashMap<String, String>,
}

impl TemplateEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a variable value
    pub fn set(&mut self, key: impl AsRef<str>, value: impl AsRef<str>) -> &mut Self {
        self.variables.insert(
            key.as_ref().trim().to_string(),
            html_escape::encode_safe(value.as_ref().trim()).into_owned(),
        );
        self
    }

    /// Set multiple variables from an iterator
    pub fn set_all<I, K, V>(&mut self, iter: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (k, v) in iter {
            self.set(k, v);
        }
        self
    }

    /// Render a template string, replacing `{{variable}}` with values
    ///
    /// Unknown variables are left in place.
    pub fn render(&self, template: &str) -> String {
        let mut result = template.to_string();

        for (key, value) in &self.variables {
            let placeholder = format!("{{{{{}}}}}", key);
            result = result.replace(&placeholder, value);
        }

        result
    }
}
