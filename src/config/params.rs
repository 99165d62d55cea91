//! Render options derived from `[params]`.
//!
//! Every scalar under `params` becomes a named render option. Nested tables
//! are flattened with dotted keys, so
//!
//! ```toml
//! [params]
//! showBackToTop = true
//! [params.article]
//! showReadingTime = true
//! ```
//!
//! yields `showBackToTop` and `article.showReadingTime`. Arrays are skipped.
//! String values (including embedded HTML or script snippets) are copied
//! verbatim.

use serde::Serialize;
use std::collections::BTreeMap;

/// A scalar option value handed to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RenderValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl RenderValue {
    fn from_toml(value: &toml::Value) -> Option<Self> {
        match value {
            toml::Value::Boolean(b) => Some(Self::Bool(*b)),
            toml::Value::Integer(i) => Some(Self::Integer(*i)),
            toml::Value::Float(f) => Some(Self::Float(*f)),
            toml::Value::String(s) => Some(Self::Text(s.clone())),
            toml::Value::Datetime(dt) => Some(Self::Text(dt.to_string())),
            toml::Value::Array(_) | toml::Value::Table(_) => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// Named render options, sorted by key.
pub type RenderOptions = BTreeMap<String, RenderValue>;

/// Flatten the scalars of `params` into render options.
pub fn render_options(params: &toml::Table) -> RenderOptions {
    let mut options = RenderOptions::new();
    collect(params, "", &mut options);
    options
}

fn collect(table: &toml::Table, prefix: &str, options: &mut RenderOptions) {
    for (key, value) in table {
        let name = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };

        match value {
            toml::Value::Table(nested) => collect(nested, &name, options),
            other => {
                if let Some(option) = RenderValue::from_toml(other) {
                    options.insert(name, option);
                }
            }
        }
    }
}
