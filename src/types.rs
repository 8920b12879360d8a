//! Navigation types written into `docs.json`.
//!
//! Field names match the `navigation.languages` schema consumed by the docs
//! site, so these serialize directly into the configuration document.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One navbar link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

impl NavLink {
    pub fn new(label: &str, href: &str) -> Self {
        Self {
            label: label.to_string(),
            href: href.to_string(),
        }
    }
}

/// Ordered pages under one sidebar heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Display name (the default-group label, or the resolved directory name).
    pub group: String,
    /// Page identifiers, e.g. `en/ai/guides/setup`.
    pub pages: Vec<String>,
}

/// A tab: one per directory under a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tab {
    pub tab: String,
    pub groups: Vec<Group>,
}

/// A product: one per directory under a language root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub product: String,
    pub tabs: Vec<Tab>,
}

/// Navigation for one language.
///
/// `inherited` carries whatever the prior `docs.json` entry for this language
/// held (`default`, `banner`, ...), in its original key order. `navbar` and
/// `products` are always recomputed.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageNode {
    pub language: String,
    pub inherited: Map<String, Value>,
    pub navbar: Vec<NavLink>,
    pub products: Vec<Product>,
}

/// JSON truthiness: `null`, `false`, zero, and `""` are false; everything
/// else, including empty arrays and objects, is true.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

impl LanguageNode {
    /// Total number of pages across all products.
    pub fn page_count(&self) -> usize {
        self.products
            .iter()
            .flat_map(|p| &p.tabs)
            .flat_map(|t| &t.groups)
            .map(|g| g.pages.len())
            .sum()
    }

    /// Whether the inherited `default` field marks this as the default language.
    ///
    /// Any JSON-truthy value counts.
    pub fn is_default(&self) -> bool {
        self.inherited.get("default").is_some_and(is_truthy)
    }

    /// Render as a JSON object: `language`, inherited fields, `navbar`,
    /// `products`. Keys already present keep their position.
    pub fn to_value(&self) -> Result<Value, serde_json::Error> {
        let mut node = Map::new();
        node.insert("language".into(), Value::String(self.language.clone()));
        for (key, value) in &self.inherited {
            node.insert(key.clone(), value.clone());
        }
        // The inherited entry may carry a stale `language`; the resolved code wins.
        node.insert("language".into(), Value::String(self.language.clone()));
        node.insert("navbar".into(), serde_json::to_value(&self.navbar)?);
        node.insert("products".into(), serde_json::to_value(&self.products)?);
        Ok(Value::Object(node))
    }
}
