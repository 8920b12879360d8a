//! Per-language label tables.
//!
//! Four tables decide every piece of output text that is not derived from the
//! content tree itself:
//!
//! | Table | Shape | Used for |
//! |-------|-------|----------|
//! | `default_group` | language → label | Name of the synthesized group for pages directly inside a tab |
//! | `display_names` | language → slug → label | Overrides for [`naming::display_name`](crate::naming::display_name) |
//! | `navbar_links` | language → `[NavLink]` | The `navbar` array embedded in every language node |
//! | `navbar` | language → `{ links, primary }` | The document-level `navbar`, written only when `docs.json` has none |
//!
//! The two navbar tables are deliberately unrelated: one is an array for the
//! per-language node, the other an object with a call-to-action for the
//! document root. They are never cross-checked.
//!
//! ## Stock Tables and Overlays
//!
//! [`Labels::default`] is the stock data for `en` and `zh-Hans`. A
//! `docs-nav.toml` in the content root (or a file passed with `--labels`)
//! is merged on top of it:
//!
//! ```toml
//! [default_group]
//! fr = "Général"
//!
//! [display_names.fr]
//! ai = "IA"
//!
//! [[navbar_links.fr]]
//! label = "GitHub"
//! href = "https://github.com/example/docs"
//! ```
//!
//! Tables merge key-by-key, so the overlay above adds French without touching
//! the stock languages. Arrays replace wholesale. Unknown keys are rejected.
//!
//! Lookups for an unrecognized language fall back to `default_language`,
//! except `display_names`, which never falls back.

use crate::types::NavLink;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File picked up from the content root when `--labels` is not given.
pub const LABELS_FILE_NAME: &str = "docs-nav.toml";

/// Default-group label used when neither the language nor the default
/// language has one.
const FALLBACK_GROUP_NAME: &str = "Default";

const GITHUB_URL: &str = "https://github.com/zhezhiming/Mintlify";
const SUPPORT_URL: &str = "mailto:hi@mintlify.com";
const CHAT_KIT_EN_URL: &str = "https://xpertai.cn/docs/ai/";
const CHAT_KIT_ZH_URL: &str = "https://xpertai.cn/zh-Hans/docs/ai/";

const STOCK_DISPLAY_NAMES_EN: &[(&str, &str)] = &[
    ("ai", "AI"),
    ("agent-middleware", "Agent Middleware"),
    ("ai-assistant", "AI Assistant"),
    ("conversation", "Conversation"),
    ("digital-expert", "Digital Expert"),
    ("knowledge-base", "Knowledge Base"),
    ("plugin-development", "Plugin Development"),
    ("toolset", "Toolset"),
    ("troubleshooting", "Troubleshooting"),
    ("tutorial", "Tutorial"),
    ("workflow", "Workflow"),
];

const STOCK_DISPLAY_NAMES_ZH: &[(&str, &str)] = &[
    ("ai", "AI"),
    ("agent-middleware", "智能体中间件"),
    ("ai-assistant", "AI 助手"),
    ("conversation", "对话"),
    ("digital-expert", "数字专家"),
    ("knowledge-base", "知识库"),
    ("plugin-development", "插件开发"),
    ("toolset", "工具集"),
    ("troubleshooting", "故障排查"),
    ("tutorial", "教程"),
    ("workflow", "工作流"),
];

#[derive(Error, Debug)]
pub enum LabelsError {
    #[error("cannot read labels file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("labels file not found: {0}")]
    NotFound(PathBuf),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
    #[error("labels validation error: {0}")]
    Validation(String),
}

/// The resolved label tables for a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Labels {
    /// Language whose tables stand in for unrecognized language codes, and
    /// the document-level navbar language when no language node exists.
    pub default_language: String,
    /// Label of the synthesized group for pages sitting directly in a tab.
    pub default_group: BTreeMap<String, String>,
    /// Exact slug → label overrides, per language.
    pub display_names: BTreeMap<String, BTreeMap<String, String>>,
    /// Navbar array embedded in each language node.
    pub navbar_links: BTreeMap<String, Vec<NavLink>>,
    /// Document-level navbar, used only when `docs.json` has none.
    pub navbar: BTreeMap<String, Navbar>,
}

/// Document-level navbar: secondary links plus one primary call-to-action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Navbar {
    pub links: Vec<NavLink>,
    pub primary: PrimaryAction,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PrimaryAction {
    #[serde(rename = "type")]
    pub kind: String,
    pub label: String,
    pub href: String,
}

impl Default for Labels {
    fn default() -> Self {
        let default_group = BTreeMap::from([
            ("en".to_string(), "Default".to_string()),
            ("zh-Hans".to_string(), "默认".to_string()),
        ]);

        let display_names = BTreeMap::from([
            ("en".to_string(), table(STOCK_DISPLAY_NAMES_EN)),
            ("zh-Hans".to_string(), table(STOCK_DISPLAY_NAMES_ZH)),
        ]);

        let navbar_links = BTreeMap::from([
            (
                "en".to_string(),
                vec![
                    NavLink::new("GitHub", GITHUB_URL),
                    NavLink::new("Support", SUPPORT_URL),
                    NavLink::new("Try Chat-Kit", CHAT_KIT_EN_URL),
                ],
            ),
            (
                "zh-Hans".to_string(),
                vec![
                    NavLink::new("GitHub", GITHUB_URL),
                    NavLink::new("支持", SUPPORT_URL),
                    NavLink::new("试用 Chat-Kit", CHAT_KIT_ZH_URL),
                ],
            ),
        ]);

        let navbar = BTreeMap::from([
            (
                "en".to_string(),
                Navbar {
                    links: vec![
                        NavLink::new("GitHub", GITHUB_URL),
                        NavLink::new("Support", SUPPORT_URL),
                    ],
                    primary: PrimaryAction::button("Try Chat-Kit", CHAT_KIT_EN_URL),
                },
            ),
            (
                "zh-Hans".to_string(),
                Navbar {
                    links: vec![
                        NavLink::new("GitHub", GITHUB_URL),
                        NavLink::new("支持", SUPPORT_URL),
                    ],
                    primary: PrimaryAction::button("试用 Chat-Kit", CHAT_KIT_ZH_URL),
                },
            ),
        ]);

        Self {
            default_language: "en".to_string(),
            default_group,
            display_names,
            navbar_links,
            navbar,
        }
    }
}

fn table(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

impl PrimaryAction {
    fn button(label: &str, href: &str) -> Self {
        Self {
            kind: "button".to_string(),
            label: label.to_string(),
            href: href.to_string(),
        }
    }
}

impl Labels {
    /// Label for the default group of `language`.
    pub fn default_group_name(&self, language: &str) -> &str {
        self.default_group
            .get(language)
            .or_else(|| self.default_group.get(&self.default_language))
            .map(String::as_str)
            .unwrap_or(FALLBACK_GROUP_NAME)
    }

    /// Exact override for `slug` in `language`, if one exists and is non-empty.
    pub fn display_name_override(&self, language: &str, slug: &str) -> Option<&str> {
        self.display_names
            .get(language)
            .and_then(|names| names.get(slug))
            .map(String::as_str)
            .filter(|name| !name.is_empty())
    }

    /// Navbar array for a language node.
    pub fn navbar_links(&self, language: &str) -> &[NavLink] {
        self.navbar_links
            .get(language)
            .or_else(|| self.navbar_links.get(&self.default_language))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Document-level navbar for `language`.
    pub fn navbar(&self, language: &str) -> Option<&Navbar> {
        self.navbar
            .get(language)
            .or_else(|| self.navbar.get(&self.default_language))
    }

    /// Check that every fallback lookup can be satisfied.
    pub fn validate(&self) -> Result<(), LabelsError> {
        if self.default_language.is_empty() {
            return Err(LabelsError::Validation(
                "default_language must not be empty".into(),
            ));
        }
        if !self.navbar_links.contains_key(&self.default_language) {
            return Err(LabelsError::Validation(format!(
                "navbar_links has no entry for default language '{}'",
                self.default_language
            )));
        }
        if !self.navbar.contains_key(&self.default_language) {
            return Err(LabelsError::Validation(format!(
                "navbar has no entry for default language '{}'",
                self.default_language
            )));
        }
        if let Some((language, _)) = self.default_group.iter().find(|(_, l)| l.is_empty()) {
            return Err(LabelsError::Validation(format!(
                "default_group label for '{language}' must not be empty"
            )));
        }
        Ok(())
    }
}

// =============================================================================
// Loading and merging
// =============================================================================

/// The stock tables as a `toml::Value::Table`, the base layer for overlays.
pub fn stock_defaults_value() -> Result<toml::Value, LabelsError> {
    Ok(toml::Value::try_from(Labels::default())?)
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Read a labels file as a raw TOML value.
pub fn load_raw_labels(path: &Path) -> Result<toml::Value, LabelsError> {
    let content = fs::read_to_string(path).map_err(|source| LabelsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(toml::from_str(&content)?)
}

/// Merge an optional overlay onto the stock tables, then deserialize and validate.
pub fn resolve_labels(overlay: Option<toml::Value>) -> Result<Labels, LabelsError> {
    let base = stock_defaults_value()?;
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let labels: Labels = merged.try_into()?;
    labels.validate()?;
    Ok(labels)
}

/// Resolve the label tables for a run.
///
/// An explicit path must exist. Without one, `docs-nav.toml` in the content
/// root is used if present, and the stock tables otherwise.
pub fn load_labels(explicit: Option<&Path>, content_root: &Path) -> Result<Labels, LabelsError> {
    let overlay = match explicit {
        Some(path) if !path.is_file() => return Err(LabelsError::NotFound(path.to_path_buf())),
        Some(path) => Some(load_raw_labels(path)?),
        None => {
            let candidate = content_root.join(LABELS_FILE_NAME);
            if candidate.is_file() {
                tracing::debug!(path = %candidate.display(), "Loading label overlay");
                Some(load_raw_labels(&candidate)?)
            } else {
                None
            }
        }
    };
    resolve_labels(overlay)
}

/// The stock tables as a commented TOML document, for `docs-nav gen-labels`.
pub fn stock_labels_toml() -> Result<String, LabelsError> {
    let body = toml::to_string_pretty(&Labels::default())?;
    Ok(format!(
        "# docs-nav label tables\n\
         # =====================\n\
         # Save as {LABELS_FILE_NAME} in the content root (or pass --labels) to\n\
         # override. Only the keys you set are replaced; tables merge with the\n\
         # stock values shown here, arrays replace them. Unknown keys are errors.\n\
         #\n\
         # Languages missing from a table fall back to default_language, except\n\
         # display_names, which falls back to title-casing the directory slug.\n\n\
         {body}"
    ))
}
