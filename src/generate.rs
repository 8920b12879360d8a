//! Merge freshly built navigation into `docs.json`.
//!
//! The configuration document is treated as an opaque JSON tree. Only two
//! keys are ever written:
//!
//! - `navigation.languages` is always replaced with the built language nodes.
//! - `navbar` is added from the label tables when the document has none
//!   (missing, or any falsy value such as `null`, `false`, `0`, `""`). It
//!   uses the language node marked `default`, else the first node, else the
//!   default label language.
//!
//! Everything else, including key order, round-trips unchanged.
//!
//! ## Modes
//!
//! | Mode | Writes `docs.json` | [`Outcome::preview`] |
//! |------|--------------------|----------------------|
//! | [`Mode::Preview`] | never | the language nodes array |
//! | [`Mode::Commit`] | once, after every language built | `None` |
//!
//! All languages are built in memory before anything is written, so a scan
//! failure leaves the document untouched.

use crate::labels::{self, Labels, LabelsError};
use crate::languages;
use crate::nav;
use crate::scan::ScanError;
use crate::types::{self, LanguageNode};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("cannot read {path}: {source}")]
    ReadDocument {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot parse {path}: {source}")]
    ParseDocument {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("configuration document must be a JSON object")]
    NotAnObject,
    #[error("`navigation` in the configuration document must be a JSON object")]
    NavigationNotAnObject,
    #[error("cannot write {path}: {source}")]
    WriteDocument {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("JSON serialize error: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error(transparent)]
    Labels(#[from] LabelsError),
}

/// Whether a run persists its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Preview,
    Commit,
}

/// Inputs for one run.
#[derive(Debug, Clone)]
pub struct Options {
    pub docs_path: PathBuf,
    pub content_root: PathBuf,
    /// Comma-separated language override.
    pub languages: Option<String>,
    /// Explicit label overlay; otherwise `docs-nav.toml` in the content root.
    pub labels_path: Option<PathBuf>,
    pub mode: Mode,
}

/// What a run produced.
#[derive(Debug)]
pub struct Outcome {
    pub nodes: Vec<LanguageNode>,
    /// The rendered nodes array; only set in preview mode.
    pub preview: Option<String>,
    /// Whether the document-level navbar was synthesized.
    pub added_navbar: bool,
}

/// Read and parse the configuration document.
pub fn load_document(path: &Path) -> Result<Value, GenerateError> {
    let content = fs::read_to_string(path).map_err(|source| GenerateError::ReadDocument {
        path: path.to_path_buf(),
        source,
    })?;
    let doc: Value =
        serde_json::from_str(&content).map_err(|source| GenerateError::ParseDocument {
            path: path.to_path_buf(),
            source,
        })?;
    if !doc.is_object() {
        return Err(GenerateError::NotAnObject);
    }
    Ok(doc)
}

/// Build a node for every resolved language that has a directory.
pub fn build_all(
    doc: &Value,
    content_root: &Path,
    explicit: Option<&str>,
    labels: &Labels,
) -> Result<Vec<LanguageNode>, GenerateError> {
    let mut nodes = Vec::new();
    for language in languages::resolve_languages(explicit, doc, content_root)? {
        if !languages::is_language_dir(content_root, &language) {
            tracing::debug!(language = %language, "Skipping language without a directory");
            continue;
        }
        let prior = languages::prior_entry(doc, &language);
        nodes.push(nav::build_language(&language, content_root, prior, labels)?);
    }
    Ok(nodes)
}

/// Language whose document-level navbar is used when `docs.json` lacks one.
pub fn navbar_language<'a>(nodes: &'a [LanguageNode], labels: &'a Labels) -> &'a str {
    nodes
        .iter()
        .find(|n| n.is_default())
        .or_else(|| nodes.first())
        .map(|n| n.language.as_str())
        .unwrap_or(labels.default_language.as_str())
}

/// Write `nodes` into `doc`. Returns whether a top-level `navbar` was added.
pub fn merge_navigation(
    doc: &mut Value,
    nodes: &[LanguageNode],
    labels: &Labels,
) -> Result<bool, GenerateError> {
    let languages = nodes
        .iter()
        .map(LanguageNode::to_value)
        .collect::<Result<Vec<_>, _>>()?;

    let root = doc.as_object_mut().ok_or(GenerateError::NotAnObject)?;

    let navigation = root
        .entry("navigation")
        .or_insert_with(|| Value::Object(Map::new()));
    // A JSON `null` counts as absent.
    if navigation.is_null() {
        *navigation = Value::Object(Map::new());
    }
    navigation
        .as_object_mut()
        .ok_or(GenerateError::NavigationNotAnObject)?
        .insert("languages".into(), Value::Array(languages));

    let has_navbar = root.get("navbar").is_some_and(types::is_truthy);
    if has_navbar {
        return Ok(false);
    }
    let language = navbar_language(nodes, labels);
    match labels.navbar(language) {
        Some(navbar) => {
            root.insert("navbar".into(), serde_json::to_value(navbar)?);
            tracing::debug!(language, "Added document-level navbar");
            Ok(true)
        }
        None => Ok(false),
    }
}

/// Pretty-print with two-space indentation and a trailing newline.
pub fn render_json(value: &impl serde::Serialize) -> Result<String, GenerateError> {
    let mut out = serde_json::to_string_pretty(value)?;
    out.push('\n');
    Ok(out)
}

/// Run the whole pipeline: load, resolve, build, merge, then preview or write.
pub fn run(options: &Options) -> Result<Outcome, GenerateError> {
    let mut doc = load_document(&options.docs_path)?;
    let labels = labels::load_labels(options.labels_path.as_deref(), &options.content_root)?;

    let nodes = build_all(
        &doc,
        &options.content_root,
        options.languages.as_deref(),
        &labels,
    )?;

    let added_navbar = merge_navigation(&mut doc, &nodes, &labels)?;

    let preview = match options.mode {
        Mode::Preview => Some(render_json(&doc["navigation"]["languages"])?),
        Mode::Commit => {
            let rendered = render_json(&doc)?;
            fs::write(&options.docs_path, rendered).map_err(|source| {
                GenerateError::WriteDocument {
                    path: options.docs_path.clone(),
                    source,
                }
            })?;
            tracing::info!(
                path = %options.docs_path.display(),
                languages = nodes.len(),
                "Wrote navigation"
            );
            None
        }
    };

    Ok(Outcome {
        nodes,
        preview,
        added_navbar,
    })
}
