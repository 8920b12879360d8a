//! Which language subtrees to process.
//!
//! The first rule that yields anything wins:
//!
//! 1. `--languages en,zh-Hans` (each entry trimmed, used verbatim)
//! 2. the `language` codes already listed under `navigation.languages` in
//!    `docs.json`, in that order
//! 3. every directory in the content root
//!
//! Candidates are not checked here. The orchestrator skips any code without
//! a matching directory ([`is_language_dir`]).
//!
//! A code always names a path below the content root ([`language_dir`]):
//! `/tmp/x` is read as `<content_root>/tmp/x`, never as an absolute path.

use crate::scan::{self, ScanError};
use serde_json::{Map, Value};
use std::path::{Component, Path, PathBuf};

/// The entries of `navigation.languages` in `doc` that are JSON objects.
pub fn prior_entries(doc: &Value) -> impl Iterator<Item = &Map<String, Value>> {
    doc.pointer("/navigation/languages")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(Value::as_object)
}

/// The prior entry for `language`, if `docs.json` has one.
pub fn prior_entry<'a>(doc: &'a Value, language: &str) -> Option<&'a Map<String, Value>> {
    prior_entries(doc).find(|entry| entry.get("language").and_then(Value::as_str) == Some(language))
}

/// Language codes listed in `docs.json`, in document order.
pub fn prior_languages(doc: &Value) -> Vec<String> {
    prior_entries(doc)
        .filter_map(|entry| entry.get("language").and_then(Value::as_str))
        .map(str::to_string)
        .collect()
}

/// Resolve the ordered list of candidate language codes.
pub fn resolve_languages(
    explicit: Option<&str>,
    doc: &Value,
    content_root: &Path,
) -> Result<Vec<String>, ScanError> {
    if let Some(list) = explicit {
        return Ok(list.split(',').map(|l| l.trim().to_string()).collect());
    }

    let from_doc = prior_languages(doc);
    if !from_doc.is_empty() {
        return Ok(from_doc);
    }

    Ok(scan::list_dir(content_root)?
        .dirs
        .iter()
        .filter_map(|d| d.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .collect())
}

/// The directory holding `language`, with any leading root or drive prefix
/// dropped so the code stays nested under `content_root`.
pub fn language_dir(content_root: &Path, language: &str) -> PathBuf {
    let relative: PathBuf = Path::new(language)
        .components()
        .filter(|c| !matches!(c, Component::Prefix(_) | Component::RootDir))
        .collect();
    content_root.join(relative)
}

/// Whether `<content_root>/<language>` is a directory.
///
/// Codes that name the content root itself (`""`, `/`) never match.
pub fn is_language_dir(content_root: &Path, language: &str) -> bool {
    let dir = language_dir(content_root, language);
    dir != content_root && dir.is_dir()
}
