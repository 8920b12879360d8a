//! Directory scanning and page collection.
//!
//! The content tree is read in two ways:
//!
//! - [`list_dir`] lists the immediate children of one directory. The
//!   navigation builder uses it for the language, product, and tab levels.
//! - [`collect_pages`] walks everything beneath a directory and returns the
//!   sorted page identifiers of every document found. The builder uses it for
//!   group directories, whose nesting depth is arbitrary.
//!
//! ## What Gets Skipped
//!
//! Both share the same filter ([`is_ignored`]):
//!
//! - names starting with `.` (hidden)
//! - directories named `.git`, `.github`, `node_modules`, `__MACOSX`
//! - files whose lowercased name is `.ds_store`
//! - anything that is neither a regular file nor a directory (symlinks are
//!   not followed)
//!
//! ## Page Identifiers
//!
//! A page identifier is the document path relative to the content root, with
//! `/` separators and the extension stripped:
//!
//! ```text
//! <root>/en/ai/guides/basics/intro.mdx  →  en/ai/guides/basics/intro
//! ```
//!
//! ## Ordering
//!
//! [`sort_pages`] puts identifiers ending in the segment `index` first, then
//! orders everything lexicographically. Raw directory order never leaks into
//! the output: [`list_dir`] sorts by name and [`collect_pages`] sorts its
//! result.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

/// Document extensions, matched case-insensitively.
pub const DOCUMENT_EXTENSIONS: &[&str] = &["md", "mdx"];

/// Directory names skipped at every level, matched exactly.
pub const IGNORED_DIR_NAMES: &[&str] = &[".git", ".github", "node_modules", "__MACOSX"];

/// File names skipped at every level, matched against the lowercased name.
pub const IGNORED_FILE_NAMES: &[&str] = &[".ds_store"];

const HIDDEN_PREFIX: char = '.';

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("cannot read directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("error walking directory tree: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("{path} is not under the content root {root}")]
    OutsideRoot { path: PathBuf, root: PathBuf },
}

/// The visible children of one directory, each list sorted by name.
#[derive(Debug, Default)]
pub struct DirListing {
    pub dirs: Vec<PathBuf>,
    pub files: Vec<PathBuf>,
}

/// Whether an entry named `name` is excluded from every scan.
pub fn is_ignored(name: &str, is_dir: bool) -> bool {
    if name.starts_with(HIDDEN_PREFIX) {
        return true;
    }
    if is_dir {
        IGNORED_DIR_NAMES.contains(&name)
    } else {
        IGNORED_FILE_NAMES.contains(&name.to_lowercase().as_str())
    }
}

/// Whether `path` has a recognized document extension.
pub fn is_document(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| DOCUMENT_EXTENSIONS.contains(&ext.as_str()))
}

/// List the immediate, non-ignored children of `dir`.
pub fn list_dir(dir: &Path) -> Result<DirListing, ScanError> {
    let read_err = |source: std::io::Error| ScanError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut listing = DirListing::default();
    for entry in fs::read_dir(dir).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        let file_type = entry.file_type().map_err(read_err)?;
        let name = entry.file_name();
        let name = name.to_string_lossy();

        if file_type.is_dir() {
            if !is_ignored(&name, true) {
                listing.dirs.push(entry.path());
            }
        } else if file_type.is_file() && !is_ignored(&name, false) {
            listing.files.push(entry.path());
        }
    }

    listing.dirs.sort();
    listing.files.sort();
    Ok(listing)
}

/// Convert a document path into a page identifier relative to `root`.
pub fn page_id(root: &Path, file: &Path) -> Result<String, ScanError> {
    let rel = file
        .strip_prefix(root)
        .map_err(|_| ScanError::OutsideRoot {
            path: file.to_path_buf(),
            root: root.to_path_buf(),
        })?
        .with_extension("");

    Ok(rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/"))
}

fn is_index(page: &str) -> bool {
    page.rsplit('/').next() == Some("index")
}

/// Sort page identifiers: `index` pages first, then lexicographic.
pub fn sort_pages(pages: &mut [String]) {
    pages.sort_by(|a, b| is_index(b).cmp(&is_index(a)).then_with(|| a.cmp(b)));
}

/// Recursively collect every document beneath `dir` as sorted page identifiers.
///
/// Ignored directories are pruned, so nothing below them is visited.
pub fn collect_pages(dir: &Path, root: &Path) -> Result<Vec<String>, ScanError> {
    let walker = WalkDir::new(dir).min_depth(1).into_iter().filter_entry(|e| {
        let name = e.file_name().to_string_lossy();
        e.depth() == 0 || !is_ignored(&name, e.file_type().is_dir())
    });

    let mut pages = Vec::new();
    for entry in walker {
        let entry = entry?;
        if entry.file_type().is_file() && is_document(entry.path()) {
            pages.push(page_id(root, entry.path())?);
        }
    }

    sort_pages(&mut pages);
    Ok(pages)
}
