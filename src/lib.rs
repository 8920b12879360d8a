//! # docs-nav
//!
//! Derives the `navigation.languages` section of a Mintlify-style `docs.json`
//! from the layout of the content tree on disk. Folder depth is the schema:
//!
//! ```text
//! <content root>/
//! ├── docs.json
//! ├── en/                            # language
//! │   └── ai/                        # product      → "AI"
//! │       └── guides/                # tab          → "Guides"
//! │           ├── setup.md           # default group ("Default")
//! │           └── basics/            # named group  → "Basics"
//! │               ├── index.md       # index pages lead their group
//! │               └── intro.md
//! └── zh-Hans/
//!     └── ...
//! ```
//!
//! # Pipeline
//!
//! ```text
//! languages  →  nav (per language)  →  generate (merge into docs.json)  →  stdout / file
//! ```
//!
//! 1. [`languages`] decides which language directories to process.
//! 2. [`nav`] walks each one into products, tabs, groups, and pages, using
//!    [`scan`] for directory access and [`naming`] for display names.
//! 3. [`generate`] replaces `navigation.languages` in the parsed document,
//!    adds a top-level `navbar` if missing, and either previews the nodes or
//!    writes the document back.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Filtered directory listing and recursive page collection |
//! | [`naming`] | Slug → display name (override table, then title case) |
//! | [`labels`] | Per-language label tables, stock defaults and TOML overlay |
//! | [`types`] | Serialized navigation types (`Product`, `Tab`, `Group`, `LanguageNode`) |
//! | [`nav`] | Builds one language's navigation tree |
//! | [`languages`] | Resolves the ordered list of languages to process |
//! | [`generate`] | Loads, merges, and persists `docs.json` |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Opaque Document, Typed Navigation
//!
//! `docs.json` carries many fields this tool knows nothing about. It is parsed
//! into a `serde_json::Value` (with key order preserved) and only
//! `navigation.languages` and, when absent, `navbar` are touched. The
//! navigation itself is built as typed structs and converted at the seam.
//!
//! ## Deterministic Output
//!
//! Directory listings are sorted by name and page lists have a total order, so
//! running twice on an unchanged tree produces byte-identical files. That keeps
//! diffs of `docs.json` limited to real content changes.

pub mod generate;
pub mod labels;
pub mod languages;
pub mod naming;
pub mod nav;
pub mod output;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
