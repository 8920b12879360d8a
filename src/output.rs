//! CLI output formatting.
//!
//! Commit mode prints the navigation that was written as an indented tree,
//! one language per block, followed by a one-line result:
//!
//! ```text
//! en
//!     001 AI
//!         001 Guides
//!             001 Default (1 page)
//!             002 Basics (3 pages)
//! zh-Hans
//!     (no products)
//! Updated navigation in docs.json (2 languages, 4 pages)
//! ```
//!
//! Preview mode prints nothing from here; stdout carries only the JSON.
//!
//! Each `format_*` function is pure and returns lines for testability. The
//! `print_*` wrappers write them to stdout.

use crate::types::LanguageNode;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

/// Format the navigation tree of every language node.
pub fn format_navigation(nodes: &[LanguageNode]) -> Vec<String> {
    let mut lines = Vec::new();
    for node in nodes {
        lines.push(node.language.clone());
        if node.products.is_empty() {
            lines.push(format!("{}(no products)", indent(1)));
            continue;
        }
        for (pi, product) in node.products.iter().enumerate() {
            lines.push(format!("{}{} {}", indent(1), format_index(pi + 1), product.product));
            for (ti, tab) in product.tabs.iter().enumerate() {
                lines.push(format!("{}{} {}", indent(2), format_index(ti + 1), tab.tab));
                for (gi, group) in tab.groups.iter().enumerate() {
                    lines.push(format!(
                        "{}{} {} ({})",
                        indent(3),
                        format_index(gi + 1),
                        group.group,
                        plural(group.pages.len(), "page")
                    ));
                }
            }
        }
    }
    lines
}

/// Format the closing line of a commit-mode run.
pub fn format_update_summary(
    docs_path: &Path,
    nodes: &[LanguageNode],
    added_navbar: bool,
) -> Vec<String> {
    let pages: usize = nodes.iter().map(LanguageNode::page_count).sum();
    let mut lines = Vec::new();
    if added_navbar {
        lines.push("Added default navbar".to_string());
    }
    lines.push(format!(
        "Updated navigation in {} ({}, {})",
        docs_path.display(),
        plural(nodes.len(), "language"),
        plural(pages, "page")
    ));
    lines
}

pub fn print_commit_output(docs_path: &Path, nodes: &[LanguageNode], added_navbar: bool) {
    for line in format_navigation(nodes) {
        println!("{}", line);
    }
    for line in format_update_summary(docs_path, nodes, added_navbar) {
        println!("{}", line);
    }
}
