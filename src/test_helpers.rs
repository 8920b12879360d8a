//! Shared test utilities for the docs-nav test suite.
//!
//! Provides content-tree builders, lookup helpers that panic with the
//! available names on a miss, and structural assertions over
//! [`LanguageNode`]s.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = TempDir::new().unwrap();
//! touch(tmp.path(), "en/ai/guides/setup.md");
//!
//! let node = build_language("en", tmp.path(), None, &Labels::default()).unwrap();
//! let tab = find_tab(&node, "AI", "Guides");
//! assert_eq!(group_names(tab), ["Default"]);
//! ```

use std::fs;
use std::path::Path;
use tempfile::TempDir;

use crate::types::{Group, LanguageNode, Product, Tab};

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/content/` to a temp directory and return it.
///
/// The copy includes `docs.json`, so the temp dir works as both content
/// root and document location.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// Create `root/rel` as a small markdown file, creating parents as needed.
pub fn touch(root: &Path, rel: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, format!("# {rel}\n")).unwrap();
}

/// Create `root/rel` as an (empty) directory.
pub fn touch_dir(root: &Path, rel: &str) {
    fs::create_dir_all(root.join(rel)).unwrap();
}

// =========================================================================
// Lookups — panics with a clear message on miss
// =========================================================================

/// Find a product by display name. Panics if not found.
pub fn find_product<'a>(node: &'a LanguageNode, name: &str) -> &'a Product {
    node.products
        .iter()
        .find(|p| p.product == name)
        .unwrap_or_else(|| {
            panic!(
                "product '{name}' not found in '{}'. Available: {:?}",
                node.language,
                product_names(node)
            )
        })
}

/// Find a tab by product and tab display name. Panics if not found.
pub fn find_tab<'a>(node: &'a LanguageNode, product: &str, name: &str) -> &'a Tab {
    let p = find_product(node, product);
    p.tabs.iter().find(|t| t.tab == name).unwrap_or_else(|| {
        let names: Vec<&str> = p.tabs.iter().map(|t| t.tab.as_str()).collect();
        panic!("tab '{name}' not found in product '{product}'. Available: {names:?}")
    })
}

/// Find a group by display name within a tab. Panics if not found.
pub fn find_group<'a>(tab: &'a Tab, name: &str) -> &'a Group {
    tab.groups
        .iter()
        .find(|g| g.group == name)
        .unwrap_or_else(|| {
            panic!(
                "group '{name}' not found in tab '{}'. Available: {:?}",
                tab.tab,
                group_names(tab)
            )
        })
}

// =========================================================================
// Bulk extractors
// =========================================================================

/// Product display names in output order.
pub fn product_names(node: &LanguageNode) -> Vec<&str> {
    node.products.iter().map(|p| p.product.as_str()).collect()
}

/// Tab display names of one product in output order.
pub fn tab_names<'a>(node: &'a LanguageNode, product: &str) -> Vec<&'a str> {
    find_product(node, product)
        .tabs
        .iter()
        .map(|t| t.tab.as_str())
        .collect()
}

/// Group display names of one tab in output order.
pub fn group_names(tab: &Tab) -> Vec<&str> {
    tab.groups.iter().map(|g| g.group.as_str()).collect()
}

// =========================================================================
// Structural assertions
// =========================================================================

/// Assert that no product, tab, or group in `node` is empty.
pub fn assert_no_empty_levels(node: &LanguageNode) {
    for product in &node.products {
        assert!(
            !product.tabs.is_empty(),
            "product '{}' has no tabs",
            product.product
        );
        for tab in &product.tabs {
            assert!(!tab.groups.is_empty(), "tab '{}' has no groups", tab.tab);
            for group in &tab.groups {
                assert!(
                    !group.pages.is_empty(),
                    "group '{}' in tab '{}' has no pages",
                    group.group,
                    tab.tab
                );
            }
        }
    }
}
