//! Navigation builder: one language subtree → one [`LanguageNode`].
//!
//! Folder depth below the language root decides what each directory means:
//!
//! ```text
//! <content root>/
//! └── en/                         # language
//!     └── ai/                     # product
//!         └── guides/             # tab
//!             ├── setup.md        # → "Default" group
//!             └── basics/         # → "Basics" group
//!                 ├── intro.md
//!                 └── deep/
//!                     └── more.md # nested pages join their group
//! ```
//!
//! Within a tab the default group (pages sitting directly in the tab) comes
//! first, then named groups sorted by display name. Empty groups, tabs, and
//! products are dropped, so every level of the output has children.

use crate::labels::Labels;
use crate::languages;
use crate::naming::display_name;
use crate::scan::{self, ScanError};
use crate::types::{Group, LanguageNode, Product, Tab};
use serde_json::{Map, Value};
use std::path::Path;

/// Build the navigation for `language` from `<content_root>/<language>`.
///
/// `prior` is this language's entry from the existing `docs.json`, if any; its
/// fields are carried into the node unchanged apart from `navbar` and
/// `products`.
pub fn build_language(
    language: &str,
    content_root: &Path,
    prior: Option<&Map<String, Value>>,
    labels: &Labels,
) -> Result<LanguageNode, ScanError> {
    let language_dir = languages::language_dir(content_root, language);
    let mut products = Vec::new();

    for product_dir in scan::list_dir(&language_dir)?.dirs {
        let slug = file_name(&product_dir);
        let tabs = build_tabs(&product_dir, content_root, language, labels)?;
        if tabs.is_empty() {
            tracing::debug!(language, product = %slug, "Dropping product with no tabs");
            continue;
        }
        products.push(Product {
            product: display_name(&slug, language, labels),
            tabs,
        });
    }

    tracing::info!(language, products = products.len(), "Built navigation");

    Ok(LanguageNode {
        language: language.to_string(),
        inherited: prior.cloned().unwrap_or_default(),
        navbar: labels.navbar_links(language).to_vec(),
        products,
    })
}

fn build_tabs(
    product_dir: &Path,
    content_root: &Path,
    language: &str,
    labels: &Labels,
) -> Result<Vec<Tab>, ScanError> {
    let mut tabs = Vec::new();
    for tab_dir in scan::list_dir(product_dir)?.dirs {
        let slug = file_name(&tab_dir);
        let groups = build_groups(&tab_dir, content_root, language, labels)?;
        if groups.is_empty() {
            tracing::debug!(language, tab = %slug, "Dropping tab with no pages");
            continue;
        }
        tabs.push(Tab {
            tab: display_name(&slug, language, labels),
            groups,
        });
    }
    Ok(tabs)
}

fn build_groups(
    tab_dir: &Path,
    content_root: &Path,
    language: &str,
    labels: &Labels,
) -> Result<Vec<Group>, ScanError> {
    let listing = scan::list_dir(tab_dir)?;

    let mut named = Vec::new();
    for group_dir in &listing.dirs {
        let pages = scan::collect_pages(group_dir, content_root)?;
        if pages.is_empty() {
            continue;
        }
        named.push(Group {
            group: display_name(&file_name(group_dir), language, labels),
            pages,
        });
    }
    // Stable, so equal display names keep slug order.
    named.sort_by(|a, b| a.group.cmp(&b.group));

    let mut default_pages = listing
        .files
        .iter()
        .filter(|f| scan::is_document(f))
        .map(|f| scan::page_id(content_root, f))
        .collect::<Result<Vec<_>, _>>()?;
    scan::sort_pages(&mut default_pages);

    let mut groups = Vec::with_capacity(named.len() + 1);
    if !default_pages.is_empty() {
        groups.push(Group {
            group: labels.default_group_name(language).to_string(),
            pages: default_pages,
        });
    }
    groups.extend(named);
    Ok(groups)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn build(root: &Path, language: &str) -> LanguageNode {
        build_language(language, root, None, &Labels::default()).unwrap()
    }

    #[test]
    fn guides_scenario() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        touch(root, "en/ai/guides/setup.md");
        touch(root, "en/ai/guides/basics/intro.md");
        touch(root, "en/ai/guides/basics/advanced.md");

        let node = build(root, "en");
        assert_eq!(node.language, "en");
        assert_eq!(product_names(&node), ["AI"]);

        let tab = find_tab(&node, "AI", "Guides");
        assert_eq!(group_names(tab), ["Default", "Basics"]);
        assert_eq!(find_group(tab, "Default").pages, ["en/ai/guides/setup"]);
        assert_eq!(
            find_group(tab, "Basics").pages,
            ["en/ai/guides/basics/advanced", "en/ai/guides/basics/intro"]
        );
    }

    #[test]
    fn index_page_leads_its_group() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        touch(root, "en/p/t/g/advanced.md");
        touch(root, "en/p/t/g/index.mdx");
        touch(root, "en/p/t/zeta.md");
        touch(root, "en/p/t/index.md");

        let node = build(root, "en");
        let tab = find_tab(&node, "P", "T");
        assert_eq!(find_group(tab, "Default").pages, ["en/p/t/index", "en/p/t/zeta"]);
        assert_eq!(find_group(tab, "G").pages, ["en/p/t/g/index", "en/p/t/g/advanced"]);
    }

    #[test]
    fn default_group_first_then_named_sorted_by_display_name() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        touch(root, "en/ai/docs/overview.md");
        touch(root, "en/ai/docs/workflow/a.md");
        // Slug sorts first, display name "Agent Middleware" sorts after "AI Assistant".
        touch(root, "en/ai/docs/agent-middleware/a.md");
        touch(root, "en/ai/docs/ai-assistant/a.md");

        let node = build(root, "en");
        let tab = find_tab(&node, "AI", "Docs");
        assert_eq!(
            group_names(tab),
            ["Default", "AI Assistant", "Agent Middleware", "Workflow"]
        );
    }

    #[test]
    fn group_sort_is_case_sensitive() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        touch(root, "en/p/t/zebra/a.md");
        touch(root, "en/p/t/Apple/a.md");
        touch(root, "en/p/t/ai/a.md");

        let node = build(root, "en");
        // "AI" < "Apple" < "Zebra" byte-wise.
        assert_eq!(group_names(find_tab(&node, "P", "T")), ["AI", "Apple", "Zebra"]);
    }

    #[test]
    fn only_named_groups_means_no_default_group() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        touch(root, "en/p/t/g/a.md");
        touch(root, "en/p/t/notes.txt");

        let node = build(root, "en");
        assert_eq!(group_names(find_tab(&node, "P", "T")), ["G"]);
    }

    #[test]
    fn empty_levels_are_dropped() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        touch(root, "en/keep/tab/page.md");
        touch_dir(root, "en/keep/empty-tab/empty-group");
        touch(root, "en/keep/txt-only/readme.txt");
        touch_dir(root, "en/empty-product/tab");
        touch(root, "en/top-level-page.md");

        let node = build(root, "en");
        assert_eq!(product_names(&node), ["Keep"]);
        assert_eq!(tab_names(&node, "Keep"), ["Tab"]);
        assert_no_empty_levels(&node);
    }

    #[test]
    fn ignored_dirs_contribute_nothing() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        touch(root, "en/p/t/guide.md");
        touch(root, "en/p/t/node_modules/pkg/readme.md");
        touch(root, "en/p/t/g/.git/info.md");
        touch(root, "en/p/t/g/page.md");
        touch(root, "en/p/.github/workflows/ci.md");
        touch(root, "en/node_modules/t/page.md");

        let node = build(root, "en");
        assert_eq!(product_names(&node), ["P"]);
        assert_eq!(tab_names(&node, "P"), ["T"]);
        let tab = find_tab(&node, "P", "T");
        assert_eq!(group_names(tab), ["Default", "G"]);
        assert_eq!(find_group(tab, "G").pages, ["en/p/t/g/page"]);
    }

    #[test]
    fn language_without_products_still_yields_node() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "fr/readme.md");

        let node = build(tmp.path(), "fr");
        assert_eq!(node.language, "fr");
        assert!(node.products.is_empty());
        // Unrecognized language borrows the default language's navbar.
        assert_eq!(node.navbar, Labels::default().navbar_links("en"));
    }

    #[test]
    fn language_specific_labels() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        touch(root, "zh-Hans/ai/knowledge-base/intro.md");
        touch(root, "zh-Hans/ai/knowledge-base/getting-started/a.md");

        let node = build(root, "zh-Hans");
        assert_eq!(product_names(&node), ["AI"]);
        let tab = find_tab(&node, "AI", "知识库");
        assert_eq!(group_names(tab), ["默认", "Getting Started"]);
        assert_eq!(node.navbar[1].label, "支持");
    }

    #[test]
    fn prior_fields_inherited() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "en/p/t/a.md");
        let prior = json!({ "language": "en", "default": true, "products": [] });

        let node = build_language(
            "en",
            tmp.path(),
            prior.as_object(),
            &Labels::default(),
        )
        .unwrap();

        assert!(node.is_default());
        assert_eq!(node.products.len(), 1);
        let value = node.to_value().unwrap();
        assert_eq!(value["products"][0]["product"], "P");
    }

    #[test]
    fn products_and_tabs_ordered_by_slug() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        touch(root, "en/workflow/b/a.md");
        touch(root, "en/ai/b/a.md");
        touch(root, "en/ai/a/a.md");

        let node = build(root, "en");
        assert_eq!(product_names(&node), ["AI", "Workflow"]);
        assert_eq!(tab_names(&node, "AI"), ["A", "B"]);
    }

    #[test]
    fn building_twice_is_identical() {
        let tmp = setup_fixtures();
        let first = build(tmp.path(), "en");
        let second = build(tmp.path(), "en");
        assert_eq!(first, second);
    }

    #[test]
    fn rooted_language_code_scans_below_content_root() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "docs/en/p/t/a.md");

        let node = build(tmp.path(), "/docs/en");
        assert_eq!(node.language, "/docs/en");
        assert_eq!(
            find_group(find_tab(&node, "P", "T"), "Default").pages,
            ["docs/en/p/t/a"]
        );
    }

    #[test]
    fn missing_language_dir_is_error() {
        let tmp = TempDir::new().unwrap();
        let result = build_language("en", tmp.path(), None, &Labels::default());
        assert!(matches!(result, Err(ScanError::ReadDir { .. })));
    }
}
