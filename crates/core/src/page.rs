//! Render surface model
//!
//! A [`Page`] is the read-only view of a statically authored document that every other
//! module works against. It is built once from HTML with [`parse_page`] and never
//! mutated afterwards: sections, controls and containers are declared in markup and the
//! controller only toggles state on top of them.
//!
//! Absent containers are represented as `false`/`None`/empty rather than errors. The
//! dispatch table uses these flags to decide which handlers to wire at all.

use std::collections::{BTreeSet, HashMap};

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use serde::Serialize;

pub const NAV_TOGGLE_ID: &str = "navToggle";
pub const NAV_DROPDOWN_ID: &str = "navDropdown";
pub const NAV_PROGRESS_ID: &str = "navProgress";
pub const BREADCRUMB_ID: &str = "currentSection";
pub const SEARCH_INPUT_ID: &str = "searchInput";
pub const SEARCH_RESULTS_ID: &str = "searchResults";
pub const BLOG_SEARCH_ID: &str = "blogSearch";

/// One content panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub id: String,
    pub ordinal: usize,
    pub title: Option<String>,
    /// Rendered text content with whitespace runs collapsed to single spaces
    pub text: String,
}

/// A clickable affordance that requests activation of a section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavControl {
    pub index: usize,
    pub section: String,
    /// Whether the control lives inside the mobile overlay
    pub in_overlay: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeBlock {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CopyButton {
    /// Index into [`Page::code_blocks`] of the enclosing code container
    pub block: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    pub id: Option<String>,
    /// `td` texts per `tr`, in document order. Row 0 is the header row.
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableInput {
    /// Index into [`Page::tables`] of the table this input filters
    pub table: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressFill {
    /// Authored width, e.g. `75%`
    pub width: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlogPost {
    pub title: String,
    pub excerpt: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Page {
    pub sections: Vec<Section>,
    pub controls: Vec<NavControl>,
    pub has_nav_toggle: bool,
    pub has_nav_dropdown: bool,
    pub has_progress: bool,
    pub has_breadcrumb: bool,
    pub has_search_input: bool,
    pub has_search_results: bool,
    pub code_blocks: Vec<CodeBlock>,
    pub copy_buttons: Vec<CopyButton>,
    pub tables: Vec<Table>,
    pub table_inputs: Vec<TableInput>,
    pub progress_bars: usize,
    pub progress_fills: Vec<ProgressFill>,
    pub has_blog_grid: bool,
    pub has_blog_search: bool,
    pub blog_posts: Vec<BlogPost>,
    /// Text of every `.blog-tag` in document order (filter links and post tags alike)
    pub blog_tags: Vec<String>,
    pub element_ids: BTreeSet<String>,
    pub has_highlighter: bool,
}

impl Page {
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.id == id)
    }

    pub fn first_control_for(&self, section_id: &str) -> Option<&NavControl> {
        self.controls
            .iter()
            .find(|control| control.section == section_id)
    }

    /// Number of distinct section ids referenced by navigation controls
    pub fn distinct_control_sections(&self) -> usize {
        self.controls
            .iter()
            .map(|control| control.section.as_str())
            .collect::<BTreeSet<_>>()
            .len()
    }

    pub fn has_overlay(&self) -> bool {
        self.has_nav_toggle && self.has_nav_dropdown
    }

    pub fn has_search(&self) -> bool {
        self.has_search_input && self.has_search_results
    }

    pub fn table_by_id(&self, id: &str) -> Option<usize> {
        self.tables
            .iter()
            .position(|table| table.id.as_deref() == Some(id))
    }
}

fn selector(css: &'static str) -> Selector {
    Selector::parse(css).expect("static selector is valid")
}

/// Collapse runs of whitespace into single spaces and trim the ends
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn element_text(element: &ElementRef) -> String {
    collapse_whitespace(&element.text().collect::<String>())
}

fn has_ancestor_with_id(element: &ElementRef, id: &str) -> bool {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .any(|ancestor| ancestor.value().id() == Some(id))
}

fn closest_with_class<'a>(element: &ElementRef<'a>, class: &str) -> Option<ElementRef<'a>> {
    std::iter::once(*element)
        .chain(element.ancestors().filter_map(ElementRef::wrap))
        .find(|candidate| candidate.value().classes().any(|name| name == class))
}

/// Extract the `width` declaration from an inline `style` attribute
pub fn inline_width(style: &str) -> Option<String> {
    let width_regex = Regex::new(r"(?i)(?:^|;)\s*width\s*:\s*([^;]+)").unwrap();
    width_regex
        .captures(style)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}

/// Build the render surface model from an HTML document
pub fn parse_page(html: &str) -> Page {
    let document = Html::parse_document(html);
    let exists = |css: &'static str| document.select(&selector(css)).next().is_some();

    let title_selector = selector(".section-title, h1, h2");
    let sections = document
        .select(&selector(".section"))
        .enumerate()
        .map(|(ordinal, element)| Section {
            id: element.value().id().unwrap_or_default().to_string(),
            ordinal,
            title: element
                .select(&title_selector)
                .next()
                .map(|heading| element_text(&heading)),
            text: element_text(&element),
        })
        .collect();

    let controls = document
        .select(&selector(".nav-item[data-section]"))
        .enumerate()
        .map(|(index, element)| NavControl {
            index,
            section: element
                .value()
                .attr("data-section")
                .unwrap_or_default()
                .to_string(),
            in_overlay: has_ancestor_with_id(&element, NAV_DROPDOWN_ID),
        })
        .collect();

    let code_selector = selector("pre code");
    let containers: Vec<ElementRef> = document.select(&selector(".code-container")).collect();
    let code_blocks = containers
        .iter()
        .map(|container| CodeBlock {
            text: container
                .select(&code_selector)
                .next()
                .map(|code| code.text().collect::<String>())
                .unwrap_or_default(),
        })
        .collect();
    let container_index: HashMap<_, _> = containers
        .iter()
        .enumerate()
        .map(|(index, container)| (container.id(), index))
        .collect();
    let copy_buttons = document
        .select(&selector(".copy-btn"))
        .map(|button| CopyButton {
            block: closest_with_class(&button, "code-container")
                .and_then(|container| container_index.get(&container.id()).copied())
                .filter(|&index| {
                    containers[index]
                        .select(&code_selector)
                        .next()
                        .is_some()
                }),
        })
        .collect();

    let row_selector = selector("tr");
    let cell_selector = selector("td");
    let table_elements: Vec<ElementRef> = document.select(&selector("table")).collect();
    let tables: Vec<Table> = table_elements
        .iter()
        .map(|table| Table {
            id: table.value().id().map(str::to_string),
            rows: table
                .select(&row_selector)
                .map(|row| row.select(&cell_selector).map(|c| element_text(&c)).collect())
                .collect(),
        })
        .collect();
    let table_index: HashMap<_, _> = table_elements
        .iter()
        .enumerate()
        .map(|(index, table)| (table.id(), index))
        .collect();
    let inner_table_selector = selector(".table");
    let table_inputs = document
        .select(&selector(".table-search input"))
        .map(|input| {
            let by_attribute = input.value().attr("data-table").and_then(|id| {
                tables
                    .iter()
                    .position(|table| table.id.as_deref() == Some(id))
            });
            let by_container = || {
                closest_with_class(&input, "table-container")
                    .and_then(|container| container.select(&inner_table_selector).next())
                    .and_then(|table| table_index.get(&table.id()).copied())
            };
            TableInput {
                table: by_attribute.or_else(by_container),
            }
        })
        .collect();

    let progress_fills = document
        .select(&selector(".progress-fill"))
        .map(|fill| ProgressFill {
            width: fill
                .value()
                .attr("style")
                .and_then(inline_width)
                .unwrap_or_default(),
        })
        .collect();

    let post_title_selector = selector(".blog-post-title");
    let post_excerpt_selector = selector(".blog-post-excerpt");
    let tag_selector = selector(".blog-tag");
    let blog_posts = document
        .select(&selector(".blog-post-card"))
        .map(|post| {
            let text_of = |css: &Selector| {
                post.select(css)
                    .next()
                    .map(|element| element_text(&element))
                    .unwrap_or_default()
            };
            BlogPost {
                title: text_of(&post_title_selector),
                excerpt: text_of(&post_excerpt_selector),
                tags: post
                    .select(&tag_selector)
                    .map(|tag| element_text(&tag))
                    .collect(),
            }
        })
        .collect();
    let blog_tags = document
        .select(&tag_selector)
        .map(|tag| element_text(&tag))
        .collect();

    let element_ids: BTreeSet<String> = document
        .select(&selector("[id]"))
        .filter_map(|element| element.value().id().map(str::to_string))
        .collect();

    let has_highlighter = document
        .select(&selector("script[src]"))
        .filter_map(|script| script.value().attr("src"))
        .any(|src| src.to_lowercase().contains("prism"));

    Page {
        sections,
        controls,
        has_nav_toggle: element_ids.contains(NAV_TOGGLE_ID),
        has_nav_dropdown: element_ids.contains(NAV_DROPDOWN_ID),
        has_progress: element_ids.contains(NAV_PROGRESS_ID),
        has_breadcrumb: element_ids.contains(BREADCRUMB_ID),
        has_search_input: element_ids.contains(SEARCH_INPUT_ID),
        has_search_results: element_ids.contains(SEARCH_RESULTS_ID),
        code_blocks,
        copy_buttons,
        tables,
        table_inputs,
        progress_bars: document.select(&selector(".progress-bar")).count(),
        progress_fills,
        has_blog_grid: exists(".blog-grid"),
        has_blog_search: element_ids.contains(BLOG_SEARCH_ID),
        blog_posts,
        blog_tags,
        has_highlighter,
        element_ids,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{BLOG_PAGE, GUIDE_PAGE};

    #[test]
    fn test_sections_in_declaration_order() {
        let page = parse_page(GUIDE_PAGE);
        let ids: Vec<_> = page.sections.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["overview", "gpu", "networking", "storage"]);
        assert_eq!(page.sections[2].ordinal, 2);
    }

    #[test]
    fn test_section_title_prefers_heading() {
        let page = parse_page(GUIDE_PAGE);
        assert_eq!(page.section("gpu").unwrap().title.as_deref(), Some("GPU Management"));
        assert_eq!(page.section("storage").unwrap().title, None);
    }

    #[test]
    fn test_section_text_is_collapsed() {
        let page = parse_page(GUIDE_PAGE);
        let text = &page.section("gpu").unwrap().text;
        assert!(text.starts_with("GPU Management"));
        assert!(!text.contains("  "));
        assert!(!text.contains('\n'));
    }

    #[test]
    fn test_controls_and_overlay_membership() {
        let page = parse_page(GUIDE_PAGE);
        assert_eq!(page.controls.len(), 8);
        assert_eq!(page.distinct_control_sections(), 4);
        assert!(!page.controls[0].in_overlay);
        assert!(page.controls[4].in_overlay);
        assert_eq!(page.controls[5].section, "gpu");
        assert_eq!(page.first_control_for("gpu").unwrap().index, 1);
    }

    #[test]
    fn test_singleton_containers() {
        let page = parse_page(GUIDE_PAGE);
        assert!(page.has_overlay());
        assert!(page.has_search());
        assert!(page.has_progress);
        assert!(page.has_breadcrumb);
        assert!(page.has_highlighter);
        assert!(!page.has_blog_grid);
    }

    #[test]
    fn test_missing_containers_are_absent() {
        let page =
            parse_page(r#"<html><body><div class="section" id="only">x</div></body></html>"#);
        assert!(!page.has_overlay());
        assert!(!page.has_search());
        assert!(!page.has_highlighter);
        assert!(page.controls.is_empty());
        assert_eq!(page.sections.len(), 1);
    }

    #[test]
    fn test_copy_buttons_resolve_code_blocks() {
        let page = parse_page(GUIDE_PAGE);
        assert_eq!(page.code_blocks.len(), 1);
        assert_eq!(page.code_blocks[0].text, "nvidia-smi --query-gpu=name");
        assert_eq!(page.copy_buttons[0].block, Some(0));
        // Button outside any code container
        assert_eq!(page.copy_buttons[1].block, None);
    }

    #[test]
    fn test_tables_and_inputs() {
        let page = parse_page(GUIDE_PAGE);
        assert_eq!(page.tables.len(), 2);
        assert_eq!(page.tables[0].id.as_deref(), Some("ports"));
        assert!(page.tables[0].rows[0].is_empty());
        assert_eq!(page.tables[0].rows[1], vec!["8080", "Web UI"]);
        // data-table attribute
        assert_eq!(page.table_inputs[0].table, Some(0));
        // enclosing table container
        assert_eq!(page.table_inputs[1].table, Some(1));
        assert_eq!(page.table_by_id("ports"), Some(0));
        assert_eq!(page.table_by_id("missing"), None);
    }

    #[test]
    fn test_progress_fills_capture_width() {
        let page = parse_page(GUIDE_PAGE);
        assert_eq!(page.progress_bars, 2);
        let widths: Vec<_> = page.progress_fills.iter().map(|f| f.width.as_str()).collect();
        assert_eq!(widths, vec!["75%", "40%"]);
    }

    #[test]
    fn test_inline_width() {
        assert_eq!(inline_width("width: 75%"), Some("75%".to_string()));
        assert_eq!(inline_width("color: red; width:10px;"), Some("10px".to_string()));
        assert_eq!(inline_width("min-width: 10px"), None);
        assert_eq!(inline_width("color: red"), None);
    }

    #[test]
    fn test_element_ids() {
        let page = parse_page(GUIDE_PAGE);
        assert!(page.element_ids.contains("gpu"));
        assert!(page.element_ids.contains("searchResults"));
    }

    #[test]
    fn test_blog_model() {
        let page = parse_page(BLOG_PAGE);
        assert!(page.has_blog_grid);
        assert!(page.has_blog_search);
        assert_eq!(page.blog_posts.len(), 3);
        assert_eq!(page.blog_posts[0].title, "Scaling GPU Workloads");
        assert_eq!(page.blog_posts[0].tags, vec!["GPU", "Kubernetes"]);
        assert_eq!(page.blog_tags[0], "All");
        assert_eq!(page.blog_tags.len(), 3 + 5);
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  a \n\t b  c "), "a b c");
        assert_eq!(collapse_whitespace(""), "");
    }
}
