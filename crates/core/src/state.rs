//! UI state, render effects and diagnostics
//!
//! Every operation in this crate takes the current [`UiState`], updates it in place and
//! returns an [`Outcome`]: the list of [`Effect`]s a render surface must apply to match
//! the new state, plus any [`Diagnostic`]s raised along the way.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::config::SiteConfig;
use crate::page::Page;
use crate::search::SearchResult;

/// Read-only inputs shared by every operation
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    pub page: &'a Page,
    pub config: &'a SiteConfig,
}

impl<'a> Context<'a> {
    pub fn new(page: &'a Page, config: &'a SiteConfig) -> Self {
        Self { page, config }
    }
}

/// Deferred work requested through [`Effect::Schedule`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "timer", rename_all = "snake_case")]
pub enum Timer {
    /// Put the copy button label back to "Copy"
    RevertCopyLabel { button: usize, generation: u64 },
    /// Restore an animated progress fill to its authored width
    RestoreFill { fill: usize },
    /// A debounced call is due
    Debounce { key: String, generation: u64 },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum Effect {
    SetSectionActive { section: String, active: bool },
    SetControlActive { control: usize, active: bool },
    SetBreadcrumb { label: String },
    /// Width of the navigation progress indicator, in percent
    SetProgress { percent: f64 },
    SetOverlayOpen { open: bool },
    ScrollToTop { smooth: bool },
    ScrollIntoView { target: String },
    ShowSearchResults { results: Vec<SearchResult>, html: String },
    HideSearchResults,
    ClearSearchInput,
    CopyToClipboard { text: String },
    SetCopyLabel { button: usize, label: String },
    SetRowVisible { table: usize, row: usize, visible: bool },
    SetPostVisible { post: usize, visible: bool },
    SetFillWidth { fill: usize, width: String },
    ReplaceContent { element: String, html: String },
    HighlightAll,
    Schedule { delay_ms: u64, timer: Timer },
}

/// Development-only reports. Default behavior never surfaces these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "diagnostic", rename_all = "snake_case")]
pub enum Diagnostic {
    MissingElement { element: String },
    UnknownSection { section: String },
    UnknownTable { table: String },
    UnresolvedAnchor { href: String },
    StaleTimer { timer: Timer },
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Diagnostic::MissingElement { element } => write!(f, "missing element: {element}"),
            Diagnostic::UnknownSection { section } => write!(f, "unknown section: {section}"),
            Diagnostic::UnknownTable { table } => write!(f, "unknown table: {table}"),
            Diagnostic::UnresolvedAnchor { href } => write!(f, "unresolved anchor: {href}"),
            Diagnostic::StaleTimer { timer } => write!(f, "stale timer ignored: {timer:?}"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Outcome {
    pub effects: Vec<Effect>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Outcome {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn diagnostic(diagnostic: Diagnostic) -> Self {
        Self {
            effects: Vec::new(),
            diagnostics: vec![diagnostic],
        }
    }

    pub fn push(&mut self, effect: Effect) {
        self.effects.push(effect);
    }

    pub fn extend(&mut self, other: Outcome) {
        self.effects.extend(other.effects);
        self.diagnostics.extend(other.diagnostics);
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty() && self.diagnostics.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UiState {
    pub active_section: Option<String>,
    pub active_controls: BTreeSet<usize>,
    pub overlay_open: bool,
    pub breadcrumb: Option<String>,
    pub progress: f64,
    /// Last value seen in the search input, case-folded
    pub query: String,
    /// `None` while the result surface is hidden
    pub results: Option<Vec<SearchResult>>,
    /// Bumped on every copy click so only the latest revert timer applies
    pub copy_generations: BTreeMap<usize, u64>,
    pub copy_labels: BTreeMap<usize, String>,
    /// Progress fills currently between reset and restore
    pub animating_fills: BTreeSet<usize>,
    pub fill_widths: BTreeMap<usize, String>,
    /// Hidden rows per table index
    pub hidden_rows: BTreeMap<usize, BTreeSet<usize>>,
    pub hidden_posts: BTreeSet<usize>,
}

impl UiState {
    pub fn is_section_active(&self, section_id: &str) -> bool {
        self.active_section.as_deref() == Some(section_id)
    }

    pub fn is_control_active(&self, control: usize) -> bool {
        self.active_controls.contains(&control)
    }

    pub fn search_visible(&self) -> bool {
        self.results.is_some()
    }

    pub fn is_row_visible(&self, table: usize, row: usize) -> bool {
        !self
            .hidden_rows
            .get(&table)
            .is_some_and(|rows| rows.contains(&row))
    }

    pub fn is_post_visible(&self, post: usize) -> bool {
        !self.hidden_posts.contains(&post)
    }
}
