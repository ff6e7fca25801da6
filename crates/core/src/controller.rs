//! Page controller
//!
//! Ties a parsed [`Page`], its [`SiteConfig`] and the live [`UiState`] to the dispatch
//! table built for that page. This is the surface a render shell talks to: it feeds
//! events in and applies the effects that come back.

use crate::config::SiteConfig;
use crate::dispatch::{DispatchTable, Event};
use crate::page::Page;
use crate::router;
use crate::state::{Context, Diagnostic, Effect, Outcome, UiState};
use crate::table;

/// Placeholder markup swapped into an element while its content loads
pub const LOADING_HTML: &str = r#"<div class="loading"><div class="spinner"></div></div>"#;

pub type DiagnosticHook = Box<dyn FnMut(&Diagnostic)>;

pub struct Controller {
    page: Page,
    config: SiteConfig,
    state: UiState,
    table: DispatchTable,
    hook: Option<DiagnosticHook>,
}

impl std::fmt::Debug for Controller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Controller")
            .field("state", &self.state)
            .field("table", &self.table)
            .field("hook", &self.hook.is_some())
            .finish_non_exhaustive()
    }
}

impl Controller {
    pub fn new(page: Page, config: SiteConfig) -> Self {
        let table = DispatchTable::for_page(&page);
        Self {
            page,
            config,
            state: UiState::default(),
            table,
            hook: None,
        }
    }

    /// Report diagnostics to `hook` instead of dropping them
    pub fn with_diagnostics<F>(mut self, hook: F) -> Self
    where
        F: FnMut(&Diagnostic) + 'static,
    {
        self.hook = Some(Box::new(hook));
        self
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn dispatch_table(&self) -> &DispatchTable {
        &self.table
    }

    fn finish(&mut self, outcome: Outcome) -> Vec<Effect> {
        if let Some(hook) = self.hook.as_mut() {
            for diagnostic in &outcome.diagnostics {
                hook(diagnostic);
            }
        }
        outcome.effects
    }

    pub fn boot(&mut self) -> Vec<Effect> {
        let ctx = Context::new(&self.page, &self.config);
        let outcome = router::boot(&ctx, &mut self.state);
        self.finish(outcome)
    }

    pub fn dispatch(&mut self, event: &Event) -> Vec<Effect> {
        let ctx = Context::new(&self.page, &self.config);
        let outcome = self.table.dispatch(&ctx, &mut self.state, event);
        self.finish(outcome)
    }

    pub fn navigate_to_section(&mut self, section_id: &str) -> Vec<Effect> {
        let ctx = Context::new(&self.page, &self.config);
        let outcome = router::activate(&ctx, &mut self.state, section_id, None);
        self.finish(outcome)
    }

    pub fn filter_table(&mut self, value: &str, table_id: &str) -> Vec<Effect> {
        let ctx = Context::new(&self.page, &self.config);
        let outcome = table::filter_table(&ctx, &mut self.state, table_id, value);
        self.finish(outcome)
    }

    /// Swap the content of `element_id` for the loading placeholder
    pub fn show_loading(&mut self, element_id: &str) -> Vec<Effect> {
        let outcome = if self.page.element_ids.contains(element_id) {
            let mut outcome = Outcome::none();
            outcome.push(Effect::ReplaceContent {
                element: element_id.to_string(),
                html: LOADING_HTML.to_string(),
            });
            outcome
        } else {
            Outcome::diagnostic(Diagnostic::MissingElement {
                element: element_id.to_string(),
            })
        };
        self.finish(outcome)
    }
}
