//! Event dispatch table
//!
//! Every listener the page needs is one [`Binding`]: an event kind, a target predicate
//! and a handler. An event runs every binding that matches it, in registration order.
//! Bindings are registered only when the elements they depend on exist, and a binding
//! registered twice under the same name replaces the earlier one.

use serde::{Deserialize, Serialize};

use crate::page::Page;
use crate::state::{Context, Diagnostic, Outcome, Timer, UiState};
use crate::{animation, blog, clipboard, overlay, router, scroll, search, table};

/// What a pointer or keyboard event landed on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Target {
    NavControl { index: usize },
    NavToggle,
    /// Anywhere inside the overlay container other than a navigation control
    Overlay,
    SearchInput,
    SearchResult { section: String },
    CopyButton { index: usize },
    TableInput { index: usize },
    BlogTag { index: usize },
    BlogSearch,
    Anchor { href: String },
    /// Anything else on the page
    Document,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    Click { target: Target },
    KeyDown { key: String },
    KeyUp { target: Target, value: String },
    Input { target: Target, value: String },
    Resize { width: u32 },
    Scroll,
    /// A `.progress-bar` entered or left the viewport
    Intersect { bar: usize, visible: bool },
    Timer { timer: Timer },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Click,
    KeyDown,
    KeyUp,
    Input,
    Resize,
    Scroll,
    Intersect,
    Timer,
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::Click { .. } => EventKind::Click,
            Event::KeyDown { .. } => EventKind::KeyDown,
            Event::KeyUp { .. } => EventKind::KeyUp,
            Event::Input { .. } => EventKind::Input,
            Event::Resize { .. } => EventKind::Resize,
            Event::Scroll => EventKind::Scroll,
            Event::Intersect { .. } => EventKind::Intersect,
            Event::Timer { .. } => EventKind::Timer,
        }
    }

    pub fn target(&self) -> Option<&Target> {
        match self {
            Event::Click { target } | Event::KeyUp { target, .. } | Event::Input { target, .. } => {
                Some(target)
            }
            _ => None,
        }
    }
}

pub type Predicate = fn(&Page, &Event) -> bool;
pub type Handler = fn(&Context, &mut UiState, &Event) -> Outcome;

#[derive(Clone)]
pub struct Binding {
    pub kind: EventKind,
    pub name: &'static str,
    matches: Predicate,
    handler: Handler,
}

impl std::fmt::Debug for Binding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Binding")
            .field("kind", &self.kind)
            .field("name", &self.name)
            .finish()
    }
}

#[derive(Debug, Clone, Default)]
pub struct DispatchTable {
    bindings: Vec<Binding>,
}

fn any(_: &Page, _: &Event) -> bool {
    true
}

fn on_nav_control(page: &Page, event: &Event) -> bool {
    matches!(event.target(), Some(Target::NavControl { index }) if *index < page.controls.len())
}

fn on_nav_toggle(_: &Page, event: &Event) -> bool {
    matches!(event.target(), Some(Target::NavToggle))
}

fn outside_overlay(page: &Page, event: &Event) -> bool {
    match event.target() {
        Some(Target::NavToggle) | Some(Target::Overlay) => false,
        Some(Target::NavControl { index }) => {
            !page.controls.get(*index).is_some_and(|c| c.in_overlay)
        }
        _ => true,
    }
}

fn on_search_input(_: &Page, event: &Event) -> bool {
    matches!(event.target(), Some(Target::SearchInput))
}

fn on_search_result(_: &Page, event: &Event) -> bool {
    matches!(event.target(), Some(Target::SearchResult { .. }))
}

fn on_copy_button(_: &Page, event: &Event) -> bool {
    matches!(event.target(), Some(Target::CopyButton { .. }))
}

fn on_table_input(_: &Page, event: &Event) -> bool {
    matches!(event.target(), Some(Target::TableInput { .. }))
}

fn on_anchor(_: &Page, event: &Event) -> bool {
    matches!(event.target(), Some(Target::Anchor { href }) if href.starts_with('#'))
}

fn on_blog_tag(_: &Page, event: &Event) -> bool {
    matches!(event.target(), Some(Target::BlogTag { .. }))
}

fn on_blog_search(_: &Page, event: &Event) -> bool {
    matches!(event.target(), Some(Target::BlogSearch))
}

fn on_visible_bar(page: &Page, event: &Event) -> bool {
    matches!(event, Event::Intersect { bar, visible: true } if *bar < page.progress_bars)
}

fn activate_control(ctx: &Context, state: &mut UiState, event: &Event) -> Outcome {
    match event.target() {
        Some(Target::NavControl { index }) => match ctx.page.controls.get(*index) {
            Some(control) => router::activate(ctx, state, &control.section, Some(*index)),
            None => Outcome::none(),
        },
        _ => Outcome::none(),
    }
}

fn toggle_overlay(ctx: &Context, state: &mut UiState, _: &Event) -> Outcome {
    overlay::toggle(ctx, state)
}

fn close_overlay(ctx: &Context, state: &mut UiState, _: &Event) -> Outcome {
    overlay::close(ctx, state)
}

fn cancel_key(ctx: &Context, state: &mut UiState, event: &Event) -> Outcome {
    match event {
        Event::KeyDown { key } => overlay::on_key(ctx, state, key),
        _ => Outcome::none(),
    }
}

fn breakpoint(ctx: &Context, state: &mut UiState, event: &Event) -> Outcome {
    match event {
        Event::Resize { width } => overlay::on_resize(ctx, state, *width),
        _ => Outcome::none(),
    }
}

fn scroll_close(ctx: &Context, state: &mut UiState, _: &Event) -> Outcome {
    overlay::on_scroll(ctx, state)
}

fn run_query(ctx: &Context, state: &mut UiState, event: &Event) -> Outcome {
    match event {
        Event::Input { value, .. } => search::query(ctx, state, value),
        _ => Outcome::none(),
    }
}

fn open_result(ctx: &Context, state: &mut UiState, event: &Event) -> Outcome {
    match event.target() {
        Some(Target::SearchResult { section }) => search::navigate_to(ctx, state, section),
        _ => Outcome::none(),
    }
}

fn copy_code(ctx: &Context, state: &mut UiState, event: &Event) -> Outcome {
    match event.target() {
        Some(Target::CopyButton { index }) => clipboard::copy(ctx, state, *index),
        _ => Outcome::none(),
    }
}

fn filter_table(ctx: &Context, state: &mut UiState, event: &Event) -> Outcome {
    match event {
        Event::KeyUp {
            target: Target::TableInput { index },
            value,
        } => table::on_input_keyup(ctx, state, *index, value),
        _ => Outcome::none(),
    }
}

fn animate_fills(ctx: &Context, state: &mut UiState, _: &Event) -> Outcome {
    animation::on_visible(ctx, state)
}

fn smooth_scroll(ctx: &Context, _: &mut UiState, event: &Event) -> Outcome {
    match event.target() {
        Some(Target::Anchor { href }) => scroll::scroll_to_anchor(ctx, href),
        _ => Outcome::none(),
    }
}

fn filter_posts_by_tag(ctx: &Context, state: &mut UiState, event: &Event) -> Outcome {
    match event.target() {
        Some(Target::BlogTag { index }) => blog::on_tag_click(ctx, state, *index),
        _ => Outcome::none(),
    }
}

fn search_posts(ctx: &Context, state: &mut UiState, event: &Event) -> Outcome {
    match event {
        Event::Input { value, .. } => blog::search(ctx, state, value),
        _ => Outcome::none(),
    }
}

fn fire_timer(_: &Context, state: &mut UiState, event: &Event) -> Outcome {
    match event {
        Event::Timer {
            timer: Timer::RevertCopyLabel { button, generation },
        } => clipboard::revert(state, *button, *generation),
        Event::Timer {
            timer: Timer::RestoreFill { fill },
        } => animation::restore(state, *fill),
        // Debounced calls have no consumer on the page
        Event::Timer { timer } => Outcome::diagnostic(Diagnostic::StaleTimer {
            timer: timer.clone(),
        }),
        _ => Outcome::none(),
    }
}

impl DispatchTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a binding, replacing any earlier one with the same kind and name
    pub fn bind(
        &mut self,
        kind: EventKind,
        name: &'static str,
        matches: Predicate,
        handler: Handler,
    ) -> &mut Self {
        let binding = Binding {
            kind,
            name,
            matches,
            handler,
        };

        match self
            .bindings
            .iter_mut()
            .find(|existing| existing.kind == kind && existing.name == name)
        {
            Some(existing) => *existing = binding,
            None => self.bindings.push(binding),
        }

        self
    }

    /// Wire every listener the page has elements for
    pub fn for_page(page: &Page) -> Self {
        let mut table = Self::new();

        if !page.controls.is_empty() {
            table.bind(EventKind::Click, "nav-control", on_nav_control, activate_control);
        }

        if page.has_overlay() {
            table
                .bind(EventKind::Click, "nav-toggle", on_nav_toggle, toggle_overlay)
                .bind(EventKind::Click, "outside-overlay", outside_overlay, close_overlay)
                .bind(EventKind::KeyDown, "cancel-key", any, cancel_key)
                .bind(EventKind::Resize, "breakpoint", any, breakpoint)
                .bind(EventKind::Scroll, "scroll-close", any, scroll_close);
        }

        if page.has_search() {
            table
                .bind(EventKind::Input, "search", on_search_input, run_query)
                .bind(EventKind::Click, "search-result", on_search_result, open_result);
        }

        if !page.copy_buttons.is_empty() {
            table.bind(EventKind::Click, "copy", on_copy_button, copy_code);
        }

        if !page.table_inputs.is_empty() {
            table.bind(EventKind::KeyUp, "table-filter", on_table_input, filter_table);
        }

        if page.progress_bars > 0 {
            table.bind(EventKind::Intersect, "progress-bars", on_visible_bar, animate_fills);
        }

        table.bind(EventKind::Click, "smooth-scroll", on_anchor, smooth_scroll);

        if page.has_blog_grid {
            table.bind(EventKind::Click, "blog-tag", on_blog_tag, filter_posts_by_tag);
            if page.has_blog_search {
                table.bind(EventKind::Input, "blog-search", on_blog_search, search_posts);
            }
        }

        table.bind(EventKind::Timer, "timers", any, fire_timer);

        table
    }

    pub fn bindings(&self) -> impl Iterator<Item = (EventKind, &'static str)> + '_ {
        self.bindings.iter().map(|b| (b.kind, b.name))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Run every binding matching `event`, in registration order
    pub fn dispatch(&self, ctx: &Context, state: &mut UiState, event: &Event) -> Outcome {
        let kind = event.kind();
        let mut outcome = Outcome::none();

        for binding in self
            .bindings
            .iter()
            .filter(|b| b.kind == kind && (b.matches)(ctx.page, event))
        {
            outcome.extend((binding.handler)(ctx, state, event));
        }

        outcome
    }
}
