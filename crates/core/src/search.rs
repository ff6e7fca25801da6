//! Content search index
//!
//! Substring search over the rendered text of every section. Matching is done on
//! case-folded text and results come back in section declaration order, without any
//! ranking.

use html_escape::{encode_double_quoted_attribute, encode_text};
use regex::RegexBuilder;
use serde::Serialize;

use crate::router;
use crate::state::{Context, Diagnostic, Effect, Outcome, UiState};

/// Placeholder entry rendered when nothing matches
pub const NO_RESULTS: &str = "No results found";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub title: String,
    pub section: String,
    /// Case-folded text around the first match
    pub excerpt: String,
    /// `excerpt` as HTML with every match wrapped in `<mark>`
    pub highlighted: String,
}

/// Character index of the first occurrence of `needle` in `haystack`
pub fn find_char_index(haystack: &str, needle: &str) -> Option<usize> {
    haystack
        .find(needle)
        .map(|byte_index| haystack[..byte_index].chars().count())
}

/// Characters from `before` ahead of `match_start` up to `after` past it, clamped to the
/// bounds of `text`.
pub fn excerpt(text: &str, match_start: usize, before: usize, after: usize) -> String {
    let total = text.chars().count();
    let start = match_start.saturating_sub(before).min(total);
    let end = match_start.saturating_add(after).min(total);

    text.chars().skip(start).take(end.saturating_sub(start)).collect()
}

/// Escape `text` for HTML and wrap every case-insensitive occurrence of `term` in `<mark>`
pub fn highlight(text: &str, term: &str) -> String {
    let pattern = match RegexBuilder::new(&regex::escape(term))
        .case_insensitive(true)
        .build()
    {
        Ok(pattern) if !term.is_empty() => pattern,
        _ => return encode_text(text).into_owned(),
    };

    let mut html = String::with_capacity(text.len() + 16);
    let mut last = 0;
    for found in pattern.find_iter(text) {
        html.push_str(&encode_text(&text[last..found.start()]));
        html.push_str("<mark>");
        html.push_str(&encode_text(found.as_str()));
        html.push_str("</mark>");
        last = found.end();
    }
    html.push_str(&encode_text(&text[last..]));

    html
}

/// Run `term` (already case-folded) against every section
pub fn search(ctx: &Context, term: &str) -> Vec<SearchResult> {
    ctx.page
        .sections
        .iter()
        .filter(|section| !section.id.is_empty())
        .filter_map(|section| {
            let content = section.text.to_lowercase();
            let position = find_char_index(&content, term)?;
            let excerpt = excerpt(
                &content,
                position,
                ctx.config.excerpt_before,
                ctx.config.excerpt_after,
            );

            Some(SearchResult {
                title: section.title.clone().unwrap_or_else(|| section.id.clone()),
                section: section.id.clone(),
                highlighted: highlight(&excerpt, term),
                excerpt,
            })
        })
        .collect()
}

/// Markup for the result surface
pub fn render_results(results: &[SearchResult]) -> String {
    if results.is_empty() {
        return format!(r#"<div class="search-result">{NO_RESULTS}</div>"#);
    }

    results
        .iter()
        .map(|result| {
            format!(
                r#"<div class="search-result" data-section="{}"><strong>{}</strong><p>{}</p></div>"#,
                encode_double_quoted_attribute(&result.section),
                encode_text(&result.title),
                result.highlighted
            )
        })
        .collect()
}

/// React to the search input changing to `raw`
pub fn query(ctx: &Context, state: &mut UiState, raw: &str) -> Outcome {
    if !ctx.page.has_search() {
        return Outcome::diagnostic(Diagnostic::MissingElement {
            element: "searchInput".to_string(),
        });
    }

    let term = raw.to_lowercase();
    state.query = term.clone();

    let mut outcome = Outcome::none();

    if term.chars().count() < ctx.config.min_query_len {
        state.results = None;
        outcome.push(Effect::HideSearchResults);
        return outcome;
    }

    let results = search(ctx, &term);
    let html = render_results(&results);
    state.results = Some(results.clone());
    outcome.push(Effect::ShowSearchResults { results, html });

    outcome
}

/// Jump to a section from a search result, then dismiss the search surface
pub fn navigate_to(ctx: &Context, state: &mut UiState, section_id: &str) -> Outcome {
    let mut outcome = router::activate(ctx, state, section_id, None);
    // Unknown section: activation was a no-op, keep the search surface as is
    if outcome.effects.is_empty() {
        return outcome;
    }

    state.results = None;
    state.query.clear();
    if ctx.page.has_search_results {
        outcome.push(Effect::HideSearchResults);
    }
    if ctx.page.has_search_input {
        outcome.push(Effect::ClearSearchInput);
    }

    outcome
}
