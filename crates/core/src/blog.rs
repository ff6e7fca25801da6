//! Blog index filters: tag links and the free-text blog search

use crate::page::BlogPost;
use crate::state::{Context, Diagnostic, Effect, Outcome, UiState};

/// Tag that shows every post
pub const ALL_TAG: &str = "all";

fn apply<F>(ctx: &Context, state: &mut UiState, visible: F) -> Outcome
where
    F: Fn(&BlogPost) -> bool,
{
    let mut outcome = Outcome::none();

    for (index, post) in ctx.page.blog_posts.iter().enumerate() {
        let visible = visible(post);
        if visible {
            state.hidden_posts.remove(&index);
        } else {
            state.hidden_posts.insert(index);
        }
        outcome.push(Effect::SetPostVisible {
            post: index,
            visible,
        });
    }

    outcome
}

/// Show only posts carrying `tag` (case-insensitive); `all` shows everything
pub fn filter_by_tag(ctx: &Context, state: &mut UiState, tag: &str) -> Outcome {
    let selected = tag.to_lowercase();
    apply(ctx, state, |post| {
        selected == ALL_TAG || post.tags.iter().any(|t| t.to_lowercase() == selected)
    })
}

/// Click on the `index`-th `.blog-tag` element
pub fn on_tag_click(ctx: &Context, state: &mut UiState, index: usize) -> Outcome {
    match ctx.page.blog_tags.get(index) {
        Some(tag) => filter_by_tag(ctx, state, tag),
        None => Outcome::diagnostic(Diagnostic::MissingElement {
            element: format!(".blog-tag #{index}"),
        }),
    }
}

/// Keep posts whose title or excerpt contains `term`
pub fn search(ctx: &Context, state: &mut UiState, term: &str) -> Outcome {
    let term = term.to_lowercase();
    apply(ctx, state, |post| {
        term.is_empty()
            || post.title.to_lowercase().contains(&term)
            || post.excerpt.to_lowercase().contains(&term)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::fixtures::BLOG_PAGE;
    use crate::page::parse_page;

    fn visible(state: &UiState, posts: usize) -> Vec<usize> {
        (0..posts).filter(|&p| state.is_post_visible(p)).collect()
    }

    #[test]
    fn test_tag_filter() {
        let page = parse_page(BLOG_PAGE);
        let config = SiteConfig::default();
        let ctx = Context::new(&page, &config);
        let mut state = UiState::default();

        filter_by_tag(&ctx, &mut state, "Security");
        assert_eq!(visible(&state, 3), vec![1, 2]);

        filter_by_tag(&ctx, &mut state, "gpu");
        assert_eq!(visible(&state, 3), vec![0]);
    }

    #[test]
    fn test_all_tag_shows_everything() {
        let page = parse_page(BLOG_PAGE);
        let config = SiteConfig::default();
        let ctx = Context::new(&page, &config);
        let mut state = UiState::default();
        filter_by_tag(&ctx, &mut state, "news");

        let outcome = on_tag_click(&ctx, &mut state, 0);

        assert_eq!(visible(&state, 3), vec![0, 1, 2]);
        assert_eq!(outcome.effects.len(), 3);
    }

    #[test]
    fn test_tag_inside_post_filters_too() {
        let page = parse_page(BLOG_PAGE);
        let config = SiteConfig::default();
        let ctx = Context::new(&page, &config);
        let mut state = UiState::default();

        // "Kubernetes" on the first post
        on_tag_click(&ctx, &mut state, 4);
        assert_eq!(visible(&state, 3), vec![0]);
    }

    #[test]
    fn test_search_title_and_excerpt() {
        let page = parse_page(BLOG_PAGE);
        let config = SiteConfig::default();
        let ctx = Context::new(&page, &config);
        let mut state = UiState::default();

        search(&ctx, &mut state, "TLS");
        assert_eq!(visible(&state, 3), vec![1]);

        search(&ctx, &mut state, "release");
        assert_eq!(visible(&state, 3), vec![2]);

        search(&ctx, &mut state, "");
        assert_eq!(visible(&state, 3), vec![0, 1, 2]);
    }

    #[test]
    fn test_unknown_tag_index() {
        let page = parse_page(BLOG_PAGE);
        let config = SiteConfig::default();
        let ctx = Context::new(&page, &config);
        let mut state = UiState::default();

        let outcome = on_tag_click(&ctx, &mut state, 99);
        assert!(outcome.effects.is_empty());
        assert!(state.hidden_posts.is_empty());
    }
}
