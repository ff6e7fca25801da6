//! In-page anchor scrolling

use crate::state::{Context, Diagnostic, Effect, Outcome};

/// Element id referenced by an in-page `href`, if it names one
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Smoothly bring the element referenced by `href` into view
pub fn scroll_to_anchor(ctx: &Context, href: &str) -> Outcome {
    match anchor_target(href) {
        Some(id) if ctx.page.element_ids.contains(id) => {
            let mut outcome = Outcome::none();
            outcome.push(Effect::ScrollIntoView {
                target: id.to_string(),
            });
            outcome
        }
        _ => Outcome::diagnostic(Diagnostic::UnresolvedAnchor {
            href: href.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::fixtures::GUIDE_PAGE;
    use crate::page::parse_page;

    #[test]
    fn test_anchor_target() {
        assert_eq!(anchor_target("#gpu"), Some("gpu"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("/docs#gpu"), None);
    }

    #[test]
    fn test_scroll_to_existing_element() {
        let page = parse_page(GUIDE_PAGE);
        let config = SiteConfig::default();
        let ctx = Context::new(&page, &config);

        let outcome = scroll_to_anchor(&ctx, "#networking");
        assert_eq!(
            outcome.effects,
            vec![Effect::ScrollIntoView {
                target: "networking".to_string()
            }]
        );
    }

    #[test]
    fn test_missing_target_is_noop() {
        let page = parse_page(GUIDE_PAGE);
        let config = SiteConfig::default();
        let ctx = Context::new(&page, &config);

        assert!(scroll_to_anchor(&ctx, "#faq").effects.is_empty());
        assert!(scroll_to_anchor(&ctx, "#").effects.is_empty());
    }
}
