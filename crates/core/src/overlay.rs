//! Mobile navigation overlay
//!
//! A single open/closed flag. Each close trigger reads and writes only that flag, so the
//! triggers are independent of each other and of the router.

use crate::state::{Context, Effect, Outcome, UiState};

/// Key that dismisses the overlay
pub const CANCEL_KEY: &str = "Escape";

fn set_open(state: &mut UiState, open: bool) -> Outcome {
    if state.overlay_open == open {
        return Outcome::none();
    }
    state.overlay_open = open;

    let mut outcome = Outcome::none();
    outcome.push(Effect::SetOverlayOpen { open });
    outcome
}

pub fn toggle(ctx: &Context, state: &mut UiState) -> Outcome {
    if !ctx.page.has_overlay() {
        return Outcome::none();
    }
    let open = !state.overlay_open;
    set_open(state, open)
}

/// Close the overlay if it is open
pub fn close(ctx: &Context, state: &mut UiState) -> Outcome {
    if !ctx.page.has_overlay() {
        return Outcome::none();
    }
    set_open(state, false)
}

pub fn on_key(ctx: &Context, state: &mut UiState, key: &str) -> Outcome {
    if key == CANCEL_KEY {
        close(ctx, state)
    } else {
        Outcome::none()
    }
}

pub fn on_resize(ctx: &Context, state: &mut UiState, width: u32) -> Outcome {
    if width > ctx.config.overlay_breakpoint {
        close(ctx, state)
    } else {
        Outcome::none()
    }
}

pub fn on_scroll(ctx: &Context, state: &mut UiState) -> Outcome {
    close(ctx, state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::fixtures::GUIDE_PAGE;
    use crate::page::{parse_page, Page};

    fn open_state() -> UiState {
        UiState {
            overlay_open: true,
            ..UiState::default()
        }
    }

    #[test]
    fn test_toggle_flips_state() {
        let page = parse_page(GUIDE_PAGE);
        let config = SiteConfig::default();
        let ctx = Context::new(&page, &config);
        let mut state = UiState::default();

        let outcome = toggle(&ctx, &mut state);
        assert!(state.overlay_open);
        assert_eq!(outcome.effects, vec![Effect::SetOverlayOpen { open: true }]);

        toggle(&ctx, &mut state);
        assert!(!state.overlay_open);
    }

    #[test]
    fn test_escape_closes() {
        let page = parse_page(GUIDE_PAGE);
        let config = SiteConfig::default();
        let ctx = Context::new(&page, &config);
        let mut state = open_state();

        assert!(on_key(&ctx, &mut state, "Enter").is_empty());
        assert!(state.overlay_open);

        let outcome = on_key(&ctx, &mut state, "Escape");
        assert!(!state.overlay_open);
        assert_eq!(outcome.effects, vec![Effect::SetOverlayOpen { open: false }]);
    }

    #[test]
    fn test_resize_above_breakpoint_closes() {
        let page = parse_page(GUIDE_PAGE);
        let config = SiteConfig::default();
        let ctx = Context::new(&page, &config);
        let mut state = open_state();

        on_resize(&ctx, &mut state, 768);
        assert!(state.overlay_open);

        on_resize(&ctx, &mut state, 769);
        assert!(!state.overlay_open);
    }

    #[test]
    fn test_scroll_closes() {
        let page = parse_page(GUIDE_PAGE);
        let config = SiteConfig::default();
        let ctx = Context::new(&page, &config);
        let mut state = open_state();

        on_scroll(&ctx, &mut state);
        assert!(!state.overlay_open);

        // Already closed: nothing to render
        assert!(on_scroll(&ctx, &mut state).is_empty());
    }

    #[test]
    fn test_without_overlay_elements_nothing_happens() {
        let page = Page::default();
        let config = SiteConfig::default();
        let ctx = Context::new(&page, &config);
        let mut state = UiState::default();

        assert!(toggle(&ctx, &mut state).is_empty());
        assert!(!state.overlay_open);
    }
}
