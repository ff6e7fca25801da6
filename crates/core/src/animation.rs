//! Progress fill animation
//!
//! When a `.progress-bar` scrolls into view every fill is reset to `0%` and restored to
//! its authored width after a short delay. A fill already between reset and restore is
//! skipped, so repeated visibility reports cannot restart it mid-flight.

use crate::state::{Context, Diagnostic, Effect, Outcome, Timer, UiState};

pub fn on_visible(ctx: &Context, state: &mut UiState) -> Outcome {
    let mut outcome = Outcome::none();

    for (fill, progress_fill) in ctx.page.progress_fills.iter().enumerate() {
        if !state.animating_fills.insert(fill) {
            continue;
        }

        state
            .fill_widths
            .entry(fill)
            .or_insert_with(|| progress_fill.width.clone());

        outcome.push(Effect::SetFillWidth {
            fill,
            width: "0%".to_string(),
        });
        outcome.push(Effect::Schedule {
            delay_ms: ctx.config.fill_restore_ms,
            timer: Timer::RestoreFill { fill },
        });
    }

    outcome
}

pub fn restore(state: &mut UiState, fill: usize) -> Outcome {
    if !state.animating_fills.remove(&fill) {
        return Outcome::diagnostic(Diagnostic::StaleTimer {
            timer: Timer::RestoreFill { fill },
        });
    }

    let mut outcome = Outcome::none();
    if let Some(width) = state.fill_widths.get(&fill) {
        outcome.push(Effect::SetFillWidth {
            fill,
            width: width.clone(),
        });
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::fixtures::GUIDE_PAGE;
    use crate::page::parse_page;

    #[test]
    fn test_visible_resets_every_fill() {
        let page = parse_page(GUIDE_PAGE);
        let config = SiteConfig::default();
        let ctx = Context::new(&page, &config);
        let mut state = UiState::default();

        let outcome = on_visible(&ctx, &mut state);

        assert_eq!(outcome.effects.len(), 4);
        assert_eq!(
            outcome.effects[0],
            Effect::SetFillWidth {
                fill: 0,
                width: "0%".to_string()
            }
        );
        assert_eq!(
            outcome.effects[1],
            Effect::Schedule {
                delay_ms: 500,
                timer: Timer::RestoreFill { fill: 0 }
            }
        );
        assert_eq!(state.animating_fills.len(), 2);
    }

    #[test]
    fn test_repeated_visibility_is_guarded() {
        let page = parse_page(GUIDE_PAGE);
        let config = SiteConfig::default();
        let ctx = Context::new(&page, &config);
        let mut state = UiState::default();

        on_visible(&ctx, &mut state);
        let again = on_visible(&ctx, &mut state);

        assert!(again.effects.is_empty());
    }

    #[test]
    fn test_restore_returns_authored_width() {
        let page = parse_page(GUIDE_PAGE);
        let config = SiteConfig::default();
        let ctx = Context::new(&page, &config);
        let mut state = UiState::default();
        on_visible(&ctx, &mut state);

        let outcome = restore(&mut state, 1);

        assert_eq!(
            outcome.effects,
            vec![Effect::SetFillWidth {
                fill: 1,
                width: "40%".to_string()
            }]
        );
        assert!(!state.animating_fills.contains(&1));

        // Fill 1 may animate again, fill 0 is still in flight
        let next = on_visible(&ctx, &mut state);
        assert_eq!(next.effects.len(), 2);
    }

    #[test]
    fn test_restore_without_animation_is_stale() {
        let mut state = UiState::default();
        let outcome = restore(&mut state, 0);
        assert!(outcome.effects.is_empty());
        assert_eq!(outcome.diagnostics.len(), 1);
    }
}
