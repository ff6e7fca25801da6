//! Section router
//!
//! Owns the "exactly one active section" invariant. Activation fans out to every
//! navigation control that references the section, so duplicated desktop and mobile
//! menus stay consistent.

use crate::config::ProgressFormula;
use crate::overlay;
use crate::page::Section;
use crate::state::{Context, Diagnostic, Effect, Outcome, UiState};

/// Progress indicator width, in percent, for a section at `ordinal`.
///
/// `control` is the index of the navigation control that requested the activation and
/// only matters for [`ProgressFormula::LegacyHalfControls`].
pub fn progress_for(ctx: &Context, ordinal: usize, control: Option<usize>) -> f64 {
    let percent = match ctx.config.progress_formula {
        ProgressFormula::DistinctSections => {
            let total = match ctx.page.distinct_control_sections() {
                0 => ctx.page.sections.len(),
                distinct => distinct,
            };
            if total == 0 {
                return 0.0;
            }
            (ordinal + 1) as f64 / total as f64 * 100.0
        }
        ProgressFormula::LegacyHalfControls => {
            let half = ctx.page.controls.len() as f64 / 2.0;
            if half <= 0.0 {
                return 0.0;
            }
            (control.unwrap_or(ordinal) + 1) as f64 / half * 100.0
        }
    };

    percent.clamp(0.0, 100.0)
}

fn activatable<'a>(ctx: &Context<'a>, section_id: &str) -> Option<&'a Section> {
    if section_id.is_empty() {
        return None;
    }
    ctx.page.section(section_id)
}

/// Activate `section_id`. Unknown ids leave the state untouched.
pub fn activate(
    ctx: &Context,
    state: &mut UiState,
    section_id: &str,
    control: Option<usize>,
) -> Outcome {
    let Some(section) = activatable(ctx, section_id) else {
        return Outcome::diagnostic(Diagnostic::UnknownSection {
            section: section_id.to_string(),
        });
    };

    let mut outcome = Outcome::none();

    for other in ctx.page.sections.iter().filter(|s| !s.id.is_empty()) {
        outcome.push(Effect::SetSectionActive {
            section: other.id.clone(),
            active: false,
        });
    }
    for nav in &ctx.page.controls {
        outcome.push(Effect::SetControlActive {
            control: nav.index,
            active: false,
        });
    }
    state.active_controls.clear();

    for nav in ctx.page.controls.iter().filter(|c| c.section == section.id) {
        outcome.push(Effect::SetControlActive {
            control: nav.index,
            active: true,
        });
        state.active_controls.insert(nav.index);
    }

    outcome.push(Effect::SetSectionActive {
        section: section.id.clone(),
        active: true,
    });
    state.active_section = Some(section.id.clone());

    if ctx.page.has_breadcrumb {
        let label = ctx.config.label_for(&section.id).to_string();
        state.breadcrumb = Some(label.clone());
        outcome.push(Effect::SetBreadcrumb { label });
    }

    if ctx.page.has_progress {
        let control = control.or_else(|| {
            ctx.page
                .first_control_for(&section.id)
                .map(|nav| nav.index)
        });
        let percent = progress_for(ctx, section.ordinal, control);
        state.progress = percent;
        outcome.push(Effect::SetProgress { percent });
    }

    outcome.extend(overlay::close(ctx, state));
    outcome.push(Effect::ScrollToTop { smooth: true });

    outcome
}

/// Startup state: the first declared section is shown and the progress indicator is
/// preset, without breadcrumb, overlay or scroll side effects.
pub fn boot(ctx: &Context, state: &mut UiState) -> Outcome {
    let mut outcome = Outcome::none();

    if ctx.page.has_highlighter {
        outcome.push(Effect::HighlightAll);
    }

    state.fill_widths = ctx
        .page
        .progress_fills
        .iter()
        .enumerate()
        .map(|(index, fill)| (index, fill.width.clone()))
        .collect();

    let Some(first) = ctx.page.sections.iter().find(|s| !s.id.is_empty()) else {
        outcome.diagnostics.push(Diagnostic::MissingElement {
            element: ".section".to_string(),
        });
        return outcome;
    };

    // A repeated boot starts over from whatever a previous navigation left behind
    if let Some(previous) = state.active_section.take().filter(|id| *id != first.id) {
        outcome.push(Effect::SetSectionActive {
            section: previous,
            active: false,
        });
    }
    for control in std::mem::take(&mut state.active_controls) {
        if ctx.page.controls.get(control).is_some_and(|c| c.section != first.id) {
            outcome.push(Effect::SetControlActive {
                control,
                active: false,
            });
        }
    }
    state.breadcrumb = None;

    state.active_section = Some(first.id.clone());
    outcome.push(Effect::SetSectionActive {
        section: first.id.clone(),
        active: true,
    });
    for nav in ctx.page.controls.iter().filter(|c| c.section == first.id) {
        state.active_controls.insert(nav.index);
        outcome.push(Effect::SetControlActive {
            control: nav.index,
            active: true,
        });
    }

    if ctx.page.has_progress {
        let control = ctx.page.first_control_for(&first.id).map(|nav| nav.index);
        let percent = progress_for(ctx, first.ordinal, control);
        state.progress = percent;
        outcome.push(Effect::SetProgress { percent });
    }

    outcome
}
