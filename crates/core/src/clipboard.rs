//! Copy-to-clipboard buttons on code blocks

use crate::state::{Context, Diagnostic, Effect, Outcome, Timer, UiState};

pub const COPY_LABEL: &str = "Copy";
pub const COPIED_LABEL: &str = "Copied!";

/// Copy the code block behind `button` and flip its label until the revert timer fires
pub fn copy(ctx: &Context, state: &mut UiState, button: usize) -> Outcome {
    let Some(block) = ctx
        .page
        .copy_buttons
        .get(button)
        .and_then(|b| b.block)
        .and_then(|index| ctx.page.code_blocks.get(index))
    else {
        return Outcome::diagnostic(Diagnostic::MissingElement {
            element: "pre code".to_string(),
        });
    };

    let generation = state.copy_generations.entry(button).or_insert(0);
    *generation += 1;
    let generation = *generation;
    state.copy_labels.insert(button, COPIED_LABEL.to_string());

    let mut outcome = Outcome::none();
    outcome.push(Effect::CopyToClipboard {
        text: block.text.clone(),
    });
    outcome.push(Effect::SetCopyLabel {
        button,
        label: COPIED_LABEL.to_string(),
    });
    outcome.push(Effect::Schedule {
        delay_ms: ctx.config.copy_revert_ms,
        timer: Timer::RevertCopyLabel { button, generation },
    });

    outcome
}

/// Revert the label, unless a later click superseded this timer
pub fn revert(state: &mut UiState, button: usize, generation: u64) -> Outcome {
    if state.copy_generations.get(&button) != Some(&generation) {
        return Outcome::diagnostic(Diagnostic::StaleTimer {
            timer: Timer::RevertCopyLabel { button, generation },
        });
    }

    state.copy_labels.insert(button, COPY_LABEL.to_string());

    let mut outcome = Outcome::none();
    outcome.push(Effect::SetCopyLabel {
        button,
        label: COPY_LABEL.to_string(),
    });
    outcome
}
