use crate::prelude::{println, *};
use colored::Colorize;
use sitenav_core::state::{Effect, Timer, UiState};

pub fn output_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| eyre!("JSON serialization failed: {}", e))?;
    println!("{}", json);
    Ok(())
}

pub fn banner(title: &str) -> String {
    let mut result = String::new();
    result.push_str(&f!("\n{}\n", "=".repeat(80).bright_cyan()));
    result.push_str(&f!("{}\n", title.bright_cyan().bold()));
    result.push_str(&f!("{}\n", "=".repeat(80).bright_cyan()));
    result
}

fn visibility(visible: bool) -> &'static str {
    if visible {
        "show"
    } else {
        "hide"
    }
}

pub fn describe_timer(timer: &Timer) -> String {
    match timer {
        Timer::RevertCopyLabel { button, generation } => {
            f!("revert copy button {button} (generation {generation})")
        }
        Timer::RestoreFill { fill } => f!("restore progress fill {fill}"),
        Timer::Debounce { key, generation } => f!("debounced {key} (generation {generation})"),
    }
}

/// One-line, uncolored description of a render effect
pub fn describe_effect(effect: &Effect) -> String {
    match effect {
        Effect::SetSectionActive { section, active } => {
            let verb = if *active { "activate" } else { "deactivate" };
            f!("{verb} section #{section}")
        }
        Effect::SetControlActive { control, active } => {
            let verb = if *active { "activate" } else { "deactivate" };
            f!("{verb} navigation control {control}")
        }
        Effect::SetBreadcrumb { label } => f!("breadcrumb \"{label}\""),
        Effect::SetProgress { percent } => f!("progress {percent:.1}%"),
        Effect::SetOverlayOpen { open } => {
            if *open {
                "open navigation overlay".to_string()
            } else {
                "close navigation overlay".to_string()
            }
        }
        Effect::ScrollToTop { smooth } => {
            if *smooth {
                "scroll to top (smooth)".to_string()
            } else {
                "scroll to top".to_string()
            }
        }
        Effect::ScrollIntoView { target } => f!("scroll #{target} into view"),
        Effect::ShowSearchResults { results, .. } => {
            f!("show {} search result(s)", results.len())
        }
        Effect::HideSearchResults => "hide search results".to_string(),
        Effect::ClearSearchInput => "clear search input".to_string(),
        Effect::CopyToClipboard { text } => {
            f!("copy {} character(s) to clipboard", text.chars().count())
        }
        Effect::SetCopyLabel { button, label } => f!("copy button {button} label \"{label}\""),
        Effect::SetRowVisible {
            table,
            row,
            visible,
        } => f!("{} row {row} of table {table}", visibility(*visible)),
        Effect::SetPostVisible { post, visible } => {
            f!("{} blog post {post}", visibility(*visible))
        }
        Effect::SetFillWidth { fill, width } => f!("progress fill {fill} width {width}"),
        Effect::ReplaceContent { element, .. } => f!("replace content of #{element}"),
        Effect::HighlightAll => "highlight code blocks".to_string(),
        Effect::Schedule { delay_ms, timer } => {
            f!("in {delay_ms} ms: {}", describe_timer(timer))
        }
    }
}

pub fn format_effects(effects: &[Effect]) -> String {
    let mut result = String::new();

    if effects.is_empty() {
        result.push_str(&f!("  {}\n", "(no effects)".bright_black()));
        return result;
    }

    for effect in effects {
        let line = describe_effect(effect);
        let line = match effect {
            Effect::Schedule { .. } => line.bright_magenta(),
            Effect::SetSectionActive { active: true, .. } => line.green().bold(),
            Effect::SetSectionActive { active: false, .. }
            | Effect::SetControlActive { active: false, .. } => line.bright_black(),
            _ => line.white(),
        };
        result.push_str(&f!("  {} {}\n", "-".bright_cyan(), line));
    }

    result
}

pub fn format_state(state: &UiState) -> String {
    let mut result = String::new();
    let none = || "(none)".to_string();

    result.push_str(&f!(
        "{}: {}\n",
        "Active section".green(),
        state.active_section.clone().unwrap_or_else(none).bright_white()
    ));
    result.push_str(&f!(
        "{}: {}\n",
        "Breadcrumb".green(),
        state.breadcrumb.clone().unwrap_or_else(none).bright_white()
    ));
    result.push_str(&f!(
        "{}: {}\n",
        "Progress".green(),
        f!("{:.1}%", state.progress).bright_yellow()
    ));
    result.push_str(&f!(
        "{}: {}\n",
        "Active controls".green(),
        state
            .active_controls
            .iter()
            .map(|control| control.to_string())
            .collect::<Vec<_>>()
            .join(", ")
            .bright_white()
    ));
    result.push_str(&f!(
        "{}: {}\n",
        "Overlay".green(),
        if state.overlay_open { "open" } else { "closed" }.bright_white()
    ));

    result
}
