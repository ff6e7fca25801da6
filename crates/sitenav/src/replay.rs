use crate::prelude::{print, println, *};
use crate::render::{banner, describe_timer, format_effects, format_state, output_json};
use colored::Colorize;
use serde::{Deserialize, Serialize};
use sitenav_core::controller::Controller;
use sitenav_core::dispatch::Event;
use sitenav_core::state::{Effect, UiState};
use sitenav_core::timeline::Timeline;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct ReplayOptions {
    /// HTML page to load
    #[clap(env = "SITENAV_PAGE")]
    pub file: PathBuf,

    /// Event script: one `{"at_ms": .., "event": {..}}` object per line
    pub script: PathBuf,

    /// Wait for real time to pass between steps
    #[arg(long)]
    pub realtime: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// One line of an event script
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayStep {
    #[serde(default)]
    pub at_ms: u64,
    pub event: Event,
}

#[derive(Debug, Serialize)]
pub struct Frame {
    pub at_ms: u64,
    /// `None` for the startup frame
    pub event: Option<Event>,
    pub effects: Vec<Effect>,
}

#[derive(Debug, Serialize)]
pub struct ReplayOutput {
    pub frames: Vec<Frame>,
    pub state: UiState,
}

pub async fn run(options: ReplayOptions, global: crate::Global) -> Result<()> {
    let script = std::fs::read_to_string(&options.script)
        .with_context(|| f!("Failed to read script {}", options.script.display()))?;
    let steps = parse_script(&script)?;
    log::info!("Replaying {} step(s)", steps.len());

    let controller = crate::site::controller(&options.file, &global)?;
    let output = replay_data(controller, steps, options.realtime).await;

    if options.json {
        output_json(&output)?;
    } else {
        output_formatted(&output);
    }

    Ok(())
}

/// Parse a JSON-lines script. Blank lines and lines starting with `#` are skipped.
pub fn parse_script(script: &str) -> Result<Vec<ReplayStep>> {
    let mut steps = Vec::new();

    for (number, line) in script.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let step: ReplayStep = serde_json::from_str(line).map_err(|e| Error::Script {
            line: number + 1,
            message: e.to_string(),
        })?;
        steps.push(step);
    }

    // Stable: steps sharing a timestamp keep their script order
    steps.sort_by_key(|step| step.at_ms);

    Ok(steps)
}

struct Replay {
    controller: Controller,
    timeline: Timeline,
    frames: Vec<Frame>,
    realtime: bool,
    /// Virtual time already waited for in realtime mode
    waited_ms: u64,
}

impl Replay {
    async fn wait_until(&mut self, at_ms: u64) {
        if self.realtime && at_ms > self.waited_ms {
            tokio::time::sleep(Duration::from_millis(at_ms - self.waited_ms)).await;
        }
        self.waited_ms = self.waited_ms.max(at_ms);
    }

    fn record(&mut self, event: Option<Event>, effects: Vec<Effect>) {
        for effect in &effects {
            if let Effect::Schedule { delay_ms, timer } = effect {
                self.timeline.schedule(*delay_ms, timer.clone());
            }
        }

        self.frames.push(Frame {
            at_ms: self.timeline.now_ms(),
            event,
            effects,
        });
    }

    /// Fire every timer due at or before `at_ms`, including timers they schedule
    async fn fire_until(&mut self, at_ms: u64) {
        while let Some(timer) = self.timeline.pop_due(at_ms) {
            let due = self.timeline.now_ms();
            self.wait_until(due).await;
            log::debug!("Timer fired: {}", describe_timer(&timer));

            let event = Event::Timer { timer };
            let effects = self.controller.dispatch(&event);
            self.record(Some(event), effects);
        }
        self.timeline.advance_to(at_ms);
    }

    async fn step(&mut self, step: ReplayStep) {
        self.fire_until(step.at_ms).await;
        self.wait_until(step.at_ms).await;

        let effects = self.controller.dispatch(&step.event);
        self.record(Some(step.event), effects);
    }

    async fn drain(&mut self) {
        while let Some(due) = self.timeline.next_due() {
            self.fire_until(due).await;
        }
    }
}

/// Boot the page, then run every step and every timer over a virtual clock
pub async fn replay_data(
    mut controller: Controller,
    steps: Vec<ReplayStep>,
    realtime: bool,
) -> ReplayOutput {
    let boot = controller.boot();

    let mut replay = Replay {
        controller,
        timeline: Timeline::new(),
        frames: Vec::new(),
        realtime,
        waited_ms: 0,
    };
    replay.record(None, boot);

    for step in steps {
        replay.step(step).await;
    }
    replay.drain().await;

    ReplayOutput {
        state: replay.controller.state().clone(),
        frames: replay.frames,
    }
}

fn describe_event(event: Option<&Event>) -> String {
    match event {
        None => "boot".to_string(),
        Some(Event::Timer { timer }) => f!("timer: {}", describe_timer(timer)),
        Some(event) => serde_json::to_string(event).unwrap_or_else(|_| f!("{event:?}")),
    }
}

fn output_formatted(output: &ReplayOutput) {
    println!("{}", banner(&f!("REPLAY ({} frames)", output.frames.len())));

    for frame in &output.frames {
        println!(
            "\n{} {}",
            f!("[{:>6} ms]", frame.at_ms).yellow().bold(),
            describe_event(frame.event.as_ref()).white().bold()
        );
        print!("{}", format_effects(&frame.effects));
    }

    println!("\n{}", "Final state".bright_yellow().bold());
    print!("{}", format_state(&output.state));
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitenav_core::config::SiteConfig;
    use sitenav_core::dispatch::Target;
    use sitenav_core::page::parse_page;
    use sitenav_core::state::Timer;

    const PAGE: &str = r#"
        <a class="nav-item" data-section="overview">Overview</a>
        <a class="nav-item" data-section="setup">Setup</a>
        <div class="section" id="overview"><h1>Overview</h1></div>
        <div class="section" id="setup">
          <div class="code-container">
            <button class="copy-btn">Copy</button>
            <pre><code>make install</code></pre>
          </div>
        </div>
    "#;

    fn controller() -> Controller {
        Controller::new(parse_page(PAGE), SiteConfig::default())
    }

    #[test]
    fn test_parse_script() {
        let script = r#"
# open the setup section
{"at_ms": 100, "event": {"type": "click", "target": {"kind": "nav_control", "index": 1}}}

{"event": {"type": "scroll"}}
"#;

        let steps = parse_script(script).unwrap();

        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].event, Event::Scroll);
        assert_eq!(steps[1].at_ms, 100);
    }

    #[test]
    fn test_parse_script_reports_line() {
        let err = parse_script("{\"event\": {\"type\": \"scroll\"}}\n{not json}").unwrap_err();
        assert!(err.to_string().starts_with("Invalid replay script at line 2"));
    }

    #[tokio::test]
    async fn test_copy_label_reverts_once() {
        let copy = |at_ms| ReplayStep {
            at_ms,
            event: Event::Click {
                target: Target::CopyButton { index: 0 },
            },
        };

        let output = replay_data(controller(), vec![copy(0), copy(1_000)], false).await;

        let timers: Vec<_> = output
            .frames
            .iter()
            .filter_map(|frame| match &frame.event {
                Some(Event::Timer { timer }) => {
                    Some((frame.at_ms, timer.clone(), frame.effects.len()))
                }
                _ => None,
            })
            .collect();

        assert_eq!(
            timers,
            vec![
                (
                    2_000,
                    Timer::RevertCopyLabel {
                        button: 0,
                        generation: 1
                    },
                    0
                ),
                (
                    3_000,
                    Timer::RevertCopyLabel {
                        button: 0,
                        generation: 2
                    },
                    1
                ),
            ]
        );
        assert_eq!(output.state.copy_labels.get(&0).map(String::as_str), Some("Copy"));
    }

    #[tokio::test]
    async fn test_steps_run_in_order() {
        let steps = vec![ReplayStep {
            at_ms: 50,
            event: Event::Click {
                target: Target::NavControl { index: 1 },
            },
        }];

        let output = replay_data(controller(), steps, false).await;

        assert_eq!(output.frames.len(), 2);
        assert!(output.frames[0].event.is_none());
        assert_eq!(output.frames[1].at_ms, 50);
        assert_eq!(output.state.active_section.as_deref(), Some("setup"));
    }
}
