//! Scenario replay.
//!
//! A scenario is a page layout, optional settings and a script of input
//! events, frame ticks and lifecycle calls. Replaying it against a
//! [`ScriptedPage`] gives a deterministic outcome, which the
//! `rubberband-replay` binary prints and the snapshot tests pin down.

use crate::engine::SelectionEngine;
use crate::events::InputEvent;
use crate::host::{ItemId, Viewport};
use crate::page::{PageLayout, ScriptedPage};
use crate::settings::EngineSettings;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleStep {
    Init,
    Destroy,
}

/// One scripted step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Step {
    /// Deliver up to `frames` pending animation frames
    Frames { frames: usize },
    Lifecycle { lifecycle: LifecycleStep },
    Event(InputEvent),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub layout: PageLayout,
    #[serde(default)]
    pub settings: EngineSettings,
    /// Initial vertical scroll offset
    #[serde(default)]
    pub scroll_y: f32,
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// Observable state after a replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayOutcome {
    pub selected: Vec<ItemId>,
    /// Final vertical scroll, rounded to whole pixels
    pub scroll_y: i64,
    pub events_consumed: usize,
    pub frames_run: usize,
    pub dragging: bool,
    pub listeners: usize,
    pub pending_frames: usize,
}

impl Scenario {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// Run a scenario from a freshly initialized engine.
pub fn run_scenario(scenario: &Scenario) -> ReplayOutcome {
    let mut page = ScriptedPage::new(scenario.layout.clone());
    page.set_scroll(0.0, scenario.scroll_y);

    let mut engine = SelectionEngine::new(scenario.settings.clone());
    let container = page.container();
    engine.init_drag_selection(&mut page, container);

    let mut events_consumed = 0;
    let mut frames_run = 0;

    for step in &scenario.steps {
        match step {
            Step::Frames { frames } => {
                frames_run += page.run_frames(&mut engine, *frames);
            }
            Step::Lifecycle { lifecycle } => match lifecycle {
                LifecycleStep::Init => engine.init_drag_selection(&mut page, container),
                LifecycleStep::Destroy => engine.destroy_drag_selection(&mut page),
            },
            Step::Event(event) => {
                if page.dispatch(&mut engine, event) {
                    events_consumed += 1;
                }
                debug!(kind = ?event.kind(), selected = page.selection().len(), "Replayed event");
            }
        }
    }

    let outcome = ReplayOutcome {
        selected: page.selected_ids(),
        scroll_y: page.scroll_offset().y.round() as i64,
        events_consumed,
        frames_run,
        dragging: engine.is_dragging(),
        listeners: page.listener_count(),
        pending_frames: page.pending_frames(),
    };
    info!(
        selected = outcome.selected.len(),
        scroll_y = outcome.scroll_y,
        "Scenario replayed"
    );
    outcome
}
