//! Snapshot tests using the insta crate.
//!
//! Each test replays a JSON scenario against a scripted page and pins the
//! outcome. Only integer and boolean fields are captured, so the snapshots
//! do not depend on float formatting.
//!
//! To update snapshots after intentional changes:
//! ```sh
//! cargo insta test --accept
//! ```

use rubberband::replay::{Scenario, Step, run_scenario};

const LAYOUT: &str = r#"{
    "viewport": { "width": 1000, "height": 600 },
    "content": { "left": 0, "top": 0, "width": 1000, "height": 2000 },
    "heading": { "rect": { "left": 0, "top": 0, "width": 1000, "height": 60 } },
    "items": [
        { "id": 1, "rect": { "left": 100, "top": 100, "width": 100, "height": 100 } },
        { "id": 2, "rect": { "left": 300, "top": 100, "width": 100, "height": 100 } },
        { "id": 3, "rect": { "left": 100, "top": 300, "width": 100, "height": 100 } },
        { "id": 4, "rect": { "left": 300, "top": 300, "width": 100, "height": 100 } },
        { "id": 5, "rect": { "left": 100, "top": 1500, "width": 100, "height": 100 } }
    ]
}"#;

fn scenario(steps: &str) -> Scenario {
    let json = format!(r#"{{ "layout": {LAYOUT}, "steps": {steps} }}"#);
    Scenario::from_json(&json).unwrap()
}

#[test]
fn test_steps_parse_by_shape() {
    let scenario = scenario(
        r#"[
            { "type": "pointer_down", "position": { "x": 50, "y": 80 } },
            { "frames": 3 },
            { "lifecycle": "destroy" }
        ]"#,
    );
    assert!(matches!(scenario.steps[0], Step::Event(_)));
    assert!(matches!(scenario.steps[1], Step::Frames { frames: 3 }));
    assert!(matches!(scenario.steps[2], Step::Lifecycle { .. }));
    assert_eq!(scenario.scroll_y, 0.0);
}

#[test]
fn snapshot_drag_across_two_cards() {
    let outcome = run_scenario(&scenario(
        r#"[
            { "type": "pointer_down", "position": { "x": 50, "y": 80 } },
            { "type": "pointer_move", "position": { "x": 450, "y": 250 } },
            { "type": "pointer_up", "position": { "x": 450, "y": 250 } },
            { "type": "click", "position": { "x": 450, "y": 250 } }
        ]"#,
    ));
    insta::assert_json_snapshot!(outcome, @r#"
    {
      "selected": [
        1,
        2
      ],
      "scroll_y": 0,
      "events_consumed": 4,
      "frames_run": 0,
      "dragging": false,
      "listeners": 5,
      "pending_frames": 0
    }
    "#);
}

#[test]
fn snapshot_auto_scroll_extends_selection() {
    let outcome = run_scenario(&scenario(
        r#"[
            { "type": "pointer_down", "position": { "x": 50, "y": 80 } },
            { "type": "pointer_move", "position": { "x": 150, "y": 590 } },
            { "frames": 10 },
            { "type": "pointer_up", "position": { "x": 150, "y": 590 } }
        ]"#,
    ));
    insta::assert_json_snapshot!(outcome, @r#"
    {
      "selected": [
        1,
        3
      ],
      "scroll_y": 120,
      "events_consumed": 3,
      "frames_run": 10,
      "dragging": false,
      "listeners": 5,
      "pending_frames": 0
    }
    "#);
}

#[test]
fn snapshot_destroy_mid_drag() {
    let outcome = run_scenario(&scenario(
        r#"[
            { "type": "pointer_down", "position": { "x": 50, "y": 80 } },
            { "type": "pointer_move", "position": { "x": 150, "y": 590 } },
            { "frames": 3 },
            { "lifecycle": "destroy" },
            { "frames": 5 },
            { "type": "pointer_down", "position": { "x": 50, "y": 80 } }
        ]"#,
    ));
    insta::assert_json_snapshot!(outcome, @r#"
    {
      "selected": [
        1,
        3
      ],
      "scroll_y": 36,
      "events_consumed": 2,
      "frames_run": 3,
      "dragging": false,
      "listeners": 0,
      "pending_frames": 0
    }
    "#);
}
