//! Snapshot tests for per-frame render geometry.
//!
//! Run with:
//!   cargo test --test render_geometry -- --nocapture
//! Review snapshot changes with `cargo insta review`.

mod fixtures;

use editfield::text::CapacityPolicy;
use editfield::{Field, HitTester, MonospaceMetrics, Point, Rect, RenderGeometry};
use fixtures::init_logging;
use serde::Serialize;
use tracing::{Level, debug, span};

#[derive(Serialize)]
struct RunSnapshot {
    color: String,
    position: String,
    text: String,
}

#[derive(Serialize)]
struct ScrollbarSnapshot {
    thumb: String,
    track: String,
}

#[derive(Serialize)]
struct GeometrySnapshot {
    bounds: String,
    clip: String,
    cursor: Option<String>,
    scrollbar: Option<ScrollbarSnapshot>,
    selection: Vec<String>,
    text_runs: Vec<RunSnapshot>,
}

fn rect(r: Rect) -> String {
    format!(
        "{},{},{},{}",
        r.x.round(),
        r.y.round(),
        r.width.round(),
        r.height.round()
    )
}

fn point(p: Point) -> String {
    format!("{},{}", p.x.round(), p.y.round())
}

fn snapshot(geometry: &RenderGeometry) -> GeometrySnapshot {
    GeometrySnapshot {
        bounds: rect(geometry.bounds),
        clip: rect(geometry.clip),
        cursor: geometry.cursor_rect.map(rect),
        scrollbar: geometry.scrollbar.map(|bar| ScrollbarSnapshot {
            thumb: rect(bar.thumb),
            track: rect(bar.track),
        }),
        selection: geometry.selection_rects.iter().copied().map(rect).collect(),
        text_runs: geometry
            .text_runs
            .iter()
            .map(|run| RunSnapshot {
                color: run.color.to_string(),
                position: point(run.position),
                text: run.text.clone(),
            })
            .collect(),
    }
}

/// Three 22px lines in a 50px content area.
fn lyrics() -> Field {
    let mut field = Field::multi_line(
        Rect::new(10.0, 10.0, 200.0, 60.0),
        CapacityPolicy::growable(32).unwrap(),
    );
    field.focus();
    field.set_text("ab\ncd\nef").unwrap();
    field
}

#[test]
fn multi_line_selection_geometry() {
    init_logging();
    let span = span!(Level::INFO, "multi_line_selection_geometry");
    let _enter = span.enter();

    let metrics = MonospaceMetrics::default();
    let mut field = lyrics();
    field.on_select_all();
    let geometry = field.render_geometry(&metrics);
    debug!(?geometry, "render geometry");

    insta::assert_json_snapshot!(snapshot(&geometry), @r###"
    {
      "bounds": "10,10,200,60",
      "clip": "15,15,190,50",
      "cursor": "35,59,2,22",
      "scrollbar": {
        "thumb": "204,15,6,38",
        "track": "204,15,6,50"
      },
      "selection": [
        "15,15,20,22",
        "15,37,20,22",
        "15,59,20,6"
      ],
      "text_runs": [
        {
          "color": "#E6E6EA",
          "position": "15,15",
          "text": "ab"
        },
        {
          "color": "#E6E6EA",
          "position": "15,37",
          "text": "cd"
        },
        {
          "color": "#E6E6EA",
          "position": "15,59",
          "text": "ef"
        }
      ]
    }
    "###);
}

#[test]
fn scrolled_geometry_moves_runs_and_thumb() {
    init_logging();
    let metrics = MonospaceMetrics::default();
    let mut field = lyrics();
    // 66px of content in 50px: one notch clamps at the 16px maximum.
    field.on_wheel(-1.0);
    assert_eq!(field.scroll().vertical(), 16.0);

    let geometry = field.render_geometry(&metrics);
    debug!(?geometry, "scrolled geometry");
    let tops: Vec<f32> = geometry.text_runs.iter().map(|run| run.position.y).collect();
    assert_eq!(tops, vec![-1.0, 21.0, 43.0]);

    let bar = geometry.scrollbar.unwrap();
    assert!((bar.thumb.bottom() - bar.track.bottom()).abs() < 1e-3);

    // Runs scrolled above the clip are still emitted; the host clips them.
    let value = serde_json::to_value(snapshot(&geometry)).unwrap();
    assert_eq!(value["clip"], "15,15,190,50");
    assert_eq!(value["text_runs"][0]["text"], "ab");
    assert_eq!(value["scrollbar"]["track"], "204,15,6,50");

    // The caret follows the scroll offset.
    assert_eq!(geometry.cursor_rect.map(|r| r.y), Some(43.0));
    let hit = HitTester::new(&field, &metrics);
    assert_eq!(hit.offset_at_point(Point::new(16.0, 44.0)), 6);
}

#[test]
fn single_line_overflow_shifts_run_left() {
    let metrics = MonospaceMetrics::default();
    let mut field = Field::single_line(
        Rect::new(0.0, 0.0, 110.0, 30.0),
        CapacityPolicy::fixed(63).unwrap(),
    );
    field.focus();
    field.on_paste("The quick brown fox").unwrap();
    field.sync_scroll(&metrics);

    // 190px of text in a 100px content area.
    let geometry = field.render_geometry(&metrics);
    assert_eq!(field.scroll().horizontal(), 90.0);
    assert_eq!(geometry.text_runs[0].position, Point::new(5.0 - 90.0, 5.0));
    // Cursor sits at the right edge of the content.
    assert_eq!(geometry.cursor_rect.map(|r| r.x), Some(105.0));
    assert_eq!(geometry.scrollbar, None);
}

#[test]
fn unfocused_placeholder_geometry() {
    let metrics = MonospaceMetrics::default();
    let field = Field::single_line(
        Rect::new(0.0, 0.0, 200.0, 30.0),
        CapacityPolicy::fixed(3).unwrap(),
    )
    .with_placeholder("120");
    let geometry = field.render_geometry(&metrics);

    insta::assert_json_snapshot!(snapshot(&geometry), @r###"
    {
      "bounds": "0,0,200,30",
      "clip": "5,5,190,20",
      "cursor": null,
      "scrollbar": null,
      "selection": [],
      "text_runs": [
        {
          "color": "#6C6C78",
          "position": "5,5",
          "text": "120"
        }
      ]
    }
    "###);
}
