//! Tests for the headless one-shot preview.

use hover_tooltip::preview::{preview, to_json, PreviewRequest};
use hover_tooltip::render::FixedAdvanceMeasure;
use hover_tooltip::{TooltipConfig, Vec2, Vec3};

fn request(body: &str, title: Option<&str>, target: Vec3) -> PreviewRequest {
    PreviewRequest {
        target,
        body: body.to_string(),
        title: title.map(str::to_string),
        canvas: Vec2::new(1024.0, 768.0),
    }
}

#[test]
fn test_preview_json_with_default_config() {
    let state = preview(
        &TooltipConfig::default(),
        Box::new(FixedAdvanceMeasure::default()),
        &request("Hello", Some("Greeting"), Vec3::new(10.0, 20.0, 0.0)),
    )
    .unwrap();

    let json = to_json(&state).unwrap();
    insta::assert_snapshot!(json, @r#"
    {
      "visible": true,
      "body_text": "Hello",
      "title_text": "Greeting",
      "title_visible": true,
      "position": {
        "x": 9.0,
        "y": 21.0,
        "z": 0.0
      },
      "anchored_position": {
        "x": 9.0,
        "y": 21.0
      },
      "size": {
        "x": 86.0,
        "y": 67.0
      }
    }
    "#);
}

#[test]
fn test_preview_clamps_against_canvas() {
    let state = preview(
        &TooltipConfig::default(),
        Box::new(FixedAdvanceMeasure::default()),
        &request("Hello", None, Vec3::new(1020.0, 760.0, 0.0)),
    )
    .unwrap();

    // 35 + 30 wide, 17 + 30 tall at the default 14pt body.
    assert_eq!(state.size, Vec2::new(65.0, 47.0));
    assert_eq!(state.anchored_position, Vec2::new(959.0, 721.0));
}
