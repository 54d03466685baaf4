use std::{sync::Arc, time::Duration};

use clap::Parser;
use hidsynth::{
    MouseAction, MouseButton, Point, Posted, RecordingPoster, Stroke, Synth, Synthetic, Timing,
};
use hidtools::{
    MouseClick, MouseDrag, MouseMove, MousePosition, MouseScroll, SendKey, Tool, TypeText,
    execute, parse_exit_code,
};
use mac_keycode::Key;

/// Parse `args` as tool `T` and run it against a recorder whose cursor starts
/// at `cursor`.
fn run_tool<T: Tool>(cursor: Point, args: &[&str]) -> (Arc<RecordingPoster>, u8) {
    let tool = T::try_parse_from(args).expect("parse");
    let poster = Arc::new(RecordingPoster::at(cursor));
    let synth = Synth::with_poster(poster.clone()).with_timing(Timing::instant());
    let code = execute(&tool, &synth);
    (poster, code)
}

fn parse_failure<T: Tool>(args: &[&str]) -> u8 {
    let err = T::try_parse_from(args).expect_err("should not parse");
    parse_exit_code(&err)
}

#[test]
fn mouse_move_is_relative_and_accepts_negatives() {
    let (poster, code) = run_tool::<MouseMove>(Point::new(500.0, 400.0), &["mouse-move", "-20", "15"]);
    assert_eq!(code, 0);
    assert_eq!(poster.cursor(), Point::new(480.0, 415.0));
}

#[test]
fn mouse_move_requires_two_integers() {
    assert_eq!(parse_failure::<MouseMove>(&["mouse-move", "10"]), 1);
    assert_eq!(parse_failure::<MouseMove>(&["mouse-move", "1.5", "2"]), 1);
    assert_eq!(parse_failure::<MouseMove>(&["mouse-move", "1", "2", "3"]), 1);
}

#[test]
fn leading_hyphens_mix_with_flags() {
    let tool = MouseMove::try_parse_from(["mouse-move", "--debug", "-5", "10"]).expect("parse");
    assert_eq!((tool.dx, tool.dy), (-5, 10));

    let tool = TypeText::try_parse_from(["type-text", "-hello"]).expect("parse");
    assert_eq!(tool.text(), "-hello");
}

#[test]
fn mouse_position_is_absolute() {
    let (poster, code) =
        run_tool::<MousePosition>(Point::new(1.0, 1.0), &["mouse-position", "1024", "768"]);
    assert_eq!(code, 0);
    assert_eq!(poster.calls()[0], Posted::Warp(Point::new(1024.0, 768.0)));
}

#[test]
fn mouse_click_defaults_to_left() {
    let at = Point::new(3.0, 4.0);
    let (poster, code) = run_tool::<MouseClick>(at, &["mouse-click"]);
    assert_eq!(code, 0);
    assert_eq!(
        poster.events(),
        vec![
            Synthetic::Mouse {
                action: MouseAction::Down,
                button: MouseButton::Left,
                at,
            },
            Synthetic::Mouse {
                action: MouseAction::Up,
                button: MouseButton::Left,
                at,
            },
        ]
    );
}

#[test]
fn mouse_click_right_and_unknown() {
    let (poster, _) = run_tool::<MouseClick>(Point::default(), &["mouse-click", "Right"]);
    assert!(poster.events().iter().all(|e| matches!(
        e,
        Synthetic::Mouse {
            button: MouseButton::Right,
            ..
        }
    )));
    assert_eq!(parse_failure::<MouseClick>(&["mouse-click", "thumb"]), 1);
}

#[test]
fn click_hold_comes_from_flags() {
    let tool = MouseClick::try_parse_from(["mouse-click", "--click-hold-ms", "120"]).expect("parse");
    assert_eq!(
        tool.common.timing.timing().click_hold,
        Duration::from_millis(120)
    );
    let poster = Arc::new(RecordingPoster::default());
    let synth = Synth::with_poster(poster.clone()).with_timing(tool.common.timing.timing());
    assert_eq!(execute(&tool, &synth), 0);
    let Posted::Sequence { gap, .. } = &poster.calls()[0] else {
        panic!("expected a sequence");
    };
    assert_eq!(*gap, Duration::from_millis(120));
}

#[test]
fn type_text_joins_arguments_with_spaces() {
    let tool = TypeText::try_parse_from(["type-text", "hello", "-world", "Việt"]).expect("parse");
    assert_eq!(tool.text(), "hello -world Việt");

    let (poster, code) = run_tool::<TypeText>(Point::default(), &["type-text", "ok", "go"]);
    assert_eq!(code, 0);
    let downs: Vec<Stroke> = poster
        .events()
        .into_iter()
        .filter_map(|e| match e {
            Synthetic::Key { stroke, down: true } => Some(stroke),
            _ => None,
        })
        .collect();
    assert_eq!(
        downs,
        vec![
            Stroke::typed(Key::O, 0, 'o'),
            Stroke::typed(Key::K, 0, 'k'),
            Stroke::typed(Key::Space, 0, ' '),
            Stroke::typed(Key::G, 0, 'g'),
            Stroke::typed(Key::O, 0, 'o'),
        ]
    );
}

#[test]
fn type_text_requires_text() {
    assert_eq!(parse_failure::<TypeText>(&["type-text"]), 1);
}

#[test]
fn send_key_accepts_aliases() {
    for (spec, key) in [
        ("esc", Key::Escape),
        ("return", Key::Return),
        ("enter", Key::Return),
        ("backspace", Key::Backspace),
        ("delete", Key::ForwardDelete),
        ("up", Key::UpArrow),
    ] {
        let (poster, code) = run_tool::<SendKey>(Point::default(), &["send-key", spec]);
        assert_eq!(code, 0, "{spec}");
        assert_eq!(
            poster.events()[0],
            Synthetic::Key {
                stroke: Stroke::key(key),
                down: true,
            },
            "{spec}"
        );
    }
    assert_eq!(parse_failure::<SendKey>(&["send-key", "hyper"]), 1);
}

#[test]
fn scroll_and_drag() {
    let (poster, code) = run_tool::<MouseScroll>(Point::default(), &["mouse-scroll", "0", "-5"]);
    assert_eq!(code, 0);
    assert_eq!(poster.events(), vec![Synthetic::Scroll { dx: 0, dy: -5 }]);

    let (poster, code) =
        run_tool::<MouseDrag>(Point::default(), &["mouse-drag", "1", "2", "30", "40"]);
    assert_eq!(code, 0);
    assert_eq!(poster.cursor(), Point::new(1.0, 2.0));
    assert_eq!(poster.events().len(), 4);
}

#[test]
fn failures_exit_with_one() {
    let tool = MouseClick::try_parse_from(["mouse-click"]).expect("parse");
    let poster = Arc::new(RecordingPoster::default());
    poster.fail_after(0);
    let synth = Synth::with_poster(poster.clone()).with_timing(Timing::instant());
    assert_eq!(execute(&tool, &synth), 1);
    assert!(poster.events().is_empty());
}

#[test]
fn help_and_version_exit_with_zero() {
    assert_eq!(parse_failure::<MouseMove>(&["mouse-move", "--help"]), 0);
    assert_eq!(parse_failure::<TypeText>(&["type-text", "--version"]), 0);
}
