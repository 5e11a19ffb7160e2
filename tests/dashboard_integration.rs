use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;
use rstest::rstest;

use trackboard::{
    core::element::Interactive,
    presentation::{
        components::{Button, Input},
        views::Dashboard,
    },
};

fn type_text(view: &Dashboard, text: &str) {
    for c in text.chars() {
        let interactives = view.render().interactives();
        let [Interactive::Input { value, on_change }, _] = interactives.as_slice() else {
            panic!("Dashboard should expose an input then a button");
        };
        Input::change(
            value,
            on_change.as_ref(),
            KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE),
        );
    }
}

fn displayed_value(view: &Dashboard) -> String {
    match view.render().interactives().first() {
        Some(Interactive::Input { value, .. }) => value.clone(),
        other => panic!("unexpected first interactive: {other:?}"),
    }
}

#[test]
fn test_fresh_view_type_then_submit() {
    let view = Dashboard::new();
    assert_eq!(displayed_value(&view), "");

    type_text(&view, "abc");
    assert_eq!(displayed_value(&view), "abc");

    let before = view.render().to_string();
    if let [_, Interactive::Button { on_activate }] = view.render().interactives().as_slice() {
        Button::activate(on_activate.as_ref());
    }
    assert_eq!(view.render().to_string(), before);
    assert_eq!(view.store().state().value(), "abc");
}

#[rstest]
#[case("hello world")]
#[case("ünïcödé")]
#[case("<tag & \"quotes\">")]
fn test_typed_text_is_displayed(#[case] text: &str) {
    let view = Dashboard::new();
    type_text(&view, text);
    assert_eq!(displayed_value(&view), text);
}

#[test]
fn test_render_without_interaction_is_idempotent() {
    let view = Dashboard::new();
    let first = view.render().to_string();
    let second = view.render().to_string();

    assert_eq!(first, second);
    assert_eq!(view.store().state().value(), "");
}

#[test]
fn test_paste_appends_single_line() {
    let view = Dashboard::new();
    type_text(&view, "ab");
    if let [Interactive::Input { value, on_change }, _] = view.render().interactives().as_slice() {
        assert!(Input::paste(value, on_change.as_ref(), "c\r\nd"));
    }
    assert_eq!(displayed_value(&view), "abcd");
}
