#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Mode
// =============================================================

#[test]
fn mode_default_is_draw() {
    assert_eq!(Mode::default(), Mode::Draw);
}

#[test]
fn mode_variants_distinct() {
    assert_ne!(Mode::Draw, Mode::Note);
}

// =============================================================
// Button
// =============================================================

#[test]
fn button_from_dom_codes() {
    assert_eq!(Button::from_dom(0), Button::Primary);
    assert_eq!(Button::from_dom(1), Button::Middle);
    assert_eq!(Button::from_dom(2), Button::Secondary);
}

#[test]
fn button_from_unknown_dom_code_is_primary() {
    assert_eq!(Button::from_dom(4), Button::Primary);
    assert_eq!(Button::from_dom(-1), Button::Primary);
}

// =============================================================
// PointerEvent
// =============================================================

#[test]
fn mouse_event_keeps_button() {
    let ev = PointerEvent::mouse(Point::new(3.0, 4.0), Button::Secondary);
    assert_eq!(ev.client, Point::new(3.0, 4.0));
    assert_eq!(ev.button, Button::Secondary);
}

#[test]
fn touch_event_uses_first_contact() {
    let ev = PointerEvent::touch(&[Point::new(10.0, 20.0), Point::new(99.0, 99.0)]).unwrap();
    assert_eq!(ev.client, Point::new(10.0, 20.0));
    assert_eq!(ev.button, Button::Primary);
}

#[test]
fn touch_event_without_contacts_is_none() {
    assert!(PointerEvent::touch(&[]).is_none());
}

#[test]
fn touch_and_mouse_normalize_identically() {
    let client = Point::new(55.0, 66.0);
    let touch = PointerEvent::touch(&[client]).unwrap();
    let mouse = PointerEvent::mouse(client, Button::Primary);
    assert_eq!(touch, mouse);
}

// =============================================================
// PointerCapture
// =============================================================

#[test]
fn capture_release_returns_scope() {
    let capture = PointerCapture::acquire(CaptureScope::Window);
    assert_eq!(capture.scope(), CaptureScope::Window);
    assert_eq!(capture.release(), CaptureScope::Window);
}
