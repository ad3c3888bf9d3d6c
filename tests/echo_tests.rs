// Host-side tests for scroll-echo bookkeeping.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]

include!("../src/echo.rs");

fn echo() -> ScrollEcho {
    ScrollEcho::new(1.0, 100.0)
}

#[test]
fn own_scroll_is_recognised_once() {
    let mut e = echo();
    e.record(500.0, 1000.0);
    assert!(e.take_match(500.4, 1016.0));
    // Consumed: the next event at the same spot is the user's.
    assert!(!e.take_match(500.0, 1032.0));
}

#[test]
fn user_scroll_elsewhere_is_not_an_echo() {
    let mut e = echo();
    e.record(500.0, 1000.0);
    assert!(!e.take_match(520.0, 1016.0));
}

#[test]
fn scroll_to_that_never_moved_the_page_goes_stale() {
    // Final snap frame lands on the pixel the page is already at, so no
    // scroll event comes back; a later user nudge must still get through.
    let mut e = echo();
    e.record(750.0, 1000.0);
    assert!(!e.take_match(750.5, 3000.0));
}

#[test]
fn cleared_echo_never_matches() {
    let mut e = echo();
    e.record(250.0, 1000.0);
    e.clear();
    assert!(!e.take_match(250.0, 1001.0));
}

#[test]
fn newer_record_replaces_older() {
    let mut e = echo();
    e.record(100.0, 1000.0);
    e.record(140.0, 1016.0);
    assert!(!e.take_match(100.0, 1020.0));
    e.record(140.0, 1032.0);
    assert!(e.take_match(140.0, 1040.0));
}
