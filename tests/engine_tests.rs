// Host-side tests for the orbit engine: lifecycle, scroll tracking, snapping
// and command dispatch, driven through a fake host.

mod common;

use common::*;
use orbit_core::command::{GO_TO_SECTOR, SET_SPECTRUM};
use orbit_core::*;
use serde_json::json;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

fn record_events<S: KeyValueStore>(
    engine: &mut OrbitEngine<FakeHost, S>,
) -> Rc<RefCell<Vec<EngineEvent>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = events.clone();
    engine.on_engine_event(move |e: &EngineEvent| sink.borrow_mut().push(e.clone()));
    events
}

#[test]
fn cold_start_without_preferences() {
    let mut engine = engine(1000.0);
    engine.init();

    let snap = engine.snapshot();
    assert_eq!(snap.system_state, SystemState::Idle);
    assert_eq!(snap.sector_index, 0);
    assert_eq!(snap.sector_name, SectorName::Hero);
    assert_eq!(snap.spectrum, SpectrumMode::Color);
    assert_eq!(snap.language, Language::En);
    assert!(engine.host().attached);
    assert_eq!(engine.host().applied, vec![(SpectrumMode::Color, 10)]);
    assert_eq!(engine.host().idle_timer, Some(120));
}

#[test]
fn init_twice_attaches_once_and_publishes_nothing_new() {
    let mut engine = engine(1000.0);
    engine.init();
    let before = engine.snapshot();
    engine.init();
    assert_eq!(engine.host().attach_count, 1);
    assert!(Rc::ptr_eq(&before, &engine.snapshot()));
}

#[test]
fn default_snapshot_is_served_until_first_publish() {
    let mut engine = engine(1000.0);
    let store = engine.external_store();
    assert!(!store.is_synchronized());
    let a = store.get_snapshot();
    let b = store.get_snapshot();
    assert!(Rc::ptr_eq(&a, &b));
    assert!(Rc::ptr_eq(&a, &store.get_server_snapshot()));
    assert_eq!(*a, EngineSnapshot::default());
    assert_eq!(a.system_state, SystemState::Init);
    assert!(a.is_snapped);

    engine.init();
    assert!(store.is_synchronized());
    assert!(!Rc::ptr_eq(&a, &store.get_snapshot()));
    // The server snapshot never moves.
    assert!(Rc::ptr_eq(&a, &store.get_server_snapshot()));
}

#[test]
fn snapshot_reference_is_stable_until_state_changes() {
    let mut engine = engine(1000.0);
    engine.init();
    let a = engine.snapshot();
    assert!(Rc::ptr_eq(&a, &engine.snapshot()));

    engine.dispatch(Command::SetState(SystemState::Scan));
    let b = engine.snapshot();
    assert!(!Rc::ptr_eq(&a, &b));
    assert_eq!(b.system_state, SystemState::Scan);
}

#[test]
fn scroll_to_forty_percent_selects_projects() {
    let mut engine = engine(1000.0);
    engine.init();
    scroll(&mut engine, 400.0);

    let snap = engine.snapshot();
    assert!((snap.scroll_progress - 0.4).abs() < 1e-12);
    assert_eq!(snap.sector_index, 2);
    assert_eq!(snap.sector_name, SectorName::Projects);
    assert!(!snap.is_snapped);
}

#[test]
fn scroll_progress_is_clamped() {
    let mut engine = engine(1000.0);
    scroll(&mut engine, 1500.0);
    assert_eq!(engine.snapshot().scroll_progress, 1.0);
    // Bottom of the page is nearest to the last detent.
    assert_eq!(engine.snapshot().sector_index, 3);
    scroll(&mut engine, -20.0);
    assert_eq!(engine.snapshot().scroll_progress, 0.0);
}

#[test]
fn idle_timeout_snaps_to_nearest_detent() {
    let mut engine = engine(1000.0);
    engine.init();
    scroll(&mut engine, 400.0);

    assert!(fire_idle(&mut engine));
    assert!(engine.is_snapping());
    let frames = run_frames(&mut engine, FRAME_MS);
    assert!(frames > 1);

    let snap = engine.snapshot();
    assert_eq!(snap.scroll_progress, 0.5);
    assert_eq!(snap.sector_index, 2);
    assert!(snap.is_snapped);
    assert!(!engine.is_snapping());
    assert_eq!(engine.host().y, 500.0);
}

#[test]
fn idle_timeout_uses_latest_progress() {
    let mut engine = engine(1000.0);
    engine.init();
    scroll(&mut engine, 400.0);
    scroll(&mut engine, 200.0);
    fire_idle(&mut engine);
    run_frames(&mut engine, FRAME_MS);
    assert_eq!(engine.snapshot().sector_index, 1);
    assert_eq!(engine.host().y, 250.0);
}

#[test]
fn small_delta_snaps_without_animation() {
    let mut engine = engine(1000.0);
    engine.init();
    scroll(&mut engine, 251.5);
    fire_idle(&mut engine);

    assert!(!engine.host().frame_requested);
    let snap = engine.snapshot();
    assert!(snap.is_snapped);
    assert_eq!(snap.scroll_progress, 0.25);
    assert_eq!(snap.sector_index, 1);
}

#[test]
fn go_to_sector_wraps_out_of_range_index() {
    let mut engine = engine(1000.0);
    engine.init();
    engine.dispatch(Command::GoToSector(5));
    run_frames(&mut engine, FRAME_MS);
    let snap = engine.snapshot();
    assert_eq!(snap.sector_index, 1);
    assert_eq!(snap.scroll_progress, 0.25);

    engine.dispatch(Command::GoToSector(-1));
    run_frames(&mut engine, FRAME_MS);
    assert_eq!(engine.snapshot().sector_index, 3);
}

#[test]
fn go_to_sector_is_idempotent_in_end_state() {
    let mut engine = engine(1000.0);
    engine.init();

    engine.go_to_sector(2);
    step_frame(&mut engine, FRAME_MS);
    engine.go_to_sector(2);
    engine.go_to_sector(2);
    run_frames(&mut engine, FRAME_MS);

    for _ in 0..3 {
        engine.go_to_sector(2);
        run_frames(&mut engine, FRAME_MS);
        let snap = engine.snapshot();
        assert_eq!(snap.scroll_progress, 0.5);
        assert_eq!(snap.sector_index, 2);
        assert!(snap.is_snapped);
    }
}

#[test]
fn next_and_prev_wrap_around() {
    let mut engine = engine(1000.0);
    engine.init();

    engine.go_to_sector(3);
    run_frames(&mut engine, FRAME_MS);
    engine.dispatch(Command::NextSector);
    run_frames(&mut engine, FRAME_MS);
    assert_eq!(engine.snapshot().sector_index, 0);

    engine.dispatch(Command::PrevSector);
    run_frames(&mut engine, FRAME_MS);
    assert_eq!(engine.snapshot().sector_index, 3);
    assert_eq!(engine.snapshot().scroll_progress, 0.75);
}

#[test]
fn snap_progress_is_monotonic_and_bounded() {
    let mut engine = engine(1000.0);
    engine.init();
    engine.go_to_sector(1);
    run_frames(&mut engine, FRAME_MS);

    let seen = Rc::new(RefCell::new(Vec::new()));
    let store = engine.external_store();
    let sink = seen.clone();
    let reader = store.clone();
    let sub = store.subscribe(move || sink.borrow_mut().push(reader.get_snapshot().scroll_progress));

    engine.go_to_sector(3);
    run_frames(&mut engine, FRAME_MS);
    sub.unsubscribe();

    let seen = seen.borrow();
    assert!(seen.len() > 10);
    for pair in seen.windows(2) {
        assert!(pair[1] >= pair[0], "progress went backwards: {:?}", pair);
    }
    assert!(seen.iter().all(|p| (0.25..=0.75).contains(p)));
    assert_eq!(*seen.last().unwrap(), 0.75);
}

#[test]
fn reduced_motion_shortens_the_snap() {
    let mut normal = engine(1000.0);
    normal.init();
    normal.go_to_sector(2);
    assert_eq!(run_frames(&mut normal, FRAME_MS), 38); // 600ms

    let mut reduced = engine(1000.0);
    reduced.host_mut().reduced_motion = true;
    reduced.init();
    reduced.go_to_sector(2);
    assert_eq!(run_frames(&mut reduced, FRAME_MS), 10); // 150ms
}

#[test]
fn user_scroll_cancels_snap_in_flight() {
    let mut engine = engine(1000.0);
    engine.init();
    engine.go_to_sector(3);
    step_frame(&mut engine, FRAME_MS);
    step_frame(&mut engine, FRAME_MS);
    assert!(engine.is_snapping());

    scroll(&mut engine, 100.0);
    assert!(!engine.is_snapping());
    assert!(!engine.host().frame_requested);
    assert!(!engine.snapshot().is_snapped);
    assert_eq!(engine.snapshot().sector_index, 0);
    assert_eq!(engine.host().idle_timer, Some(120));

    // A stale frame after cancellation changes nothing.
    let before = engine.snapshot();
    engine.handle_animation_frame(engine.host().now + 500.0);
    assert!(Rc::ptr_eq(&before, &engine.snapshot()));
}

#[test]
fn go_to_sector_restarts_a_running_snap() {
    let mut engine = engine(1000.0);
    engine.init();
    engine.go_to_sector(3);
    step_frame(&mut engine, FRAME_MS);
    engine.host_mut().idle_timer = Some(120);

    engine.go_to_sector(1);
    assert_eq!(engine.host().idle_timer, None);
    run_frames(&mut engine, FRAME_MS);
    assert_eq!(engine.snapshot().sector_index, 1);
    assert_eq!(engine.host().y, 250.0);
}

#[test]
fn non_scrollable_page_degrades_to_first_sector() {
    let mut engine = engine(0.0);
    engine.init();
    assert_eq!(engine.snapshot().scroll_progress, 0.0);
    assert_eq!(engine.snapshot().sector_index, 0);

    scroll(&mut engine, 50.0);
    assert_eq!(engine.snapshot().scroll_progress, 0.0);

    engine.go_to_sector(2);
    assert!(!engine.is_snapping());
    assert!(!engine.host().frame_requested);
    assert_eq!(engine.snapshot().sector_index, 0);

    let mut negative = common::engine(-300.0);
    negative.init();
    assert_eq!(negative.snapshot().scroll_progress, 0.0);
}

#[test]
fn unknown_command_reaches_sink_without_state_change() {
    let mut engine = engine(1000.0);
    engine.init();
    let events = record_events(&mut engine);
    let before = engine.snapshot();

    engine.dispatch_raw("COMMAND/WARP", json!({"speed": 9}));
    engine.dispatch_raw(SET_SPECTRUM, json!("ULTRAVIOLET"));

    assert!(Rc::ptr_eq(&before, &engine.snapshot()));
    let events = events.borrow();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].kind(), "COMMAND/WARP");
    assert_eq!(events[1].kind(), SET_SPECTRUM);
}

#[test]
fn raw_dispatch_applies_known_commands() {
    let mut engine = engine(1000.0);
    engine.init();
    engine.dispatch_raw(GO_TO_SECTOR, json!(2));
    run_frames(&mut engine, FRAME_MS);
    assert_eq!(engine.snapshot().sector_index, 2);

    engine.dispatch_raw("COMMAND/SET_STATE", json!("PORTAL_READY"));
    assert_eq!(engine.snapshot().system_state, SystemState::PortalReady);
}

#[test]
fn command_events_carry_wall_clock_timestamp() {
    let mut engine = engine(1000.0);
    engine.init();
    let events = record_events(&mut engine);
    engine.host_mut().wall = 42_000.0;
    engine.dispatch(Command::SetLanguage(Language::Cs));

    let events = events.borrow();
    match &events[0] {
        EngineEvent::Command(c) => {
            assert_eq!(c.kind, "COMMAND/SET_LANGUAGE");
            assert_eq!(c.payload, json!("CS"));
            assert_eq!(c.timestamp, 42_000.0);
        }
        other => panic!("expected a command event, got {:?}", other),
    }
}

#[test]
fn convenience_operations_go_through_dispatch() {
    let mut engine = engine(1000.0);
    engine.init();
    let events = record_events(&mut engine);

    engine.go_to_sector(2);
    run_frames(&mut engine, FRAME_MS);
    engine.next_sector();
    run_frames(&mut engine, FRAME_MS);
    engine.prev_sector();
    run_frames(&mut engine, FRAME_MS);
    engine.toggle_spectrum();
    engine.cycle_language();

    let events = events.borrow();
    let kinds: Vec<&str> = events.iter().map(|e| e.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            "COMMAND/GO_TO_SECTOR",
            "COMMAND/NEXT_SECTOR",
            "COMMAND/PREV_SECTOR",
            "COMMAND/SET_SPECTRUM",
            "COMMAND/SET_LANGUAGE",
        ]
    );
    match &events[0] {
        EngineEvent::Command(c) => assert_eq!(c.payload, json!(2)),
        other => panic!("expected a command event, got {:?}", other),
    }
    match &events[3] {
        EngineEvent::Command(c) => assert_eq!(c.payload, json!("IR")),
        other => panic!("expected a command event, got {:?}", other),
    }

    let snap = engine.snapshot();
    assert_eq!(snap.sector_index, 2);
    assert_eq!(snap.spectrum, SpectrumMode::Ir);
    assert_eq!(snap.language, Language::Cs);
}

#[test]
fn only_the_latest_event_sink_receives_events() {
    let mut engine = engine(1000.0);
    let first = record_events(&mut engine);
    let second = record_events(&mut engine);
    engine.dispatch(Command::SetState(SystemState::Focus));
    assert!(first.borrow().is_empty());
    assert_eq!(second.borrow().len(), 1);
}

#[test]
fn telemetry_is_throttled_by_wall_clock() {
    let mut engine = engine(1000.0);
    let events = record_events(&mut engine);
    for i in 0..14 {
        engine.host_mut().wall = 1_000.0 + 10.0 * i as f64;
        scroll(&mut engine, 30.0 * i as f64);
    }
    let events = events.borrow();
    let telemetry: Vec<&TelemetryEvent> = events
        .iter()
        .filter_map(|e| match e {
            EngineEvent::Telemetry(t) => Some(t),
            _ => None,
        })
        .collect();
    // 1000, 1060, 1120
    assert_eq!(telemetry.len(), 3);
    assert_eq!(telemetry[1].timestamp, 1_060.0);
    assert_eq!(telemetry[1].kind, TELEMETRY_UPDATE);
    assert!((telemetry[1].payload.scroll_progress - 0.18).abs() < 1e-9);
    assert_eq!(telemetry[1].payload.sector_name, SectorName::About);
    assert_eq!(telemetry[1].payload.timecode_string, "00:10:48:00");
    assert_eq!(telemetry[0].payload.timecode_string, "00:00:00:00");
    assert!(!telemetry[1].payload.is_snapped);
}

#[test]
fn set_state_reaches_every_declared_state() {
    let mut engine = engine(1000.0);
    engine.init();
    for state in SystemState::ALL {
        engine.dispatch(Command::SetState(state));
        assert_eq!(engine.snapshot().system_state, state);
    }
}

#[test]
fn destroy_is_safe_before_init_and_repeated() {
    let mut engine = engine(1000.0);
    engine.destroy();
    assert!(!engine.is_initialized());

    engine.init();
    engine.go_to_sector(3);
    step_frame(&mut engine, FRAME_MS);
    engine.destroy();
    engine.destroy();

    let host = engine.host();
    assert!(!host.attached);
    assert_eq!(host.idle_timer, None);
    assert!(!host.frame_requested);
    assert!(!engine.is_snapping());

    engine.init();
    assert!(engine.is_initialized());
    assert!(engine.host().attached);
    assert_eq!(engine.host().attach_count, 2);
}

#[test]
fn duplicate_subscriptions_collapse_and_unsubscribe_stops_calls() {
    let mut engine = engine(1000.0);
    let calls = Rc::new(Cell::new(0));
    let counter = calls.clone();
    let listener: Listener = Rc::new(move || counter.set(counter.get() + 1));

    let first = engine.subscribe(listener.clone());
    let _second = engine.subscribe(listener.clone());
    engine.dispatch(Command::SetState(SystemState::Scan));
    assert_eq!(calls.get(), 1);

    first.unsubscribe();
    engine.dispatch(Command::SetState(SystemState::Idle));
    assert_eq!(calls.get(), 1);
}

#[test]
fn labels_follow_the_current_language() {
    let mut engine = engine(1000.0);
    engine.init();
    assert_eq!(engine.t("SYSTEM_LINK"), "STABLE");
    engine.dispatch(Command::SetLanguage(Language::De));
    assert_eq!(engine.t("SYSTEM_LINK"), "STABIL");
    assert_eq!(engine.t("NOT_A_LABEL"), "NOT_A_LABEL");
}

#[test]
fn snapshot_serializes_with_wire_names() {
    let mut engine = engine(1000.0);
    engine.init();
    engine.dispatch(Command::SetState(SystemState::PortalReady));
    let value = serde_json::to_value(&*engine.snapshot()).unwrap();
    assert_eq!(value["systemState"], "PORTAL_READY");
    assert_eq!(value["sectorName"], "HERO");
    assert_eq!(value["spectrum"], "COLOR");
    assert_eq!(value["language"], "EN");
    assert_eq!(value["isSnapped"], false);
}
