use super::keymap::{action_for_key, is_text_entry_tag, KeyAction};
use crate::dom::{self, ListenerSet};
use crate::host::SharedEngine;
use orbit_core::{ExternalStore, LanguageView, OrbitView, SpectrumView};
use wasm_bindgen::JsCast;
use web_sys as web;

fn typing_into_field(ev: &web::KeyboardEvent) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .map(|el| is_text_entry_tag(&el.tag_name()))
        .unwrap_or(false)
}

pub fn handle_global_keydown(
    ev: &web::KeyboardEvent,
    engine: &SharedEngine,
    store: &ExternalStore,
    document: &web::Document,
) {
    if typing_into_field(ev) {
        return;
    }
    let key = ev.key();
    let Some(action) = action_for_key(&key) else {
        return;
    };
    ev.prevent_default();

    let snapshot = store.get_snapshot();
    let orbit = OrbitView::from_snapshot(&snapshot);
    let command = match action {
        KeyAction::ClearFocus => {
            dom::blur_active_element(document);
            return;
        }
        KeyAction::PrevSector => orbit.prev_sector(),
        KeyAction::NextSector => orbit.next_sector(),
        KeyAction::GoToSector(index) => orbit.go_to_sector(index as i64),
        KeyAction::ToggleSpectrum => SpectrumView::from_snapshot(&snapshot).toggle_spectrum(),
        KeyAction::CycleLanguage => LanguageView::from_snapshot(&snapshot).cycle_language(),
    };
    log::debug!("[keys] {} -> {}", key, command.kind());
    super::dispatch(engine, command);
}

pub fn wire_global_keydown(
    listeners: &mut ListenerSet,
    window: &web::Window,
    engine: SharedEngine,
    store: ExternalStore,
    document: web::Document,
) {
    listeners.add(window.as_ref(), "keydown", move |ev: web::Event| {
        if let Some(ev) = ev.dyn_ref::<web::KeyboardEvent>() {
            handle_global_keydown(ev, &engine, &store, &document);
        }
    });
}
