use crate::constants::*;
use crate::dom::{self, ListenerSet};
use crate::host::SharedEngine;
use orbit_core::Command;
use web_sys as web;

/// HUD buttons: prev/next, per-sector jumps, spectrum and language toggles.
pub fn wire_controls(listeners: &mut ListenerSet, document: &web::Document, engine: &SharedEngine) {
    let e = engine.clone();
    listeners.add_click(document, PREV_BUTTON_ID, move || {
        super::dispatch(&e, Command::PrevSector)
    });
    let e = engine.clone();
    listeners.add_click(document, NEXT_BUTTON_ID, move || {
        super::dispatch(&e, Command::NextSector)
    });
    let e = engine.clone();
    listeners.add_click(document, SPECTRUM_BUTTON_ID, move || {
        super::with_engine(&e, |eng| eng.toggle_spectrum())
    });
    let e = engine.clone();
    listeners.add_click(document, LANG_BUTTON_ID, move || {
        super::with_engine(&e, |eng| eng.cycle_language())
    });

    for el in dom::query_all(document, &format!("[{}]", SECTOR_BUTTON_ATTR)) {
        let Some(index) = el
            .get_attribute(SECTOR_BUTTON_ATTR)
            .and_then(|v| v.parse::<i64>().ok())
        else {
            log::warn!("[orbit] sector button without a numeric {}", SECTOR_BUTTON_ATTR);
            continue;
        };
        let e = engine.clone();
        listeners.add(el.as_ref(), "click", move |_| {
            super::dispatch(&e, Command::GoToSector(index))
        });
    }
}
