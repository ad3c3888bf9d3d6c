//! HUD overlay: text readouts, localized labels and the inactivity fade.

use crate::constants::*;
use crate::dom;
use orbit_core::dictionary::translate;
use orbit_core::timecode::format_timecode;
use orbit_core::{EngineConfig, EngineSnapshot, HudFader, Language};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct HudController {
    inner: Rc<RefCell<HudInner>>,
}

struct HudInner {
    window: web::Window,
    document: web::Document,
    fader: HudFader,
    idle_handle: Option<i32>,
    on_idle: Option<Closure<dyn FnMut()>>,
    labelled_language: Option<Language>,
}

impl HudController {
    pub fn new(window: web::Window, document: web::Document, config: &EngineConfig) -> Self {
        let inner = Rc::new(RefCell::new(HudInner {
            window,
            document,
            fader: HudFader::new(config),
            idle_handle: None,
            on_idle: None,
            labelled_language: None,
        }));
        let weak = Rc::downgrade(&inner);
        let on_idle = Closure::wrap(Box::new(move || {
            if let Some(inner) = weak.upgrade() {
                if let Ok(mut hud) = inner.try_borrow_mut() {
                    hud.idle_handle = None;
                    hud.fader.go_idle();
                    hud.apply_opacity();
                }
            }
        }) as Box<dyn FnMut()>);
        inner.borrow_mut().on_idle = Some(on_idle);
        Self { inner }
    }

    /// User interaction: brighten and restart the idle countdown.
    pub fn wake(&self) {
        if let Ok(mut hud) = self.inner.try_borrow_mut() {
            let delay = hud.fader.wake();
            hud.arm_idle(delay);
            hud.apply_opacity();
        }
    }

    /// Re-render from a fresh engine snapshot.
    pub fn sync(&self, snapshot: &EngineSnapshot) {
        let Ok(mut hud) = self.inner.try_borrow_mut() else {
            return;
        };
        if let Some(delay) = hud.fader.set_sector(snapshot.sector_index) {
            hud.arm_idle(delay);
        }
        hud.render(snapshot);
        hud.apply_opacity();
    }

    pub fn shutdown(&self) {
        if let Ok(mut hud) = self.inner.try_borrow_mut() {
            hud.clear_idle();
            // Breaks the closure -> Weak -> inner link for good.
            hud.on_idle = None;
        }
    }
}

impl HudInner {
    fn arm_idle(&mut self, delay_ms: u32) {
        self.clear_idle();
        if let Some(cb) = &self.on_idle {
            self.idle_handle = self
                .window
                .set_timeout_with_callback_and_timeout_and_arguments_0(
                    cb.as_ref().unchecked_ref(),
                    delay_ms as i32,
                )
                .ok();
        }
    }

    fn clear_idle(&mut self) {
        if let Some(handle) = self.idle_handle.take() {
            self.window.clear_timeout_with_handle(handle);
        }
    }

    fn apply_opacity(&self) {
        if let Some(el) = self.document.get_element_by_id(HUD_ROOT_ID) {
            _ = el
                .class_list()
                .toggle_with_force(HUD_IDLE_CLASS, self.fader.is_idle());
            if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
                _ = html
                    .style()
                    .set_property("opacity", &format!("{:.2}", self.fader.opacity()));
            }
        }
    }

    fn render(&mut self, snap: &EngineSnapshot) {
        let lang = snap.language;
        let doc = &self.document;
        dom::set_text(
            doc,
            HUD_SECTOR_ID,
            &format!("{}: {}", translate("SECTOR_LABEL", lang), snap.sector_name),
        );
        dom::set_text(doc, HUD_TIMECODE_ID, &format_timecode(snap.scroll_progress));
        dom::set_text(
            doc,
            HUD_SPECTRUM_ID,
            &format!("{}: {}", translate("SPECTRUM", lang), snap.spectrum),
        );
        dom::set_text(
            doc,
            HUD_LANG_ID,
            &format!("{}: {}", translate("LANG", lang), lang),
        );
        if let Some(root) = doc.get_element_by_id(HUD_ROOT_ID) {
            _ = root.set_attribute(SNAPPED_ATTR, if snap.is_snapped { "1" } else { "0" });
        }

        for el in dom::query_all(doc, &format!("[{}]", SECTOR_BUTTON_ATTR)) {
            let active = el
                .get_attribute(SECTOR_BUTTON_ATTR)
                .and_then(|v| v.parse::<usize>().ok())
                .map(|i| i == snap.sector_index)
                .unwrap_or(false);
            if active {
                _ = el.set_attribute("aria-current", "true");
            } else {
                _ = el.remove_attribute("aria-current");
            }
        }

        if self.labelled_language != Some(lang) {
            relabel(doc, lang);
            self.labelled_language = Some(lang);
            log::info!("[hud] labels -> {}", lang);
        }
    }
}

/// Fill `data-label` text and `data-aria-label` attributes for `lang`.
fn relabel(document: &web::Document, lang: Language) {
    for el in dom::query_all(document, &format!("[{}]", LABEL_ATTR)) {
        if let Some(key) = el.get_attribute(LABEL_ATTR) {
            el.set_text_content(Some(translate(&key, lang)));
        }
    }
    for el in dom::query_all(document, &format!("[{}]", ARIA_LABEL_ATTR)) {
        if let Some(key) = el.get_attribute(ARIA_LABEL_ATTR) {
            _ = el.set_attribute("aria-label", translate(&key, lang));
        }
    }
}
