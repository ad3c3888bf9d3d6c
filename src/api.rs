//! JS-facing handle: `getSnapshot`, `subscribe`, `dispatch` and teardown.

use crate::dom::ListenerSet;
use crate::events;
use crate::host::{BrowserHost, SharedEngine};
use crate::hud::HudController;
use crate::storage::LocalStorage;
use orbit_core::dictionary::translate;
use orbit_core::{EngineConfig, EngineEvent, ExternalStore, OrbitEngine, Unsubscribe};
use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    let json = serde_json::to_string(value).map_err(|e| JsValue::from_str(&e.to_string()))?;
    js_sys::JSON::parse(&json)
}

fn from_js(value: &JsValue) -> Result<serde_json::Value, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(serde_json::Value::Null);
    }
    let json: String = js_sys::JSON::stringify(value)?.into();
    serde_json::from_str(&json).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn log_engine_event(event: &EngineEvent) {
    match event {
        EngineEvent::Command(c) => log::debug!("[orbit] {} {}", c.kind, c.payload),
        EngineEvent::Telemetry(t) => log::trace!(
            "[orbit] telemetry {} {} snapped={}",
            t.payload.timecode_string,
            t.payload.sector_name,
            t.payload.is_snapped
        ),
    }
}

#[wasm_bindgen]
pub struct OrbitHandle {
    engine: SharedEngine,
    store: ExternalStore,
    hud: HudController,
    listeners: ListenerSet,
    hud_subscription: Option<Unsubscribe>,
    destroyed: bool,
}

impl OrbitHandle {
    pub fn mount() -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("no document"))?;
        let config = EngineConfig::default();
        let storage = LocalStorage::from_window(&window);

        let engine: SharedEngine = Rc::new_cyclic(|weak| {
            let host = BrowserHost::new(window.clone(), document.clone(), weak.clone());
            RefCell::new(OrbitEngine::new(host, storage, config.clone()))
        });
        engine.borrow_mut().on_engine_event(log_engine_event);
        let store = engine.borrow().external_store();

        let hud = HudController::new(window.clone(), document.clone(), &config);
        let hud_subscription = {
            let hud = hud.clone();
            let reader = store.clone();
            store.subscribe(move || hud.sync(&reader.get_snapshot()))
        };

        engine.borrow_mut().init();

        let mut listeners = ListenerSet::new();
        events::wire_global_keydown(
            &mut listeners,
            &window,
            engine.clone(),
            store.clone(),
            document.clone(),
        );
        events::wire_activity(&mut listeners, &window, &hud);
        events::wire_controls(&mut listeners, &document, &engine);
        hud.wake();

        Ok(Self {
            engine,
            store,
            hud,
            listeners,
            hud_subscription: Some(hud_subscription),
            destroyed: false,
        })
    }
}

#[wasm_bindgen]
impl OrbitHandle {
    #[wasm_bindgen(js_name = getSnapshot)]
    pub fn get_snapshot(&self) -> Result<JsValue, JsValue> {
        to_js(&*self.store.get_snapshot())
    }

    #[wasm_bindgen(js_name = getServerSnapshot)]
    pub fn get_server_snapshot(&self) -> Result<JsValue, JsValue> {
        to_js(&*self.store.get_server_snapshot())
    }

    /// Register a change callback; returns the function that removes it.
    pub fn subscribe(&self, callback: js_sys::Function) -> JsValue {
        let unsubscribe = self.store.subscribe(move || {
            if let Err(e) = callback.call0(&JsValue::NULL) {
                log::warn!("[orbit] subscriber threw: {:?}", e);
            }
        });
        let mut slot = Some(unsubscribe);
        Closure::wrap(Box::new(move || {
            if let Some(u) = slot.take() {
                u.unsubscribe();
            }
        }) as Box<dyn FnMut()>)
        .into_js_value()
    }

    pub fn dispatch(&self, kind: String, payload: JsValue) -> Result<(), JsValue> {
        let payload = from_js(&payload)?;
        events::with_engine(&self.engine, |eng| eng.dispatch_raw(&kind, payload));
        Ok(())
    }

    /// Replace the engine event sink with a JS callback.
    #[wasm_bindgen(js_name = onEngineEvent)]
    pub fn on_engine_event(&self, callback: js_sys::Function) {
        events::with_engine(&self.engine, |eng| {
            eng.on_engine_event(move |event: &EngineEvent| match to_js(event) {
                Ok(value) => {
                    if let Err(e) = callback.call1(&JsValue::NULL, &value) {
                        log::warn!("[orbit] event sink threw: {:?}", e);
                    }
                }
                Err(e) => log::warn!("[orbit] event not serializable: {:?}", e),
            })
        });
    }

    pub fn t(&self, key: String) -> String {
        translate(&key, self.store.get_snapshot().language).to_string()
    }

    #[wasm_bindgen(js_name = toggleSpectrum)]
    pub fn toggle_spectrum(&self) {
        events::with_engine(&self.engine, |eng| eng.toggle_spectrum());
    }

    #[wasm_bindgen(js_name = cycleLanguage)]
    pub fn cycle_language(&self) {
        events::with_engine(&self.engine, |eng| eng.cycle_language());
    }

    /// Detach every listener and stop the engine. Idempotent.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.destroyed = true;
        self.listeners.remove_all();
        if let Some(sub) = self.hud_subscription.take() {
            sub.unsubscribe();
        }
        self.hud.shutdown();
        events::with_engine(&self.engine, |eng| eng.destroy());
        log::info!("[orbit] destroyed");
    }
}

impl Drop for OrbitHandle {
    fn drop(&mut self) {
        self.destroy();
    }
}
