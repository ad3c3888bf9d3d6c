//! `window`/`document` implementation of the engine host.

use crate::constants::{
    REDUCED_MOTION_QUERY, SCROLL_ECHO_TOLERANCE_PX, SCROLL_ECHO_WINDOW_MS, SPECTRUM_ATTR,
};
use crate::echo::ScrollEcho;
use crate::storage::LocalStorage;
use orbit_core::spectrum::Token;
use orbit_core::{Host, OrbitEngine, SpectrumMode};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type Engine = OrbitEngine<BrowserHost, LocalStorage>;
pub type SharedEngine = Rc<RefCell<Engine>>;

pub struct BrowserHost {
    window: web::Window,
    document: web::Document,
    on_scroll: Closure<dyn FnMut()>,
    on_idle: Closure<dyn FnMut()>,
    on_frame: Closure<dyn FnMut(f64)>,
    scroll_attached: bool,
    idle_handle: Option<i32>,
    frame_handle: Option<i32>,
    echo: ScrollEcho,
}

impl BrowserHost {
    /// The callbacks hold only a weak reference back to the engine.
    pub fn new(window: web::Window, document: web::Document, engine: Weak<RefCell<Engine>>) -> Self {
        let weak = engine.clone();
        let on_scroll = Closure::wrap(Box::new(move || {
            with_engine(&weak, "scroll", |eng| {
                if !eng.host_mut().take_scroll_echo() {
                    eng.handle_scroll();
                }
            });
        }) as Box<dyn FnMut()>);

        let weak = engine.clone();
        let on_idle = Closure::wrap(Box::new(move || {
            with_engine(&weak, "idle", |eng| {
                eng.host_mut().idle_handle = None;
                eng.handle_idle_timeout();
            });
        }) as Box<dyn FnMut()>);

        let weak = engine;
        let on_frame = Closure::wrap(Box::new(move |timestamp: f64| {
            with_engine(&weak, "frame", |eng| {
                eng.host_mut().frame_handle = None;
                eng.handle_animation_frame(timestamp);
            });
        }) as Box<dyn FnMut(f64)>);

        Self {
            window,
            document,
            on_scroll,
            on_idle,
            on_frame,
            scroll_attached: false,
            idle_handle: None,
            frame_handle: None,
            echo: ScrollEcho::new(SCROLL_ECHO_TOLERANCE_PX, SCROLL_ECHO_WINDOW_MS),
        }
    }

    /// True when the current scroll event was caused by our own `scroll_to`.
    pub fn take_scroll_echo(&mut self) -> bool {
        let y = self.scroll_y();
        self.echo.take_match(y, instant::now())
    }
}

fn with_engine(engine: &Weak<RefCell<Engine>>, what: &str, f: impl FnOnce(&mut Engine)) {
    let Some(engine) = engine.upgrade() else {
        return;
    };
    match engine.try_borrow_mut() {
        Ok(mut eng) => f(&mut eng),
        Err(_) => log::warn!("[orbit] {} callback re-entered the engine; skipped", what),
    }
}

impl Host for BrowserHost {
    fn now_ms(&self) -> f64 {
        instant::now()
    }

    fn wall_clock_ms(&self) -> f64 {
        js_sys::Date::now()
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn max_scrollable(&self) -> f64 {
        let doc_height = self
            .document
            .document_element()
            .map(|el| el.scroll_height() as f64)
            .unwrap_or(0.0);
        let viewport = self
            .window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        doc_height - viewport
    }

    fn scroll_to(&mut self, y: f64) {
        self.echo.record(y, instant::now());
        self.window.scroll_to_with_x_and_y(0.0, y);
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.window
            .match_media(REDUCED_MOTION_QUERY)
            .ok()
            .flatten()
            .map(|mq| mq.matches())
            .unwrap_or(false)
    }

    fn apply_spectrum(&mut self, mode: SpectrumMode, tokens: &[Token]) {
        let Some(root) = self.document.document_element() else {
            return;
        };
        _ = root.set_attribute(SPECTRUM_ATTR, mode.as_attr());
        if let Some(root) = root.dyn_ref::<web::HtmlElement>() {
            let style = root.style();
            for (name, value) in tokens {
                _ = style.set_property(name, value);
            }
        }
    }

    fn attach_scroll_listener(&mut self) {
        if self.scroll_attached {
            return;
        }
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(true);
        self.scroll_attached = self
            .window
            .add_event_listener_with_callback_and_add_event_listener_options(
                "scroll",
                self.on_scroll.as_ref().unchecked_ref(),
                &opts,
            )
            .is_ok();
    }

    fn detach_scroll_listener(&mut self) {
        if !self.scroll_attached {
            return;
        }
        _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.on_scroll.as_ref().unchecked_ref());
        self.scroll_attached = false;
        self.echo.clear();
    }

    fn set_idle_timer(&mut self, delay_ms: u32) {
        self.clear_idle_timer();
        self.idle_handle = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                self.on_idle.as_ref().unchecked_ref(),
                delay_ms as i32,
            )
            .ok();
    }

    fn clear_idle_timer(&mut self) {
        if let Some(handle) = self.idle_handle.take() {
            self.window.clear_timeout_with_handle(handle);
        }
    }

    fn request_frame(&mut self) {
        // The previous frame's scroll event may still be in flight; keep its echo.
        if let Some(handle) = self.frame_handle.take() {
            _ = self.window.cancel_animation_frame(handle);
        }
        self.frame_handle = self
            .window
            .request_animation_frame(self.on_frame.as_ref().unchecked_ref())
            .ok();
    }

    fn cancel_frame(&mut self) {
        if let Some(handle) = self.frame_handle.take() {
            _ = self.window.cancel_animation_frame(handle);
        }
        self.echo.clear();
    }
}

impl Drop for BrowserHost {
    // The closures die with us; the browser must not call them afterwards.
    fn drop(&mut self) {
        self.detach_scroll_listener();
        self.clear_idle_timer();
        self.cancel_frame();
    }
}
