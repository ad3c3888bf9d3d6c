//! The orbit engine: scroll tracking, magnetic snapping, preferences,
//! command dispatch and telemetry.
//!
//! All mutation happens synchronously inside `&mut self` calls made by the
//! host (scroll events, the idle timer, animation frames) or by `dispatch`.
//! Every call ends in a consistent state; there is no partial mutation to
//! observe between callbacks.

use crate::command::Command;
use crate::config::EngineConfig;
use crate::dictionary::translate;
use crate::external::{ExternalStore, Listener, SnapshotStore, Unsubscribe};
use crate::host::Host;
use crate::prefs::{KeyValueStore, PreferenceStore};
use crate::sectors::{nearest_detent_index, sector_name, wrap_sector_index, SECTORS};
use crate::snap::SnapAnimation;
use crate::spectrum::spectrum_tokens;
use crate::timecode::format_timecode;
use crate::types::{
    CommandEvent, EngineEvent, EngineSnapshot, Language, SpectrumMode, SystemState,
    TelemetryEvent, TelemetryPayload,
};
use serde_json::Value;
use std::rc::Rc;

pub type EventSink = Box<dyn FnMut(&EngineEvent)>;

pub struct OrbitEngine<H, S> {
    host: H,
    prefs: PreferenceStore<S>,
    config: EngineConfig,

    system_state: SystemState,
    sector_index: usize,
    scroll_progress: f64,
    is_snapped: bool,
    spectrum: SpectrumMode,
    language: Language,

    snap: Option<SnapAnimation>,
    last_telemetry_ms: Option<f64>,
    initialized: bool,

    store: Rc<SnapshotStore>,
    sink: Option<EventSink>,
}

impl<H: Host, S: KeyValueStore> OrbitEngine<H, S> {
    pub fn new(host: H, storage: S, config: EngineConfig) -> Self {
        let prefs = PreferenceStore::new(storage, &config.storage_namespace);
        Self {
            host,
            prefs,
            system_state: SystemState::Init,
            sector_index: 0,
            scroll_progress: 0.0,
            is_snapped: true,
            spectrum: config.spectrum,
            language: config.language,
            config,
            snap: None,
            last_telemetry_ms: None,
            initialized: false,
            store: SnapshotStore::new(),
            sink: None,
        }
    }

    // ---------------- lifecycle ----------------

    /// Load preferences, attach the scroll listener, sample the current
    /// position and move INIT -> IDLE. Repeated calls are no-ops.
    pub fn init(&mut self) {
        if self.initialized {
            return;
        }
        self.initialized = true;

        self.spectrum = self.prefs.load_spectrum(self.config.spectrum);
        self.language = self.prefs.load_language(self.config.language);
        self.apply_spectrum_tokens();

        // Hot-reload safety: never hold two listeners.
        self.host.detach_scroll_listener();
        self.host.attach_scroll_listener();
        self.handle_scroll();

        self.system_state = SystemState::Idle;
        self.notify();
        log::info!(
            "[orbit] ready spectrum={} lang={} sector={}",
            self.spectrum,
            self.language,
            sector_name(self.sector_index)
        );
    }

    /// Detach from the host and drop pending timers. Safe to call at any time.
    pub fn destroy(&mut self) {
        self.host.detach_scroll_listener();
        self.host.clear_idle_timer();
        self.snap = None;
        self.host.cancel_frame();
        self.initialized = false;
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    // ---------------- read side ----------------

    pub fn snapshot(&self) -> Rc<EngineSnapshot> {
        self.store.get()
    }

    pub fn subscribe(&self, listener: Listener) -> Unsubscribe {
        self.store.subscribe(listener)
    }

    pub fn external_store(&self) -> ExternalStore {
        ExternalStore::new(self.store.clone())
    }

    /// Install the single event sink; a later call replaces the earlier one.
    pub fn on_engine_event(&mut self, sink: impl FnMut(&EngineEvent) + 'static) {
        self.sink = Some(Box::new(sink));
    }

    /// Label for `key` in the current language.
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        translate(key, self.language)
    }

    pub fn is_snapping(&self) -> bool {
        self.snap.is_some()
    }

    pub fn preferences(&self) -> &PreferenceStore<S> {
        &self.prefs
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    // ---------------- commands ----------------

    pub fn dispatch(&mut self, command: Command) {
        let event = CommandEvent {
            kind: command.kind().to_string(),
            payload: command.payload(),
            timestamp: self.host.wall_clock_ms(),
        };
        self.emit(EngineEvent::Command(event));
        self.apply(command);
    }

    /// Dispatch an untyped `(type, payload)` pair. The sink always sees it;
    /// unknown types and bad payloads change nothing.
    pub fn dispatch_raw(&mut self, kind: &str, payload: Value) {
        let parsed = Command::parse(kind, &payload);
        let event = CommandEvent {
            kind: kind.to_string(),
            payload,
            timestamp: self.host.wall_clock_ms(),
        };
        self.emit(EngineEvent::Command(event));
        match parsed {
            Ok(command) => self.apply(command),
            Err(e) => log::debug!("[orbit] ignoring {kind}: {e}"),
        }
    }

    fn apply(&mut self, command: Command) {
        match command {
            Command::GoToSector(index) => self.snap_to_sector(index),
            Command::NextSector => self.snap_to_sector(self.sector_index as i64 + 1),
            Command::PrevSector => self.snap_to_sector(self.sector_index as i64 - 1),
            Command::SetSpectrum(mode) => self.set_spectrum(mode),
            Command::SetLanguage(language) => self.set_language(language),
            Command::SetState(state) => {
                self.system_state = state;
                self.notify();
            }
        }
    }

    /// Snap toward `index`; out-of-range indices wrap.
    pub fn go_to_sector(&mut self, index: i64) {
        self.dispatch(Command::GoToSector(index));
    }

    pub fn next_sector(&mut self) {
        self.dispatch(Command::NextSector);
    }

    pub fn prev_sector(&mut self) {
        self.dispatch(Command::PrevSector);
    }

    pub fn toggle_spectrum(&mut self) {
        self.dispatch(Command::SetSpectrum(self.spectrum.toggled()));
    }

    pub fn cycle_language(&mut self) {
        self.dispatch(Command::SetLanguage(self.language.next()));
    }

    // Abandons any snap in flight.
    fn snap_to_sector(&mut self, index: i64) {
        let wrapped = wrap_sector_index(index);
        self.cancel_snap();
        self.host.clear_idle_timer();
        self.snap_to(wrapped);
    }

    fn set_spectrum(&mut self, mode: SpectrumMode) {
        self.spectrum = mode;
        self.prefs.save_spectrum(mode);
        self.apply_spectrum_tokens();
        self.notify();
    }

    fn set_language(&mut self, language: Language) {
        self.language = language;
        self.prefs.save_language(language);
        self.notify();
    }

    fn apply_spectrum_tokens(&mut self) {
        self.host
            .apply_spectrum(self.spectrum, spectrum_tokens(self.spectrum));
    }

    // ---------------- host callbacks ----------------

    /// Sample the scroll position. Always un-snaps and re-arms the idle timer.
    pub fn handle_scroll(&mut self) {
        if self.snap.is_some() {
            self.cancel_snap();
        }

        let max = self.host.max_scrollable();
        self.scroll_progress = if max > 0.0 {
            (self.host.scroll_y() / max).clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.is_snapped = false;
        self.sector_index = nearest_detent_index(self.scroll_progress);

        self.notify();
        self.emit_telemetry_throttled();

        self.host.clear_idle_timer();
        self.host.set_idle_timer(self.config.idle_scroll_ms);
    }

    /// Scrolling has settled: snap to whichever detent is nearest now.
    pub fn handle_idle_timeout(&mut self) {
        if self.snap.is_some() {
            return;
        }
        self.snap_to(nearest_detent_index(self.scroll_progress));
    }

    /// Advance the snap animation. Ignored when no snap is running.
    pub fn handle_animation_frame(&mut self, now_ms: f64) {
        let Some(snap) = self.snap else {
            return;
        };
        let t = snap.fraction_at(now_ms);
        let current = snap.position_at(t);
        self.host.scroll_to(current);

        self.scroll_progress = (current / snap.max_scrollable).clamp(0.0, 1.0);
        self.sector_index = nearest_detent_index(self.scroll_progress);
        self.notify();

        if t < 1.0 {
            self.host.request_frame();
            return;
        }

        // Land exactly on the detent, no rounding drift.
        self.host.scroll_to(snap.target_scroll);
        self.scroll_progress = SECTORS[snap.target_index].detent_progress;
        self.sector_index = snap.target_index;
        self.snap = None;
        self.is_snapped = true;
        self.notify();
    }

    // ---------------- snapping ----------------

    fn snap_to(&mut self, target_index: usize) {
        let max = self.host.max_scrollable();
        if max <= 0.0 {
            return;
        }

        let start_scroll = self.host.scroll_y();
        let detent = SECTORS[target_index].detent_progress;
        let target_scroll = detent * max;

        if (target_scroll - start_scroll).abs() < self.config.snap_threshold_px {
            self.scroll_progress = detent;
            self.sector_index = target_index;
            self.is_snapped = true;
            self.notify();
            return;
        }

        let duration_ms = self
            .config
            .snap_duration(self.host.prefers_reduced_motion());
        self.snap = Some(SnapAnimation {
            target_index,
            start_scroll,
            target_scroll,
            max_scrollable: max,
            start_ms: self.host.now_ms(),
            duration_ms,
        });
        log::debug!(
            "[orbit] snap -> {} ({:.0}px over {:.0}ms)",
            sector_name(target_index),
            target_scroll,
            duration_ms
        );
        self.host.request_frame();
    }

    fn cancel_snap(&mut self) {
        if self.snap.take().is_some() {
            self.host.cancel_frame();
        }
        self.is_snapped = false;
    }

    // ---------------- events ----------------

    fn emit(&mut self, event: EngineEvent) {
        if let Some(sink) = self.sink.as_mut() {
            sink(&event);
        }
    }

    fn emit_telemetry_throttled(&mut self) {
        let now = self.host.wall_clock_ms();
        if let Some(last) = self.last_telemetry_ms {
            if now - last < self.config.telemetry_throttle_ms {
                return;
            }
        }
        self.last_telemetry_ms = Some(now);

        let payload = TelemetryPayload {
            scroll_progress: self.scroll_progress,
            sector_index: self.sector_index,
            sector_name: sector_name(self.sector_index),
            timecode_string: format_timecode(self.scroll_progress),
            is_snapped: self.is_snapped,
        };
        self.emit(EngineEvent::Telemetry(TelemetryEvent::new(payload, now)));
    }

    fn notify(&mut self) {
        self.store.publish(EngineSnapshot {
            system_state: self.system_state,
            sector_index: self.sector_index,
            sector_name: sector_name(self.sector_index),
            scroll_progress: self.scroll_progress,
            is_snapped: self.is_snapped,
            spectrum: self.spectrum,
            language: self.language,
        });
    }
}
