// Fake host with a manual clock and manually pumped timers/frames.

#![allow(dead_code)]

use orbit_core::spectrum::Token;
use orbit_core::{
    EngineConfig, Host, KeyValueStore, MemoryStore, OrbitEngine, SpectrumMode, StorageError,
};

pub const FRAME_MS: f64 = 16.0;

#[derive(Debug)]
pub struct FakeHost {
    pub now: f64,
    pub wall: f64,
    pub y: f64,
    pub max: f64,
    pub reduced_motion: bool,
    pub attached: bool,
    pub attach_count: u32,
    pub idle_timer: Option<u32>,
    pub frame_requested: bool,
    pub applied: Vec<(SpectrumMode, usize)>,
}

impl FakeHost {
    pub fn new(max: f64) -> Self {
        Self {
            now: 1000.0,
            wall: 1_700_000_000_000.0,
            y: 0.0,
            max,
            reduced_motion: false,
            attached: false,
            attach_count: 0,
            idle_timer: None,
            frame_requested: false,
            applied: Vec::new(),
        }
    }
}

impl Host for FakeHost {
    fn now_ms(&self) -> f64 {
        self.now
    }
    fn wall_clock_ms(&self) -> f64 {
        self.wall
    }
    fn scroll_y(&self) -> f64 {
        self.y
    }
    fn max_scrollable(&self) -> f64 {
        self.max
    }
    fn scroll_to(&mut self, y: f64) {
        self.y = y;
    }
    fn prefers_reduced_motion(&self) -> bool {
        self.reduced_motion
    }
    fn apply_spectrum(&mut self, mode: SpectrumMode, tokens: &[Token]) {
        self.applied.push((mode, tokens.len()));
    }
    fn attach_scroll_listener(&mut self) {
        self.attached = true;
        self.attach_count += 1;
    }
    fn detach_scroll_listener(&mut self) {
        self.attached = false;
    }
    fn set_idle_timer(&mut self, delay_ms: u32) {
        self.idle_timer = Some(delay_ms);
    }
    fn clear_idle_timer(&mut self) {
        self.idle_timer = None;
    }
    fn request_frame(&mut self) {
        self.frame_requested = true;
    }
    fn cancel_frame(&mut self) {
        self.frame_requested = false;
    }
}

/// Store whose backend is gone (private mode, quota, ...).
pub struct FailingStore;

impl KeyValueStore for FailingStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }
    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Backend("quota exceeded".into()))
    }
}

pub type TestEngine = OrbitEngine<FakeHost, MemoryStore>;

pub fn engine(max: f64) -> TestEngine {
    engine_with_store(max, MemoryStore::new())
}

pub fn engine_with_store(max: f64, store: MemoryStore) -> TestEngine {
    OrbitEngine::new(FakeHost::new(max), store, EngineConfig::default())
}

/// User scroll to `y` pixels.
pub fn scroll<S: KeyValueStore>(engine: &mut OrbitEngine<FakeHost, S>, y: f64) {
    engine.host_mut().y = y;
    engine.handle_scroll();
}

/// Fire the idle timer if one is armed.
pub fn fire_idle<S: KeyValueStore>(engine: &mut OrbitEngine<FakeHost, S>) -> bool {
    if engine.host_mut().idle_timer.take().is_some() {
        engine.handle_idle_timeout();
        true
    } else {
        false
    }
}

/// Run one pending animation frame `step_ms` after the previous one.
pub fn step_frame<S: KeyValueStore>(engine: &mut OrbitEngine<FakeHost, S>, step_ms: f64) -> bool {
    if !engine.host().frame_requested {
        return false;
    }
    let host = engine.host_mut();
    host.frame_requested = false;
    host.now += step_ms;
    let now = host.now;
    engine.handle_animation_frame(now);
    true
}

/// Pump frames until the snap loop stops rescheduling. Returns the frame count.
pub fn run_frames<S: KeyValueStore>(engine: &mut OrbitEngine<FakeHost, S>, step_ms: f64) -> usize {
    let mut frames = 0;
    while step_frame(engine, step_ms) {
        frames += 1;
        assert!(frames < 10_000, "snap never finished");
    }
    frames
}
