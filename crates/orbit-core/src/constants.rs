// Engine timing and HUD tuning defaults shared by every host.

// Snap animation
pub const SNAP_DURATION_MS: f64 = 600.0;
pub const SNAP_DURATION_REDUCED_MS: f64 = 150.0; // prefers-reduced-motion
pub const SNAP_THRESHOLD_PX: f64 = 2.0; // closer than this jumps instead of animating

// Scroll inactivity before the magnetic snap kicks in
pub const IDLE_SCROLL_MS: u32 = 120;

// HUD fade
pub const HUD_IDLE_DELAY_MS: u32 = 4500;
pub const HUD_ACTIVE_OPACITY: f64 = 1.0;
pub const HUD_IDLE_OPACITY: f64 = 0.5;
pub const HUD_CTA_ACTIVE_OPACITY: f64 = 0.6; // CTA sector keeps the viewport quieter
pub const HUD_CTA_IDLE_OPACITY: f64 = 0.25;

// Telemetry
pub const TELEMETRY_THROTTLE_MS: f64 = 60.0; // ~16 fps

// Timecode display
pub const TIMECODE_SPAN_SEC: f64 = 3600.0; // progress 1.0 == one hour
pub const TIMECODE_FRAMES_PER_SEC: f64 = 24.0;

// Persistent preference keys are `<namespace>-spectrum` / `<namespace>-lang`
pub const STORAGE_NAMESPACE: &str = "orbit";
