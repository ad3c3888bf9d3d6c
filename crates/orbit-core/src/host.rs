use crate::spectrum::Token;
use crate::types::SpectrumMode;

/// Everything the engine needs from its environment.
///
/// A browser host maps these onto `window`/`document`; tests drive a fake
/// with a manual clock. The host calls back into the engine through
/// `handle_scroll`, `handle_idle_timeout` and `handle_animation_frame`.
///
/// At most one idle timer and one animation frame are ever outstanding:
/// arming either one replaces whatever was pending.
pub trait Host {
    /// Monotonic milliseconds, same timebase as animation frame timestamps.
    fn now_ms(&self) -> f64;
    /// Wall-clock milliseconds since the Unix epoch (event timestamps).
    fn wall_clock_ms(&self) -> f64;

    fn scroll_y(&self) -> f64;
    /// Document height minus viewport height; `<= 0` when nothing scrolls.
    fn max_scrollable(&self) -> f64;
    fn scroll_to(&mut self, y: f64);
    fn prefers_reduced_motion(&self) -> bool;

    /// Publish the spectrum's tokens as root style variables and set
    /// `data-spectrum` to the lowercase mode name.
    fn apply_spectrum(&mut self, mode: SpectrumMode, tokens: &[Token]);

    fn attach_scroll_listener(&mut self);
    /// Must be a no-op when nothing is attached.
    fn detach_scroll_listener(&mut self);

    fn set_idle_timer(&mut self, delay_ms: u32);
    fn clear_idle_timer(&mut self);

    fn request_frame(&mut self);
    fn cancel_frame(&mut self);
}
