// Pure bookkeeping for scroll events caused by our own scroll_to().
// Kept free of web_sys so host tests can include it.

/// The position we last scrolled to, and when.
///
/// An echo only matches a scroll event that lands within `tolerance_px` of
/// it and arrives within `window_ms`; anything older is stale (the page never
/// moved, so no event came back) and is ignored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollEcho {
    tolerance_px: f64,
    window_ms: f64,
    pending: Option<(f64, f64)>,
}

impl ScrollEcho {
    pub fn new(tolerance_px: f64, window_ms: f64) -> Self {
        Self {
            tolerance_px,
            window_ms,
            pending: None,
        }
    }

    pub fn record(&mut self, y: f64, now_ms: f64) {
        self.pending = Some((y, now_ms));
    }

    pub fn clear(&mut self) {
        self.pending = None;
    }

    /// Consume the pending echo; true if the scroll event at `y` is ours.
    pub fn take_match(&mut self, y: f64, now_ms: f64) -> bool {
        match self.pending.take() {
            Some((echo_y, at)) => {
                now_ms - at <= self.window_ms && (y - echo_y).abs() <= self.tolerance_px
            }
            None => false,
        }
    }
}
