/// Classic ease-in-out cubic on `t` in \[0, 1\].
#[inline]
pub fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// An in-flight magnetic snap toward one sector's detent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SnapAnimation {
    pub target_index: usize,
    pub start_scroll: f64,
    pub target_scroll: f64,
    pub max_scrollable: f64,
    pub start_ms: f64,
    pub duration_ms: f64,
}

impl SnapAnimation {
    /// Elapsed fraction at `now_ms`, clamped to \[0, 1\].
    pub fn fraction_at(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Interpolated pixel position for an elapsed fraction.
    pub fn position_at(&self, t: f64) -> f64 {
        self.start_scroll + (self.target_scroll - self.start_scroll) * ease_in_out_cubic(t)
    }
}
