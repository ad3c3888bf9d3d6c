use crate::constants::*;
use crate::types::{Language, SpectrumMode};

/// Runtime tuning for one engine instance.
#[derive(Clone, Debug, PartialEq)]
pub struct EngineConfig {
    /// Used when nothing valid is persisted.
    pub language: Language,
    pub spectrum: SpectrumMode,
    pub snap_duration_ms: f64,
    pub snap_duration_reduced_ms: f64,
    pub snap_threshold_px: f64,
    pub idle_scroll_ms: u32,
    pub hud_idle_delay_ms: u32,
    pub hud_active_opacity: f64,
    pub hud_idle_opacity: f64,
    pub hud_cta_active_opacity: f64,
    pub hud_cta_idle_opacity: f64,
    pub telemetry_throttle_ms: f64,
    pub storage_namespace: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            language: Language::En,
            spectrum: SpectrumMode::Color,
            snap_duration_ms: SNAP_DURATION_MS,
            snap_duration_reduced_ms: SNAP_DURATION_REDUCED_MS,
            snap_threshold_px: SNAP_THRESHOLD_PX,
            idle_scroll_ms: IDLE_SCROLL_MS,
            hud_idle_delay_ms: HUD_IDLE_DELAY_MS,
            hud_active_opacity: HUD_ACTIVE_OPACITY,
            hud_idle_opacity: HUD_IDLE_OPACITY,
            hud_cta_active_opacity: HUD_CTA_ACTIVE_OPACITY,
            hud_cta_idle_opacity: HUD_CTA_IDLE_OPACITY,
            telemetry_throttle_ms: TELEMETRY_THROTTLE_MS,
            storage_namespace: STORAGE_NAMESPACE.to_string(),
        }
    }
}

impl EngineConfig {
    pub fn snap_duration(&self, reduced_motion: bool) -> f64 {
        if reduced_motion {
            self.snap_duration_reduced_ms
        } else {
            self.snap_duration_ms
        }
    }
}
