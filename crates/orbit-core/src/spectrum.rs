//! Named style tokens per spectrum mode. Markup only refers to the names.

use crate::types::SpectrumMode;

pub type Token = (&'static str, &'static str);

pub const COLOR_TOKENS: [Token; 10] = [
    ("--hud-ink", "rgba(64, 235, 255, 0.30)"),
    ("--hud-accent", "#40ebff"),
    ("--hud-accent-dim", "rgba(64, 235, 255, 0.15)"),
    ("--hud-grid", "rgba(64, 235, 255, 0.04)"),
    ("--hud-glow", "rgba(64, 235, 255, 0.20)"),
    ("--hud-text", "rgba(203, 235, 229, 0.80)"),
    ("--hud-text-dim", "rgba(203, 235, 229, 0.35)"),
    ("--world-tint", "transparent"),
    ("--world-bg", "#040b0a"),
    ("--world-radial", "rgba(64, 235, 255, 0.03)"),
];

pub const IR_TOKENS: [Token; 10] = [
    ("--hud-ink", "rgba(255, 200, 180, 0.45)"),
    ("--hud-accent", "#d44a3a"),
    ("--hud-accent-dim", "rgba(212, 74, 58, 0.25)"),
    ("--hud-grid", "rgba(212, 74, 58, 0.06)"),
    ("--hud-glow", "rgba(212, 74, 58, 0.15)"),
    ("--hud-text", "rgba(240, 210, 200, 0.8)"),
    ("--hud-text-dim", "rgba(240, 210, 200, 0.35)"),
    ("--world-tint", "rgba(180, 40, 30, 0.08)"),
    ("--world-bg", "#0a0606"),
    ("--world-radial", "rgba(212, 74, 58, 0.04)"),
];

pub fn spectrum_tokens(mode: SpectrumMode) -> &'static [Token] {
    match mode {
        SpectrumMode::Color => &COLOR_TOKENS,
        SpectrumMode::Ir => &IR_TOKENS,
    }
}
