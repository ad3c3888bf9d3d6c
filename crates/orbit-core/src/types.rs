//! Value types shared by the engine, its hosts and the presentation layer.
//!
//! Wire names match what the browser side persists and receives: enum values
//! are SCREAMING case (`"PORTAL_READY"`, `"IR"`) and struct fields camelCase.

use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SystemState {
    Init,
    Idle,
    Scan,
    Focus,
    Cta,
    PortalReady,
}

impl SystemState {
    pub const ALL: [SystemState; 6] = [
        SystemState::Init,
        SystemState::Idle,
        SystemState::Scan,
        SystemState::Focus,
        SystemState::Cta,
        SystemState::PortalReady,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SystemState::Init => "INIT",
            SystemState::Idle => "IDLE",
            SystemState::Scan => "SCAN",
            SystemState::Focus => "FOCUS",
            SystemState::Cta => "CTA",
            SystemState::PortalReady => "PORTAL_READY",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SectorName {
    Hero,
    About,
    Projects,
    Cta,
}

impl SectorName {
    pub fn as_str(self) -> &'static str {
        match self {
            SectorName::Hero => "HERO",
            SectorName::About => "ABOUT",
            SectorName::Projects => "PROJECTS",
            SectorName::Cta => "CTA",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Language {
    En,
    Cs,
    De,
    Jp,
}

impl Language {
    /// Cycle order used by `cycle_language`.
    pub const ALL: [Language; 4] = [Language::En, Language::Cs, Language::De, Language::Jp];

    pub fn as_str(self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Cs => "CS",
            Language::De => "DE",
            Language::Jp => "JP",
        }
    }

    pub fn next(self) -> Language {
        let idx = Self::ALL.iter().position(|l| *l == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SpectrumMode {
    Color,
    Ir,
}

impl SpectrumMode {
    pub const ALL: [SpectrumMode; 2] = [SpectrumMode::Color, SpectrumMode::Ir];

    pub fn as_str(self) -> &'static str {
        match self {
            SpectrumMode::Color => "COLOR",
            SpectrumMode::Ir => "IR",
        }
    }

    /// Value written to the `data-spectrum` root attribute.
    pub fn as_attr(self) -> &'static str {
        match self {
            SpectrumMode::Color => "color",
            SpectrumMode::Ir => "ir",
        }
    }

    pub fn toggled(self) -> SpectrumMode {
        match self {
            SpectrumMode::Color => SpectrumMode::Ir,
            SpectrumMode::Ir => SpectrumMode::Color,
        }
    }
}

macro_rules! impl_wire_str {
    ($ty:ty, $kind:literal, $all:expr) => {
        impl FromStr for $ty {
            type Err = ParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                ($all)
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == s)
                    .ok_or_else(|| ParseError::UnknownValue {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

impl_wire_str!(SystemState, "system state", SystemState::ALL);
impl_wire_str!(Language, "language", Language::ALL);
impl_wire_str!(SpectrumMode, "spectrum mode", SpectrumMode::ALL);

impl fmt::Display for SectorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable point-in-time copy of everything the engine owns.
///
/// Rebuilt on every change and handed out behind an `Rc`; consumers detect
/// changes by pointer identity, never by comparing fields.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineSnapshot {
    pub system_state: SystemState,
    pub sector_index: usize,
    pub sector_name: SectorName,
    pub scroll_progress: f64,
    pub is_snapped: bool,
    pub spectrum: SpectrumMode,
    pub language: Language,
}

impl Default for EngineSnapshot {
    /// The snapshot served before the engine has published anything.
    fn default() -> Self {
        Self {
            system_state: SystemState::Init,
            sector_index: 0,
            sector_name: SectorName::Hero,
            scroll_progress: 0.0,
            is_snapped: true,
            spectrum: SpectrumMode::Color,
            language: Language::En,
        }
    }
}

/// One dispatched command as seen by the event sink. Never stored.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CommandEvent {
    #[serde(rename = "type")]
    pub kind: String,
    pub payload: serde_json::Value,
    pub timestamp: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TelemetryPayload {
    pub scroll_progress: f64,
    pub sector_index: usize,
    pub sector_name: SectorName,
    pub timecode_string: String,
    pub is_snapped: bool,
}

pub const TELEMETRY_UPDATE: &str = "TELEMETRY/UPDATE";

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TelemetryEvent {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub payload: TelemetryPayload,
    pub timestamp: f64,
}

impl TelemetryEvent {
    pub fn new(payload: TelemetryPayload, timestamp: f64) -> Self {
        Self {
            kind: TELEMETRY_UPDATE,
            payload,
            timestamp,
        }
    }
}

/// Everything the engine pushes to its event sink.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EngineEvent {
    Command(CommandEvent),
    Telemetry(TelemetryEvent),
}

impl EngineEvent {
    pub fn kind(&self) -> &str {
        match self {
            EngineEvent::Command(c) => &c.kind,
            EngineEvent::Telemetry(t) => t.kind,
        }
    }
}
