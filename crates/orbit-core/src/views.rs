//! Read-only projections of a snapshot, one per concern.
//!
//! Each view only builds the commands that belong to its concern; the caller
//! hands them to `OrbitEngine::dispatch`.

use crate::command::Command;
use crate::timecode::format_timecode;
use crate::types::{EngineSnapshot, Language, SectorName, SpectrumMode, SystemState};

#[derive(Clone, Debug, PartialEq)]
pub struct OrbitView {
    pub scroll_progress: f64,
    pub sector_index: usize,
    pub sector_name: SectorName,
    pub timecode: String,
    pub is_snapped: bool,
}

impl OrbitView {
    pub fn from_snapshot(snapshot: &EngineSnapshot) -> Self {
        Self {
            scroll_progress: snapshot.scroll_progress,
            sector_index: snapshot.sector_index,
            sector_name: snapshot.sector_name,
            timecode: format_timecode(snapshot.scroll_progress),
            is_snapped: snapshot.is_snapped,
        }
    }

    pub fn go_to_sector(&self, index: i64) -> Command {
        Command::GoToSector(index)
    }

    pub fn next_sector(&self) -> Command {
        Command::NextSector
    }

    pub fn prev_sector(&self) -> Command {
        Command::PrevSector
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpectrumView {
    pub spectrum: SpectrumMode,
}

impl SpectrumView {
    pub fn from_snapshot(snapshot: &EngineSnapshot) -> Self {
        Self {
            spectrum: snapshot.spectrum,
        }
    }

    pub fn set_spectrum(&self, mode: SpectrumMode) -> Command {
        Command::SetSpectrum(mode)
    }

    pub fn toggle_spectrum(&self) -> Command {
        Command::SetSpectrum(self.spectrum.toggled())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LanguageView {
    pub language: Language,
}

impl LanguageView {
    pub fn from_snapshot(snapshot: &EngineSnapshot) -> Self {
        Self {
            language: snapshot.language,
        }
    }

    pub fn set_language(&self, language: Language) -> Command {
        Command::SetLanguage(language)
    }

    pub fn cycle_language(&self) -> Command {
        Command::SetLanguage(self.language.next())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SystemStateView {
    pub system_state: SystemState,
}

impl SystemStateView {
    pub fn from_snapshot(snapshot: &EngineSnapshot) -> Self {
        Self {
            system_state: snapshot.system_state,
        }
    }

    pub fn set_system_state(&self, state: SystemState) -> Command {
        Command::SetState(state)
    }
}
