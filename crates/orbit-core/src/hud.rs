use crate::config::EngineConfig;
use crate::sectors::sector_name;
use crate::types::SectorName;

/// HUD opacity that dims after a stretch of user inactivity.
///
/// The host owns the actual timer: `wake` returns the delay after which it
/// should call `go_idle`, replacing any timer it already had pending.
#[derive(Clone, Debug)]
pub struct HudFader {
    idle_delay_ms: u32,
    active: f64,
    idle: f64,
    cta_active: f64,
    cta_idle: f64,
    sector_index: usize,
    is_idle: bool,
}

impl HudFader {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            idle_delay_ms: config.hud_idle_delay_ms,
            active: config.hud_active_opacity,
            idle: config.hud_idle_opacity,
            cta_active: config.hud_cta_active_opacity,
            cta_idle: config.hud_cta_idle_opacity,
            sector_index: 0,
            is_idle: false,
        }
    }

    fn in_cta(&self) -> bool {
        sector_name(self.sector_index) == SectorName::Cta
    }

    /// Any interaction: back to active opacity. Returns the idle delay.
    pub fn wake(&mut self) -> u32 {
        self.is_idle = false;
        self.idle_delay_ms
    }

    pub fn go_idle(&mut self) {
        self.is_idle = true;
    }

    /// Track the active sector; a change counts as a wake.
    pub fn set_sector(&mut self, sector_index: usize) -> Option<u32> {
        if sector_index == self.sector_index {
            return None;
        }
        self.sector_index = sector_index;
        Some(self.wake())
    }

    pub fn is_idle(&self) -> bool {
        self.is_idle
    }

    pub fn opacity(&self) -> f64 {
        match (self.in_cta(), self.is_idle) {
            (true, true) => self.cta_idle,
            (true, false) => self.cta_active,
            (false, true) => self.idle,
            (false, false) => self.active,
        }
    }
}
