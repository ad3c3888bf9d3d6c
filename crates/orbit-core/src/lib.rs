//! Platform-free core of the orbit shell: sector table, labels, spectrum
//! tokens, persisted preferences and the scroll-orbit engine.

pub mod command;
pub mod config;
pub mod constants;
pub mod dictionary;
pub mod engine;
pub mod error;
pub mod external;
pub mod host;
pub mod hud;
pub mod prefs;
pub mod sectors;
pub mod snap;
pub mod spectrum;
pub mod timecode;
pub mod types;
pub mod views;

pub use command::Command;
pub use config::EngineConfig;
pub use engine::*;
pub use error::*;
pub use external::*;
pub use host::Host;
pub use hud::HudFader;
pub use prefs::*;
pub use sectors::*;
pub use types::*;
pub use views::*;
