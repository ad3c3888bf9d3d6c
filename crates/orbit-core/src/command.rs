use crate::error::ParseError;
use crate::types::{Language, SpectrumMode, SystemState};
use serde_json::Value;

pub const GO_TO_SECTOR: &str = "COMMAND/GO_TO_SECTOR";
pub const NEXT_SECTOR: &str = "COMMAND/NEXT_SECTOR";
pub const PREV_SECTOR: &str = "COMMAND/PREV_SECTOR";
pub const SET_SPECTRUM: &str = "COMMAND/SET_SPECTRUM";
pub const SET_LANGUAGE: &str = "COMMAND/SET_LANGUAGE";
pub const SET_STATE: &str = "COMMAND/SET_STATE";

/// Every state mutation the engine accepts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    /// Snap toward a sector; out-of-range indices wrap.
    GoToSector(i64),
    NextSector,
    PrevSector,
    SetSpectrum(SpectrumMode),
    SetLanguage(Language),
    /// Overwrites the lifecycle state without transition checks.
    SetState(SystemState),
}

impl Command {
    pub fn kind(&self) -> &'static str {
        match self {
            Command::GoToSector(_) => GO_TO_SECTOR,
            Command::NextSector => NEXT_SECTOR,
            Command::PrevSector => PREV_SECTOR,
            Command::SetSpectrum(_) => SET_SPECTRUM,
            Command::SetLanguage(_) => SET_LANGUAGE,
            Command::SetState(_) => SET_STATE,
        }
    }

    pub fn payload(&self) -> Value {
        match self {
            Command::GoToSector(index) => Value::from(*index),
            Command::NextSector | Command::PrevSector => Value::Null,
            Command::SetSpectrum(mode) => Value::from(mode.as_str()),
            Command::SetLanguage(lang) => Value::from(lang.as_str()),
            Command::SetState(state) => Value::from(state.as_str()),
        }
    }

    /// Decode a `(type, payload)` pair arriving from outside Rust.
    pub fn parse(kind: &str, payload: &Value) -> Result<Self, ParseError> {
        match kind {
            GO_TO_SECTOR => {
                let index = payload
                    .as_f64()
                    .filter(|n| n.is_finite())
                    .ok_or_else(|| ParseError::InvalidPayload {
                        command: GO_TO_SECTOR,
                        reason: format!("expected a number, got {payload}"),
                    })?;
                Ok(Command::GoToSector(index.trunc() as i64))
            }
            NEXT_SECTOR => Ok(Command::NextSector),
            PREV_SECTOR => Ok(Command::PrevSector),
            SET_SPECTRUM => Ok(Command::SetSpectrum(parse_str(SET_SPECTRUM, payload)?)),
            SET_LANGUAGE => Ok(Command::SetLanguage(parse_str(SET_LANGUAGE, payload)?)),
            SET_STATE => Ok(Command::SetState(parse_str(SET_STATE, payload)?)),
            other => Err(ParseError::UnknownCommand(other.to_string())),
        }
    }
}

fn parse_str<T>(command: &'static str, payload: &Value) -> Result<T, ParseError>
where
    T: std::str::FromStr<Err = ParseError>,
{
    match payload.as_str() {
        Some(raw) => raw.parse(),
        None => Err(ParseError::InvalidPayload {
            command,
            reason: format!("expected a string, got {payload}"),
        }),
    }
}
