pub mod activity;
pub mod controls;
pub mod keyboard;
pub mod keymap;

pub use activity::wire_activity;
pub use controls::wire_controls;
pub use keyboard::wire_global_keydown;

use crate::host::{Engine, SharedEngine};
use orbit_core::Command;

/// Dispatch from a DOM handler; drops the command if the engine is mid-update.
pub(crate) fn dispatch(engine: &SharedEngine, command: Command) {
    with_engine(engine, |eng| eng.dispatch(command));
}

pub(crate) fn with_engine(engine: &SharedEngine, f: impl FnOnce(&mut Engine)) {
    match engine.try_borrow_mut() {
        Ok(mut eng) => f(&mut eng),
        Err(_) => log::warn!("[orbit] engine busy; input dropped"),
    }
}
