#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

mod api;
mod constants;
mod dom;
mod echo;
mod events;
mod host;
mod hud;
mod storage;

pub use api::OrbitHandle;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("orbit-web starting");
    Ok(())
}

/// Build the engine for the current page and bring it to IDLE.
/// The page calls `destroy()` on the returned handle when it unmounts.
#[wasm_bindgen]
pub fn mount() -> Result<OrbitHandle, JsValue> {
    OrbitHandle::mount().map_err(|e| {
        log::error!("mount error: {:?}", e);
        JsValue::from_str(&format!("{:#}", e))
    })
}
