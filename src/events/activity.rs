use crate::constants::ACTIVITY_EVENTS;
use crate::dom::ListenerSet;
use crate::hud::HudController;
use web_sys as web;

/// Any pointer, touch, key or scroll activity wakes the HUD.
pub fn wire_activity(listeners: &mut ListenerSet, window: &web::Window, hud: &HudController) {
    for event in ACTIVITY_EVENTS {
        let hud = hud.clone();
        listeners.add_passive(window.as_ref(), event, move |_| hud.wake());
    }
}
