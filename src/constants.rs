// DOM hooks and browser-side tuning for the web front-end.

// HUD elements
pub const HUD_ROOT_ID: &str = "hud";
pub const HUD_SECTOR_ID: &str = "hud-sector";
pub const HUD_TIMECODE_ID: &str = "hud-timecode";
pub const HUD_SPECTRUM_ID: &str = "hud-spectrum";
pub const HUD_LANG_ID: &str = "hud-lang";
pub const HUD_IDLE_CLASS: &str = "hud-idle";

// Controls
pub const PREV_BUTTON_ID: &str = "hud-prev";
pub const NEXT_BUTTON_ID: &str = "hud-next";
pub const SPECTRUM_BUTTON_ID: &str = "hud-spectrum-toggle";
pub const LANG_BUTTON_ID: &str = "hud-lang-cycle";

// Attributes
pub const SECTOR_BUTTON_ATTR: &str = "data-orbit-sector"; // value: sector index
pub const LABEL_ATTR: &str = "data-label"; // text content <- label lookup
pub const ARIA_LABEL_ATTR: &str = "data-aria-label"; // aria-label <- label lookup
pub const SNAPPED_ATTR: &str = "data-snapped";
pub const SPECTRUM_ATTR: &str = "data-spectrum";

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// Our own scroll_to() comes back as a scroll event; ignore it within this slack
pub const SCROLL_ECHO_TOLERANCE_PX: f64 = 1.0;
pub const SCROLL_ECHO_WINDOW_MS: f64 = 100.0; // the echo arrives within a frame or two

// Interactions that wake the HUD
pub const ACTIVITY_EVENTS: [&str; 5] = ["scroll", "mousemove", "pointerdown", "touchstart", "keydown"];
