// Pure key -> action mapping, kept free of web_sys so host tests can include it.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    PrevSector,
    NextSector,
    GoToSector(usize),
    ToggleSpectrum,
    CycleLanguage,
    ClearFocus,
}

#[inline]
pub fn sector_for_digit(key: &str) -> Option<usize> {
    match key {
        "1" => Some(0),
        "2" => Some(1),
        "3" => Some(2),
        "4" => Some(3),
        _ => None,
    }
}

#[inline]
pub fn action_for_key(key: &str) -> Option<KeyAction> {
    if let Some(index) = sector_for_digit(key) {
        return Some(KeyAction::GoToSector(index));
    }
    match key {
        "ArrowLeft" | "a" | "A" => Some(KeyAction::PrevSector),
        "ArrowRight" | "d" | "D" => Some(KeyAction::NextSector),
        "i" | "I" => Some(KeyAction::ToggleSpectrum),
        "l" | "L" => Some(KeyAction::CycleLanguage),
        "Escape" => Some(KeyAction::ClearFocus),
        _ => None,
    }
}

/// Keys typed into these controls never reach the shell.
#[inline]
pub fn is_text_entry_tag(tag: &str) -> bool {
    ["INPUT", "TEXTAREA", "SELECT"]
        .iter()
        .any(|t| t.eq_ignore_ascii_case(tag))
}
