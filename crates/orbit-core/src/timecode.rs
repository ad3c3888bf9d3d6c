use crate::constants::{TIMECODE_FRAMES_PER_SEC, TIMECODE_SPAN_SEC};

/// Map scroll progress onto an `HH:MM:SS:FF` display timecode.
///
/// Full progress spans one hour; `FF` is a synthetic 24-frame sub-second.
pub fn format_timecode(progress: f64) -> String {
    let total = progress * TIMECODE_SPAN_SEC;
    let h = (total / 3600.0).floor();
    let m = ((total % 3600.0) / 60.0).floor();
    let s = (total % 60.0).floor();
    let f = ((total % 1.0) * TIMECODE_FRAMES_PER_SEC).floor();
    format!("{:02}:{:02}:{:02}:{:02}", h as u64, m as u64, s as u64, f as u64)
}
