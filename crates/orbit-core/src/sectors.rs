//! The ordered sector table and the detent math built on it.

use crate::types::SectorName;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectorDef {
    pub name: SectorName,
    /// Scroll-progress fraction the sector snaps to.
    pub detent_progress: f64,
    /// SVG path data for the HUD sector button.
    pub icon_key: &'static str,
}

// Detents increase monotonically; the last one sits at 0.75, leaving the
// final quarter of the page to the CTA sector.
pub const SECTORS: [SectorDef; 4] = [
    SectorDef {
        name: SectorName::Hero,
        detent_progress: 0.0,
        icon_key: "M12 2L22 20H2L12 2Z",
    },
    SectorDef {
        name: SectorName::About,
        detent_progress: 0.25,
        icon_key: "M12 4a8 8 0 100 16 8 8 0 000-16z",
    },
    SectorDef {
        name: SectorName::Projects,
        detent_progress: 0.5,
        icon_key: "M4 4h16v16H4V4z",
    },
    SectorDef {
        name: SectorName::Cta,
        detent_progress: 0.75,
        icon_key: "M12 2l3 7h7l-5.5 4.5 2 7L12 16l-6.5 4.5 2-7L2 9h7l3-7z",
    },
];

pub const SECTOR_COUNT: usize = SECTORS.len();

/// Index of the detent closest to `progress`. Ties go to the earlier sector.
pub fn nearest_detent_index(progress: f64) -> usize {
    let mut best = 0usize;
    let mut best_dist = (progress - SECTORS[0].detent_progress).abs();
    for (i, sector) in SECTORS.iter().enumerate().skip(1) {
        let dist = (progress - sector.detent_progress).abs();
        if dist < best_dist {
            best_dist = dist;
            best = i;
        }
    }
    best
}

/// Wrap any (possibly negative) index into `0..SECTOR_COUNT`.
#[inline]
pub fn wrap_sector_index(index: i64) -> usize {
    index.rem_euclid(SECTOR_COUNT as i64) as usize
}

#[inline]
pub fn sector_name(index: usize) -> SectorName {
    SECTORS[index % SECTOR_COUNT].name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detents_are_monotonic_from_zero() {
        assert_eq!(SECTORS[0].detent_progress, 0.0);
        for pair in SECTORS.windows(2) {
            assert!(pair[1].detent_progress > pair[0].detent_progress);
        }
    }

    #[test]
    fn midpoint_ties_resolve_to_lower_index() {
        assert_eq!(nearest_detent_index(0.125), 0);
        assert_eq!(nearest_detent_index(0.375), 1);
        assert_eq!(nearest_detent_index(0.625), 2);
    }

    #[test]
    fn wrap_handles_negative_and_overflow() {
        assert_eq!(wrap_sector_index(-1), 3);
        assert_eq!(wrap_sector_index(-5), 3);
        assert_eq!(wrap_sector_index(5), 1);
        assert_eq!(wrap_sector_index(4), 0);
    }
}
