//! HUD label dictionary. English is the universal fallback.

use crate::types::Language;

/// One symbolic key with its per-language strings.
pub type LabelEntry = (&'static str, &'static [(Language, &'static str)]);

use crate::types::Language::{Cs, De, En, Jp};

pub const LABELS: &[LabelEntry] = &[
    (
        "SYSTEM_LINK",
        &[(En, "STABLE"), (Cs, "STABILNÍ"), (De, "STABIL"), (Jp, "安定")],
    ),
    (
        "PROBE_STATE",
        &[(En, "IDLE"), (Cs, "KLID"), (De, "LEERLAUF"), (Jp, "待機")],
    ),
    (
        "SECTOR_LABEL",
        &[(En, "SECTOR"), (Cs, "SEKTOR"), (De, "SEKTOR"), (Jp, "セクター")],
    ),
    (
        "SPECTRUM",
        &[
            (En, "SPECTRUM"),
            (Cs, "SPEKTRUM"),
            (De, "SPEKTRUM"),
            (Jp, "スペクトル"),
        ],
    ),
    (
        "LANG",
        &[(En, "LANG"), (Cs, "JAZYK"), (De, "SPRACHE"), (Jp, "言語")],
    ),
    (
        "TRANSMISSION_SENT",
        &[
            (En, "TRANSMISSION_SENT"),
            (Cs, "PRENOS_ODESLAN"),
            (De, "UBERTRAGUNG_GESENDET"),
            (Jp, "送信完了"),
        ],
    ),
    (
        "CHANNEL_OPEN",
        &[
            (En, "CHANNEL_OPEN"),
            (Cs, "KANAL_OTEVRENY"),
            (De, "KANAL_OFFEN"),
            (Jp, "チャネル開"),
        ],
    ),
    (
        "ANOMALY_DETECTED",
        &[
            (En, "ANOMALY_DETECTED"),
            (Cs, "ANOMALIE_DETEKOVANA"),
            (De, "ANOMALIE_ERKANNT"),
            (Jp, "異常検出"),
        ],
    ),
    (
        "PREV_SECTOR",
        &[
            (En, "Previous sector"),
            (Cs, "Předchozí sektor"),
            (De, "Vorheriger Sektor"),
            (Jp, "前のセクター"),
        ],
    ),
    (
        "NEXT_SECTOR",
        &[
            (En, "Next sector"),
            (Cs, "Další sektor"),
            (De, "Nächster Sektor"),
            (Jp, "次のセクター"),
        ],
    ),
    (
        "GO_TO_SECTOR",
        &[
            (En, "Go to"),
            (Cs, "Přejít na"),
            (De, "Gehe zu"),
            (Jp, "移動"),
        ],
    ),
    (
        "SWITCH_SPECTRUM",
        &[
            (En, "Switch spectrum mode"),
            (Cs, "Přepnout spektrální mód"),
            (De, "Spektralmodus wechseln"),
            (Jp, "スペクトルモード切替"),
        ],
    ),
    (
        "CYCLE_LANG",
        &[
            (En, "Cycle language"),
            (Cs, "Přepnout jazyk"),
            (De, "Sprache wechseln"),
            (Jp, "言語切替"),
        ],
    ),
];

/// Look `key` up in `table`: requested language, then English, then the key itself.
pub fn translate_in<'a>(table: &[LabelEntry], key: &'a str, language: Language) -> &'a str {
    let Some((_, strings)) = table.iter().find(|(k, _)| *k == key) else {
        return key;
    };
    let lookup = |lang: Language| -> Option<&'a str> {
        strings.iter().find(|(l, _)| *l == lang).map(|(_, s)| *s)
    };
    lookup(language).or_else(|| lookup(Language::En)).unwrap_or(key)
}

#[inline]
pub fn translate<'a>(key: &'a str, language: Language) -> &'a str {
    translate_in(LABELS, key, language)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_label_has_english() {
        for (key, strings) in LABELS {
            assert!(strings.iter().any(|(l, _)| *l == En), "{key} has no EN");
        }
    }

    #[test]
    fn lookup_and_fallbacks() {
        assert_eq!(translate("SYSTEM_LINK", De), "STABIL");
        assert_eq!(translate("SYSTEM_LINK", Jp), "安定");
        assert_eq!(translate("NO_SUCH_KEY", Cs), "NO_SUCH_KEY");

        const ENGLISH_ONLY: &[LabelEntry] = &[("GREETING", &[(En, "HELLO")])];
        assert_eq!(translate_in(ENGLISH_ONLY, "GREETING", Jp), "HELLO");
    }
}
