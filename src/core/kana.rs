//! Fixed syllable-to-glyph table. Data only; the drill logic never
//! constructs or mutates glyphs at runtime.

/// Identifier for one phonetic unit, drawn from the closed set below.
pub type SyllableKey = &'static str;

/// The two rendered forms of a syllable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub hiragana: &'static str,
    pub katakana: &'static str,
}

impl Glyph {
    const fn new(hiragana: &'static str, katakana: &'static str) -> Self {
        Self { hiragana, katakana }
    }
}

#[rustfmt::skip]
static GLYPHS: &[(SyllableKey, Glyph)] = &[
    ("a", Glyph::new("あ", "ア")), ("i", Glyph::new("い", "イ")),
    ("u", Glyph::new("う", "ウ")), ("e", Glyph::new("え", "エ")),
    ("o", Glyph::new("お", "オ")),
    ("ka", Glyph::new("か", "カ")), ("ki", Glyph::new("き", "キ")),
    ("ku", Glyph::new("く", "ク")), ("ke", Glyph::new("け", "ケ")),
    ("ko", Glyph::new("こ", "コ")),
    ("sa", Glyph::new("さ", "サ")), ("shi", Glyph::new("し", "シ")),
    ("su", Glyph::new("す", "ス")), ("se", Glyph::new("せ", "セ")),
    ("so", Glyph::new("そ", "ソ")),
    ("ta", Glyph::new("た", "タ")), ("chi", Glyph::new("ち", "チ")),
    ("tsu", Glyph::new("つ", "ツ")), ("te", Glyph::new("て", "テ")),
    ("to", Glyph::new("と", "ト")),
    ("na", Glyph::new("な", "ナ")), ("ni", Glyph::new("に", "ニ")),
    ("nu", Glyph::new("ぬ", "ヌ")), ("ne", Glyph::new("ね", "ネ")),
    ("no", Glyph::new("の", "ノ")),
    ("ha", Glyph::new("は", "ハ")), ("hi", Glyph::new("ひ", "ヒ")),
    ("fu", Glyph::new("ふ", "フ")), ("he", Glyph::new("へ", "ヘ")),
    ("ho", Glyph::new("ほ", "ホ")),
    ("ma", Glyph::new("ま", "マ")), ("mi", Glyph::new("み", "ミ")),
    ("mu", Glyph::new("む", "ム")), ("me", Glyph::new("め", "メ")),
    ("mo", Glyph::new("も", "モ")),
    ("ya", Glyph::new("や", "ヤ")), ("yu", Glyph::new("ゆ", "ユ")),
    ("yo", Glyph::new("よ", "ヨ")),
    ("ra", Glyph::new("ら", "ラ")), ("ri", Glyph::new("り", "リ")),
    ("ru", Glyph::new("る", "ル")), ("re", Glyph::new("れ", "レ")),
    ("ro", Glyph::new("ろ", "ロ")),
    ("wa", Glyph::new("わ", "ワ")), ("wo", Glyph::new("を", "ヲ")),
    ("n", Glyph::new("ん", "ン")),
    ("ga", Glyph::new("が", "ガ")), ("gi", Glyph::new("ぎ", "ギ")),
    ("gu", Glyph::new("ぐ", "グ")), ("ge", Glyph::new("げ", "ゲ")),
    ("go", Glyph::new("ご", "ゴ")),
    ("za", Glyph::new("ざ", "ザ")), ("ji", Glyph::new("じ", "ジ")),
    ("zu", Glyph::new("ず", "ズ")), ("ze", Glyph::new("ぜ", "ゼ")),
    ("zo", Glyph::new("ぞ", "ゾ")),
    // di/du spell ぢ/づ so every key stays unique against ji/zu.
    ("da", Glyph::new("だ", "ダ")), ("di", Glyph::new("ぢ", "ヂ")),
    ("du", Glyph::new("づ", "ヅ")), ("de", Glyph::new("で", "デ")),
    ("do", Glyph::new("ど", "ド")),
    ("ba", Glyph::new("ば", "バ")), ("bi", Glyph::new("び", "ビ")),
    ("bu", Glyph::new("ぶ", "ブ")), ("be", Glyph::new("べ", "ベ")),
    ("bo", Glyph::new("ぼ", "ボ")),
    ("pa", Glyph::new("ぱ", "パ")), ("pi", Glyph::new("ぴ", "ピ")),
    ("pu", Glyph::new("ぷ", "プ")), ("pe", Glyph::new("ぺ", "ペ")),
    ("po", Glyph::new("ぽ", "ポ")),
];

pub fn glyph(key: &str) -> Option<&'static Glyph> {
    GLYPHS.iter().find(|(k, _)| *k == key).map(|(_, g)| g)
}

#[cfg(test)]
mod tests {
    use wana_kana::ConvertJapanese;

    use super::*;
    use crate::core::groups;

    #[test]
    fn every_group_member_has_a_glyph() {
        for group in groups::all() {
            for key in group.members {
                assert!(glyph(key).is_some(), "no glyph for key '{}'", key);
            }
        }
    }

    #[test]
    fn table_matches_reference_converter() {
        for (key, glyph) in GLYPHS {
            assert_eq!(key.to_hiragana(), glyph.hiragana, "hiragana mismatch for '{}'", key);
            assert_eq!(key.to_katakana(), glyph.katakana, "katakana mismatch for '{}'", key);
        }
    }

    #[test]
    fn unknown_key_has_no_glyph() {
        assert!(glyph("kya").is_none());
        assert!(glyph("").is_none());
    }
}
