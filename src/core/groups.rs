//! Static grouping of syllable keys into the toggleable rows of the
//! settings panel. Two disjoint families; ids never overlap and no key
//! appears in two groups.

use super::kana::SyllableKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupFamily {
    Unvoiced,
    Voiced,
}

pub struct SyllableGroup {
    pub id: &'static str,
    pub label: &'static str,
    pub members: &'static [SyllableKey],
    pub family: GroupFamily,
}

const fn group(
    id: &'static str,
    label: &'static str,
    members: &'static [SyllableKey],
    family: GroupFamily,
) -> SyllableGroup {
    SyllableGroup { id, label, members, family }
}

static GROUPS: &[SyllableGroup] = &[
    group("aiueo", "a/i/u/e/o", &["a", "i", "u", "e", "o"], GroupFamily::Unvoiced),
    group("kakikukeko", "ka/ki/ku/ke/ko", &["ka", "ki", "ku", "ke", "ko"], GroupFamily::Unvoiced),
    group("sashisuseso", "sa/shi/su/se/so", &["sa", "shi", "su", "se", "so"], GroupFamily::Unvoiced),
    group(
        "tachitsuteto",
        "ta/chi/tsu/te/to",
        &["ta", "chi", "tsu", "te", "to"],
        GroupFamily::Unvoiced,
    ),
    group("naninuneno", "na/ni/nu/ne/no", &["na", "ni", "nu", "ne", "no"], GroupFamily::Unvoiced),
    group("hahifuheho", "ha/hi/fu/he/ho", &["ha", "hi", "fu", "he", "ho"], GroupFamily::Unvoiced),
    group("mamimumemo", "ma/mi/mu/me/mo", &["ma", "mi", "mu", "me", "mo"], GroupFamily::Unvoiced),
    group("yayuyo", "ya/yu/yo", &["ya", "yu", "yo"], GroupFamily::Unvoiced),
    group("rarirurero", "ra/ri/ru/re/ro", &["ra", "ri", "ru", "re", "ro"], GroupFamily::Unvoiced),
    group("wawon", "wa/wo/n", &["wa", "wo", "n"], GroupFamily::Unvoiced),
    group("gagigugego", "ga/gi/gu/ge/go", &["ga", "gi", "gu", "ge", "go"], GroupFamily::Voiced),
    group("zajizuzezo", "za/ji/zu/ze/zo", &["za", "ji", "zu", "ze", "zo"], GroupFamily::Voiced),
    group("dadidudedo", "da/di/du/de/do", &["da", "di", "du", "de", "do"], GroupFamily::Voiced),
    group("babibubebo", "ba/bi/bu/be/bo", &["ba", "bi", "bu", "be", "bo"], GroupFamily::Voiced),
    group("papipupepo", "pa/pi/pu/pe/po", &["pa", "pi", "pu", "pe", "po"], GroupFamily::Voiced),
];

/// All groups, both families, in display order.
pub fn all() -> &'static [SyllableGroup] {
    GROUPS
}

pub fn of_family(family: GroupFamily) -> impl Iterator<Item = &'static SyllableGroup> {
    GROUPS.iter().filter(move |g| g.family == family)
}

/// Union of member keys across the enabled groups, in registry order.
/// Unknown ids are silently skipped; groups are disjoint, so this is a
/// flat concatenation.
pub fn expand(enabled_ids: &[&str]) -> Vec<SyllableKey> {
    GROUPS
        .iter()
        .filter(|g| enabled_ids.contains(&g.id))
        .flat_map(|g| g.members.iter().copied())
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn ids_and_members_are_disjoint() {
        let mut ids = HashSet::new();
        let mut keys = HashSet::new();
        for group in all() {
            assert!(ids.insert(group.id), "duplicate group id '{}'", group.id);
            for key in group.members {
                assert!(keys.insert(*key), "key '{}' appears in two groups", key);
            }
        }
    }

    #[test]
    fn expand_concatenates_in_registry_order() {
        let keys = expand(&["kakikukeko", "aiueo"]);
        assert_eq!(keys, vec!["a", "i", "u", "e", "o", "ka", "ki", "ku", "ke", "ko"]);
    }

    #[test]
    fn expand_skips_unknown_ids() {
        assert_eq!(expand(&["not_a_group"]), Vec::<SyllableKey>::new());
        assert_eq!(expand(&["yayuyo", "not_a_group"]), vec!["ya", "yu", "yo"]);
    }

    #[test]
    fn expand_of_nothing_is_empty() {
        assert!(expand(&[]).is_empty());
    }
}
