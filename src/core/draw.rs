use rand::Rng;

use super::{
    groups,
    kana::SyllableKey,
    settings::Settings,
};

/// Retry budget for the anti-immediate-repeat rule. Exhaustion accepts
/// the repeat rather than looping forever.
pub const MAX_REDRAW_ATTEMPTS: usize = 100;

/// Draws one syllable key from the enabled groups, avoiding an immediate
/// repeat of `last_key` where the pool allows it. Returns `None` when no
/// group is enabled; callers leave their display state untouched in that
/// case. Pure in its inputs plus the random source.
pub fn draw<R: Rng>(
    settings: &Settings,
    last_key: Option<SyllableKey>,
    rng: &mut R,
) -> Option<SyllableKey> {
    let enabled_ids = settings.enabled_group_ids();
    if enabled_ids.is_empty() {
        return None;
    }

    draw_from(&groups::expand(&enabled_ids), last_key, rng)
}

/// Uniform draw over an explicit pool. A single-element pool returns its
/// member even when it equals `last_key`; larger pools redraw on a repeat,
/// up to `MAX_REDRAW_ATTEMPTS` times.
pub fn draw_from<R: Rng>(
    eligible: &[SyllableKey],
    last_key: Option<SyllableKey>,
    rng: &mut R,
) -> Option<SyllableKey> {
    match eligible {
        [] => None,
        [only] => Some(*only),
        _ => {
            let mut pick = eligible[rng.random_range(0..eligible.len())];
            let mut attempts = 0;
            while Some(pick) == last_key && attempts < MAX_REDRAW_ATTEMPTS {
                pick = eligible[rng.random_range(0..eligible.len())];
                attempts += 1;
            }
            Some(pick)
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{
        rngs::StdRng,
        SeedableRng,
    };

    use super::*;

    fn settings_with_groups(ids: &[&str]) -> Settings {
        let mut settings = Settings::default();
        settings.selected_syllables =
            settings.selected_syllables.keys().map(|id| (id.clone(), false)).collect();
        for id in ids {
            settings.selected_syllables.insert(id.to_string(), true);
            settings.selected_voiced_syllables.insert(id.to_string(), true);
        }
        settings
    }

    #[test]
    fn all_disabled_draws_nothing() {
        let settings = settings_with_groups(&[]);
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(draw(&settings, None, &mut rng), None);
        assert_eq!(draw(&settings, Some("a"), &mut rng), None);
    }

    #[test]
    fn result_is_always_eligible() {
        let settings = settings_with_groups(&["aiueo", "wawon"]);
        let eligible = groups::expand(&["aiueo", "wawon"]);
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let key = draw(&settings, None, &mut rng).unwrap();
            assert!(eligible.contains(&key));
        }
    }

    #[test]
    fn voiced_groups_contribute_when_enabled() {
        let settings = settings_with_groups(&["gagigugego"]);
        let mut rng = StdRng::seed_from_u64(3);
        let key = draw(&settings, None, &mut rng).unwrap();
        assert!(["ga", "gi", "gu", "ge", "go"].contains(&key));
    }

    #[test]
    fn consecutive_draws_never_repeat_in_a_multi_key_pool() {
        let settings = settings_with_groups(&["yayuyo"]);
        let mut rng = StdRng::seed_from_u64(9);
        let mut last = None;
        for _ in 0..1000 {
            let key = draw(&settings, last, &mut rng).unwrap();
            assert_ne!(Some(key), last);
            last = Some(key);
        }
    }

    #[test]
    fn single_key_pool_repeats_its_member() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..10 {
            assert_eq!(draw_from(&["n"], Some("n"), &mut rng), Some("n"));
        }
    }

    #[test]
    fn empty_pool_draws_nothing() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(draw_from(&[], None, &mut rng), None);
    }
}
