// SPDX-License-Identifier: MPL-2.0
//! Locale resolution: turning stored preferences and user-agent locale
//! tags into one supported [`LanguageCode`].
//!
//! Resolution order (highest to lowest priority):
//! 1. The user's previously persisted language, if it is a catalog member.
//! 2. The user agent's ordered locale preferences, first match wins.
//! 3. English.
//!
//! The order is load-bearing: an explicit user choice always beats what
//! the user agent reports, and reported locales are tried in the agent's
//! own stated preference order.

use crate::i18n::catalog::LanguageCode;
use unic_langid::LanguageIdentifier;

/// Maps one user-agent locale tag to a supported language, if any.
///
/// Tags are parsed with `unic-langid`, which canonicalizes casing, so
/// `zh-TW` and `ZH-tw` behave identically. Chinese needs region-aware
/// handling because the catalog splits it by script:
///
/// - explicit `Hant` script, or region `TW`/`HK`/`MO` → `zh-Hant`
/// - explicit `Hans` script, or region `CN`/`SG`, or no region → `zh-Hans`
/// - any other `zh` region stays unmatched so resolution can move on to
///   the next candidate tag
///
/// For every other tag the primary language subtag decides membership.
pub fn map_locale_to_language(tag: &str) -> Option<LanguageCode> {
    let identifier: LanguageIdentifier = tag.trim().parse().ok()?;

    if identifier.language.as_str() == "zh" {
        if let Some(script) = identifier.script {
            return match script.as_str() {
                "Hant" => Some(LanguageCode::ZhHant),
                "Hans" => Some(LanguageCode::ZhHans),
                _ => None,
            };
        }
        return match identifier.region {
            Some(region) => match region.as_str() {
                "TW" | "HK" | "MO" => Some(LanguageCode::ZhHant),
                "CN" | "SG" => Some(LanguageCode::ZhHans),
                _ => None,
            },
            None => Some(LanguageCode::ZhHans),
        };
    }

    identifier.language.as_str().parse().ok()
}

/// Resolves the language to display.
///
/// Pure given its inputs and never fails; `en` is the final fallback.
pub fn resolve(stored: Option<&str>, locales: &[String]) -> LanguageCode {
    if let Some(code) = stored.and_then(|s| s.parse::<LanguageCode>().ok()) {
        return code;
    }

    locales
        .iter()
        .find_map(|tag| map_locale_to_language(tag))
        .unwrap_or(LanguageCode::En)
}

/// The user agent's ordered locale preferences, most preferred first.
///
/// This is the crate's analog of `navigator.languages`; on desktop it
/// comes from the operating system.
pub fn system_locales() -> Vec<String> {
    sys_locale::get_locales().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::catalog::CATALOG;

    fn locales(tags: &[&str]) -> Vec<String> {
        tags.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn stored_preference_wins_over_any_browser_signal() {
        for code in CATALOG {
            let resolved = resolve(Some(code.as_str()), &locales(&["ja-JP", "de-DE"]));
            assert_eq!(resolved, code);
        }
    }

    #[test]
    fn invalid_stored_preference_is_ignored() {
        let resolved = resolve(Some("tlh"), &locales(&["fr-CA"]));
        assert_eq!(resolved, LanguageCode::Fr);
    }

    #[test]
    fn browser_locales_are_tried_in_stated_order() {
        let resolved = resolve(None, &locales(&["pt-BR", "es-ES"]));
        assert_eq!(resolved, LanguageCode::Pt);
    }

    #[test]
    fn unmatched_candidates_fall_through_to_later_ones() {
        let resolved = resolve(None, &locales(&["xx-YY", "ko-KR"]));
        assert_eq!(resolved, LanguageCode::Ko);
    }

    #[test]
    fn garbage_and_empty_signals_fall_back_to_english() {
        assert_eq!(resolve(None, &[]), LanguageCode::En);
        assert_eq!(
            resolve(None, &locales(&["not a locale!", "", "123"])),
            LanguageCode::En
        );
    }

    #[test]
    fn regional_tags_map_to_their_primary_subtag() {
        assert_eq!(map_locale_to_language("fr-CA"), Some(LanguageCode::Fr));
        assert_eq!(map_locale_to_language("en-US"), Some(LanguageCode::En));
        assert_eq!(map_locale_to_language("pt-BR"), Some(LanguageCode::Pt));
    }

    #[test]
    fn traditional_chinese_regions_map_to_zh_hant() {
        for tag in ["zh-TW", "zh-HK", "zh-MO", "zh-tw", "ZH-HK"] {
            assert_eq!(map_locale_to_language(tag), Some(LanguageCode::ZhHant), "{tag}");
        }
    }

    #[test]
    fn simplified_chinese_regions_map_to_zh_hans() {
        for tag in ["zh", "zh-CN", "zh-SG", "zh-cn", "Zh-Sg"] {
            assert_eq!(map_locale_to_language(tag), Some(LanguageCode::ZhHans), "{tag}");
        }
    }

    #[test]
    fn explicit_script_subtags_override_region() {
        assert_eq!(map_locale_to_language("zh-Hant-SG"), Some(LanguageCode::ZhHant));
        assert_eq!(map_locale_to_language("zh-hans-TW"), Some(LanguageCode::ZhHans));
        assert_eq!(map_locale_to_language("zh-hant"), Some(LanguageCode::ZhHant));
    }

    #[test]
    fn unknown_chinese_regions_stay_unmatched() {
        assert_eq!(map_locale_to_language("zh-MY"), None);
    }

    #[test]
    fn whitespace_around_tags_is_tolerated() {
        assert_eq!(map_locale_to_language("  de-AT "), Some(LanguageCode::De));
    }
}
