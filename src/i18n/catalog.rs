// SPDX-License-Identifier: MPL-2.0
//! The fixed catalog of display languages the site ships dictionaries for.
//!
//! Every language code surfaced to the UI or persisted to the user's
//! preferences must be a member of [`CATALOG`]. `en` is the catalog's
//! permanent fallback member: its dictionary doubles as the fallback for
//! every other language and as the last resort of locale resolution.

use std::fmt;
use std::str::FromStr;

/// A supported display language.
///
/// The variants mirror the per-language dictionary resources shipped with
/// the site. Chinese is split by script rather than region, so user-agent
/// tags like `zh-TW` resolve to [`LanguageCode::ZhHant`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LanguageCode {
    De,
    En,
    Es,
    Fr,
    Pt,
    It,
    Nl,
    Tr,
    Pl,
    Ru,
    Uk,
    Ar,
    Hi,
    Bn,
    Ur,
    Id,
    Vi,
    Th,
    Ja,
    Ko,
    ZhHans,
    ZhHant,
}

/// All supported languages, in the order the language controls list them.
pub const CATALOG: [LanguageCode; 22] = [
    LanguageCode::De,
    LanguageCode::En,
    LanguageCode::Es,
    LanguageCode::Fr,
    LanguageCode::Pt,
    LanguageCode::It,
    LanguageCode::Nl,
    LanguageCode::Tr,
    LanguageCode::Pl,
    LanguageCode::Ru,
    LanguageCode::Uk,
    LanguageCode::Ar,
    LanguageCode::Hi,
    LanguageCode::Bn,
    LanguageCode::Ur,
    LanguageCode::Id,
    LanguageCode::Vi,
    LanguageCode::Th,
    LanguageCode::Ja,
    LanguageCode::Ko,
    LanguageCode::ZhHans,
    LanguageCode::ZhHant,
];

impl LanguageCode {
    /// The code as it appears in dictionary paths and persisted preferences.
    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageCode::De => "de",
            LanguageCode::En => "en",
            LanguageCode::Es => "es",
            LanguageCode::Fr => "fr",
            LanguageCode::Pt => "pt",
            LanguageCode::It => "it",
            LanguageCode::Nl => "nl",
            LanguageCode::Tr => "tr",
            LanguageCode::Pl => "pl",
            LanguageCode::Ru => "ru",
            LanguageCode::Uk => "uk",
            LanguageCode::Ar => "ar",
            LanguageCode::Hi => "hi",
            LanguageCode::Bn => "bn",
            LanguageCode::Ur => "ur",
            LanguageCode::Id => "id",
            LanguageCode::Vi => "vi",
            LanguageCode::Th => "th",
            LanguageCode::Ja => "ja",
            LanguageCode::Ko => "ko",
            LanguageCode::ZhHans => "zh-Hans",
            LanguageCode::ZhHant => "zh-Hant",
        }
    }

    /// Whether the language is written right-to-left.
    pub fn is_rtl(&self) -> bool {
        matches!(self, LanguageCode::Ar | LanguageCode::Ur)
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parsing is an exact catalog-membership check. Persisted preferences and
/// UI control values go through here; locale tags from the user agent do
/// not (see the resolver's region-aware mapping instead).
impl FromStr for LanguageCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CATALOG
            .iter()
            .copied()
            .find(|code| code.as_str() == s)
            .ok_or(())
    }
}
