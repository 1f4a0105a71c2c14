// SPDX-License-Identifier: MPL-2.0
//! Dictionary loading and the fallback-on-failure policy.
//!
//! The store fetches the active dictionary together with the English
//! fallback and owns the downgrade rule: when a requested language's
//! resource is unreachable but English is not, English becomes both the
//! active and fallback dictionary and is persisted as the new preference.
//! The user's stored choice is corrected because it is unusable, not
//! because of a transient error.

use crate::error::{Error, Result};
use crate::i18n::catalog::LanguageCode;
use crate::i18n::translate::Dictionary;
use futures_util::future;
use std::path::PathBuf;
use std::sync::Mutex;

/// Fetches the raw dictionary resource for one language.
///
/// Implementations decide where resources live (HTTP origin, local site
/// root, in-memory fake for tests); the store only assumes one JSON
/// document per code.
pub trait DictionaryFetcher {
    async fn fetch(&self, lang: LanguageCode) -> Result<Dictionary>;
}

/// Read/write access to the persisted language preference.
///
/// The store writes through this on downgrade; the application writes
/// through it on every explicit switch.
pub trait PreferenceStore {
    fn stored_language(&self) -> Option<LanguageCode>;
    fn store_language(&self, code: LanguageCode);
}

/// Fetches dictionaries from an HTTP origin using the site's fixed
/// `i18n/<code>.json` path pattern.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    base: String,
}

impl HttpFetcher {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base: base.into(),
        }
    }

    fn resource_url(&self, lang: LanguageCode) -> String {
        format!("{}/i18n/{}.json", self.base.trim_end_matches('/'), lang)
    }
}

impl DictionaryFetcher for HttpFetcher {
    async fn fetch(&self, lang: LanguageCode) -> Result<Dictionary> {
        let url = self.resource_url(lang);
        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(Error::Fetch(format!(
                "status {} for {}",
                response.status(),
                url
            )));
        }
        let bytes = response.bytes().await?;
        Dictionary::from_slice(&bytes)
    }
}

/// Fetches dictionaries from a local site root, mirroring the served
/// `i18n/<code>.json` layout. Used by the demo binary and local builds.
#[derive(Debug, Clone)]
pub struct DirFetcher {
    root: PathBuf,
}

impl DirFetcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl DictionaryFetcher for DirFetcher {
    async fn fetch(&self, lang: LanguageCode) -> Result<Dictionary> {
        let path = self.root.join("i18n").join(format!("{}.json", lang));
        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|err| Error::Fetch(format!("{}: {}", path.display(), err)))?;
        Dictionary::from_slice(&bytes)
    }
}

/// In-memory preference store for hosts without a config directory and
/// for tests.
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    language: Mutex<Option<LanguageCode>>,
}

impl MemoryPreferences {
    pub fn new(language: Option<LanguageCode>) -> Self {
        Self {
            language: Mutex::new(language),
        }
    }
}

impl PreferenceStore for MemoryPreferences {
    fn stored_language(&self) -> Option<LanguageCode> {
        *self.language.lock().expect("preference lock poisoned")
    }

    fn store_language(&self, code: LanguageCode) {
        *self.language.lock().expect("preference lock poisoned") = Some(code);
    }
}

/// A completed load: the dictionaries to show and the language they
/// actually belong to.
#[derive(Debug, Clone)]
pub struct LoadedDictionaries {
    pub active: Dictionary,
    pub fallback: Dictionary,
    /// The language whose text is actually being shown. Differs from the
    /// requested language only after a downgrade.
    pub resolved: LanguageCode,
    pub downgraded: bool,
}

/// Loads dictionaries and applies the fallback policy.
#[derive(Debug)]
pub struct DictionaryStore<F> {
    fetcher: F,
}

impl<F: DictionaryFetcher> DictionaryStore<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// Loads the dictionaries for `lang`.
    ///
    /// English serves as its own fallback; for any other language the
    /// requested and English resources are fetched concurrently. A failed
    /// requested fetch downgrades to English and persists `en` through
    /// `preferences`; a failed English fetch fails the whole load.
    pub async fn load(
        &self,
        lang: LanguageCode,
        preferences: &impl PreferenceStore,
    ) -> Result<LoadedDictionaries> {
        if lang == LanguageCode::En {
            let english = self.fetcher.fetch(LanguageCode::En).await?;
            return Ok(LoadedDictionaries {
                active: english.clone(),
                fallback: english,
                resolved: LanguageCode::En,
                downgraded: false,
            });
        }

        let (requested, english) = future::join(
            self.fetcher.fetch(lang),
            self.fetcher.fetch(LanguageCode::En),
        )
        .await;

        match (requested, english) {
            (Ok(active), Ok(fallback)) => Ok(LoadedDictionaries {
                active,
                fallback,
                resolved: lang,
                downgraded: false,
            }),
            (Err(_), Ok(english)) => {
                preferences.store_language(LanguageCode::En);
                Ok(LoadedDictionaries {
                    active: english.clone(),
                    fallback: english,
                    resolved: LanguageCode::En,
                    downgraded: true,
                })
            }
            (_, Err(err)) => Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;
    use std::fs;
    use tempfile::tempdir;

    /// Serves canned dictionaries; languages absent from the map fail to
    /// fetch.
    struct FakeFetcher {
        dictionaries: HashMap<LanguageCode, serde_json::Value>,
    }

    impl FakeFetcher {
        fn with(entries: &[(LanguageCode, serde_json::Value)]) -> Self {
            Self {
                dictionaries: entries.iter().cloned().collect(),
            }
        }
    }

    impl DictionaryFetcher for FakeFetcher {
        async fn fetch(&self, lang: LanguageCode) -> Result<Dictionary> {
            match self.dictionaries.get(&lang) {
                Some(value) => Dictionary::from_value(value.clone()),
                None => Err(Error::Fetch(format!("no resource for {}", lang))),
            }
        }
    }

    #[tokio::test]
    async fn loading_english_serves_one_payload_as_both_dictionaries() {
        let store = DictionaryStore::new(FakeFetcher::with(&[(
            LanguageCode::En,
            json!({"greeting": "Hello"}),
        )]));
        let preferences = MemoryPreferences::default();

        let loaded = store
            .load(LanguageCode::En, &preferences)
            .await
            .expect("load should succeed");

        assert_eq!(loaded.resolved, LanguageCode::En);
        assert!(!loaded.downgraded);
        assert_eq!(loaded.active, loaded.fallback);
        assert_eq!(preferences.stored_language(), None);
    }

    #[tokio::test]
    async fn loading_a_translated_language_keeps_english_as_fallback() {
        let store = DictionaryStore::new(FakeFetcher::with(&[
            (LanguageCode::Fr, json!({"greeting": "Bonjour"})),
            (LanguageCode::En, json!({"greeting": "Hello"})),
        ]));
        let preferences = MemoryPreferences::default();

        let loaded = store
            .load(LanguageCode::Fr, &preferences)
            .await
            .expect("load should succeed");

        assert_eq!(loaded.resolved, LanguageCode::Fr);
        assert!(!loaded.downgraded);
        assert_eq!(loaded.active.text("greeting"), Some("Bonjour"));
        assert_eq!(loaded.fallback.text("greeting"), Some("Hello"));
    }

    #[tokio::test]
    async fn unreachable_language_downgrades_to_english_and_persists_it() {
        let store = DictionaryStore::new(FakeFetcher::with(&[(
            LanguageCode::En,
            json!({"greeting": "Hello"}),
        )]));
        let preferences = MemoryPreferences::new(Some(LanguageCode::Th));

        let loaded = store
            .load(LanguageCode::Th, &preferences)
            .await
            .expect("downgrade should still succeed");

        assert_eq!(loaded.resolved, LanguageCode::En);
        assert!(loaded.downgraded);
        assert_eq!(loaded.active.text("greeting"), Some("Hello"));
        assert_eq!(preferences.stored_language(), Some(LanguageCode::En));
    }

    #[tokio::test]
    async fn unreachable_english_fails_the_whole_load() {
        let store = DictionaryStore::new(FakeFetcher::with(&[(
            LanguageCode::Fr,
            json!({"greeting": "Bonjour"}),
        )]));
        let preferences = MemoryPreferences::default();

        let result = store.load(LanguageCode::Fr, &preferences).await;
        assert!(matches!(result, Err(Error::Fetch(_))));
        // No downgrade was persisted for a total failure.
        assert_eq!(preferences.stored_language(), None);
    }

    #[tokio::test]
    async fn malformed_resource_counts_as_a_failed_fetch_for_fallback_purposes() {
        let store = DictionaryStore::new(FakeFetcher::with(&[
            (LanguageCode::Fr, json!("not an object")),
            (LanguageCode::En, json!({"greeting": "Hello"})),
        ]));
        let preferences = MemoryPreferences::default();

        let loaded = store
            .load(LanguageCode::Fr, &preferences)
            .await
            .expect("english should cover the malformed resource");
        assert!(loaded.downgraded);
        assert_eq!(loaded.resolved, LanguageCode::En);
    }

    #[tokio::test]
    async fn dir_fetcher_reads_the_site_layout() {
        let site = tempdir().expect("failed to create temp dir");
        let i18n_dir = site.path().join("i18n");
        fs::create_dir_all(&i18n_dir).expect("failed to create i18n dir");
        fs::write(i18n_dir.join("en.json"), br#"{"greeting": "Hello"}"#)
            .expect("failed to write dictionary");

        let fetcher = DirFetcher::new(site.path());
        let dictionary = fetcher
            .fetch(LanguageCode::En)
            .await
            .expect("fetch should succeed");
        assert_eq!(dictionary.text("greeting"), Some("Hello"));

        let missing = fetcher.fetch(LanguageCode::Ja).await;
        assert!(matches!(missing, Err(Error::Fetch(_))));
    }

    #[test]
    fn http_fetcher_builds_urls_from_the_fixed_path_pattern() {
        let fetcher = HttpFetcher::new("https://example.org/site/");
        assert_eq!(
            fetcher.resource_url(LanguageCode::ZhHant),
            "https://example.org/site/i18n/zh-Hant.json"
        );
    }

    #[test]
    fn memory_preferences_store_and_report_the_language() {
        let preferences = MemoryPreferences::default();
        assert_eq!(preferences.stored_language(), None);
        preferences.store_language(LanguageCode::Uk);
        assert_eq!(preferences.stored_language(), Some(LanguageCode::Uk));
    }
}
