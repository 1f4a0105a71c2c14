// SPDX-License-Identifier: MPL-2.0
//! Runtime orchestration: startup resolution, language switching, and
//! projection of the current phase onto the document.
//!
//! The one genuine concurrency hazard lives here. A user can trigger a
//! second language switch before the first's fetch resolves, and rapid
//! clicking is normal behavior, not an edge case. Every load captures a
//! generation token at issuance and commits only while that token is
//! still current, so a load that completes after being superseded is
//! discarded on arrival. The underlying fetch is never cancelled; a hung
//! fetch simply leaves the page in its loading state.

use crate::dom::{render, render_fatal, Document};
use crate::i18n::catalog::LanguageCode;
use crate::i18n::resolver;
use crate::i18n::store::{
    DictionaryFetcher, DictionaryStore, LoadedDictionaries, PreferenceStore,
};
use crate::i18n::translate::{Dictionary, Translator};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

/// Static failure message shown when English itself is unreachable. The
/// fatal state offers no retry beyond a manual reload, so the message
/// cannot come from a dictionary.
pub const FATAL_MESSAGE: &str =
    "Translation files could not be loaded. Please reload or check the i18n resources.";

/// The process-wide translation state.
///
/// Replaced wholesale by a committed load and never partially mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationState {
    pub language: LanguageCode,
    pub active: Dictionary,
    pub fallback: Dictionary,
}

impl TranslationState {
    fn from_loaded(loaded: LoadedDictionaries) -> Self {
        Self {
            language: loaded.resolved,
            active: loaded.active,
            fallback: loaded.fallback,
        }
    }

    pub fn translator(&self) -> Translator<'_> {
        Translator::new(&self.active, &self.fallback)
    }
}

/// Where the language pipeline currently stands.
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Loading,
    Ready(TranslationState),
    /// Terminal: no partial UI, no automatic retry.
    Fatal(String),
}

/// How one initialize/switch request ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchOutcome {
    /// Committed; carries the language actually shown (differs from the
    /// requested one after a downgrade).
    Applied(LanguageCode),
    /// A later request overtook this one; its result was discarded.
    Superseded,
    /// English itself was unreachable; the pipeline is now fatal.
    Failed,
}

/// Wires the language pipeline together and owns the top-level failure
/// path. The widgets are registered independently and never touch this.
#[derive(Debug)]
pub struct App<F, P> {
    store: DictionaryStore<F>,
    preferences: P,
    phase: Mutex<Phase>,
    generation: AtomicU64,
}

impl<F: DictionaryFetcher, P: PreferenceStore> App<F, P> {
    pub fn new(fetcher: F, preferences: P) -> Self {
        Self {
            store: DictionaryStore::new(fetcher),
            preferences,
            phase: Mutex::new(Phase::Loading),
            generation: AtomicU64::new(0),
        }
    }

    /// The language to load at startup: the persisted choice if usable,
    /// otherwise the user agent's locale preferences, otherwise English.
    pub fn resolve_startup_language(&self, locales: &[String]) -> LanguageCode {
        match self.preferences.stored_language() {
            Some(code) => code,
            None => resolver::resolve(None, locales),
        }
    }

    /// Startup load. Does not persist the resolved language; only
    /// explicit switches and downgrades write the preference.
    pub async fn initialize(&self, locales: &[String]) -> SwitchOutcome {
        let language = self.resolve_startup_language(locales);
        self.load_and_commit(language).await
    }

    /// Explicit language switch: persist the choice, load, and commit
    /// unless a later switch has superseded this one in the meantime.
    pub async fn switch_language(&self, language: LanguageCode) -> SwitchOutcome {
        self.preferences.store_language(language);
        self.load_and_commit(language).await
    }

    async fn load_and_commit(&self, language: LanguageCode) -> SwitchOutcome {
        let issued = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let result = self.store.load(language, &self.preferences).await;

        // Commit only if no later request was issued while we were
        // suspended; a stale result is discarded, not applied.
        if self.generation.load(Ordering::SeqCst) != issued {
            return SwitchOutcome::Superseded;
        }

        let mut phase = self.phase.lock().expect("phase lock poisoned");
        match result {
            Ok(loaded) => {
                let resolved = loaded.resolved;
                *phase = Phase::Ready(TranslationState::from_loaded(loaded));
                SwitchOutcome::Applied(resolved)
            }
            Err(err) => {
                eprintln!("Dictionary load failed: {}", err);
                *phase = Phase::Fatal(FATAL_MESSAGE.to_string());
                SwitchOutcome::Failed
            }
        }
    }

    /// Projects the current phase onto the document. While loading the
    /// document keeps showing its baked-in loading container.
    pub fn render(&self, doc: &mut dyn Document) {
        match &*self.phase.lock().expect("phase lock poisoned") {
            Phase::Loading => {}
            Phase::Ready(state) => render(doc, state.language, &state.translator()),
            Phase::Fatal(message) => render_fatal(doc, message),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase.lock().expect("phase lock poisoned").clone()
    }

    /// The language whose text is currently shown, if any.
    pub fn active_language(&self) -> Option<LanguageCode> {
        match self.phase() {
            Phase::Ready(state) => Some(state.language),
            _ => None,
        }
    }
}
