// SPDX-License-Identifier: MPL-2.0
//! Internationalization: the language catalog, locale resolution, the
//! dictionary store with its English-fallback policy, and dotted-key
//! translation lookup.
//!
//! The pipeline is: resolve a [`catalog::LanguageCode`] from stored and
//! user-agent signals, load its dictionary (plus the English fallback)
//! through [`store::DictionaryStore`], then answer lookups through
//! [`translate::Translator`].

pub mod catalog;
pub mod resolver;
pub mod store;
pub mod translate;

pub use catalog::{LanguageCode, CATALOG};
pub use store::{DictionaryFetcher, DictionaryStore, LoadedDictionaries, PreferenceStore};
pub use translate::{Dictionary, Translator};
