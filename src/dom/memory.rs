// SPDX-License-Identifier: MPL-2.0
//! In-memory [`Document`] implementation.
//!
//! Holds the page's baked-in placeholder text and records every
//! projection the renderer makes, so the demo binary can print it and
//! tests can assert on it without a browser.

use crate::dom::{Direction, Document, LanguageControl};
use std::collections::BTreeMap;

/// Which of the page's top-level containers is visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Loading,
    Content,
    Fatal(String),
}

#[derive(Debug)]
pub struct MemoryDocument {
    texts: BTreeMap<String, String>,
    title: String,
    language: String,
    direction: Direction,
    select_label: String,
    controls: Vec<LanguageControl>,
    view: ViewState,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self {
            texts: BTreeMap::new(),
            title: String::new(),
            language: "en".to_string(),
            direction: Direction::Ltr,
            select_label: String::new(),
            controls: Vec::new(),
            view: ViewState::Loading,
        }
    }

    /// A document whose translatable elements start out with the given
    /// placeholder text, as the static page markup would.
    pub fn with_placeholders(placeholders: &[(&str, &str)]) -> Self {
        let mut doc = Self::new();
        for (key, text) in placeholders {
            doc.texts.insert(key.to_string(), text.to_string());
        }
        doc
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        self.texts.get(key).map(String::as_str)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn select_label(&self) -> &str {
        &self.select_label
    }

    pub fn controls(&self) -> &[LanguageControl] {
        &self.controls
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl Document for MemoryDocument {
    fn translation_keys(&self) -> Vec<String> {
        self.texts.keys().cloned().collect()
    }

    fn set_text(&mut self, key: &str, text: &str) {
        self.texts.insert(key.to_string(), text.to_string());
    }

    fn apply_language(&mut self, code: &str, direction: Direction) {
        self.language = code.to_string();
        self.direction = direction;
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn set_language_controls(&mut self, select_label: &str, controls: Vec<LanguageControl>) {
        self.select_label = select_label.to_string();
        self.controls = controls;
    }

    fn show_content(&mut self) {
        self.view = ViewState::Content;
    }

    fn show_fatal(&mut self, message: &str) {
        self.texts.clear();
        self.controls.clear();
        self.view = ViewState::Fatal(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::catalog::LanguageCode;

    #[test]
    fn placeholders_seed_the_translatable_elements() {
        let doc = MemoryDocument::with_placeholders(&[("a.b", "placeholder")]);
        assert_eq!(doc.text("a.b"), Some("placeholder"));
        assert_eq!(doc.translation_keys(), vec!["a.b".to_string()]);
    }

    #[test]
    fn starts_in_the_loading_view() {
        let doc = MemoryDocument::new();
        assert_eq!(doc.view(), &ViewState::Loading);
    }

    #[test]
    fn show_fatal_hides_normal_content() {
        let mut doc = MemoryDocument::with_placeholders(&[("a", "x")]);
        doc.set_language_controls(
            "Language",
            vec![LanguageControl {
                code: LanguageCode::En,
                label: "English (en)".to_string(),
                active: true,
            }],
        );

        doc.show_fatal("broken");

        assert_eq!(doc.view(), &ViewState::Fatal("broken".to_string()));
        assert!(doc.controls().is_empty());
        assert_eq!(doc.text("a"), None);
    }
}
