// SPDX-License-Identifier: MPL-2.0
//! The host-document contract and the renderer that projects translation
//! state onto it.
//!
//! The runtime never reads state back out of the document: everything a
//! [`Document`] shows is recomputed deterministically from crate-owned
//! state, and elements whose translation key resolves to nothing keep
//! the readable placeholder text baked into the page.

pub mod memory;
pub mod render;

pub use memory::MemoryDocument;
pub use render::{render, render_fatal, DEFAULT_SELECT_LABEL};

use crate::i18n::catalog::LanguageCode;

/// Text direction of the document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

/// One entry of the rebuilt language-switch controls (one selector
/// option plus one button per catalog member).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageControl {
    pub code: LanguageCode,
    /// Display label, `"<Display Name> (<code>)"`.
    pub label: String,
    /// Whether this entry matches the active language.
    pub active: bool,
}

/// The element tree the runtime renders into.
///
/// Implementations are synchronous and side-effect only; the in-memory
/// implementation backs the demo binary and the test suite, a real DOM
/// binding would forward each call to the page.
pub trait Document {
    /// Bound translation keys of every element flagged for translation.
    fn translation_keys(&self) -> Vec<String>;
    /// Replaces the text content of all elements bound to `key`.
    fn set_text(&mut self, key: &str, text: &str);
    /// Sets the document language attribute and text direction.
    fn apply_language(&mut self, code: &str, direction: Direction);
    fn set_title(&mut self, title: &str);
    /// Rebuilds the selector and button row from the full catalog.
    fn set_language_controls(&mut self, select_label: &str, controls: Vec<LanguageControl>);
    /// Hides the loading and fatal-error containers.
    fn show_content(&mut self);
    /// Hides normal content and shows the terminal failure message.
    fn show_fatal(&mut self, message: &str);
}
