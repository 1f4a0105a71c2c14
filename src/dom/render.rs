// SPDX-License-Identifier: MPL-2.0
//! Projects translation state onto a [`Document`].

use crate::dom::{Direction, Document, LanguageControl};
use crate::i18n::catalog::{LanguageCode, CATALOG};
use crate::i18n::translate::Translator;

/// Label used when the dictionaries carry no `app.languageSelectLabel`.
pub const DEFAULT_SELECT_LABEL: &str = "Language";

const META_TITLE_KEY: &str = "app.metaTitle";
const SELECT_LABEL_KEY: &str = "app.languageSelectLabel";

/// Renders loaded translation state.
///
/// Synchronous with respect to the already-loaded dictionaries; the only
/// side effects are the `Document` calls. Keys that resolve to nothing
/// leave the existing text in place.
pub fn render(doc: &mut dyn Document, language: LanguageCode, translator: &Translator<'_>) {
    for key in doc.translation_keys() {
        if let Some(text) = translator.text(&key) {
            doc.set_text(&key, text);
        }
    }

    let direction = if language.is_rtl() {
        Direction::Rtl
    } else {
        Direction::Ltr
    };
    doc.apply_language(language.as_str(), direction);

    if let Some(title) = translator.text(META_TITLE_KEY) {
        doc.set_title(title);
    }

    let select_label = translator
        .text(SELECT_LABEL_KEY)
        .unwrap_or(DEFAULT_SELECT_LABEL)
        .replace(':', "");
    let names = translator.language_names();
    let controls = CATALOG
        .iter()
        .map(|&code| LanguageControl {
            label: format!(
                "{} ({})",
                names.get(code.as_str()).map(String::as_str).unwrap_or(code.as_str()),
                code
            ),
            active: code == language,
            code,
        })
        .collect();
    doc.set_language_controls(select_label.trim(), controls);

    doc.show_content();
}

/// Projects the terminal failure state: no partial UI, just the message.
pub fn render_fatal(doc: &mut dyn Document, message: &str) {
    doc.show_fatal(message);
}
