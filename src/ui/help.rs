// SPDX-License-Identifier: MPL-2.0
//! Collapsible help panel.

use crate::i18n::translate::Translator;

const COLLAPSE_LABEL_KEY: &str = "app.helpToggleCollapse";
const EXPAND_LABEL_KEY: &str = "app.helpToggleExpand";

/// Collapse state of the help panel, toggled by its button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HelpPanel {
    collapsed: bool,
}

impl HelpPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    pub fn toggle(&mut self) {
        self.collapsed = !self.collapsed;
    }

    /// The toggle button's label for the current state, localized when a
    /// translation exists.
    pub fn toggle_label<'a>(&self, translator: &Translator<'a>) -> &'a str {
        if self.collapsed {
            translator.text(EXPAND_LABEL_KEY).unwrap_or("Expand")
        } else {
            translator.text(COLLAPSE_LABEL_KEY).unwrap_or("Collapse")
        }
    }
}
