// SPDX-License-Identifier: MPL-2.0
//! Section-jump keyboard shortcuts.
//!
//! Single-letter shortcuts scroll the page to a section; they are
//! suppressed while a form control has focus so typing stays typing.

/// The sections reachable by shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionJump {
    Download,
    Support,
    Languages,
}

impl SectionJump {
    /// Element id of the target section.
    pub fn target_id(&self) -> &'static str {
        match self {
            SectionJump::Download => "download",
            SectionJump::Support => "support",
            SectionJump::Languages => "languages",
        }
    }

    /// Element id to focus after scrolling, if any.
    pub fn focus_target_id(&self) -> Option<&'static str> {
        match self {
            SectionJump::Download => Some("download-link"),
            SectionJump::Support | SectionJump::Languages => None,
        }
    }
}

/// Tags whose focus suppresses shortcuts.
pub fn is_text_entry_tag(tag: &str) -> bool {
    matches!(
        tag.to_ascii_lowercase().as_str(),
        "input" | "textarea" | "select"
    )
}

/// Maps a pressed key to its section jump.
///
/// `focused_tag` is the tag name of the focused element, if any.
pub fn shortcut_for(key: &str, focused_tag: Option<&str>) -> Option<SectionJump> {
    if focused_tag.is_some_and(is_text_entry_tag) {
        return None;
    }
    match key.to_ascii_lowercase().as_str() {
        "d" => Some(SectionJump::Download),
        "s" => Some(SectionJump::Support),
        "l" => Some(SectionJump::Languages),
        _ => None,
    }
}
