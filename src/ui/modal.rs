// SPDX-License-Identifier: MPL-2.0
//! Image-preview modal: a page-lifetime state machine over the gallery
//! cards, independent of the language pipeline.
//!
//! The navigable item list is derived once at registration time from the
//! page's gallery cards; cards without an image source are excluded
//! entirely. With no usable items the widget is inert: it registers no
//! bindings and every event is a no-op.

/// A gallery card as it appears in the page markup: the image source is
/// optional there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryCard {
    pub image_src: Option<String>,
    pub title: String,
}

/// A navigable item: a card that actually has an image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryItem {
    pub image_src: String,
    pub title: String,
}

/// Keyboard bindings, live only while the modal is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKey {
    /// Cancel key (Escape).
    Cancel,
    /// Arrow-right.
    Next,
    /// Arrow-left.
    Previous,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ModalState {
    Closed,
    Open(usize),
}

/// What the open modal displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayView<'a> {
    pub image_src: &'a str,
    pub caption: &'a str,
}

/// The modal gallery state machine.
///
/// States are `Closed` and `Open(index)`; the selected index is only
/// meaningful while open and closing always clears it. Navigation wraps
/// circularly over the item list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalGallery {
    items: Vec<GalleryItem>,
    state: ModalState,
}

impl ModalGallery {
    /// Builds the navigable set from the page's gallery cards.
    pub fn from_cards(cards: Vec<GalleryCard>) -> Self {
        let items = cards
            .into_iter()
            .filter_map(|card| {
                card.image_src.map(|image_src| GalleryItem {
                    image_src,
                    title: card.title,
                })
            })
            .collect();
        Self {
            items,
            state: ModalState::Closed,
        }
    }

    /// Whether the widget registered no bindings at all.
    pub fn is_inert(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, ModalState::Open(_))
    }

    /// The selected item index, valid only while open.
    pub fn selected_index(&self) -> Option<usize> {
        match self.state {
            ModalState::Open(index) => Some(index),
            ModalState::Closed => None,
        }
    }

    /// Activates the item at `index`.
    ///
    /// Opens the modal on that item; activating the already-open item
    /// again toggles the modal closed.
    pub fn activate(&mut self, index: usize) {
        if index >= self.items.len() {
            return;
        }
        self.state = match self.state {
            ModalState::Open(current) if current == index => ModalState::Closed,
            _ => ModalState::Open(index),
        };
    }

    /// Advances to the next item, wrapping past the end.
    pub fn next(&mut self) {
        if let ModalState::Open(index) = self.state {
            self.state = ModalState::Open((index + 1) % self.items.len());
        }
    }

    /// Steps back to the previous item, wrapping past the start.
    pub fn previous(&mut self) {
        if let ModalState::Open(index) = self.state {
            let len = self.items.len();
            self.state = ModalState::Open((index + len - 1) % len);
        }
    }

    /// Closes the modal (close control, backdrop, or cancel key).
    pub fn close(&mut self) {
        self.state = ModalState::Closed;
    }

    /// Dispatches a key event; keys are only live while open.
    pub fn handle_key(&mut self, key: ModalKey) {
        if !self.is_open() {
            return;
        }
        match key {
            ModalKey::Cancel => self.close(),
            ModalKey::Next => self.next(),
            ModalKey::Previous => self.previous(),
        }
    }

    /// The displayed image and caption; `None` while closed (image and
    /// caption cleared, page scrolling restored).
    pub fn overlay(&self) -> Option<OverlayView<'_>> {
        let index = self.selected_index()?;
        let item = &self.items[index];
        Some(OverlayView {
            image_src: &item.image_src,
            caption: &item.title,
        })
    }

    /// Page scrolling is suppressed exactly while the modal is open.
    pub fn scroll_locked(&self) -> bool {
        self.is_open()
    }

    /// Focus moves to the close control whenever the modal is open.
    pub fn focus_on_close_control(&self) -> bool {
        self.is_open()
    }
}
