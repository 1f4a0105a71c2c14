// SPDX-License-Identifier: MPL-2.0
//! The page's interactive widgets.
//!
//! All of them are wired independently of the language pipeline and
//! share no mutable state with it: the modal gallery and reveal
//! animation do not care which language is active, and the help panel
//! only consults the translator when its label is rendered.

pub mod help;
pub mod modal;
pub mod reveal;
pub mod shortcuts;

pub use help::HelpPanel;
pub use modal::{GalleryCard, GalleryItem, ModalGallery, ModalKey};
pub use reveal::{RevealAnimator, RevealEnvironment, RevealPolicy};
pub use shortcuts::{shortcut_for, SectionJump};
