// SPDX-License-Identifier: MPL-2.0
//! `lingua_page` is the client-side runtime of a static, multi-page
//! marketing site.
//!
//! It resolves which human language to display, asynchronously loads a
//! translation dictionary (with English as the permanent fallback),
//! projects the result onto a host document, and drives the page's small
//! stateful widgets: an image-preview modal, a scroll-reveal animation,
//! a collapsible help panel, and section-jump keyboard shortcuts.
//!
//! The host document is abstracted behind [`dom::Document`]; the crate
//! ships an in-memory implementation for tests and the demo binary. The
//! document is always a pure projection of crate-owned state.

#![doc(html_root_url = "https://docs.rs/lingua_page/0.2.0")]

pub mod app;
pub mod config;
pub mod dom;
pub mod error;
pub mod i18n;
pub mod ui;
