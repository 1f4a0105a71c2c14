// SPDX-License-Identifier: MPL-2.0
//! Demo binary: runs the language pipeline against a site root (local
//! directory or HTTP origin) and prints the resulting document
//! projection.

use lingua_page::app::{App, Phase, SwitchOutcome};
use lingua_page::config::{self, ConfigPreferences};
use lingua_page::dom::{Document, MemoryDocument};
use lingua_page::error::Result;
use lingua_page::i18n::catalog::LanguageCode;
use lingua_page::i18n::resolver;
use lingua_page::i18n::store::{DictionaryFetcher, DirFetcher, HttpFetcher};
use lingua_page::i18n::translate::Dictionary;
use lingua_page::ui::{GalleryCard, ModalGallery, RevealAnimator, RevealEnvironment, RevealPolicy};
use std::process::ExitCode;

/// Fetcher chosen from the `--site` argument at startup.
enum SiteFetcher {
    Http(HttpFetcher),
    Dir(DirFetcher),
}

impl DictionaryFetcher for SiteFetcher {
    async fn fetch(&self, lang: LanguageCode) -> Result<Dictionary> {
        match self {
            SiteFetcher::Http(fetcher) => fetcher.fetch(lang).await,
            SiteFetcher::Dir(fetcher) => fetcher.fetch(lang).await,
        }
    }
}

/// The page's translatable elements with their baked-in placeholder
/// text, as the static markup ships them.
fn page_document() -> MemoryDocument {
    MemoryDocument::with_placeholders(&[
        ("hero.heading", "A tiny site, in your language"),
        ("hero.tagline", "Translations load in a moment."),
        ("features.heading", "Features"),
        ("download.heading", "Download"),
        ("support.heading", "Support"),
        ("languages.heading", "Languages"),
    ])
}

#[tokio::main]
async fn main() -> ExitCode {
    let mut args = pico_args::Arguments::from_env();
    let lang: Option<String> = args.opt_value_from_str("--lang").unwrap();
    let site: String = args
        .opt_value_from_str("--site")
        .unwrap()
        .unwrap_or_else(|| ".".to_string());

    let fetcher = if site.starts_with("http://") || site.starts_with("https://") {
        SiteFetcher::Http(HttpFetcher::new(site))
    } else {
        SiteFetcher::Dir(DirFetcher::new(site))
    };
    let app = App::new(fetcher, ConfigPreferences::new());

    let outcome = match lang.as_deref().and_then(|code| code.parse().ok()) {
        Some(code) => app.switch_language(code).await,
        None => app.initialize(&resolver::system_locales()).await,
    };

    let mut doc = page_document();
    app.render(&mut doc);

    match app.phase() {
        Phase::Ready(state) => {
            println!("language: {} ({:?})", doc.language(), doc.direction());
            println!("title:    {}", doc.title());
            println!("selector: {}", doc.select_label());
            for control in doc.controls() {
                let marker = if control.active { "*" } else { " " };
                println!("  {} {}", marker, control.label);
            }
            for key in doc.translation_keys() {
                if let Some(text) = doc.text(&key) {
                    println!("{key}: {text}");
                }
            }

            // The widgets are wired independently of the pipeline.
            let gallery = ModalGallery::from_cards(vec![
                GalleryCard {
                    image_src: Some("img/screenshot-light.png".to_string()),
                    title: state
                        .translator()
                        .text("gallery.light")
                        .unwrap_or("Light theme")
                        .to_string(),
                },
                GalleryCard {
                    image_src: Some("img/screenshot-dark.png".to_string()),
                    title: state
                        .translator()
                        .text("gallery.dark")
                        .unwrap_or("Dark theme")
                        .to_string(),
                },
            ]);
            let reduced_motion = config::load()
                .ok()
                .and_then(|c| c.reduced_motion)
                .unwrap_or(false);
            let reveal = RevealAnimator::new(
                doc.translation_keys().len(),
                RevealPolicy::OneShot,
                RevealEnvironment {
                    reduced_motion,
                    observer_available: true,
                },
            );
            println!(
                "widgets: {} gallery item(s), {} reveal panel(s)",
                gallery.len(),
                reveal.panel_count()
            );
        }
        Phase::Fatal(message) => eprintln!("{message}"),
        Phase::Loading => {}
    }

    match outcome {
        SwitchOutcome::Failed => ExitCode::FAILURE,
        _ => ExitCode::SUCCESS,
    }
}
