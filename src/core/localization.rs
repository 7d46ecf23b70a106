// SPDX-License-Identifier: GPL-3.0-only

use std::sync::LazyLock;

use i18n_embed::{
    DefaultLocalizer, LanguageLoader, Localizer,
    fluent::{FluentLanguageLoader, fluent_language_loader},
};
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "i18n/"]
struct Localizations;

pub static LANGUAGE_LOADER: LazyLock<FluentLanguageLoader> = LazyLock::new(|| {
    let loader: FluentLanguageLoader = fluent_language_loader!();

    loader
        .load_fallback_language(&Localizations)
        .expect("Error while loading fallback language");

    loader
});

#[macro_export]
macro_rules! fl {
    ($message_id:literal) => {{
        i18n_embed_fl::fl!($crate::core::localization::LANGUAGE_LOADER, $message_id)
    }};

    ($message_id:literal, $($args:expr),*) => {{
        i18n_embed_fl::fl!($crate::core::localization::LANGUAGE_LOADER, $message_id, $($args), *)
    }};
}

/// Resolve a message id of the loaded bundle at runtime.
///
/// The pattern catalog references its texts by id, so those lookups cannot go
/// through [`fl!`]; application chrome strings can and should.
pub fn text(message_id: &str) -> String {
    LANGUAGE_LOADER.get(message_id)
}

/// Whether a message id resolves in the loaded bundle
pub fn exists(message_id: &str) -> bool {
    LANGUAGE_LOADER.has(message_id)
}

// Get the `Localizer` to be used for localizing this library.
pub fn localizer() -> Box<dyn Localizer> {
    Box::from(DefaultLocalizer::new(&*LANGUAGE_LOADER, &Localizations))
}

pub fn localize() {
    let localizer = localizer();
    let requested_languages = i18n_embed::DesktopLanguageRequester::requested_languages();

    if let Err(error) = localizer.select(&requested_languages) {
        tracing::error!("Error while loading languages: {error}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chrome_messages_resolve_in_the_fallback_bundle() {
        assert!(exists("app-title"));
        assert!(exists("empty-deck"));
        assert!(exists("card-position"));
    }

    #[test]
    fn unknown_message_ids_do_not_resolve() {
        assert!(!exists("definitely-not-a-message"));
    }

    #[test]
    fn runtime_lookup_returns_the_bundle_text() {
        assert_eq!(text("singleton-name"), "Singleton");
    }
}
