//! Localized strings, loaded from the Fluent resources under `i18n/`.

use crate::core::capabilities::TextProvider;
use crate::models::error::SError;
use i18n_embed::fluent::{fluent_language_loader, FluentLanguageLoader};
use i18n_embed::LanguageLoader;
use rust_embed::RustEmbed;
use tracing::{debug, warn};
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "i18n/"]
struct Localizations;

/// String tables compiled into the binary, English as the fallback.
/// Unknown keys come back as the key itself.
pub struct BuiltinText {
    loader: FluentLanguageLoader,
}

impl BuiltinText {
    pub fn new(code: &str) -> Result<Self, SError> {
        let loader = fluent_language_loader!();
        loader.load_fallback_language(&Localizations)?;
        let text = Self { loader };
        text.change_language(code);
        Ok(text)
    }

    pub fn language(&self) -> String {
        self.loader.current_language().to_string()
    }
}

impl TextProvider for BuiltinText {
    fn get_string(&self, key: &str) -> String {
        if self.loader.has(key) {
            self.loader.get(key)
        } else {
            key.to_string()
        }
    }

    fn change_language(&self, code: &str) {
        let requested: LanguageIdentifier = match code.parse() {
            Ok(id) => id,
            Err(e) => {
                warn!("Ignoring invalid language code {code:?}: {e}");
                return;
            }
        };
        match i18n_embed::select(&self.loader, &Localizations, &[requested]) {
            Ok(selected) => debug!("Switched language to {selected:?}"),
            Err(e) => warn!("Failed to load language {code}: {e}"),
        }
    }
}
