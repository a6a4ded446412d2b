// SPDX-License-Identifier: MPL-2.0
use crate::config::{Config, DEFAULT_LOCALE};
use crate::convert::SiPrefixes;
use fluent_bundle::{FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Message keys of the SI prefixes, femto through tera. The unit prefix
/// (index 5) is always empty and has no key.
const SI_PREFIX_KEYS: [Option<&str>; 10] = [
    Some("si-prefix-femto"),
    Some("si-prefix-pico"),
    Some("si-prefix-nano"),
    Some("si-prefix-micro"),
    Some("si-prefix-milli"),
    None,
    Some("si-prefix-kilo"),
    Some("si-prefix-mega"),
    Some("si-prefix-giga"),
    Some("si-prefix-tera"),
];

const SI_DECIMAL_SEPARATOR_KEY: &str = "si-decimal-separator";

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
    }
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("available_locales", &self.available_locales)
            .field("current_locale", &self.current_locale)
            .finish_non_exhaustive()
    }
}

impl I18n {
    /// Loads the embedded translations and picks a locale: `cli_lang`, then
    /// the configured language, then the system locale, then `en-US`.
    pub fn new(cli_lang: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale) = filename
                .strip_suffix(".ftl")
                .and_then(|stem| stem.parse::<LanguageIdentifier>().ok())
            else {
                continue;
            };
            let Some(content) = Asset::get(filename) else {
                continue;
            };
            match load_bundle(&locale, content.data.as_ref()) {
                Some(bundle) => {
                    bundles.insert(locale.clone(), bundle);
                    available_locales.push(locale);
                }
                None => log::warn!("Skipping unreadable translation file {filename}"),
            }
        }
        available_locales.sort_by_key(ToString::to_string);

        let current_locale = resolve_locale(cli_lang, config, &available_locales)
            .unwrap_or_else(default_locale);

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    #[must_use]
    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    /// Switches to `locale` if translations for it are available.
    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    /// Translates `key`, or returns `MISSING: key`.
    #[must_use]
    pub fn tr(&self, key: &str) -> String {
        self.message(key)
            .unwrap_or_else(|| format!("MISSING: {}", key))
    }

    /// SI prefixes of the current locale.
    ///
    /// Falls back to the built-in set for the language if the translations
    /// lack any prefix key.
    #[must_use]
    pub fn si_prefixes(&self) -> SiPrefixes {
        let mut symbols: [String; 10] = Default::default();
        for (symbol, key) in symbols.iter_mut().zip(SI_PREFIX_KEYS) {
            let Some(key) = key else { continue };
            match self.message(key) {
                Some(text) => *symbol = text,
                None => return SiPrefixes::for_language(self.current_locale.language.as_str()),
            }
        }
        match self.message(SI_DECIMAL_SEPARATOR_KEY) {
            Some(separator) => SiPrefixes::new(symbols, separator),
            None => SiPrefixes::for_language(self.current_locale.language.as_str()),
        }
    }

    fn message(&self, key: &str) -> Option<String> {
        let bundle = self.bundles.get(&self.current_locale)?;
        let pattern = bundle.get_message(key)?.value()?;
        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, None, &mut errors);
        errors.is_empty().then(|| value.to_string())
    }
}

fn load_bundle(locale: &LanguageIdentifier, data: &[u8]) -> Option<FluentBundle<FluentResource>> {
    let source = String::from_utf8_lossy(data).to_string();
    let resource = FluentResource::try_new(source).ok()?;
    let mut bundle = FluentBundle::new(vec![locale.clone()]);
    bundle.add_resource(resource).ok()?;
    Some(bundle)
}

fn default_locale() -> LanguageIdentifier {
    DEFAULT_LOCALE.parse().unwrap_or_default()
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let pick = |lang_str: &str| {
        lang_str
            .parse::<LanguageIdentifier>()
            .ok()
            .filter(|lang| available.contains(lang))
    };

    // 1. Check CLI args
    if let Some(lang) = cli_lang.as_deref().and_then(pick) {
        return Some(lang);
    }

    // 2. Check config file
    if let Some(lang) = config.general.language.as_deref().and_then(pick) {
        return Some(lang);
    }

    // 3. Check OS locale
    sys_locale::get_locale().as_deref().and_then(pick)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, GeneralConfig};
    use unic_langid::LanguageIdentifier;

    fn available() -> Vec<LanguageIdentifier> {
        vec!["en-US".parse().unwrap(), "ru".parse().unwrap()]
    }

    fn config_with(language: &str) -> Config {
        Config {
            general: GeneralConfig {
                language: Some(language.to_string()),
            },
            ..Config::default()
        }
    }

    #[test]
    fn test_resolve_locale_cli() {
        let config = config_with("en-US");
        let lang = resolve_locale(Some("ru".to_string()), &config, &available());
        assert_eq!(lang, Some("ru".parse().unwrap()));
    }

    #[test]
    fn test_resolve_locale_config() {
        let config = config_with("ru");
        let lang = resolve_locale(None, &config, &available());
        assert_eq!(lang, Some("ru".parse().unwrap()));
    }

    #[test]
    fn test_resolve_locale_skips_unavailable() {
        let config = config_with("ru");
        let lang = resolve_locale(Some("de".to_string()), &config, &available());
        assert_eq!(lang, Some("ru".parse().unwrap()));
    }

    #[test]
    fn embedded_locales_are_loaded() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        assert!(i18n.available_locales.contains(&"en-US".parse().unwrap()));
        assert!(i18n.available_locales.contains(&"ru".parse().unwrap()));
        assert_eq!(i18n.tr("dialog-button-ok"), "OK");
    }

    #[test]
    fn missing_key_is_marked() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        assert_eq!(i18n.tr("no-such-key"), "MISSING: no-such-key");
    }

    #[test]
    fn si_prefixes_follow_locale() {
        let mut i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        assert_eq!(i18n.si_prefixes(), SiPrefixes::english());

        i18n.set_locale("ru".parse().unwrap());
        assert_eq!(i18n.si_prefixes(), SiPrefixes::russian());
    }

    #[test]
    fn set_locale_ignores_unknown_locale() {
        let mut i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        i18n.set_locale("de".parse().unwrap());
        assert_eq!(i18n.current_locale().to_string(), "en-US");
    }
}
