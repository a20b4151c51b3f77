// SPDX-License-Identifier: MPL-2.0
use crate::app::config::Config;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::path::Path;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Locale every lookup falls back to. Its catalog defines the complete key
/// set; the other catalogs may omit keys and inherit through fallback.
pub const FALLBACK_LOCALE: &str = "en";

/// Localization state: one Fluent bundle per registered locale plus the
/// active and fallback locale choices.
///
/// Resolved strings are plain text for widget display. Interpolated values
/// are inserted verbatim, with no markup escaping; catalogs and arguments
/// are repo-owned content, never untrusted input.
pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
    fallback_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, None, &Config::default())
    }
}

impl I18n {
    /// Builds the localization state from the embedded catalogs (or from an
    /// on-disk directory when `i18n_dir` is given, for translation work) and
    /// picks the initial locale via [`resolve_locale`].
    ///
    /// Construction never fails: catalogs that cannot be read or parsed are
    /// skipped with a diagnostic on stderr.
    pub fn new(cli_lang: Option<String>, i18n_dir: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        match i18n_dir {
            Some(dir) => {
                load_bundles_from_dir(Path::new(&dir), &mut bundles, &mut available_locales);
            }
            None => load_embedded_bundles(&mut bundles, &mut available_locales),
        }

        // Deterministic registry order, so language-only matching (`zh`)
        // always resolves to the same regional catalog.
        available_locales.sort_by_key(LanguageIdentifier::to_string);

        let fallback_locale: LanguageIdentifier = FALLBACK_LOCALE
            .parse()
            .expect("fallback locale constant must parse");
        let current_locale = resolve_locale(cli_lang, config, &available_locales)
            .unwrap_or_else(|| fallback_locale.clone());

        Self {
            bundles,
            available_locales,
            current_locale,
            fallback_locale,
        }
    }

    /// Switches the active locale and returns whether the switch happened.
    /// Unknown locales are ignored apart from a diagnostic line, leaving the
    /// active locale unchanged.
    pub fn set_locale(&mut self, locale: LanguageIdentifier) -> bool {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
            true
        } else {
            eprintln!("Ignoring switch to unknown locale: {}", locale);
            false
        }
    }

    /// Returns the active locale.
    #[must_use]
    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    /// Resolves `key` against the active catalog, then the fallback catalog.
    ///
    /// An unresolvable key yields the key string itself, so a missing
    /// translation degrades to a visible marker instead of an error.
    #[must_use]
    pub fn tr(&self, key: &str) -> String {
        self.format_message(&self.current_locale, key, None)
            .or_else(|| self.format_message(&self.fallback_locale, key, None))
            .unwrap_or_else(|| key.to_string())
    }

    /// Like [`tr`](Self::tr), with arguments for interpolation.
    ///
    /// A variable the catalog references but `args` does not provide is
    /// rendered as Fluent's literal placeholder rather than failing.
    #[must_use]
    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, *value);
        }

        self.format_message(&self.current_locale, key, Some(&fluent_args))
            .or_else(|| self.format_message(&self.fallback_locale, key, Some(&fluent_args)))
            .unwrap_or_else(|| key.to_string())
    }

    /// Formats one message from one catalog. Returns `None` when the catalog,
    /// the message, or its value is absent. Formatting errors (for example a
    /// missing argument) still produce output: Fluent substitutes a literal
    /// placeholder for the failing part.
    fn format_message(
        &self,
        locale: &LanguageIdentifier,
        key: &str,
        args: Option<&FluentArgs>,
    ) -> Option<String> {
        let bundle = self.bundles.get(locale)?;
        let message = bundle.get_message(key)?;
        let pattern = message.value()?;

        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, args, &mut errors);
        Some(value.to_string())
    }
}

/// Loads every embedded `assets/i18n/<locale>.ftl` catalog.
fn load_embedded_bundles(
    bundles: &mut HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    available_locales: &mut Vec<LanguageIdentifier>,
) {
    for file in Asset::iter() {
        let filename = file.as_ref();
        let Some(locale_str) = filename.strip_suffix(".ftl") else {
            continue;
        };
        let Ok(locale) = locale_str.parse::<LanguageIdentifier>() else {
            continue;
        };
        if let Some(content) = Asset::get(filename) {
            let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
            add_bundle(locale, source, bundles, available_locales);
        }
    }
}

/// Loads `.ftl` catalogs from a directory instead of the embedded assets.
/// Used by the `--i18n-dir` flag so translators can iterate without rebuilding.
fn load_bundles_from_dir(
    dir: &Path,
    bundles: &mut HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    available_locales: &mut Vec<LanguageIdentifier>,
) {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            eprintln!("Failed to read i18n directory {}: {}", dir.display(), err);
            return;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        let Some(filename) = path.file_name().and_then(|name| name.to_str()) else {
            continue;
        };
        let Some(locale_str) = filename.strip_suffix(".ftl") else {
            continue;
        };
        let Ok(locale) = locale_str.parse::<LanguageIdentifier>() else {
            continue;
        };

        match std::fs::read_to_string(&path) {
            Ok(source) => add_bundle(locale, source, bundles, available_locales),
            Err(err) => eprintln!("Failed to read {}: {}", path.display(), err),
        }
    }
}

/// Parses one catalog source and registers its bundle.
fn add_bundle(
    locale: LanguageIdentifier,
    source: String,
    bundles: &mut HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    available_locales: &mut Vec<LanguageIdentifier>,
) {
    let resource = match FluentResource::try_new(source) {
        Ok(resource) => resource,
        Err((resource, errors)) => {
            // A partially parsed resource is still usable; broken entries are dropped.
            eprintln!(
                "Catalog for {} has {} parse error(s); affected entries skipped",
                locale,
                errors.len()
            );
            resource
        }
    };

    let mut bundle = FluentBundle::new(vec![locale.clone()]);
    // Skip Unicode bidi isolation marks around placeables; interpolated
    // values here are plain text and the marks garble naive string checks.
    bundle.set_use_isolating(false);

    if let Err(errors) = bundle.add_resource(resource) {
        eprintln!(
            "Catalog for {} has {} duplicate message(s)",
            locale,
            errors.len()
        );
    }

    bundles.insert(locale.clone(), bundle);
    available_locales.push(locale);
}

/// Picks the initial locale by walking the detection chain. The first source
/// that names a registered locale wins; sources naming unknown locales do
/// not stop the chain. Returns `None` when nothing matches (the caller then
/// applies the built-in default).
fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    // 1. Check CLI args
    if let Some(lang_str) = cli_lang {
        if let Some(locale) = match_available(&lang_str, available) {
            return Some(locale);
        }
    }

    // 2. Check config file
    if let Some(lang_str) = &config.general.language {
        if let Some(locale) = match_available(lang_str, available) {
            return Some(locale);
        }
    }

    // 3. Check OS locale list
    for os_locale in sys_locale::get_locales() {
        if let Some(locale) = match_available(&os_locale, available) {
            return Some(locale);
        }
    }

    None
}

/// Matches a candidate locale string against the registry: exact match
/// first, then by primary language subtag. `en-US` matches a registered
/// `en`; `zh` matches the first registered `zh-*`.
fn match_available(
    candidate: &str,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let candidate: LanguageIdentifier = candidate.parse().ok()?;

    if let Some(exact) = available.iter().find(|locale| **locale == candidate) {
        return Some(exact.clone());
    }

    available
        .iter()
        .find(|locale| locale.language == candidate.language)
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    /// Every key the English catalog defines. Kept in sync with
    /// `assets/i18n/en.ftl`; the coverage test below fails if a key is
    /// added there without a translation path.
    const FALLBACK_KEYS: &[&str] = &[
        "window-title",
        "language-name-en",
        "language-name-zh-CN",
        "language-name-zh-TW",
        "loading",
        "hero-title",
        "hero-subtitle",
        "buttons-github",
        "buttons-twitter",
        "buttons-download",
        "buttons-agent",
        "features-identity-title",
        "features-identity-desc",
        "features-execution-title",
        "features-execution-desc",
        "features-intent-title",
        "features-intent-desc",
        "vision-title",
        "vision-desc",
        "footer",
        "notification-config-load-error",
        "notification-config-save-error",
        "notification-open-url-error",
    ];

    fn i18n_with_locale(locale: &str) -> I18n {
        let mut i18n = I18n::new(Some(locale.to_string()), None, &Config::default());
        assert_eq!(i18n.current_locale().to_string(), locale);
        // Exercise the switching path too, not just detection.
        assert!(i18n.set_locale(locale.parse().unwrap()));
        i18n
    }

    #[test]
    fn embedded_catalogs_register_three_locales() {
        let i18n = I18n::default();
        let locales: Vec<String> = i18n
            .available_locales
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(locales, vec!["en", "zh-CN", "zh-TW"]);
    }

    #[test]
    fn every_locale_resolves_every_fallback_key() {
        // Checks each catalog directly (not through the fallback chain), so
        // a translation missing from zh-CN or zh-TW fails here instead of
        // silently resolving to English.
        let i18n = I18n::default();
        for locale in &i18n.available_locales {
            for key in FALLBACK_KEYS {
                let resolved = i18n.format_message(locale, key, None);
                match resolved {
                    Some(text) => assert!(
                        !text.is_empty(),
                        "key {} is empty for locale {}",
                        key,
                        locale
                    ),
                    None => panic!("key {} missing from locale {}", key, locale),
                }
            }
        }
    }

    #[test]
    fn unknown_key_returns_key_literal() {
        let i18n = I18n::default();
        assert_eq!(i18n.tr("no-such-key"), "no-such-key");
    }

    #[test]
    fn missing_key_in_active_catalog_falls_back_to_english() {
        let dir = tempdir().expect("Failed to create temporary directory");
        std::fs::write(
            dir.path().join("en.ftl"),
            "window-title = AGIPOCKET\nloading = Loading...\n",
        )
        .expect("Failed to write en catalog");
        std::fs::write(dir.path().join("zh-CN.ftl"), "window-title = AGIPOCKET\n")
            .expect("Failed to write zh-CN catalog");

        let mut i18n = I18n::new(
            None,
            Some(dir.path().to_string_lossy().to_string()),
            &Config::default(),
        );
        i18n.set_locale("zh-CN".parse().unwrap());

        // `loading` is absent from the active catalog; the English value wins.
        assert_eq!(i18n.tr("loading"), "Loading...");
    }

    #[test]
    fn set_locale_with_unknown_code_is_a_noop() {
        let mut i18n = i18n_with_locale("en");
        assert!(!i18n.set_locale("fr".parse().unwrap()));
        assert_eq!(i18n.current_locale().to_string(), "en");
    }

    #[test]
    fn switching_to_simplified_chinese_translates_hero() {
        let mut i18n = i18n_with_locale("en");
        i18n.set_locale("zh-CN".parse().unwrap());
        assert_eq!(i18n.tr("hero-title"), "为 AI 智能体打造的钱包");
    }

    #[test]
    fn footer_interpolates_year() {
        let i18n = I18n::default();
        let footer = i18n.tr_with_args("footer", &[("year", "2024")]);
        assert!(footer.contains("2024"), "got: {}", footer);
    }

    #[test]
    fn footer_without_argument_keeps_placeholder() {
        let i18n = I18n::default();
        let footer = i18n.tr("footer");
        assert!(footer.contains("year"), "got: {}", footer);
    }

    #[test]
    fn interpolated_output_carries_no_isolation_marks() {
        let i18n = I18n::default();
        let footer = i18n.tr_with_args("footer", &[("year", "2024")]);
        assert!(!footer.contains('\u{2068}') && !footer.contains('\u{2069}'));
    }

    #[test]
    fn test_resolve_locale_cli() {
        let config = Config::default();
        let available: Vec<LanguageIdentifier> =
            vec!["en".parse().unwrap(), "zh-CN".parse().unwrap()];
        let lang = resolve_locale(Some("zh-CN".to_string()), &config, &available);
        assert_eq!(lang, Some("zh-CN".parse().unwrap()));
    }

    #[test]
    fn test_resolve_locale_config() {
        let config = Config::with_language("zh-CN");
        let available: Vec<LanguageIdentifier> =
            vec!["en".parse().unwrap(), "zh-CN".parse().unwrap()];
        let lang = resolve_locale(None, &config, &available);
        assert_eq!(lang, Some("zh-CN".parse().unwrap()));
    }

    #[test]
    fn cli_language_beats_saved_preference() {
        let config = Config::with_language("zh-CN");
        let available: Vec<LanguageIdentifier> = vec![
            "en".parse().unwrap(),
            "zh-CN".parse().unwrap(),
            "zh-TW".parse().unwrap(),
        ];
        let lang = resolve_locale(Some("zh-TW".to_string()), &config, &available);
        assert_eq!(lang, Some("zh-TW".parse().unwrap()));
    }

    #[test]
    fn unknown_cli_language_continues_down_the_chain() {
        let config = Config::with_language("zh-TW");
        let available: Vec<LanguageIdentifier> =
            vec!["en".parse().unwrap(), "zh-TW".parse().unwrap()];
        let lang = resolve_locale(Some("fr".to_string()), &config, &available);
        assert_eq!(lang, Some("zh-TW".parse().unwrap()));
    }

    #[test]
    fn match_available_prefers_exact_over_language_match() {
        let available: Vec<LanguageIdentifier> =
            vec!["zh-CN".parse().unwrap(), "zh-TW".parse().unwrap()];
        assert_eq!(
            match_available("zh-TW", &available),
            Some("zh-TW".parse().unwrap())
        );
    }

    #[test]
    fn match_available_falls_back_to_primary_language() {
        let available: Vec<LanguageIdentifier> =
            vec!["en".parse().unwrap(), "zh-CN".parse().unwrap()];
        assert_eq!(
            match_available("en-US", &available),
            Some("en".parse().unwrap())
        );
        assert_eq!(
            match_available("zh", &available),
            Some("zh-CN".parse().unwrap())
        );
        assert_eq!(match_available("fr", &available), None);
    }

    #[test]
    fn resolved_locale_is_always_registered() {
        // Step 3 consults the OS, so the outcome varies by machine; the
        // invariant that holds everywhere is registry membership.
        let i18n = I18n::default();
        assert!(i18n.available_locales.contains(i18n.current_locale()));
    }
}
