//! UI string lookup with fallback.
//!
//! Lookup order: the requested language, then the default language, then the
//! key itself. An empty entry counts as missing at every level. Returning
//! the key keeps a missing entry visible on the page instead of rendering an
//! empty string.

use crate::i18n::{Dictionary, Language, TranslationMetrics};
use regex::{Captures, Regex};
use std::sync::OnceLock;
use tracing::{debug, warn};

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

/// Matches `{name}` placeholders.
pub(crate) fn placeholder_regex() -> &'static Regex {
    PLACEHOLDER_REGEX
        .get_or_init(|| Regex::new(r"\{([A-Za-z0-9_]+)\}").expect("valid placeholder regex"))
}

/// Translator bound to one language and one dictionary.
#[derive(Clone, Copy)]
pub struct Translator<'d> {
    lang: Language,
    dict: &'d Dictionary,
    metrics: &'d TranslationMetrics,
}

impl Translator<'static> {
    /// Translator over the built-in dictionary.
    pub fn new(lang: Language) -> Self {
        Self::with_dictionary(lang, Dictionary::builtin())
    }
}

impl<'d> Translator<'d> {
    pub fn with_dictionary(lang: Language, dict: &'d Dictionary) -> Self {
        Self {
            lang,
            dict,
            metrics: TranslationMetrics::global(),
        }
    }

    /// Record lookups into `metrics` instead of the global counters.
    pub fn with_metrics(self, metrics: &'d TranslationMetrics) -> Self {
        Self { metrics, ..self }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// Look up `key`, falling back to the default language and finally to
    /// the key itself.
    pub fn t<'k>(&self, key: &'k str) -> &'k str {
        let metrics = self.metrics;
        metrics.record_lookup();

        if let Some(value) = self.lookup(self.lang, key) {
            return value;
        }

        let default = Language::default_lang();
        if self.lang != default {
            if let Some(value) = self.lookup(default, key) {
                debug!(lang = %self.lang, key, "UI string missing, using default language");
                metrics.record_fallback();
                return value;
            }
        }

        warn!(lang = %self.lang, key, "UI string missing in every language, returning key");
        metrics.record_miss();
        key
    }

    fn lookup(&self, lang: Language, key: &str) -> Option<&'static str> {
        self.dict
            .get(lang.code(), key)
            .filter(|value| !value.is_empty())
    }

    /// Look up `key` and substitute `{name}` placeholders from `args`.
    ///
    /// Placeholders without a matching argument are left untouched.
    pub fn format(&self, key: &str, args: &[(&str, &str)]) -> String {
        let template = self.t(key);
        placeholder_regex()
            .replace_all(template, |caps: &Captures| {
                let name = &caps[1];
                args.iter()
                    .find(|(arg, _)| *arg == name)
                    .map(|(_, value)| (*value).to_string())
                    .unwrap_or_else(|| caps[0].to_string())
            })
            .into_owned()
    }
}

/// Translate `key` for `lang` using the built-in dictionary.
pub fn translate(lang: Language, key: &str) -> &str {
    Translator::new(lang).t(key)
}

/// Translate `key` for a raw language code.
///
/// Unsupported codes are treated as the default language.
pub fn translate_code<'k>(code: &str, key: &'k str) -> &'k str {
    let lang = Language::from_code(code).unwrap_or_else(|err| {
        debug!(code, error = %err, "Unsupported language code, using default language");
        Language::default_lang()
    });
    Translator::new(lang).t(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    const KO_TABLE: &[(&str, &str)] = &[
        ("title", "테크블로그"),
        ("nav.home", "홈"),
        ("post.readingTime", "{minutes}분 읽기"),
    ];
    const EN_TABLE: &[(&str, &str)] = &[
        ("title", "TechBlog"),
        ("post.readingTime", "{minutes} min read"),
    ];

    fn partial_dictionary() -> Dictionary {
        Dictionary::from_tables(&[("ko", KO_TABLE), ("en", EN_TABLE)])
    }

    // ==================== Built-in Dictionary Tests ====================

    #[test]
    fn test_translate_english_title() {
        assert_eq!(translate(Language::ENGLISH, "title"), "TechBlog");
    }

    #[test]
    fn test_translate_korean() {
        assert_eq!(translate(Language::KOREAN, "nav.blog"), "블로그");
        assert_eq!(translate(Language::ENGLISH, "nav.blog"), "Blog");
    }

    #[test]
    fn test_translate_code_unsupported_uses_default_language() {
        assert_eq!(
            translate_code("xx", "post.toc"),
            translate(Language::KOREAN, "post.toc")
        );
    }

    #[test]
    fn test_translate_code_supported() {
        assert_eq!(translate_code("en", "post.toc"), "Table of Contents");
    }

    #[test]
    fn test_translate_unknown_key_returns_key() {
        assert_eq!(translate(Language::ENGLISH, "does.not.exist"), "does.not.exist");
        assert_eq!(translate_code("xx", "does.not.exist"), "does.not.exist");
    }

    // ==================== Fallback Tests ====================

    #[test]
    fn test_missing_key_falls_back_to_default_language() {
        let dict = partial_dictionary();
        let t = Translator::with_dictionary(Language::ENGLISH, &dict);
        assert_eq!(t.t("nav.home"), "홈");
    }

    #[test]
    fn test_present_key_does_not_fall_back() {
        let dict = partial_dictionary();
        let t = Translator::with_dictionary(Language::ENGLISH, &dict);
        assert_eq!(t.t("title"), "TechBlog");
    }

    #[test]
    fn test_empty_entry_falls_back_to_default_language() {
        const EN_EMPTY: &[(&str, &str)] = &[("title", "")];
        let dict = Dictionary::from_tables(&[("ko", KO_TABLE), ("en", EN_EMPTY)]);
        let metrics = TranslationMetrics::new();
        let t = Translator::with_dictionary(Language::ENGLISH, &dict).with_metrics(&metrics);

        assert_eq!(t.t("title"), "테크블로그");
        assert_eq!(metrics.fallbacks(), 1);
    }

    #[test]
    fn test_empty_entry_everywhere_returns_key() {
        const KO_EMPTY: &[(&str, &str)] = &[("title", "")];
        let dict = Dictionary::from_tables(&[("ko", KO_EMPTY), ("en", KO_EMPTY)]);
        let t = Translator::with_dictionary(Language::ENGLISH, &dict);

        assert_eq!(t.t("title"), "title");
    }

    #[test]
    fn test_missing_language_table_uses_default() {
        let dict = Dictionary::from_tables(&[("ko", KO_TABLE)]);
        let t = Translator::with_dictionary(Language::ENGLISH, &dict);
        assert_eq!(t.t("title"), "테크블로그");
    }

    #[test]
    fn test_metrics_recorded() {
        let metrics = TranslationMetrics::new();
        let dict = partial_dictionary();
        let t = Translator::with_dictionary(Language::ENGLISH, &dict).with_metrics(&metrics);
        t.t("title");
        t.t("nav.home");
        t.t("missing");

        assert_eq!(metrics.lookups(), 3);
        assert_eq!(metrics.fallbacks(), 1);
        assert_eq!(metrics.misses(), 1);
    }

    #[test]
    fn test_default_language_miss_is_not_a_fallback() {
        let metrics = TranslationMetrics::new();
        let dict = partial_dictionary();
        let t = Translator::with_dictionary(Language::KOREAN, &dict).with_metrics(&metrics);
        assert_eq!(t.t("missing"), "missing");

        assert_eq!(metrics.fallbacks(), 0);
        assert_eq!(metrics.misses(), 1);
    }

    // ==================== Format Tests ====================

    #[test]
    fn test_format_substitutes_placeholders() {
        let dict = partial_dictionary();
        let t = Translator::with_dictionary(Language::ENGLISH, &dict);
        assert_eq!(t.format("post.readingTime", &[("minutes", "7")]), "7 min read");
    }

    #[test]
    fn test_format_keeps_unknown_placeholders() {
        let t = Translator::new(Language::ENGLISH);
        assert_eq!(
            t.format("footer.copyright", &[("year", "2025")]),
            "© 2025 {author}. All rights reserved."
        );
    }

    #[test]
    fn test_format_without_placeholders() {
        let t = Translator::new(Language::KOREAN);
        assert_eq!(t.format("post.toc", &[("unused", "x")]), "목차");
    }

    #[test]
    fn test_language_accessor() {
        assert_eq!(Translator::new(Language::ENGLISH).language(), Language::ENGLISH);
    }
}
