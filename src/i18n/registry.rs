//! Language registry: Single source of truth for all supported languages.
//!
//! The blog ships exactly two languages. Korean is the default and is served
//! without a path prefix; English is the secondary language and is served
//! under `/en`. The registry is built once on first access with `OnceLock`
//! and stays immutable thereafter.

use crate::i18n::LanguageError;
use std::sync::OnceLock;

/// Configuration for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "ko", "en")
    pub code: &'static str,

    /// English name of the language (e.g., "Korean", "English")
    pub name: &'static str,

    /// Native name of the language, shown in the language switcher
    pub native_name: &'static str,

    /// Open Graph locale (e.g., "ko_KR")
    pub og_locale: &'static str,

    /// Whether this is the default language (served without a path prefix)
    pub is_default: bool,

    /// Whether this language is enabled for use
    pub enabled: bool,
}

/// Language registry. `get()` holds the process-wide instance.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry::new(default_languages()))
    }

    /// Build a registry from an explicit language table.
    pub fn new(languages: Vec<LanguageConfig>) -> Self {
        Self { languages }
    }

    /// Get a language configuration by its code.
    ///
    /// # Returns
    /// * `Some(&LanguageConfig)` if the language exists
    /// * `None` if the language is not found
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Resolve a code to an enabled language.
    ///
    /// # Returns
    /// * `Ok(&LanguageConfig)` if the code is registered and enabled
    /// * `Err(LanguageError)` for empty, unknown, or disabled codes
    pub fn resolve(&self, code: &str) -> Result<&LanguageConfig, LanguageError> {
        if code.is_empty() {
            return Err(LanguageError::Empty);
        }

        match self.get_by_code(code) {
            Some(config) if config.enabled => Ok(config),
            Some(_) => Err(LanguageError::Disabled(code.to_string())),
            None => Err(LanguageError::Unknown(code.to_string())),
        }
    }

    /// Get all enabled languages, default language first.
    pub fn list_enabled(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().filter(|lang| lang.enabled).collect()
    }

    /// Get all languages (including disabled ones).
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// Get the default language configuration.
    ///
    /// # Panics
    /// Panics if the registry does not define exactly one default language.
    /// The table is compiled in, so this only fires on an edit mistake.
    pub fn default_language(&self) -> &LanguageConfig {
        let defaults: Vec<_> = self.languages.iter().filter(|lang| lang.is_default).collect();

        match defaults.len() {
            0 => panic!("No default language found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default languages found in registry"),
        }
    }

    /// Get the secondary (prefixed) language configuration.
    ///
    /// # Panics
    /// Panics if the registry does not define exactly one non-default language.
    pub fn secondary_language(&self) -> &LanguageConfig {
        let secondary: Vec<_> = self.languages.iter().filter(|lang| !lang.is_default).collect();

        match secondary.len() {
            0 => panic!("No secondary language found in registry"),
            1 => secondary[0],
            _ => panic!("Multiple secondary languages found in registry"),
        }
    }

    /// Check if a language code is supported and enabled.
    pub fn is_enabled(&self, code: &str) -> bool {
        self.get_by_code(code)
            .map(|lang| lang.enabled)
            .unwrap_or(false)
    }
}

fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "ko",
            name: "Korean",
            native_name: "한국어",
            og_locale: "ko_KR",
            is_default: true,
            enabled: true,
        },
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            og_locale: "en_US",
            is_default: false,
            enabled: true,
        },
    ]
}
