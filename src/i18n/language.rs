//! Language type: validated language representation.
//!
//! `Language` is a small `Copy` handle whose code always points at an entry
//! of the `LanguageRegistry`.

use crate::i18n::{LanguageConfig, LanguageRegistry};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised when parsing a language code from untrusted text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LanguageError {
    #[error("Language code is empty")]
    Empty,

    #[error("Unknown language code: '{0}'")]
    Unknown(String),

    #[error("Language '{0}' is not enabled")]
    Disabled(String),
}

/// A validated language.
///
/// Serializes as its bare code (`"ko"`, `"en"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Language {
    code: &'static str,
}

impl Language {
    /// Korean, the default language.
    pub const KOREAN: Language = Language { code: "ko" };

    /// English, served under the `/en` prefix.
    pub const ENGLISH: Language = Language { code: "en" };

    /// Create a Language from a language code string.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is registered and enabled
    /// * `Err(LanguageError)` otherwise
    pub fn from_code(code: &str) -> Result<Language, LanguageError> {
        LanguageRegistry::get()
            .resolve(code)
            .map(|config| Language { code: config.code })
    }

    /// The default language (Korean).
    pub fn default_lang() -> Language {
        Language {
            code: LanguageRegistry::get().default_language().code,
        }
    }

    /// The secondary language (English).
    pub fn secondary() -> Language {
        Language {
            code: LanguageRegistry::get().secondary_language().code,
        }
    }

    /// Get the ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the code is not registered, which cannot happen for a
    /// `Language` built through `from_code` or the constants.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    pub fn name(&self) -> &'static str {
        self.config().name
    }

    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Open Graph locale (e.g., "ko_KR", "en_US").
    pub fn og_locale(&self) -> &'static str {
        self.config().og_locale
    }

    /// Check if this is the default (unprefixed) language.
    pub fn is_default(&self) -> bool {
        self.config().is_default
    }

    /// URL path prefix for this language: empty for the default language,
    /// `/<code>` otherwise.
    pub fn path_prefix(&self) -> String {
        if self.is_default() {
            String::new()
        } else {
            format!("/{}", self.code)
        }
    }

    /// The other language of the pair.
    pub fn other(&self) -> Language {
        if self.is_default() {
            Language::secondary()
        } else {
            Language::default_lang()
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::default_lang()
    }
}

impl FromStr for Language {
    type Err = LanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s.trim())
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}
