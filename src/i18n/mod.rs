//! Internationalization (i18n) module for the ko/en blog.
//!
//! All language-related logic, localized UI strings, and locale routing
//! helpers are contained here.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for the supported languages and their metadata
//! - `language`: Type-safe `Language` validated against the registry
//! - `strings`: Static UI dictionaries, one per language
//! - `translator`: Key lookup with default-language and key fallback
//! - `routing`: Path-based language detection and localized/alternate paths
//! - `validator`: Dictionary completeness and placeholder checks
//! - `metrics`: Lookup counters (hits, fallbacks, misses)
//!
//! # Example
//!
//! ```rust,ignore
//! use techblog_i18n::i18n::{alternate_path, resolve_language_from_path, Translator};
//!
//! let lang = resolve_language_from_path("/en/posts/1");
//! let t = Translator::new(lang);
//! let title = t.t("title");
//! let switch = alternate_path("/en/posts/1"); // { ko, "/posts/1" }
//! ```

mod language;
mod metrics;
mod registry;
mod routing;
mod strings;
mod translator;
mod validator;

pub use language::{Language, LanguageError};
pub use metrics::{MetricsReport, TranslationMetrics};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use routing::{
    alternate_path, build_localized_path, language_from_url, resolve_language_from_path,
    url_path, AlternatePath,
};
pub use strings::Dictionary;
pub use translator::{translate, translate_code, Translator};
pub use validator::{DictionaryValidator, ValidationReport};
