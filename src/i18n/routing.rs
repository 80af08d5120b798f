//! Locale routing: path-based language detection and localized links.
//!
//! The default language is served at the site root and the secondary
//! language under `/<code>`. A page is in the secondary language when the
//! first path segment equals that code exactly, so `/en` and `/en/posts/1`
//! are English while `/english` is Korean.

use crate::i18n::Language;
use serde::Serialize;
use std::borrow::Cow;
use url::Url;

/// The counterpart of a page in the other language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlternatePath {
    pub lang: Language,
    pub path: String,
}

/// Detect the language of a page from its path.
///
/// Only the first segment after the leading slash is inspected.
pub fn resolve_language_from_path(path: &str) -> Language {
    let secondary = Language::secondary();
    let first_segment = path
        .strip_prefix('/')
        .unwrap_or(path)
        .split('/')
        .next()
        .unwrap_or_default();

    if first_segment == secondary.code() {
        secondary
    } else {
        Language::default_lang()
    }
}

/// Detect the language of a page from a URL or bare path.
pub fn language_from_url(url: &str) -> Language {
    resolve_language_from_path(&url_path(url))
}

/// Prefix `path` for `lang`. Default-language paths are returned unchanged.
pub fn build_localized_path(path: &str, lang: Language) -> String {
    if lang.is_default() {
        path.to_string()
    } else {
        format!("{}{}", lang.path_prefix(), path)
    }
}

/// Compute the path of the same page in the other language.
///
/// `/en/posts/1` maps to `/posts/1`, bare `/en` maps to `/`, and any other
/// path gains the `/en` prefix. A path without a leading slash is treated
/// as if it had one.
pub fn alternate_path(url: &str) -> AlternatePath {
    let path = match url_path(url) {
        path if path.starts_with('/') => path,
        path => Cow::Owned(format!("/{path}")),
    };
    let secondary = Language::secondary();
    let prefix = secondary.path_prefix();

    match path.strip_prefix(prefix.as_str()) {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => AlternatePath {
            lang: Language::default_lang(),
            path: if rest.is_empty() { "/".to_string() } else { rest.to_string() },
        },
        _ => AlternatePath {
            lang: secondary,
            path: format!("{prefix}{path}"),
        },
    }
}

/// Extract the path component of a URL-like string.
///
/// Absolute URLs are parsed with `Url` and yield their (percent-encoded)
/// path. Anything else is a bare path whose query string and fragment are
/// dropped. An empty path is returned as `/`.
pub fn url_path(url: &str) -> Cow<'_, str> {
    match Url::parse(url) {
        Ok(parsed) if !parsed.cannot_be_a_base() => Cow::Owned(parsed.path().to_string()),
        _ => {
            let end = url.find(['?', '#']).unwrap_or(url.len());
            match &url[..end] {
                "" => Cow::Borrowed("/"),
                path => Cow::Borrowed(path),
            }
        }
    }
}
