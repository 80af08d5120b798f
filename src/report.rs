//! Per-page route report: resolved language, language-switch target, and
//! absolute URLs, as consumed when auditing the generated site's links.

use crate::i18n::{alternate_path, resolve_language_from_path, url_path, Language, Translator};
use crate::site::{copyright_notice, current_year, SiteConfig};
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteReport {
    pub path: String,
    pub lang: Language,
    pub alternate_lang: Language,
    pub alternate_path: String,
    pub canonical_url: String,
    pub alternate_url: String,
    /// Label of the language switcher link on this page
    pub switch_label: String,
    /// Footer line for the current year
    pub copyright: String,
}

impl RouteReport {
    pub fn for_path(site: &SiteConfig, input: &str) -> Self {
        let path = url_path(input);
        let alternate = alternate_path(&path);
        let lang = resolve_language_from_path(&path);

        Self {
            path: path.to_string(),
            lang,
            alternate_lang: alternate.lang,
            canonical_url: format!("{}{}", site.site_url, path),
            alternate_url: format!("{}{}", site.site_url, alternate.path),
            alternate_path: alternate.path,
            switch_label: Translator::new(lang).t("lang.switch").to_string(),
            copyright: copyright_notice(lang, current_year()),
        }
    }
}

/// Read one path per line. Blank lines and `#` comments are skipped.
pub fn read_paths(file: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(file)
        .with_context(|| format!("Failed to read paths from {}", file.display()))?;

    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}
