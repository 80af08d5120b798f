//! Site-wide metadata and the build-time i18n routing configuration.

use crate::i18n::{
    alternate_path, build_localized_path, resolve_language_from_path, url_path, Language,
    LanguageRegistry, Translator,
};
use chrono::{Datelike, Utc};
use serde::Serialize;

pub const SITE_TITLE: &str = "TechBlog";
pub const SITE_DESCRIPTION: &str =
    "Spring Boot, Backend 개발, 기술 면접 준비에 관한 실무 중심의 기술 블로그입니다.";
pub const SITE_URL: &str = "https://rhcwlq89.github.io";
pub const SITE_LOCALE: &str = "ko_KR";
pub const SITE_LANG: &str = "ko";
pub const AUTHOR_NAME: &str = "rhcwlq89";
pub const CONTACT_EMAIL: &str = "ccaja21@gmail.com";

/// Code highlighting theme used by the markdown pipeline.
pub const MARKDOWN_THEME: &str = "github-dark";

/// Build integrations enabled for the site.
pub const INTEGRATIONS: &[&str] = &["mdx", "sitemap"];

/// Open Graph locale for a language code, falling back to the site locale.
pub fn og_locale(code: &str) -> &'static str {
    LanguageRegistry::get()
        .get_by_code(code)
        .map(|config| config.og_locale)
        .unwrap_or(SITE_LOCALE)
}

/// Locale routing of the site build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct I18nRouting {
    pub default_locale: Language,
    pub locales: Vec<Language>,
    /// Whether default-language pages carry their own prefix (`/ko/...`)
    pub prefix_default_locale: bool,
}

impl Default for I18nRouting {
    fn default() -> Self {
        Self {
            default_locale: Language::default_lang(),
            locales: LanguageRegistry::get()
                .list_enabled()
                .into_iter()
                .filter_map(|config| Language::from_code(config.code).ok())
                .collect(),
            prefix_default_locale: false,
        }
    }
}

/// Build configuration of the site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteConfig {
    /// Absolute site URL without trailing slash
    pub site_url: String,
    pub integrations: Vec<String>,
    pub i18n: I18nRouting,
    pub markdown_theme: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_url: SITE_URL.to_string(),
            integrations: INTEGRATIONS.iter().map(|name| name.to_string()).collect(),
            i18n: I18nRouting::default(),
            markdown_theme: MARKDOWN_THEME.to_string(),
        }
    }
}

/// One `<link rel="alternate" hreflang=...>` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlternateLink {
    pub hreflang: String,
    pub href: String,
}

impl SiteConfig {
    /// Absolute URL of `path` in `lang`.
    pub fn canonical_url(&self, path: &str, lang: Language) -> String {
        format!("{}{}", self.site_url, build_localized_path(path, lang))
    }

    /// `hreflang` alternates for the page at `url`, one per locale plus
    /// `x-default` pointing at the default language.
    pub fn alternate_links(&self, url: &str) -> Vec<AlternateLink> {
        let base = default_language_path(url);

        let mut links: Vec<_> = self
            .i18n
            .locales
            .iter()
            .map(|lang| AlternateLink {
                hreflang: lang.code().to_string(),
                href: self.canonical_url(&base, *lang),
            })
            .collect();

        links.push(AlternateLink {
            hreflang: "x-default".to_string(),
            href: self.canonical_url(&base, self.i18n.default_locale),
        });

        links
    }
}

/// Path of the page at `url` with any secondary-language prefix removed.
fn default_language_path(url: &str) -> String {
    let path = url_path(url);
    if resolve_language_from_path(&path).is_default() {
        path.into_owned()
    } else {
        alternate_path(&path).path
    }
}

/// Localized footer line for the given year.
pub fn copyright_notice(lang: Language, year: i32) -> String {
    let year = year.to_string();
    Translator::new(lang).format(
        "footer.copyright",
        &[("year", year.as_str()), ("author", AUTHOR_NAME)],
    )
}

pub fn current_year() -> i32 {
    Utc::now().year()
}
