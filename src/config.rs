use crate::site::{SiteConfig, MARKDOWN_THEME, SITE_URL};
use anyhow::{bail, Context, Result};
use url::Url;

/// Runtime overrides of the compiled-in site configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Absolute site URL without trailing slash
    pub site_url: String,

    /// Code highlighting theme
    pub markdown_theme: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let site_url = std::env::var("SITE_URL").unwrap_or_else(|_| SITE_URL.to_string());

        Ok(Self {
            site_url: normalize_site_url(&site_url)?,
            markdown_theme: std::env::var("MARKDOWN_THEME")
                .ok()
                .filter(|theme| !theme.trim().is_empty())
                .unwrap_or_else(|| MARKDOWN_THEME.to_string()),
        })
    }

    /// Site configuration with these overrides applied.
    pub fn site_config(&self) -> SiteConfig {
        SiteConfig {
            site_url: self.site_url.clone(),
            markdown_theme: self.markdown_theme.clone(),
            ..SiteConfig::default()
        }
    }
}

fn normalize_site_url(raw: &str) -> Result<String> {
    let parsed = Url::parse(raw.trim())
        .with_context(|| format!("SITE_URL is not a valid URL: '{}'", raw))?;

    if !matches!(parsed.scheme(), "http" | "https") || !parsed.has_host() {
        bail!("SITE_URL must be an absolute http(s) URL, got '{}'", raw);
    }

    Ok(parsed.as_str().trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        std::env::remove_var("SITE_URL");
        std::env::remove_var("MARKDOWN_THEME");
    }

    #[test]
    #[serial(env)]
    fn test_from_env_defaults() {
        clear_env();

        let config = Config::from_env().expect("defaults should load");
        assert_eq!(config.site_url, "https://rhcwlq89.github.io");
        assert_eq!(config.markdown_theme, "github-dark");
    }

    #[test]
    #[serial(env)]
    fn test_from_env_overrides() {
        clear_env();
        std::env::set_var("SITE_URL", "http://localhost:4321/");
        std::env::set_var("MARKDOWN_THEME", "nord");

        let config = Config::from_env().expect("overrides should load");
        assert_eq!(config.site_url, "http://localhost:4321");
        assert_eq!(config.markdown_theme, "nord");

        clear_env();
    }

    #[test]
    #[serial(env)]
    fn test_from_env_blank_theme_uses_default() {
        clear_env();
        std::env::set_var("MARKDOWN_THEME", "  ");

        let config = Config::from_env().unwrap();
        assert_eq!(config.markdown_theme, "github-dark");

        clear_env();
    }

    #[test]
    #[serial(env)]
    fn test_from_env_rejects_relative_site_url() {
        clear_env();
        std::env::set_var("SITE_URL", "rhcwlq89.github.io");

        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("SITE_URL"));

        clear_env();
    }

    #[test]
    fn test_normalize_site_url() {
        assert_eq!(
            normalize_site_url("https://example.com//").unwrap(),
            "https://example.com"
        );
        assert!(normalize_site_url("https://").is_err());
        assert!(normalize_site_url("ftp://example.com").is_err());
        assert!(normalize_site_url("mailto:me@example.com").is_err());
    }

    #[test]
    fn test_normalize_site_url_lowercases_host() {
        assert_eq!(
            normalize_site_url(" https://RHCWLQ89.github.io/ ").unwrap(),
            "https://rhcwlq89.github.io"
        );
    }

    #[test]
    fn test_site_config_applies_overrides() {
        let config = Config {
            site_url: "http://localhost:4321".to_string(),
            markdown_theme: "nord".to_string(),
        };
        let site = config.site_config();
        assert_eq!(site.site_url, "http://localhost:4321");
        assert_eq!(site.markdown_theme, "nord");
        assert_eq!(site.integrations, vec!["mdx", "sitemap"]);
    }
}
