//! Locale routing and translation helpers for the bilingual TechBlog.
//!
//! Korean is the default language and lives at the root of the site; English
//! pages live under the `/en` prefix.

pub mod config;
pub mod i18n;
pub mod report;
pub mod site;
