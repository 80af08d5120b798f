//! Static UI dictionaries.
//!
//! Each language has a flat table of `key -> string`. Placeholders use the
//! `{name}` syntax and are filled in by `Translator::format`.

use std::collections::HashMap;
use std::sync::OnceLock;

// ==================== Korean Strings ====================

/// Korean UI strings (default language, complete key set)
pub const KOREAN_STRINGS: &[(&str, &str)] = &[
    ("title", "TechBlog"),
    (
        "description",
        "Spring Boot, Backend 개발, 기술 면접 준비에 관한 실무 중심의 기술 블로그입니다.",
    ),
    // Navigation
    ("nav.home", "홈"),
    ("nav.blog", "블로그"),
    ("nav.tags", "태그"),
    ("nav.about", "소개"),
    // Posts
    ("post.publishedOn", "{date} 게시"),
    ("post.updatedOn", "{date} 수정"),
    ("post.readingTime", "{minutes}분 읽기"),
    ("post.toc", "목차"),
    ("post.prev", "이전 글"),
    ("post.next", "다음 글"),
    ("blog.empty", "아직 작성된 글이 없습니다."),
    // Tags
    ("tags.heading", "태그"),
    ("tags.postsTagged", "'{tag}' 태그가 달린 글"),
    // Chrome
    ("lang.switch", "English"),
    ("footer.copyright", "© {year} {author}. All rights reserved."),
    ("footer.contact", "문의: {email}"),
    ("notFound.title", "페이지를 찾을 수 없습니다"),
    ("notFound.back", "홈으로 돌아가기"),
];

// ==================== English Strings ====================

/// English UI strings
pub const ENGLISH_STRINGS: &[(&str, &str)] = &[
    ("title", "TechBlog"),
    (
        "description",
        "A hands-on tech blog about Spring Boot, backend development, and technical interview preparation.",
    ),
    // Navigation
    ("nav.home", "Home"),
    ("nav.blog", "Blog"),
    ("nav.tags", "Tags"),
    ("nav.about", "About"),
    // Posts
    ("post.publishedOn", "Published on {date}"),
    ("post.updatedOn", "Updated on {date}"),
    ("post.readingTime", "{minutes} min read"),
    ("post.toc", "Table of Contents"),
    ("post.prev", "Previous post"),
    ("post.next", "Next post"),
    ("blog.empty", "No posts yet."),
    // Tags
    ("tags.heading", "Tags"),
    ("tags.postsTagged", "Posts tagged '{tag}'"),
    // Chrome
    ("lang.switch", "한국어"),
    ("footer.copyright", "© {year} {author}. All rights reserved."),
    ("footer.contact", "Contact: {email}"),
    ("notFound.title", "Page not found"),
    ("notFound.back", "Back to home"),
];

/// Two-level dictionary: language code -> key -> localized string.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    tables: HashMap<&'static str, HashMap<&'static str, &'static str>>,
}

static BUILTIN: OnceLock<Dictionary> = OnceLock::new();

impl Dictionary {
    /// The compiled-in dictionary, built on first access.
    pub fn builtin() -> &'static Dictionary {
        BUILTIN.get_or_init(|| {
            Dictionary::from_tables(&[("ko", KOREAN_STRINGS), ("en", ENGLISH_STRINGS)])
        })
    }

    /// Build a dictionary from per-language tables. Later duplicates of a key
    /// overwrite earlier ones.
    pub fn from_tables(tables: &[(&'static str, &'static [(&'static str, &'static str)])]) -> Self {
        let tables = tables
            .iter()
            .map(|(code, entries)| (*code, entries.iter().copied().collect()))
            .collect();
        Self { tables }
    }

    /// Look up a single entry without any fallback.
    pub fn get(&self, code: &str, key: &str) -> Option<&'static str> {
        self.tables.get(code)?.get(key).copied()
    }

    /// Whether a table exists for `code`.
    pub fn has_language(&self, code: &str) -> bool {
        self.tables.contains_key(code)
    }

    /// Language codes with a table, sorted.
    pub fn languages(&self) -> Vec<&'static str> {
        let mut codes: Vec<_> = self.tables.keys().copied().collect();
        codes.sort_unstable();
        codes
    }

    /// Keys of one language table, sorted. Empty for unknown languages.
    pub fn keys(&self, code: &str) -> Vec<&'static str> {
        let mut keys: Vec<_> = self
            .tables
            .get(code)
            .map(|table| table.keys().copied().collect())
            .unwrap_or_default();
        keys.sort_unstable();
        keys
    }
}
