//! Dictionary validation.
//!
//! Checks every language table against the default language: the key sets
//! must match, values must not be empty, and each translation must use the
//! same `{placeholder}` names as the default string.

use crate::i18n::translator::placeholder_regex;
use crate::i18n::{Dictionary, Language};
use std::collections::BTreeSet;

/// Validation report containing errors and warnings about a dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Problems that break rendering (missing keys, empty values)
    pub errors: Vec<String>,

    /// Suspicious but non-fatal findings
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for UI dictionaries.
pub struct DictionaryValidator;

impl DictionaryValidator {
    /// Validate every language table of `dict` against the default language.
    pub fn validate(dict: &Dictionary) -> ValidationReport {
        let mut report = ValidationReport::new();
        let default = Language::default_lang().code();

        if !dict.has_language(default) {
            report
                .errors
                .push(format!("Default language '{}' has no dictionary", default));
            return report;
        }

        let default_keys: BTreeSet<_> = dict.keys(default).into_iter().collect();

        for code in dict.languages() {
            let keys: BTreeSet<_> = dict.keys(code).into_iter().collect();

            for key in &keys {
                if dict.get(code, key).is_some_and(|value| value.trim().is_empty()) {
                    report.errors.push(format!("[{}] '{}' is empty", code, key));
                }
            }

            if code == default {
                continue;
            }

            for key in default_keys.difference(&keys) {
                report
                    .errors
                    .push(format!("[{}] missing key '{}'", code, key));
            }

            for key in keys.difference(&default_keys) {
                report.warnings.push(format!(
                    "[{}] key '{}' is not defined for default language '{}'",
                    code, key, default
                ));
            }

            for key in keys.intersection(&default_keys) {
                let expected = Self::extract_placeholders(dict.get(default, key).unwrap_or_default());
                let found = Self::extract_placeholders(dict.get(code, key).unwrap_or_default());
                if expected != found {
                    report.warnings.push(format!(
                        "[{}] placeholder mismatch for '{}': expected {:?}, found {:?}",
                        code, key, expected, found
                    ));
                }
            }
        }

        report
    }

    /// Extract the set of `{name}` placeholders from a string.
    fn extract_placeholders(text: &str) -> BTreeSet<String> {
        placeholder_regex()
            .captures_iter(text)
            .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
            .collect()
    }
}
