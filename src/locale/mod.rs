// SPDX-License-Identifier: MPL-2.0
//! Locale and language-tag value types.
//!
//! Two distinct notions live here and must not be conflated:
//!
//! - [`Locale`] is what the keyboard presents when it looks up a
//!   dictionary: a (language, optional region) pair, alive only for the
//!   duration of the call.
//! - [`LanguageTag`] is the persisted preference written by the settings
//!   companion: a string such as `pt` or `pt_BR`, parsed into its language
//!   and region parts while keeping the raw form for resource naming.
//!
//! All comparisons between parts are exact string equality. Tags are
//! expected to already be canonical; nothing is case-folded or normalized.

pub mod substitution;

use std::fmt;

/// A (language, optional region) pair presented by the host at call time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    language: String,
    region: Option<String>,
}

impl Locale {
    /// Creates a locale with no region, e.g. `en`.
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            region: None,
        }
    }

    /// Creates a locale with a region, e.g. `pt_BR`.
    pub fn with_region(language: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            region: Some(region.into()),
        }
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.region {
            Some(region) => write!(f, "{}_{}", self.language, region),
            None => write!(f, "{}", self.language),
        }
    }
}

/// The persisted dictionary-language preference, parsed.
///
/// A region exists only when the raw string contains exactly one `_` with
/// non-empty text on both sides; any other shape is treated as a bare
/// language. The raw string is preserved because resource names are
/// derived from it as a whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageTag {
    raw: String,
    language: String,
    region: Option<String>,
}

impl LanguageTag {
    /// Parses a raw preference string. Infallible: unrecognized shapes
    /// fall back to "the whole string is the language".
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if let Some((language, region)) = raw.split_once('_') {
            if !language.is_empty() && !region.is_empty() && !region.contains('_') {
                return Self {
                    raw: raw.to_string(),
                    language: language.to_string(),
                    region: Some(region.to_string()),
                };
            }
        }
        Self {
            raw: raw.to_string(),
            language: raw.to_string(),
            region: None,
        }
    }

    /// The raw preference string as persisted.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_language_has_no_region() {
        let tag = LanguageTag::parse("fi");
        assert_eq!(tag.language(), "fi");
        assert_eq!(tag.region(), None);
        assert_eq!(tag.as_str(), "fi");
    }

    #[test]
    fn composite_tag_splits_into_language_and_region() {
        let tag = LanguageTag::parse("pt_BR");
        assert_eq!(tag.language(), "pt");
        assert_eq!(tag.region(), Some("BR"));
        assert_eq!(tag.as_str(), "pt_BR");
    }

    #[test]
    fn multiple_underscores_mean_no_region() {
        let tag = LanguageTag::parse("a_b_c");
        assert_eq!(tag.language(), "a_b_c");
        assert_eq!(tag.region(), None);
    }

    #[test]
    fn empty_sides_mean_no_region() {
        assert_eq!(LanguageTag::parse("pt_").region(), None);
        assert_eq!(LanguageTag::parse("_BR").region(), None);
        assert_eq!(LanguageTag::parse("pt_").language(), "pt_");
    }

    #[test]
    fn parsing_preserves_case() {
        let tag = LanguageTag::parse("Pt_bR");
        assert_eq!(tag.language(), "Pt");
        assert_eq!(tag.region(), Some("bR"));
    }

    #[test]
    fn locale_displays_with_underscore() {
        assert_eq!(Locale::with_region("pt", "BR").to_string(), "pt_BR");
        assert_eq!(Locale::new("en").to_string(), "en");
    }
}
