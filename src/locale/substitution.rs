// SPDX-License-Identifier: MPL-2.0
//! The locale substitution decision.
//!
//! The keyboard's dictionary slot for `pt_BR` is repurposed to carry the
//! module's replacement dictionary, so whenever the configured language is
//! requested the lookup is pointed at that slot instead. The decision is a
//! pure predicate over the configured tag and the requested locale; the
//! caller still runs the real lookup with whichever locale results.

use super::{LanguageTag, Locale};

/// Language half of the locale whose dictionary slot is repurposed.
pub const FALLBACK_LANGUAGE: &str = "pt";

/// Region half of the locale whose dictionary slot is repurposed.
pub const FALLBACK_REGION: &str = "BR";

/// The fixed replacement locale, `pt_BR`.
#[must_use]
pub fn fallback_locale() -> Locale {
    Locale::with_region(FALLBACK_LANGUAGE, FALLBACK_REGION)
}

/// Whether a requested locale matches the configured tag.
///
/// The language must match exactly. A tag without a region matches any
/// requested region; a tag with a region also requires that region to
/// match exactly. No case folding on either side.
#[must_use]
pub fn matches(tag: &LanguageTag, requested: &Locale) -> bool {
    if requested.language() != tag.language() {
        return false;
    }
    match tag.region() {
        Some(region) => requested.region() == Some(region),
        None => true,
    }
}

/// Decides whether to rewrite a requested locale.
///
/// Returns the replacement locale when the configured tag matches the
/// request, and `None` (leave the request untouched) otherwise. An absent
/// tag never substitutes.
#[must_use]
pub fn substitute(configured: Option<&LanguageTag>, requested: &Locale) -> Option<Locale> {
    match configured {
        Some(tag) if matches(tag, requested) => Some(fallback_locale()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_tag_matches_any_region() {
        let tag = LanguageTag::parse("fi");
        assert!(matches(&tag, &Locale::new("fi")));
        assert!(matches(&tag, &Locale::with_region("fi", "FI")));
        assert!(matches(&tag, &Locale::with_region("fi", "SE")));
        assert!(!matches(&tag, &Locale::new("sv")));
    }

    #[test]
    fn composite_tag_requires_both_parts() {
        let tag = LanguageTag::parse("pt_BR");
        assert!(matches(&tag, &Locale::with_region("pt", "BR")));
        assert!(!matches(&tag, &Locale::with_region("pt", "PT")));
        assert!(!matches(&tag, &Locale::new("pt")));
        assert!(!matches(&tag, &Locale::with_region("en", "BR")));
    }

    #[test]
    fn absent_tag_never_substitutes() {
        assert_eq!(substitute(None, &Locale::with_region("pt", "BR")), None);
        assert_eq!(substitute(None, &Locale::new("fi")), None);
    }

    #[test]
    fn matching_request_is_rewritten_to_the_fallback() {
        let tag = LanguageTag::parse("hr");
        let replaced = substitute(Some(&tag), &Locale::with_region("hr", "HR"));
        assert_eq!(replaced, Some(Locale::with_region("pt", "BR")));
    }

    #[test]
    fn non_matching_request_passes_through() {
        let tag = LanguageTag::parse("hr");
        assert_eq!(substitute(Some(&tag), &Locale::with_region("en", "US")), None);
    }

    #[test]
    fn identity_case_still_substitutes() {
        // Selecting pt_BR itself redirects pt_BR lookups to the (replaced)
        // pt_BR slot. The rewrite is a no-op on the value but must happen.
        let tag = LanguageTag::parse("pt_BR");
        let replaced = substitute(Some(&tag), &Locale::with_region("pt", "BR"));
        assert_eq!(replaced, Some(Locale::with_region("pt", "BR")));
    }

    #[test]
    fn comparison_is_case_sensitive() {
        let tag = LanguageTag::parse("pt_BR");
        assert!(!matches(&tag, &Locale::with_region("PT", "BR")));
        assert!(!matches(&tag, &Locale::with_region("pt", "br")));
    }
}
