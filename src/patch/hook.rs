// SPDX-License-Identifier: MPL-2.0
//! The before-hook installed on the keyboard's dictionary lookup.

use super::host::{DictionaryHook, LookupCall};
use crate::locale::{substitution, LanguageTag};

/// Rewrites the locale argument of a dictionary lookup when it matches
/// the configured tag, pointing the lookup at the repurposed `pt_BR`
/// slot. Non-matching lookups pass through untouched, and the underlying
/// call always runs.
#[derive(Debug)]
pub struct LocaleRewriteHook {
    tag: LanguageTag,
}

impl LocaleRewriteHook {
    #[must_use]
    pub fn new(tag: LanguageTag) -> Self {
        Self { tag }
    }

    #[must_use]
    pub fn tag(&self) -> &LanguageTag {
        &self.tag
    }
}

impl DictionaryHook for LocaleRewriteHook {
    fn before_lookup(&self, call: &mut LookupCall) {
        if let Some(replacement) = substitution::substitute(Some(&self.tag), &call.locale) {
            call.locale = replacement;
        }
    }
}
