// SPDX-License-Identifier: MPL-2.0
//! Bundled dictionary resources and the supported-language catalog.
//!
//! Every supported language ships one dictionary payload under
//! `assets/dicts/`, named `main_<lowercased tag>`. The name a configured
//! tag resolves to is computed here, and the payload is embedded in the
//! binary so the patch module can hand it to the host as a replacement
//! resource without touching the filesystem.

use crate::locale::LanguageTag;
use rust_embed::RustEmbed;
use std::borrow::Cow;

#[derive(RustEmbed)]
#[folder = "assets/dicts/"]
struct Asset;

/// File extension of the bundled payload files. The extension is an
/// artifact of the bundle; resource names never include it.
const DICT_EXT: &str = ".dict";

/// Prefix shared by every dictionary resource name.
pub const RESOURCE_PREFIX: &str = "main_";

/// Resource name a tag resolves to: the whole lowercased tag behind the
/// shared prefix, underscore preserved (`Xx_Yy` becomes `main_xx_yy`).
#[must_use]
pub fn resource_name(tag: &LanguageTag) -> String {
    format!("{}{}", RESOURCE_PREFIX, tag.as_str().to_lowercase())
}

/// A replacement dictionary payload resolved from the module's bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictResource {
    name: String,
    bytes: Cow<'static, [u8]>,
}

impl DictResource {
    /// The resource name this payload resolved from.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// Looks up a bundled dictionary by resource name. Returns `None` for
/// names the module ships no dictionary for.
#[must_use]
pub fn find(name: &str) -> Option<DictResource> {
    let file = Asset::get(&format!("{name}{DICT_EXT}"))?;
    Some(DictResource {
        name: name.to_string(),
        bytes: file.data,
    })
}

/// Resource names of every bundled dictionary.
#[must_use]
pub fn bundled_names() -> Vec<String> {
    Asset::iter()
        .filter_map(|file| {
            file.as_ref()
                .strip_suffix(DICT_EXT)
                .map(|name| name.to_string())
        })
        .collect()
}

/// One selectable language: persisted tag plus its display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub tag: &'static str,
    pub name: &'static str,
}

impl Language {
    /// Display string used by the selection dialog, `"Name (tag)"`.
    #[must_use]
    pub fn display(&self) -> String {
        format!("{} ({})", self.name, self.tag)
    }
}

/// Languages this module ships dictionaries for.
pub const LANGUAGES: &[Language] = &[
    Language { tag: "bg", name: "Bulgarian" },
    Language { tag: "ca", name: "Catalan" },
    Language { tag: "cs", name: "Czech" },
    Language { tag: "da", name: "Danish" },
    Language { tag: "el", name: "Greek" },
    Language { tag: "fi", name: "Finnish" },
    Language { tag: "hr", name: "Croatian" },
    Language { tag: "lt", name: "Lithuanian" },
    Language { tag: "pt_BR", name: "Portuguese" },
    Language { tag: "sr", name: "Serbian" },
];

/// Display string for a persisted tag: the catalog entry when the tag is
/// known, the raw tag otherwise.
#[must_use]
pub fn display_for_tag(tag: &str) -> String {
    LANGUAGES
        .iter()
        .find(|language| language.tag == tag)
        .map_or_else(|| tag.to_string(), Language::display)
}

/// Extracts the tag from a `"Name (tag)"` display string. Entries without
/// a parenthesized suffix (such as the "None" sentinel) yield `None`.
#[must_use]
pub fn tag_of_display(entry: &str) -> Option<&str> {
    let (name, rest) = entry.rsplit_once('(')?;
    if name.is_empty() {
        return None;
    }
    rest.strip_suffix(')')
}
