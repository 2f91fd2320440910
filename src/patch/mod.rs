// SPDX-License-Identifier: MPL-2.0
//! The runtime patch applied inside the keyboard's host process.
//!
//! The host drives [`DictPatch`] through two lifecycle callbacks: one
//! when a package's code is loaded ([`DictPatch::on_package_loaded`],
//! which attaches the locale-rewrite hook) and one whenever resources
//! are (re)initialized for a package
//! ([`DictPatch::on_resources_initialized`], which installs the
//! dictionary override). Both re-check the shared preference file first,
//! since the settings companion runs in a different process.
//!
//! Failures never propagate into the host: a hook that cannot be
//! attached is logged and the keyboard keeps its stock dictionaries.

pub mod hook;
pub mod host;

use crate::config::PrefStore;
use crate::dicts;
use crate::locale::LanguageTag;
use hook::LocaleRewriteHook;
use host::{HookHost, MethodTarget, ResourceKey, ResourceTable};
use std::sync::Arc;

/// Package name of the keyboard application whose lookups are patched.
pub const KEYBOARD_PACKAGE: &str = "com.google.android.inputmethod.latin";

/// Package the keyboard's resources are registered under. In this target
/// it differs from the application package.
pub const KEYBOARD_RESOURCE_PACKAGE: &str = "com.android.inputmethod.latin";

/// The method whose locale argument gets rewritten.
pub const DICTIONARY_LOOKUP: MethodTarget = MethodTarget {
    class: "com.android.inputmethod.latin.DictionaryFactory",
    method: "getMainDictionaryResourceIdIfAvailableForLocale",
};

/// Resource kind of dictionary payloads.
pub const DICTIONARY_KIND: &str = "raw";

/// Name of the resource slot the override repurposes: the dictionary the
/// fallback locale resolves to.
pub const REPLACED_RESOURCE: &str = "main_pt_br";

/// Patch-module state: the preference store plus the lifecycle entry
/// points the host drives.
#[derive(Debug)]
pub struct DictPatch {
    store: PrefStore,
}

impl DictPatch {
    #[must_use]
    pub fn new(store: PrefStore) -> Self {
        Self { store }
    }

    /// Called by the host once a package's code is loaded.
    ///
    /// For the keyboard package this attaches the locale-rewrite hook,
    /// provided a language is configured. Attach failures are logged and
    /// swallowed so the keyboard keeps working with stock dictionaries.
    pub fn on_package_loaded(&mut self, host: &mut dyn HookHost, package: &str) {
        if package != KEYBOARD_PACKAGE {
            return;
        }
        self.refresh_prefs();

        // Hook only needed if a language is actually selected.
        let Some(tag) = self.store.language_tag() else {
            return;
        };

        let hook = Arc::new(LocaleRewriteHook::new(LanguageTag::parse(tag)));
        if let Err(error) = host.attach_before_hook(DICTIONARY_LOOKUP, hook) {
            eprintln!("Failed to attach dictionary hook: {error}");
        }
    }

    /// Called by the host whenever it (re)initializes resources for a
    /// package. May recur; reinstalling the same override is harmless.
    ///
    /// When a language is configured and the module bundles a dictionary
    /// for it, the keyboard's `pt_BR` dictionary slot is redirected to
    /// that payload. Otherwise nothing is installed.
    pub fn on_resources_initialized(&mut self, table: &mut dyn ResourceTable, package: &str) {
        if package != KEYBOARD_PACKAGE {
            return;
        }
        self.refresh_prefs();

        let Some(tag) = self.store.language_tag() else {
            return;
        };

        let name = dicts::resource_name(&LanguageTag::parse(tag));
        if let Some(dict) = dicts::find(&name) {
            table.set_replacement(
                ResourceKey::new(KEYBOARD_RESOURCE_PACKAGE, DICTIONARY_KIND, REPLACED_RESOURCE),
                dict,
            );
        }
    }

    #[must_use]
    pub fn store(&self) -> &PrefStore {
        &self.store
    }

    fn refresh_prefs(&mut self) {
        if let Err(error) = self.store.reload_if_changed() {
            eprintln!("Failed to reload settings: {error}");
        }
    }
}
