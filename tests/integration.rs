// SPDX-License-Identifier: MPL-2.0
//! End-to-end flows across the preference store, the selection dialog,
//! and the patch lifecycle, using fake host seams.

use dictswap::config::{self, Config, PrefStore};
use dictswap::dicts::DictResource;
use dictswap::locale::Locale;
use dictswap::patch::host::{
    DictionaryHook, HookError, HookHost, LookupCall, MethodTarget, ResourceKey, ResourceTable,
};
use dictswap::patch::{
    DictPatch, DICTIONARY_KIND, DICTIONARY_LOOKUP, KEYBOARD_PACKAGE, KEYBOARD_RESOURCE_PACKAGE,
    REPLACED_RESOURCE,
};
use dictswap::ui::language_dialog::{Event, Message, State};
use std::collections::HashMap;
use std::sync::Arc;
use tempfile::tempdir;

#[derive(Default)]
struct RecordingHost {
    attached: Vec<(MethodTarget, Arc<dyn DictionaryHook>)>,
}

impl HookHost for RecordingHost {
    fn attach_before_hook(
        &mut self,
        target: MethodTarget,
        hook: Arc<dyn DictionaryHook>,
    ) -> Result<(), HookError> {
        self.attached.push((target, hook));
        Ok(())
    }
}

#[derive(Default)]
struct RecordingTable {
    replacements: HashMap<ResourceKey, DictResource>,
}

impl ResourceTable for RecordingTable {
    fn set_replacement(&mut self, key: ResourceKey, replacement: DictResource) {
        self.replacements.insert(key, replacement);
    }
}

/// Runs the hooked lookup the way the host would: hooks first, then the
/// original call with whatever locale is left.
fn run_lookup(host: &RecordingHost, requested: Locale) -> Locale {
    let mut call = LookupCall::new(requested);
    for (_, hook) in &host.attached {
        hook.before_lookup(&mut call);
    }
    call.locale
}

#[test]
fn settings_written_by_the_companion_reach_the_patch_process() {
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("settings.toml");

    // The patch side opens its store first (nothing configured yet).
    let mut patch = DictPatch::new(PrefStore::open(&path));
    let mut host = RecordingHost::default();
    patch.on_package_loaded(&mut host, KEYBOARD_PACKAGE);
    assert!(host.attached.is_empty());

    // The companion persists a selection from its own process.
    let mut companion = PrefStore::open(&path);
    companion
        .set_language_tag(Some("hr".to_string()))
        .expect("failed to persist tag");

    // The next lifecycle event picks the change up via the reload check.
    patch.on_package_loaded(&mut host, KEYBOARD_PACKAGE);
    assert_eq!(host.attached.len(), 1);
    assert_eq!(host.attached[0].0, DICTIONARY_LOOKUP);

    assert_eq!(
        run_lookup(&host, Locale::with_region("hr", "HR")),
        Locale::with_region("pt", "BR")
    );
}

#[test]
fn selecting_portuguese_substitutes_pt_br_and_leaves_en_us_alone() {
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("settings.toml");

    // Drive the selection dialog the way the companion app does.
    let mut dialog = State::open(None);
    let index = dialog
        .options()
        .iter()
        .position(|entry| entry == "Portuguese (pt_BR)")
        .expect("catalog entry missing");
    assert_eq!(dialog.update(Message::Select(index)), Event::None);
    let chosen = dialog.update(Message::Confirm);
    assert_eq!(chosen, Event::Chosen(Some("pt_BR".to_string())));

    let mut companion = PrefStore::open(&path);
    companion
        .set_language_tag(Some("pt_BR".to_string()))
        .expect("failed to persist tag");

    // The patch side reacts to the host lifecycle.
    let mut patch = DictPatch::new(PrefStore::open(&path));
    let mut host = RecordingHost::default();
    patch.on_package_loaded(&mut host, KEYBOARD_PACKAGE);

    // Identity case: pt_BR still maps to pt_BR, but through the rewrite.
    assert_eq!(
        run_lookup(&host, Locale::with_region("pt", "BR")),
        Locale::with_region("pt", "BR")
    );
    // Unrelated locales pass through untouched.
    assert_eq!(
        run_lookup(&host, Locale::with_region("en", "US")),
        Locale::with_region("en", "US")
    );

    // Resource initialization redirects the fixed slot to the bundled
    // Brazilian Portuguese dictionary.
    let mut table = RecordingTable::default();
    patch.on_resources_initialized(&mut table, KEYBOARD_PACKAGE);

    let key = ResourceKey::new(KEYBOARD_RESOURCE_PACKAGE, DICTIONARY_KIND, REPLACED_RESOURCE);
    let dict = table
        .replacements
        .get(&key)
        .expect("override should be installed");
    assert_eq!(dict.name(), "main_pt_br");
    assert!(!dict.bytes().is_empty());
}

#[test]
fn clearing_the_selection_disables_the_patch_on_the_next_load() {
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("settings.toml");

    let mut companion = PrefStore::open(&path);
    companion
        .set_language_tag(Some("fi".to_string()))
        .expect("failed to persist tag");

    let mut patch = DictPatch::new(PrefStore::open(&path));

    // A dialog opened against the current settings pre-checks Finnish.
    let dialog = State::open(companion.language_tag());
    assert_eq!(dialog.selected_entry(), "Finnish (fi)");

    // The user picks "None".
    companion.set_language_tag(None).expect("failed to clear tag");
    assert_eq!(State::open(companion.language_tag()).selected(), 0);

    // Simulate the keyboard reloading afterwards: no hook, no override.
    let mut host = RecordingHost::default();
    patch.on_package_loaded(&mut host, KEYBOARD_PACKAGE);
    assert!(host.attached.is_empty());

    let mut table = RecordingTable::default();
    patch.on_resources_initialized(&mut table, KEYBOARD_PACKAGE);
    assert!(table.replacements.is_empty());
}

#[test]
fn config_file_round_trips_both_language_keys() {
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("settings.toml");

    let saved = Config {
        language: Some("pt-BR".to_string()),
        injected_language: Some("el".to_string()),
    };
    config::save_to_path(&saved, &path).expect("failed to save config");

    let loaded = config::load_from_path(&path).expect("failed to load config");
    assert_eq!(loaded, saved);

    // The store exposes only the injected-language half.
    let store = PrefStore::open(&path);
    assert_eq!(store.language_tag(), Some("el"));
    assert_eq!(store.config().language.as_deref(), Some("pt-BR"));
}
