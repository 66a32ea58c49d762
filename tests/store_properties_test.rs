// =====================================================
// FILE: tests/store_properties_test.rs - STORE CONTRACT
// =====================================================

use plugin_l10n::{AppError, EntryTable, LocalizationStore, NamespaceId, TextValue};

const PLUGIN: &str = "/var/www/wp-content/plugins/acme-forms/acme-forms.php";

fn registered() -> LocalizationStore {
    let mut store = LocalizationStore::new();
    store.register(PLUGIN);
    store
}

#[test]
fn whitespace_variants_share_a_namespace() {
    let sources = [PLUGIN.to_string(), format!("  {PLUGIN}"), format!("{PLUGIN}\n"), format!("\t{PLUGIN} ")];
    let first = NamespaceId::derive(&sources[0]);
    for source in &sources {
        assert_eq!(NamespaceId::derive(source), first);
    }

    let mut store = LocalizationStore::new();
    store.register(&sources[1]);
    store.add(&sources[2], "title", "Acme Forms").expect("same namespace");
    assert_eq!(store.get(&sources[3], "title", false, false).as_deref(), Some("Acme Forms"));
}

#[test]
fn has_is_true_right_after_add() {
    let mut store = registered();
    for key in ["a", "b.c", "", "with space"] {
        store.add(PLUGIN, key, "v").expect("registered");
        assert!(store.has(PLUGIN, key), "key {key:?}");
    }
}

#[test]
fn get_is_absent_before_add() {
    let mut store = registered();
    assert_eq!(store.get(PLUGIN, "later", false, false), None);
    store.add(PLUGIN, "later", "Later").expect("registered");
    assert_eq!(store.get(PLUGIN, "later", false, false).as_deref(), Some("Later"));
}

#[test]
fn writes_to_unregistered_namespace_fail_cleanly() {
    let mut store = LocalizationStore::new();

    let err = store.add(PLUGIN, "title", "Acme").unwrap_err();
    assert!(matches!(err, AppError::NotRegistered { .. }));

    let bulk: EntryTable = [("a", "A"), ("b", "B")].into_iter().collect();
    assert!(store.add_bulk(PLUGIN, bulk).unwrap_err().is_not_registered());

    assert!(!store.has(PLUGIN, "title"));
    assert_eq!(store.get_all(PLUGIN), None);
    assert_eq!(store.namespace_count(), 0);
}

#[test]
fn register_twice_is_idempotent() {
    let mut store = registered();
    store.add(PLUGIN, "title", "Acme").expect("registered");
    let before = store.get_all(PLUGIN).cloned();

    store.register(PLUGIN);
    store.register(PLUGIN);

    assert_eq!(store.get_all(PLUGIN).cloned(), before);
}

#[test]
fn plural_fallback_and_override() {
    let mut store = registered();
    store
        .add(PLUGIN, "only", TextValue::forms("Item", None))
        .expect("registered");
    store
        .add(PLUGIN, "both", TextValue::forms("Item", Some("Items".into())))
        .expect("registered");

    assert_eq!(store.get(PLUGIN, "only", true, false).as_deref(), Some("Item"));
    assert_eq!(store.get(PLUGIN, "both", true, false).as_deref(), Some("Items"));
    assert_eq!(store.get(PLUGIN, "both", false, false).as_deref(), Some("Item"));
}

#[test]
fn lowercase_transform() {
    let mut store = registered();
    store.add(PLUGIN, "greeting", "Hello").expect("registered");
    assert_eq!(store.get(PLUGIN, "greeting", false, true).as_deref(), Some("hello"));
    // stored value untouched
    assert_eq!(store.get(PLUGIN, "greeting", false, false).as_deref(), Some("Hello"));
}

#[test]
fn overwrite_keeps_last_value() {
    let mut store = registered();
    store.add(PLUGIN, "k", "A").expect("registered");
    store.add(PLUGIN, "k", "B").expect("registered");
    assert_eq!(store.get(PLUGIN, "k", false, false).as_deref(), Some("B"));
}

#[test]
fn bulk_collision_overwrites_only_colliding_keys() {
    let mut store = registered();
    store
        .add_bulk(PLUGIN, [("keep", "Keep"), ("swap", "Old")].into_iter().collect())
        .expect("registered");
    store
        .add_bulk(PLUGIN, [("swap", "New"), ("fresh", "Fresh")].into_iter().collect())
        .expect("registered");

    let all = store.get_all(PLUGIN).expect("registered");
    assert_eq!(all.len(), 3);
    assert_eq!(all.get("keep"), Some(&TextValue::plain("Keep")));
    assert_eq!(all.get("swap"), Some(&TextValue::plain("New")));
    assert_eq!(all.get("fresh"), Some(&TextValue::plain("Fresh")));
}

#[test]
fn get_all_absent_vs_empty() {
    let store = registered();
    assert!(store.get_all("/some/other/plugin.php").is_none());
    assert!(store.get_all(PLUGIN).expect("registered").is_empty());
}

#[test]
fn namespaces_are_isolated() {
    let other = "/var/www/wp-content/plugins/other/other.php";
    let mut store = registered();
    store.register(other);
    store.add(PLUGIN, "title", "Acme").expect("registered");
    store.add(other, "title", "Other").expect("registered");

    assert_eq!(store.get(PLUGIN, "title", false, false).as_deref(), Some("Acme"));
    assert_eq!(store.get(other, "title", false, false).as_deref(), Some("Other"));
    assert_eq!(store.namespace_count(), 2);
}
