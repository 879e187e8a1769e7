//! Tests for the bundled translations and the bundle directory loader.

use std::fs;

use tempfile::TempDir;
use uikit::translations::{DEFAULT_FALLBACK, load_dir, supported_locales};
use uikit::{LocaleStore, TranslationError, default_registry};

#[test]
fn default_registry_covers_every_locale() {
    let registry = default_registry().unwrap();
    assert_eq!(registry.len(), 26);
    assert_eq!(registry.fallback().as_str(), DEFAULT_FALLBACK);
    assert_eq!(registry.active().as_str(), DEFAULT_FALLBACK);
    assert_eq!(registry.locales(), supported_locales().as_slice());
    for code in ["zh-HK", "in-ID", "no-NO", "iw-IL", "ar-SA"] {
        assert!(registry.contains(code), "missing {code}");
    }
}

#[test]
fn bundled_messages_resolve() {
    let store = LocaleStore::new(default_registry().unwrap());
    assert_eq!(store.resolve("en-US", "required"), "This field is required.");
    assert_eq!(store.resolve("de-DE", "delete"), "Löschen");
    assert_eq!(
        store.resolve_with("fr-FR", "min-length", &[("min", "3")]),
        "Saisissez au moins 3 caractères."
    );
    for locale in store.locales() {
        assert!(store.validate_bundles(DEFAULT_FALLBACK, locale.as_str()).unwrap().is_empty());
    }
    assert!(store.diagnostics().is_empty());
}

#[test]
fn load_dir_reads_json_bundles() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("fr-FR.json"), r#"{"greet": "Bonjour"}"#).unwrap();
    fs::write(dir.path().join("en-US.json"), r#"{"greet": "Hello", "bye": "Bye"}"#).unwrap();
    fs::write(dir.path().join("README.txt"), "not a bundle").unwrap();

    let registry = load_dir(dir.path()).unwrap();
    assert_eq!(registry.len(), 2);
    assert_eq!(registry.fallback().as_str(), "en-US");

    let store = LocaleStore::new(registry);
    assert_eq!(store.resolve("fr-FR", "bye"), "Bye");
}

#[test]
fn load_dir_without_en_us_falls_back_to_first_sorted() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("sv-SE.json"), r#"{"greet": "Hej"}"#).unwrap();
    fs::write(dir.path().join("da-DK.json"), r#"{"greet": "Hej"}"#).unwrap();

    let registry = load_dir(dir.path()).unwrap();
    assert_eq!(registry.fallback().as_str(), "da-DK");
}

#[test]
fn load_dir_reports_bad_bundles() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("en-US.json"), r#"["not", "a", "map"]"#).unwrap();
    let err = load_dir(dir.path()).unwrap_err();
    match err {
        TranslationError::Parse { locale, .. } => assert_eq!(locale.as_str(), "en-US"),
        other => panic!("expected Parse, got {other:?}"),
    }

    fs::write(dir.path().join("en-US.json"), "{}").unwrap();
    assert!(matches!(
        load_dir(dir.path()),
        Err(TranslationError::Locale(_))
    ));
}

#[test]
fn load_dir_reports_missing_directory() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope");
    let err = load_dir(&missing).unwrap_err();
    assert!(matches!(err, TranslationError::Io { .. }));
    assert!(err.to_string().contains("nope"));
}
