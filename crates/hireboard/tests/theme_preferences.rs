//! Theme preference persisted to disk and re-applied on the next start.

use std::fs;
use std::sync::Arc;

use hireboard::theme::{
    ColorScheme, DocumentRoot, JsonFilePreferenceStore, SimulatedAppearance, ThemeManager,
    ThemePreference, DARK_CLASS, THEME_STORAGE_KEY,
};

fn manager_at(
    path: &std::path::Path,
    os: ColorScheme,
) -> (
    ThemeManager<JsonFilePreferenceStore, SimulatedAppearance, DocumentRoot>,
    Arc<SimulatedAppearance>,
    Arc<DocumentRoot>,
) {
    let appearance = Arc::new(SimulatedAppearance::new(os));
    let root = Arc::new(DocumentRoot::new());
    let manager = ThemeManager::new(
        Arc::new(JsonFilePreferenceStore::new(path)),
        appearance.clone(),
        root.clone(),
    );
    (manager, appearance, root)
}

#[test]
fn preference_survives_a_restart() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("prefs").join("preferences.json");

    let (first, _, _) = manager_at(&path, ColorScheme::Light);
    first.set_theme(ThemePreference::Dark).expect("persists");

    let raw = fs::read_to_string(&path).expect("file written");
    let stored: serde_json::Value = serde_json::from_str(&raw).expect("valid json");
    assert_eq!(stored[THEME_STORAGE_KEY], "dark");

    let (second, _, root) = manager_at(&path, ColorScheme::Light);
    assert_eq!(second.init_theme(), ThemePreference::Dark);
    assert!(root.has_class(DARK_CLASS));
    assert_eq!(root.color_scheme(), Some(ColorScheme::Dark));
}

#[test]
fn system_preference_tracks_the_os_after_restart() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("preferences.json");

    let (first, _, _) = manager_at(&path, ColorScheme::Light);
    first.set_theme(ThemePreference::System).expect("persists");
    drop(first);

    let (second, appearance, root) = manager_at(&path, ColorScheme::Dark);
    assert_eq!(second.init_theme(), ThemePreference::System);
    assert!(root.has_class(DARK_CLASS));

    appearance.set_scheme(ColorScheme::Light);
    assert!(!root.has_class(DARK_CLASS));
    assert_eq!(appearance.listener_count(), 1);

    drop(second);
    assert_eq!(
        appearance.listener_count(),
        0,
        "dropping the manager releases its listener"
    );
}

#[test]
fn unreadable_file_falls_back_to_light() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("preferences.json");
    fs::write(&path, "[oops").expect("seed file");

    let (manager, _, root) = manager_at(&path, ColorScheme::Dark);
    assert_eq!(manager.init_theme(), ThemePreference::Light);
    assert!(!root.has_class(DARK_CLASS));
    assert!(manager.set_theme(ThemePreference::Dark).is_err());
}
