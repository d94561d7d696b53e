use super::*;
use crate::context::memory::MemoryStore;

const KEY: &str = "theme";

fn toggle(store: &MemoryStore) -> ThemePreference {
	let next = ThemePreference::load(store, KEY).toggled();
	next.persist(store, KEY);
	next
}

// =============================================================
// Stored values
// =============================================================

#[test]
fn missing_or_empty_value_is_default() {
	assert_eq!(ThemePreference::from_stored(None), ThemePreference::Default);
	assert_eq!(ThemePreference::from_stored(Some("")), ThemePreference::Default);
}

#[test]
fn light_value_is_light() {
	assert_eq!(ThemePreference::from_stored(Some("light")), ThemePreference::Light);
}

#[test]
fn unknown_value_is_applied_verbatim() {
	let pref = ThemePreference::from_stored(Some("sepia"));
	assert_eq!(pref.attribute().as_deref(), Some("sepia"));
}

#[test]
fn default_removes_attribute() {
	assert_eq!(ThemePreference::Default.attribute(), None);
}

// =============================================================
// Toggling
// =============================================================

#[test]
fn toggle_from_default_persists_light() {
	let store = MemoryStore::default();
	assert_eq!(toggle(&store), ThemePreference::Light);
	assert_eq!(store.get(KEY).as_deref(), Some("light"));
}

#[test]
fn toggle_twice_from_absent_leaves_key_absent() {
	let store = MemoryStore::default();
	toggle(&store);
	toggle(&store);
	assert_eq!(store.get(KEY), None);
}

#[test]
fn toggle_twice_from_light_restores_light() {
	let store = MemoryStore::default();
	store.set(KEY, "light");
	toggle(&store);
	assert_eq!(store.get(KEY), None);
	toggle(&store);
	assert_eq!(store.get(KEY).as_deref(), Some("light"));
}

#[test]
fn unknown_value_toggles_to_light() {
	assert_eq!(
		ThemePreference::Other("sepia".into()).toggled(),
		ThemePreference::Light
	);
}
