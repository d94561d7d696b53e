use super::*;

#[test]
fn enter_and_space_toggle() {
	assert!(is_toggle_key("Enter"));
	assert!(is_toggle_key(" "));
}

#[test]
fn other_keys_do_not_toggle() {
	assert!(!is_toggle_key("Tab"));
	assert!(!is_toggle_key("Spacebar"));
	assert!(!is_toggle_key("ArrowDown"));
}

#[test]
fn aria_expanded_mirrors_active_state() {
	assert_eq!(aria_expanded(true), "true");
	assert_eq!(aria_expanded(false), "false");
}
