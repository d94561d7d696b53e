use super::*;

#[test]
fn defaults_match_stock_page_markup() {
	let config = PageConfig::default();
	assert_eq!(config.theme.toggle_id, "themeToggle");
	assert_eq!(config.theme.storage_key, "theme");
	assert_eq!(config.typing.phrases.len(), 3);
	assert_eq!(config.particles.canvas_id, "bg-particles");
	assert_eq!(config.particles.max_count, 120);
	assert_eq!(config.clipboard.button_id, "copyEmailBtn");
	assert_eq!(config.rings.len(), 2);
	assert_eq!(config.footer.year_ids, vec!["year".to_string()]);
}

#[test]
fn empty_object_yields_defaults() {
	let config = PageConfig::from_json("{}").unwrap();
	assert_eq!(config.rings.len(), 2);
	assert_eq!(config.carousel.fallback_step, 360.0);
}

#[test]
fn partial_section_keeps_other_fields() {
	let config =
		PageConfig::from_json(r#"{ "typing": { "phrases": ["one", "two"] } }"#).unwrap();
	assert_eq!(config.typing.phrases, vec!["one", "two"]);
	assert_eq!(config.typing.type_ms, 55);
	assert_eq!(config.typing.pause_ms, 1100);
	assert_eq!(config.typing.target_id, "typed");
}

#[test]
fn rings_list_replaces_defaults() {
	let config = PageConfig::from_json(
		r##"{ "rings": [ { "button_id": "up", "ring_selector": "circle", "radius": 20 } ] }"##,
	)
	.unwrap();
	assert_eq!(config.rings.len(), 1);
	assert_eq!(config.rings[0].button_id, "up");
	assert_eq!(config.rings[0].path_box, None);
	assert_eq!(config.rings[0].visible_class, None);
}

#[test]
fn particle_overrides_parse() {
	let config =
		PageConfig::from_json(r#"{ "particles": { "max_count": 40, "alpha": 0.3 } }"#).unwrap();
	assert_eq!(config.particles.max_count, 40);
	assert_eq!(config.particles.alpha, 0.3);
	assert_eq!(config.particles.area_per_particle, 25_000.0);
}

#[test]
fn malformed_json_is_an_error() {
	assert!(PageConfig::from_json("{ not json").is_err());
}
