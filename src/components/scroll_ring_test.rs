use super::*;

// =============================================================
// scroll_progress
// =============================================================

#[test]
fn top_of_page_is_zero() {
	assert_eq!(scroll_progress(0.0, 3000.0, 800.0), 0.0);
}

#[test]
fn bottom_of_page_is_one() {
	assert_eq!(scroll_progress(2200.0, 3000.0, 800.0), 1.0);
}

#[test]
fn overscroll_is_clamped() {
	assert_eq!(scroll_progress(2500.0, 3000.0, 800.0), 1.0);
	assert_eq!(scroll_progress(-40.0, 3000.0, 800.0), 0.0);
}

#[test]
fn unscrollable_page_does_not_divide_by_zero() {
	assert_eq!(scroll_progress(0.0, 800.0, 800.0), 0.0);
}

// =============================================================
// RingGeometry
// =============================================================

#[test]
fn empty_ring_at_top_full_ring_at_bottom() {
	let ring = RingGeometry { radius: 18.0 };
	assert_eq!(ring.dash_offset(0.0), ring.circumference());
	assert_eq!(ring.dash_offset(1.0), 0.0);
}

#[test]
fn offset_never_increases_while_scrolling_down() {
	let ring = RingGeometry { radius: 15.0 };
	let (height, viewport) = (5000.0, 900.0);
	let mut last = f64::INFINITY;
	for top in (0..=4200).step_by(7) {
		let offset = ring.dash_offset(scroll_progress(top as f64, height, viewport));
		assert!(offset <= last, "offset rose at scrollTop={top}");
		last = offset;
	}
	assert_eq!(last, 0.0);
}

#[test]
fn dash_array_repeats_circumference() {
	let ring = RingGeometry { radius: 1.0 };
	let c = TAU;
	assert_eq!(ring.dash_array(), format!("{c} {c}"));
}

// =============================================================
// circle_path / defaults
// =============================================================

#[test]
fn circle_path_starts_at_top_point() {
	assert_eq!(
		circle_path(18.0, 18.0, 15.0),
		"M 18 3 a 15 15 0 1 1 0 30 a 15 15 0 1 1 0 -30"
	);
}

#[test]
fn defaults_cover_both_page_variants() {
	let rings = default_rings();
	assert_eq!(rings.len(), 2);
	assert_eq!(rings[0].button_id, "backToTop");
	assert_eq!(rings[0].radius, 18.0);
	assert_eq!(rings[1].button_id, "toTop");
	assert_eq!(rings[1].path_box, Some(36.0));
}
