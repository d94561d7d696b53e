use super::*;

fn field(width: f64, height: f64, seed: u32) -> ParticleField {
	let mut field = ParticleField::new();
	field.regenerate(width, height, &ParticleStyle::default(), &mut SeededRandom::new(seed));
	field
}

// =============================================================
// Count
// =============================================================

#[test]
fn count_scales_with_area() {
	let style = ParticleStyle::default();
	assert_eq!(particle_count(1920.0, 1080.0, &style), 82);
	assert_eq!(particle_count(1000.0, 500.0, &style), 20);
}

#[test]
fn count_is_capped_at_120() {
	let style = ParticleStyle::default();
	assert_eq!(particle_count(4000.0, 3000.0, &style), 120);
}

#[test]
fn small_or_empty_viewport_has_no_particles() {
	let style = ParticleStyle::default();
	assert_eq!(particle_count(0.0, 0.0, &style), 0);
	assert_eq!(particle_count(100.0, 100.0, &style), 0);
	assert_eq!(particle_count(f64::NAN, 600.0, &style), 0);
}

#[test]
fn regenerate_matches_count_formula() {
	for (w, h) in [(320.0, 640.0), (1280.0, 720.0), (2560.0, 1440.0)] {
		assert_eq!(
			field(w, h, 3).particles().len(),
			particle_count(w, h, &ParticleStyle::default())
		);
	}
}

// =============================================================
// Spawn ranges
// =============================================================

#[test]
fn spawned_particles_respect_ranges() {
	let f = field(1600.0, 900.0, 11);
	for p in f.particles() {
		assert!((0.0..=1600.0).contains(&p.x));
		assert!((0.0..=900.0).contains(&p.y));
		assert!((-0.2..=0.2).contains(&p.vx));
		assert!((-0.2..=0.2).contains(&p.vy));
		assert!((0.4..=1.8).contains(&p.r));
	}
}

#[test]
fn seeded_source_is_reproducible() {
	assert_eq!(field(800.0, 600.0, 5).particles(), field(800.0, 600.0, 5).particles());
}

#[test]
fn regenerate_replaces_whole_set() {
	let mut f = field(1920.0, 1080.0, 1);
	f.regenerate(400.0, 300.0, &ParticleStyle::default(), &mut SeededRandom::new(2));
	assert_eq!(f.particles().len(), 4);
	assert_eq!((f.width(), f.height()), (400.0, 300.0));
	assert!(f.particles().iter().all(|p| p.x <= 400.0 && p.y <= 300.0));
}

// =============================================================
// Motion
// =============================================================

#[test]
fn step_adds_velocity() {
	let mut f = field(1000.0, 1000.0, 9);
	let before = f.particles()[0].clone();
	f.step();
	let after = &f.particles()[0];
	if (0.0..=1000.0).contains(&after.x) {
		assert_eq!(after.x, before.x + before.vx);
		assert_eq!(after.vx, before.vx);
	}
}

#[test]
fn crossing_an_edge_flips_velocity_without_clamping() {
	let mut f = ParticleField {
		particles: vec![Particle {
			x: 0.1,
			y: 50.0,
			vx: -0.2,
			vy: 0.0,
			r: 1.0,
		}],
		width: 100.0,
		height: 100.0,
	};
	f.step();
	let p = &f.particles()[0];
	assert!(p.x < 0.0);
	assert_eq!(p.vx, 0.2);

	f.step();
	assert!(f.particles()[0].x >= 0.0);
}

#[test]
fn particles_stay_in_bounds_over_many_frames() {
	let style = ParticleStyle::default();
	let slack = style.max_speed + 1e-9;
	for (w, h) in [(1280.0, 720.0), (390.0, 844.0)] {
		let mut f = field(w, h, 42);
		for frame in 0..20_000 {
			f.step();
			for p in f.particles() {
				assert!(p.x >= -slack && p.x <= w + slack, "frame {frame}: x={} escaped {w}", p.x);
				assert!(p.y >= -slack && p.y <= h + slack, "frame {frame}: y={} escaped {h}", p.y);
			}
		}
	}
}

#[test]
fn empty_field_steps_harmlessly() {
	let mut f = field(0.0, 0.0, 1);
	f.step();
	assert!(f.particles().is_empty());
}
