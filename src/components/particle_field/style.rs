//! Tunables for the background particle field.

use serde::Deserialize;

/// Particle density, motion and appearance.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ParticleStyle {
	/// Id of the canvas the field draws on
	pub canvas_id: String,
	/// Upper bound on particle count
	pub max_count: usize,
	/// Viewport area (px²) per particle
	pub area_per_particle: f64,
	/// Largest per-axis speed, px/frame
	pub max_speed: f64,
	pub radius_min: f64,
	pub radius_max: f64,
	/// CSS fill colour
	pub color: String,
	/// Global alpha applied on top of `color`
	pub alpha: f64,
}

impl Default for ParticleStyle {
	fn default() -> Self {
		Self {
			canvas_id: "bg-particles".into(),
			max_count: 120,
			area_per_particle: 25_000.0,
			max_speed: 0.2,
			radius_min: 0.4,
			radius_max: 1.8,
			color: "rgba(255,255,255,0.7)".into(),
			alpha: 0.6,
		}
	}
}
