//! Drifting dots with elastic edge reflection.

#[cfg(test)]
#[path = "particles_test.rs"]
mod particles_test;

use super::style::ParticleStyle;

/// A single drifting dot.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub r: f64,
}

/// Uniform samples in `[0, 1)`.
pub trait RandomSource {
	fn next_f64(&mut self) -> f64;

	fn range(&mut self, lo: f64, hi: f64) -> f64 {
		lo + self.next_f64() * (hi - lo)
	}
}

/// The browser's `Math.random`.
pub struct MathRandom;

impl RandomSource for MathRandom {
	fn next_f64(&mut self) -> f64 {
		js_sys::Math::random()
	}
}

/// Deterministic sequence for reproducible layouts.
#[derive(Clone, Debug)]
pub struct SeededRandom {
	seed: f64,
	calls: f64,
}

impl SeededRandom {
	pub fn new(seed: u32) -> Self {
		Self {
			seed: seed as f64,
			calls: 0.0,
		}
	}

	fn hash(x: f64) -> f64 {
		let x = (x * 12.9898 + x * 78.233).sin() * 43758.5453;
		x - x.floor()
	}
}

impl RandomSource for SeededRandom {
	fn next_f64(&mut self) -> f64 {
		self.calls += 1.0;
		Self::hash(self.seed * 7.31 + self.calls * 1.1)
	}
}

/// How many particles a `width × height` viewport gets.
pub fn particle_count(width: f64, height: f64, style: &ParticleStyle) -> usize {
	let area = width * height;
	if !area.is_finite() || area <= 0.0 || style.area_per_particle <= 0.0 {
		return 0;
	}
	((area / style.area_per_particle).floor() as usize).min(style.max_count)
}

/// The whole set of particles plus the bounds they bounce inside.
#[derive(Clone, Debug, Default)]
pub struct ParticleField {
	particles: Vec<Particle>,
	width: f64,
	height: f64,
}

impl ParticleField {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	pub fn width(&self) -> f64 {
		self.width
	}

	pub fn height(&self) -> f64 {
		self.height
	}

	/// Replaces every particle with a fresh batch sized for the new bounds.
	pub fn regenerate(
		&mut self,
		width: f64,
		height: f64,
		style: &ParticleStyle,
		rng: &mut impl RandomSource,
	) {
		let count = particle_count(width, height, style);
		self.width = width;
		self.height = height;
		self.particles = (0..count)
			.map(|_| Particle {
				x: rng.next_f64() * width,
				y: rng.next_f64() * height,
				vx: rng.range(-style.max_speed, style.max_speed),
				vy: rng.range(-style.max_speed, style.max_speed),
				r: rng.range(style.radius_min, style.radius_max),
			})
			.collect();
	}

	/// Moves every particle one frame. A particle that crossed an edge has
	/// that velocity component inverted; its position is left as is.
	pub fn step(&mut self) {
		for p in &mut self.particles {
			p.x += p.vx;
			p.y += p.vy;

			if p.x < 0.0 || p.x > self.width {
				p.vx = -p.vx;
			}
			if p.y < 0.0 || p.y > self.height {
				p.vy = -p.vy;
			}
		}
	}
}
