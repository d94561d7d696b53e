//! Ambient particle background.
//!
//! A full-viewport canvas of slowly drifting dots:
//! - Particle count proportional to viewport area, capped
//! - Whole set regenerated on every window resize
//! - Elastic reflection at the edges, redrawn every animation frame

mod component;
mod particles;
mod render;
mod style;

pub use component::mount;
pub use particles::{
	MathRandom, Particle, ParticleField, RandomSource, SeededRandom, particle_count,
};
pub use style::ParticleStyle;
