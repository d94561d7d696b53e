//! Canvas drawing for the particle field.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::particles::ParticleField;
use super::style::ParticleStyle;

/// Clears the surface and fills one circle per particle.
pub fn render(field: &ParticleField, ctx: &CanvasRenderingContext2d, style: &ParticleStyle) {
	ctx.clear_rect(0.0, 0.0, field.width(), field.height());
	ctx.set_fill_style_str(&style.color);
	ctx.set_global_alpha(style.alpha);

	for p in field.particles() {
		ctx.begin_path();
		let _ = ctx.arc(p.x, p.y, p.r, 0.0, PI * 2.0);
		ctx.fill();
	}
}
