//! Mounts the particle field on its full-viewport canvas.
//!
//! The canvas is resized to the window and the particle set regenerated on
//! every `resize`. A `requestAnimationFrame` loop steps and redraws the field
//! for as long as the unit is live.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::particles::{MathRandom, ParticleField};
use super::render;
use crate::context::PageContext;
use crate::error::UnitError;
use crate::schedule::{self, UnitHandle};

fn viewport(window: &Window) -> (f64, f64) {
	let dimension = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
	(dimension(window.inner_width()), dimension(window.inner_height()))
}

pub fn mount(ctx: &PageContext) -> Result<UnitHandle, UnitError> {
	let style = ctx.config.particles.clone();
	let canvas: HtmlCanvasElement = ctx
		.document
		.get_element_by_id(&style.canvas_id)
		.and_then(|el| el.dyn_into().ok())
		.ok_or_else(|| UnitError::missing(format!("canvas#{}", style.canvas_id)))?;
	let surface: CanvasRenderingContext2d = canvas
		.get_context("2d")?
		.and_then(|c| c.dyn_into().ok())
		.ok_or(UnitError::Unsupported("2d canvas context"))?;

	let field = Rc::new(RefCell::new(ParticleField::new()));
	let resize = {
		let (window, field, style) = (ctx.window.clone(), field.clone(), style.clone());
		move || {
			let (w, h) = viewport(&window);
			canvas.set_width(w as u32);
			canvas.set_height(h as u32);
			field.borrow_mut().regenerate(w, h, &style, &mut MathRandom);
		}
	};
	resize();

	let unit = UnitHandle::new("particles");
	let on_resize = resize.clone();
	unit.listen(&ctx.window, "resize", move |_| on_resize())?;

	schedule::every_frame(&unit.token(), move || {
		let mut field = field.borrow_mut();
		field.step();
		render::render(&field, &surface, &style);
	});

	Ok(unit)
}
