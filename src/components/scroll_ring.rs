//! Back-to-top buttons whose circular stroke fills as the page scrolls.
//!
//! A page may carry several; each entry in [`PageConfig::rings`] mounts one.
//!
//! [`PageConfig::rings`]: crate::config::PageConfig::rings

#[cfg(test)]
#[path = "scroll_ring_test.rs"]
mod scroll_ring_test;

use std::f64::consts::TAU;
use std::rc::Rc;

use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::{Document, ScrollBehavior, ScrollToOptions, SvgElement};

use crate::context::PageContext;
use crate::error::UnitError;
use crate::schedule::UnitHandle;

#[derive(Clone, Debug, Deserialize)]
pub struct RingConfig {
	pub button_id: String,
	/// Selector of the stroked SVG shape, relative to the button.
	pub ring_selector: String,
	pub radius: f64,
	/// When set, the ring is a `<path>` whose circle is drawn centred in a
	/// square viewbox of this size.
	#[serde(default)]
	pub path_box: Option<f64>,
	/// Class added to the button on every update, if any.
	#[serde(default)]
	pub visible_class: Option<String>,
}

/// The two rings a portfolio page carries out of the box.
pub fn default_rings() -> Vec<RingConfig> {
	vec![
		RingConfig {
			button_id: "backToTop".into(),
			ring_selector: ".progress-circle".into(),
			radius: 18.0,
			path_box: None,
			visible_class: Some("visible".into()),
		},
		RingConfig {
			button_id: "toTop".into(),
			ring_selector: "#progress".into(),
			radius: 15.0,
			path_box: Some(36.0),
			visible_class: None,
		},
	]
}

/// How far down the page is scrolled, in `[0, 1]`.
pub fn scroll_progress(scroll_top: f64, scroll_height: f64, client_height: f64) -> f64 {
	let max = (scroll_height - client_height).max(1.0);
	(scroll_top / max).clamp(0.0, 1.0)
}

/// Dash arithmetic for a circle of a given radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingGeometry {
	pub radius: f64,
}

impl RingGeometry {
	pub fn circumference(&self) -> f64 {
		TAU * self.radius
	}

	pub fn dash_array(&self) -> String {
		let c = self.circumference();
		format!("{c} {c}")
	}

	/// Full circumference at the top of the page, zero at the bottom.
	pub fn dash_offset(&self, progress: f64) -> f64 {
		self.circumference() * (1.0 - progress.clamp(0.0, 1.0))
	}
}

/// SVG path tracing a circle clockwise from its top point.
pub fn circle_path(cx: f64, cy: f64, r: f64) -> String {
	format!(
		"M {cx} {} a {r} {r} 0 1 1 0 {} a {r} {r} 0 1 1 0 {}",
		cy - r,
		2.0 * r,
		-2.0 * r
	)
}

fn read_progress(document: &Document) -> f64 {
	let Some(root) = document.document_element() else {
		return 0.0;
	};
	let mut top = root.scroll_top();
	if top == 0 {
		if let Some(body) = document.body() {
			top = body.scroll_top();
		}
	}
	scroll_progress(
		top as f64,
		root.scroll_height() as f64,
		root.client_height() as f64,
	)
}

pub fn mount(ctx: &PageContext, config: &RingConfig) -> Result<UnitHandle, UnitError> {
	let button = ctx
		.document
		.get_element_by_id(&config.button_id)
		.ok_or_else(|| UnitError::missing(format!("#{}", config.button_id)))?;
	let ring: SvgElement = button
		.query_selector(&config.ring_selector)?
		.and_then(|el| el.dyn_into().ok())
		.ok_or_else(|| {
			UnitError::missing(format!("#{} {}", config.button_id, config.ring_selector))
		})?;

	let geometry = RingGeometry {
		radius: config.radius,
	};
	if let Some(size) = config.path_box {
		let centre = size / 2.0;
		ring.set_attribute("d", &circle_path(centre, centre, config.radius))?;
	}
	let style = ring.style();
	style.set_property("stroke-dasharray", &geometry.dash_array())?;
	style.set_property("stroke-dashoffset", &geometry.circumference().to_string())?;

	let unit = UnitHandle::new("scroll ring");
	let (document, visible_class, marker) = (
		ctx.document.clone(),
		config.visible_class.clone(),
		button.clone(),
	);
	let update = Rc::new(move || {
		let offset = geometry.dash_offset(read_progress(&document));
		let _ = style.set_property("stroke-dashoffset", &offset.to_string());
		if let Some(class) = &visible_class {
			let _ = marker.class_list().add_1(class);
		}
	});

	let on_scroll = update.clone();
	unit.listen_passive(&ctx.window, "scroll", move |_| on_scroll())?;
	let on_resize = update.clone();
	unit.listen(&ctx.window, "resize", move |_| on_resize())?;
	update();

	let window = ctx.window.clone();
	unit.listen(&button, "click", move |_| {
		let options = ScrollToOptions::new();
		options.set_top(0.0);
		options.set_behavior(ScrollBehavior::Smooth);
		window.scroll_to_with_scroll_to_options(&options);
	})?;

	Ok(unit)
}
