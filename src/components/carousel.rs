//! Horizontal project carousel: prev/next buttons and arrow keys scroll the
//! track by one card.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::{Element, KeyboardEvent, ScrollBehavior, ScrollToOptions, Window};

use crate::context::PageContext;
use crate::error::UnitError;
use crate::schedule::UnitHandle;

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
	pub track_selector: String,
	pub card_selector: String,
	pub prev_selector: String,
	pub next_selector: String,
	/// Step used when the track has no cards.
	pub fallback_step: f64,
	/// Gap used when the computed `gap` is empty or not a number.
	pub default_gap: f64,
}

impl Default for CarouselConfig {
	fn default() -> Self {
		Self {
			track_selector: ".project-track[data-hscroll]".into(),
			card_selector: ".project-card".into(),
			prev_selector: ".hscroll-controls .prev".into(),
			next_selector: ".hscroll-controls .next".into(),
			fallback_step: 360.0,
			default_gap: 18.0,
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
	Back,
	Forward,
}

impl Direction {
	pub fn from_key(key: &str) -> Option<Self> {
		match key {
			"ArrowLeft" => Some(Self::Back),
			"ArrowRight" => Some(Self::Forward),
			_ => None,
		}
	}

	pub fn sign(self) -> f64 {
		match self {
			Self::Back => -1.0,
			Self::Forward => 1.0,
		}
	}
}

/// Leading integer of a CSS length such as `"18px"`, or `default`.
pub fn parse_gap(css: &str, default: f64) -> f64 {
	let css = css.trim_start();
	let (sign, digits) = match css.strip_prefix('-') {
		Some(rest) => (-1.0, rest),
		None => (1.0, css.strip_prefix('+').unwrap_or(css)),
	};
	let end = digits
		.find(|c: char| !c.is_ascii_digit())
		.unwrap_or(digits.len());
	digits[..end]
		.parse::<f64>()
		.map(|n| sign * n)
		.unwrap_or(default)
}

/// Distance of one scroll: a card plus the gap after it.
pub fn scroll_step(card_width: Option<f64>, gap: f64, fallback: f64) -> f64 {
	card_width.map_or(fallback, |width| width + gap)
}

#[derive(Clone)]
struct Stepper {
	window: Window,
	track: Element,
	config: CarouselConfig,
}

impl Stepper {
	fn measure(&self) -> f64 {
		let card_width = self
			.track
			.query_selector(&self.config.card_selector)
			.ok()
			.flatten()
			.map(|card| card.get_bounding_client_rect().width());
		let gap = self
			.window
			.get_computed_style(&self.track)
			.ok()
			.flatten()
			.and_then(|style| style.get_property_value("gap").ok())
			.map_or(self.config.default_gap, |gap| {
				parse_gap(&gap, self.config.default_gap)
			});
		scroll_step(card_width, gap, self.config.fallback_step)
	}

	fn scroll(&self, direction: Direction) {
		let options = ScrollToOptions::new();
		options.set_left(direction.sign() * self.measure());
		options.set_behavior(ScrollBehavior::Smooth);
		self.track.scroll_by_with_scroll_to_options(&options);
	}
}

pub fn mount(ctx: &PageContext) -> Result<UnitHandle, UnitError> {
	let config = ctx.config.carousel.clone();
	let track = ctx
		.document
		.query_selector(&config.track_selector)?
		.ok_or_else(|| UnitError::missing(config.track_selector.clone()))?;
	let prev = ctx.document.query_selector(&config.prev_selector)?;
	let next = ctx.document.query_selector(&config.next_selector)?;

	let unit = UnitHandle::new("carousel");
	let stepper = Stepper {
		window: ctx.window.clone(),
		track: track.clone(),
		config,
	};

	for (button, direction) in [(prev, Direction::Back), (next, Direction::Forward)] {
		if let Some(button) = button {
			let stepper = stepper.clone();
			unit.listen(&button, "click", move |_| stepper.scroll(direction))?;
		}
	}

	track.set_attribute("tabindex", "0")?;
	unit.listen(&track, "keydown", move |ev| {
		let Some(key) = ev.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
			return;
		};
		if let Some(direction) = Direction::from_key(&key) {
			ev.prevent_default();
			stepper.scroll(direction);
		}
	})?;

	Ok(unit)
}
