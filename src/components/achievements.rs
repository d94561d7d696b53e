//! Achievement cards that expand on tap or keyboard, not only on hover.

#[cfg(test)]
#[path = "achievements_test.rs"]
mod achievements_test;

use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::{Element, KeyboardEvent};

use crate::context::PageContext;
use crate::error::UnitError;
use crate::schedule::UnitHandle;

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct AchievementsConfig {
	pub card_selector: String,
	pub active_class: String,
}

impl Default for AchievementsConfig {
	fn default() -> Self {
		Self {
			card_selector: ".achievements .achieve-card".into(),
			active_class: "is-active".into(),
		}
	}
}

/// Enter and Space toggle a focused card.
pub fn is_toggle_key(key: &str) -> bool {
	matches!(key, "Enter" | " ")
}

pub fn aria_expanded(active: bool) -> &'static str {
	if active { "true" } else { "false" }
}

fn toggle(card: &Element, class: &str) {
	let active = card.class_list().toggle(class).unwrap_or(false);
	let _ = card.set_attribute("aria-expanded", aria_expanded(active));
}

fn inside_link(target: Option<web_sys::EventTarget>) -> bool {
	target
		.and_then(|t| t.dyn_into::<Element>().ok())
		.and_then(|el| el.closest("a").ok().flatten())
		.is_some()
}

pub fn mount(ctx: &PageContext) -> Result<UnitHandle, UnitError> {
	let config = &ctx.config.achievements;
	let nodes = ctx.document.query_selector_all(&config.card_selector)?;
	let cards: Vec<Element> = (0..nodes.length())
		.filter_map(|i| nodes.item(i))
		.filter_map(|node| node.dyn_into::<Element>().ok())
		.collect();
	if cards.is_empty() {
		return Err(UnitError::missing(config.card_selector.clone()));
	}

	let unit = UnitHandle::new("achievements");
	for card in cards {
		let (on_key, class) = (card.clone(), config.active_class.clone());
		unit.listen(&card, "keydown", move |ev| {
			let Some(key) = ev.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
				return;
			};
			if is_toggle_key(&key) {
				ev.prevent_default();
				toggle(&on_key, &class);
			}
		})?;

		let (on_click, class) = (card.clone(), config.active_class.clone());
		unit.listen(&card, "click", move |ev| {
			if inside_link(ev.target()) {
				return;
			}
			toggle(&on_click, &class);
		})?;
	}

	Ok(unit)
}
