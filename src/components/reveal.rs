//! Reveal-on-scroll: marks elements visible the first time they enter the
//! viewport.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Array, Reflect};
use serde::Deserialize;
use wasm_bindgen::prelude::*;
use web_sys::{
	Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window,
};

use crate::context::PageContext;
use crate::error::UnitError;
use crate::schedule::UnitHandle;

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
	pub selector: String,
	pub visible_class: String,
	/// Fraction of the element that must be on screen.
	pub threshold: f64,
}

impl Default for RevealConfig {
	fn default() -> Self {
		Self {
			selector: ".reveal".into(),
			visible_class: "visible".into(),
			threshold: 0.1,
		}
	}
}

/// Remembers which targets have been revealed so each is revealed once.
#[derive(Debug)]
pub struct RevealLedger<K> {
	revealed: Vec<K>,
}

impl<K> Default for RevealLedger<K> {
	fn default() -> Self {
		Self {
			revealed: Vec::new(),
		}
	}
}

impl<K: PartialEq> RevealLedger<K> {
	/// Returns true only the first time `key` is admitted.
	pub fn admit(&mut self, key: K) -> bool {
		if self.revealed.contains(&key) {
			return false;
		}
		self.revealed.push(key);
		true
	}

	pub fn len(&self) -> usize {
		self.revealed.len()
	}

	pub fn is_empty(&self) -> bool {
		self.revealed.is_empty()
	}
}

fn supports_intersection_observer(window: &Window) -> bool {
	Reflect::has(window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
}

pub fn mount(ctx: &PageContext) -> Result<UnitHandle, UnitError> {
	let config = ctx.config.reveal.clone();
	let nodes = ctx.document.query_selector_all(&config.selector)?;
	let elements: Vec<Element> = (0..nodes.length())
		.filter_map(|i| nodes.item(i))
		.filter_map(|node| node.dyn_into::<Element>().ok())
		.collect();
	if elements.is_empty() {
		return Err(UnitError::missing(config.selector));
	}

	let unit = UnitHandle::new("reveal");

	if !supports_intersection_observer(&ctx.window) {
		for el in &elements {
			let _ = el.class_list().add_1(&config.visible_class);
		}
		return Ok(unit);
	}

	let ledger = Rc::new(RefCell::new(RevealLedger::default()));
	let (token, class) = (unit.token(), config.visible_class.clone());
	let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
		move |entries: Array, observer: IntersectionObserver| {
			if token.is_cancelled() {
				return;
			}
			for entry in entries.iter() {
				let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
					continue;
				};
				if !entry.is_intersecting() {
					continue;
				}
				let target = entry.target();
				observer.unobserve(&target);
				if ledger.borrow_mut().admit(target.clone()) {
					let _ = target.class_list().add_1(&class);
				}
			}
		},
	);

	let options = IntersectionObserverInit::new();
	options.set_threshold(&JsValue::from_f64(config.threshold));
	let observer =
		IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
	for el in &elements {
		observer.observe(el);
	}

	unit.on_cancel(move || {
		observer.disconnect();
		drop(callback);
	});
	Ok(unit)
}
