//! Typewriter effect cycling through a list of phrases.

#[cfg(test)]
#[path = "typing_test.rs"]
mod typing_test;

use std::time::Duration;

use serde::Deserialize;
use web_sys::Element;

use crate::context::PageContext;
use crate::error::UnitError;
use crate::schedule::{self, CancelToken, UnitHandle};

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct TypingConfig {
	pub target_id: String,
	pub phrases: Vec<String>,
	pub type_ms: u64,
	pub delete_ms: u64,
	/// Hold time once a phrase is fully typed.
	pub pause_ms: u64,
}

impl Default for TypingConfig {
	fn default() -> Self {
		Self {
			target_id: "typed".into(),
			phrases: vec![
				"Turning signals into software".into(),
				"IoT • AI/ML • Cloud".into(),
				"C++ / SystemC • React • Node • SQL".into(),
			],
			type_ms: 55,
			delete_ms: 35,
			pause_ms: 1100,
		}
	}
}

/// What to display after a tick, and how long to wait before the next one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
	pub text: String,
	pub delay: Duration,
}

/// Phrase/character cursor of the effect.
#[derive(Clone, Debug)]
pub struct Typewriter {
	phrases: Vec<String>,
	phrase: usize,
	shown: usize,
	deleting: bool,
	type_delay: Duration,
	delete_delay: Duration,
	pause: Duration,
}

impl Typewriter {
	/// `None` when there is nothing to type.
	pub fn new(config: &TypingConfig) -> Option<Self> {
		if config.phrases.is_empty() {
			return None;
		}
		Some(Self {
			phrases: config.phrases.clone(),
			phrase: 0,
			shown: 0,
			deleting: false,
			type_delay: Duration::from_millis(config.type_ms),
			delete_delay: Duration::from_millis(config.delete_ms),
			pause: Duration::from_millis(config.pause_ms),
		})
	}

	pub fn phrase_index(&self) -> usize {
		self.phrase
	}

	pub fn is_deleting(&self) -> bool {
		self.deleting
	}

	/// Advances one character forward or backward.
	pub fn tick(&mut self) -> Frame {
		let phrase = &self.phrases[self.phrase];
		let len = phrase.chars().count();

		if !self.deleting {
			self.shown = (self.shown + 1).min(len);
			let text = prefix(phrase, self.shown);
			if self.shown == len {
				self.deleting = true;
				return Frame {
					text,
					delay: self.pause,
				};
			}
			return Frame {
				text,
				delay: self.type_delay,
			};
		}

		self.shown = self.shown.saturating_sub(1);
		let text = prefix(phrase, self.shown);
		if self.shown == 0 {
			self.deleting = false;
			self.phrase = (self.phrase + 1) % self.phrases.len();
			return Frame {
				text,
				delay: self.type_delay,
			};
		}
		Frame {
			text,
			delay: self.delete_delay,
		}
	}
}

fn prefix(phrase: &str, chars: usize) -> String {
	phrase.chars().take(chars).collect()
}

fn run(target: Element, mut writer: Typewriter, token: CancelToken) {
	let frame = writer.tick();
	target.set_text_content(Some(&frame.text));
	let next = token.clone();
	schedule::after(&token, frame.delay, move || run(target, writer, next));
}

pub fn mount(ctx: &PageContext) -> Result<UnitHandle, UnitError> {
	let config = &ctx.config.typing;
	let target = ctx
		.document
		.get_element_by_id(&config.target_id)
		.ok_or_else(|| UnitError::missing(format!("#{}", config.target_id)))?;
	let writer = Typewriter::new(config).ok_or_else(|| UnitError::missing("typing phrases"))?;

	let unit = UnitHandle::new("typing");
	run(target, writer, unit.token());
	Ok(unit)
}
