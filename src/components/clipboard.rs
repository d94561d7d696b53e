//! Copy-to-clipboard for the contact address.
//!
//! Tries the async Clipboard API first and falls back to selecting a
//! throwaway textarea and running `execCommand("copy")`. The button shows the
//! same confirmation either way.

#[cfg(test)]
#[path = "clipboard_test.rs"]
mod clipboard_test;

use std::time::Duration;

use js_sys::{Function, Promise, Reflect};
use log::debug;
use serde::Deserialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{Document, HtmlButtonElement, HtmlDocument, HtmlTextAreaElement, Window};

use crate::context::PageContext;
use crate::error::UnitError;
use crate::schedule::{self, CancelToken, UnitHandle};

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ClipboardConfig {
	pub button_id: String,
	/// Attribute on the button holding a selector for the text to copy.
	pub source_attribute: String,
	pub confirm_label: String,
	pub feedback_ms: u64,
}

impl Default for ClipboardConfig {
	fn default() -> Self {
		Self {
			button_id: "copyEmailBtn".into(),
			source_attribute: "data-copy".into(),
			confirm_label: "Copied!".into(),
			feedback_ms: 1200,
		}
	}
}

/// Which mechanism performed the copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyPath {
	Native,
	Fallback,
}

/// Falls back only when the native write failed.
pub fn resolve_path<E>(native: Result<(), E>, fallback: impl FnOnce()) -> CopyPath {
	match native {
		Ok(()) => CopyPath::Native,
		Err(_) => {
			fallback();
			CopyPath::Fallback
		}
	}
}

/// Button label before, during and after the confirmation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Feedback {
	original: String,
	confirm: String,
	hold: Duration,
}

impl Feedback {
	pub fn new(original: impl Into<String>, config: &ClipboardConfig) -> Self {
		Self {
			original: original.into(),
			confirm: config.confirm_label.clone(),
			hold: Duration::from_millis(config.feedback_ms),
		}
	}

	pub fn confirm(&self) -> &str {
		&self.confirm
	}

	pub fn original(&self) -> &str {
		&self.original
	}

	pub fn hold(&self) -> Duration {
		self.hold
	}
}

async fn write_native(window: &Window, text: &str) -> Result<(), JsValue> {
	let clipboard = Reflect::get(&window.navigator(), &JsValue::from_str("clipboard"))?;
	if clipboard.is_undefined() || clipboard.is_null() {
		return Err(JsValue::from_str("navigator.clipboard unavailable"));
	}
	let write: Function = Reflect::get(&clipboard, &JsValue::from_str("writeText"))?.dyn_into()?;
	let promise: Promise = write.call1(&clipboard, &JsValue::from_str(text))?.dyn_into()?;
	JsFuture::from(promise).await.map(|_| ())
}

fn write_fallback(document: &Document, text: &str) -> Result<bool, JsValue> {
	let body = document
		.body()
		.ok_or_else(|| JsValue::from_str("document has no body"))?;
	let area: HtmlTextAreaElement = document.create_element("textarea")?.dyn_into()?;
	area.set_value(text);
	area.set_attribute("readonly", "")?;
	let style = area.style();
	style.set_property("position", "fixed")?;
	style.set_property("left", "-9999px")?;
	style.set_property("top", "0")?;

	body.append_child(&area)?;
	area.select();
	let copied = match document.dyn_ref::<HtmlDocument>() {
		Some(html) => html.exec_command("copy")?,
		None => false,
	};
	body.remove_child(&area)?;
	Ok(copied)
}

fn show_feedback(button: HtmlButtonElement, feedback: Feedback, token: &CancelToken) {
	button.set_text_content(Some(feedback.confirm()));
	button.set_disabled(true);
	schedule::after(token, feedback.hold(), move || {
		button.set_text_content(Some(feedback.original()));
		button.set_disabled(false);
	});
}

pub fn mount(ctx: &PageContext) -> Result<UnitHandle, UnitError> {
	let config = ctx.config.clipboard.clone();
	let button: HtmlButtonElement = ctx
		.document
		.get_element_by_id(&config.button_id)
		.and_then(|el| el.dyn_into().ok())
		.ok_or_else(|| UnitError::missing(format!("button#{}", config.button_id)))?;
	let source = button
		.get_attribute(&config.source_attribute)
		.and_then(|selector| ctx.document.query_selector(&selector).ok().flatten());

	let unit = UnitHandle::new("clipboard");
	let (window, document, token) = (ctx.window.clone(), ctx.document.clone(), unit.token());
	let target = button.clone();
	unit.listen(&target, "click", move |_| {
		let text = source
			.as_ref()
			.and_then(|node| node.text_content())
			.map(|text| text.trim().to_string())
			.unwrap_or_default();
		if text.is_empty() {
			return;
		}

		let (window, document, button, token) =
			(window.clone(), document.clone(), button.clone(), token.clone());
		let feedback = Feedback::new(button.text_content().unwrap_or_default(), &config);
		spawn_local(async move {
			let native = write_native(&window, &text).await;
			let path = resolve_path(native, || {
				if let Err(e) = write_fallback(&document, &text) {
					debug!("portfolio-fx: fallback copy failed: {:?}", e);
				}
			});
			debug!("portfolio-fx: copied contact via {:?}", path);
			show_feedback(button, feedback, &token);
		});
	})?;

	Ok(unit)
}
