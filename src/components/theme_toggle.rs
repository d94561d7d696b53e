//! Light/dark theme toggle persisted in `localStorage`.
//!
//! The preference drives the `data-theme` attribute on `<html>` through the
//! page's theme signal; this unit only reads the stored value, flips it on
//! click and writes it back.

#[cfg(test)]
#[path = "theme_toggle_test.rs"]
mod theme_toggle_test;

use leptos::prelude::*;
use serde::Deserialize;

use crate::context::{PageContext, PreferenceStore};
use crate::error::UnitError;
use crate::schedule::UnitHandle;

const LIGHT: &str = "light";

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
	pub toggle_id: String,
	pub storage_key: String,
}

impl Default for ThemeConfig {
	fn default() -> Self {
		Self {
			toggle_id: "themeToggle".into(),
			storage_key: "theme".into(),
		}
	}
}

/// The user's theme choice.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ThemePreference {
	/// No attribute; the stylesheet's dark palette.
	#[default]
	Default,
	Light,
	/// Any other non-empty stored value, applied verbatim.
	Other(String),
}

impl ThemePreference {
	pub fn from_stored(value: Option<&str>) -> Self {
		match value {
			None | Some("") => Self::Default,
			Some(LIGHT) => Self::Light,
			Some(other) => Self::Other(other.to_string()),
		}
	}

	pub fn load(store: &dyn PreferenceStore, key: &str) -> Self {
		Self::from_stored(store.get(key).as_deref())
	}

	/// Light goes back to default; anything else becomes light.
	pub fn toggled(&self) -> Self {
		match self {
			Self::Light => Self::Default,
			_ => Self::Light,
		}
	}

	/// Value of `data-theme`, or `None` to remove the attribute.
	pub fn attribute(&self) -> Option<String> {
		match self {
			Self::Default => None,
			Self::Light => Some(LIGHT.to_string()),
			Self::Other(value) => Some(value.clone()),
		}
	}

	/// Default clears the key so the store looks untouched.
	pub fn persist(&self, store: &dyn PreferenceStore, key: &str) {
		match self.attribute() {
			Some(value) => store.set(key, &value),
			None => store.remove(key),
		}
	}
}

pub fn mount(ctx: &PageContext) -> Result<UnitHandle, UnitError> {
	let config = &ctx.config.theme;
	let toggle = ctx
		.document
		.get_element_by_id(&config.toggle_id)
		.ok_or_else(|| UnitError::missing(format!("#{}", config.toggle_id)))?;

	let unit = UnitHandle::new("theme toggle");
	let theme = ctx.theme;
	theme.set(ThemePreference::load(ctx.store.as_ref(), &config.storage_key));

	let (store, key) = (ctx.store.clone(), config.storage_key.clone());
	unit.listen(&toggle, "click", move |ev| {
		ev.prevent_default();
		let next = theme.with_untracked(ThemePreference::toggled);
		next.persist(store.as_ref(), &key);
		theme.set(next);
	})?;

	Ok(unit)
}
