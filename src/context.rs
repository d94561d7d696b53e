//! The handles every unit is mounted with.

use std::rc::Rc;

use leptos::prelude::RwSignal;
use web_sys::{Document, Storage, Window};

use crate::components::theme_toggle::ThemePreference;
use crate::config::PageConfig;
use crate::error::UnitError;

/// Key/value persistence for user preferences.
pub trait PreferenceStore {
	fn get(&self, key: &str) -> Option<String>;
	fn set(&self, key: &str, value: &str);
	fn remove(&self, key: &str);
}

/// `localStorage`, or nothing when the browser refuses access to it.
pub struct BrowserStore(Option<Storage>);

impl BrowserStore {
	pub fn new(window: &Window) -> Self {
		Self(window.local_storage().ok().flatten())
	}
}

impl PreferenceStore for BrowserStore {
	fn get(&self, key: &str) -> Option<String> {
		self.0.as_ref()?.get_item(key).ok().flatten()
	}

	fn set(&self, key: &str, value: &str) {
		if let Some(storage) = &self.0 {
			let _ = storage.set_item(key, value);
		}
	}

	fn remove(&self, key: &str) {
		if let Some(storage) = &self.0 {
			let _ = storage.remove_item(key);
		}
	}
}

/// Everything a unit may touch, passed explicitly to each `mount`.
pub struct PageContext {
	pub window: Window,
	pub document: Document,
	pub config: PageConfig,
	pub store: Rc<dyn PreferenceStore>,
	/// Drives the `data-theme` attribute on `<html>`.
	pub theme: RwSignal<ThemePreference>,
}

impl PageContext {
	pub fn from_browser(theme: RwSignal<ThemePreference>) -> Result<Self, UnitError> {
		let window = web_sys::window().ok_or(UnitError::Unsupported("window"))?;
		let document = window.document().ok_or(UnitError::Unsupported("document"))?;
		let config = PageConfig::load(&document);
		let store: Rc<dyn PreferenceStore> = Rc::new(BrowserStore::new(&window));

		Ok(Self {
			window,
			document,
			config,
			store,
			theme,
		})
	}
}
