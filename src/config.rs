//! Page configuration.
//!
//! Every unit reads its anchors, copy and timings from [`PageConfig`]. A page
//! may override any subset by embedding JSON in
//! `<script id="page-config" type="application/json">`; missing fields keep
//! their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use log::{info, warn};
use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlScriptElement};

use crate::components::achievements::AchievementsConfig;
use crate::components::carousel::CarouselConfig;
use crate::components::clipboard::ClipboardConfig;
use crate::components::footer_year::FooterConfig;
use crate::components::particle_field::ParticleStyle;
use crate::components::reveal::RevealConfig;
use crate::components::scroll_ring::{RingConfig, default_rings};
use crate::components::theme_toggle::ThemeConfig;
use crate::components::typing::TypingConfig;

/// Id of the script element that may carry a JSON override.
pub const CONFIG_ELEMENT_ID: &str = "page-config";

/// Settings for every unit on the page.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct PageConfig {
	pub theme: ThemeConfig,
	pub reveal: RevealConfig,
	pub typing: TypingConfig,
	pub particles: ParticleStyle,
	pub carousel: CarouselConfig,
	pub achievements: AchievementsConfig,
	pub clipboard: ClipboardConfig,
	/// Each entry is one back-to-top button with its own progress ring.
	pub rings: Vec<RingConfig>,
	pub footer: FooterConfig,
}

impl Default for PageConfig {
	fn default() -> Self {
		Self {
			theme: ThemeConfig::default(),
			reveal: RevealConfig::default(),
			typing: TypingConfig::default(),
			particles: ParticleStyle::default(),
			carousel: CarouselConfig::default(),
			achievements: AchievementsConfig::default(),
			clipboard: ClipboardConfig::default(),
			rings: default_rings(),
			footer: FooterConfig::default(),
		}
	}
}

impl PageConfig {
	pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(text)
	}

	/// Reads the embedded override, falling back to defaults when the element
	/// is absent or its JSON does not parse.
	pub fn load(document: &Document) -> Self {
		let Some(text) = document
			.get_element_by_id(CONFIG_ELEMENT_ID)
			.and_then(|el| el.dyn_into::<HtmlScriptElement>().ok())
			.and_then(|script| script.text().ok())
		else {
			return Self::default();
		};

		match Self::from_json(&text) {
			Ok(config) => {
				info!("portfolio-fx: loaded page config override");
				config
			}
			Err(e) => {
				warn!("portfolio-fx: ignoring malformed page config: {}", e);
				Self::default()
			}
		}
	}
}
