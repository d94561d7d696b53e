//! portfolio-fx: interactive effects for a static portfolio page.
//!
//! This crate attaches a set of independent, purely cosmetic behaviors to
//! server-rendered markup: theme toggle, reveal-on-scroll, typewriter hero,
//! particle background, project carousel, expandable achievement cards,
//! copy-to-clipboard and back-to-top progress rings.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, debug, info, warn};

pub mod components;
pub mod config;
pub mod context;
pub mod error;
pub mod schedule;

pub use components::theme_toggle::ThemePreference;
pub use config::PageConfig;
pub use context::PageContext;
pub use error::UnitError;
pub use schedule::{CancelToken, UnitHandle};

use components::{
	achievements, carousel, clipboard, footer_year, particle_field, reveal, scroll_ring,
	theme_toggle, typing,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("portfolio-fx: logging initialized");
}

/// Mounts every unit against the page, returning the ones that attached.
///
/// Units whose anchors are missing are skipped quietly; any other failure is
/// logged and the remaining units still mount.
pub fn enhance(ctx: &PageContext) -> Vec<UnitHandle> {
	let mut mounted = Vec::new();
	let mut keep = |unit: &str, result: Result<UnitHandle, UnitError>| match result {
		Ok(handle) => {
			info!("portfolio-fx: {} mounted", handle.name());
			mounted.push(handle);
		}
		Err(UnitError::MissingAnchor(what)) => {
			debug!("portfolio-fx: {} skipped, {} not found", unit, what);
		}
		Err(e) => warn!("portfolio-fx: {} unavailable: {}", unit, e),
	};

	keep("theme toggle", theme_toggle::mount(ctx));
	keep("reveal", reveal::mount(ctx));
	keep("typing", typing::mount(ctx));
	keep("particles", particle_field::mount(ctx));
	keep("carousel", carousel::mount(ctx));
	keep("achievements", achievements::mount(ctx));
	keep("clipboard", clipboard::mount(ctx));
	for ring in &ctx.config.rings {
		keep("scroll ring", scroll_ring::mount(ctx, ring));
	}
	keep("footer year", footer_year::mount(ctx));

	mounted
}

/// Main application component.
/// Binds the theme signal to `<html data-theme>` and mounts the page units
/// once the app is attached.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let theme = RwSignal::new(ThemePreference::default());
	let units: Rc<RefCell<Vec<UnitHandle>>> = Rc::new(RefCell::new(Vec::new()));

	Effect::new(move |_| {
		if !units.borrow().is_empty() {
			return;
		}
		match PageContext::from_browser(theme) {
			Ok(ctx) => *units.borrow_mut() = enhance(&ctx),
			Err(e) => warn!("portfolio-fx: cannot enhance page: {}", e),
		}
	});

	view! {
		<Html attr:data-theme=move || theme.with(ThemePreference::attribute) />
	}
}
