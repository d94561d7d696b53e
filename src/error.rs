//! Failure modes shared by every page unit.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Why a unit did not mount.
///
/// None of these are fatal to the page. A missing anchor is the normal way a
/// unit opts out on pages that do not carry its markup.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UnitError {
	/// The element the unit attaches to is not in the document.
	#[error("anchor not found: {0}")]
	MissingAnchor(String),
	/// A browser capability the unit needs is absent.
	#[error("browser capability unavailable: {0}")]
	Unsupported(&'static str),
	/// A DOM call threw.
	#[error("javascript error: {0}")]
	Js(String),
}

impl UnitError {
	pub(crate) fn missing(what: impl Into<String>) -> Self {
		Self::MissingAnchor(what.into())
	}
}

impl From<JsValue> for UnitError {
	fn from(value: JsValue) -> Self {
		Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
	}
}
