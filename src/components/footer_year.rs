//! Stamps the current calendar year into the footer.

use log::debug;
use serde::Deserialize;

use crate::context::PageContext;
use crate::error::UnitError;
use crate::schedule::UnitHandle;

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct FooterConfig {
	/// Every element with one of these ids receives the year.
	pub year_ids: Vec<String>,
}

impl Default for FooterConfig {
	fn default() -> Self {
		Self {
			year_ids: vec!["year".into()],
		}
	}
}

pub fn current_year() -> u32 {
	js_sys::Date::new_0().get_full_year()
}

pub fn mount(ctx: &PageContext) -> Result<UnitHandle, UnitError> {
	let year = current_year().to_string();
	let mut stamped = 0;
	for id in &ctx.config.footer.year_ids {
		match ctx.document.get_element_by_id(id) {
			Some(el) => {
				el.set_text_content(Some(&year));
				stamped += 1;
			}
			None => debug!("portfolio-fx: no #{} to stamp", id),
		}
	}
	if stamped == 0 {
		return Err(UnitError::missing("footer year"));
	}
	Ok(UnitHandle::new("footer year"))
}
