//! Page units. Each one mounts against the static markup independently and
//! is a no-op when its anchor element is missing.

pub mod achievements;
pub mod carousel;
pub mod clipboard;
pub mod footer_year;
pub mod particle_field;
pub mod reveal;
pub mod scroll_ring;
pub mod theme_toggle;
pub mod typing;
