//! Cancellable timers, frame loops and event bindings.
//!
//! Every unit owns a [`UnitHandle`]. Callbacks scheduled through it check the
//! handle's [`CancelToken`] before running, and listeners registered with
//! [`UnitHandle::listen`] are removed when the handle is cancelled. Nothing
//! cancels handles during normal page life; the loops simply run until the
//! page unloads.

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use leptos::prelude::{request_animation_frame, set_timeout};
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Event, EventTarget};

use crate::error::UnitError;

/// Shared stop flag for one unit's scheduled work.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn cancel(&self) {
		self.0.set(true);
	}

	pub fn is_cancelled(&self) -> bool {
		self.0.get()
	}
}

/// Runs `task` once after `delay`, unless `token` was cancelled in between.
pub fn after(token: &CancelToken, delay: Duration, task: impl FnOnce() + 'static) {
	let token = token.clone();
	set_timeout(
		move || {
			if !token.is_cancelled() {
				task();
			}
		},
		delay,
	);
}

/// Calls `frame` on every animation frame until `token` is cancelled.
///
/// The next frame is only requested after `frame` returns.
pub fn every_frame<F>(token: &CancelToken, frame: F)
where
	F: FnMut() + 'static,
{
	fn request<F: FnMut() + 'static>(token: CancelToken, frame: Rc<RefCell<F>>) {
		request_animation_frame(move || {
			if token.is_cancelled() {
				return;
			}
			(frame.borrow_mut())();
			request(token, frame);
		});
	}
	request(token.clone(), Rc::new(RefCell::new(frame)));
}

/// Lifetime of one mounted unit: its cancel token plus the teardown for
/// everything it registered with the browser.
pub struct UnitHandle {
	name: &'static str,
	token: CancelToken,
	teardown: RefCell<Vec<Box<dyn FnOnce()>>>,
}

impl UnitHandle {
	pub fn new(name: &'static str) -> Self {
		Self {
			name,
			token: CancelToken::new(),
			teardown: RefCell::new(Vec::new()),
		}
	}

	pub fn name(&self) -> &'static str {
		self.name
	}

	/// Token shared by every callback this unit schedules.
	pub fn token(&self) -> CancelToken {
		self.token.clone()
	}

	pub fn is_cancelled(&self) -> bool {
		self.token.is_cancelled()
	}

	/// Registers `cleanup` to run when the unit is cancelled.
	pub fn on_cancel(&self, cleanup: impl FnOnce() + 'static) {
		self.teardown.borrow_mut().push(Box::new(cleanup));
	}

	/// Adds an event listener that lives until the unit is cancelled.
	pub fn listen(
		&self,
		target: &EventTarget,
		event: &'static str,
		handler: impl FnMut(Event) + 'static,
	) -> Result<(), UnitError> {
		self.bind(target, event, handler, false)
	}

	/// Same as [`listen`](Self::listen) with `{ passive: true }`.
	pub fn listen_passive(
		&self,
		target: &EventTarget,
		event: &'static str,
		handler: impl FnMut(Event) + 'static,
	) -> Result<(), UnitError> {
		self.bind(target, event, handler, true)
	}

	fn bind(
		&self,
		target: &EventTarget,
		event: &'static str,
		mut handler: impl FnMut(Event) + 'static,
		passive: bool,
	) -> Result<(), UnitError> {
		let token = self.token();
		let closure: Closure<dyn FnMut(Event)> = Closure::new(move |ev: Event| {
			if !token.is_cancelled() {
				handler(ev);
			}
		});

		if passive {
			let options = AddEventListenerOptions::new();
			options.set_passive(true);
			target.add_event_listener_with_callback_and_add_event_listener_options(
				event,
				closure.as_ref().unchecked_ref(),
				&options,
			)?;
		} else {
			target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
		}

		let target = target.clone();
		self.on_cancel(move || {
			let _ = target
				.remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
		});
		Ok(())
	}

	/// Stops scheduled callbacks and runs every registered cleanup once.
	pub fn cancel(&self) {
		self.token.cancel();
		let teardown: Vec<_> = self.teardown.borrow_mut().drain(..).collect();
		for cleanup in teardown {
			cleanup();
		}
	}
}

impl std::fmt::Debug for UnitHandle {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("UnitHandle")
			.field("name", &self.name)
			.field("cancelled", &self.is_cancelled())
			.field("bindings", &self.teardown.borrow().len())
			.finish()
	}
}
