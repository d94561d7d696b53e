use std::cell::Cell;

use super::*;

#[test]
fn native_success_skips_fallback() {
	let fallback_ran = Cell::new(false);
	let path = resolve_path(Ok::<(), ()>(()), || fallback_ran.set(true));
	assert_eq!(path, CopyPath::Native);
	assert!(!fallback_ran.get());
}

#[test]
fn native_failure_runs_fallback() {
	let fallback_ran = Cell::new(false);
	let path = resolve_path(Err("rejected"), || fallback_ran.set(true));
	assert_eq!(path, CopyPath::Fallback);
	assert!(fallback_ran.get());
}

#[test]
fn feedback_is_identical_for_both_paths() {
	let config = ClipboardConfig::default();
	let native = Feedback::new("Copy email", &config);
	let fallback = Feedback::new("Copy email", &config);
	assert_eq!(native, fallback);
}

#[test]
fn feedback_confirms_then_restores_label() {
	let feedback = Feedback::new("Copy email", &ClipboardConfig::default());
	assert_eq!(feedback.confirm(), "Copied!");
	assert_eq!(feedback.original(), "Copy email");
	assert_eq!(feedback.hold(), Duration::from_millis(1200));
}
