use super::*;

#[test]
fn token_starts_live() {
	assert!(!CancelToken::new().is_cancelled());
}

#[test]
fn token_clones_share_state() {
	let token = CancelToken::new();
	let seen_by_callback = token.clone();
	token.cancel();
	assert!(seen_by_callback.is_cancelled());
}

#[test]
fn cancel_runs_each_cleanup_once() {
	let unit = UnitHandle::new("test");
	let runs = Rc::new(Cell::new(0));
	for _ in 0..3 {
		let runs = runs.clone();
		unit.on_cancel(move || runs.set(runs.get() + 1));
	}

	unit.cancel();
	unit.cancel();

	assert_eq!(runs.get(), 3);
	assert!(unit.is_cancelled());
	assert!(unit.token().is_cancelled());
}

#[test]
fn handle_reports_its_name() {
	assert_eq!(UnitHandle::new("typing").name(), "typing");
}
