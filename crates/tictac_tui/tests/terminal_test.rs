//! Panic hook behaviour. Hooks are process-wide, so this file holds a single test.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tictac_tui::terminal;

#[test]
fn test_panic_hook_runs_cleanup_before_unwinding() {
    let cleaned = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&cleaned);
    terminal::install_panic_hook_with(move || flag.store(true, Ordering::SeqCst));

    let result: std::thread::Result<()> =
        std::panic::catch_unwind(|| panic!("game loop blew up"));

    let _ = std::panic::take_hook();
    assert!(result.is_err());
    assert!(cleaned.load(Ordering::SeqCst));
}
