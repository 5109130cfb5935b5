//! Global-subscriber installation. Kept in its own binary: the first
//! successful `build` claims the process-wide subscriber slot.

use knack_log::{Config, LogError, LoggerBuilder};

#[test]
fn build_installs_once_then_errors() {
    let first = LoggerBuilder::from_config(Config::default().without_module("noisy")).build();
    assert!(first.is_ok());

    // The slot is taken now; a second install must fail loudly rather than
    // silently replace the subscriber.
    let second = LoggerBuilder::from_config(Config::production()).build();
    assert!(matches!(second, Err(LogError::Init(_))));

    // Events route through the installed subscriber without panicking.
    knack_log::info!("logger installed: {}", true);
    knack_log::debug!(component = "init_test", "filtered out at info level");
}
