//! Global subscriber behavior. Lives in its own integration binary because
//! the first `init()` claims the process-wide subscriber slot.

use campus_logger::{LevelFilter, Logger, LoggerError};

#[test]
fn console_only_init_then_reinit() {
    let logger = Logger::builder()
        .name("global-init")
        .console(true)
        .level(LevelFilter::INFO)
        .init()
        .expect("first init should succeed");

    assert!(logger.guard().is_none(), "console-only logger should not create a file guard");

    // The subscriber slot is taken for the rest of the process.
    let err = Logger::builder()
        .name("global-init-second")
        .level(LevelFilter::INFO)
        .init()
        .expect_err("second init should fail");

    assert!(matches!(err, LoggerError::Subscriber { .. }));
}
