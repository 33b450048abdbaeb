use foundry_logger::{LevelFilter, LogSettings};

#[test]
fn console_only_has_no_file_sink() {
    let guard = foundry_logger::init(
        "integration-console-only",
        &LogSettings::default().with_level(LevelFilter::INFO),
    )
    .expect("logger should initialize");

    assert!(!guard.has_file_sink(), "console-only logging should not start a file worker");
}
