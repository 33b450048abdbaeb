use foundry_logger::{FileSink, LogSettings};
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn json_file_sink_writes_lines() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("logs");

    let settings = LogSettings { console: false, ..LogSettings::default() }
        .with_file(FileSink::new(&log_dir).json());
    let guard = foundry_logger::init("integration-file-logging", &settings)?;
    assert!(guard.has_file_sink());

    tracing::info!(factory = "file", "hello from integration test");

    std::thread::sleep(Duration::from_millis(30));
    drop(guard);

    let log_file = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");

    let contents = fs::read_to_string(&log_file)?;
    let first = contents.lines().next().expect("at least one line");
    assert!(first.starts_with('{'), "json lines expected, got {first}");
    assert!(contents.contains("hello from integration test"));

    Ok(())
}
