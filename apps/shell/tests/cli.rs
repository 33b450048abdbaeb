use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

fn foundry(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_foundry"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("run foundry binary")
}

#[test]
fn list_json_prints_builtin_factories() {
    let output = foundry(&["list", "--json"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains(r#""name": "file""#), "{stdout}");
    assert!(stdout.contains(r#""name": "printer""#), "{stdout}");
}

#[test]
fn create_builds_manifest_objects() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("data.txt");
    fs::write(&data, "payload").unwrap();

    let manifest = dir.path().join("foundry.toml");
    fs::write(
        &manifest,
        format!(
            "[log]\nlevel = \"error\"\n\n[[objects]]\nname = \"file\"\noptions = {:?}\n\n[[objects]]\nname = \"printer\"\noptions = {{ prefix = \"# \" }}\n",
            data.display().to_string()
        ),
    )
    .unwrap();

    let output = foundry(&["create", "--config", manifest.to_str().unwrap()]);
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(output.status.success(), "{stdout}");
    assert!(stdout.contains("created file (FileOpener)"), "{stdout}");
    assert!(stdout.contains("# 2 object(s) ready"), "{stdout}");
}

#[test]
fn unknown_factory_exits_with_failure() {
    let dir = TempDir::new().unwrap();
    let manifest = dir.path().join("foundry.json");
    fs::write(&manifest, r#"{"objects": [{"name": "ghost"}], "log": {"level": "off"}}"#).unwrap();

    let output = foundry(&["create", "-c", manifest.to_str().unwrap()]);
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("factory `ghost` does not exist"), "{stderr}");
}
