use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color and an isolated
/// config directory
fn plannergen_cmd(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("plannergen").expect("Failed to find plannergen binary");
    cmd.env("XDG_CONFIG_HOME", temp_dir.path().join("config"));
    cmd.arg("--no-color");
    cmd
}

#[test]
fn test_cli_generate_writes_sources() {
    let temp_dir = create_cli_test_environment();
    let out = temp_dir.path().join("out");

    plannergen_cmd(&temp_dir)
        .args(["generate", "--year", "2024", "--out-dir", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Planner 2024"))
        .stdout(predicate::str::contains("| dailies | dailies.tex | 366 |"));

    for file in [
        "title.tex",
        "annual.tex",
        "quarterlies.tex",
        "monthlies.tex",
        "weeklies.tex",
        "dailies.tex",
        "todo.tex",
        "notes.tex",
        "document.tex",
    ] {
        assert!(out.join(file).exists(), "missing {file}");
    }
}

#[test]
fn test_cli_generate_selected_sections_as_json() {
    let temp_dir = create_cli_test_environment();
    let out = temp_dir.path().join("out");

    let output = plannergen_cmd(&temp_dir)
        .args([
            "--json",
            "generate",
            "--year",
            "2023",
            "--weekday",
            "sunday",
            "--hand",
            "left",
            "--sections",
            "dailies,title",
            "--out-dir",
            out.to_str().unwrap(),
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(report["year"], 2023);
    assert_eq!(report["hand"], "left");
    assert_eq!(report["first_weekday"], "sunday");
    assert_eq!(report["sections"][0]["section"], "title");
    assert_eq!(report["sections"][1]["pages"], 365);
    assert!(!out.join("notes.tex").exists());

    let root = std::fs::read_to_string(out.join("document.tex")).unwrap();
    assert!(root.contains("\\input{title}\n\\input{dailies}\n"));
}

#[test]
fn test_cli_unknown_device_fails() {
    let temp_dir = create_cli_test_environment();

    plannergen_cmd(&temp_dir)
        .args(["generate", "--device", "kindle"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown device type 'kindle'"));
}

#[test]
fn test_cli_unsupported_device_fails() {
    let temp_dir = create_cli_test_environment();
    let out = temp_dir.path().join("out");

    plannergen_cmd(&temp_dir)
        .args([
            "generate",
            "--device",
            "remarkable2",
            "--out-dir",
            out.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not supported by template 'mos'"));
    assert!(!out.exists());
}

#[test]
fn test_cli_layout_file_applies() {
    let temp_dir = create_cli_test_environment();
    let out = temp_dir.path().join("out");
    let layout = temp_dir.path().join("layout.toml");
    std::fs::write(
        &layout,
        "device = \"supernote_a6x\"\n\n[margin]\ntop = \"1cm\"\nbottom = \"1cm\"\nleft = \"2cm\"\nright = \"3cm\"\n",
    )
    .unwrap();

    plannergen_cmd(&temp_dir)
        .args([
            "generate",
            "--sections",
            "title",
            "--layout-path",
            layout.to_str().unwrap(),
            "--out-dir",
            out.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("supernote_a6x"));

    let root = std::fs::read_to_string(out.join("document.tex")).unwrap();
    assert!(root.contains("top=1cm, bottom=1cm, left=2cm, right=3cm"));
}

#[test]
fn test_cli_invalid_layout_file_fails() {
    let temp_dir = create_cli_test_environment();
    let layout = temp_dir.path().join("layout.toml");
    std::fs::write(&layout, "[paper]\nwidth = 12\n").unwrap();

    plannergen_cmd(&temp_dir)
        .args(["generate", "--layout-path", layout.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load layout file"));
}

#[test]
fn test_cli_lists_devices_and_sections() {
    let temp_dir = create_cli_test_environment();

    plannergen_cmd(&temp_dir)
        .arg("devices")
        .assert()
        .success()
        .stdout(predicate::str::contains("supernote_a5x"))
        .stdout(predicate::str::contains("remarkable2"));

    plannergen_cmd(&temp_dir)
        .arg("sections")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. title"))
        .stdout(predicate::str::contains("7. todo"));
}
