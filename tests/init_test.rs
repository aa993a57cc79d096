//! Integration tests for the sip-happens init command

use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Helper to run sip-happens in a directory with an isolated user config dir
fn run(dir: &Path, args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_sip-happens"))
        .args(args)
        .current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join("xdg"))
        .output()
        .unwrap()
}

#[test]
fn test_init_writes_house_menu() {
    let temp_dir = TempDir::new().unwrap();

    let output = run(temp_dir.path(), &["init"]);
    assert!(output.status.success(), "Init command failed");

    let menu_file = temp_dir.path().join(".sip-happens/menu.yml");
    let content = fs::read_to_string(&menu_file).unwrap();
    assert!(content.contains("lavender_serenity_latte"));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Wrote house menu"));
}

#[test]
fn test_init_idempotent_without_force() {
    let temp_dir = TempDir::new().unwrap();
    run(temp_dir.path(), &["init"]);

    let menu_file = temp_dir.path().join(".sip-happens/menu.yml");
    fs::write(&menu_file, "cafe_name: Mine\ndrinks: []\n").unwrap();

    let output = run(temp_dir.path(), &["init"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("already initialized"));
    assert_eq!(
        fs::read_to_string(&menu_file).unwrap(),
        "cafe_name: Mine\ndrinks: []\n"
    );

    let output = run(temp_dir.path(), &["init", "--force"]);
    assert!(output.status.success());
    assert!(fs::read_to_string(&menu_file).unwrap().contains("Sip Happens Café"));
}

#[test]
fn test_project_menu_is_picked_up() {
    let temp_dir = TempDir::new().unwrap();
    run(temp_dir.path(), &["init"]);

    let menu_file = temp_dir.path().join(".sip-happens/menu.yml");
    let edited = fs::read_to_string(&menu_file)
        .unwrap()
        .replace("cafe_name: \"Sip Happens Café\"", "cafe_name: \"Corner Nook\"");
    fs::write(&menu_file, edited).unwrap();

    let output = run(temp_dir.path(), &["validate"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Corner Nook"));
    assert!(stdout.contains("(project)"));
}
