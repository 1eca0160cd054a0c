#![cfg(feature = "png")]

use image::ColorType;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

const EXPECTED: [(&str, u32); 3] = [
    ("icon16.png", 16),
    ("icon48.png", 48),
    ("icon128.png", 128),
];

/// Runs `robot-icons` with no arguments inside `dir` and asserts that it succeeded
fn run_generator(dir: &Path) -> Output {
    let output = Command::new(env!("CARGO_BIN_EXE_robot-icons"))
        .current_dir(dir)
        .output()
        .expect("Failed to run robot-icons");

    if !output.status.success() {
        eprintln!("Command failed with status: {}", output.status);
        eprintln!("stdout: {}", String::from_utf8_lossy(&output.stdout));
        eprintln!("stderr: {}", String::from_utf8_lossy(&output.stderr));
        panic!("robot-icons command failed");
    }

    output
}

fn icon_files(icons_dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = std::fs::read_dir(icons_dir)
        .expect("icons directory should exist")
        .map(|entry| entry.expect("Failed to read directory entry").path())
        .collect();
    files.sort();
    files
}

/// Running the binary with no arguments writes exactly the three manifest icons
#[test]
fn test_generates_three_extension_icons() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output = run_generator(temp_dir.path());

    let icons_dir = temp_dir.path().join("icons");
    let files = icon_files(&icons_dir);
    assert_eq!(files.len(), 3, "unexpected files: {:?}", files);

    for (filename, size) in EXPECTED {
        let path = icons_dir.join(filename);
        assert!(path.exists(), "{} should exist", path.display());

        let icon = image::open(&path).expect("Failed to decode generated icon");
        assert_eq!(icon.width(), size, "{filename} width");
        assert_eq!(icon.height(), size, "{filename} height");
        assert_eq!(icon.color(), ColorType::Rgb8, "{filename} should have no alpha");
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Creating Browser-Use Chrome Extension Icons..."));
    assert!(stdout.contains("icons/icon128.png (128x128)"));
    assert!(stdout.contains("All icons created successfully!"));
    assert!(stdout.contains("\"16\": \"icons/icon16.png\""));
    assert!(stdout.contains("chrome://extensions/"));
}

/// A second run overwrites the icons with byte-identical files
#[test]
fn test_regeneration_is_byte_identical() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let icons_dir = temp_dir.path().join("icons");

    run_generator(temp_dir.path());
    let first: Vec<Vec<u8>> = EXPECTED
        .iter()
        .map(|(filename, _)| std::fs::read(icons_dir.join(filename)).unwrap())
        .collect();

    run_generator(temp_dir.path());
    let second: Vec<Vec<u8>> = EXPECTED
        .iter()
        .map(|(filename, _)| std::fs::read(icons_dir.join(filename)).unwrap())
        .collect();

    assert_eq!(first, second);
    assert_eq!(icon_files(&icons_dir).len(), 3);
}

/// The tool takes no arguments; anything extra is a usage error and writes nothing
#[test]
fn test_rejects_arguments() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    let output = Command::new(env!("CARGO_BIN_EXE_robot-icons"))
        .current_dir(temp_dir.path())
        .arg("--sizes")
        .arg("64")
        .output()
        .expect("Failed to run robot-icons");

    assert!(!output.status.success());
    assert!(!temp_dir.path().join("icons").exists());
}
