use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the built binary, provided by cargo for integration tests.
fn binary() -> &'static str {
    env!("CARGO_BIN_EXE_moodlebox-icon")
}

fn run_in(dir: &Path) -> Output {
    Command::new(binary())
        .current_dir(dir)
        .output()
        .expect("Failed to run moodlebox-icon")
}

#[test]
fn writes_png_and_prints_instructions() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    fs::create_dir(temp_dir.path().join("build")).expect("Failed to create build dir");

    let output = run_in(temp_dir.path());

    if !output.status.success() {
        eprintln!("stdout: {}", String::from_utf8_lossy(&output.stdout));
        eprintln!("stderr: {}", String::from_utf8_lossy(&output.stderr));
        panic!("moodlebox-icon failed with status: {}", output.status);
    }

    let icon_path = temp_dir.path().join("build").join("icon-source.png");
    assert!(
        icon_path.exists(),
        "icon should exist at: {}",
        icon_path.display()
    );

    let img = image::open(&icon_path).expect("Failed to decode output PNG");
    assert_eq!((img.width(), img.height()), (1024, 1024));
    assert_eq!(img.color(), image::ColorType::Rgb8);

    // Top-left pixel is the exact light-orange gradient endpoint.
    let rgb = img.to_rgb8();
    assert_eq!(*rgb.get_pixel(0, 0), image::Rgb([255, 136, 0]));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Icon saved to build/icon-source.png"));
    assert!(stdout.contains("Next steps:"));
    assert!(stdout.contains("npm install -g electron-icon-builder"));
    assert!(stdout
        .contains("electron-icon-builder --input=build/icon-source.png --output=build"));
}

/// A missing build/ directory is fatal: non-zero exit, nothing created.
#[test]
fn fails_when_build_directory_is_missing() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    let output = run_in(temp_dir.path());

    assert!(
        !output.status.success(),
        "run should fail without a build directory"
    );
    assert!(
        !temp_dir.path().join("build").exists(),
        "build directory must not be silently created"
    );
}

/// Running twice overwrites in place: one file, byte-identical content.
#[test]
fn second_run_overwrites_the_first() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let build_dir = temp_dir.path().join("build");
    fs::create_dir(&build_dir).expect("Failed to create build dir");
    let icon_path = build_dir.join("icon-source.png");

    let first = run_in(temp_dir.path());
    assert!(first.status.success());
    let first_bytes = fs::read(&icon_path).expect("Failed to read first output");

    let second = run_in(temp_dir.path());
    assert!(second.status.success());
    let second_bytes = fs::read(&icon_path).expect("Failed to read second output");

    assert_eq!(first_bytes, second_bytes, "repeated runs must be deterministic");

    // No temp artifacts left behind.
    let entries: Vec<_> = fs::read_dir(&build_dir)
        .expect("Failed to list build dir")
        .collect();
    assert_eq!(entries.len(), 1, "exactly one file expected in build/");
}
