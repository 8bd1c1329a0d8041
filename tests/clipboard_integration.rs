/*!
 * Integration test for clipboard functionality
 */

use std::env;
use std::fs;
use std::process::Command;

use tempfile::tempdir;

#[test]
#[ignore] // This test requires tmux to be running and is ignored by default
          // To run this test manually use: cargo test --test clipboard_integration -- --ignored
fn test_clip_flag() {
    // Skip if not in a tmux session
    if env::var("TMUX").is_err() {
        return;
    }

    let temp_dir = tempdir().unwrap();
    let output_file = temp_dir.path().join("merged.txt");
    fs::write(
        temp_dir.path().join("test.md"),
        "Test content for clipboard integration\n",
    )
    .unwrap();

    let status = Command::new(env!("CARGO_BIN_EXE_mergecode"))
        .arg("--clip")
        .arg(temp_dir.path())
        .arg(&output_file)
        .status()
        .unwrap();
    assert!(status.success());

    let merged = fs::read_to_string(&output_file).unwrap();
    assert!(merged.contains("Test content for clipboard integration"));

    // The tmux buffer should hold exactly what was written to disk
    let clipboard_output = Command::new("tmux").args(["show-buffer"]).output().unwrap();
    let clipboard_content = String::from_utf8_lossy(&clipboard_output.stdout);
    assert_eq!(merged, clipboard_content);
}
