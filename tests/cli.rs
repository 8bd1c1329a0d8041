/*!
 * End-to-end tests for the mergecode binary
 */

use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::tempdir;

fn write_file(path: &Path, content: &[u8]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn mergecode() -> Command {
    Command::new(env!("CARGO_BIN_EXE_mergecode"))
}

#[test]
fn no_arguments_scans_current_directory() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("a.py"), b"print(1)");
    write_file(&temp.path().join("notes.md"), b"# hi");
    write_file(&temp.path().join("image.png"), b"\x89PNG");
    write_file(&temp.path().join("node_modules/x.js"), b"x");

    let output = mergecode().current_dir(temp.path()).output().unwrap();
    assert!(output.status.success());

    let merged = fs::read_to_string(temp.path().join("project_all_code.txt")).unwrap();
    let sep = "=".repeat(30);
    assert_eq!(
        merged,
        format!(
            "Project Code Summary\n====================\n\n\n{sep}\nFile Path: a.py\n{sep}\nprint(1)\n\n{sep}\nFile Path: notes.md\n{sep}\n# hi\n"
        )
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Scanning folder:"));
    assert!(stdout.contains("Added: a.py"));
    assert!(stdout.contains("Added: notes.md"));
    assert!(!stdout.contains("x.js"));
    assert!(stdout.contains("project_all_code.txt"));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("Added:"));
}

#[test]
fn unreadable_file_warns_and_continues() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("bad.txt"), &[0xff, 0xfe, 0x00]);
    write_file(&temp.path().join("good.py"), b"ok");

    let output = mergecode().current_dir(temp.path()).output().unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("Could not read bad.txt").count(), 1);

    let merged = fs::read_to_string(temp.path().join("project_all_code.txt")).unwrap();
    assert!(merged.contains("File Path: good.py"));
    assert!(!merged.contains("bad.txt"));
}

#[test]
fn explicit_directory_and_output() {
    let project = tempdir().unwrap();
    let out_dir = tempdir().unwrap();
    write_file(&project.path().join("src/lib.rs"), b"pub fn f() {}");
    write_file(&project.path().join("target/debug/gen.rs"), b"generated");

    let out_file = out_dir.path().join("context.txt");
    let output = mergecode()
        .arg(project.path())
        .arg(&out_file)
        .args(["--extensions", "rs", "--ignore-dirs", "target"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let merged = fs::read_to_string(&out_file).unwrap();
    assert!(merged.contains("pub fn f() {}"));
    assert!(!merged.contains("generated"));
}

#[test]
fn missing_directory_fails() {
    let out_dir = tempdir().unwrap();
    let output = mergecode()
        .arg("/definitely/not/a/real/dir")
        .arg(out_dir.path().join("out.txt"))
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error:"));
}

#[test]
fn generates_shell_completions() {
    let output = mergecode().args(["--generate", "bash"]).output().unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("mergecode"));
}
