use std::{fs, process::Command};

use tempfile::TempDir;

#[test]
fn writes_both_files_into_working_dir_and_reports() {
    let dir = TempDir::new().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_generate-corpus"))
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "Generated 5 training examples\n\
         Files saved: english_training_data.jsonl, english_training_data.csv\n"
    );

    let jsonl = fs::read_to_string(dir.path().join("english_training_data.jsonl")).unwrap();
    assert_eq!(jsonl.lines().count(), 5);
    let csv = fs::read_to_string(dir.path().join("english_training_data.csv")).unwrap();
    assert!(csv.starts_with("input,output\n"));
}

#[test]
fn rerun_overwrites_previous_output() {
    let dir = TempDir::new().unwrap();
    let jsonl_path = dir.path().join("english_training_data.jsonl");
    fs::write(&jsonl_path, "old\n".repeat(20)).unwrap();

    let status = Command::new(env!("CARGO_BIN_EXE_generate-corpus"))
        .current_dir(dir.path())
        .status()
        .unwrap();

    assert!(status.success());
    let jsonl = fs::read_to_string(&jsonl_path).unwrap();
    assert_eq!(jsonl.lines().count(), 5);
    assert!(!jsonl.contains("old"));
}
