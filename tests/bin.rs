use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::{self, Command, Output};

use classic_sort_rs::config::{ALGORITHM_VAR, INPUT_VAR, OUTPUT_VAR, SEED_VAR, SIZE_VAR};
use classic_sort_rs::shim;

fn temp_path(name: &str) -> PathBuf {
    env::temp_dir().join(format!("classic_sort_rs_bin_{}_{name}.bin", process::id()))
}

struct TempFile(PathBuf);

impl Drop for TempFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.0);
    }
}

fn classic_sort() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_classic_sort"));
    cmd.env("RUST_LOG", "error")
        .env_remove(INPUT_VAR)
        .env_remove(ALGORITHM_VAR);
    cmd
}

fn numgen() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_numgen"));
    cmd.env("RUST_LOG", "error")
        .env_remove(OUTPUT_VAR)
        .env_remove(SIZE_VAR)
        .env_remove(SEED_VAR);
    cmd
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn missing_input_exits_with_failure() {
    let output = classic_sort()
        .env(INPUT_VAR, temp_path("missing"))
        .env(ALGORITHM_VAR, "merge")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty(), "{}", stdout(&output));

    let stderr = stderr(&output);
    assert_eq!(stderr.matches("input file not found").count(), 1, "{stderr}");
}

#[test]
fn unknown_algorithm_exits_with_failure() {
    let output = classic_sort()
        .env(ALGORITHM_VAR, "bogo")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty(), "{}", stdout(&output));
    assert!(stderr(&output).contains(ALGORITHM_VAR));
}

#[test]
fn invalid_size_exits_with_failure() {
    let file = TempFile(temp_path("invalid_size"));

    let output = numgen()
        .env(OUTPUT_VAR, &file.0)
        .env(SIZE_VAR, "many")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(!file.0.exists());
}

#[test]
fn generate_then_sort_succeeds() {
    let file = TempFile(temp_path("generate_then_sort"));

    let output = numgen()
        .env(OUTPUT_VAR, &file.0)
        .env(SIZE_VAR, "5")
        .env(SEED_VAR, "3")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    assert_eq!(stdout(&output), "Wrote 5 numbers\n");

    let mut expected = shim::read_buffer(&file.0).unwrap();
    expected.sort();

    let output = classic_sort()
        .env(INPUT_VAR, &file.0)
        .env(ALGORITHM_VAR, "merge")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    assert_eq!(
        stdout(&output),
        format!("Sorted numbers read from file:\n{}", shim::render(&expected))
    );
}

#[test]
fn identity_is_the_default_algorithm() {
    let file = TempFile(temp_path("identity_default"));
    shim::write_buffer(&file.0, &[5, 3, 8, 1]).unwrap();

    let output = classic_sort()
        .env(INPUT_VAR, &file.0)
        .env(ALGORITHM_VAR, "")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    assert_eq!(stdout(&output), "Numbers read from file:\n5 3 8 1\n");
}
