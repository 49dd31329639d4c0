//! Driver tests: run the `arbor` binary against files on disk

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

/// Fresh scratch directory per test
fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("arbor-e2e-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("failed to create scratch dir");
    dir
}

fn arbor(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_arbor"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run arbor")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_prints_bindings() {
    let dir = scratch("bindings");
    let file = dir.join("main.arb");
    fs::write(&file, "let x: int = (3 + 4) * 2;\nlet s: string = \"hi\";\n").unwrap();

    let output = arbor(&["-b", file.to_str().unwrap()]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "x: int = 14\ns: string = \"hi\"\n");
}

#[test]
fn test_prints_tree() {
    let dir = scratch("tree");
    let file = dir.join("main.arb");
    fs::write(&file, "let x: int = 1;").unwrap();

    let output = arbor(&["--tree", file.to_str().unwrap()]);
    assert!(output.status.success());
    let expected = "\
`-Statements:
  `-Variable:
    |-typeinfo: int
    |-identifier: x
    `-init:
      `-Value: 1
";
    assert_eq!(stdout(&output), expected);
}

#[test]
fn test_writes_tree_to_output_file() {
    let dir = scratch("output");
    let file = dir.join("main.arb");
    let out = dir.join("tree.txt");
    fs::write(&file, "let x: int = 1;").unwrap();

    let output = arbor(&["-o", out.to_str().unwrap(), file.to_str().unwrap()]);
    assert!(output.status.success());
    assert!(stdout(&output).is_empty());

    let written = fs::read_to_string(&out).unwrap();
    assert!(written.starts_with("`-Statements:\n"));
}

#[test]
fn test_config_file_next_to_input() {
    let dir = scratch("config");
    let file = dir.join("main.arb");
    fs::write(&file, "let n: int = 2 ^^ 10;").unwrap();
    fs::write(dir.join("arbor.toml"), "[output]\nbindings = true\n").unwrap();

    let output = arbor(&[file.to_str().unwrap()]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "n: int = 1024\n");
}

#[test]
fn test_missing_file_exits_with_error() {
    let dir = scratch("missing");
    let file = dir.join("nope.arb");

    let output = arbor(&[file.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("error:"));
}

#[test]
fn test_parse_error_shows_source_line() {
    let dir = scratch("parse-error");
    let file = dir.join("bad.arb");
    fs::write(&file, "let x: int = 1 +;\n").unwrap();

    let output = arbor(&[file.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("expected expression, found ';'"));
    assert!(err.contains("bad.arb:1:17"));
    assert!(err.contains("let x: int = 1 +;"));
}

#[test]
fn test_analysis_error_exits_with_error() {
    let dir = scratch("fold-error");
    let file = dir.join("div.arb");
    fs::write(&file, "let q: int = 10 / 0;").unwrap();

    let output = arbor(&["-b", file.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("in binding 'q': division by zero"));
}

#[test]
fn test_block_comment_with_star_run() {
    let dir = scratch("comment");
    let file = dir.join("main.arb");
    fs::write(&file, "/** header **/\nlet x: int = 1; /* trailing **/\n").unwrap();

    let output = arbor(&["-b", file.to_str().unwrap()]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "x: int = 1\n");
}

#[test]
fn test_integer_literal_limits() {
    let dir = scratch("int-limits");
    let file = dir.join("main.arb");
    fs::write(&file, "let lo: int = -9223372036854775808;\n").unwrap();

    let output = arbor(&["-b", file.to_str().unwrap()]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "lo: int = -9223372036854775808\n");

    fs::write(&file, "let hi: int = 99999999999999999999;\n").unwrap();
    let output = arbor(&[file.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("integer literal out of range: 99999999999999999999"));
}
