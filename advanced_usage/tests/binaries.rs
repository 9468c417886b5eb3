use std::ffi::OsStr;
use std::process::{Command, Output};

fn run<S: AsRef<OsStr>>(bin: &str, args: &[S]) -> Output {
    Command::new(bin)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

const TEST_ADD: &str = env!("CARGO_BIN_EXE_test_add");
const TEST_MULTIPLY: &str = env!("CARGO_BIN_EXE_test_multiply");

#[test]
fn test_add_runs_all_cases_and_fails() {
    let output = run::<&str>(TEST_ADD, &[]);
    assert_eq!(output.status.code(), Some(1));
    let diagnostic = stderr(&output);
    assert!(diagnostic.contains("test_add.rs("));
    assert!(diagnostic.contains("assertion failed:"));
    assert!(diagnostic.contains("add(1, 2) == 4"));
    assert_eq!(diagnostic.lines().count(), 1);
    assert!(!diagnostic.contains('\x1b'));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_add_success_case() {
    let output = run(TEST_ADD, &["test_success"]);
    assert!(output.status.success());
    assert!(output.stderr.is_empty());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_add_failure_case() {
    let output = run(TEST_ADD, &["test_failure"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("add(1, 2) == 4"));
}

#[test]
fn test_add_ignores_extra_arguments() {
    let output = run(TEST_ADD, &["test_success", "test_failure"]);
    assert!(output.status.success());
    assert!(output.stderr.is_empty());
}

#[test]
fn test_multiply_runs_all_cases_and_fails() {
    let output = run::<&str>(TEST_MULTIPLY, &[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("multiply(2, 3) == 7"));
}

#[test]
fn test_multiply_success_case() {
    let output = run(TEST_MULTIPLY, &["test_success"]);
    assert!(output.status.success());
    assert!(output.stderr.is_empty());
}

#[test]
fn test_multiply_failure_case() {
    let output = run(TEST_MULTIPLY, &["test_failure"]);
    assert_eq!(output.status.code(), Some(1));
    let diagnostic = stderr(&output);
    assert!(diagnostic.contains("test_multiply.rs("));
    assert!(diagnostic.contains("multiply(2, 3) == 7"));
}

#[test]
fn test_multiply_unknown_case_runs_nothing() {
    let output = run(TEST_MULTIPLY, &["does_not_exist"]);
    assert!(output.status.success());
    assert!(output.stderr.is_empty());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_case_names_are_case_sensitive() {
    let output = run(TEST_ADD, &["TEST_FAILURE"]);
    assert!(output.status.success());
    assert!(output.stderr.is_empty());
}

fn assert_ran_nothing(output: &Output) {
    assert_eq!(output.status.code(), Some(0));
    assert!(output.stderr.is_empty());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_empty_case_name_runs_nothing() {
    assert_ran_nothing(&run(TEST_ADD, &[""]));
}

#[test]
fn test_hyphenated_case_names_run_nothing() {
    assert_ran_nothing(&run(TEST_ADD, &["-x"]));
    assert_ran_nothing(&run(TEST_ADD, &["--foo"]));
    assert_ran_nothing(&run(TEST_MULTIPLY, &["--foo", "test_failure"]));
}

#[cfg(unix)]
#[test]
fn test_non_utf8_case_name_runs_nothing() {
    use std::os::unix::ffi::OsStrExt;

    assert_ran_nothing(&run(TEST_MULTIPLY, &[OsStr::from_bytes(b"\xff")]));
    assert_ran_nothing(&run(TEST_ADD, &[OsStr::from_bytes(b"test_failure\xff")]));
}

#[test]
fn test_help_goes_to_stdout() {
    let output = run(TEST_ADD, &["--help"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(output.stderr.is_empty());
    let help = String::from_utf8_lossy(&output.stdout);
    assert!(help.contains("test_add"));
    assert!(help.contains("CASE"));
}

#[test]
fn test_version_goes_to_stdout() {
    let output = run(TEST_MULTIPLY, &["--version"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(output.stderr.is_empty());
    assert!(String::from_utf8_lossy(&output.stdout).contains("0.1.0"));
}
