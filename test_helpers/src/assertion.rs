use atty::{self, Stream};
use colored::*;
use std::process;

/// Checks a boolean predicate. When it does not hold, prints the source
/// location and the predicate text to stderr and exits the process with
/// status 1.
///
/// ```no_run
/// #[macro_use] extern crate test_helpers;
///
/// fn main() {
///     check!(1 + 2 == 3);
/// }
/// ```
#[macro_export]
macro_rules! check {
    ($expr:expr $(,)*) => {
        if !($expr) {
            $crate::assertion::fail(file!(), line!(), stringify!($expr));
        }
    };
}

/// The marker is only styled when `colorize` is set; `colored` still honours
/// `NO_COLOR`/`CLICOLOR` on top of that.
pub fn format_failure(file: &str, line: u32, expr: &str, colorize: bool) -> String {
    let marker = "assertion failed:";
    if colorize {
        format!("{}({}): {} {}", file, line, marker.red().bold(), expr)
    } else {
        format!("{}({}): {} {}", file, line, marker, expr)
    }
}

pub fn fail(file: &str, line: u32, expr: &str) -> ! {
    eprintln!("{}", format_failure(file, line, expr, atty::is(Stream::Stderr)));
    process::exit(1)
}

#[test]
fn test_format_failure() {
    let message = format_failure("tests/test_add.rs", 12, "add(1, 2) == 4", true);
    assert!(message.starts_with("tests/test_add.rs(12): "));
    assert!(message.contains("assertion failed:"));
    assert!(message.ends_with(" add(1, 2) == 4"));
    assert!(!message.contains('\n'));
}

#[test]
fn test_format_failure_plain() {
    assert_eq!(
        format_failure("src/bin/test_multiply.rs", 13, "multiply(2, 3) == 7", false),
        "src/bin/test_multiply.rs(13): assertion failed: multiply(2, 3) == 7");
}

#[test]
fn test_check_passes_through() {
    let mut evaluations = 0;
    check!({ evaluations += 1; evaluations == 1 });
    check!(2 * 3 == 6,);
    assert_eq!(evaluations, 1);
}
