use std::ffi::OsStr;
use super::test_case::TestCase;

/// Runs `cases` in declaration order, or just the one called `selected`.
/// An unknown name, including one that is not valid UTF-8, runs nothing.
/// Returns how many cases were executed.
pub fn dispatch(cases: &[TestCase], selected: Option<&OsStr>) -> usize {
    match selected {
        None => {
            for case in cases {
                debug!("running `{}`", case.name());
                case.execute();
            }
            cases.len()
        },
        Some(name) => match cases.iter().find(|case| name.to_str() == Some(case.name())) {
            Some(case) => {
                debug!("running `{}`", case.name());
                case.execute();
                1
            },
            None => {
                info!("no case named `{}`, nothing to run", name.to_string_lossy());
                0
            },
        },
    }
}

#[cfg(test)]
thread_local!(static TRACE: ::std::cell::RefCell<Vec<&'static str>> = ::std::cell::RefCell::new(Vec::new()));

#[cfg(test)]
fn first() {
    TRACE.with(|trace| trace.borrow_mut().push("first"));
}

#[cfg(test)]
fn second() {
    TRACE.with(|trace| trace.borrow_mut().push("second"));
}

#[cfg(test)]
fn registry() -> Vec<TestCase> {
    vec![
        TestCase::new("first", first),
        TestCase::new("second", second),
    ]
}

#[cfg(test)]
fn take_trace() -> Vec<&'static str> {
    TRACE.with(|trace| trace.borrow_mut().drain(..).collect())
}

#[test]
fn test_dispatch_all_in_declaration_order() {
    assert_eq!(dispatch(&registry(), None), 2);
    assert_eq!(take_trace(), vec!["first", "second"]);
}

#[test]
fn test_dispatch_named_case_only() {
    assert_eq!(dispatch(&registry(), Some(OsStr::new("second"))), 1);
    assert_eq!(take_trace(), vec!["second"]);
}

#[test]
fn test_dispatch_unknown_case_runs_nothing() {
    assert_eq!(dispatch(&registry(), Some(OsStr::new("does_not_exist"))), 0);
    assert_eq!(dispatch(&registry(), Some(OsStr::new("FIRST"))), 0);
    assert!(take_trace().is_empty());
}

#[test]
fn test_dispatch_empty_registry() {
    assert_eq!(dispatch(&[], None), 0);
    assert_eq!(dispatch(&[], Some(OsStr::new("first"))), 0);
}

#[test]
fn test_dispatch_odd_names_run_nothing() {
    assert_eq!(dispatch(&registry(), Some(OsStr::new(""))), 0);
    assert_eq!(dispatch(&registry(), Some(OsStr::new("-x"))), 0);
    assert!(take_trace().is_empty());
}

#[cfg(unix)]
#[test]
fn test_dispatch_non_utf8_name_runs_nothing() {
    use std::os::unix::ffi::OsStrExt;

    assert_eq!(dispatch(&registry(), Some(OsStr::from_bytes(b"first\xff"))), 0);
    assert!(take_trace().is_empty());
}
