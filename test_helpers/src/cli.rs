use std::env;
use std::ffi::{OsStr, OsString};

pub fn selected_case(bin_name: &str) -> Option<OsString> {
    selected_case_from(bin_name, env::args_os())
}

/// Only the first `CASE` value is honoured; anything after it is ignored.
/// Values starting with a hyphen are case names too, except for the
/// `-h`/`--help` and `-V`/`--version` flags clap answers itself.
pub fn selected_case_from<I, T>(bin_name: &str, args: I) -> Option<OsString>
    where I: IntoIterator<Item = T>,
          T: Into<OsString> + Clone
{
    let matches = clap_app!(case_runner =>
        (version: crate_version!())
        (about: "Runs every registered case, or only the named one")
        (@setting AllowLeadingHyphen)
        (@arg CASE: ... "Name of the case to run")
    ).bin_name(bin_name).get_matches_from(args);

    matches.value_of_os("CASE").map(OsStr::to_os_string)
}

#[test]
fn test_no_argument_selects_nothing() {
    assert_eq!(selected_case_from("test_add", vec!["test_add"]), None);
}

#[test]
fn test_first_argument_is_selected() {
    assert_eq!(
        selected_case_from("test_add", vec!["test_add", "test_success"]),
        Some(OsString::from("test_success")));
}

#[test]
fn test_extra_arguments_are_ignored() {
    assert_eq!(
        selected_case_from("test_multiply", vec!["test_multiply", "test_failure", "test_success", "x"]),
        Some(OsString::from("test_failure")));
}

#[test]
fn test_hyphenated_names_are_selected() {
    assert_eq!(
        selected_case_from("test_add", vec!["test_add", "-x"]),
        Some(OsString::from("-x")));
    assert_eq!(
        selected_case_from("test_add", vec!["test_add", "--foo"]),
        Some(OsString::from("--foo")));
}

#[test]
fn test_empty_name_is_selected() {
    assert_eq!(
        selected_case_from("test_add", vec!["test_add", ""]),
        Some(OsString::new()));
}

#[cfg(unix)]
#[test]
fn test_non_utf8_name_is_selected() {
    use std::os::unix::ffi::OsStringExt;

    let name = OsString::from_vec(vec![0xff, 0xfe]);
    assert_eq!(
        selected_case_from("test_add", vec![OsString::from("test_add"), name.clone()]),
        Some(name));
}
