#[macro_use] extern crate test_helpers;
extern crate simple_lib;

use simple_lib::add;
use test_helpers::TestCase;

fn test_success() {
    check!(add(1, 2) == 3);
}

fn test_failure() {
    check!(add(1, 2) == 4);
}

fn main() {
    test_helpers::run("test_add", vec![
        TestCase::new("test_success", test_success),
        TestCase::new("test_failure", test_failure),
    ]);
}
