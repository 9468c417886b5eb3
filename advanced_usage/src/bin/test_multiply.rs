#[macro_use] extern crate test_helpers;
extern crate simple_lib;

use simple_lib::multiply;
use test_helpers::TestCase;

fn test_success() {
    check!(multiply(2, 3) == 6);
}

fn test_failure() {
    check!(multiply(2, 3) == 7);
}

fn main() {
    test_helpers::run("test_multiply", vec![
        TestCase::new("test_success", test_success),
        TestCase::new("test_failure", test_failure),
    ]);
}
