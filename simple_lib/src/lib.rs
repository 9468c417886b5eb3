//! Arithmetic exercised by the `advanced_usage` test binaries.

pub fn add(x: i32, y: i32) -> i32 {
    x + y
}

pub fn multiply(x: i32, y: i32) -> i32 {
    x * y
}

#[test]
fn test_add() {
    assert_eq!(add(1, 2), 3);
    assert_eq!(add(-4, 4), 0);
    assert_eq!(add(i32::max_value() - 1, 1), i32::max_value());
    assert_eq!(add(i32::min_value(), 0), i32::min_value());
    assert_eq!(add(i32::min_value(), i32::max_value()), -1);
}

#[test]
fn test_multiply() {
    assert_eq!(multiply(2, 3), 6);
    assert_eq!(multiply(-2, 3), -6);
    assert_eq!(multiply(7, 0), 0);
    assert_eq!(multiply(i32::min_value(), 1), i32::min_value());
    assert_eq!(multiply(-1, i32::max_value()), -i32::max_value());
    assert_eq!(multiply(i32::max_value(), 1), i32::max_value());
    assert_eq!(multiply(-46341, 46340), -2147441940);
}
