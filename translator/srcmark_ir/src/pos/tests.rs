use super::*;
use pretty_assertions::assert_eq;

#[test]
fn ordering_is_line_major() {
    assert!(Pos::new(1, 80) < Pos::new(2, 1));
    assert!(Pos::new(3, 4) < Pos::new(3, 5));
}

#[test]
fn at_column_one_keeps_line() {
    let p = Pos::new(17, 42).at_column_one();
    assert_eq!(p, Pos::new(17, 1));
}

#[test]
fn display_is_line_colon_column() {
    assert_eq!(Pos::new(3, 9).to_string(), "3:9");
}
