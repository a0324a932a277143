use super::*;

#[test]
fn starts_at_line_one_column_one() {
    let cursor = Cursor::new("abc");
    assert_eq!(cursor.pos(), Pos::new(1, 1));
    assert_eq!(cursor.current(), Some('a'));
    assert_eq!(cursor.peek(), Some('b'));
}

#[test]
fn newline_resets_column() {
    let mut cursor = Cursor::new("a\nbc");
    cursor.bump();
    assert_eq!(cursor.pos(), Pos::new(1, 2));
    cursor.bump();
    assert_eq!(cursor.pos(), Pos::new(2, 1));
    cursor.bump();
    assert_eq!(cursor.pos(), Pos::new(2, 2));
}

#[test]
fn bump_at_eof_returns_none() {
    let mut cursor = Cursor::new("x");
    assert_eq!(cursor.bump(), Some('x'));
    assert!(cursor.is_eof());
    assert_eq!(cursor.bump(), None);
    assert_eq!(cursor.current(), None);
}

#[test]
fn eat_while_and_slice() {
    let mut cursor = Cursor::new("hello world");
    let start = cursor.offset();
    cursor.eat_while(|c| c.is_ascii_alphabetic());
    assert_eq!(cursor.slice_from(start), "hello");
    assert_eq!(cursor.current(), Some(' '));
}

#[test]
fn multibyte_characters_count_as_one_column() {
    let mut cursor = Cursor::new("é1");
    cursor.bump();
    assert_eq!(cursor.pos(), Pos::new(1, 2));
    assert_eq!(cursor.current(), Some('1'));
}

#[test]
fn copy_snapshot_does_not_move_original() {
    let cursor = Cursor::new("else if");
    let mut probe = cursor;
    probe.eat_while(|c| c != ' ');
    assert_eq!(cursor.offset(), 0);
    assert!(probe.starts_with(" if"));
}
