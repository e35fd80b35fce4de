use super::*;

#[test]
fn empty_source() {
    let buf = SourceBuffer::new("");
    assert!(buf.is_empty());
    assert_eq!(buf.len(), 0);
    assert_eq!(buf.get(0), None);
    assert!(buf.cursor().is_eof());
}

#[test]
fn offsets_count_chars_not_bytes() {
    // '＝' is three UTF-8 bytes but one char.
    let buf = SourceBuffer::new("a＝b");
    assert_eq!(buf.len(), 3);
    assert_eq!(buf.get(1), Some('＝'));
    assert_eq!(buf.get(2), Some('b'));
    assert_eq!(buf.get(3), None);
}

#[test]
fn slice_clamps_to_buffer() {
    let buf = SourceBuffer::new("node 1");
    assert_eq!(buf.slice(0, 4), "node");
    assert_eq!(buf.slice(5, 100), "1");
    assert_eq!(buf.slice(10, 20), "");
}

#[test]
fn cursor_at_starts_at_offset() {
    let buf = SourceBuffer::new("abc");
    let cursor = buf.cursor_at(2);
    assert_eq!(cursor.pos(), 2);
    assert_eq!(cursor.current(), Some('c'));
}

#[test]
fn cursor_at_clamps_past_end() {
    let buf = SourceBuffer::new("abc");
    let cursor = buf.cursor_at(99);
    assert_eq!(cursor.pos(), 3);
    assert!(cursor.is_eof());
}

#[test]
fn from_str() {
    let buf: SourceBuffer = "x".into();
    assert_eq!(buf.len(), 1);
    assert_eq!(buf.get(0), Some('x'));
}
