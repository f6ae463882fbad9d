use super::{ErrorKind, IStr};

#[test]
fn test_lines_track_index() {
    let mut input = IStr::new(b"ab\n\ncde\n");

    let a = input.try_line::<IStr>().unwrap().unwrap();
    assert_eq!(a.as_data(), b"ab");
    assert_eq!(a.span(), 0..2);

    let b = input.try_line::<IStr>().unwrap().unwrap();
    assert!(b.is_empty());
    assert_eq!(b.index(), 3);

    let c = input.try_line::<IStr>().unwrap().unwrap();
    assert_eq!(c.as_data(), b"cde");
    assert_eq!(c.span(), 4..7);

    assert!(input.try_line::<IStr>().unwrap().is_none());
    assert_eq!(input.index(), 8);
}

#[test]
fn test_line_errors_on_eof() {
    let mut input = IStr::new(b"");
    let error = input.line::<&[u8]>().unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::ExpectedLine));
}

#[test]
fn test_not_utf8() {
    let mut input = IStr::new(b"ok\n\xff\xfe\n");
    assert_eq!(input.line::<&str>().unwrap(), "ok");

    let error = input.line::<&str>().unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::NotUtf8));
    assert_eq!(error.span(), 3..5);
}
