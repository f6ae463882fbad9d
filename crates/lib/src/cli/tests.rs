use core::time::Duration;
use std::path::Path;

use super::{check, Mode, Opts, Output, OutputKind, Report};

#[test]
fn test_parse_options() {
    let opts = Opts::parse_from(["--bench", "--count", "10", "--json", "grid.txt"]).unwrap();
    assert!(matches!(opts.mode, Mode::Bench));
    assert_eq!(opts.count, Some(10));
    assert!(opts.json);
    assert_eq!(opts.input_path("inputs/d03.txt"), Path::new("grid.txt"));

    let opts = Opts::parse_from(["--", "-weird.txt"]).unwrap();
    assert_eq!(opts.input_path("inputs/d03.txt"), Path::new("-weird.txt"));

    let opts = Opts::parse_from(Vec::<String>::new()).unwrap();
    assert!(matches!(opts.mode, Mode::Default));
    assert_eq!(opts.input_path("inputs/d03.txt"), Path::new("inputs/d03.txt"));
}

#[test]
fn test_parse_bad_options() {
    assert!(Opts::parse_from(["--bench", "--bench"]).is_err());
    assert!(Opts::parse_from(["--count"]).is_err());
    assert!(Opts::parse_from(["--count", "many"]).is_err());
    assert!(Opts::parse_from(["--frobnicate"]).is_err());
    assert!(Opts::parse_from(["a.txt", "b.txt"]).is_err());
}

#[test]
fn test_check() {
    assert!(check(&(4361u64, 467835u64), &(4361, 467835)).is_ok());

    let error = check(&(1u32, 2u32), &(1, 3)).unwrap_err();
    assert_eq!(error.to_string(), "(1, 2) (value) != (1, 3) (expected)");
}

#[test]
fn test_report_percentiles() {
    let samples = (1..=100).map(Duration::from_millis).collect::<Vec<_>>();
    let report = Report::from_sorted(&samples);

    assert_eq!(report.count, 100);
    assert_eq!(report.min, Duration::from_millis(1));
    assert_eq!(report.max, Duration::from_millis(100));
    assert_eq!(report.p50, Duration::from_millis(50));
    assert_eq!(report.p99, Duration::from_millis(99));
    assert_eq!(report.avg, Duration::from_micros(50_500));

    assert_eq!(Report::from_sorted(&[]).count, 0);
}

#[test]
fn test_answer_output() {
    let mut o = Output::new(Vec::new(), OutputKind::Normal);
    o.answer(&(4361u32, 467835u32)).unwrap();
    assert_eq!(o.into_inner(), b"4361\n467835\n");

    let mut o = Output::new(Vec::new(), OutputKind::Json);
    o.answer(&(4361u32, 467835u32)).unwrap();
    assert_eq!(o.into_inner(), b"{\"type\":\"answer\",\"data\":[4361,467835]}\n");
}

#[test]
fn test_error_context() {
    use crate::input::{ErrorKind, IStr, IStrError};

    let input = IStr::new(b"467..\n..*4\n");
    let path = Path::new("inputs/d03.txt");

    let error = IStrError::new(8..10, ErrorKind::BadLength(5, 4));
    let error = super::error_context(path, input, error);
    assert_eq!(error.to_string(), "inputs/d03.txt:2:3");

    let wrapped = anyhow::Error::from(IStrError::new(6..10, ErrorKind::NotUtf8)).context("outer");
    let error = super::error_context(path, input, wrapped);
    assert_eq!(error.to_string(), "inputs/d03.txt:2:1");

    let error = super::error_context(path, input, anyhow::anyhow!("no span"));
    assert_eq!(error.to_string(), "inputs/d03.txt");
}
