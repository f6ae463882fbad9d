use core::ops::Range;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{anyhow, Context};

use crate::cli::error::LineCol;
use crate::input::{IStr, NL};

/// Get the line and column of the start of `span` inside of `data`.
pub(crate) fn pos_from(data: &[u8], span: Range<usize>) -> LineCol {
    let Some(d) = data.get(..span.start) else {
        return LineCol::EMPTY;
    };

    let line = memchr::memchr_iter(NL, d).count();

    let start = match memchr::memrchr(NL, d) {
        Some(n) => span.start - n - 1,
        None => span.start,
    };

    LineCol::new(line, start)
}

/// Load the input file at `path`.
///
/// The file is read once and its storage is leaked, since it lives for the
/// remainder of the process *anyway*. That lets every [IStr] carved out of it
/// be `Copy`.
#[inline]
pub fn input(path: &Path) -> anyhow::Result<IStr> {
    return inner(path).with_context(|| anyhow!("{}", path.display()));

    #[inline]
    fn inner(path: &Path) -> anyhow::Result<IStr> {
        let mut file = File::open(path)?;
        let mut buf = Vec::with_capacity(4096);
        file.read_to_end(&mut buf)?;
        Ok(IStr::new(Box::leak(buf.into_boxed_slice())))
    }
}
