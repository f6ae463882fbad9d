use core::fmt;
use core::ops::Range;
use std::path::{Path, PathBuf};

use crate::input::{IStr, IStrError};

/// Associate an error raised while processing `data` with the location in
/// the input file at `path` that caused it.
///
/// The location is taken from the first [IStrError] found in the chain of
/// errors, so it survives being wrapped by other error types.
pub fn error_context<E>(path: &Path, data: IStr, error: E) -> anyhow::Error
where
    anyhow::Error: From<E>,
{
    let error = anyhow::Error::from(error);

    let pos = find_span(&error).map(|span| crate::env::pos_from(data.as_data(), span));

    error.context(ErrorContext {
        path: path.to_owned(),
        pos,
    })
}

/// A line and column combination.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCol {
    line: usize,
    column: usize,
}

impl LineCol {
    pub(crate) const EMPTY: Self = Self::new(0, 0);

    pub(crate) const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

fn find_span(error: &anyhow::Error) -> Option<Range<usize>> {
    error
        .chain()
        .find_map(|e| e.downcast_ref::<IStrError>())
        .map(IStrError::span)
}

#[derive(Debug)]
struct ErrorContext {
    path: PathBuf,
    pos: Option<LineCol>,
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = self.path.display();

        match &self.pos {
            Some(pos) => write!(f, "{path}:{pos}"),
            None => write!(f, "{path}"),
        }
    }
}
