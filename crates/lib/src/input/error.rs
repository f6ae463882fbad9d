use core::fmt;
use core::ops::Range;

#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum ErrorKind {
    NotUtf8,
    ExpectedLine,
    UnexpectedEof,
    /// A length did not match what was expected, with the expected and
    /// actual lengths.
    BadLength(usize, usize),
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::NotUtf8 => write!(f, "not utf-8"),
            ErrorKind::ExpectedLine => write!(f, "expected line"),
            ErrorKind::UnexpectedEof => write!(f, "unexpected eof"),
            ErrorKind::BadLength(expected, actual) => {
                write!(f, "bad length; expected {expected}, but got {actual}")
            }
        }
    }
}

/// Error raised through string processing.
#[derive(Debug, Clone)]
pub struct IStrError {
    pub(crate) span: Range<usize>,
    pub(crate) kind: ErrorKind,
}

impl IStrError {
    /// Construct a new input error.
    #[inline]
    pub fn new(span: Range<usize>, kind: ErrorKind) -> Self {
        Self { span, kind }
    }

    /// The span of the input which caused the error.
    #[inline]
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    #[inline]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl fmt::Display for IStrError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (at {:?})", self.kind, self.span)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for IStrError {}
