//! Shared helpers for puzzle solutions: input reading, grid views, and the
//! command line harness which runs, checks, and benches a solution.

pub mod cli;
pub mod env;
pub mod grid;
pub mod input;
mod macros;

pub mod prelude {
    //! Helper prelude with useful imports.
    pub use crate::grid::{Grid, GridExt, GridSliceRef};
    pub use crate::input::{FromInput, IStr};
    pub use anyhow::{anyhow, bail, ensure, Context, Result};
    pub use bstr::{BStr, ByteSlice};
}
