use core::ops::Range;
use core::slice;

use crate::grid::{Grid, GridExt, GridSliceRef};

#[derive(Debug, Clone, Copy)]
struct Dims {
    rows: usize,
    columns: usize,
    stride: usize,
}

impl Dims {
    /// Range of the given row inside of the backing slice.
    #[inline]
    fn row(&self, row: usize) -> Option<Range<usize>> {
        if row >= self.rows {
            return None;
        }

        let start = row.checked_mul(self.stride)?;
        Some(start..start.checked_add(self.columns)?)
    }
}

impl<'a, T> GridSliceRef<'a, T> for &'a [T] {
    type Iter<'this> = slice::Iter<'this, T> where Self: 'this, T: 'this;

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn into_ref(self, index: usize) -> Option<&'a T> {
        <[T]>::get(self, index)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        <[T]>::iter(self)
    }
}

/// Iterator over rows in a slice.
pub struct Rows<'a, T> {
    data: &'a [T],
    range: Range<usize>,
    dims: Dims,
}

impl<'a, T> Iterator for Rows<'a, T> {
    type Item = &'a [T];

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let row = self.range.next()?;
        self.data.get(self.dims.row(row)?)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

/// A read-only grid backed by a slice.
pub struct SliceGrid<'a, T> {
    data: &'a [T],
    dims: Dims,
}

impl<'a, T> SliceGrid<'a, T> {
    /// Iterate over rows, borrowing from the underlying slice rather than
    /// the grid.
    #[inline]
    pub fn into_rows(self) -> Rows<'a, T> {
        Rows {
            data: self.data,
            range: 0..self.dims.rows,
            dims: self.dims,
        }
    }

    /// Access a row, borrowing from the underlying slice rather than the
    /// grid.
    #[inline]
    pub fn into_row(self, row: usize) -> Option<&'a [T]> {
        self.data.get(self.dims.row(row)?)
    }
}

impl<T> Clone for SliceGrid<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceGrid<'_, T> {}

impl<T> Grid<T> for SliceGrid<'_, T> {
    type Row<'this> = &'this [T] where Self: 'this, T: 'this;
    type Rows<'this> = Rows<'this, T> where Self: 'this, T: 'this;

    #[inline]
    fn rows(&self) -> Self::Rows<'_> {
        self.into_rows()
    }

    #[inline]
    fn row(&self, row: usize) -> Option<Self::Row<'_>> {
        self.into_row(row)
    }

    #[inline]
    fn rows_len(&self) -> usize {
        self.dims.rows
    }

    #[inline]
    fn columns_len(&self) -> usize {
        self.dims.columns
    }
}

impl<T> GridExt<T> for [T] {
    type Grid<'this> = SliceGrid<'this, T> where T: 'this;

    /// Treat the slice as a grid.
    ///
    /// Trailing elements which do not make up a full row are ignored, with
    /// the exception of a final row which is only missing its stride.
    #[inline]
    fn as_grid_with_stride(&self, columns: usize, stride: usize) -> SliceGrid<'_, T> {
        assert!(columns != 0, "columns must be non-zero");
        let stride = columns.saturating_add(stride);

        let mut rows = self.len() / stride;

        if self.len() % stride >= columns {
            rows += 1;
        }

        SliceGrid {
            data: self,
            dims: Dims {
                rows,
                columns,
                stride,
            },
        }
    }
}
