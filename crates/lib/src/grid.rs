pub mod slice;

mod sealed {
    pub trait Sealed {}
    impl<T> Sealed for [T] {}
}

use self::sealed::Sealed;

pub trait GridExt<T>: Sealed {
    /// Return value as an immutable grid.
    type Grid<'this>: Grid<T>
    where
        Self: 'this,
        T: 'this;

    /// Convert type into grid with a stride of `0`.
    ///
    /// See [GridExt::as_grid_with_stride].
    #[inline]
    fn as_grid(&self, columns: usize) -> Self::Grid<'_> {
        self.as_grid_with_stride(columns, 0)
    }

    /// Convert type into a grid with the given topology.
    ///
    /// The `columns` is the width of a row while `stride` is the number of
    /// elements skipped between each row, like the newline separating the
    /// rows of raw input.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::prelude::*;
    ///
    /// let data: &[u8] = b"12.\n.*4\n";
    /// let grid = data.as_grid_with_stride(3, 1);
    ///
    /// assert_eq!(grid.rows_len(), 2);
    /// assert_eq!(grid.columns_len(), 3);
    /// assert_eq!(grid.try_get(1, 1), Some(&b'*'));
    /// assert_eq!(grid.try_get(0, 3), None);
    /// ```
    fn as_grid_with_stride(&self, columns: usize, stride: usize) -> Self::Grid<'_>;
}

pub trait Grid<T> {
    /// A row of the grid.
    type Row<'a>: GridSliceRef<'a, T> + AsRef<[T]> + IntoIterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    /// Construct an iterator over rows in the grid.
    type Rows<'a>: Iterator<Item = Self::Row<'a>>
    where
        Self: 'a,
        T: 'a;

    /// Iterate over rows in the grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::prelude::*;
    ///
    /// let values = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];
    /// let grid = values.as_grid(4);
    ///
    /// assert!(grid.rows().flatten().copied().eq([1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]));
    /// ```
    fn rows(&self) -> Self::Rows<'_>;

    /// Access the specified row in the grid.
    fn row(&self, row: usize) -> Option<Self::Row<'_>>;

    /// Get number of rows in the grid.
    fn rows_len(&self) -> usize;

    /// Get number of columns in the grid.
    fn columns_len(&self) -> usize;

    /// Get the element at the given row and column.
    #[inline]
    #[track_caller]
    fn get(&self, row: usize, column: usize) -> &T {
        match self.row(row).and_then(|row| row.into_ref(column)) {
            Some(value) => value,
            None => panic!("missing row `{row}`, column `{column}`"),
        }
    }

    /// Get the element at the given row and column.
    #[inline]
    fn try_get(&self, row: usize, column: usize) -> Option<&T> {
        self.row(row)?.into_ref(column)
    }
}

impl<G, T> Grid<T> for &G
where
    G: Grid<T>,
{
    type Row<'a> = G::Row<'a>
    where
        Self: 'a,
        T: 'a;

    type Rows<'a> = G::Rows<'a>
    where
        Self: 'a,
        T: 'a;

    #[inline]
    fn rows(&self) -> Self::Rows<'_> {
        (**self).rows()
    }

    #[inline]
    fn row(&self, row: usize) -> Option<Self::Row<'_>> {
        (**self).row(row)
    }

    #[inline]
    fn rows_len(&self) -> usize {
        (**self).rows_len()
    }

    #[inline]
    fn columns_len(&self) -> usize {
        (**self).columns_len()
    }
}

/// The slice into a grid.
pub trait GridSliceRef<'a, T: 'a> {
    /// Iterator over the grid slice.
    type Iter<'this>: Iterator<Item = &'this T>
    where
        Self: 'this,
        T: 'this;

    /// The length of a grid slice.
    fn len(&self) -> usize;

    /// Test if the grid slice is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Coerce the slice into a reference extending the lifetime that is part of
    /// the trait.
    fn into_ref(self, index: usize) -> Option<&'a T>;

    /// Access the element at the given index.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::prelude::*;
    ///
    /// let data = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];
    /// let grid = data.as_grid(4);
    ///
    /// let row = grid.row(2).unwrap();
    /// assert_eq!(row.get(1), Some(&10));
    /// assert_eq!(row.get(4), None);
    /// ```
    fn get(&self, index: usize) -> Option<&T>;

    /// Construct an iterator over the slice.
    fn iter(&self) -> Self::Iter<'_>;
}
