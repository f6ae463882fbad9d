use bstr::ByteSlice;
use lib::grid::slice::{Rows, SliceGrid};
use lib::grid::{Grid, GridExt};
use lib::input::{ErrorKind, IStr, IStrError};

use crate::{Alphabet, Cell, Error, Number, Scanner, Value};


/// An immutable, rectangular engine schematic.
#[derive(Debug, Clone)]
pub struct Schematic {
    /// Rows stored back to back.
    data: Vec<u8>,
    rows: usize,
    columns: usize,
    alphabet: Alphabet,
}

impl Schematic {
    /// Build a schematic out of equal-length rows.
    ///
    /// # Examples
    ///
    /// ```
    /// use schematic::{Alphabet, Error, Schematic};
    ///
    /// let schematic = Schematic::from_rows(["467.", "..*."], Alphabet::default())?;
    /// assert_eq!(schematic.dimensions(), (2, 4));
    ///
    /// let error = Schematic::from_rows(["467.", "..*"], Alphabet::default()).unwrap_err();
    /// assert!(matches!(error, Error::Ragged { row: 1, expected: 4, actual: 3 }));
    /// # Ok::<_, Error>(())
    /// ```
    pub fn from_rows<I>(rows: I, alphabet: Alphabet) -> Result<Self, Error>
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        let mut builder = Builder::default();

        for (row, line) in rows.into_iter().enumerate() {
            let line = line.as_ref();

            if let Err(expected) = builder.push(line) {
                return Err(Error::Ragged {
                    row,
                    expected,
                    actual: line.len(),
                });
            }
        }

        builder.build(alphabet)
    }

    /// Parse a schematic from input.
    ///
    /// Lines are trimmed and blank lines are skipped. A line whose length
    /// differs from the first one is reported with its location in the input.
    pub fn parse(mut input: IStr, alphabet: Alphabet) -> Result<Self, Error> {
        let mut builder = Builder::default();

        while let Some(line) = input.try_line::<IStr>()? {
            let row = line.as_data().trim();

            if row.is_empty() {
                continue;
            }

            if let Err(expected) = builder.push(row) {
                let kind = ErrorKind::BadLength(expected, row.len());
                return Err(IStrError::new(line.span(), kind).into());
            }
        }

        builder.build(alphabet)
    }

    /// The alphabet used to classify cells.
    #[inline]
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// The number of rows and columns in the schematic.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    /// Get the character at the given row and column.
    #[inline]
    pub fn char_at(&self, row: usize, column: usize) -> Result<u8, Error> {
        match self.try_get(row, column) {
            Some(&c) => Ok(c),
            None => Err(Error::OutOfRange { row, column }),
        }
    }

    /// Get the classified cell at the given row and column.
    #[inline]
    pub fn cell_at(&self, row: usize, column: usize) -> Result<Cell, Error> {
        Ok(self.alphabet.classify(self.char_at(row, column)?))
    }

    /// Scan the numbers in the given row from left to right.
    ///
    /// A row outside of the schematic has no numbers.
    ///
    /// # Examples
    ///
    /// ```
    /// use schematic::{Alphabet, Schematic};
    ///
    /// let schematic = Schematic::from_rows(["467..114.."], Alphabet::default())?;
    ///
    /// let numbers = schematic
    ///     .numbers::<u32>(0)
    ///     .map(|n| n.map(|n| (n.value, n.column, n.len)))
    ///     .collect::<Result<Vec<_>, _>>()?;
    ///
    /// assert_eq!(numbers, [(467, 0, 3), (114, 5, 3)]);
    /// # Ok::<_, schematic::Error>(())
    /// ```
    #[inline]
    pub fn numbers<V>(&self, row: usize) -> Scanner<'_, V>
    where
        V: Value,
    {
        Scanner::new(self.row(row).unwrap_or_default(), row)
    }

    /// Scan the numbers in every row, top to bottom.
    pub fn all_numbers<'a, V>(&'a self) -> impl Iterator<Item = Result<Number<V>, Error>> + 'a
    where
        V: 'a + Value,
    {
        (0..self.rows).flat_map(move |row| self.numbers(row))
    }

    #[inline]
    fn as_grid(&self) -> SliceGrid<'_, u8> {
        self.data.as_grid(self.columns)
    }
}

impl Grid<u8> for Schematic {
    type Row<'a> = &'a [u8] where Self: 'a;
    type Rows<'a> = Rows<'a, u8> where Self: 'a;

    #[inline]
    fn rows(&self) -> Self::Rows<'_> {
        self.as_grid().into_rows()
    }

    #[inline]
    fn row(&self, row: usize) -> Option<Self::Row<'_>> {
        self.as_grid().into_row(row)
    }

    #[inline]
    fn rows_len(&self) -> usize {
        self.rows
    }

    #[inline]
    fn columns_len(&self) -> usize {
        self.columns
    }
}

/// Accumulates rows while checking that they are all the same length.
#[derive(Default)]
struct Builder {
    data: Vec<u8>,
    rows: usize,
    columns: Option<usize>,
}

impl Builder {
    /// Push a row, or return the expected length if it doesn't match.
    fn push(&mut self, row: &[u8]) -> Result<(), usize> {
        let expected = *self.columns.get_or_insert(row.len());

        if row.len() != expected {
            return Err(expected);
        }

        self.data.extend_from_slice(row);
        self.rows += 1;
        Ok(())
    }

    fn build(self, alphabet: Alphabet) -> Result<Schematic, Error> {
        let columns = self.columns.unwrap_or_default();

        if self.rows == 0 || columns == 0 {
            return Err(Error::Empty);
        }

        log::trace!("schematic of {} rows and {columns} columns", self.rows);

        Ok(Schematic {
            data: self.data,
            rows: self.rows,
            columns,
            alphabet,
        })
    }
}
