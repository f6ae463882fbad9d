use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::ops::Range;

use crate::{Error, Value};

/// A maximal horizontal run of digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Number<V = u64> {
    /// The parsed value of the digits.
    pub value: V,
    /// The row the number is on.
    pub row: usize,
    /// The column of the first digit.
    pub column: usize,
    /// The number of digits, always at least one.
    pub len: usize,
}

impl<V> Number<V> {
    /// The columns occupied by the number.
    #[inline]
    pub fn columns(&self) -> Range<usize> {
        self.column..self.end()
    }

    /// The column one past the last digit.
    #[inline]
    pub fn end(&self) -> usize {
        self.column + self.len
    }

    /// The identity of the number, which is the position of its first digit.
    #[inline]
    pub fn id(&self) -> (usize, usize) {
        (self.row, self.column)
    }
}

impl<V> Number<V>
where
    V: Value,
{
    /// Parse the digits found at the given position.
    pub(crate) fn parse(row: usize, column: usize, digits: &[u8]) -> Result<Self, Error> {
        let ten = V::from(10);
        let mut value = V::zero();

        for &d in digits {
            debug_assert!(d.is_ascii_digit());

            value = value
                .checked_mul(&ten)
                .and_then(|value| value.checked_add(&V::from(d - b'0')))
                .ok_or(Error::Overflow { row, column })?;
        }

        Ok(Self {
            value,
            row,
            column,
            len: digits.len(),
        })
    }
}

/// Iterator over the numbers of a single row.
///
/// See [Schematic::numbers][crate::Schematic::numbers].
pub struct Scanner<'a, V = u64> {
    data: &'a [u8],
    row: usize,
    column: usize,
    _marker: PhantomData<V>,
}

impl<'a, V> Scanner<'a, V> {
    pub(crate) fn new(data: &'a [u8], row: usize) -> Self {
        Self {
            data,
            row,
            column: 0,
            _marker: PhantomData,
        }
    }
}

impl<V> Iterator for Scanner<'_, V>
where
    V: Value,
{
    type Item = Result<Number<V>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let data = self.data;

        let start = self.column + data.get(self.column..)?.iter().position(u8::is_ascii_digit)?;

        let end = match data.get(start..)?.iter().position(|d| !d.is_ascii_digit()) {
            Some(n) => start + n,
            None => data.len(),
        };

        // The character ending the run can't start a new one.
        self.column = end.saturating_add(1);
        Some(Number::parse(self.row, start, data.get(start..end)?))
    }
}

impl<V> FusedIterator for Scanner<'_, V> where V: Value {}

#[cfg(test)]
mod tests {
    use num::BigUint;

    use crate::{Error, Number, Scanner};

    fn scan(row: &[u8]) -> Vec<(u32, usize, usize)> {
        Scanner::<u32>::new(row, 0)
            .map(|n| n.map(|n| (n.value, n.column, n.len)))
            .collect::<Result<_, _>>()
            .unwrap()
    }

    #[test]
    fn test_runs() {
        assert_eq!(scan(b"467..114.."), [(467, 0, 3), (114, 5, 3)]);
        assert_eq!(scan(b"617*......"), [(617, 0, 3)]);
        assert_eq!(scan(b"......755"), [(755, 6, 3)]);
        assert_eq!(scan(b"1.2#3"), [(1, 0, 1), (2, 2, 1), (3, 4, 1)]);
        assert_eq!(scan(b"0042"), [(42, 0, 4)]);
        assert!(scan(b"..*..").is_empty());
        assert!(scan(b"").is_empty());
    }

    #[test]
    fn test_exhausted_stays_exhausted() {
        let mut it = Scanner::<u32>::new(b"12", 3);
        assert_eq!(it.next().unwrap().unwrap().id(), (3, 0));
        assert!(it.next().is_none());
        assert!(it.next().is_none());
    }

    #[test]
    fn test_overflow() {
        let mut it = Scanner::<u8>::new(b"255.256.7", 2);
        assert_eq!(it.next().unwrap().unwrap().value, 255);

        let error = it.next().unwrap().unwrap_err();
        assert!(matches!(error, Error::Overflow { row: 2, column: 4 }));

        // Scanning resumes after the failed run.
        assert_eq!(it.next().unwrap().unwrap().value, 7);
    }

    #[test]
    fn test_big_values() {
        let digits = b"123456789012345678901234567890";
        let number = Number::<BigUint>::parse(0, 0, digits).unwrap();
        assert_eq!(number.value.to_string(), "123456789012345678901234567890");
        assert_eq!(number.columns(), 0..30);
    }
}
