use arrayvec::ArrayVec;
use lib::grid::Grid;

use crate::{Error, Number, Schematic, Value};

/// The distinct numbers touching a cell, in the order they were found.
///
/// A cell has eight neighbours, so it can't touch more numbers than that.
pub type Neighbours<V = u64> = ArrayVec<Number<V>, 8>;

/// Offsets of the neighbours of a cell, row by row.
const OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Test if a number has a symbol in the ring of cells surrounding it.
///
/// Cells outside of the schematic are skipped.
///
/// # Examples
///
/// ```
/// use schematic::{Alphabet, Schematic};
///
/// let schematic = Schematic::from_rows(["467..114..", "...*......"], Alphabet::default())?;
///
/// let mut numbers = schematic.numbers::<u32>(0);
/// let a = numbers.next().unwrap()?;
/// let b = numbers.next().unwrap()?;
///
/// assert!(schematic::is_adjacent_to_symbol(&schematic, &a));
/// assert!(!schematic::is_adjacent_to_symbol(&schematic, &b));
/// # Ok::<_, schematic::Error>(())
/// ```
pub fn is_adjacent_to_symbol<V>(schematic: &Schematic, number: &Number<V>) -> bool {
    let alphabet = schematic.alphabet();

    let rows = number.row.saturating_sub(1)..number.row.saturating_add(2);
    let columns =
        number.column.saturating_sub(1)..number.end().saturating_add(1).min(schematic.columns_len());

    for row in rows {
        let Some(data) = schematic.row(row) else {
            continue;
        };

        let found = if row == number.row {
            let left = number.column.checked_sub(1);
            let right = Some(number.end());

            [left, right]
                .into_iter()
                .flatten()
                .filter_map(|column| data.get(column))
                .any(|&c| alphabet.is_symbol(c))
        } else {
            data.get(columns.clone())
                .unwrap_or_default()
                .iter()
                .any(|&c| alphabet.is_symbol(c))
        };

        if found {
            return true;
        }
    }

    false
}

/// Find the number covering the given cell.
///
/// Returns `Ok(None)` if the cell is out of range or not a digit.
pub fn number_at<V>(schematic: &Schematic, row: usize, column: usize) -> Result<Option<Number<V>>, Error>
where
    V: Value,
{
    let Some(data) = schematic.row(row) else {
        return Ok(None);
    };

    if !data.get(column).is_some_and(u8::is_ascii_digit) {
        return Ok(None);
    }

    let (before, after) = data.split_at(column);

    let start = match before.iter().rposition(|d| !d.is_ascii_digit()) {
        Some(n) => n + 1,
        None => 0,
    };

    let end = match after.iter().position(|d| !d.is_ascii_digit()) {
        Some(n) => column + n,
        None => data.len(),
    };

    let Some(digits) = data.get(start..end) else {
        return Ok(None);
    };

    Ok(Some(Number::parse(row, start, digits)?))
}

/// Collect the distinct numbers touching the given cell.
///
/// A number touching the cell through more than one of its digits is only
/// collected once, since numbers are identified by the position of their
/// first digit.
///
/// # Examples
///
/// ```
/// use schematic::{Alphabet, Schematic};
///
/// let schematic = Schematic::from_rows(["123", ".*.", "..4"], Alphabet::default())?;
///
/// let numbers = schematic::collect_adjacent_numbers::<u32>(&schematic, 1, 1)?;
/// let values = numbers.iter().map(|n| n.value).collect::<Vec<_>>();
/// assert_eq!(values, [123, 4]);
/// # Ok::<_, schematic::Error>(())
/// ```
pub fn collect_adjacent_numbers<V>(
    schematic: &Schematic,
    row: usize,
    column: usize,
) -> Result<Neighbours<V>, Error>
where
    V: Value,
{
    let mut numbers = Neighbours::new();

    for (dr, dc) in OFFSETS {
        let (Some(row), Some(column)) = (row.checked_add_signed(dr), column.checked_add_signed(dc))
        else {
            continue;
        };

        let Some(number) = number_at::<V>(schematic, row, column)? else {
            continue;
        };

        if numbers.iter().any(|n| n.id() == number.id()) {
            continue;
        }

        numbers.push(number);
    }

    Ok(numbers)
}

#[cfg(test)]
mod tests {
    use crate::{Alphabet, Schematic};

    fn schematic(rows: &[&str]) -> Schematic {
        Schematic::from_rows(rows, Alphabet::default()).unwrap()
    }

    fn adjacent(s: &Schematic) -> Vec<u32> {
        s.all_numbers::<u32>()
            .map(Result::unwrap)
            .filter(|n| super::is_adjacent_to_symbol(s, n))
            .map(|n| n.value)
            .collect()
    }

    #[test]
    fn test_ring_positions() {
        // Every position in the ring around `12`.
        for (row, column) in [(0, 0), (0, 1), (0, 2), (0, 3), (1, 0), (1, 3), (2, 0), (2, 1), (2, 2), (2, 3)] {
            let mut rows = [*b"....", *b".12.", *b"...."];
            rows[row][column] = b'#';
            let s = Schematic::from_rows(rows, Alphabet::default()).unwrap();
            assert_eq!(adjacent(&s), [12], "symbol at {row}:{column}");
        }
    }

    #[test]
    fn test_outside_ring() {
        let s = schematic(&["#....#", "..12..", "......", "#....#"]);
        assert!(adjacent(&s).is_empty());
    }

    #[test]
    fn test_edges() {
        let s = schematic(&["12.34", "#...$", "5...6"]);
        assert_eq!(adjacent(&s), [12, 34, 5, 6]);

        let s = schematic(&["7"]);
        assert!(adjacent(&s).is_empty());

        let s = schematic(&["7+"]);
        assert_eq!(adjacent(&s), [7]);
    }

    #[test]
    fn test_digits_are_not_symbols() {
        let s = schematic(&["12", "34"]);
        assert!(adjacent(&s).is_empty());
    }

    #[test]
    fn test_number_at() {
        let s = schematic(&["..467.", "#....."]);

        for column in 2..5 {
            let number = super::number_at::<u32>(&s, 0, column).unwrap().unwrap();
            assert_eq!((number.value, number.id(), number.len), (467, (0, 2), 3));
        }

        assert!(super::number_at::<u32>(&s, 0, 1).unwrap().is_none());
        assert!(super::number_at::<u32>(&s, 1, 0).unwrap().is_none());
        assert!(super::number_at::<u32>(&s, 2, 0).unwrap().is_none());
        assert!(super::number_at::<u32>(&s, 0, 6).unwrap().is_none());
    }

    #[test]
    fn test_deduplicated_neighbours() {
        // `467` touches the gear through three cells above it, `35` through
        // two cells below it.
        let s = schematic(&["467", ".*.", "35."]);
        let numbers = super::collect_adjacent_numbers::<u32>(&s, 1, 1).unwrap();
        let ids = numbers.iter().map(|n| (n.value, n.id())).collect::<Vec<_>>();
        assert_eq!(ids, [(467, (0, 0)), (35, (2, 0))]);
    }

    #[test]
    fn test_separate_numbers_in_one_row() {
        let s = schematic(&["1.2", "3*4", "5.6"]);
        let numbers = super::collect_adjacent_numbers::<u32>(&s, 1, 1).unwrap();
        let values = numbers.iter().map(|n| n.value).collect::<Vec<_>>();
        assert_eq!(values, [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_corner_cell() {
        let s = schematic(&["*1", "23"]);
        let numbers = super::collect_adjacent_numbers::<u32>(&s, 0, 0).unwrap();
        let values = numbers.iter().map(|n| n.value).collect::<Vec<_>>();
        assert_eq!(values, [1, 23]);
    }
}
