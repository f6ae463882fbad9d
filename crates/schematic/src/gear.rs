use lib::grid::Grid;

use crate::{collect_adjacent_numbers, Error, Schematic, Value};

/// Iterate over the position of every gear, row by row.
pub fn gears(schematic: &Schematic) -> impl Iterator<Item = (usize, usize)> + '_ {
    let gear = schematic.alphabet().gear();

    schematic.rows().enumerate().flat_map(move |(row, data)| {
        data.iter()
            .enumerate()
            .filter_map(move |(column, &c)| (c == gear).then_some((row, column)))
    })
}

/// Compute the ratio of the gear at the given position.
///
/// A gear only has a ratio when it touches exactly two distinct numbers,
/// otherwise this returns `Ok(None)`.
///
/// # Examples
///
/// ```
/// use schematic::{Alphabet, Schematic};
///
/// let schematic = Schematic::from_rows(["467..", "...*.", "..35."], Alphabet::default())?;
/// assert_eq!(schematic::gear_ratio::<u32>(&schematic, 1, 3)?, Some(467 * 35));
///
/// let schematic = Schematic::from_rows(["...*.", "..35."], Alphabet::default())?;
/// assert_eq!(schematic::gear_ratio::<u32>(&schematic, 0, 3)?, None);
/// # Ok::<_, schematic::Error>(())
/// ```
pub fn gear_ratio<V>(schematic: &Schematic, row: usize, column: usize) -> Result<Option<V>, Error>
where
    V: Value,
{
    let numbers = collect_adjacent_numbers::<V>(schematic, row, column)?;

    let [a, b] = &numbers[..] else {
        return Ok(None);
    };

    match a.value.checked_mul(&b.value) {
        Some(ratio) => Ok(Some(ratio)),
        None => Err(Error::Overflow { row, column }),
    }
}

#[cfg(test)]
mod tests {
    use crate::{Alphabet, Error, Schematic};

    fn ratio(rows: &[&str]) -> Option<u32> {
        let s = Schematic::from_rows(rows, Alphabet::default()).unwrap();
        let [(row, column)] = super::gears(&s).collect::<Vec<_>>()[..] else {
            panic!("expected exactly one gear");
        };

        super::gear_ratio(&s, row, column).unwrap()
    }

    #[test]
    fn test_neighbour_counts() {
        assert_eq!(ratio(&["...", ".*.", "..."]), None);
        assert_eq!(ratio(&["12.", ".*.", "..."]), None);
        assert_eq!(ratio(&["12.", ".*.", "..3"]), Some(36));
        assert_eq!(ratio(&["12.", "4*.", "..3"]), None);
        assert_eq!(ratio(&["1.2", "3*4", "5.6"]), None);
    }

    #[test]
    fn test_number_touching_twice() {
        // The same number on both diagonals above the gear counts once.
        assert_eq!(ratio(&["123", ".*.", "..."]), None);
        assert_eq!(ratio(&["123", ".*.", "4.."]), Some(492));
        assert_eq!(ratio(&["123", "7*.", "..."]), Some(861));
    }

    #[test]
    fn test_gears_at_edges() {
        assert_eq!(ratio(&["*2", "3."]), Some(6));
        assert_eq!(ratio(&[".2", "3*"]), Some(6));
    }

    #[test]
    fn test_gears() {
        let s = Schematic::from_rows(["*..*", "....", ".*.."], Alphabet::default()).unwrap();
        let gears = super::gears(&s).collect::<Vec<_>>();
        assert_eq!(gears, [(0, 0), (0, 3), (2, 1)]);
    }

    #[test]
    fn test_ratio_overflow() {
        let s = Schematic::from_rows(["200", ".*.", "2.."], Alphabet::default()).unwrap();
        assert_eq!(super::gear_ratio::<u16>(&s, 1, 1).unwrap(), Some(400));

        let error = super::gear_ratio::<u8>(&s, 1, 1).unwrap_err();
        assert!(matches!(error, Error::Overflow { row: 1, column: 1 }));
    }
}
