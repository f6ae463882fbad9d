use lib::grid::Grid;

use crate::{gear_ratio, gears, is_adjacent_to_symbol, Error, Schematic, Value};

/// Sum every number which is adjacent to a symbol.
pub fn part1<V>(schematic: &Schematic) -> Result<V, Error>
where
    V: Value,
{
    let mut sum = V::zero();

    for row in 0..schematic.rows_len() {
        let mut parts = 0usize;

        for number in schematic.numbers::<V>(row) {
            let number = number?;

            if !is_adjacent_to_symbol(schematic, &number) {
                log::trace!("{}:{}: {:?} is not a part", number.row, number.column, number.value);
                continue;
            }

            sum = sum
                .checked_add(&number.value)
                .ok_or(Error::Overflow {
                    row: number.row,
                    column: number.column,
                })?;

            parts += 1;
        }

        log::debug!("{row}: {parts} part numbers");
    }

    Ok(sum)
}

/// Sum the ratio of every gear.
pub fn part2<V>(schematic: &Schematic) -> Result<V, Error>
where
    V: Value,
{
    let mut sum = V::zero();

    for (row, column) in gears(schematic) {
        let Some(ratio) = gear_ratio::<V>(schematic, row, column)? else {
            continue;
        };

        log::debug!("{row}:{column}: gear ratio {ratio:?}");
        sum = sum.checked_add(&ratio).ok_or(Error::Overflow { row, column })?;
    }

    Ok(sum)
}

/// Solve both parts.
pub fn solve<V>(schematic: &Schematic) -> Result<(V, V), Error>
where
    V: Value,
{
    Ok((part1(schematic)?, part2(schematic)?))
}
