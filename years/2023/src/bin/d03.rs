use lib::prelude::*;
use schematic::{Alphabet, Schematic};

lib::entry!(input = "d03.txt", expect = (4361, 467835), solve);

fn solve(input: IStr) -> Result<(u64, u64)> {
    let grid = Schematic::parse(input, Alphabet::default())?;

    let (rows, columns) = grid.dimensions();
    log::debug!("schematic is {rows}x{columns}");

    Ok(schematic::solve(&grid)?)
}
