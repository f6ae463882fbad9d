//! Analysis of engine schematics.
//!
//! A schematic is a rectangular grid of digits, an empty background
//! character, and symbols. Horizontal runs of digits form numbers. A number
//! next to a symbol (diagonals included) is a part number, and a gear symbol
//! touching exactly two numbers has a ratio which is their product.
//!
//! ```
//! use lib::input::IStr;
//! use schematic::{Alphabet, Schematic};
//!
//! let input = IStr::new(b"467..114..\n...*......\n..35..633.\n");
//! let schematic = Schematic::parse(input, Alphabet::default())?;
//!
//! let (part1, part2) = schematic::solve::<u64>(&schematic)?;
//! assert_eq!(part1, 467 + 35);
//! assert_eq!(part2, 467 * 35);
//! # Ok::<_, schematic::Error>(())
//! ```

mod adjacency;
mod alphabet;
mod error;
mod gear;
mod parts;
mod scanner;
mod schematic;

use core::fmt;

use num::traits::{CheckedAdd, CheckedMul, Zero};

pub use self::adjacency::{collect_adjacent_numbers, is_adjacent_to_symbol, number_at, Neighbours};
pub use self::alphabet::{Alphabet, Cell};
pub use self::error::Error;
pub use self::gear::{gear_ratio, gears};
pub use self::parts::{part1, part2, solve};
pub use self::scanner::{Number, Scanner};
pub use self::schematic::Schematic;

/// An integer type numbers in a schematic can be parsed into.
///
/// All arithmetic is checked, so an input which doesn't fit produces
/// [Error::Overflow]. Use [num::BigUint] for inputs of unbounded size.
pub trait Value: Clone + fmt::Debug + Zero + CheckedAdd + CheckedMul + From<u8> {}

impl<T> Value for T where T: Clone + fmt::Debug + Zero + CheckedAdd + CheckedMul + From<u8> {}
