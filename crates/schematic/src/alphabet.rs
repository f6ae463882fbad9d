use crate::Error;

/// The classification of a single schematic cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// An ASCII digit, holding its numeric value.
    Digit(u8),
    /// The background character.
    Empty,
    /// Anything else, holding the raw character.
    Symbol(u8),
}

impl Cell {
    #[inline]
    pub fn is_symbol(self) -> bool {
        matches!(self, Cell::Symbol(..))
    }
}

/// The characters which have special meaning in a schematic.
///
/// # Examples
///
/// ```
/// use schematic::{Alphabet, Cell};
///
/// let alphabet = Alphabet::default();
/// assert_eq!(alphabet.classify(b'7'), Cell::Digit(7));
/// assert_eq!(alphabet.classify(b'.'), Cell::Empty);
/// assert_eq!(alphabet.classify(b'#'), Cell::Symbol(b'#'));
/// assert!(alphabet.is_gear(b'*'));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
    empty: u8,
    gear: u8,
}

impl Alphabet {
    /// Construct an alphabet with custom empty and gear characters.
    ///
    /// Both have to be distinct and neither can be a digit.
    pub fn new(empty: u8, gear: u8) -> Result<Self, Error> {
        if empty == gear || empty.is_ascii_digit() || gear.is_ascii_digit() {
            return Err(Error::Alphabet {
                empty: char::from(empty),
                gear: char::from(gear),
            });
        }

        Ok(Self { empty, gear })
    }

    /// The background character.
    #[inline]
    pub fn empty(&self) -> u8 {
        self.empty
    }

    /// The gear character.
    #[inline]
    pub fn gear(&self) -> u8 {
        self.gear
    }

    /// Classify a single character.
    #[inline]
    pub fn classify(&self, c: u8) -> Cell {
        match c {
            b'0'..=b'9' => Cell::Digit(c - b'0'),
            c if c == self.empty => Cell::Empty,
            c => Cell::Symbol(c),
        }
    }

    /// Test if the character is a symbol, that is neither a digit nor empty.
    #[inline]
    pub fn is_symbol(&self, c: u8) -> bool {
        self.classify(c).is_symbol()
    }

    #[inline]
    pub fn is_gear(&self, c: u8) -> bool {
        c == self.gear
    }
}

impl Default for Alphabet {
    #[inline]
    fn default() -> Self {
        Self {
            empty: b'.',
            gear: b'*',
        }
    }
}
