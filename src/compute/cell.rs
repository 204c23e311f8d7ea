//! Packed cell codec.
//!
//! Each cell fits in a single byte, most significant bit first:
//!
//! ```text
//! O A A A A A A A
//! ```
//!
//! `A` holds the 7-bit age (generations continuously alive) and `O` marks
//! cells that were part of the initial configuration. A cell is alive iff
//! any bit is set; in practice that means `age >= 1`.

use serde::{Deserialize, Serialize};

/// Mask selecting the age bits.
pub const AGE_MASK: u8 = 0x7F;

/// Bit marking an originally-placed cell.
pub const ORIGIN_BIT: u8 = 0x80;

/// Largest representable age. Aging saturates here.
pub const MAX_AGE: u8 = AGE_MASK;

/// A single packed grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct Cell(u8);

impl Cell {
    /// The dead cell.
    pub const DEAD: Cell = Cell(0);

    /// A cell born during the simulation.
    pub const NEWBORN: Cell = Cell(1);

    /// A cell placed by the initial configuration.
    pub const PLACED: Cell = Cell(ORIGIN_BIT | 1);

    /// Wrap raw bits.
    #[inline]
    pub const fn from_bits(bits: u8) -> Self {
        Cell(bits)
    }

    /// Raw packed bits.
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Build a cell from its age and origin flag.
    ///
    /// Ages above [`MAX_AGE`] are truncated to their low 7 bits. A zero age
    /// always yields [`Cell::DEAD`], so the origin flag never outlives a cell.
    #[inline]
    pub const fn encode(age: u8, origin: bool) -> Self {
        let age = age & AGE_MASK;
        if age == 0 {
            return Cell::DEAD;
        }
        let origin_bits = if origin { ORIGIN_BIT } else { 0 };
        Cell(origin_bits | age)
    }

    /// Split into `(alive, age, origin)`.
    #[inline]
    pub const fn decode(self) -> (bool, u8, bool) {
        (self.alive(), self.age(), self.origin())
    }

    #[inline]
    pub const fn alive(self) -> bool {
        self.0 != 0
    }

    #[inline]
    pub const fn age(self) -> u8 {
        self.0 & AGE_MASK
    }

    #[inline]
    pub const fn origin(self) -> bool {
        self.0 & ORIGIN_BIT != 0
    }

    /// One generation older, origin preserved. Saturates at [`MAX_AGE`].
    #[inline]
    pub const fn aged(self) -> Self {
        let age = self.age();
        if age < MAX_AGE {
            Cell((self.0 & ORIGIN_BIT) | (age + 1))
        } else {
            self
        }
    }
}

/// Split a cell into `(alive, age, origin)`.
#[inline]
pub fn decode(cell: Cell) -> (bool, u8, bool) {
    cell.decode()
}

/// Build a cell from its age and origin flag.
#[inline]
pub fn encode(age: u8, origin: bool) -> Cell {
    Cell::encode(age, origin)
}

/// Saturating one-generation aging.
#[inline]
pub fn aged(cell: Cell) -> Cell {
    cell.aged()
}
