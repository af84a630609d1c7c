//! Miscellaneous project utilities.

use crate::location::Location;
use crate::EDGE_LENGTH;
use std::fmt::{self, Formatter};

/// Write an 8x8 grid labelled A-H across and 1-8 down, asking `symbol_at` for the
/// character to show at each space.
pub fn format_grid(f: &mut Formatter<'_>, symbol_at: impl Fn(Location) -> char) -> fmt::Result {
    f.write_str("   A B C D E F G H")?;

    for row in 0..EDGE_LENGTH {
        write!(f, "\n {} ", row + 1)?;
        for col in 0..EDGE_LENGTH {
            let loc = Location::from_coords(row, col).ok_or(fmt::Error)?;
            write!(f, "{} ", symbol_at(loc))?;
        }
    }

    Ok(())
}
