use std::fmt;

/// State of a single grid cell.
///
/// `Empty` and `Alive` are steady. `Born` and `Dying` only exist between a
/// mark sub-phase and the resolve sub-phase that follows it, so the renderer
/// can show for one tick which cells are about to change.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty = 0,
    Alive = 1,
    Born = 2,
    Dying = 3,
}

impl Cell {
    /// Every variant, in ordinal order.
    pub const ALL: [Cell; 4] = [Cell::Empty, Cell::Alive, Cell::Born, Cell::Dying];

    /// The two states a grid may hold outside a mark/resolve pair.
    pub const STEADY: [Cell; 2] = [Cell::Empty, Cell::Alive];

    /// Ordinal, used to index the color table.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Contribution to a neighbor count, or `None` for transitional states,
    /// which must never reach the counter.
    #[inline]
    pub fn value(self) -> Option<u8> {
        match self {
            Cell::Empty => Some(0),
            Cell::Alive => Some(1),
            Cell::Born | Cell::Dying => None,
        }
    }

    #[inline]
    pub fn is_steady(self) -> bool {
        matches!(self, Cell::Empty | Cell::Alive)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Cell::Empty => "empty",
            Cell::Alive => "alive",
            Cell::Born => "born",
            Cell::Dying => "dying",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::Cell;

    #[test]
    fn ordinals_follow_declaration_order() {
        for (i, cell) in Cell::ALL.iter().enumerate() {
            assert_eq!(cell.index(), i);
        }
    }

    #[test]
    fn only_steady_cells_have_a_count_value() {
        assert_eq!(Cell::Empty.value(), Some(0));
        assert_eq!(Cell::Alive.value(), Some(1));
        assert_eq!(Cell::Born.value(), None);
        assert_eq!(Cell::Dying.value(), None);
        assert!(Cell::STEADY.iter().all(|c| c.is_steady()));
    }
}
