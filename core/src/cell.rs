use serde::{Deserialize, Serialize};

/// Fixed classification of a cell, decided at construction and never
/// mutated afterwards.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellContent {
    Empty,
    Adjacent(u8),
    Mine,
}

impl CellContent {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }

    /// Content of a safe cell given its neighbor mine count. Zero maps to
    /// `Empty`, never to `Adjacent(0)`.
    pub const fn from_adjacent_mines(count: u8) -> Self {
        if count == 0 {
            Self::Empty
        } else {
            Self::Adjacent(count)
        }
    }
}

impl Default for CellContent {
    fn default() -> Self {
        Self::Empty
    }
}

/// One grid position: fixed content plus the two player-driven facets.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub content: CellContent,
    pub revealed: bool,
    pub flagged: bool,
}

impl Cell {
    /// A flag acts as a reveal-lock, so a flagged cell cannot be revealed
    /// until it is unflagged.
    pub const fn can_reveal(self) -> bool {
        !self.revealed && !self.flagged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_adjacent_mines_is_empty() {
        assert_eq!(CellContent::from_adjacent_mines(0), CellContent::Empty);
        assert_eq!(
            CellContent::from_adjacent_mines(3),
            CellContent::Adjacent(3)
        );
    }

    #[test]
    fn default_cell_is_hidden_and_unflagged() {
        let cell = Cell::default();
        assert_eq!(cell.content, CellContent::Empty);
        assert!(!cell.revealed);
        assert!(!cell.flagged);
        assert!(cell.can_reveal());
    }

    #[test]
    fn flagged_or_revealed_cells_cannot_be_revealed() {
        let flagged = Cell {
            flagged: true,
            ..Cell::default()
        };
        let revealed = Cell {
            revealed: true,
            ..Cell::default()
        };
        assert!(!flagged.can_reveal());
        assert!(!revealed.can_reveal());
    }
}
