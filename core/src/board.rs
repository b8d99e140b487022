use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::collections::{HashSet, VecDeque};

use crate::*;

/// Valid transitions:
/// - InProgress -> Won
/// - InProgress -> Lost
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// Indicates the game has ended and no moves are accepted anymore.
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::InProgress
    }
}

/// Outcome of a reveal, so the collaborator can re-render without reading
/// model internals.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    /// Whether this outcome could have caused an update to the game
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// Outcome of toggling a flag
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlagOutcome {
    NoChange,
    Changed,
}

impl FlagOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Changed)
    }
}

/// The board model: one composite cell record per grid position, mutated in
/// place for the life of a single game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    grid: Array2<Cell>,
    size: Coord,
    mine_count: CellCount,
    revealed_count: CellCount,
    status: GameStatus,
}

impl Board {
    pub fn new(config: &GameConfig, generator: impl MineGenerator) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_mine_mask(generator.generate(config)))
    }

    /// Deterministic constructor for tests and doubles: mines at exactly the
    /// given coordinates.
    pub fn with_mine_coords(size: Coord, mine_coords: &[Coord2]) -> Result<Self> {
        if size == 0 {
            return Err(GameError::InvalidSize);
        }

        let mut mines: Array2<bool> = Array2::default((usize::from(size), usize::from(size)));
        for &coords in mine_coords {
            if coords.0 >= size || coords.1 >= size {
                return Err(GameError::InvalidCoords);
            }
            mines[coords.to_nd_index()] = true;
        }

        let board = Self::from_mine_mask(mines);
        if board.mine_count == board.total_cells() {
            return Err(GameError::TooManyMines);
        }
        Ok(board)
    }

    /// Fixes every cell's content from the mine mask: mines as given, safe
    /// cells labeled with their grid-clipped 8-neighbor mine count.
    fn from_mine_mask(mines: Array2<bool>) -> Self {
        let size = mines.dim().0 as Coord;
        let mut grid: Array2<Cell> = Array2::default(mines.raw_dim());
        let mut mine_count: CellCount = 0;

        for row in 0..size {
            for col in 0..size {
                let coords = (row, col);
                let content = if mines[coords.to_nd_index()] {
                    mine_count += 1;
                    CellContent::Mine
                } else {
                    let adjacent = NeighborIter::new(coords, size)
                        .filter(|&pos| mines[pos.to_nd_index()])
                        .count() as u8;
                    CellContent::from_adjacent_mines(adjacent)
                };
                grid[coords.to_nd_index()].content = content;
            }
        }

        Self {
            grid,
            size,
            mine_count,
            revealed_count: 0,
            status: Default::default(),
        }
    }

    pub fn size(&self) -> Coord {
        self.size
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.size, self.size)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Cell state at the given coordinates, `None` when out of bounds.
    pub fn cell_at(&self, coords: Coord2) -> Option<Cell> {
        if self.in_bounds(coords) {
            Some(self.grid[coords.to_nd_index()])
        } else {
            None
        }
    }

    /// True iff every non-mine cell is revealed. Pure query, independent of
    /// flag state, mine-reveal state, and game status.
    pub fn check_win(&self) -> bool {
        self.grid
            .iter()
            .all(|cell| cell.content.is_mine() || cell.revealed)
    }

    /// Reveals a cell. Out-of-bounds coordinates, a finished game, an
    /// already-revealed cell, and a flagged cell are all silent no-ops.
    ///
    /// Revealing a mine ends the game as `Lost`. Revealing an `Empty` cell
    /// opens its whole contiguous empty region plus the numbered border.
    pub fn reveal(&mut self, coords: Coord2) -> RevealOutcome {
        use RevealOutcome::*;

        if !self.in_bounds(coords) || self.status.is_finished() {
            return NoChange;
        }

        let cell = self.grid[coords.to_nd_index()];
        if !cell.can_reveal() {
            return NoChange;
        }

        self.reveal_cell(coords);
        match cell.content {
            CellContent::Mine => {
                log::debug!("Mine hit at {:?}", coords);
                self.status = GameStatus::Lost;
                HitMine
            }
            content => {
                if content == CellContent::Empty {
                    self.flood_fill(coords);
                }

                if self.revealed_count == self.safe_cell_count() {
                    self.status = GameStatus::Won;
                    Won
                } else {
                    Revealed
                }
            }
        }
    }

    /// Opens the contiguous empty region around `start` with an explicit
    /// work list, so deep regions cannot overflow the call stack. Each cell
    /// is visited at most once; flags keep their reveal-lock inside the
    /// fill.
    fn flood_fill(&mut self, start: Coord2) {
        let mut visited = HashSet::from([start]);
        let mut to_visit: VecDeque<Coord2> = self.iter_neighbors(start).collect();
        log::trace!(
            "Starting flood fill from {:?}, initial neighbors: {:?}",
            start,
            to_visit
        );

        while let Some(coords) = to_visit.pop_front() {
            if !visited.insert(coords) {
                continue;
            }

            let cell = self.grid[coords.to_nd_index()];
            if !cell.can_reveal() {
                log::trace!("Skipping cell at {:?}", coords);
                continue;
            }

            self.reveal_cell(coords);

            // numbered cells form the border of the fill and do not propagate
            if cell.content == CellContent::Empty {
                to_visit.extend(
                    self.iter_neighbors(coords)
                        .filter(|pos| !visited.contains(pos)),
                );
            }
        }
    }

    fn reveal_cell(&mut self, coords: Coord2) {
        let cell = &mut self.grid[coords.to_nd_index()];
        cell.revealed = true;
        self.revealed_count += 1;
        log::debug!("Revealed cell at {:?}: {:?}", coords, cell.content);
    }

    /// Toggles the flag on an unrevealed cell. Out-of-bounds coordinates, a
    /// finished game, and a revealed cell are silent no-ops. Never changes
    /// the game status.
    pub fn toggle_flag(&mut self, coords: Coord2) -> FlagOutcome {
        use FlagOutcome::*;

        if !self.in_bounds(coords) || self.status.is_finished() {
            return NoChange;
        }

        let cell = &mut self.grid[coords.to_nd_index()];
        if cell.revealed {
            return NoChange;
        }

        cell.flagged = !cell.flagged;
        Changed
    }

    /// End-of-game disclosure: unconditionally marks every cell revealed,
    /// flagged cells included.
    pub fn reveal_all(&mut self) {
        for cell in self.grid.iter_mut() {
            cell.revealed = true;
        }
        self.revealed_count = self.total_cells();
    }

    fn in_bounds(&self, coords: Coord2) -> bool {
        coords.0 < self.size && coords.1 < self.size
    }

    fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.size)
    }
}
