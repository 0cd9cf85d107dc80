//! Read-only presentation surface.
//!
//! [`CellView`] is a copy of everything a renderer needs for one cell:
//! the raw state plus the values derived from the solver's
//! configuration, and two optional render hints. Nothing here feeds
//! back into the simulation.

use seep_core::{CellKind, Direction, FlowBits, LatticeError};

use crate::cell::Cell;
use crate::config::SolverConfig;
use crate::lattice::Lattice;

/// Bottom fill at or below this share of capacity makes liquid "float".
const FLOATING_FILL: f64 = 0.99;
/// Top liquid above this share of capacity makes a cell "fed from above".
const FEED_FILL: f64 = 0.05;

/// Snapshot of one cell for rendering.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellView {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
    /// Open or obstacle.
    pub kind: CellKind,
    /// Raw liquid quantity.
    pub liquid: f64,
    /// Flow directions from the cell's last processing.
    pub flow: FlowBits,
    /// `min(1, liquid / capacity)`: how much of the cell to draw.
    pub fill_level: f64,
    /// `min(1, liquid / compression_limit)`: darkness of the liquid colour.
    /// Cells packed under the top border can hold more than the limit.
    pub pressure: f64,
    /// Open cell sitting above an open cell that is not yet nearly
    /// full. Renderers may hide such liquid while it is in free fall.
    pub floating: bool,
    /// Open cell whose top neighbour holds noticeable liquid or is
    /// pouring straight down. Renderers may draw it full to show a
    /// continuous stream.
    pub fed_from_above: bool,
}

impl CellView {
    /// Build the view of the cell at `(x, y)`.
    pub fn at(
        lattice: &Lattice,
        config: &SolverConfig,
        x: i32,
        y: i32,
    ) -> Result<Self, LatticeError> {
        let cell = lattice.cell_at(x, y)?;
        Ok(Self::of(lattice, config, cell))
    }

    /// Build the view of `cell`, which must belong to `lattice`.
    pub fn of(lattice: &Lattice, config: &SolverConfig, cell: &Cell) -> Self {
        let open = cell.kind().is_open();
        let neighbour = |dir| cell.neighbour(dir).and_then(|n| lattice.cell(n));

        let floating = open
            && neighbour(Direction::Bottom).is_some_and(|below| {
                below.kind().is_open() && below.liquid() <= FLOATING_FILL * config.capacity
            });
        let fed_from_above = open
            && neighbour(Direction::Top).is_some_and(|above| {
                above.liquid() > FEED_FILL * config.capacity
                    || above.flow() == FlowBits::from(Direction::Bottom)
            });

        Self {
            x: cell.x(),
            y: cell.y(),
            kind: cell.kind(),
            liquid: cell.liquid(),
            flow: cell.flow(),
            fill_level: (cell.liquid() / config.capacity).min(1.0),
            pressure: (cell.liquid() / config.compression_limit).min(1.0),
            floating,
            fed_from_above,
        }
    }

    /// Views of every cell in row-major order.
    pub fn all<'a>(
        lattice: &'a Lattice,
        config: &'a SolverConfig,
    ) -> impl Iterator<Item = CellView> + 'a {
        lattice.iter().map(move |cell| Self::of(lattice, config, cell))
    }
}
