//! The atomic unit of lattice state.
//!
//! A [`Cell`] is read-only outside this crate. The host changes cells
//! through [`Lattice`](crate::Lattice) edits and the solver moves liquid
//! through the crate-private transfer methods below, so presentation
//! code cannot break the `Obstacle ⇒ dry` invariant or the settle
//! bookkeeping.

use seep_core::{CellIndex, CellKind, Direction, FlowBits};

/// One lattice cell.
#[derive(Clone, Debug)]
pub struct Cell {
    x: i32,
    y: i32,
    kind: CellKind,
    liquid: f64,
    settled: bool,
    settle_count: u32,
    flow: FlowBits,
    neighbours: [Option<CellIndex>; 4],
}

impl Cell {
    pub(crate) fn new(x: i32, y: i32, kind: CellKind, neighbours: [Option<CellIndex>; 4]) -> Self {
        Self {
            x,
            y,
            kind,
            liquid: 0.0,
            settled: false,
            settle_count: 0,
            flow: FlowBits::empty(),
            neighbours,
        }
    }

    /// Column.
    pub fn x(&self) -> i32 {
        self.x
    }

    /// Row. `0` is the top of the lattice.
    pub fn y(&self) -> i32 {
        self.y
    }

    /// Open or obstacle.
    pub fn kind(&self) -> CellKind {
        self.kind
    }

    /// Current liquid quantity. Always `>= 0`, and exactly `0` for obstacles.
    pub fn liquid(&self) -> f64 {
        self.liquid
    }

    /// Whether the solver is currently skipping this cell.
    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// Consecutive ticks without meaningful change.
    pub fn settle_count(&self) -> u32 {
        self.settle_count
    }

    /// Directions liquid left this cell towards the last time it was processed.
    pub fn flow(&self) -> FlowBits {
        self.flow
    }

    /// Index of the neighbour in `dir`, or `None` at the lattice edge.
    pub fn neighbour(&self, dir: Direction) -> Option<CellIndex> {
        self.neighbours[dir.slot()]
    }

    pub(crate) fn neighbour_slots(&self) -> [Option<CellIndex>; 4] {
        self.neighbours
    }

    // ── Host-facing contract ────────────────────────────────────

    /// Reclassify the cell. Returns the liquid dropped by an obstacle
    /// conversion. Waking the neighbours is the lattice's job.
    pub(crate) fn set_kind(&mut self, kind: CellKind) -> f64 {
        self.kind = kind;
        let dropped = if kind.is_obstacle() {
            self.flow.clear();
            std::mem::take(&mut self.liquid)
        } else {
            0.0
        };
        self.unsettle();
        dropped
    }

    /// Inject liquid. Returns `false` (and changes nothing) on obstacles.
    pub(crate) fn add_liquid(&mut self, amount: f64) -> bool {
        if self.kind.is_obstacle() {
            return false;
        }
        self.liquid += amount;
        self.unsettle();
        true
    }

    /// Carry state across a resize.
    pub(crate) fn restore(&mut self, kind: CellKind, liquid: f64) {
        self.kind = kind;
        self.liquid = if kind.is_open() { liquid } else { 0.0 };
    }

    // ── Solver-facing bookkeeping ───────────────────────────────

    pub(crate) fn unsettle(&mut self) {
        self.settled = false;
        self.settle_count = 0;
    }

    /// Unsettle a settled cell. Leaves the calm count of an active cell alone.
    pub(crate) fn wake(&mut self) {
        if self.settled {
            self.unsettle();
        }
    }

    pub(crate) fn settle_now(&mut self) {
        self.settled = true;
        self.flow.clear();
    }

    /// Count one calm tick. Returns `true` if this tick settled the cell.
    pub(crate) fn record_calm(&mut self, threshold: u32) -> bool {
        self.settle_count = self.settle_count.saturating_add(1);
        if self.settle_count >= threshold {
            self.settle_now();
            return true;
        }
        false
    }

    pub(crate) fn reset_calm(&mut self) {
        self.settle_count = 0;
    }

    pub(crate) fn set_flow(&mut self, flow: FlowBits) {
        self.flow = flow;
    }

    pub(crate) fn drain(&mut self, amount: f64) {
        self.liquid -= amount;
    }

    pub(crate) fn fill(&mut self, amount: f64) {
        self.liquid += amount;
    }
}
