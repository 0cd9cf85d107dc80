//! Per-tick solver metrics.
//!
//! [`TickReport`] captures what one [`Solver::simulate`](crate::Solver::simulate)
//! call did, for telemetry, profiling, and "stop ticking once quiet"
//! loops in the host.

use seep_core::TickId;

/// Counters collected during a single tick.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickReport {
    /// The tick this report describes.
    pub tick: TickId,
    /// Wall-clock time for the whole tick, in microseconds.
    pub total_us: u64,
    /// Cells whose flow rules ran this tick.
    pub cells_visited: usize,
    /// Open cells skipped because they were settled.
    pub cells_skipped: usize,
    /// Transfers into the cell below.
    pub downward_transfers: usize,
    /// Transfers into a side neighbour.
    pub lateral_transfers: usize,
    /// Pressure-driven transfers into the cell above.
    pub upward_transfers: usize,
    /// Total liquid moved between cells.
    pub volume_moved: f64,
    /// Cells that reached the settle threshold this tick.
    pub newly_settled: usize,
    /// Open cells still unsettled after the tick.
    pub active_cells: usize,
}

impl TickReport {
    /// Total number of transfers in any direction.
    pub fn transfers(&self) -> usize {
        self.downward_transfers + self.lateral_transfers + self.upward_transfers
    }

    /// Whether the tick moved nothing and left no cell active.
    pub fn is_quiescent(&self) -> bool {
        self.transfers() == 0 && self.active_cells == 0
    }
}
