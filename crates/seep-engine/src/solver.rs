//! The flow solver: one deterministic pass over the lattice per tick.
//!
//! [`Solver::simulate`] scans cells in row-major order (top to bottom,
//! left to right). Every transfer is applied immediately, so a cell
//! scanned later in the same tick sees the liquid an earlier cell just
//! pushed into it. That ordering is part of the contract: the same
//! lattice and the same edits always produce the same result.
//!
//! Per open, unsettled cell holding liquid, in priority order:
//!
//! 1. **Down** into the cell below while it has room up to `capacity`.
//! 2. **Sideways**, only if nothing went down: Left then Right, a
//!    `lateral_fraction` of the level difference to a strictly lower
//!    neighbour, clamped to `compression_limit` and the liquid present.
//! 3. **Up**, only for the excess above `compression_limit`.
//!
//! A second pass compares each cell against its level at the start of
//! the tick and advances or resets its settle counter.

use std::time::Instant;

use log::{debug, trace};
use seep_core::{CellIndex, ConfigError, Direction, FlowBits, TickId};

use crate::cell::Cell;
use crate::config::SolverConfig;
use crate::lattice::Lattice;
use crate::report::TickReport;

/// Advances a [`Lattice`] one tick at a time.
///
/// Holds no lattice state of its own beyond a scratch buffer, so one
/// solver can drive any number of lattices in turn.
///
/// # Examples
///
/// ```
/// use seep_engine::{Lattice, Solver};
///
/// // A one-cell-wide column: the drop lands on the floor in one tick.
/// let mut lattice = Lattice::new(3, 5).unwrap();
/// lattice.add_liquid_at(1, 1, 0.5).unwrap();
///
/// let mut solver = Solver::default();
/// let report = solver.simulate(&mut lattice);
/// assert_eq!(report.downward_transfers, 2);
/// assert_eq!(lattice.cell_at(1, 3).unwrap().liquid(), 0.5);
/// ```
#[derive(Clone, Debug)]
pub struct Solver {
    config: SolverConfig,
    tick: TickId,
    before: Vec<f64>,
}

impl Solver {
    /// Create a solver after validating `config`.
    pub fn new(config: SolverConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            tick: TickId::default(),
            before: Vec::new(),
        })
    }

    /// The active configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// The last tick this solver ran, `TickId(0)` before the first.
    pub fn current_tick(&self) -> TickId {
        self.tick
    }

    /// Run one tick over `lattice`.
    ///
    /// Total: never fails, conserves liquid, keeps every cell
    /// non-negative and every obstacle dry. On a fully settled lattice
    /// this visits nothing and changes nothing.
    pub fn simulate(&mut self, lattice: &mut Lattice) -> TickReport {
        let tick_start = Instant::now();
        self.tick = self.tick.next();
        let mut report = TickReport {
            tick: self.tick,
            ..TickReport::default()
        };

        let cells = lattice.cells_mut();
        self.before.clear();
        self.before.extend(cells.iter().map(Cell::liquid));

        // Pass 1: flow, in scan order.
        for i in 0..cells.len() {
            let cell = &mut cells[i];
            if cell.kind().is_obstacle() {
                if !cell.is_settled() {
                    cell.settle_now();
                }
                continue;
            }
            if cell.is_settled() {
                report.cells_skipped += 1;
                continue;
            }
            report.cells_visited += 1;
            flow_cell(&self.config, cells, i, &mut report);
        }

        // Pass 2: settle bookkeeping against the start-of-tick levels.
        for (cell, &before) in cells.iter_mut().zip(&self.before) {
            if cell.kind().is_obstacle() || cell.is_settled() {
                continue;
            }
            if (cell.liquid() - before).abs() < self.config.settle_epsilon {
                if cell.record_calm(self.config.settle_threshold) {
                    report.newly_settled += 1;
                    continue;
                }
            } else {
                cell.reset_calm();
            }
            report.active_cells += 1;
        }

        report.total_us = tick_start.elapsed().as_micros() as u64;
        trace!(
            "tick {}: visited={} skipped={} transfers={} moved={:.6} settled+={} active={}",
            report.tick,
            report.cells_visited,
            report.cells_skipped,
            report.transfers(),
            report.volume_moved,
            report.newly_settled,
            report.active_cells,
        );
        if report.newly_settled > 0 && lattice.is_fully_settled() {
            debug!(
                "lattice {}x{} fully settled at tick {}",
                lattice.width(),
                lattice.height(),
                report.tick
            );
        }
        report
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self {
            config: SolverConfig::default(),
            tick: TickId::default(),
            before: Vec::new(),
        }
    }
}

/// Index of the neighbour in `slot` if it exists and is open.
fn open_neighbour(cells: &[Cell], slot: Option<CellIndex>) -> Option<usize> {
    slot.map(CellIndex::get)
        .filter(|&n| cells[n].kind().is_open())
}

/// Apply the three flow rules to the cell at `i`.
fn flow_cell(cfg: &SolverConfig, cells: &mut [Cell], i: usize, report: &mut TickReport) {
    let slots = cells[i].neighbour_slots();
    let mut flow = FlowBits::empty();

    if cells[i].liquid() > 0.0 {
        let mut moved_down = false;

        if let Some(below) = open_neighbour(cells, slots[Direction::Bottom.slot()]) {
            let room = cfg.capacity - cells[below].liquid();
            if room > cfg.min_flow {
                let amount = cells[i].liquid().min(room);
                transfer(cells, i, below, amount, report);
                flow.insert(Direction::Bottom);
                report.downward_transfers += 1;
                moved_down = true;
            }
        }

        if !moved_down {
            // Both shares come from the level before either lateral move.
            let base = cells[i].liquid();
            for dir in [Direction::Left, Direction::Right] {
                let Some(side) = open_neighbour(cells, slots[dir.slot()]) else {
                    continue;
                };
                let there = cells[side].liquid();
                if there >= base {
                    continue;
                }
                let amount = (cfg.lateral_fraction * (base - there))
                    .min(cfg.compression_limit - there)
                    .min(cells[i].liquid());
                if amount >= cfg.min_flow {
                    transfer(cells, i, side, amount, report);
                    flow.insert(dir);
                    report.lateral_transfers += 1;
                }
            }
        }

        let excess = cells[i].liquid() - cfg.compression_limit;
        if excess > 0.0 {
            if let Some(above) = open_neighbour(cells, slots[Direction::Top.slot()]) {
                let room = cfg.compression_limit - cells[above].liquid();
                if room > 0.0 {
                    transfer(cells, i, above, excess.min(room), report);
                    flow.insert(Direction::Top);
                    report.upward_transfers += 1;
                }
            }
        }
    }

    cells[i].set_flow(flow);
}

/// Move `amount` from `from` to `to` and wake whoever may now need to move.
fn transfer(cells: &mut [Cell], from: usize, to: usize, amount: f64, report: &mut TickReport) {
    cells[from].drain(amount);
    cells[to].fill(amount);
    cells[to].unsettle();
    for n in cells[from].neighbour_slots().into_iter().flatten() {
        let neighbour = &mut cells[n.get()];
        if neighbour.kind().is_open() {
            neighbour.wake();
        }
    }
    report.volume_moved += amount;
}
