//! Lockstep simulation wrapper.
//!
//! [`Simulation`] owns a [`Lattice`] and a [`Solver`] and runs one frame
//! per [`step()`](Simulation::step): validate the frame's edits, apply
//! them, tick once. This is the host loop the solver was built for, with
//! the ordering (edits before tick, one tick per frame) fixed in one
//! place.
//!
//! # Ownership model
//!
//! `Simulation` is [`Send`]: it can be moved to another thread, but every
//! mutating method takes `&mut self`, so ticks never overlap and no
//! reader can observe a half-finished tick.

use log::warn;
use seep_core::{ConfigError, LatticeError, TickId};

use crate::cell::Cell;
use crate::config::SolverConfig;
use crate::edit::Edit;
use crate::lattice::Lattice;
use crate::report::TickReport;
use crate::solver::Solver;
use crate::view::CellView;

// Compile-time assertion: Simulation is Send.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<Simulation>();
    }
};

/// A lattice plus the solver that drives it.
///
/// # Example
///
/// ```
/// use seep_engine::{Edit, Simulation, SolverConfig};
///
/// let mut sim = Simulation::new(5, 5, SolverConfig::default()).unwrap();
/// let report = sim
///     .step(&[Edit::AddLiquid { x: 2, y: 1, amount: 2.0 }])
///     .unwrap();
/// assert_eq!(report.downward_transfers, 2);
/// assert_eq!(sim.lattice().total_liquid(), 2.0);
/// ```
#[derive(Clone, Debug)]
pub struct Simulation {
    lattice: Lattice,
    solver: Solver,
    last_report: TickReport,
}

/// Errors from [`Simulation::new`].
#[derive(Clone, Debug, PartialEq)]
pub enum SimulationError {
    /// The lattice could not be created.
    Lattice(LatticeError),
    /// The solver configuration was rejected.
    Config(ConfigError),
}

impl std::fmt::Display for SimulationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lattice(e) => write!(f, "lattice: {e}"),
            Self::Config(e) => write!(f, "solver config: {e}"),
        }
    }
}

impl std::error::Error for SimulationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lattice(e) => Some(e),
            Self::Config(e) => Some(e),
        }
    }
}

impl From<LatticeError> for SimulationError {
    fn from(e: LatticeError) -> Self {
        Self::Lattice(e)
    }
}

impl From<ConfigError> for SimulationError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl Simulation {
    /// Create a `width × height` simulation with the given solver config.
    pub fn new(width: u32, height: u32, config: SolverConfig) -> Result<Self, SimulationError> {
        let solver = Solver::new(config)?;
        let lattice = Lattice::new(width, height)?;
        Ok(Self::from_parts(lattice, solver))
    }

    /// Wrap an existing lattice and solver.
    pub fn from_parts(lattice: Lattice, solver: Solver) -> Self {
        Self {
            lattice,
            solver,
            last_report: TickReport::default(),
        }
    }

    /// Apply `edits` and run one tick.
    ///
    /// All edits are checked before any is applied: if one fails, the
    /// lattice is unchanged, no tick runs, and the first error is
    /// returned.
    pub fn step(&mut self, edits: &[Edit]) -> Result<TickReport, LatticeError> {
        if let Err(e) = edits.iter().try_for_each(|edit| edit.check(&self.lattice)) {
            warn!("rejected batch of {} edits: {e}", edits.len());
            return Err(e);
        }
        for edit in edits {
            edit.apply(&mut self.lattice)?;
        }
        Ok(self.tick())
    }

    /// Run one tick with no edits.
    pub fn tick(&mut self) -> TickReport {
        let report = self.solver.simulate(&mut self.lattice);
        self.last_report = report.clone();
        report
    }

    /// Tick until the lattice is fully settled or `max_ticks` have run.
    ///
    /// Returns the number of ticks run, or `None` if the lattice was
    /// still active after `max_ticks`.
    pub fn run_until_settled(&mut self, max_ticks: usize) -> Option<usize> {
        for n in 1..=max_ticks {
            self.tick();
            if self.lattice.is_fully_settled() {
                return Some(n);
            }
        }
        None
    }

    /// Rebuild the lattice at a new size. See [`Lattice::resize`].
    pub fn resize(&mut self, width: u32, height: u32) -> Result<f64, LatticeError> {
        self.lattice.resize(width, height)
    }

    /// Render view of the cell at `(x, y)`.
    pub fn view(&self, x: i32, y: i32) -> Result<CellView, LatticeError> {
        CellView::at(&self.lattice, self.solver.config(), x, y)
    }

    /// Render views of every cell in row-major order.
    pub fn views(&self) -> impl Iterator<Item = CellView> + '_ {
        CellView::all(&self.lattice, self.solver.config())
    }

    /// The cell at `(x, y)`.
    pub fn cell_at(&self, x: i32, y: i32) -> Result<&Cell, LatticeError> {
        self.lattice.cell_at(x, y)
    }

    /// The lattice.
    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// Mutable lattice access for direct host edits between steps.
    pub fn lattice_mut(&mut self) -> &mut Lattice {
        &mut self.lattice
    }

    /// The solver configuration.
    pub fn config(&self) -> &SolverConfig {
        self.solver.config()
    }

    /// The last tick run, `TickId(0)` before the first.
    pub fn current_tick(&self) -> TickId {
        self.solver.current_tick()
    }

    /// Report from the most recent tick.
    pub fn last_report(&self) -> &TickReport {
        &self.last_report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sim() -> Simulation {
        Simulation::new(5, 5, SolverConfig::default()).unwrap()
    }

    #[test]
    fn new_reports_which_part_failed() {
        match Simulation::new(2, 5, SolverConfig::default()) {
            Err(SimulationError::Lattice(LatticeError::InvalidDimensions { .. })) => {}
            other => panic!("expected Lattice(InvalidDimensions), got {other:?}"),
        }
        let cfg = SolverConfig {
            settle_threshold: 0,
            ..SolverConfig::default()
        };
        match Simulation::new(5, 5, cfg) {
            Err(SimulationError::Config(ConfigError::ZeroSettleThreshold)) => {}
            other => panic!("expected Config(ZeroSettleThreshold), got {other:?}"),
        }
    }

    #[test]
    fn step_applies_edits_then_ticks() {
        let mut s = sim();
        let report = s
            .step(&[
                Edit::SetObstacle { x: 2, y: 3 },
                Edit::AddLiquid {
                    x: 2,
                    y: 2,
                    amount: 1.0,
                },
            ])
            .unwrap();
        assert_eq!(report.tick, TickId(1));
        assert_eq!(s.current_tick(), TickId(1));
        assert_eq!(s.last_report(), &report);
        // (2,2) sits on the new obstacle, so the liquid spreads sideways.
        assert_eq!(report.lateral_transfers, 2);
        assert_eq!(s.lattice().total_liquid(), 1.0);
    }

    #[test]
    fn rejected_batch_changes_nothing() {
        let mut s = sim();
        let hash = s.lattice().state_hash();
        let err = s
            .step(&[
                Edit::AddLiquid {
                    x: 1,
                    y: 1,
                    amount: 1.0,
                },
                Edit::SetObstacle { x: 7, y: 1 },
            ])
            .unwrap_err();
        assert!(matches!(err, LatticeError::OutOfBounds { x: 7, y: 1, .. }));
        assert_eq!(s.lattice().state_hash(), hash);
        assert_eq!(s.current_tick(), TickId(0));
    }

    #[test]
    fn run_until_settled_reports_tick_count() {
        let mut s = sim();
        assert_eq!(s.run_until_settled(10), Some(3));
        assert!(s.last_report().is_quiescent());

        s.lattice_mut().add_liquid_at(1, 1, 5.0).unwrap();
        assert_eq!(s.run_until_settled(1), None);
    }

    #[test]
    fn resize_and_view_go_through_the_lattice() {
        let mut s = sim();
        s.lattice_mut().add_liquid_at(3, 3, 2.0).unwrap();
        assert_eq!(s.resize(4, 4).unwrap(), 2.0);
        assert_eq!(s.lattice().len(), 16);
        let v = s.view(1, 1).unwrap();
        assert_eq!(v.liquid, 0.0);
        assert_eq!(s.views().count(), 16);
        assert!(s.view(4, 4).is_err());
    }
}
