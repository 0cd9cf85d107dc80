//! Lattice storage and the liquid-flow solver.
//!
//! A [`Lattice`] owns a dense row-major array of [`Cell`]s with
//! precomputed 4-connected neighbour indices. The host paints obstacles
//! and injects liquid between ticks; a [`Solver`] advances the lattice
//! one tick at a time, moving liquid down, sideways, and (under
//! compression) up, and parking cells that stopped changing.
//!
//! [`Simulation`] bundles one lattice with one solver for hosts that
//! want a single lockstep handle.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod config;
pub mod edit;
pub mod hash;
pub mod lattice;
mod neighbours;
pub mod report;
pub mod solver;
pub mod stroke;
pub mod view;
pub mod world;

pub use cell::Cell;
pub use config::SolverConfig;
pub use edit::Edit;
pub use lattice::Lattice;
pub use report::TickReport;
pub use solver::Solver;
pub use stroke::{StrokeMode, WallStroke};
pub use view::CellView;
pub use world::{Simulation, SimulationError};
