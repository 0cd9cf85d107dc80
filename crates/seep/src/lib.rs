//! Seep: a grid liquid-flow cellular automaton.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Seep sub-crates. For most users, adding `seep` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use seep::prelude::*;
//!
//! // A 7×6 container with a wall down the middle of the floor.
//! let mut sim = Simulation::new(7, 6, SolverConfig::default()).unwrap();
//! sim.step(&[
//!     Edit::SetObstacle { x: 3, y: 4 },
//!     Edit::AddLiquid { x: 3, y: 1, amount: 3.0 },
//! ])
//! .unwrap();
//!
//! let ticks = sim.run_until_settled(5_000).expect("container settles");
//! assert!(ticks > 0);
//! assert!((sim.lattice().total_liquid() - 3.0).abs() < 1e-9);
//! assert_eq!(sim.cell_at(3, 4).unwrap().liquid(), 0.0);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `seep-core` | Indices, cell kinds, flow bits, error types |
//! | [`engine`] | `seep-engine` | Lattice, solver, views, edits, lockstep wrapper |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and errors (`seep-core`).
///
/// Contains [`types::CellKind`], [`types::Direction`], [`types::FlowBits`],
/// and the error enums [`types::LatticeError`] and [`types::ConfigError`].
pub use seep_core as types;

/// Lattice storage and the flow solver (`seep-engine`).
///
/// [`engine::Lattice`] and [`engine::Solver`] for direct control,
/// [`engine::Simulation`] for a single lockstep handle.
pub use seep_engine as engine;

/// Common imports for typical Seep usage.
///
/// ```rust
/// use seep::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use seep_core::{CellIndex, CellKind, Direction, FlowBits, TickId};

    // Errors
    pub use seep_core::{ConfigError, LatticeError};

    // Engine
    pub use seep_engine::{
        Cell, CellView, Edit, Lattice, Simulation, SimulationError, Solver, SolverConfig,
        StrokeMode, TickReport, WallStroke,
    };
}
