//! Core types for the Seep liquid simulation.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the primitives shared by the lattice, the solver, and any renderer
//! reading simulation state: cell identifiers, cell classification,
//! flow-direction bits, and error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod flow;
pub mod id;
pub mod kind;

pub use error::{ConfigError, LatticeError};
pub use flow::{Direction, FlowBits};
pub use id::{CellIndex, TickId};
pub use kind::CellKind;
