//! Error types for the Seep liquid simulation.
//!
//! Two families: [`LatticeError`] for precondition violations at the
//! lattice boundary (construction, coordinates, injections) and
//! [`ConfigError`] for solver configuration rejected at startup. The
//! solver itself is total and has no error type.

use std::error::Error;
use std::fmt;

/// Errors raised synchronously by lattice construction and host edits.
///
/// All variants are programming errors on the caller's side; none is
/// transient and nothing inside the simulation retries.
#[derive(Clone, Debug, PartialEq)]
pub enum LatticeError {
    /// Lattice dimensions leave no interior cell, or the cell count
    /// does not fit a [`CellIndex`](crate::CellIndex).
    InvalidDimensions {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
    /// A coordinate lies outside `[0, width) × [0, height)`.
    OutOfBounds {
        /// Requested column.
        x: i32,
        /// Requested row.
        y: i32,
        /// Lattice width.
        width: u32,
        /// Lattice height.
        height: u32,
    },
    /// A liquid injection was negative, NaN, or infinite.
    InvalidAmount {
        /// The rejected amount.
        amount: f64,
    },
}

impl fmt::Display for LatticeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => write!(
                f,
                "invalid lattice dimensions {width}x{height}: both must be at least 3"
            ),
            Self::OutOfBounds {
                x,
                y,
                width,
                height,
            } => write!(
                f,
                "coordinate ({x}, {y}) out of bounds for {width}x{height} lattice"
            ),
            Self::InvalidAmount { amount } => {
                write!(f, "liquid amount must be finite and non-negative, got {amount}")
            }
        }
    }
}

impl Error for LatticeError {}

/// Errors detected while validating a solver configuration.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// `capacity` is NaN, infinite, zero, or negative.
    InvalidCapacity {
        /// The invalid value.
        value: f64,
    },
    /// `compression_limit` is not finite or is below `capacity`.
    InvalidCompressionLimit {
        /// The invalid value.
        value: f64,
        /// The configured capacity it was compared against.
        capacity: f64,
    },
    /// `lateral_fraction` is outside `(0, 0.5]`.
    InvalidLateralFraction {
        /// The invalid value.
        value: f64,
    },
    /// `min_flow` is not finite, not positive, or not below `capacity`.
    InvalidMinFlow {
        /// The invalid value.
        value: f64,
    },
    /// `settle_epsilon` is not finite, not positive, or exceeds `min_flow`.
    InvalidSettleEpsilon {
        /// The invalid value.
        value: f64,
        /// The configured minimum flow it was compared against.
        min_flow: f64,
    },
    /// `settle_threshold` is zero.
    ZeroSettleThreshold,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCapacity { value } => {
                write!(f, "capacity must be finite and positive, got {value}")
            }
            Self::InvalidCompressionLimit { value, capacity } => write!(
                f,
                "compression_limit must be finite and >= capacity ({capacity}), got {value}"
            ),
            Self::InvalidLateralFraction { value } => {
                write!(f, "lateral_fraction must be in (0, 0.5], got {value}")
            }
            Self::InvalidMinFlow { value } => {
                write!(f, "min_flow must be finite, positive and below capacity, got {value}")
            }
            Self::InvalidSettleEpsilon { value, min_flow } => write!(
                f,
                "settle_epsilon must be finite, positive and <= min_flow ({min_flow}), got {value}"
            ),
            Self::ZeroSettleThreshold => write!(f, "settle_threshold must be at least 1"),
        }
    }
}

impl Error for ConfigError {}
