//! Solver tuning constants and their validation.
//!
//! [`SolverConfig`] is plain data. [`validate()`](SolverConfig::validate)
//! checks the numeric invariants once at startup; [`Solver::new`](crate::Solver::new)
//! refuses configurations that fail it, so the per-tick path never has
//! to re-check.

use seep_core::ConfigError;

/// Tuning constants for [`Solver`](crate::Solver).
#[derive(Clone, Debug, PartialEq)]
pub struct SolverConfig {
    /// Liquid a cell holds before it is "full". Downward flow fills the
    /// cell below up to this level. Default: 1.0.
    pub capacity: f64,
    /// Maximum liquid a cell may hold under pressure. Anything above it
    /// is pushed upward. Default: 4.0.
    pub compression_limit: f64,
    /// Share of the level difference moved to a lower side neighbour in
    /// one step. Default: 0.25.
    pub lateral_fraction: f64,
    /// Consecutive calm ticks before a cell settles. Default: 3.
    pub settle_threshold: u32,
    /// Transfers below this quantity are skipped. Default: 1e-4.
    pub min_flow: f64,
    /// Net per-tick change below which a cell counts as calm. Default: 1e-4.
    pub settle_epsilon: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            capacity: 1.0,
            compression_limit: 4.0,
            lateral_fraction: 0.25,
            settle_threshold: 3,
            min_flow: 1e-4,
            settle_epsilon: 1e-4,
        }
    }
}

impl SolverConfig {
    /// Check every structural invariant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.capacity.is_finite() || self.capacity <= 0.0 {
            return Err(ConfigError::InvalidCapacity {
                value: self.capacity,
            });
        }
        if !self.compression_limit.is_finite() || self.compression_limit < self.capacity {
            return Err(ConfigError::InvalidCompressionLimit {
                value: self.compression_limit,
                capacity: self.capacity,
            });
        }
        // Above 0.5 two neighbours would overshoot each other.
        if !(self.lateral_fraction > 0.0 && self.lateral_fraction <= 0.5) {
            return Err(ConfigError::InvalidLateralFraction {
                value: self.lateral_fraction,
            });
        }
        if !self.min_flow.is_finite() || self.min_flow <= 0.0 || self.min_flow >= self.capacity {
            return Err(ConfigError::InvalidMinFlow {
                value: self.min_flow,
            });
        }
        if !self.settle_epsilon.is_finite()
            || self.settle_epsilon <= 0.0
            || self.settle_epsilon > self.min_flow
        {
            return Err(ConfigError::InvalidSettleEpsilon {
                value: self.settle_epsilon,
                min_flow: self.min_flow,
            });
        }
        if self.settle_threshold == 0 {
            return Err(ConfigError::ZeroSettleThreshold);
        }
        Ok(())
    }
}
