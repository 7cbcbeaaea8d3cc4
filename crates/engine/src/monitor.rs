//! Plant monitor (OPS-010).
//!
//! Bounded rolling history of recent engine outputs. The monitor is an
//! explicitly constructed context object, owned by the application root
//! and passed down by reference — the engine itself holds no globals, so
//! independent call sites with different inputs can never contaminate
//! each other's history.
//!
//! Both channels are ring buffers: once a channel reaches capacity the
//! oldest sample is evicted first.

use std::collections::VecDeque;

use serde::Serialize;

use crate::decomposition::SimulationResult;
use crate::optimizer::OptimizationResult;

/// Default number of samples retained per channel.
pub const DEFAULT_MONITOR_CAPACITY: usize = 120;

/// Rolling history of recent simulation and optimization results.
#[derive(Debug, Clone, Serialize)]
pub struct PlantMonitor {
    capacity: usize,
    simulations: VecDeque<SimulationResult>,
    optimizations: VecDeque<OptimizationResult>,
}

impl Default for PlantMonitor {
    fn default() -> Self {
        Self::new(DEFAULT_MONITOR_CAPACITY)
    }
}

impl PlantMonitor {
    /// Create a monitor retaining up to `capacity` samples per channel.
    /// A zero capacity is bumped to one sample.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            simulations: VecDeque::with_capacity(capacity),
            optimizations: VecDeque::with_capacity(capacity),
        }
    }

    /// Configured per-channel capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Record a simulation pass, evicting the oldest sample when full.
    pub fn record_simulation(&mut self, result: SimulationResult) {
        if self.simulations.len() == self.capacity {
            self.simulations.pop_front();
        }
        self.simulations.push_back(result);
    }

    /// Record an optimization pass, evicting the oldest sample when full.
    pub fn record_optimization(&mut self, result: OptimizationResult) {
        if self.optimizations.len() == self.capacity {
            self.optimizations.pop_front();
        }
        self.optimizations.push_back(result);
    }

    /// Most recent simulation result, if any.
    pub fn latest_simulation(&self) -> Option<&SimulationResult> {
        self.simulations.back()
    }

    /// Most recent optimization result, if any.
    pub fn latest_optimization(&self) -> Option<&OptimizationResult> {
        self.optimizations.back()
    }

    /// Number of retained simulation samples.
    pub fn simulation_count(&self) -> usize {
        self.simulations.len()
    }

    /// Number of retained optimization samples.
    pub fn optimization_count(&self) -> usize {
        self.optimizations.len()
    }

    /// Retained simulation samples, oldest first.
    pub fn simulations(&self) -> impl Iterator<Item = &SimulationResult> {
        self.simulations.iter()
    }

    /// Mean cycle efficiency over the retained simulation window, 0 when
    /// the window is empty.
    pub fn average_cycle_efficiency(&self) -> f32 {
        if self.simulations.is_empty() {
            return 0.0;
        }
        let sum: f32 = self.simulations.iter().map(|s| s.cycle_efficiency).sum();
        sum / self.simulations.len() as f32
    }
}

// =============================================================================
// Unit tests
// =============================================================================
