//! Spiral arm simulation: probabilistic activation spreading over a polar
//! grid of concentric rings.
//!
//! - [`topology`]: ring sizes and neighbor index mapping
//! - [`engine`]: the per-step stochastic spreading rule
//! - [`simulation`]: bounded run loop with a per-step observer hook

pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod simulation;
pub mod state;
pub mod topology;
pub mod utils;

pub use config::SimConfig;
pub use engine::ActivationEngine;
pub use error::{SpiralError, SpiralResult};
pub use simulation::Simulation;
pub use state::ActivationState;
pub use topology::{cell_count, cross_ring_neighbors, same_ring_neighbors, Topology};
