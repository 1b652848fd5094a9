//! The autopilot: a one-ply greedy movement heuristic.

pub mod greedy;

pub use greedy::GreedyPlanner;
