//! Ant Colony Optimization for the Traveling Salesman Problem.
//!
//! Given a square matrix of pairwise travel costs, finds a low-cost
//! Hamiltonian cycle that visits every node exactly once and returns
//! to a fixed start node.
//!
//! - **[`SquareMatrix`]**: dense square grid of `f64` backed by a flat
//!   row-major buffer, used for costs, pheromone, and heuristic data.
//! - **[`TspInstance`](aco::TspInstance)**: a cost matrix plus the tour
//!   evaluation and heuristic-derivation primitives.
//! - **[`AcoRunner`](aco::AcoRunner)**: the colony loop — probabilistic
//!   tour construction, pheromone evaporation, and elitist deposit.
//!
//! # Architecture
//!
//! The solver is a pure in-memory computation: it does not fetch data,
//! render anything, or persist state between calls. Producers of the
//! cost matrix (routing services, synthetic generators) and consumers
//! of the result (maps, tables, charts) live entirely outside this
//! crate and interact with it through [`AcoRunner::run`](aco::AcoRunner::run).
//!
//! ACO is a metaheuristic: it converges empirically but carries no
//! optimality proof.

pub mod aco;
pub mod matrix;

pub use matrix::SquareMatrix;
