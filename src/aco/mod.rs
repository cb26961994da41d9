//! Ant Colony Optimization (ACO) for the TSP.
//!
//! A population of simulated ants builds tours edge by edge, choosing
//! the next node with probability proportional to `τ^α · η^β` where τ
//! is the accumulated pheromone trail and η the inverse-cost heuristic.
//! After every iteration the trail evaporates globally and the best
//! tour of that iteration deposits new pheromone along its edges
//! (elitist update).
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//!   Colony of Cooperating Agents"
//! - Dorigo & Stützle (2004), "Ant Colony Optimization"

mod config;
mod runner;
mod types;

pub use config::AcoConfig;
pub use runner::{AcoResult, AcoRunner};
pub use types::TspInstance;
