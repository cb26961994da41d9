//! ACO execution loop.

use super::config::AcoConfig;
use super::types::TspInstance;
use crate::matrix::SquareMatrix;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Floor applied to the iteration-best length before computing the
/// pheromone deposit, so a zero-length degenerate tour cannot produce
/// an infinite deposit. Tests depend on this exact value; do not tune.
const MIN_DEPOSIT_LENGTH: f64 = 1e-9;

/// Stride used to derive one random stream per ant pass from the run
/// seed (64-bit golden ratio, as in splitmix64).
const STREAM_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// Result of an ACO run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoResult {
    /// The best tour found: a permutation of all node indices, starting
    /// at the configured start node, interpreted as a cycle.
    pub best_tour: Vec<usize>,

    /// Total cyclic length of `best_tour`.
    pub best_length: f64,

    /// Global-best length at the end of each iteration. Non-increasing,
    /// with exactly `iterations` entries.
    pub history: Vec<f64>,

    /// The seed the run actually used. Equals `config.seed` when set,
    /// otherwise the entropy-drawn seed, so any run can be reproduced
    /// by passing this value back via [`AcoConfig::with_seed`].
    pub seed: u64,
}

/// Executes the Ant Colony Optimization algorithm.
///
/// # Usage
///
/// ```
/// use aco_tsp::aco::{AcoConfig, AcoRunner, TspInstance};
///
/// let instance = TspInstance::from_rows(vec![
///     vec![0.0, 1.0, 2.0],
///     vec![1.0, 0.0, 1.0],
///     vec![2.0, 1.0, 0.0],
/// ]).unwrap();
/// let config = AcoConfig::default().with_iterations(10).with_seed(42);
/// let result = AcoRunner::run(&instance, &config, 0).unwrap();
/// assert_eq!(result.best_tour[0], 0);
/// ```
pub struct AcoRunner;

impl AcoRunner {
    /// Runs the ACO optimization from `start`.
    ///
    /// Pheromone and heuristic state are rebuilt from scratch on every
    /// call; nothing persists between calls, and concurrent calls never
    /// share state.
    ///
    /// # Errors
    ///
    /// Returns an error if the instance has zero nodes, `start` is out
    /// of range, or the configuration is invalid ([`AcoConfig::validate`]).
    ///
    /// # Determinism
    ///
    /// With `config.seed` set, the run is reproducible bit for bit.
    /// Every ant pass draws from its own stream derived from the run
    /// seed and the pass index, so serial and parallel execution yield
    /// identical results.
    pub fn run(
        instance: &TspInstance,
        config: &AcoConfig,
        start: usize,
    ) -> Result<AcoResult, String> {
        config.validate()?;

        let n = instance.len();
        if n == 0 {
            return Err("instance must have at least one node".into());
        }
        if start >= n {
            return Err(format!("start node {start} out of range for {n} nodes"));
        }

        let seed = config.seed.unwrap_or_else(rand::random);

        // Single node: the only tour is the node itself, with no
        // simulation to run.
        if n == 1 {
            return Ok(AcoResult {
                best_tour: vec![start],
                best_length: 0.0,
                history: vec![0.0],
                seed,
            });
        }
        let mut colony = Colony::new(instance, config, start, seed);

        let mut best_tour: Vec<usize> = Vec::new();
        let mut best_length = f64::INFINITY;
        let mut history = Vec::with_capacity(config.iterations);

        for iteration in 0..config.iterations {
            let tours = colony.construct_all(iteration);

            colony.evaporate();

            let best_idx = iteration_best(&tours);
            let (iter_tour, iter_length) = &tours[best_idx];
            colony.deposit(iter_tour, *iter_length);

            if *iter_length < best_length {
                best_length = *iter_length;
                best_tour = iter_tour.clone();
            }
            history.push(best_length);
        }

        Ok(AcoResult {
            best_tour,
            best_length,
            history,
            seed,
        })
    }
}

/// Index of the shortest tour, ties broken by first occurrence in
/// ant-construction order.
fn iteration_best(tours: &[(Vec<usize>, f64)]) -> usize {
    let mut best = 0;
    for (i, t) in tours.iter().enumerate().skip(1) {
        if t.1 < tours[best].1 {
            best = i;
        }
    }
    best
}

/// Pheromone and heuristic state for one solve.
///
/// τ and η are exclusively owned here for the lifetime of the run; τ is
/// read-only during tour construction and mutated only between the
/// construction phases of consecutive iterations.
struct Colony<'a> {
    instance: &'a TspInstance,
    config: &'a AcoConfig,
    start: usize,
    seed: u64,
    tau: SquareMatrix,
    eta: SquareMatrix,
}

impl<'a> Colony<'a> {
    fn new(instance: &'a TspInstance, config: &'a AcoConfig, start: usize, seed: u64) -> Self {
        let mut tau = SquareMatrix::filled(instance.len(), 1.0);
        tau.fill_diagonal(0.0);
        Self {
            instance,
            config,
            start,
            seed,
            tau,
            eta: instance.heuristic(),
        }
    }

    /// The random stream for one ant pass, derived from the run seed
    /// and the flat pass index.
    fn ant_rng(&self, iteration: usize, ant: usize) -> ChaCha8Rng {
        let index = (iteration * self.config.ants + ant) as u64;
        ChaCha8Rng::seed_from_u64(self.seed.wrapping_add((index + 1).wrapping_mul(STREAM_STRIDE)))
    }

    /// Runs all ant passes for one iteration and evaluates each tour.
    fn construct_all(&self, iteration: usize) -> Vec<(Vec<usize>, f64)> {
        let build = |ant: usize| {
            let mut rng = self.ant_rng(iteration, ant);
            let tour = self.construct_tour(&mut rng);
            let length = self.instance.tour_length(&tour);
            (tour, length)
        };

        #[cfg(feature = "parallel")]
        if self.config.parallel {
            return (0..self.config.ants).into_par_iter().map(build).collect();
        }

        (0..self.config.ants).map(build).collect()
    }

    /// Builds one complete tour rooted at the start node.
    fn construct_tour(&self, rng: &mut ChaCha8Rng) -> Vec<usize> {
        let n = self.instance.len();
        let mut tour = Vec::with_capacity(n);
        let mut visited = vec![false; n];

        tour.push(self.start);
        visited[self.start] = true;

        let mut current = self.start;
        for _ in 1..n {
            let next = self.select_next(current, &visited, rng);
            tour.push(next);
            visited[next] = true;
            current = next;
        }
        tour
    }

    /// Samples the next node among the unvisited candidates with
    /// probability proportional to `τ^α · η^β`.
    fn select_next(&self, current: usize, visited: &[bool], rng: &mut ChaCha8Rng) -> usize {
        let candidates: Vec<usize> = (0..visited.len()).filter(|&c| !visited[c]).collect();

        let weights: Vec<f64> = candidates
            .iter()
            .map(|&c| {
                self.tau.get(current, c).powf(self.config.alpha)
                    * self.eta.get(current, c).powf(self.config.beta)
            })
            .collect();

        // Degenerate weight sums fall back to a uniform pick: all
        // candidates numerically zero (η underflow under a large β, or
        // a fully evaporated trail), or a non-finite sum (η overflow
        // when a zero-cost edge meets a large β).
        let total: f64 = weights.iter().sum();
        if !(total > 0.0) || !total.is_finite() {
            return candidates[rng.random_range(0..candidates.len())];
        }

        let r = rng.random_range(0.0..total);
        let mut cumulative = 0.0;
        for (&c, &w) in candidates.iter().zip(&weights) {
            cumulative += w;
            if r < cumulative {
                return c;
            }
        }
        // Rounding can leave r marginally above the final cumulative sum.
        candidates[candidates.len() - 1]
    }

    /// Global evaporation: `τ *= (1 - ρ)` on every entry. The diagonal
    /// starts at 0 and stays 0.
    fn evaporate(&mut self) {
        self.tau.scale(1.0 - self.config.rho);
    }

    /// Elitist deposit along one tour, including the closing edge.
    /// Pheromone is reinforced symmetrically even though costs are
    /// directed.
    fn deposit(&mut self, tour: &[usize], length: f64) {
        let amount = self.config.q / length.max(MIN_DEPOSIT_LENGTH);
        let n = tour.len();
        for k in 0..n {
            let a = tour[k];
            let b = tour[(k + 1) % n];
            self.tau.add(a, b, amount);
            self.tau.add(b, a, amount);
        }
    }
}
