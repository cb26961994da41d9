//! ACO configuration.

/// Configuration for the Ant Colony Optimization algorithm.
///
/// # Examples
///
/// ```
/// use aco_tsp::aco::AcoConfig;
///
/// let config = AcoConfig::default()
///     .with_ants(20)
///     .with_iterations(100)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoConfig {
    /// Number of ants per iteration. Must be at least 1.
    pub ants: usize,

    /// Number of iterations. Must be at least 1. The run always
    /// executes the full count; there is no early stopping.
    pub iterations: usize,

    /// Pheromone influence exponent (α).
    pub alpha: f64,

    /// Heuristic influence exponent (β).
    pub beta: f64,

    /// Evaporation rate (ρ). Expected in `[0, 1)`; values outside that
    /// range are not rejected but degrade the search — ρ = 1 wipes the
    /// entire trail every iteration.
    pub rho: f64,

    /// Pheromone deposit constant (Q). Must be positive.
    pub q: f64,

    /// Random seed for reproducibility. `None` draws a fresh seed.
    pub seed: Option<u64>,

    /// Whether to construct ant tours in parallel using rayon.
    ///
    /// Requires the `parallel` feature; ignored otherwise. The result
    /// is identical either way because every ant pass uses its own
    /// derived random stream.
    pub parallel: bool,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            ants: 40,
            iterations: 150,
            alpha: 1.0,
            beta: 3.0,
            rho: 0.35,
            q: 100.0,
            seed: None,
            parallel: false,
        }
    }
}

impl AcoConfig {
    pub fn with_ants(mut self, ants: usize) -> Self {
        self.ants = ants;
        self
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    pub fn with_rho(mut self, rho: f64) -> Self {
        self.rho = rho;
        self
    }

    pub fn with_q(mut self, q: f64) -> Self {
        self.q = q;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.ants < 1 {
            return Err("ants must be at least 1".into());
        }
        if self.iterations < 1 {
            return Err("iterations must be at least 1".into());
        }
        if self.q <= 0.0 {
            return Err(format!("q must be positive, got {}", self.q));
        }
        Ok(())
    }
}
