//! TSP instance: cost matrix, tour evaluation, heuristic derivation.

use crate::matrix::SquareMatrix;

/// Added to every off-diagonal cost before inversion so that zero-cost
/// edges (duplicate locations) cannot divide by zero. Tests depend on
/// this exact value; do not tune it.
const ETA_EPSILON: f64 = 1e-9;

/// A TSP instance over a square matrix of pairwise travel costs.
///
/// `cost(i, j)` is the directed cost from node `i` to node `j`. Costs
/// must be non-negative and finite; the diagonal is conventionally 0
/// and is never traversed.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TspInstance {
    costs: SquareMatrix,
}

impl TspInstance {
    /// Wraps a cost matrix.
    pub fn new(costs: SquareMatrix) -> Self {
        Self { costs }
    }

    /// Builds an instance from nested cost rows.
    ///
    /// Returns an error if the rows do not form a non-empty square
    /// matrix.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, String> {
        Ok(Self::new(SquareMatrix::from_rows(rows)?))
    }

    /// Number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.costs.dim()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.costs.dim() == 0
    }

    /// Directed travel cost from `i` to `j`.
    #[inline]
    pub fn cost(&self, i: usize, j: usize) -> f64 {
        self.costs.get(i, j)
    }

    /// Total cyclic length of a tour: the sum over consecutive pairs
    /// plus the closing edge from the last node back to the first.
    ///
    /// The tour is traversed in the given order.
    pub fn tour_length(&self, tour: &[usize]) -> f64 {
        let mut total = 0.0;
        for w in tour.windows(2) {
            total += self.costs.get(w[0], w[1]);
        }
        if let (Some(&last), Some(&first)) = (tour.last(), tour.first()) {
            total += self.costs.get(last, first);
        }
        total
    }

    /// Derives the heuristic desirability matrix `η[i][j] = 1 / (cost + ε)`
    /// with a zero diagonal to forbid self-loops.
    pub fn heuristic(&self) -> SquareMatrix {
        let n = self.costs.dim();
        let mut eta = SquareMatrix::filled(n, 0.0);
        for i in 0..n {
            for j in 0..n {
                if i != j {
                    eta.set(i, j, 1.0 / (self.costs.get(i, j) + ETA_EPSILON));
                }
            }
        }
        eta
    }
}
