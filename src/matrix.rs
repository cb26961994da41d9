//! Dense square `f64` matrix on a flat row-major buffer.

/// A square N×N matrix of `f64` values.
///
/// Storage is a single flat buffer indexed by `i * n + j`, so pheromone
/// and heuristic grids can be updated in place without per-cell
/// allocation.
///
/// # Examples
///
/// ```
/// use aco_tsp::SquareMatrix;
///
/// let m = SquareMatrix::from_rows(vec![
///     vec![0.0, 1.0],
///     vec![1.0, 0.0],
/// ]).unwrap();
/// assert_eq!(m.dim(), 2);
/// assert_eq!(m.get(0, 1), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SquareMatrix {
    n: usize,
    data: Vec<f64>,
}

impl SquareMatrix {
    /// Creates an N×N matrix filled with `value`.
    pub fn filled(n: usize, value: f64) -> Self {
        Self {
            n,
            data: vec![value; n * n],
        }
    }

    /// Builds a matrix from nested rows.
    ///
    /// Returns an error if `rows` is empty or any row length differs
    /// from the number of rows.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, String> {
        let n = rows.len();
        if n == 0 {
            return Err("matrix must have at least one row".into());
        }
        let mut data = Vec::with_capacity(n * n);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(format!(
                    "matrix must be square: row {i} has {} columns, expected {n}",
                    row.len()
                ));
            }
            data.extend_from_slice(row);
        }
        Ok(Self { n, data })
    }

    /// The dimension N.
    #[inline]
    pub fn dim(&self) -> usize {
        self.n
    }

    /// Reads the value at `(i, j)`.
    ///
    /// # Panics
    /// Panics if `i` or `j` is out of range.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.n + j]
    }

    /// Writes the value at `(i, j)`.
    ///
    /// # Panics
    /// Panics if `i` or `j` is out of range.
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        self.data[i * self.n + j] = value;
    }

    /// Adds `delta` to the value at `(i, j)`.
    #[inline]
    pub fn add(&mut self, i: usize, j: usize, delta: f64) {
        self.data[i * self.n + j] += delta;
    }

    /// Multiplies every entry by `factor` in place.
    pub fn scale(&mut self, factor: f64) {
        for v in &mut self.data {
            *v *= factor;
        }
    }

    /// Sets every diagonal entry to `value`.
    pub fn fill_diagonal(&mut self, value: f64) {
        for i in 0..self.n {
            self.data[i * self.n + i] = value;
        }
    }
}
