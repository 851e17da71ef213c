//! Dense cost matrix.

/// A dense n×n edge-weight matrix stored in row-major order.
///
/// Backs both the distance and the time view of a campus graph. Weights
/// are not required to be symmetric, although coordinate-derived campus
/// instances are.
///
/// # Examples
///
/// ```
/// use campus_nav::graph::CostMatrix;
///
/// let m = CostMatrix::from_data(2, vec![0.0, 5.0, 5.0, 0.0]).unwrap();
/// assert_eq!(m.get(0, 1), 5.0);
/// assert_eq!(m.size(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CostMatrix {
    data: Vec<f64>,
    size: usize,
}

impl CostMatrix {
    /// Creates a cost matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Creates a cost matrix from an explicit n×n grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Returns the weight of the edge from `from` to `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the weight of the edge from `from` to `to`.
    pub fn set(&mut self, from: usize, to: usize, weight: f64) {
        self.data[from * self.size + to] = weight;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Returns the nearest neighbor of `from` among the given candidates,
    /// breaking ties toward the earlier candidate.
    ///
    /// Returns `None` if `candidates` is empty.
    pub fn nearest_neighbor(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        candidates.iter().copied().fold(None, |best, c| match best {
            Some(b) if self.get(from, b) <= self.get(from, c) => Some(b),
            _ => Some(c),
        })
    }
}
