use super::Grid;

/// Holds samples of grid descriptors
pub struct SampleGrids {}

impl SampleGrids {
    /// Returns the grid of the decoupled tutorial: 300 m × 60 m with 100 × 1 cells
    ///
    /// ```text
    ///  60.0  +---+---+---+-- ··· --+---+
    ///        | 0 | 1 | 2 |   ···   |99 |
    ///   0.0  +---+---+---+-- ··· --+---+
    ///       0.0 3.0 6.0           297 300
    /// ```
    pub fn tutorial_decoupled() -> Grid {
        Grid {
            ndim: 2,
            lower_left: vec![0.0, 0.0],
            upper_right: vec![300.0, 60.0],
            resolution: vec![100, 1],
        }
    }

    /// Returns a unit square with n × n cells
    pub fn unit_square(n: usize) -> Grid {
        Grid {
            ndim: 2,
            lower_left: vec![0.0, 0.0],
            upper_right: vec![1.0, 1.0],
            resolution: vec![n, n],
        }
    }

    /// Returns a 1D column of length `length` with n cells
    pub fn column(length: f64, n: usize) -> Grid {
        Grid {
            ndim: 1,
            lower_left: vec![0.0],
            upper_right: vec![length],
            resolution: vec![n],
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
