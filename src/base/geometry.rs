use crate::StrError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Defines the sides of a rectangular (box-shaped) domain
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord, Deserialize, Serialize)]
pub enum Face {
    /// Side with minimum x
    Xmin,

    /// Side with maximum x
    Xmax,

    /// Side with minimum y
    Ymin,

    /// Side with maximum y
    Ymax,

    /// Side with minimum z
    Zmin,

    /// Side with maximum z
    Zmax,
}

impl Face {
    /// Returns the face normal to the given axis
    ///
    /// Panics if `dim > 2`.
    pub fn new(dim: usize, max: bool) -> Self {
        match (dim, max) {
            (0, false) => Face::Xmin,
            (0, true) => Face::Xmax,
            (1, false) => Face::Ymin,
            (1, true) => Face::Ymax,
            (2, false) => Face::Zmin,
            (2, true) => Face::Zmax,
            _ => panic!("the axis must be 0, 1, or 2"),
        }
    }

    /// Returns the axis normal to the face
    pub fn dim(&self) -> usize {
        match self {
            Face::Xmin | Face::Xmax => 0,
            Face::Ymin | Face::Ymax => 1,
            Face::Zmin | Face::Zmax => 2,
        }
    }

    /// Returns the component of the outward unit normal along `dim()`
    pub fn outward_sign(&self) -> f64 {
        match self {
            Face::Xmin | Face::Ymin | Face::Zmin => -1.0,
            Face::Xmax | Face::Ymax | Face::Zmax => 1.0,
        }
    }
}

/// Holds the center of a grid face lying on the domain boundary
#[derive(Clone, Debug, PartialEq)]
pub struct BoundaryFace {
    /// Side of the domain containing the face
    pub face: Face,

    /// Index of the adjacent cell
    pub cell: usize,

    /// Coordinates of the face center (the evaluation point)
    pub center: Vec<f64>,
}

/// Describes a structured (tensor-product) grid over a rectangular domain
///
/// The grid itself is built by the host framework; this descriptor only
/// provides the bounding box, the spacing, and the evaluation points needed
/// to classify and check the boundary.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Grid {
    /// Space dimension
    pub ndim: usize,

    /// Coordinates of the lower-left corner (len = ndim)
    pub lower_left: Vec<f64>,

    /// Coordinates of the upper-right corner (len = ndim)
    pub upper_right: Vec<f64>,

    /// Number of cells along each direction (len = ndim)
    pub resolution: Vec<usize>,
}

impl Grid {
    /// Allocates a new instance
    pub fn new(lower_left: &[f64], upper_right: &[f64], resolution: &[usize]) -> Result<Self, StrError> {
        let grid = Grid {
            ndim: lower_left.len(),
            lower_left: lower_left.to_vec(),
            upper_right: upper_right.to_vec(),
            resolution: resolution.to_vec(),
        };
        grid.check()?;
        Ok(grid)
    }

    /// Checks the consistency of the data (e.g., after deserialization)
    pub fn check(&self) -> Result<(), StrError> {
        if self.ndim < 1 || self.ndim > 3 {
            return Err("ndim must be 1, 2, or 3");
        }
        if self.lower_left.len() != self.ndim || self.upper_right.len() != self.ndim {
            return Err("corner coordinates must have length equal to ndim");
        }
        if self.resolution.len() != self.ndim {
            return Err("resolution must have length equal to ndim");
        }
        for i in 0..self.ndim {
            if self.resolution[i] < 1 {
                return Err("resolution must be ≥ 1 along every direction");
            }
            if !(self.upper_right[i] > self.lower_left[i]) {
                return Err("upper-right corner must be greater than lower-left corner");
            }
        }
        Ok(())
    }

    /// Returns the minimum coordinates of the bounding box
    pub fn bbox_min(&self) -> &[f64] {
        &self.lower_left
    }

    /// Returns the maximum coordinates of the bounding box
    pub fn bbox_max(&self) -> &[f64] {
        &self.upper_right
    }

    /// Returns the cell size along each direction
    pub fn spacing(&self) -> Vec<f64> {
        (0..self.ndim)
            .map(|i| (self.upper_right[i] - self.lower_left[i]) / (self.resolution[i] as f64))
            .collect()
    }

    /// Returns the smallest cell size over all directions
    pub fn min_spacing(&self) -> f64 {
        self.spacing().into_iter().fold(f64::INFINITY, f64::min)
    }

    /// Returns the largest absolute coordinate of the bounding box (at least 1.0)
    ///
    /// Used to estimate the rounding error of coordinates at the domain extent.
    pub fn max_abs_coord(&self) -> f64 {
        self.lower_left
            .iter()
            .chain(self.upper_right.iter())
            .fold(1.0, |acc, x| f64::max(acc, f64::abs(*x)))
    }

    /// Returns the total number of cells
    pub fn ncell(&self) -> usize {
        self.resolution.iter().product()
    }

    /// Returns the (i, j, k) indices of a cell
    fn cell_indices(&self, cell: usize) -> Vec<usize> {
        let mut rem = cell;
        let mut indices = vec![0; self.ndim];
        for i in 0..self.ndim {
            indices[i] = rem % self.resolution[i];
            rem /= self.resolution[i];
        }
        indices
    }

    /// Returns the center of a cell
    pub fn cell_center(&self, cell: usize) -> Vec<f64> {
        let h = self.spacing();
        self.cell_indices(cell)
            .iter()
            .enumerate()
            .map(|(i, n)| self.lower_left[i] + (*n as f64 + 0.5) * h[i])
            .collect()
    }

    /// Returns the centers of all cells (interior evaluation points)
    pub fn cell_centers(&self) -> Vec<Vec<f64>> {
        (0..self.ncell()).map(|c| self.cell_center(c)).collect()
    }

    /// Returns all faces on the domain boundary (boundary evaluation points)
    ///
    /// The faces are ordered by cell and then by axis (min side before max side).
    pub fn boundary_faces(&self) -> Vec<BoundaryFace> {
        let mut faces = Vec::new();
        for cell in 0..self.ncell() {
            let indices = self.cell_indices(cell);
            let center = self.cell_center(cell);
            for dim in 0..self.ndim {
                if indices[dim] == 0 {
                    let mut x = center.clone();
                    x[dim] = self.lower_left[dim];
                    faces.push(BoundaryFace {
                        face: Face::new(dim, false),
                        cell,
                        center: x,
                    });
                }
                if indices[dim] == self.resolution[dim] - 1 {
                    let mut x = center.clone();
                    x[dim] = self.upper_right[dim];
                    faces.push(BoundaryFace {
                        face: Face::new(dim, true),
                        cell,
                        center: x,
                    });
                }
            }
        }
        faces
    }

    /// Indicates whether the position lies within `eps` of the min or max side along `dim`
    pub fn near_side(&self, x: &[f64], dim: usize, max: bool, eps: f64) -> bool {
        if max {
            x[dim] > self.upper_right[dim] - eps
        } else {
            x[dim] < self.lower_left[dim] + eps
        }
    }

    /// Indicates whether the position lies within `eps` of any side of the domain
    pub fn on_boundary(&self, x: &[f64], eps: f64) -> bool {
        (0..self.ndim).any(|d| self.near_side(x, d, false, eps) || self.near_side(x, d, true, eps))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ndim = {}, lower_left = {:?}, upper_right = {:?}, resolution = {:?}",
            self.ndim, self.lower_left, self.upper_right, self.resolution
        )
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
