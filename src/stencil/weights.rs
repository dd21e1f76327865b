use nalgebra::{DMatrix, DVector};

use crate::apply::convolve_same;
use crate::error::StencilError;
use crate::stencil::offsets::symmetric_offsets;

/// Exact for the factorials realistic stencil widths produce; stays well
/// inside f64's integer range.
fn factorial(k: u32) -> f64 {
    (1..=k).fold(1.0, |acc, i| acc * i as f64)
}

/// Weights for a symmetric `num_points`-wide stencil approximating the
/// `derivative`-th derivative on a grid with spacing `dx`.
///
/// The weights are aligned with [`symmetric_offsets`]: the weight at
/// position `k` multiplies the sample at relative offset `offsets[k]`.
/// They solve the system `K w = y` where row `i` of `K` holds the
/// Taylor-expansion terms of order `i` and `y` selects the requested
/// derivative (`y[derivative] = derivative! / dx^derivative`).
///
/// Each column of `K` is normalized by the factorial of that offset's
/// absolute value, not by the row order `i!` of the textbook derivation.
/// At width 3 the two agree; at width 5 and up they do not, and this
/// function keeps the `|offset|!` normalization. See DESIGN.md.
pub fn get_stencil(
    derivative: usize,
    num_points: usize,
    dx: f64,
) -> Result<Vec<f64>, StencilError> {
    let offsets = symmetric_offsets(num_points)?;
    if derivative >= num_points {
        return Err(StencilError::InvalidConfiguration(format!(
            "derivative {derivative} needs more than {num_points} points"
        )));
    }
    if !dx.is_finite() || dx <= 0.0 {
        return Err(StencilError::InvalidConfiguration(format!(
            "dx must be positive and finite, got {dx}"
        )));
    }

    let kernel = DMatrix::from_fn(num_points, num_points, |i, j| {
        (offsets[j] as f64).powi(i as i32) / factorial(offsets[j].unsigned_abs())
    });
    let mut y: DVector<f64> = DVector::zeros(num_points);
    y[derivative] = factorial(derivative as u32) / dx.powi(derivative as i32);

    match kernel.lu().solve(&y) {
        Some(w) => Ok(w.iter().copied().collect()),
        None => Err(StencilError::SingularSystem { num_points }),
    }
}

/// [`get_stencil`] on a unit-spaced grid.
pub fn get_stencil_unit(derivative: usize, num_points: usize) -> Result<Vec<f64>, StencilError> {
    get_stencil(derivative, num_points, 1.0)
}

/// A solved stencil: neighbor offsets paired with their weights.
///
/// A pure value with no interior state; callers typically solve once and
/// reuse it across many applications.
#[derive(Debug, Clone, PartialEq)]
pub struct Stencil1D {
    offsets: Vec<i32>,
    weights: Vec<f64>,
}

impl Stencil1D {
    /// Solves for a symmetric stencil, pairing the weights with their
    /// offsets.
    pub fn symmetric(
        derivative: usize,
        num_points: usize,
        dx: f64,
    ) -> Result<Self, StencilError> {
        let offsets = symmetric_offsets(num_points)?;
        let weights = get_stencil(derivative, num_points, dx)?;
        Ok(Stencil1D { offsets, weights })
    }

    pub fn offsets(&self) -> &[i32] {
        &self.offsets
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn width(&self) -> usize {
        self.weights.len()
    }

    /// Same-length application to a sample array, zero-padded at the
    /// boundaries. Construction guarantees an odd width, so this cannot
    /// fail the way [`crate::apply_stencil`] can on foreign weights.
    pub fn apply(&self, array: &[f64]) -> Vec<f64> {
        convolve_same(array, &self.weights)
    }
}
