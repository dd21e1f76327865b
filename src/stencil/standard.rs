use crate::error::StencilError;
use crate::stencil::Stencil1D;

// The everyday symmetric stencils, by name.

pub fn smoothing(num_points: usize) -> Result<Stencil1D, StencilError> {
    Stencil1D::symmetric(0, num_points, 1.0)
}

pub fn first_derivative(num_points: usize, dx: f64) -> Result<Stencil1D, StencilError> {
    Stencil1D::symmetric(1, num_points, dx)
}

pub fn second_derivative(num_points: usize, dx: f64) -> Result<Stencil1D, StencilError> {
    Stencil1D::symmetric(2, num_points, dx)
}
