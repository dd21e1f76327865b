use crate::error::StencilError;

/// Neighbor offsets for a symmetric stencil spanning `num_points` grid
/// points, ascending and centered on zero.
///
/// E.g. `num_points = 5` gives `[-2, -1, 0, 1, 2]`. The count must be odd
/// so the stencil has a center point.
pub fn symmetric_offsets(num_points: usize) -> Result<Vec<i32>, StencilError> {
    if num_points == 0 || num_points % 2 == 0 {
        return Err(StencilError::InvalidConfiguration(format!(
            "num_points must be a positive odd integer, got {num_points}"
        )));
    }
    let half = (num_points / 2) as i32;
    let mut offsets = Vec::with_capacity(num_points);
    offsets.extend((1..=half).rev().map(|o| -o));
    offsets.push(0);
    offsets.extend(1..=half);
    Ok(offsets)
}
