use num_traits::Float;

use crate::error::StencilError;

/// Same-length application of an odd-width stencil.
///
/// Weight `k` sits at offset `k - center`; neighbors outside the array
/// read as zero. Callers must have checked that `stencil.len()` is odd.
pub(crate) fn convolve_same<F: Float>(array: &[F], stencil: &[F]) -> Vec<F> {
    let center = (stencil.len() / 2) as isize;
    let len = array.len() as isize;
    (0..len)
        .map(|i| {
            let mut sum = F::zero();
            for (k, &w) in stencil.iter().enumerate() {
                let j = i + k as isize - center;
                if j >= 0 && j < len {
                    sum = sum + w * array[j as usize];
                }
            }
            sum
        })
        .collect()
}

/// Applies `stencil` to `array` as a same-length discrete convolution with
/// implicit zero padding, returning a new array of the same length.
///
/// The stencil is taken as weights aligned with ascending symmetric
/// offsets, so output position `i` is `sum_k stencil[k] * array[i + o_k]`
/// with `o_k = k - (n - 1) / 2`. This matches flipping the kernel and
/// running a "same"-mode convolution; here it is computed directly as the
/// offset-indexed sum. The stencil must have odd length so it has an
/// unambiguous center.
pub fn apply_stencil<F: Float>(array: &[F], stencil: &[F]) -> Result<Vec<F>, StencilError> {
    if stencil.len() % 2 == 0 {
        return Err(StencilError::InvalidConfiguration(format!(
            "stencil length must be odd to have a center, got {}",
            stencil.len()
        )));
    }
    Ok(convolve_same(array, stencil))
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn identity_kernel() {
        let array = [3.0, 1.0, 4.0, 1.0, 5.0];
        let out = apply_stencil(&array, &[1.0]).unwrap();
        assert_eq!(out, array.to_vec());
    }

    #[test]
    fn central_difference_on_ramp() {
        let array = [0.0, 1.0, 2.0, 3.0, 4.0];
        let out = apply_stencil(&array, &[-0.5, 0.0, 0.5]).unwrap();
        let expected = [0.5, 1.0, 1.0, 1.0, -1.5];
        for (o, e) in out.iter().zip(expected.iter()) {
            assert_approx_eq!(f64, *o, *e, epsilon = 1.0e-12);
        }
    }

    #[test]
    fn weight_offset_alignment() {
        // An off-center single weight shifts the signal, which pins down
        // which end of the stencil is the negative offset.
        let array = [1.0, 2.0, 3.0, 4.0];
        let shifted_left = apply_stencil(&array, &[0.0, 0.0, 1.0]).unwrap();
        assert_eq!(shifted_left, vec![2.0, 3.0, 4.0, 0.0]);
        let shifted_right = apply_stencil(&array, &[1.0, 0.0, 0.0]).unwrap();
        assert_eq!(shifted_right, vec![0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn zero_input_stays_zero() {
        for len in [1, 2, 7, 64] {
            let array = vec![0.0f64; len];
            let out = apply_stencil(&array, &[1.0, -2.0, 1.0]).unwrap();
            assert_eq!(out, array);
        }
    }

    #[test]
    fn length_preserved() {
        for len in 1..=9 {
            let array: Vec<f64> = (0..len).map(|i| i as f64).collect();
            for width in (1..=9).step_by(2) {
                let stencil = vec![1.0; width];
                let out = apply_stencil(&array, &stencil).unwrap();
                assert_eq!(out.len(), array.len());
            }
        }
    }

    #[test]
    fn empty_input() {
        let out = apply_stencil::<f64>(&[], &[1.0, 0.0, 0.0]).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn stencil_wider_than_input() {
        let out = apply_stencil(&[2.0], &[1.0, 1.0, 1.0, 1.0, 1.0]).unwrap();
        assert_eq!(out, vec![2.0]);
    }

    #[test]
    fn works_for_f32() {
        let array = [0.0f32, 1.0, 2.0, 3.0];
        let out = apply_stencil(&array, &[-0.5f32, 0.0, 0.5]).unwrap();
        assert_approx_eq!(f32, out[1], 1.0, ulps = 2);
    }

    #[test]
    fn rejects_even_length_stencil() {
        assert!(matches!(
            apply_stencil(&[1.0, 2.0], &[0.5, 0.5]),
            Err(StencilError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            apply_stencil::<f64>(&[1.0], &[]),
            Err(StencilError::InvalidConfiguration(_))
        ));
    }
}
