//! Scalar length-scale reference.

/// Length scale: `out[i] = x[i] * n`
///
/// `x` and `out` must be valid for `n` reads / writes respectively.
#[no_mangle]
pub extern "C" fn scalar_scale_by_len(x: *const f32, out: *mut f32, n: usize) {
    let scale = n as f32;
    for i in 0..n {
        unsafe {
            *out.add(i) = *x.add(i) * scale;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_scalar(f: extern "C" fn(*const f32, *mut f32, usize), input: &[f32]) -> Vec<f32> {
        let mut out = vec![0.0_f32; input.len()];
        f(input.as_ptr(), out.as_mut_ptr(), input.len());
        out
    }

    #[test]
    fn test_scalar_scale_by_len() {
        let input = vec![1.0, 2.0, 3.0, 4.0];
        let out = run_scalar(scalar_scale_by_len, &input);
        assert_eq!(out, vec![4.0, 8.0, 12.0, 16.0]);
    }

    #[test]
    fn test_scalar_scale_zero_len() {
        let input: Vec<f32> = vec![];
        let mut out: Vec<f32> = vec![];
        scalar_scale_by_len(input.as_ptr(), out.as_mut_ptr(), 0);
        assert!(out.is_empty());
    }

    #[test]
    fn test_scalar_scale_matches_safe_api() {
        let input = vec![-2.5, 0.0, 0.125, 9.0, -7.75];
        let out = run_scalar(scalar_scale_by_len, &input);

        let mut expected = vec![0.0_f32; input.len()];
        crate::ops::scale::scale_by_len(&input, &mut expected);

        assert_eq!(out, expected);
    }
}
