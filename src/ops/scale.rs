//! Length-scaling reference transform.
//!
//! The expected-result oracle for accelerated kernels that multiply every
//! element of an array by the array length: `output[i] = input[i] * len`.
//! One IEEE-754 multiplication per element, no reordering, so repeated calls
//! over the same input are bit-identical (NaN payloads and signed zeros
//! included).
//!
//! # Design
//!
//! The unchecked functions take the length from the slices themselves and
//! treat shape agreement as a caller precondition (`debug_assert_eq!`). The
//! `try_` variants validate shapes at runtime and return `KernelError` for
//! buffers whose sizes are not statically known.

use crate::error::{KernelError, KernelResult};
use crate::types::KernelFloat;
use crate::validation;

/// Scale each element by the sequence length: `output[i] = input[i] * len`.
///
/// `len == 0` performs no writes.
#[inline(always)]
pub fn scale_by_len(input: &[f32], output: &mut [f32]) {
    debug_assert_eq!(input.len(), output.len());
    let scale = input.len() as f32;
    for (i, &x) in input.iter().enumerate() {
        output[i] = x * scale;
    }
}

/// Scale each element by the sequence length in-place: `x[i] *= len`.
#[inline(always)]
pub fn scale_by_len_inplace(data: &mut [f32]) {
    let scale = data.len() as f32;
    for x in data.iter_mut() {
        *x *= scale;
    }
}

/// Generic-precision length scale: compute in f32, convert back to `T`.
///
/// The scale factor is the element count promoted to f32, matching the f32
/// path exactly; only the per-element round-trip differs per precision.
#[inline(always)]
pub fn scale_by_len_t<T: KernelFloat>(input: &[T], output: &mut [T]) {
    debug_assert_eq!(input.len(), output.len());
    let scale = input.len() as f32;
    for (i, &x) in input.iter().enumerate() {
        output[i] = T::from_f32(x.to_f32() * scale);
    }
}

/// Checked variant of [`scale_by_len`].
pub fn try_scale_by_len(input: &[f32], output: &mut [f32]) -> KernelResult<()> {
    if let Err(e) = validation::validate_input_len(output.len(), input.len(), "output") {
        log::debug!("scale_by_len rejected: {}", e);
        return Err(KernelError::ShapeMismatch(e));
    }
    scale_by_len(input, output);
    Ok(())
}

/// Row-batched length scale over a row-major `[rows, row_len]` buffer.
///
/// Each row is scaled by its own length `row_len`, not by the total element
/// count. This is the shape the oracle takes when compared against a grid
/// launch that hands one row to each block.
#[inline(always)]
pub fn scale_rows_by_len(input: &[f32], output: &mut [f32], rows: usize, row_len: usize) {
    debug_assert_eq!(input.len(), rows * row_len);
    debug_assert_eq!(output.len(), input.len());
    let scale = row_len as f32;
    for r in 0..rows {
        let base = r * row_len;
        for i in 0..row_len {
            output[base + i] = input[base + i] * scale;
        }
    }
}

/// Checked variant of [`scale_rows_by_len`].
pub fn try_scale_rows_by_len(
    input: &[f32],
    output: &mut [f32],
    rows: usize,
    row_len: usize,
) -> KernelResult<()> {
    if let Err(e) = validation::validate_rows(rows, row_len, input.len()) {
        log::debug!("scale_rows_by_len rejected: {}", e);
        return Err(KernelError::InvalidConfig(e));
    }
    if let Err(e) = validation::validate_input_len(output.len(), input.len(), "output") {
        log::debug!("scale_rows_by_len rejected: {}", e);
        return Err(KernelError::ShapeMismatch(e));
    }
    scale_rows_by_len(input, output, rows, row_len);
    Ok(())
}
