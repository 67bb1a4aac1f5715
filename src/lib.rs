//! golden-kernels: CPU golden-reference kernels for accelerator validation.
//!
//! This crate provides scalar reference implementations of array transforms with:
//! - **Bit-Exact Determinism**: One IEEE-754 operation per element, no reordering
//! - **Zero-Cost Abstraction**: Direct slice APIs with `#[inline(always)]`
//! - **C Symbol Exports**: `extern "C"` entry points so external test harnesses
//!   can resolve the reference by name
//!
//! # Quick Start
//!
//! ```
//! use golden_kernels::scale_by_len;
//!
//! let input = vec![1.0f32, 2.0, 3.0, 4.0];
//! let mut reference = vec![0.0f32; 4];
//! scale_by_len(&input, &mut reference);
//! assert_eq!(reference, vec![4.0, 8.0, 12.0, 16.0]);
//! ```

pub mod error;
pub mod ops;
pub mod scalar_ops;
pub mod types;
pub mod validation;

pub use error::{KernelError, KernelResult};
pub use types::KernelFloat;

// Length-scaling reference transform exports
pub use ops::scale::{
    scale_by_len, scale_by_len_inplace, scale_by_len_t, scale_rows_by_len,
    try_scale_by_len, try_scale_rows_by_len,
};

// C-ABI golden reference exports
pub use scalar_ops::scale::scalar_scale_by_len;
