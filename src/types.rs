//! Element types for reference kernels.

use half::{bf16, f16};

/// Float element trait for reference kernels.
///
/// Accelerated kernels under validation commonly run in reduced precision,
/// so the oracle must be expressible over the same element types. Compute
/// happens in f32 with a single round-trip conversion per element.
/// Compile-time monomorphization, zero runtime overhead.
pub trait KernelFloat: Copy + Default + Send + Sync + 'static {
    fn to_f32(self) -> f32;
    fn from_f32(v: f32) -> Self;
    fn zero() -> Self;
}

impl KernelFloat for f32 {
    #[inline(always)]
    fn to_f32(self) -> f32 { self }
    #[inline(always)]
    fn from_f32(v: f32) -> Self { v }
    #[inline(always)]
    fn zero() -> Self { 0.0 }
}

impl KernelFloat for f16 {
    #[inline(always)]
    fn to_f32(self) -> f32 { f16::to_f32(self) }
    #[inline(always)]
    fn from_f32(v: f32) -> Self { f16::from_f32(v) }
    #[inline(always)]
    fn zero() -> Self { f16::ZERO }
}

impl KernelFloat for bf16 {
    #[inline(always)]
    fn to_f32(self) -> f32 { bf16::to_f32(self) }
    #[inline(always)]
    fn from_f32(v: f32) -> Self { bf16::from_f32(v) }
    #[inline(always)]
    fn zero() -> Self { bf16::ZERO }
}
