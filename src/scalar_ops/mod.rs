//! Scalar golden-reference implementations — `extern "C"` pure scalar functions.
//!
//! These serve as:
//! 1. Golden reference for correctness testing of accelerated kernels.
//! 2. A C-ABI surface so external (C/CUDA) validation harnesses can locate
//!    the reference by symbol name.
//!
//! Every function here is `#[no_mangle] pub extern "C"` and takes raw
//! buffers plus an element count. Buffer capacity is a caller precondition;
//! no error path exists at this boundary.

pub mod scale;
