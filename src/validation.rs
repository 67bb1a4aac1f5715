//! Zero-cost validation utilities for reference kernel parameters.
//!
//! All validation functions return `Result<T, String>` so each entry point
//! can map failures into its own error type. Overflow checks use
//! `checked_mul`.

/// Validate input buffer length matches expected.
#[inline]
pub fn validate_input_len(actual: usize, expected: usize, name: &str) -> Result<(), String> {
    if actual != expected {
        return Err(format!("{} len {} != expected {}", name, actual, expected));
    }
    Ok(())
}

/// Validate a row-major `[rows, row_len]` buffer shape with overflow check.
///
/// # Returns
/// - `Ok(total)` where `total == rows * row_len` if the shape is valid
/// - `Err(String)` describing the validation failure
#[inline]
pub fn validate_rows(rows: usize, row_len: usize, total: usize) -> Result<usize, String> {
    let expected = rows
        .checked_mul(row_len)
        .ok_or_else(|| "rows * row_len overflow".to_string())?;
    if total != expected {
        return Err(format!(
            "buffer len {} != rows {} * row_len {}",
            total, rows, row_len
        ));
    }
    Ok(expected)
}

/// Convert usize to u32 with error message.
///
/// The C-ABI surface historically takes a 32-bit element count; callers
/// marshalling lengths toward 32-bit kernel parameters narrow through here.
#[inline]
pub fn to_u32(value: usize, name: &str) -> Result<u32, String> {
    u32::try_from(value).map_err(|_| format!("{} exceeds u32", name))
}
