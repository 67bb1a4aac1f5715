pub mod scale;

pub use scale::{scale_by_len, scale_by_len_inplace, scale_rows_by_len};
