//! Numeric primitives shared by the sampling layer.

pub mod log_factorial;
