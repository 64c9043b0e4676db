//! Filter modules for image processing effects.
//!
//! ## Supported Formats
//!
//! Filters operate on two kinds of input:
//!
//! | Entry point | Shape / layout | Type |
//! |-------------|----------------|------|
//! | raw-buffer `apply` | interleaved bytes, 3 or 4 bytes/pixel, strided rows | u8 |
//! | ndarray `*_u8` | (H, W, 3) or (H, W, 4) | u8, 0-255 |
//! | ndarray `*_f32` | (H, W, 3) or (H, W, 4) | f32, 0.0-1.0 |
//!
//! Channel count is inferred from the input; the fourth channel (if present)
//! is treated as alpha and passed through unmodified.
//!
//! ## Architecture
//!
//! - **Pure kernels** - Filters hold immutable configuration and no state
//!   across calls; applying one mutates only the pixels it is given.
//! - **Region aware** - The raw-buffer path processes exactly the rectangle
//!   described by the [`crate::PixelBuffer`] view; bytes outside it,
//!   including stride padding, are never touched.
//! - **Alpha preservation** - Per-pixel alpha is never modified.
//! - **Thread-safe** - Row-parallel variants via rayon where each worker
//!   owns disjoint rows.

pub mod gradient_map;
