//! Gradient-map color remapping.
//!
//! Recolors pixels by blending them with a two-stop color gradient, weighted
//! by each pixel's perceptual brightness (ITU-R BT.709 luma). Bright pixels
//! take on the gradient's start color, dark pixels its end color, and the
//! gradient colors' alpha channels control how strongly the mapped color
//! replaces the original.
//!
//! This crate is a single image-processing primitive meant to slot into a
//! larger pipeline: it owns no image lifecycle, performs no I/O, and trusts
//! its caller to validate formats and clip regions before handing it a
//! buffer.
//!
//! ## Image Format
//!
//! Two kinds of input are supported:
//! - **Raw strided buffers** via [`PixelBuffer`]: interleaved u8 bytes, 3 or
//!   4 bytes per pixel ([`PixelFormat`]), row stride that may include
//!   padding, and a target rectangle mutated in place.
//! - **ndarray images** via the functions in [`filters::gradient_map`]:
//!   `(height, width, 3|4)` arrays in `u8` (0-255) or `f32` (0.0-1.0).
//!
//! Channel order is logical RGB (byte 0 = red); the fourth channel, if
//! present, is treated as alpha and never modified.

pub mod buffer;
pub mod filters;
pub mod pixel;

pub use buffer::{PixelBuffer, Rect};
pub use filters::gradient_map::GradientMap;
pub use pixel::{PixelFormat, Rgba};
