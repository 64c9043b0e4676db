//! Gradient-map filter: recolor pixels along a two-stop color gradient,
//! weighted by each pixel's perceptual brightness.
//!
//! Bright pixels pull toward the gradient's start color, dark pixels toward
//! its end color, with the blend strength ("fade") interpolated from the two
//! gradient colors' alpha channels. Per-pixel alpha is never modified; the
//! gradient colors' alpha only controls how strongly the mapped color
//! replaces the original.
//!
//! Sample usage over a raw strided buffer:
//!
//! ```
//! use gradient_map::{GradientMap, PixelBuffer, PixelFormat, Rect, Rgba};
//!
//! let mut pixels = vec![128u8; 4 * 4 * 3];
//! let mut view = PixelBuffer::new(
//!     &mut pixels,
//!     4 * 3,
//!     PixelFormat::Rgb24,
//!     Rect::new(0, 0, 4, 4),
//! );
//!
//! let filter = GradientMap::new(Rgba::new(255, 255, 255, 255), Rgba::new(43, 26, 1, 200));
//! filter.apply(&mut view);
//! ```
//!
//! Applying the filter twice blends further: each pass moves pixels closer
//! to the mapped color, so the operation is only a no-op when the fade is 0.

use ndarray::{Array3, ArrayView3};
use rayon::prelude::*;

use crate::buffer::PixelBuffer;
use crate::pixel::Rgba;

/// ITU-R BT.709 luminosity coefficients (same for all bit depths)
const LUMA_R: f32 = 0.2126;
const LUMA_G: f32 = 0.7152;
const LUMA_B: f32 = 0.0722;

/// Two-stop gradient-map configuration.
///
/// `start` is the color of maximum brightness (luma 1), `end` the color of
/// minimum brightness (luma 0). Defaults to opaque white → opaque black,
/// which reproduces pure white and pure black pixels exactly.
///
/// The configuration is immutable during processing and the filter holds no
/// state across calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradientMap {
    pub start: Rgba,
    pub end: Rgba,
}

impl Default for GradientMap {
    fn default() -> Self {
        GradientMap { start: Rgba::WHITE, end: Rgba::BLACK }
    }
}

impl GradientMap {
    pub fn new(start: Rgba, end: Rgba) -> Self {
        GradientMap { start, end }
    }

    /// Apply the gradient map in place to every pixel of the buffer's region.
    ///
    /// Row-major sequential traversal. Stride padding and bytes outside the
    /// region are never touched; for 4-byte formats the fourth byte of each
    /// pixel is left as-is.
    pub fn apply(&self, buffer: &mut PixelBuffer) {
        let pixel_size = buffer.format().bytes_per_pixel();
        for row in buffer.rows_mut() {
            self.shade_row(row, pixel_size);
        }
    }

    /// Same output as [`apply`](Self::apply), with rows distributed over the
    /// rayon pool. Each worker owns a disjoint set of rows, and pixels only
    /// depend on their own prior value, so the result is identical to the
    /// sequential traversal.
    pub fn apply_parallel(&self, buffer: &mut PixelBuffer) {
        let pixel_size = buffer.format().bytes_per_pixel();
        buffer
            .par_rows_mut()
            .for_each(|row| self.shade_row(row, pixel_size));
    }

    fn shade_row(&self, row: &mut [u8], pixel_size: usize) {
        for pixel in row.chunks_exact_mut(pixel_size) {
            let (r, g, b) = self.shade(pixel[0], pixel[1], pixel[2]);
            pixel[0] = r;
            pixel[1] = g;
            pixel[2] = b;
        }
    }

    /// Map one pixel's RGB. Inputs are bounded, every step is a convex
    /// combination of bounded values, so no clamp is needed before the cast.
    #[inline]
    fn shade(&self, r: u8, g: u8, b: u8) -> (u8, u8, u8) {
        let (r, g, b) = (r as f32, g as f32, b as f32);

        let luma = (LUMA_R * r + LUMA_G * g + LUMA_B * b) / 255.0;
        let fade = (luma * self.start.a as f32 + (1.0 - luma) * self.end.a as f32) / 255.0;

        (
            blend_channel(luma, fade, self.start.r, self.end.r, r),
            blend_channel(luma, fade, self.start.g, self.end.g, g),
            blend_channel(luma, fade, self.start.b, self.end.b, b),
        )
    }
}

/// Interpolate the gradient stops by luma, then fade the result over the
/// original value. Rounds to nearest with ties to even.
#[inline]
fn blend_channel(luma: f32, fade: f32, start: u8, end: u8, original: f32) -> u8 {
    let mapped = luma * start as f32 + (1.0 - luma) * end as f32;
    (fade * mapped + (1.0 - fade) * original).round_ties_even() as u8
}

// ============================================================================
// ndarray entry points
// ============================================================================

/// Apply a gradient map to a u8 image (0-255), returning a new array.
///
/// Per-channel results are identical to [`GradientMap::apply`] on the same
/// pixel values.
///
/// # Arguments
/// * `input` - Image with 3 or 4 channels (height, width, channels)
/// * `gradient` - Gradient configuration
///
/// # Returns
/// Recolored image with same channel count, alpha preserved if present
pub fn gradient_map_u8(input: ArrayView3<u8>, gradient: &GradientMap) -> Array3<u8> {
    let (height, width, channels) = input.dim();
    debug_assert!(channels == 3 || channels == 4, "expected 3 or 4 channels, got {}", channels);
    let mut output = Array3::<u8>::zeros((height, width, channels));

    for y in 0..height {
        for x in 0..width {
            let (r, g, b) =
                gradient.shade(input[[y, x, 0]], input[[y, x, 1]], input[[y, x, 2]]);
            output[[y, x, 0]] = r;
            output[[y, x, 1]] = g;
            output[[y, x, 2]] = b;
            if channels == 4 {
                output[[y, x, 3]] = input[[y, x, 3]];
            }
        }
    }
    output
}

/// Apply a gradient map to an f32 image (0.0-1.0), returning a new array.
///
/// The gradient colors are normalized to 0.0-1.0; no quantization is applied
/// to the output. Input channels are clamped to [0, 1] before the luma
/// computation so out-of-range inputs cannot push the result out of range.
///
/// # Arguments
/// * `input` - Image with 3 or 4 channels (height, width, channels), values 0.0-1.0
/// * `gradient` - Gradient configuration
///
/// # Returns
/// Recolored image with same channel count, alpha preserved if present
pub fn gradient_map_f32(input: ArrayView3<f32>, gradient: &GradientMap) -> Array3<f32> {
    let (height, width, channels) = input.dim();
    debug_assert!(channels == 3 || channels == 4, "expected 3 or 4 channels, got {}", channels);
    let mut output = Array3::<f32>::zeros((height, width, channels));

    let (sr, sg, sb, sa) = normalized(gradient.start);
    let (er, eg, eb, ea) = normalized(gradient.end);

    for y in 0..height {
        for x in 0..width {
            let r = input[[y, x, 0]].clamp(0.0, 1.0);
            let g = input[[y, x, 1]].clamp(0.0, 1.0);
            let b = input[[y, x, 2]].clamp(0.0, 1.0);

            let luma = LUMA_R * r + LUMA_G * g + LUMA_B * b;
            let fade = luma * sa + (1.0 - luma) * ea;

            output[[y, x, 0]] = fade * (luma * sr + (1.0 - luma) * er) + (1.0 - fade) * r;
            output[[y, x, 1]] = fade * (luma * sg + (1.0 - luma) * eg) + (1.0 - fade) * g;
            output[[y, x, 2]] = fade * (luma * sb + (1.0 - luma) * eb) + (1.0 - fade) * b;
            if channels == 4 {
                output[[y, x, 3]] = input[[y, x, 3]];
            }
        }
    }
    output
}

fn normalized(color: Rgba) -> (f32, f32, f32, f32) {
    (
        color.r as f32 / 255.0,
        color.g as f32 / 255.0,
        color.b as f32 / 255.0,
        color.a as f32 / 255.0,
    )
}
