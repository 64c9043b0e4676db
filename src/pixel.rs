//! Pixel-level value types: color values and buffer format tags.
//!
//! ## Channel Order
//!
//! All byte buffers in this crate use one fixed logical order:
//!
//! | Byte index | Channel |
//! |------------|---------|
//! | 0 | Red |
//! | 1 | Green |
//! | 2 | Blue |
//! | 3 | Alpha (or padding, depending on format) |
//!
//! Swapping red/blue would change visible output but not the algorithm;
//! callers holding BGR data must swizzle before handing buffers in.

/// An 8-bit RGBA color value.
///
/// Channels are 0-255. This is a plain value type: filters read it as
/// configuration and never modify it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Opaque white, the default bright end of a gradient.
    pub const WHITE: Rgba = Rgba::opaque(255, 255, 255);
    /// Opaque black, the default dark end of a gradient.
    pub const BLACK: Rgba = Rgba::opaque(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Rgba { r, g, b, a }
    }

    /// Construct a fully opaque color (alpha = 255).
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Rgba { r, g, b, a: 255 }
    }
}

/// Byte layout of an interleaved pixel buffer.
///
/// This is the static compatibility set: a filter invocation only ever sees
/// one of these variants, and the caller is responsible for converting or
/// rejecting anything else before building a [`crate::PixelBuffer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    /// 3 bytes per pixel, RGB, no fourth byte.
    Rgb24,
    /// 4 bytes per pixel, RGB plus one padding byte that is never touched.
    Rgbx32,
    /// 4 bytes per pixel, RGB plus a per-pixel alpha byte.
    Rgba32,
}

impl PixelFormat {
    /// Width of one pixel in bytes (3 or 4).
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            PixelFormat::Rgb24 => 3,
            PixelFormat::Rgbx32 | PixelFormat::Rgba32 => 4,
        }
    }

    /// Whether byte 3 carries meaningful per-pixel alpha.
    ///
    /// Filters in this crate never read or write that byte either way; the
    /// distinction only matters to callers compositing the result.
    pub const fn has_alpha(self) -> bool {
        matches!(self, PixelFormat::Rgba32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_sizes() {
        assert_eq!(PixelFormat::Rgb24.bytes_per_pixel(), 3);
        assert_eq!(PixelFormat::Rgbx32.bytes_per_pixel(), 4);
        assert_eq!(PixelFormat::Rgba32.bytes_per_pixel(), 4);
    }

    #[test]
    fn test_alpha_flag() {
        assert!(!PixelFormat::Rgb24.has_alpha());
        assert!(!PixelFormat::Rgbx32.has_alpha());
        assert!(PixelFormat::Rgba32.has_alpha());
    }

    #[test]
    fn test_color_constants() {
        assert_eq!(Rgba::WHITE, Rgba::new(255, 255, 255, 255));
        assert_eq!(Rgba::BLACK, Rgba::new(0, 0, 0, 255));
        assert_eq!(Rgba::opaque(10, 20, 30).a, 255);
    }
}
