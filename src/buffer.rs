//! Strided pixel buffer views.
//!
//! A [`PixelBuffer`] is a borrowed, mutable window into caller-owned image
//! memory: base slice, stride, pixel format, and the rectangle of pixels a
//! filter is allowed to touch. It owns nothing, allocates nothing, and is
//! discarded when the filter call returns.
//!
//! Geometry is the caller's responsibility (the rectangle must already be
//! clipped to the image and the format validated); the constructor verifies
//! it with `debug_assert!` only, so debug and test builds fail fast while
//! release builds run at raw-indexing speed.

use rayon::prelude::*;

use crate::pixel::PixelFormat;

/// A rectangle of pixels, in pixel (not byte) units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub left: usize,
    pub top: usize,
    pub width: usize,
    pub height: usize,
}

impl Rect {
    pub const fn new(left: usize, top: usize, width: usize, height: usize) -> Self {
        Rect { left, top, width, height }
    }
}

/// Mutable view over an interleaved, row-padded pixel buffer.
///
/// `stride` is the distance in bytes between row starts and may exceed
/// `width * bytes_per_pixel` due to padding; padding bytes are never read
/// or written through this view.
pub struct PixelBuffer<'a> {
    data: &'a mut [u8],
    stride: usize,
    format: PixelFormat,
    region: Rect,
}

impl<'a> PixelBuffer<'a> {
    /// Wrap caller-owned bytes.
    ///
    /// # Arguments
    /// * `data` - The image bytes, starting at row 0 of the full image
    /// * `stride` - Bytes per row of the full image
    /// * `format` - Channel layout of the buffer
    /// * `region` - Target rectangle, already clipped to the image bounds
    pub fn new(data: &'a mut [u8], stride: usize, format: PixelFormat, region: Rect) -> Self {
        let px = format.bytes_per_pixel();
        debug_assert!(
            stride >= (region.left + region.width) * px,
            "stride {} too small for region ending at column {}",
            stride,
            region.left + region.width
        );
        if region.width > 0 && region.height > 0 {
            let last_byte = (region.top + region.height - 1) * stride
                + (region.left + region.width) * px;
            debug_assert!(
                data.len() >= last_byte,
                "buffer of {} bytes cannot hold region (needs {})",
                data.len(),
                last_byte
            );
        }
        PixelBuffer { data, stride, format, region }
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn region(&self) -> Rect {
        self.region
    }

    /// Byte range of the region within one row slice.
    fn row_span(&self) -> (usize, usize) {
        let px = self.format.bytes_per_pixel();
        let start = self.region.left * px;
        (start, start + self.region.width * px)
    }

    /// Iterate the region's rows, each sliced to exactly the region's pixels.
    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [u8]> + '_ {
        let (begin, end) = self.row_span();
        let skip = (self.region.top * self.stride).min(self.data.len());
        self.data[skip..]
            .chunks_mut(self.stride.max(1))
            .take(self.region.height)
            .map(move |row| &mut row[begin..end])
    }

    /// Parallel variant of [`rows_mut`](Self::rows_mut): the same disjoint
    /// row slices, distributed over the rayon pool.
    pub fn par_rows_mut(&mut self) -> impl IndexedParallelIterator<Item = &mut [u8]> + '_ {
        let (begin, end) = self.row_span();
        let skip = (self.region.top * self.stride).min(self.data.len());
        self.data[skip..]
            .par_chunks_mut(self.stride.max(1))
            .take(self.region.height)
            .map(move |row| &mut row[begin..end])
    }

    /// Borrow one pixel's bytes; `x`/`y` are relative to the region origin.
    pub fn pixel(&self, x: usize, y: usize) -> &[u8] {
        let off = self.pixel_offset(x, y);
        &self.data[off..off + self.format.bytes_per_pixel()]
    }

    /// Mutable variant of [`pixel`](Self::pixel).
    pub fn pixel_mut(&mut self, x: usize, y: usize) -> &mut [u8] {
        let off = self.pixel_offset(x, y);
        let px = self.format.bytes_per_pixel();
        &mut self.data[off..off + px]
    }

    fn pixel_offset(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.region.width, "x {} outside region width {}", x, self.region.width);
        debug_assert!(y < self.region.height, "y {} outside region height {}", y, self.region.height);
        (self.region.top + y) * self.stride + (self.region.left + x) * self.format.bytes_per_pixel()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_cover_exactly_the_region() {
        // 4x3 image, 3 bytes/pixel, 2 padding bytes per row.
        let stride = 4 * 3 + 2;
        let mut data = vec![0u8; stride * 3];
        let mut view = PixelBuffer::new(
            &mut data,
            stride,
            PixelFormat::Rgb24,
            Rect::new(1, 1, 2, 2),
        );

        for row in view.rows_mut() {
            assert_eq!(row.len(), 2 * 3);
            row.fill(0xFF);
        }

        // Rows 1 and 2, columns 1 and 2 are written; everything else is 0.
        for y in 0..3 {
            for x in 0..4 {
                let off = y * stride + x * 3;
                let expected = if (1..=2).contains(&y) && (1..=2).contains(&x) { 0xFF } else { 0 };
                assert_eq!(data[off], expected, "pixel ({}, {})", x, y);
            }
        }
        // Padding bytes untouched.
        for y in 0..3 {
            assert_eq!(&data[y * stride + 12..y * stride + 14], &[0, 0]);
        }
    }

    #[test]
    fn test_pixel_accessor_offsets() {
        let stride = 3 * 4;
        let mut data = vec![0u8; stride * 2];
        let mut view = PixelBuffer::new(
            &mut data,
            stride,
            PixelFormat::Rgba32,
            Rect::new(1, 0, 2, 2),
        );

        view.pixel_mut(0, 1).copy_from_slice(&[1, 2, 3, 4]);
        assert_eq!(view.pixel(0, 1), &[1, 2, 3, 4]);
        // Region origin is (1, 0), so that pixel is image pixel (1, 1).
        assert_eq!(&data[stride + 4..stride + 8], &[1, 2, 3, 4]);
    }

    #[test]
    fn test_empty_region_has_no_rows() {
        let mut data = vec![0u8; 12];
        let mut view = PixelBuffer::new(
            &mut data,
            12,
            PixelFormat::Rgb24,
            Rect::new(0, 0, 4, 0),
        );
        assert_eq!(view.rows_mut().count(), 0);
    }
}
