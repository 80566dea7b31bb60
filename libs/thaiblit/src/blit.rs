// Copyright (c) 2022 Sam Blenny
// SPDX-License-Identifier: Apache-2.0 OR MIT
//
use crate::fonts::GlyphBitmap;
use crate::platform::{read_u16, read_u8};
use crate::PixelSink;

/// Blit a glyph sprite with its top-left corner at (x, y). Walks the full
/// w*h rectangle in row-major order; the bit cursor runs continuously
/// across row boundaries, matching the flat bit stream the table format
/// packs. Set bits become draw_pixel calls, clear bits are skipped, so
/// overlapping glyphs merge instead of punching holes in each other.
pub fn draw_bitmap<S: PixelSink>(sink: &mut S, x: i16, y: i16, bitmap: &GlyphBitmap) {
    let wide = read_u16(&bitmap.wide) as i16;
    let high = read_u16(&bitmap.high) as i16;
    let bits = wide as usize * high as usize;
    if bitmap.data.len() * 8 < bits {
        // Fail silently if the data slice is too small for the rectangle
        log::trace!("short glyph data: {} bits for {}", bitmap.data.len() * 8, bits);
        return;
    }
    let mut index = 0usize;
    let mut bit = 7u8;
    for cy in y..y + high {
        for cx in x..x + wide {
            if read_u8(&bitmap.data[index]) & (1 << bit) != 0 {
                sink.draw_pixel(cx, cy);
            }
            if bit > 0 {
                bit -= 1;
            } else {
                bit = 7;
                index += 1;
            }
        }
    }
}

/// Clear every pixel in [x0, x1) x [y0, y1). This is the erase primitive of
/// the two-pass render protocol: erasure is always a rectangle through
/// clear_pixel, never a bitmap-aware operation.
pub fn clear_rect<S: PixelSink>(sink: &mut S, x0: i16, y0: i16, x1: i16, y1: i16) {
    for y in y0..y1 {
        for x in x0..x1 {
            sink.clear_pixel(x, y);
        }
    }
}
