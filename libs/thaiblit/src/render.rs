use crate::blit::{clear_rect, draw_bitmap};
use crate::decode::packed_codepoint;
use crate::fonts::{Glyph, GlyphFont};
use crate::platform::read_u16;
use crate::pt::Pt;
use crate::stacking::{stack_collapses, MarkClass};
use crate::PixelSink;

/// Default logical resolution: effectively unbounded until the host hands
/// over the real panel size.
const UNBOUNDED: u16 = 10000;

/// Renders glyph-table text through a PixelSink. One instance owns its sink
/// and tracks a pen position; it holds only a borrow of the active font,
/// which lives in constant storage for the life of the process. No part of
/// the render path allocates or returns an error: a missing font makes
/// every operation a no-op, and unknown codepoints are skipped.
pub struct TextBlitter<S: PixelSink> {
    sink: S,
    font: Option<&'static GlyphFont>,
    cursor: Pt,
    extent_x: u16,
    // vertical panel size; held for the configuration surface, no current
    // rule consults it
    #[allow(dead_code)]
    extent_y: u16,
}

impl<S: PixelSink> TextBlitter<S> {
    pub fn new(sink: S) -> TextBlitter<S> {
        TextBlitter {
            sink,
            font: None,
            cursor: Pt::new(0, 0),
            extent_x: UNBOUNDED,
            extent_y: UNBOUNDED,
        }
    }

    /// Select the glyph table. None disables rendering and measurement.
    pub fn set_font(&mut self, font: Option<&'static GlyphFont>) { self.font = font; }

    /// Move the pen. The pen is the baseline-left origin of the next print.
    pub fn set_cursor(&mut self, x: i16, y: i16) { self.cursor = Pt::new(x, y); }

    pub fn cursor(&self) -> Pt { self.cursor }

    /// Logical panel size. Consulted by the overflow check during print,
    /// never enforced.
    pub fn set_extent(&mut self, x: u16, y: u16) {
        self.extent_x = x;
        self.extent_y = y;
    }

    /// Borrow the sink back, e.g. so a host can present its frame buffer.
    pub fn sink_mut(&mut self) -> &mut S { &mut self.sink }

    /// Render `text` at the pen in two passes: blank the strip the string
    /// occupies, then draw the glyphs over the cleared ground. Both passes
    /// walk from the same origin and the pen is restored afterwards, so
    /// printing the same string at the same pen twice leaves the surface
    /// and the pen exactly as a single print would.
    pub fn print(&mut self, text: &str) {
        let font = match self.font {
            Some(f) => f,
            None => return,
        };
        let bytes = text.as_bytes();
        let start = self.cursor;

        // Pass 1: clear a uniform strip, one line height tall, across the
        // advance of every glyph the table resolves. Stacking plays no part
        // here; marks land inside the same strip. Unresolved codepoints
        // move the scan but neither clear nor advance the pen.
        let line_height = read_u16(&font.line_height) as i16;
        let mut pos = 0;
        while pos < bytes.len() {
            let (codepoint, len) = packed_codepoint(&bytes[pos..]);
            pos += len;
            if let Some(glyph) = font.find(codepoint) {
                clear_rect(
                    &mut self.sink,
                    self.cursor.x + glyph.offset_x,
                    self.cursor.y - line_height,
                    self.cursor.x + glyph.advance as i16,
                    self.cursor.y,
                );
                self.cursor.x += glyph.advance as i16;
            }
        }

        // Pass 2: draw with one-symbol lookahead. The next glyph is
        // resolved before the current one is placed so the stacking rules
        // can see both neighbors, and is carried into the following
        // iteration instead of being decoded twice.
        self.cursor = start;
        let mut pos = 0;
        let mut prev: Option<MarkClass> = None;
        let mut lookahead: Option<(&Glyph, usize)> = None;
        while pos < bytes.len() {
            let (current, len) = match lookahead.take() {
                Some((glyph, len)) => (Some(glyph), len),
                None => {
                    let (codepoint, len) = packed_codepoint(&bytes[pos..]);
                    (font.find(codepoint), len)
                }
            };
            pos += len;
            let glyph = match current {
                Some(g) => g,
                None => continue,
            };

            let wide = read_u16(&glyph.bitmap.wide) as i16;
            if self.cursor.x + wide >= self.extent_x as i16 {
                // wrap point; line breaking is the caller's concern
                log::trace!("extent overflow at x={}", self.cursor.x);
            }

            let next = if pos < bytes.len() {
                let (codepoint, len) = packed_codepoint(&bytes[pos..]);
                match font.find(codepoint) {
                    Some(g) => {
                        lookahead = Some((g, len));
                        Some(MarkClass::of(g.codepoint))
                    }
                    None => None,
                }
            } else {
                None
            };

            let class = MarkClass::of(glyph.codepoint);
            let offset_y = if class == MarkClass::AboveLv2 {
                if stack_collapses(prev, class, next) {
                    glyph.offset_y
                } else {
                    glyph.offset_y + read_u16(&glyph.bitmap.high) as i16
                }
            } else {
                glyph.offset_y
            };

            draw_bitmap(
                &mut self.sink,
                self.cursor.x + glyph.offset_x,
                self.cursor.y + offset_y,
                glyph.bitmap,
            );
            self.cursor.x += glyph.advance as i16;
            prev = Some(class);
        }

        // Hand the pen back where the caller left it.
        self.cursor = start;
    }

    /// Sum of advances over every glyph the table resolves. No drawing, no
    /// pen movement; unknown codepoints contribute nothing.
    pub fn text_width(&self, text: &str) -> i16 {
        let font = match self.font {
            Some(f) => f,
            None => return 0,
        };
        let bytes = text.as_bytes();
        let mut width: i16 = 0;
        let mut pos = 0;
        while pos < bytes.len() {
            let (codepoint, len) = packed_codepoint(&bytes[pos..]);
            pos += len;
            if let Some(glyph) = font.find(codepoint) {
                width = width.saturating_add(glyph.advance as i16);
            }
        }
        width
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::fonts::GlyphBitmap;

    const BASE: GlyphBitmap = GlyphBitmap { wide: 8, high: 8, data: &[0xff; 8] };
    const MARK: GlyphBitmap = GlyphBitmap { wide: 8, high: 2, data: &[0xff, 0xff] };

    // A minimal face: 'A', ko kai, mai han akat (first-level), sara am,
    // and mai ek (second-level). Sorted on the packed key.
    static RECORDS: [Glyph; 5] = [
        Glyph { codepoint: 0x41, offset_x: 0, offset_y: -8, advance: 9, bitmap: &BASE },
        Glyph { codepoint: 0xe0b881, offset_x: 0, offset_y: -8, advance: 9, bitmap: &BASE },
        Glyph { codepoint: 0xe0b8b1, offset_x: -9, offset_y: -11, advance: 0, bitmap: &MARK },
        Glyph { codepoint: 0xe0b8b3, offset_x: -2, offset_y: -11, advance: 7, bitmap: &BASE },
        Glyph { codepoint: 0xe0b988, offset_x: -9, offset_y: -14, advance: 0, bitmap: &MARK },
    ];

    static FONT: GlyphFont = GlyphFont { point_size: 12, line_height: 16, glyphs: &RECORDS };

    /// Test sink that models the pixel surface as a set of lit coordinates.
    #[derive(Default)]
    struct Surface {
        lit: BTreeSet<(i16, i16)>,
        draws: usize,
        clears: usize,
    }

    impl PixelSink for Surface {
        fn draw_pixel(&mut self, x: i16, y: i16) {
            self.lit.insert((x, y));
            self.draws += 1;
        }

        fn clear_pixel(&mut self, x: i16, y: i16) {
            self.lit.remove(&(x, y));
            self.clears += 1;
        }
    }

    fn blitter() -> TextBlitter<Surface> {
        let mut tb = TextBlitter::new(Surface::default());
        tb.set_font(Some(&FONT));
        tb
    }

    #[test]
    fn test_print_without_font_is_a_noop() {
        let mut tb = TextBlitter::new(Surface::default());
        tb.print("Aก่");
        assert_eq!(tb.sink_mut().draws, 0);
        assert_eq!(tb.sink_mut().clears, 0);
        assert_eq!(tb.text_width("Aก่"), 0);
    }

    #[test]
    fn test_print_restores_the_pen() {
        let mut tb = blitter();
        tb.set_cursor(30, 40);
        tb.print("Aก");
        assert_eq!(tb.cursor(), Pt::new(30, 40));
        tb.print("Aก");
        assert_eq!(tb.cursor(), Pt::new(30, 40));
    }

    #[test]
    fn test_repeated_print_is_idempotent() {
        let mut tb = blitter();
        tb.set_cursor(20, 20);
        tb.print("กั่A");
        let once = tb.sink_mut().lit.clone();
        tb.print("กั่A");
        assert_eq!(tb.sink_mut().lit, once);
    }

    #[test]
    fn test_unknown_codepoints_are_skipped_without_advance() {
        let mut a = blitter();
        a.set_cursor(0, 30);
        a.print("AZA");
        let mut b = blitter();
        b.set_cursor(0, 30);
        b.print("AA");
        assert_eq!(a.sink_mut().lit, b.sink_mut().lit);
        assert_eq!(a.text_width("AZA"), 18);
    }

    #[test]
    fn test_second_level_mark_drops_after_plain_consonant() {
        // ก then mai ek with nothing following: no collapse, so the mark
        // renders at offset_y + its own height = -12
        let mut tb = blitter();
        tb.set_cursor(10, 50);
        tb.print("ก่");
        let lit = &tb.sink_mut().lit;
        assert!(lit.contains(&(10, 38))); // 50 - 12
        assert!(!lit.contains(&(10, 36))); // not at the lifted slot
    }

    #[test]
    fn test_second_level_mark_collapses_over_first_level() {
        // ก, mai han akat, mai ek: the tone mark keeps offset_y = -14
        let mut tb = blitter();
        tb.set_cursor(10, 50);
        tb.print("กั่");
        let lit = &tb.sink_mut().lit;
        assert!(lit.contains(&(10, 36))); // 50 - 14
        assert!(lit.contains(&(10, 39))); // the first-level mark at -11
    }

    #[test]
    fn test_second_level_mark_collapses_before_sara_am() {
        let mut tb = blitter();
        tb.set_cursor(10, 50);
        tb.print("ก่ำ");
        assert!(tb.sink_mut().lit.contains(&(10, 36))); // collapsed at -14
    }

    #[test]
    fn test_erase_strip_blanks_stale_pixels() {
        let mut tb = blitter();
        // stale pixels: one inside the strip beside the glyph, one outside
        tb.sink_mut().lit.insert((8, 19)); // inside [0,9) x [4,20)
        tb.sink_mut().lit.insert((0, 21)); // below the baseline strip
        tb.set_cursor(0, 20);
        tb.print("A");
        let lit = &tb.sink_mut().lit;
        assert!(!lit.contains(&(8, 19)));
        assert!(lit.contains(&(0, 21)));
    }

    #[test]
    fn test_width_measurement() {
        let tb = blitter();
        assert_eq!(tb.text_width(""), 0);
        assert_eq!(tb.text_width("A"), 9);
        assert_eq!(tb.text_width("Aก"), 18);
        // combining marks carry zero advance; sara am advances
        assert_eq!(tb.text_width("กั่"), 9);
        assert_eq!(tb.text_width("ก่ำ"), 16);
    }

    #[test]
    fn test_measure_does_not_touch_the_surface() {
        let mut tb = blitter();
        tb.set_cursor(3, 9);
        let _ = tb.text_width("Aกั่");
        assert_eq!(tb.sink_mut().draws, 0);
        assert_eq!(tb.sink_mut().clears, 0);
        assert_eq!(tb.cursor(), Pt::new(3, 9));
    }

    #[test]
    fn test_print_empty_string() {
        let mut tb = blitter();
        tb.print("");
        assert_eq!(tb.sink_mut().draws, 0);
        assert_eq!(tb.sink_mut().clears, 0);
    }
}
