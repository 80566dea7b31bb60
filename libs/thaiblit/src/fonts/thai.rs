//! Demonstration face: a small Latin set plus enough of the Thai repertoire
//! to exercise every stacking rule. Hand-set 8px-wide sprites on a 16px
//! line. Records are keyed on the raw big-endian packing of each
//! character's UTF-8 bytes and kept sorted ascending; the lookup tests
//! guard the ordering since the renderer never re-checks it.
//!
//! Vertical calibration: consonants occupy rows -10..0 relative to the
//! baseline. First-level above marks are set at -13 (directly over a
//! consonant). Second-level marks carry offset_y = -16 so that the default
//! one-glyph-height drop places them at -13 over a bare consonant, while
//! the collapsed position keeps them at -16, clear of a first-level mark
//! or a sara am ring below.

use super::{Glyph, GlyphBitmap, GlyphFont};

pub const POINT_SIZE: u16 = 12;
pub const LINE_HEIGHT: u16 = 16;

const SPACE: GlyphBitmap = GlyphBitmap { wide: 8, high: 1, data: &[0x00] };

const LATIN_T: GlyphBitmap = GlyphBitmap {
    wide: 8,
    high: 10,
    data: &[0x7e, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18],
};

const LATIN_A: GlyphBitmap = GlyphBitmap {
    wide: 8,
    high: 7,
    data: &[0x3c, 0x42, 0x02, 0x3e, 0x42, 0x46, 0x3a],
};

const LATIN_H: GlyphBitmap = GlyphBitmap {
    wide: 8,
    high: 10,
    data: &[0x40, 0x40, 0x40, 0x5c, 0x62, 0x42, 0x42, 0x42, 0x42, 0x42],
};

const LATIN_I: GlyphBitmap = GlyphBitmap {
    wide: 8,
    high: 10,
    data: &[0x08, 0x00, 0x18, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x1c],
};

const KO_KAI: GlyphBitmap = GlyphBitmap {
    wide: 8,
    high: 10,
    data: &[0x3c, 0x66, 0x52, 0x42, 0x42, 0x42, 0x42, 0x42, 0x42, 0x42],
};

const NO_NU: GlyphBitmap = GlyphBitmap {
    wide: 8,
    high: 10,
    data: &[0x00, 0x00, 0x02, 0x02, 0x32, 0x4a, 0x4a, 0x4a, 0x4a, 0x36],
};

const MO_MA: GlyphBitmap = GlyphBitmap {
    wide: 8,
    high: 10,
    data: &[0x00, 0x00, 0x02, 0x02, 0x3a, 0x46, 0x42, 0x52, 0x4a, 0x46],
};

const SARA_AA: GlyphBitmap = GlyphBitmap {
    wide: 8,
    high: 10,
    data: &[0x1c, 0x22, 0x02, 0x02, 0x02, 0x02, 0x02, 0x02, 0x02, 0x02],
};

// ring over the trailing edge of the previous consonant, aa stroke after
const SARA_AM: GlyphBitmap = GlyphBitmap {
    wide: 8,
    high: 13,
    data: &[0x30, 0x48, 0x30, 0x0e, 0x12, 0x02, 0x02, 0x02, 0x02, 0x02, 0x02, 0x02, 0x02],
};

const MAI_HAN_AKAT: GlyphBitmap = GlyphBitmap { wide: 8, high: 3, data: &[0x3c, 0x02, 0x3c] };

const SARA_II: GlyphBitmap = GlyphBitmap { wide: 8, high: 3, data: &[0x3e, 0x40, 0x7c] };

const SARA_U: GlyphBitmap = GlyphBitmap { wide: 8, high: 3, data: &[0x30, 0x48, 0x30] };

const MAI_TAIKHU: GlyphBitmap = GlyphBitmap { wide: 8, high: 3, data: &[0x1c, 0x10, 0x10] };

const MAI_EK: GlyphBitmap = GlyphBitmap { wide: 8, high: 3, data: &[0x08, 0x08, 0x10] };

const MAI_THO: GlyphBitmap = GlyphBitmap { wide: 8, high: 3, data: &[0x1c, 0x08, 0x30] };

const MAI_TRI: GlyphBitmap = GlyphBitmap { wide: 8, high: 3, data: &[0x10, 0x38, 0x10] };

static GLYPHS: [Glyph; 17] = [
    Glyph { codepoint: 0x20, offset_x: 0, offset_y: -1, advance: 5, bitmap: &SPACE },
    Glyph { codepoint: 0x54, offset_x: 0, offset_y: -10, advance: 9, bitmap: &LATIN_T },
    Glyph { codepoint: 0x61, offset_x: 0, offset_y: -7, advance: 9, bitmap: &LATIN_A },
    Glyph { codepoint: 0x68, offset_x: 0, offset_y: -10, advance: 9, bitmap: &LATIN_H },
    Glyph { codepoint: 0x69, offset_x: 0, offset_y: -10, advance: 9, bitmap: &LATIN_I },
    // ก U+0E01
    Glyph { codepoint: 0xe0b881, offset_x: 0, offset_y: -10, advance: 9, bitmap: &KO_KAI },
    // น U+0E19
    Glyph { codepoint: 0xe0b899, offset_x: 0, offset_y: -10, advance: 9, bitmap: &NO_NU },
    // ม U+0E21
    Glyph { codepoint: 0xe0b8a1, offset_x: 0, offset_y: -10, advance: 9, bitmap: &MO_MA },
    // ั U+0E31
    Glyph { codepoint: 0xe0b8b1, offset_x: -9, offset_y: -13, advance: 0, bitmap: &MAI_HAN_AKAT },
    // า U+0E32
    Glyph { codepoint: 0xe0b8b2, offset_x: 0, offset_y: -10, advance: 9, bitmap: &SARA_AA },
    // ำ U+0E33
    Glyph { codepoint: 0xe0b8b3, offset_x: -4, offset_y: -13, advance: 5, bitmap: &SARA_AM },
    // ี U+0E35
    Glyph { codepoint: 0xe0b8b5, offset_x: -9, offset_y: -13, advance: 0, bitmap: &SARA_II },
    // ุ U+0E38
    Glyph { codepoint: 0xe0b8b8, offset_x: -9, offset_y: 0, advance: 0, bitmap: &SARA_U },
    // ็ U+0E47
    Glyph { codepoint: 0xe0b987, offset_x: -9, offset_y: -13, advance: 0, bitmap: &MAI_TAIKHU },
    // ่ U+0E48
    Glyph { codepoint: 0xe0b988, offset_x: -9, offset_y: -16, advance: 0, bitmap: &MAI_EK },
    // ้ U+0E49
    Glyph { codepoint: 0xe0b989, offset_x: -9, offset_y: -16, advance: 0, bitmap: &MAI_THO },
    // ๊ U+0E4A
    Glyph { codepoint: 0xe0b98a, offset_x: -9, offset_y: -16, advance: 0, bitmap: &MAI_TRI },
];

/// The demonstration font table.
pub static FONT: GlyphFont =
    GlyphFont { point_size: POINT_SIZE, line_height: LINE_HEIGHT, glyphs: &GLYPHS };
