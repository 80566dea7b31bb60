//! Thai mark stacking rules.
//!
//! Stacking behavior here is a finite, hand-curated exception list over the
//! Thai combining-mark range, not a general Unicode property lookup. The
//! sets are keyed the same way the glyph tables are keyed: on the raw
//! big-endian packing of each character's UTF-8 bytes.

/// Below-baseline vowels (sara u, sara uu, phinthu). Classified for
/// completeness; no placement rule currently consults this tier.
const UNDER: [u32; 3] = [0xe0b8b8, 0xe0b8b9, 0xe0b8ba];

/// First-level above marks (mai han akat, sara i/ii/ue/uee, mai taikhu):
/// these sit directly over the base consonant.
const ABOVE_LV1: [u32; 6] = [0xe0b8b1, 0xe0b8b4, 0xe0b8b5, 0xe0b8b6, 0xe0b8b7, 0xe0b987];

/// Second-level above marks (the four tone marks, thanthakhat, nikhahit,
/// yamakkan): these float over first-level marks when one is present.
const ABOVE_LV2: [u32; 7] =
    [0xe0b988, 0xe0b989, 0xe0b98a, 0xe0b98b, 0xe0b98c, 0xe0b98d, 0xe0b98e];

/// Sara am. Its leading ring occupies the slot a tone mark would otherwise
/// float up into.
const SARA_AM: [u32; 1] = [0xe0b8b3];

/// Stacking tier of a single codepoint. Computed on demand; tier membership
/// is not stored in the glyph table.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkClass {
    Plain,
    Under,
    AboveLv1,
    AboveLv2,
    SaraAm,
}

impl MarkClass {
    /// Classify a packed codepoint. The sets are small enough that a linear
    /// scan beats anything clever.
    pub fn of(codepoint: u32) -> MarkClass {
        if ABOVE_LV1.contains(&codepoint) {
            MarkClass::AboveLv1
        } else if ABOVE_LV2.contains(&codepoint) {
            MarkClass::AboveLv2
        } else if SARA_AM.contains(&codepoint) {
            MarkClass::SaraAm
        } else if UNDER.contains(&codepoint) {
            MarkClass::Under
        } else {
            MarkClass::Plain
        }
    }
}

/// Decide whether a second-level mark gives up its default lift and sits
/// directly on the glyph below it. A preceding first-level mark means the
/// low slot is already occupied, and a following sara am's ring claims the
/// position the mark would float into. The sara am case only applies when
/// a preceding glyph exists at all.
pub fn stack_collapses(
    prev: Option<MarkClass>,
    curr: MarkClass,
    next: Option<MarkClass>,
) -> bool {
    if curr != MarkClass::AboveLv2 {
        return false;
    }
    match (prev, next) {
        (Some(p), Some(n)) => p == MarkClass::AboveLv1 || n == MarkClass::SaraAm,
        (Some(p), None) => p == MarkClass::AboveLv1,
        _ => false,
    }
}
