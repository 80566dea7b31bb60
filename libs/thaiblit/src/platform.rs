//! Accessors for glyph table data held in constant storage.
//!
//! Every target this crate currently builds for maps constant data into the
//! normal address space, so these collapse to plain dereferences. A port to
//! a part with a separate constant-data segment swaps these two functions
//! for the platform's constant-segment fetch; nothing above this seam may
//! assume which is in effect.

#[inline(always)]
pub fn read_u16(src: &u16) -> u16 { *src }

#[inline(always)]
pub fn read_u8(src: &u8) -> u8 { *src }
