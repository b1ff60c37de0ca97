#![forbid(unsafe_code)]

//! The scramble alphabet: glyphs a cell may display mid-animation.

use crate::rng::RandomSource;

/// Latin capitals plus a fixed set of punctuation and digit symbols.
pub const SCRAMBLE_GLYPHS: &[char] = &[
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z', '!', '@', '#', '$', '&', '*', '(', ')', '-', '_', '+', '=',
    '/', '[', ']', '{', '}', ';', ':', '<', '>', ',', '0', '1', '2', '3', '4', '5', '6', '7', '8',
    '9',
];

/// Draw one glyph uniformly from [`SCRAMBLE_GLYPHS`].
#[inline]
pub fn scramble_glyph(rng: &mut dyn RandomSource) -> char {
    SCRAMBLE_GLYPHS[rng.next_index(SCRAMBLE_GLYPHS.len())]
}
