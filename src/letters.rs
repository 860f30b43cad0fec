use rand::Rng;
use std::ops::RangeInclusive;

// Character-set constants
pub(crate) const ALPHABET_SIZE: u8 = 26;
pub const UPPERCASE_ALPHABET: RangeInclusive<char> = 'A'..='Z';

/// Sentinel for a grid cell no word has claimed yet. Never survives
/// generation: the filler pass overwrites every remaining occurrence.
pub const EMPTY_MARKER: char = '_';

/// Draw a uniformly random uppercase letter for an unused cell.
pub(crate) fn random_filler<R: Rng + ?Sized>(rng: &mut R) -> char {
    char::from(b'A' + rng.gen_range(0..ALPHABET_SIZE))
}
