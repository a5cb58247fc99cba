use phf::phf_map;

pub const UTF8_SPACE: u8 = 32;
pub const UTF8_DASH: u8 = 45;
pub const UTF8_PIPE: u8 = 124;
pub const UTF8_LOWER_X: u8 = 120;

/// The symbol placed in an aligned sequence across from a residue of the other sequence.
pub const GAP_SYMBOL: char = UTF8_DASH as char;
/// The middle line symbol for an exact match.
pub const MATCH_SYMBOL: char = UTF8_PIPE as char;
/// The middle line symbol for mismatches and gaps.
pub const BLANK_SYMBOL: char = UTF8_SPACE as char;
/// Marks a mismatch in the middle line of search hits.
pub const MISMATCH_SYMBOL: char = UTF8_LOWER_X as char;

// the one-byte tags stored in a direction matrix
pub const TAG_UP: u8 = b'U';
pub const TAG_LEFT: u8 = b'L';
pub const TAG_UP_LEFT: u8 = b'D';
pub const TAG_STOP: u8 = b'S';

pub const GLYPH_UP: char = '\u{2191}';
pub const GLYPH_LEFT: char = '\u{2190}';
pub const GLYPH_UP_LEFT: char = '\u{2196}';
pub const GLYPH_STOP: char = GAP_SYMBOL;

/// maps from \<direction glyph or tag letter\> -> \<direction tag\>
pub const TOKEN_TO_TAG: phf::Map<&'static str, u8> = phf_map! {
    // glyphs
    "\u{2191}" => TAG_UP,       // ↑
    "\u{2190}" => TAG_LEFT,     // ←
    "\u{2196}" => TAG_UP_LEFT,  // ↖
    "-" => TAG_STOP,
    // tag letters
    "U" => TAG_UP,
    "L" => TAG_LEFT,
    "D" => TAG_UP_LEFT,
    "S" => TAG_STOP,
};

/// Render a raw direction tag as a printable character.
pub fn tag_to_char(tag: &u8) -> char {
    if tag.is_ascii_graphic() {
        char::from(*tag)
    } else {
        char::REPLACEMENT_CHARACTER
    }
}
