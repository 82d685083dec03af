//! Built-in stroke font.
//!
//! Each glyph is a set of polylines on a grid that is 6 units tall (0 at the
//! cap line, 6 on the baseline) and `width` units wide. Covers upper-case
//! latin letters, digits and the punctuation used on chart labels.

/// Height of the glyph grid in units.
pub const GRID_HEIGHT: f32 = 6.0;

/// Space between adjacent glyphs in units.
pub const TRACKING: f32 = 1.5;

/// Advance of a space character in units.
pub const SPACE_WIDTH: f32 = 3.0;

type Stroke = &'static [(f32, f32)];

/// A stroke glyph.
#[derive(Debug)]
pub struct Glyph {
    pub width: f32,
    pub strokes: &'static [Stroke],
}

const fn glyph(width: f32, strokes: &'static [Stroke]) -> Glyph {
    Glyph { width, strokes }
}

/// Glyph outlines.
#[rustfmt::skip]
mod table {
    use super::{glyph, Glyph};

    pub(super) static A: Glyph = glyph(4.0, &[
        &[(0.0, 6.0), (0.0, 2.0), (2.0, 0.0), (4.0, 2.0), (4.0, 6.0)],
        &[(0.0, 4.0), (4.0, 4.0)],
    ]);
    pub(super) static B: Glyph = glyph(4.0, &[
        &[(0.0, 6.0), (0.0, 0.0), (3.0, 0.0), (4.0, 1.0), (4.0, 2.0), (3.0, 3.0), (0.0, 3.0)],
        &[(3.0, 3.0), (4.0, 4.0), (4.0, 5.0), (3.0, 6.0), (0.0, 6.0)],
    ]);
    pub(super) static C: Glyph = glyph(4.0, &[
        &[
            (4.0, 1.0), (3.0, 0.0), (1.0, 0.0), (0.0, 1.0), (0.0, 5.0), (1.0, 6.0), (3.0, 6.0),
            (4.0, 5.0),
        ],
    ]);
    pub(super) static D: Glyph = glyph(4.0, &[
        &[(0.0, 0.0), (0.0, 6.0), (2.0, 6.0), (4.0, 4.0), (4.0, 2.0), (2.0, 0.0), (0.0, 0.0)],
    ]);
    pub(super) static E: Glyph = glyph(4.0, &[
        &[(4.0, 0.0), (0.0, 0.0), (0.0, 6.0), (4.0, 6.0)],
        &[(0.0, 3.0), (3.0, 3.0)],
    ]);
    pub(super) static F: Glyph = glyph(4.0, &[
        &[(4.0, 0.0), (0.0, 0.0), (0.0, 6.0)],
        &[(0.0, 3.0), (3.0, 3.0)],
    ]);
    pub(super) static G: Glyph = glyph(4.0, &[
        &[
            (4.0, 1.0), (3.0, 0.0), (1.0, 0.0), (0.0, 1.0), (0.0, 5.0), (1.0, 6.0), (3.0, 6.0),
            (4.0, 5.0), (4.0, 3.0), (2.0, 3.0),
        ],
    ]);
    pub(super) static H: Glyph = glyph(4.0, &[
        &[(0.0, 0.0), (0.0, 6.0)],
        &[(4.0, 0.0), (4.0, 6.0)],
        &[(0.0, 3.0), (4.0, 3.0)],
    ]);
    pub(super) static I: Glyph = glyph(2.0, &[
        &[(0.0, 0.0), (2.0, 0.0)],
        &[(1.0, 0.0), (1.0, 6.0)],
        &[(0.0, 6.0), (2.0, 6.0)],
    ]);
    pub(super) static J: Glyph = glyph(4.0, &[
        &[(4.0, 0.0), (4.0, 5.0), (3.0, 6.0), (1.0, 6.0), (0.0, 5.0)],
    ]);
    pub(super) static K: Glyph = glyph(4.0, &[
        &[(0.0, 0.0), (0.0, 6.0)],
        &[(4.0, 0.0), (0.0, 4.0)],
        &[(1.0, 3.0), (4.0, 6.0)],
    ]);
    pub(super) static L: Glyph = glyph(4.0, &[&[(0.0, 0.0), (0.0, 6.0), (4.0, 6.0)]]);
    pub(super) static M: Glyph = glyph(4.0, &[
        &[(0.0, 6.0), (0.0, 0.0), (2.0, 3.0), (4.0, 0.0), (4.0, 6.0)],
    ]);
    pub(super) static N: Glyph = glyph(4.0, &[&[(0.0, 6.0), (0.0, 0.0), (4.0, 6.0), (4.0, 0.0)]]);
    pub(super) static O: Glyph = glyph(4.0, &[
        &[
            (1.0, 0.0), (3.0, 0.0), (4.0, 1.0), (4.0, 5.0), (3.0, 6.0), (1.0, 6.0), (0.0, 5.0),
            (0.0, 1.0), (1.0, 0.0),
        ],
    ]);
    pub(super) static P: Glyph = glyph(4.0, &[
        &[(0.0, 6.0), (0.0, 0.0), (3.0, 0.0), (4.0, 1.0), (4.0, 2.0), (3.0, 3.0), (0.0, 3.0)],
    ]);
    pub(super) static Q: Glyph = glyph(4.0, &[
        &[
            (1.0, 0.0), (3.0, 0.0), (4.0, 1.0), (4.0, 5.0), (3.0, 6.0), (1.0, 6.0), (0.0, 5.0),
            (0.0, 1.0), (1.0, 0.0),
        ],
        &[(2.0, 4.0), (4.0, 6.0)],
    ]);
    pub(super) static R: Glyph = glyph(4.0, &[
        &[(0.0, 6.0), (0.0, 0.0), (3.0, 0.0), (4.0, 1.0), (4.0, 2.0), (3.0, 3.0), (0.0, 3.0)],
        &[(2.0, 3.0), (4.0, 6.0)],
    ]);
    pub(super) static S: Glyph = glyph(4.0, &[
        &[
            (4.0, 1.0), (3.0, 0.0), (1.0, 0.0), (0.0, 1.0), (0.0, 2.0), (1.0, 3.0), (3.0, 3.0),
            (4.0, 4.0), (4.0, 5.0), (3.0, 6.0), (1.0, 6.0), (0.0, 5.0),
        ],
    ]);
    pub(super) static T: Glyph = glyph(4.0, &[
        &[(0.0, 0.0), (4.0, 0.0)],
        &[(2.0, 0.0), (2.0, 6.0)],
    ]);
    pub(super) static U: Glyph = glyph(4.0, &[
        &[(0.0, 0.0), (0.0, 5.0), (1.0, 6.0), (3.0, 6.0), (4.0, 5.0), (4.0, 0.0)],
    ]);
    pub(super) static V: Glyph = glyph(4.0, &[&[(0.0, 0.0), (2.0, 6.0), (4.0, 0.0)]]);
    pub(super) static W: Glyph = glyph(4.0, &[
        &[(0.0, 0.0), (1.0, 6.0), (2.0, 3.0), (3.0, 6.0), (4.0, 0.0)],
    ]);
    pub(super) static X: Glyph = glyph(4.0, &[
        &[(0.0, 0.0), (4.0, 6.0)],
        &[(4.0, 0.0), (0.0, 6.0)],
    ]);
    pub(super) static Y: Glyph = glyph(4.0, &[
        &[(0.0, 0.0), (2.0, 3.0), (4.0, 0.0)],
        &[(2.0, 3.0), (2.0, 6.0)],
    ]);
    pub(super) static Z: Glyph = glyph(4.0, &[&[(0.0, 0.0), (4.0, 0.0), (0.0, 6.0), (4.0, 6.0)]]);

    pub(super) static DIGIT_0: Glyph = glyph(4.0, &[
        &[
            (1.0, 0.0), (3.0, 0.0), (4.0, 1.0), (4.0, 5.0), (3.0, 6.0), (1.0, 6.0), (0.0, 5.0),
            (0.0, 1.0), (1.0, 0.0),
        ],
        &[(4.0, 1.0), (0.0, 5.0)],
    ]);
    pub(super) static DIGIT_1: Glyph = glyph(2.0, &[
        &[(0.0, 1.0), (1.0, 0.0), (1.0, 6.0)],
        &[(0.0, 6.0), (2.0, 6.0)],
    ]);
    pub(super) static DIGIT_2: Glyph = glyph(4.0, &[
        &[(0.0, 1.0), (1.0, 0.0), (3.0, 0.0), (4.0, 1.0), (4.0, 2.0), (0.0, 6.0), (4.0, 6.0)],
    ]);
    pub(super) static DIGIT_3: Glyph = glyph(4.0, &[
        &[(0.0, 1.0), (1.0, 0.0), (3.0, 0.0), (4.0, 1.0), (4.0, 2.0), (3.0, 3.0), (1.0, 3.0)],
        &[(3.0, 3.0), (4.0, 4.0), (4.0, 5.0), (3.0, 6.0), (1.0, 6.0), (0.0, 5.0)],
    ]);
    pub(super) static DIGIT_4: Glyph = glyph(4.0, &[
        &[(3.0, 6.0), (3.0, 0.0), (0.0, 4.0), (4.0, 4.0)],
    ]);
    pub(super) static DIGIT_5: Glyph = glyph(4.0, &[
        &[
            (4.0, 0.0), (0.0, 0.0), (0.0, 3.0), (3.0, 3.0), (4.0, 4.0), (4.0, 5.0), (3.0, 6.0),
            (1.0, 6.0), (0.0, 5.0),
        ],
    ]);
    pub(super) static DIGIT_6: Glyph = glyph(4.0, &[
        &[
            (4.0, 1.0), (3.0, 0.0), (1.0, 0.0), (0.0, 1.0), (0.0, 5.0), (1.0, 6.0), (3.0, 6.0),
            (4.0, 5.0), (4.0, 4.0), (3.0, 3.0), (0.0, 3.0),
        ],
    ]);
    pub(super) static DIGIT_7: Glyph = glyph(4.0, &[&[(0.0, 0.0), (4.0, 0.0), (1.0, 6.0)]]);
    pub(super) static DIGIT_8: Glyph = glyph(4.0, &[
        &[
            (1.0, 3.0), (0.0, 2.0), (0.0, 1.0), (1.0, 0.0), (3.0, 0.0), (4.0, 1.0), (4.0, 2.0),
            (3.0, 3.0), (1.0, 3.0), (0.0, 4.0), (0.0, 5.0), (1.0, 6.0), (3.0, 6.0), (4.0, 5.0),
            (4.0, 4.0), (3.0, 3.0),
        ],
    ]);
    pub(super) static DIGIT_9: Glyph = glyph(4.0, &[
        &[
            (4.0, 3.0), (1.0, 3.0), (0.0, 2.0), (0.0, 1.0), (1.0, 0.0), (3.0, 0.0), (4.0, 1.0),
            (4.0, 5.0), (3.0, 6.0), (1.0, 6.0), (0.0, 5.0),
        ],
    ]);

    pub(super) static PERIOD: Glyph = glyph(1.0, &[&[(0.5, 5.7), (0.5, 6.0)]]);
    pub(super) static COLON: Glyph = glyph(1.0, &[
        &[(0.5, 1.7), (0.5, 2.0)],
        &[(0.5, 5.7), (0.5, 6.0)],
    ]);
    pub(super) static MINUS: Glyph = glyph(3.0, &[&[(0.0, 3.0), (3.0, 3.0)]]);
    pub(super) static PLUS: Glyph = glyph(4.0, &[
        &[(0.0, 3.0), (4.0, 3.0)],
        &[(2.0, 1.0), (2.0, 5.0)],
    ]);
    pub(super) static LPAREN: Glyph = glyph(2.0, &[
        &[(2.0, 0.0), (0.0, 2.0), (0.0, 4.0), (2.0, 6.0)],
    ]);
    pub(super) static RPAREN: Glyph = glyph(2.0, &[
        &[(0.0, 0.0), (2.0, 2.0), (2.0, 4.0), (0.0, 6.0)],
    ]);
    pub(super) static SLASH: Glyph = glyph(4.0, &[&[(0.0, 6.0), (4.0, 0.0)]]);
}

/// Glyph for a character. Lower-case letters map to upper-case; characters
/// without a glyph return `None`.
pub fn lookup(ch: char) -> Option<&'static Glyph> {
    let glyph = match ch.to_ascii_uppercase() {
        'A' => &table::A,
        'B' => &table::B,
        'C' => &table::C,
        'D' => &table::D,
        'E' => &table::E,
        'F' => &table::F,
        'G' => &table::G,
        'H' => &table::H,
        'I' => &table::I,
        'J' => &table::J,
        'K' => &table::K,
        'L' => &table::L,
        'M' => &table::M,
        'N' => &table::N,
        'O' => &table::O,
        'P' => &table::P,
        'Q' => &table::Q,
        'R' => &table::R,
        'S' => &table::S,
        'T' => &table::T,
        'U' => &table::U,
        'V' => &table::V,
        'W' => &table::W,
        'X' => &table::X,
        'Y' => &table::Y,
        'Z' => &table::Z,
        '0' => &table::DIGIT_0,
        '1' => &table::DIGIT_1,
        '2' => &table::DIGIT_2,
        '3' => &table::DIGIT_3,
        '4' => &table::DIGIT_4,
        '5' => &table::DIGIT_5,
        '6' => &table::DIGIT_6,
        '7' => &table::DIGIT_7,
        '8' => &table::DIGIT_8,
        '9' => &table::DIGIT_9,
        '.' => &table::PERIOD,
        ':' => &table::COLON,
        '-' => &table::MINUS,
        '+' => &table::PLUS,
        '(' => &table::LPAREN,
        ')' => &table::RPAREN,
        '/' => &table::SLASH,
        _ => return None,
    };
    Some(glyph)
}

/// Horizontal advance of a character in grid units, trailing tracking
/// included. Unknown characters advance like a space.
pub fn advance(ch: char) -> f32 {
    match lookup(ch) {
        Some(glyph) => glyph.width + TRACKING,
        None => SPACE_WIDTH + TRACKING,
    }
}
