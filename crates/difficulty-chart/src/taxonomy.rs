//! The ordered difficulty taxonomy.
//!
//! Sixteen levels from "Easy -" to "Hell". Each level carries the midpoint
//! used for averaging, the numeric range used for classification and the
//! bar color used by the rasterizer. The table is static and never mutated,
//! so it can be read from any number of threads.

use std::fmt;

/// Number of difficulty levels in the taxonomy.
pub const LEVEL_COUNT: usize = 16;

/// Upper bound of the numeric difficulty scale.
pub const SCALE_MAX: f64 = 10.0;

/// An RGB color triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Numeric range covered by a difficulty level.
///
/// The lower bound is always inclusive. The upper bound is exclusive except
/// for the last level, whose range is closed so that the scale maximum is
/// still classified.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    pub lower: f64,
    pub upper: f64,
    pub upper_inclusive: bool,
}

impl ValueRange {
    const fn open(lower: f64, upper: f64) -> Self {
        Self {
            lower,
            upper,
            upper_inclusive: false,
        }
    }

    const fn closed(lower: f64, upper: f64) -> Self {
        Self {
            lower,
            upper,
            upper_inclusive: true,
        }
    }

    /// Check whether a value falls inside this range.
    pub fn contains(&self, value: f64) -> bool {
        if value < self.lower {
            return false;
        }
        if self.upper_inclusive {
            value <= self.upper
        } else {
            value < self.upper
        }
    }
}

/// A single entry of the taxonomy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyLevel {
    pub index: usize,
    pub name: &'static str,
    pub midpoint: f64,
    pub range: ValueRange,
    /// Display color as `#RRGGBB`.
    pub color_hex: &'static str,
}

impl DifficultyLevel {
    /// Bar color, parsed from the hex string.
    pub fn color(&self) -> Rgb {
        parse_hex_color(self.color_hex)
    }
}

impl fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

const fn level(
    index: usize,
    name: &'static str,
    midpoint: f64,
    range: ValueRange,
    color_hex: &'static str,
) -> DifficultyLevel {
    DifficultyLevel {
        index,
        name,
        midpoint,
        range,
        color_hex,
    }
}

static LEVELS: [DifficultyLevel; LEVEL_COUNT] = [
    level(0, "Easy -", 0.89, ValueRange::open(0.0, 1.18), "#66ff66"),
    level(1, "Easy", 1.47, ValueRange::open(1.18, 1.76), "#4dcc4d"),
    level(2, "Easy +", 2.06, ValueRange::open(1.76, 2.35), "#33cc33"),
    level(3, "Medium -", 2.65, ValueRange::open(2.35, 2.94), "#99ff33"),
    level(4, "Medium", 3.23, ValueRange::open(2.94, 3.53), "#99e600"),
    level(5, "Medium +", 3.83, ValueRange::open(3.53, 4.12), "#80cc00"),
    level(6, "Hard -", 4.42, ValueRange::open(4.12, 4.71), "#ffd633"),
    level(7, "Hard", 5.0, ValueRange::open(4.71, 5.29), "#ffb300"),
    level(8, "Hard +", 5.58, ValueRange::open(5.29, 5.88), "#ff9900"),
    level(9, "Very Hard -", 6.17, ValueRange::open(5.88, 6.47), "#ff8000"),
    level(10, "Very Hard", 6.76, ValueRange::open(6.47, 7.06), "#e67e00"),
    level(11, "Very Hard +", 7.36, ValueRange::open(7.06, 7.65), "#cc6600"),
    level(12, "Extreme -", 7.95, ValueRange::open(7.65, 8.24), "#ff4d00"),
    level(13, "Extreme", 8.53, ValueRange::open(8.24, 8.82), "#e04300"),
    level(14, "Extreme +", 9.12, ValueRange::open(8.82, 9.41), "#b92d00"),
    level(15, "Hell", 9.71, ValueRange::closed(9.41, SCALE_MAX), "#990000"),
];

/// All levels, easiest first.
pub fn levels() -> &'static [DifficultyLevel] {
    &LEVELS
}

/// Level at a given position in the ordering.
pub fn level_at(index: usize) -> Option<&'static DifficultyLevel> {
    LEVELS.get(index)
}

/// Look up a level by its exact name.
pub fn level_by_name(name: &str) -> Option<&'static DifficultyLevel> {
    LEVELS.iter().find(|level| level.name == name)
}

/// Position of a level in the ordering, or `None` for unknown names.
pub fn index_of(name: &str) -> Option<usize> {
    level_by_name(name).map(|level| level.index)
}

/// Midpoint of a named level.
pub fn midpoint(name: &str) -> Option<f64> {
    level_by_name(name).map(|level| level.midpoint)
}

/// Numeric range of a named level.
pub fn range(name: &str) -> Option<ValueRange> {
    level_by_name(name).map(|level| level.range)
}

/// Display color of a named level.
pub fn color(name: &str) -> Option<Rgb> {
    level_by_name(name).map(DifficultyLevel::color)
}

/// Parse a `#RRGGBB` color string.
///
/// Anything that is not exactly seven bytes starting with `#` yields black.
/// A channel whose digits do not parse as hex also degrades to 0.
pub fn parse_hex_color(hex: &str) -> Rgb {
    let bytes = hex.as_bytes();
    if bytes.len() != 7 || bytes[0] != b'#' {
        return Rgb::BLACK;
    }

    let channel = |start: usize| {
        hex.get(start..start + 2)
            .and_then(|pair| u8::from_str_radix(pair, 16).ok())
            .unwrap_or(0)
    };

    Rgb::new(channel(1), channel(3), channel(5))
}
