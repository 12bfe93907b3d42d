//! Large-digit glyphs for the countdown.
//!
//! Each glyph is [`GLYPH_HEIGHT`] rows tall. Rows of one glyph share a
//! width, so joined lines stay aligned.

/// Rows per glyph.
pub const GLYPH_HEIGHT: usize = 5;

type Glyph = [&'static str; GLYPH_HEIGHT];

const ZERO: Glyph = ["█████", "█   █", "█   █", "█   █", "█████"];
const ONE: Glyph = ["  ██ ", "   █ ", "   █ ", "   █ ", "  ███"];
const TWO: Glyph = ["█████", "    █", "█████", "█    ", "█████"];
const THREE: Glyph = ["█████", "    █", " ████", "    █", "█████"];
const FOUR: Glyph = ["█   █", "█   █", "█████", "    █", "    █"];
const FIVE: Glyph = ["█████", "█    ", "█████", "    █", "█████"];
const SIX: Glyph = ["█████", "█    ", "█████", "█   █", "█████"];
const SEVEN: Glyph = ["█████", "    █", "   █ ", "  █  ", "  █  "];
const EIGHT: Glyph = ["█████", "█   █", "█████", "█   █", "█████"];
const NINE: Glyph = ["█████", "█   █", "█████", "    █", "█████"];
const COLON: Glyph = ["   ", " █ ", "   ", " █ ", "   "];
const BLANK: Glyph = ["     ", "     ", "     ", "     ", "     "];

const fn glyph(c: char) -> Glyph {
    match c {
        '0' => ZERO,
        '1' => ONE,
        '2' => TWO,
        '3' => THREE,
        '4' => FOUR,
        '5' => FIVE,
        '6' => SIX,
        '7' => SEVEN,
        '8' => EIGHT,
        '9' => NINE,
        ':' => COLON,
        _ => BLANK,
    }
}

/// Render `text` as [`GLYPH_HEIGHT`] lines of block art.
///
/// Glyphs are separated by one column. Characters without a glyph render
/// as blank space of digit width.
#[must_use]
pub fn big_text(text: &str) -> Vec<String> {
    (0..GLYPH_HEIGHT)
        .map(|row| {
            text.chars()
                .map(|c| glyph(c)[row])
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Display width of a block of lines, in terminal columns.
#[must_use]
pub fn block_width(lines: &[String]) -> usize {
    lines
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0)
}
