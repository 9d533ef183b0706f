use crate::model::{ColorIndex, colors};

const BASE: [ColorIndex; 5] = [
    colors::BLUE,
    colors::GREEN,
    colors::CYAN,
    colors::MAGENTA,
    colors::RED,
];

// Hue offset of each block of five.
const OFFSETS: [i16; 5] = [0, 2, -7, -4, -9];

pub const PALETTE_LEN: usize = BASE.len() * OFFSETS.len();

pub fn palette() -> [ColorIndex; PALETTE_LEN] {
    let mut out = [ColorIndex(0); PALETTE_LEN];
    for (block, offset) in OFFSETS.iter().enumerate() {
        for (i, base) in BASE.iter().enumerate() {
            out[block * BASE.len() + i] = base.offset(*offset);
        }
    }
    out
}

/// Color of the series at `position` in a composition.
pub fn series_color(position: usize) -> ColorIndex {
    palette()[position % PALETTE_LEN]
}
