use serde::{Deserialize, Serialize};

/// Palette index in the classic numbered color wheel.
///
/// The five primaries sit on multiples of 16; `base + n` (n = 1..4) are
/// darker shades and `base - n` (n = 1..10) lighter ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorIndex(pub i16);

pub const WHITE: ColorIndex = ColorIndex(0);
pub const BLACK: ColorIndex = ColorIndex(1);
pub const TITLE_FILL: ColorIndex = ColorIndex(10);

pub const GREEN: ColorIndex = ColorIndex(416);
pub const CYAN: ColorIndex = ColorIndex(432);
pub const BLUE: ColorIndex = ColorIndex(600);
pub const MAGENTA: ColorIndex = ColorIndex(616);
pub const RED: ColorIndex = ColorIndex(632);

const WHEEL: [(i16, (u8, u8, u8)); 5] = [
    (416, (0, 255, 0)),
    (432, (0, 255, 255)),
    (600, (0, 0, 255)),
    (616, (255, 0, 255)),
    (632, (255, 0, 0)),
];

impl ColorIndex {
    pub fn offset(self, delta: i16) -> ColorIndex {
        ColorIndex(self.0 + delta)
    }

    /// Approximate RGB for terminal painting.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self.0 {
            0 | 10 => return (255, 255, 255),
            1 => return (0, 0, 0),
            _ => {}
        }

        // Each primary owns the band [base - 10, base + 4].
        let Some((base, (r, g, b))) = WHEEL
            .iter()
            .copied()
            .find(|(base, _)| self.0 >= base - 10 && self.0 <= base + 4)
        else {
            return (128, 128, 128);
        };

        let shade = self.0 - base;
        if shade >= 0 {
            let keep = 1.0 - 0.15 * f32::from(shade);
            (scale(r, keep), scale(g, keep), scale(b, keep))
        } else {
            let mix = 0.08 * f32::from(-shade);
            (lighten(r, mix), lighten(g, mix), lighten(b, mix))
        }
    }
}

fn scale(c: u8, keep: f32) -> u8 {
    (f32::from(c) * keep).round().clamp(0.0, 255.0) as u8
}

fn lighten(c: u8, mix: f32) -> u8 {
    (f32::from(c) + (255.0 - f32::from(c)) * mix)
        .round()
        .clamp(0.0, 255.0) as u8
}
