//! Fixed pixel art for the 5x5 matrix and the routines that show it.
//!
//! Indices are raw strip positions, which is not always what a plain
//! row-major reading of the grid would suggest.

use core::fmt::Debug;

use embedded_hal::delay::DelayNs;
use smart_leds::SmartLedsWrite;

use crate::{matrix::Matrix, LED_COUNT, MATRIX_WIDTH, RGB8};

pub const RED: RGB8 = RGB8 { r: 255, g: 0, b: 0 };
pub const ORANGE: RGB8 = RGB8 { r: 255, g: 165, b: 0 };
pub const YELLOW: RGB8 = RGB8 { r: 255, g: 255, b: 0 };
pub const GREEN: RGB8 = RGB8 { r: 0, g: 255, b: 0 };
pub const BLUE: RGB8 = RGB8 { r: 0, g: 0, b: 255 };
pub const PINK: RGB8 = RGB8 { r: 255, g: 102, b: 204 };

pub const LETTER_HOLD_MS: u32 = 1000;
pub const HEART_ON_MS: u32 = 500;
pub const HEART_OFF_MS: u32 = 200;
pub const HEART_BLINKS: usize = 3;
pub const FLAG_ROW_MS: u32 = 500;
pub const FLAG_HOLD_MS: u32 = 1000;
pub const WAVE_FRAME_MS: u32 = 100;
pub const WAVE_FRAMES: usize = LED_COUNT;

#[derive(Clone, Copy, Debug)]
pub struct Glyph {
    pub color: RGB8,
    pub indices: &'static [usize],
}

pub const LETTER_L: Glyph = Glyph {
    color: RED,
    indices: &[1, 2, 3, 6, 13, 16, 23],
};

pub const LETTER_O: Glyph = Glyph {
    color: GREEN,
    indices: &[1, 2, 3, 6, 13, 16, 23, 22, 21, 18, 11, 8],
};

pub const LETTER_V: Glyph = Glyph {
    color: BLUE,
    indices: &[24, 16, 13, 7, 2, 11, 18, 20],
};

pub const LETTER_E: Glyph = Glyph {
    color: YELLOW,
    indices: &[1, 2, 3, 6, 16, 13, 12, 11, 23, 22, 21],
};

/// Outline first, then the pink fill drawn over it.
pub const HEART: [Glyph; 2] = [
    Glyph {
        color: RED,
        indices: &[23, 21, 15, 17, 19, 14, 10, 6, 8, 2],
    },
    Glyph {
        color: PINK,
        indices: &[16, 18, 13, 12, 11, 7],
    },
];

/// Top to bottom.
pub const FLAG_ROWS: [RGB8; MATRIX_WIDTH] = [RED, ORANGE, YELLOW, GREEN, BLUE];

pub fn wave_color(index: usize, t: usize) -> RGB8 {
    match (index + t) % 3 {
        0 => RED,
        1 => GREEN,
        _ => BLUE,
    }
}

impl<W, D> Matrix<W, D>
where
    W: SmartLedsWrite<Color = RGB8>,
    W::Error: Debug,
    D: DelayNs,
{
    pub fn draw(&mut self, glyph: &Glyph) {
        for &index in glyph.indices {
            self.set_color(index, glyph.color);
        }
    }

    fn show_letter(&mut self, glyph: &Glyph) {
        self.clear();
        self.draw(glyph);
        self.write();
        self.hold(LETTER_HOLD_MS);
    }

    pub fn letter_l(&mut self) {
        log::debug!("Letter L");
        self.show_letter(&LETTER_L);
    }

    pub fn letter_o(&mut self) {
        log::debug!("Letter O");
        self.show_letter(&LETTER_O);
    }

    pub fn letter_v(&mut self) {
        log::debug!("Letter V");
        self.show_letter(&LETTER_V);
    }

    pub fn letter_e(&mut self) {
        log::debug!("Letter E");
        self.show_letter(&LETTER_E);
    }

    pub fn heart(&mut self) {
        log::debug!("Heart");
        for _ in 0..HEART_BLINKS {
            self.clear();
            for glyph in &HEART {
                self.draw(glyph);
            }
            self.write();
            self.hold(HEART_ON_MS);

            self.clear();
            self.write();
            self.hold(HEART_OFF_MS);
        }
    }

    /// Paints the flag one row at a time on top of the current buffer
    /// contents, without clearing first.
    pub fn rainbow_flag(&mut self) {
        log::debug!("Rainbow flag");
        for (row, color) in FLAG_ROWS.iter().enumerate() {
            for col in 0..MATRIX_WIDTH {
                self.set_color(row * MATRIX_WIDTH + col, *color);
            }
            self.write();
            self.hold(FLAG_ROW_MS);
        }
        self.hold(FLAG_HOLD_MS);
    }

    pub fn rainbow_wave(&mut self) {
        log::debug!("Rainbow wave");
        for t in 0..WAVE_FRAMES {
            for index in 0..LED_COUNT {
                self.set_color(index, wave_color(index, t));
            }
            self.write();
            self.hold(WAVE_FRAME_MS);
        }
    }

    /// One full pass of the show. Leaves the buffer cleared but not written.
    pub fn animate(&mut self) {
        self.passes = self.passes.wrapping_add(1);
        log::trace!("Animation pass {}", self.passes);

        self.rainbow_flag();
        self.letter_l();
        self.letter_o();
        self.letter_v();
        self.letter_e();
        self.heart();
        self.rainbow_wave();
        self.clear();
    }
}
