#![cfg_attr(not(test), no_std)]

pub use smart_leds::RGB8;

pub const MATRIX_WIDTH: usize = 5;
pub const LED_COUNT: usize = MATRIX_WIDTH * MATRIX_WIDTH;

/// Fraction of each requested channel value that actually reaches the strip.
pub const BRIGHTNESS: f32 = 0.3;

pub mod matrix;
pub mod melody;
pub mod pattern;
pub mod pixel;

#[cfg(test)]
mod mock;
