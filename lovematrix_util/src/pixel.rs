use crate::{BRIGHTNESS, LED_COUNT, RGB8};

pub type Frame = [RGB8; LED_COUNT];

const OFF: RGB8 = RGB8 { r: 0, g: 0, b: 0 };

pub fn attenuate(value: u8) -> u8 {
    (value as f32 * BRIGHTNESS) as u8
}

/// Row-major, already attenuated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    pixels: Frame,
}

impl PixelBuffer {
    pub(crate) const fn new() -> Self {
        Self {
            pixels: [OFF; LED_COUNT],
        }
    }

    /// Panics if `index` is not below [`LED_COUNT`].
    pub fn set(&mut self, index: usize, r: u8, g: u8, b: u8) {
        self.pixels[index] = RGB8 {
            r: attenuate(r),
            g: attenuate(g),
            b: attenuate(b),
        };
    }

    pub fn set_color(&mut self, index: usize, color: RGB8) {
        self.set(index, color.r, color.g, color.b);
    }

    pub fn clear(&mut self) {
        for index in 0..LED_COUNT {
            self.set(index, 0, 0, 0);
        }
    }

    pub fn pixels(&self) -> &Frame {
        &self.pixels
    }
}
