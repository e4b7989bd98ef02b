use core::fmt::Debug;

use embedded_hal::delay::DelayNs;
use smart_leds::SmartLedsWrite;

use crate::{pixel::PixelBuffer, RGB8};

pub struct Matrix<W, D> {
    buffer: PixelBuffer,
    writer: W,
    delay: D,
    pub(crate) passes: u32,
}

impl<W, D> Matrix<W, D>
where
    W: SmartLedsWrite<Color = RGB8>,
    W::Error: Debug,
    D: DelayNs,
{
    pub fn new(writer: W, delay: D) -> Self {
        Self {
            buffer: PixelBuffer::new(),
            writer,
            delay,
            passes: 0,
        }
    }

    pub fn set(&mut self, index: usize, r: u8, g: u8, b: u8) {
        self.buffer.set(index, r, g, b);
    }

    pub fn set_color(&mut self, index: usize, color: RGB8) {
        self.buffer.set_color(index, color);
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    pub fn write(&mut self) {
        if let Err(e) = self.writer.write(self.buffer.pixels().iter().copied()) {
            log::warn!("LED write failed: {:?}", e);
        }
    }

    pub fn hold(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }

    #[cfg(test)]
    pub(crate) fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    #[cfg(test)]
    pub(crate) fn release(self) -> (W, D) {
        (self.writer, self.delay)
    }
}
