use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use smart_leds::SmartLedsWrite;

use crate::{melody::Tone, pixel::Frame, RGB8};

/// Keeps a copy of every frame sent to the strip.
#[derive(Default)]
pub struct RecordingWriter {
    pub frames: Vec<Frame>,
}

impl SmartLedsWrite for RecordingWriter {
    type Error = Infallible;
    type Color = RGB8;

    fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        let mut frame = [RGB8::default(); crate::LED_COUNT];
        for (slot, color) in frame.iter_mut().zip(iterator) {
            *slot = color.into();
        }
        self.frames.push(frame);
        Ok(())
    }
}

/// Writer that always fails, for checking that errors are swallowed.
pub struct BrokenWriter;

impl SmartLedsWrite for BrokenWriter {
    type Error = &'static str;
    type Color = RGB8;

    fn write<T, I>(&mut self, _iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        Err("line stuck low")
    }
}

/// Records every requested hold in milliseconds.
#[derive(Default)]
pub struct RecordingDelay {
    pub holds: Vec<u32>,
}

impl RecordingDelay {
    pub fn total_ms(&self) -> u32 {
        self.holds.iter().sum()
    }
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.holds.push(ns / 1_000_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.holds.push(ms);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToneEvent {
    Tone { frequency_hz: u32, duty_pct: u8 },
    Silence,
}

#[derive(Default)]
pub struct RecordingTone {
    pub events: Vec<ToneEvent>,
}

impl Tone for RecordingTone {
    fn tone(&mut self, frequency_hz: u32, duty_pct: u8) {
        self.events.push(ToneEvent::Tone {
            frequency_hz,
            duty_pct,
        });
    }

    fn silence(&mut self) {
        self.events.push(ToneEvent::Silence);
    }
}
