use esp_hal::{
    clock::Clocks,
    gpio::OutputPin,
    peripheral::Peripheral,
    peripherals::RMT,
    rmt::Rmt,
};
use esp_hal_smartled::{LedAdapterError, SmartLedsAdapter};
use fugit::RateExtU32;
use lovematrix_util::{LED_COUNT, RGB8};
use smart_leds::SmartLedsWrite;

const RMT_CLOCK: u32 = 80; // MHz

// One RMT pulse code per bit, 24 bits per LED, plus the end marker
const BUFFER_SIZE: usize = LED_COUNT * 24 + 1;

// Interrupts stay masked for a whole frame so RMT refills keep up with the bit timing
pub struct LedStrip<W> {
    adapter: W,
}

impl<W> SmartLedsWrite for LedStrip<W>
where
    W: SmartLedsWrite<Color = RGB8>,
{
    type Error = W::Error;
    type Color = RGB8;

    fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        critical_section::with(|_| self.adapter.write(iterator))
    }
}

pub fn init<'d, O>(
    rmt: impl Peripheral<P = RMT> + 'd,
    pin: impl Peripheral<P = O> + 'd,
    clocks: &'d Clocks<'d>,
) -> LedStrip<impl SmartLedsWrite<Color = RGB8, Error = LedAdapterError> + 'd>
where
    O: OutputPin + 'd,
{
    let rmt = Rmt::new(rmt, RMT_CLOCK.MHz(), clocks).unwrap();

    let adapter = SmartLedsAdapter::new(rmt.channel0, pin, [0u32; BUFFER_SIZE], clocks);
    log::info!("LED strip ready, {} pixels", LED_COUNT);

    LedStrip { adapter }
}
