use esp_hal::{
    clock::Clocks,
    gpio::OutputPin,
    into_ref,
    ledc::{
        channel::{self, ChannelHW, ChannelIFace},
        timer::{self, TimerIFace},
        LSGlobalClkSource, Ledc, LowSpeed,
    },
    peripheral::{Peripheral, PeripheralRef},
    peripherals::LEDC,
};
use fugit::RateExtU32;
use lovematrix_util::melody::Tone;

/// Passive piezo on LEDC low speed timer 0 / channel 0.
pub struct Buzzer<'d, O>
where
    O: OutputPin + Peripheral<P = O>,
{
    ledc: Ledc<'d>,
    pin: PeripheralRef<'d, O>,
}

impl<'d, O> Buzzer<'d, O>
where
    O: OutputPin + Peripheral<P = O>,
{
    pub fn new(
        ledc: impl Peripheral<P = LEDC> + 'd,
        pin: impl Peripheral<P = O> + 'd,
        clocks: &'d Clocks<'d>,
    ) -> Self {
        into_ref!(pin);

        let mut ledc = Ledc::new(ledc, clocks);
        ledc.set_global_slow_clock(LSGlobalClkSource::APBClk);

        Self { ledc, pin }
    }

    // Rebuilding the timer recomputes the clock divider for the new pitch
    fn configure(&mut self, frequency: u32, duty_pct: u8) {
        let mut lstimer0 = self.ledc.get_timer::<LowSpeed>(timer::Number::Timer0);
        if let Err(e) = lstimer0.configure(timer::config::Config {
            duty: timer::config::Duty::Duty10Bit,
            clock_source: timer::LSClockSource::APBClk,
            frequency: frequency.Hz(),
        }) {
            log::warn!("Buzzer timer rejected {} Hz: {:?}", frequency, e);
            return;
        }

        let mut channel0 = self
            .ledc
            .get_channel(channel::Number::Channel0, self.pin.reborrow());
        if let Err(e) = channel0.configure(channel::config::Config {
            timer: &lstimer0,
            duty_pct,
            pin_config: channel::config::PinConfig::PushPull,
        }) {
            log::warn!("Buzzer channel rejected {}% duty: {:?}", duty_pct, e);
        }
    }
}

impl<O> Tone for Buzzer<'_, O>
where
    O: OutputPin + Peripheral<P = O>,
{
    fn tone(&mut self, frequency_hz: u32, duty_pct: u8) {
        if frequency_hz == 0 {
            self.silence();
            return;
        }
        log::trace!("Tone {} Hz", frequency_hz);
        self.configure(frequency_hz, duty_pct);
    }

    // Duty register only, the timer keeps its pitch
    fn silence(&mut self) {
        self.ledc
            .get_channel::<LowSpeed, _>(channel::Number::Channel0, self.pin.reborrow())
            .set_duty_hw(0);
    }
}
