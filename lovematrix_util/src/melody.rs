//! Background tune and the loop that plays it on a [`Tone`] output.

use embedded_hal::delay::DelayNs;

/// Square-wave output driving the buzzer.
pub trait Tone {
    /// `frequency_hz` must be non-zero, use [`Tone::play`] for table entries
    /// that may be [`notes::REST`].
    fn tone(&mut self, frequency_hz: u32, duty_pct: u8);

    /// Holds the output low without touching the configured pitch.
    fn silence(&mut self);

    fn play(&mut self, frequency_hz: u32, duty_pct: u8) {
        if frequency_hz > 0 {
            self.tone(frequency_hz, duty_pct);
        } else {
            self.silence();
        }
    }
}

/// Pitches in whole Hz.
pub mod notes {
    pub const REST: u32 = 0;

    pub const B4: u32 = 246;
    pub const C5: u32 = 261;
    pub const D5: u32 = 293;
    pub const E5: u32 = 329;
    pub const F5: u32 = 349;
    pub const FS5: u32 = 740;
    pub const G5: u32 = 392;
    pub const GS5: u32 = 830;
    pub const A5: u32 = 440;
    pub const B5: u32 = 493;
    pub const C6: u32 = 523;
    pub const D6: u32 = 587;
    pub const E6: u32 = 659;
    pub const F6: u32 = 698;
    pub const G6: u32 = 783;
    pub const A6: u32 = 880;
    pub const B6: u32 = 987;
    pub const C7: u32 = 1046;
    pub const D7: u32 = 1174;
    pub const E7: u32 = 1318;
    pub const F7: u32 = 1396;
    pub const G7: u32 = 1567;
    pub const A7: u32 = 1760;
    pub const B7: u32 = 1975;
    pub const C8: u32 = 2093;

    pub const WHOLE_NOTE: u32 = 1000;
    pub const HALF_NOTE: u32 = 500;
    pub const QUARTER_NOTE: u32 = 250;
    pub const EIGHTH_NOTE: u32 = 125;
}

use notes::*;

pub const MELODY_LEN: usize = 34;

/// Silence inserted after every note, rests included.
pub const NOTE_GAP_MS: u32 = 50;
pub const NOTE_DUTY_PCT: u8 = 50;

#[rustfmt::skip]
pub const FREQUENCIES: [u32; MELODY_LEN] = [
    FS5, FS5, D5, B4, REST, B4, REST, E5, REST,
    E5, REST, E5, GS5, GS5, A5, B5, A5,
    A5, A5, E5, REST, D5, REST, FS5, REST, FS5,
    REST, FS5, E5, E5, FS5, E5, REST, REST,
];

pub const DURATIONS: [u32; MELODY_LEN] = [EIGHTH_NOTE; MELODY_LEN];

pub struct MelodyPlayer<T, D> {
    tone: T,
    delay: D,
    passes: u32,
}

impl<T: Tone, D: DelayNs> MelodyPlayer<T, D> {
    pub fn new(tone: T, delay: D) -> Self {
        Self {
            tone,
            delay,
            passes: 0,
        }
    }

    pub fn play_once(&mut self) {
        self.passes = self.passes.wrapping_add(1);
        log::debug!("Melody pass {}", self.passes);

        for (&frequency, &duration) in FREQUENCIES.iter().zip(DURATIONS.iter()) {
            self.tone.play(frequency, NOTE_DUTY_PCT);
            self.delay.delay_ms(duration);

            self.tone.silence();
            self.delay.delay_ms(NOTE_GAP_MS);
        }
    }

    pub fn run(&mut self) -> ! {
        loop {
            self.play_once();
        }
    }

    #[cfg(test)]
    pub(crate) fn release(self) -> (T, D) {
        (self.tone, self.delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{RecordingDelay, RecordingTone, ToneEvent};

    fn play() -> (RecordingTone, RecordingDelay) {
        let mut player = MelodyPlayer::new(RecordingTone::default(), RecordingDelay::default());
        player.play_once();
        player.release()
    }

    #[test]
    fn rest_frequency_plays_as_silence() {
        let mut tone = RecordingTone::default();
        tone.play(REST, NOTE_DUTY_PCT);
        tone.play(A5, NOTE_DUTY_PCT);
        assert_eq!(
            tone.events,
            vec![
                ToneEvent::Silence,
                ToneEvent::Tone {
                    frequency_hz: A5,
                    duty_pct: NOTE_DUTY_PCT
                },
            ]
        );
    }

    #[test]
    fn tables_line_up() {
        assert_eq!(FREQUENCIES.len(), DURATIONS.len());
        assert!(DURATIONS.iter().all(|&duration| duration > 0));
    }

    #[test]
    fn every_note_is_followed_by_a_gap() {
        let (tone, delay) = play();

        assert_eq!(tone.events.len(), 2 * MELODY_LEN);
        assert_eq!(delay.holds.len(), 2 * MELODY_LEN);
        for (i, holds) in delay.holds.chunks(2).enumerate() {
            assert_eq!(holds, [DURATIONS[i], NOTE_GAP_MS]);
        }
        for events in tone.events.chunks(2) {
            assert_eq!(events[1], ToneEvent::Silence);
        }
    }

    #[test]
    fn rests_stay_silent() {
        let (tone, _) = play();

        for (i, events) in tone.events.chunks(2).enumerate() {
            let expected = match FREQUENCIES[i] {
                REST => ToneEvent::Silence,
                frequency_hz => ToneEvent::Tone {
                    frequency_hz,
                    duty_pct: NOTE_DUTY_PCT,
                },
            };
            assert_eq!(events[0], expected, "note {}", i);
        }

        let played = tone
            .events
            .iter()
            .filter(|event| matches!(event, ToneEvent::Tone { .. }))
            .count();
        assert_eq!(played, 24);
    }

    #[test]
    fn one_pass_takes_notes_plus_gaps() {
        let (_, delay) = play();
        let notes: u32 = DURATIONS.iter().sum();
        assert_eq!(delay.total_ms(), notes + NOTE_GAP_MS * MELODY_LEN as u32);
        assert_eq!(delay.total_ms(), 5950);
    }

    #[test]
    fn passes_repeat_identically() {
        let mut player = MelodyPlayer::new(RecordingTone::default(), RecordingDelay::default());
        player.play_once();
        player.play_once();
        assert_eq!(player.passes, 2);

        let (tone, _) = player.release();
        let (first, second) = tone.events.split_at(2 * MELODY_LEN);
        assert_eq!(first, second);
    }
}
