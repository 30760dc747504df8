//! Startup/goodbye tone sequences and the playback seam.

/// A tone as (frequency in Hz, duration in ms). A zero frequency is a rest.
pub type Note = (f32, u16);

/// Played by the power-up hook.
pub static STARTUP_MELODY: &[Note] = &[(440.0, 80), (554.37, 80), (659.25, 160)];

/// Played by the power-down hook.
pub static GOODBYE_MELODY: &[Note] = &[(659.25, 80), (554.37, 80), (440.0, 160)];

/// The framework's tone-playback primitive.
pub trait TonePlayer {
    fn play_note(&mut self, frequency_hz: f32, duration_ms: u16);

    fn play(&mut self, melody: &[Note]) {
        for &(frequency_hz, duration_ms) in melody {
            self.play_note(frequency_hz, duration_ms);
        }
    }
}
