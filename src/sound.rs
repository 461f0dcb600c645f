//! Page-turn sound cue.
//!
//! A short synthesized rustle played on a detached thread so the update loop
//! never waits on the audio device.

use anyhow::{Context, Result};
use rodio::source::{SineWave, Source};
use rodio::{OutputStream, Sink};
use std::thread;
use std::time::Duration;
use tracing::{debug, warn};

const CUE_TONES: [(f32, u64); 2] = [(660.0, 45), (440.0, 70)];
const CUE_VOLUME: f32 = 0.12;

pub fn play_page_turn() {
    let spawned = thread::Builder::new()
        .name("page-turn-sound".to_string())
        .spawn(|| {
            if let Err(err) = play_blocking() {
                warn!("Page-turn sound failed: {err:#}");
            }
        });
    if let Err(err) = spawned {
        warn!("Failed to spawn sound thread: {err}");
    }
}

fn play_blocking() -> Result<()> {
    let (_stream, handle) = OutputStream::try_default().context("Opening audio output")?;
    let sink = Sink::try_new(&handle).context("Creating sink")?;
    for (freq, millis) in CUE_TONES {
        let tone = SineWave::new(freq)
            .take_duration(Duration::from_millis(millis))
            .fade_in(Duration::from_millis(8))
            .amplify(CUE_VOLUME);
        sink.append(tone);
    }
    debug!("Playing page-turn cue");
    sink.sleep_until_end();
    Ok(())
}
