//! Procedural synthesis of the bundled camera sounds
//!
//! The retro cam ships nine mechanical sounds (shutter variants, the film
//! advance ratchet, a UI click) that are rendered rather than recorded.
//! Each renderer mixes exponentially-enveloped sine tones with seeded
//! noise bursts and writes a 44.1 kHz mono 16-bit WAV. The same renderers
//! feed the `retro_cam_sounds` binary that populates a bundle directory
//! and the test suites that need real decodable assets.

use std::f32::consts::TAU;
use std::path::Path;

use anyhow::{bail, Context, Result};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Sample rate of every bundled sound.
pub const SAMPLE_RATE: u32 = 44_100;

/// Logical names of the sounds shipped in the bundle.
pub const BUNDLED_SOUNDS: &[&str] = &[
    "shutter",
    "wetzlar_shutter",
    "portra_shutter",
    "kchrome_shutter",
    "superia_shutter",
    "nightcine_shutter",
    "magic_shutter",
    "wind",
    "click",
];

/// Render a bundled sound to normalized f32 samples.
///
/// Returns None for names outside [BUNDLED_SOUNDS]. Output is
/// deterministic per name: the noise generator is seeded from the name.
pub fn render_sound(name: &str) -> Option<Vec<f32>> {
    let mut rng = StdRng::seed_from_u64(seed_for(name));
    let samples = match name {
        "shutter" => render_shutter(&mut rng),
        "wetzlar_shutter" => render_wetzlar_shutter(&mut rng),
        "portra_shutter" => render_portra_shutter(&mut rng),
        "kchrome_shutter" => render_kchrome_shutter(&mut rng),
        "superia_shutter" => render_superia_shutter(&mut rng),
        "nightcine_shutter" => render_nightcine_shutter(&mut rng),
        "magic_shutter" => render_magic_shutter(&mut rng),
        "wind" => render_wind(&mut rng),
        "click" => render_click(&mut rng),
        _ => return None,
    };
    Some(samples)
}

/// Render a bundled sound and write it as a WAV file.
///
/// # Arguments
/// * `name` - Logical sound name (one of [BUNDLED_SOUNDS])
/// * `path` - Destination WAV path
pub fn write_sound(name: &str, path: &Path) -> Result<()> {
    let Some(samples) = render_sound(name) else {
        bail!("unknown bundled sound '{name}'");
    };
    write_wav(path, &samples).with_context(|| format!("writing {}", path.display()))
}

fn write_wav(path: &Path, samples: &[f32]) -> Result<()> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec)?;
    for &sample in samples {
        let clamped = sample.clamp(-1.0, 1.0);
        writer.write_sample((clamped * 32767.0) as i16)?;
    }
    writer.finalize()?;
    Ok(())
}

fn seed_for(name: &str) -> u64 {
    // FNV-1a keeps renders reproducible without dragging in a hasher.
    name.bytes().fold(0xcbf2_9ce4_8422_2325u64, |hash, byte| {
        (hash ^ u64::from(byte)).wrapping_mul(0x0000_0100_0000_01b3)
    })
}

fn frames(duration: f32) -> usize {
    (duration * SAMPLE_RATE as f32) as usize
}

fn times(duration: f32) -> impl Iterator<Item = f32> {
    (0..frames(duration)).map(|i| i as f32 / SAMPLE_RATE as f32)
}

fn env(t: f32, onset: f32, rate: f32) -> f32 {
    (-(t - onset) * rate).exp()
}

fn tone(t: f32, hz: f32) -> f32 {
    (TAU * hz * t).sin()
}

/// SLR-style shutter: mirror slap, two curtain clicks, mirror return thud.
fn render_shutter(rng: &mut StdRng) -> Vec<f32> {
    times(0.4)
        .map(|t| {
            let mut sample = 0.0;
            if (0.0..0.05).contains(&t) {
                let noise: f32 = rng.gen_range(-1.0..1.0);
                sample += (tone(t, 100.0) * 0.3 + noise * 0.7) * env(t, 0.0, 50.0);
            }
            if (0.08..0.15).contains(&t) {
                let noise: f32 = rng.gen_range(-1.0..1.0);
                sample += noise * env(t, 0.08, 100.0);
            }
            if (0.12..0.2).contains(&t) {
                let noise: f32 = rng.gen_range(-1.0..1.0);
                sample += noise * env(t, 0.12, 100.0);
            }
            if (0.2..0.4).contains(&t) {
                let noise: f32 = rng.gen_range(-1.0..1.0);
                sample += (tone(t, 80.0) * 0.4 + noise * 0.6) * env(t, 0.2, 30.0) * 0.8;
            }
            sample * 0.8
        })
        .collect()
}

/// Rangefinder shutter: sharp snap with a resonant metallic ring.
fn render_wetzlar_shutter(rng: &mut StdRng) -> Vec<f32> {
    times(0.3)
        .map(|t| {
            let mut sample = 0.0;
            if (0.0..0.03).contains(&t) {
                let noise: f32 = rng.gen_range(-1.0..1.0);
                sample += noise * env(t, 0.0, 150.0) * 1.2;
            }
            if (0.0..0.2).contains(&t) {
                sample +=
                    (tone(t, 3200.0) * 0.6 + tone(t, 4500.0) * 0.4) * env(t, 0.0, 15.0) * 0.6;
            }
            if (0.08..0.25).contains(&t) {
                sample += tone(t, 120.0) * env(t, 0.08, 40.0) * 0.9;
            }
            sample * 0.8
        })
        .collect()
}

fn render_portra_shutter(rng: &mut StdRng) -> Vec<f32> {
    times(0.4)
        .map(|t| {
            let mut sample = 0.0;
            if (0.0..0.05).contains(&t) {
                let noise: f32 = rng.gen_range(-1.0..1.0);
                sample += noise * env(t, 0.0, 80.0) * 0.8;
            }
            if (0.1..0.2).contains(&t) {
                sample += tone(t, 300.0) * env(t, 0.1, 50.0);
            }
            sample * 0.8
        })
        .collect()
}

fn render_kchrome_shutter(rng: &mut StdRng) -> Vec<f32> {
    times(0.25)
        .map(|t| {
            let mut sample = 0.0;
            if (0.0..0.08).contains(&t) {
                let noise: f32 = rng.gen_range(-1.0..1.0);
                sample += (tone(t, 1500.0) * 0.4 + noise * 0.6) * env(t, 0.0, 100.0) * 1.2;
            }
            sample * 0.8
        })
        .collect()
}

/// Point-and-shoot: snap followed by a decaying motor whine.
fn render_superia_shutter(rng: &mut StdRng) -> Vec<f32> {
    times(0.5)
        .map(|t| {
            let mut sample = 0.0;
            if (0.0..0.05).contains(&t) {
                let noise: f32 = rng.gen_range(-1.0..1.0);
                sample += noise * env(t, 0.0, 120.0) * 0.9;
            }
            if (0.05..0.4).contains(&t) {
                sample += tone(t, 600.0) * env(t, 0.05, 5.0) * 0.6;
            }
            sample * 0.8
        })
        .collect()
}

fn render_nightcine_shutter(rng: &mut StdRng) -> Vec<f32> {
    times(0.6)
        .map(|t| {
            let mut sample = 0.0;
            if (0.0..0.1).contains(&t) {
                let noise: f32 = rng.gen_range(-1.0..1.0);
                sample += (tone(t, 80.0) * 0.8 + noise * 0.2) * env(t, 0.0, 40.0) * 1.2;
            }
            if (0.3..0.5).contains(&t) {
                sample += tone(t, 60.0) * env(t, 0.3, 30.0) * 1.2;
            }
            sample * 0.8
        })
        .collect()
}

/// Instant camera: snap, then a long two-tone ejection whir.
fn render_magic_shutter(rng: &mut StdRng) -> Vec<f32> {
    times(1.5)
        .map(|t| {
            let mut sample = 0.0;
            if (0.0..0.1).contains(&t) {
                let noise: f32 = rng.gen_range(-1.0..1.0);
                sample += noise * env(t, 0.0, 80.0) * 0.8;
            }
            if (0.2..1.4).contains(&t) {
                let sustain = if t < 1.2 { 1.0 } else { env(t, 1.2, 10.0) };
                sample += (tone(t, 400.0) * 0.5 + tone(t, 410.0) * 0.5) * sustain * 0.5;
            }
            sample * 0.8
        })
        .collect()
}

/// Film advance: plastic ratchet clicks over constant gear friction.
fn render_wind(rng: &mut StdRng) -> Vec<f32> {
    times(1.2)
        .map(|t| {
            // Ratchet frequency varies slightly to sound hand-driven.
            let ratchet_period = 0.06 + (t * 5.0).sin() * 0.01;
            let cycle = (t % ratchet_period) / ratchet_period;

            let mut click = 0.0;
            if cycle < 0.3 {
                let envelope = (1.0 - cycle / 0.3).powi(2);
                let noise: f32 = rng.gen_range(-1.0..1.0);
                let resonance = tone(t, 800.0) * (-cycle * 10.0).exp();
                click = (noise * 0.8 + resonance * 0.2) * envelope;
            }

            let friction: f32 = rng.gen_range(-0.1..0.1) * 0.3;
            (click + friction) * 0.8
        })
        .collect()
}

/// UI click: short noise burst with a metallic ping.
fn render_click(rng: &mut StdRng) -> Vec<f32> {
    times(0.05)
        .map(|t| {
            let noise: f32 = rng.gen_range(-1.0..1.0);
            let ping = tone(t, 1200.0) * env(t, 0.0, 200.0);
            (noise * 0.4 + ping * 0.6) * env(t, 0.0, 150.0) * 0.8
        })
        .collect()
}
