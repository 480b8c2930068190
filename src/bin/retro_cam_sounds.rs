use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use retro_cam_audio::assets::SOUND_ASSET_DIR;
use retro_cam_audio::synth::{self, BUNDLED_SOUNDS};

#[derive(Parser, Debug)]
#[command(
    name = "retro_cam_sounds",
    about = "Render the bundled retro cam sounds into an asset directory"
)]
struct Cli {
    /// Directory that receives assets/sounds/<name>.wav
    #[arg(long, default_value = ".")]
    bundle_dir: PathBuf,
    /// Render only the named sound instead of the full set
    #[arg(long)]
    sound: Option<String>,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:?}");
            ExitCode::from(1)
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let sounds_dir = cli.bundle_dir.join(SOUND_ASSET_DIR);
    fs::create_dir_all(&sounds_dir)
        .with_context(|| format!("creating {}", sounds_dir.display()))?;

    let names: Vec<&str> = match &cli.sound {
        Some(name) => vec![name.as_str()],
        None => BUNDLED_SOUNDS.to_vec(),
    };

    for name in names {
        let path = sounds_dir.join(format!("{name}.wav"));
        synth::write_sound(name, &path)?;
        println!("wrote {}", path.display());
    }

    Ok(())
}
