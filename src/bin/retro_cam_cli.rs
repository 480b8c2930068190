use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use retro_cam_audio::assets::{BundleResolver, SOUND_ASSET_DIR};
use retro_cam_audio::audio::{AudioBackend, RodioBackend, SoundPlayer, StubBackend};
use retro_cam_audio::channel::{Gateway, MethodCall, MethodResponse};
use retro_cam_audio::config::AppConfig;
use retro_cam_audio::context::AppContext;
use retro_cam_audio::error::PlaybackErrorCodes;

#[derive(Parser, Debug)]
#[command(
    name = "retro_cam_cli",
    about = "Manual harness for the retro cam audio channel"
)]
struct Cli {
    /// Bundle directory containing assets/sounds
    #[arg(long, default_value = ".")]
    bundle_dir: PathBuf,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Send a playSystemSound invocation through the gateway
    Play {
        #[arg(long)]
        sound: String,
        /// Resolve and register without opening an audio device
        #[arg(long, default_value_t = false)]
        dry_run: bool,
        /// How long to keep the process alive so playback is audible
        #[arg(long, default_value_t = 1500)]
        linger_ms: u64,
    },
    /// List the sound names present in the bundle
    List,
}

fn main() -> ExitCode {
    env_logger::init();
    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:?}");
            ExitCode::from(1)
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Play {
            sound,
            dry_run,
            linger_ms,
        } => run_play(&cli.bundle_dir, &sound, dry_run, linger_ms),
        Commands::List => run_list(&cli.bundle_dir),
    }
}

fn run_play(bundle_dir: &Path, sound: &str, dry_run: bool, linger_ms: u64) -> Result<ExitCode> {
    let config = AppConfig::load_from_bundle(bundle_dir);
    let backend: Box<dyn AudioBackend + Send> = if dry_run {
        Box::new(StubBackend::new())
    } else {
        Box::new(RodioBackend::new())
    };
    let player = SoundPlayer::with_parts(
        Box::new(BundleResolver::new(bundle_dir)),
        backend,
        config.audio,
    );
    let context = AppContext::with_player(player);

    let response = Gateway::new(&context).handle(&MethodCall::play_system_sound(sound));
    println!("{}", serde_json::to_string(&response)?);

    let code = match &response {
        MethodResponse::Success => {
            if !dry_run {
                // The process owns the output stream; give the sound time
                // to actually reach the speakers before exiting.
                thread::sleep(Duration::from_millis(linger_ms));
            }
            0
        }
        MethodResponse::NotImplemented => 1,
        MethodResponse::Error { code, .. } => {
            if code == PlaybackErrorCodes::INVALID_ARGS {
                2
            } else if code == PlaybackErrorCodes::ASSET_MISSING {
                3
            } else {
                4
            }
        }
    };
    Ok(ExitCode::from(code))
}

fn run_list(bundle_dir: &Path) -> Result<ExitCode> {
    let sounds_dir = bundle_dir.join(SOUND_ASSET_DIR);
    let entries = fs::read_dir(&sounds_dir)
        .with_context(|| format!("reading {}", sounds_dir.display()))?;

    let mut names: Vec<String> = entries
        .flatten()
        .filter_map(|entry| {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) == Some("wav") {
                path.file_stem()
                    .and_then(|stem| stem.to_str())
                    .map(str::to_owned)
            } else {
                None
            }
        })
        .collect();
    names.sort();

    for name in &names {
        println!("{name}");
    }
    Ok(ExitCode::SUCCESS)
}
