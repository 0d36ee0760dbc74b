// pdf-tts - Convert PDF files or text to speech using AWS Polly

mod config;
mod error;
mod input;
mod options;
mod output;
mod pipeline;
mod rng;
mod settings;
mod tts;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use config::PdfTtsConfig;
use input::LopdfExtractor;
use pipeline::{Job, Overrides};
use rng::SystemRandom;
use std::path::PathBuf;
use tts::polly::{AwsCredentials, PollySynthesizer};

#[derive(Parser, Debug)]
#[command(name = "pdf-tts")]
#[command(about = "Convert PDF files or text to speech using AWS Polly", long_about = None)]
#[command(version)]
struct Args {
    /// PDF file to read aloud
    #[arg(short, long)]
    pdf: Option<PathBuf>,

    /// Text to read when no PDF is given (or the PDF is not found)
    #[arg(short, long)]
    text: Option<String>,

    /// Ignore --pdf and --text and read a random sample sentence
    #[arg(long)]
    random_text: bool,

    /// Output file name without extension (default: pdf_tts_<random>)
    #[arg(short = 'o', long)]
    prefix: Option<String>,

    /// Write the audio file to the system temp directory
    #[arg(long)]
    temp_dir: bool,

    /// Voice to use (see --list-voices)
    #[arg(short, long)]
    voice: Option<String>,

    /// Audio format: json, mp3, ogg_vorbis or pcm
    #[arg(short, long)]
    format: Option<String>,

    /// Sample rate: 8000, 16000, 22050 or 24000
    #[arg(short, long)]
    sample_rate: Option<String>,

    /// English accent language code (see --list-accents)
    #[arg(short, long)]
    accent: Option<String>,

    /// Pick a random voice
    #[arg(long)]
    random_voice: bool,

    /// Pick a random English accent
    #[arg(long)]
    random_accent: bool,

    /// List available voices
    #[arg(long)]
    list_voices: bool,

    /// List available accents
    #[arg(long)]
    list_accents: bool,

    /// Enable debug output
    #[arg(short, long, default_value_t = false)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set a configuration value
    Set {
        /// Configuration key (voice, output_format, sample_rate, accent, region, use_temp_dir)
        key: String,
        /// Value to set
        value: String,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    if let Some(Commands::Config { action }) = &args.command {
        return handle_config_command(action);
    }

    if args.list_voices {
        list_voices();
        return Ok(());
    }

    if args.list_accents {
        list_accents();
        return Ok(());
    }

    let config = PdfTtsConfig::load().context("Failed to load configuration")?;

    // A .env file is optional; real environment variables take precedence
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            log::warn!("Ignoring unreadable .env file: {}", e);
        }
    }

    let credentials =
        AwsCredentials::from_env().context("Failed to initialize AWS Polly client")?;
    let synthesizer = PollySynthesizer::connect(credentials, &config.region).await;

    let job = Job {
        pdf_path: args.pdf,
        text: args.text,
        random_text: args.random_text,
        prefix: args.prefix,
        use_temp_dir: args.temp_dir || config.use_temp_dir,
        defaults: config.overrides(),
        overrides: Overrides {
            voice: args.voice,
            output_format: args.format,
            sample_rate: args.sample_rate,
            accent: args.accent,
            random_voice: args.random_voice,
            random_accent: args.random_accent,
        },
    };

    let path = pipeline::run(&job, &synthesizer, &LopdfExtractor, &mut SystemRandom)
        .await
        .context("Text-to-speech failed")?;

    println!("{}", path.display());
    Ok(())
}

fn handle_config_command(action: &ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let config = PdfTtsConfig::load()?;
            println!("Configuration file: {}", PdfTtsConfig::config_path()?.display());
            println!();
            println!(
                "voice = \"{}\"",
                config.voice.as_deref().unwrap_or(options::DEFAULT_VOICE)
            );
            println!(
                "output_format = \"{}\"",
                config.output_format.as_deref().unwrap_or("mp3")
            );
            println!(
                "sample_rate = \"{}\"",
                config.sample_rate.as_deref().unwrap_or("16000")
            );
            println!(
                "accent = \"{}\"",
                config.accent.as_deref().unwrap_or(options::DEFAULT_ACCENT)
            );
            println!("region = \"{}\"", config.region);
            println!("use_temp_dir = {}", config.use_temp_dir);
        }
        ConfigAction::Set { key, value } => {
            let mut config = PdfTtsConfig::load()?;
            config.set(key, value)?;
            config.save()?;
            println!("Configuration updated: {} = {}", key, value);
        }
    }
    Ok(())
}

fn list_voices() {
    println!("Available voices:");
    println!();
    for voice in options::VOICE_IDS {
        println!("  {}", voice);
    }
}

fn list_accents() {
    println!("Available accents:");
    println!();
    for accent in options::ACCENTS {
        println!("  {:<10} {}", accent.code, accent.display_name);
    }
}
