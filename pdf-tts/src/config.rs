// pdf-tts configuration management

use crate::options::{self, OutputFormat, SampleRate};
use crate::pipeline::Overrides;
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const DEFAULT_REGION: &str = "us-east-1";

/// Keys accepted by `pdf-tts config set`
pub const CONFIG_KEYS: &[&str] = &[
    "voice",
    "output_format",
    "sample_rate",
    "accent",
    "region",
    "use_temp_dir",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PdfTtsConfig {
    /// Default voice (None uses Joanna)
    #[serde(default)]
    pub voice: Option<String>,

    /// Default audio format (None uses mp3)
    #[serde(default)]
    pub output_format: Option<String>,

    /// Default sample rate (None uses 16000)
    #[serde(default)]
    pub sample_rate: Option<String>,

    /// Default accent language code (None uses en-US)
    #[serde(default)]
    pub accent: Option<String>,

    /// AWS region hosting Polly
    #[serde(default = "default_region")]
    pub region: String,

    /// Write audio files to the system temp directory
    #[serde(default)]
    pub use_temp_dir: bool,
}

fn default_region() -> String {
    DEFAULT_REGION.to_string()
}

impl Default for PdfTtsConfig {
    fn default() -> Self {
        Self {
            voice: None,
            output_format: None,
            sample_rate: None,
            accent: None,
            region: default_region(),
            use_temp_dir: false,
        }
    }
}

impl PdfTtsConfig {
    /// Get the config file path: ~/.config/cli-programs/pdf-tts.toml
    pub fn config_path() -> Result<PathBuf> {
        let home = std::env::var("HOME").or_else(|_| std::env::var("USERPROFILE"))?;
        Ok(PathBuf::from(home)
            .join(".config")
            .join("cli-programs")
            .join("pdf-tts.toml"))
    }

    /// Load config from file, returning default if file doesn't exist
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).context("Failed to read config file")?;
        let config: PdfTtsConfig =
            toml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&path, content).context("Failed to write config file")?;
        Ok(())
    }

    /// Set a single key, rejecting values Polly would not accept
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "voice" => {
                if options::find_voice(value).is_none() {
                    bail!("Unknown voice: {}. Run 'pdf-tts --list-voices' to see options", value);
                }
                self.voice = Some(value.to_string());
            }
            "output_format" => {
                if OutputFormat::parse(value).is_none() {
                    bail!("Invalid output format. Use one of: json, mp3, ogg_vorbis, pcm");
                }
                self.output_format = Some(value.to_string());
            }
            "sample_rate" => {
                if SampleRate::parse(value).is_none() {
                    bail!("Invalid sample rate. Use one of: 8000, 16000, 22050, 24000");
                }
                self.sample_rate = Some(value.to_string());
            }
            "accent" => {
                if options::find_accent(value).is_none() {
                    bail!("Unknown accent: {}. Run 'pdf-tts --list-accents' to see options", value);
                }
                self.accent = Some(value.to_string());
            }
            "region" => {
                if value.trim().is_empty() {
                    bail!("Region cannot be empty");
                }
                self.region = value.to_string();
            }
            "use_temp_dir" => {
                self.use_temp_dir = value
                    .parse()
                    .with_context(|| format!("Invalid boolean for use_temp_dir: {}", value))?;
            }
            _ => bail!(
                "Unknown config key: {}. Valid keys: {}",
                key,
                CONFIG_KEYS.join(", ")
            ),
        }
        Ok(())
    }

    /// Stored defaults, fed through the same validation as command-line values
    pub fn overrides(&self) -> Overrides {
        Overrides {
            voice: self.voice.clone(),
            output_format: self.output_format.clone(),
            sample_rate: self.sample_rate.clone(),
            accent: self.accent.clone(),
            ..Overrides::default()
        }
    }
}
