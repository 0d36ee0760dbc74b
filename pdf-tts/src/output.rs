// Output file naming and location

use crate::options::OutputFormat;
use crate::rng::RandomSource;
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use std::path::PathBuf;

/// Prefix for generated file names
const GENERATED_PREFIX: &str = "pdf_tts_";

/// Random bytes behind a generated file name token
const TOKEN_BYTES: usize = 6;

/// Directory the audio file is written to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputDir {
    /// The process working directory
    WorkingDir,
    /// The system temp directory
    TempDir,
}

impl OutputDir {
    pub fn from_temp_flag(use_temp_dir: bool) -> Self {
        if use_temp_dir {
            Self::TempDir
        } else {
            Self::WorkingDir
        }
    }
}

/// Use the user's prefix, or generate `pdf_tts_<token>` when none is given
pub fn resolve_prefix(user_prefix: Option<&str>, rng: &mut dyn RandomSource) -> String {
    match user_prefix.map(str::trim).filter(|p| !p.is_empty()) {
        Some(prefix) => prefix.to_string(),
        None => {
            let token = random_token(rng);
            log::info!("Generated random file name: {}", token);
            format!("{}{}", GENERATED_PREFIX, token)
        }
    }
}

/// URL-safe token from secure random bytes
fn random_token(rng: &mut dyn RandomSource) -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    rng.fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Where the synthesized audio will be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTarget {
    directory: OutputDir,
    filename: String,
}

impl OutputTarget {
    /// Build the target from a resolved prefix and the final output format
    pub fn new(prefix: &str, format: OutputFormat, directory: OutputDir) -> Self {
        Self {
            directory,
            filename: format!("{}.{}", prefix, format.as_str()),
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Full path; working-directory targets stay relative
    pub fn full_path(&self) -> PathBuf {
        match self.directory {
            OutputDir::WorkingDir => PathBuf::from(&self.filename),
            OutputDir::TempDir => std::env::temp_dir().join(&self.filename),
        }
    }
}
