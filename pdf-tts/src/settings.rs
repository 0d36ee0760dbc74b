// Validated voice settings for a synthesis request

use crate::error::{Result, TtsError};
use crate::options::{
    self, Accent, OutputFormat, SampleRate, ACCENTS, DEFAULT_ACCENT, DEFAULT_VOICE, VOICE_IDS,
};
use crate::rng::{self, RandomSource};

/// Result of a setter: the value now in effect, plus a warning if the input was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applied<T> {
    pub effective: T,
    pub warning: Option<String>,
}

impl<T> Applied<T> {
    fn accepted(effective: T) -> Self {
        Self {
            effective,
            warning: None,
        }
    }

    fn rejected(effective: T, warning: String) -> Self {
        log::warn!("{}", warning);
        Self {
            effective,
            warning: Some(warning),
        }
    }
}

/// Voice, format, sample rate and accent for one synthesis run.
///
/// Every field only ever holds a registry member, so a request built from
/// these settings is always valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceSettings {
    voice: &'static str,
    output_format: OutputFormat,
    sample_rate: SampleRate,
    accent: &'static Accent,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            voice: DEFAULT_VOICE,
            output_format: OutputFormat::default(),
            sample_rate: SampleRate::default(),
            accent: options::find_accent(DEFAULT_ACCENT).unwrap_or(&ACCENTS[6]),
        }
    }
}

impl VoiceSettings {
    pub fn voice(&self) -> &'static str {
        self.voice
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output_format
    }

    pub fn sample_rate(&self) -> SampleRate {
        self.sample_rate
    }

    pub fn accent(&self) -> &'static Accent {
        self.accent
    }

    /// Select a voice. Unknown voices keep the current one.
    pub fn set_voice(&mut self, voice: Option<&str>) -> Result<Applied<&'static str>> {
        let result = match voice {
            None => Err(TtsError::MissingValue { setting: "voice" }),
            Some(id) => match options::find_voice(id) {
                Some(found) => {
                    self.voice = found;
                    Ok(Applied::accepted(found))
                }
                None => Ok(Applied::rejected(
                    self.voice,
                    format!("Voice '{}' not available, keeping '{}'", id, self.voice),
                )),
            },
        };
        log::info!("Voice set to: {}", self.voice);
        result
    }

    /// Select an output format. Unknown formats fall back to mp3.
    pub fn set_output_format(&mut self, format: Option<&str>) -> Result<Applied<OutputFormat>> {
        let result = match format {
            None => Err(TtsError::MissingValue {
                setting: "output_format",
            }),
            Some(value) => match OutputFormat::parse(value) {
                Some(parsed) => {
                    self.output_format = parsed;
                    Ok(Applied::accepted(parsed))
                }
                None => {
                    self.output_format = OutputFormat::default();
                    Ok(Applied::rejected(
                        self.output_format,
                        format!(
                            "Invalid output format '{}', using '{}' instead",
                            value, self.output_format
                        ),
                    ))
                }
            },
        };
        log::info!("Output format set to: {}", self.output_format);
        result
    }

    /// Select a sample rate. Unknown rates fall back to 16000.
    pub fn set_sample_rate(&mut self, rate: Option<&str>) -> Result<Applied<SampleRate>> {
        let result = match rate {
            None => Err(TtsError::MissingValue {
                setting: "sample_rate",
            }),
            Some(value) => match SampleRate::parse(value) {
                Some(parsed) => {
                    self.sample_rate = parsed;
                    Ok(Applied::accepted(parsed))
                }
                None => {
                    self.sample_rate = SampleRate::default();
                    Ok(Applied::rejected(
                        self.sample_rate,
                        format!(
                            "Invalid sample rate '{}', using '{}' instead",
                            value, self.sample_rate
                        ),
                    ))
                }
            },
        };
        log::info!("Sample rate set to: {}", self.sample_rate);
        result
    }

    /// Select an accent by language code. Unknown codes keep the current accent.
    pub fn set_accent(&mut self, code: Option<&str>) -> Result<Applied<&'static Accent>> {
        let result = match code {
            None => Err(TtsError::MissingValue { setting: "accent" }),
            Some(code) => match options::find_accent(code) {
                Some(found) => {
                    self.accent = found;
                    Ok(Applied::accepted(found))
                }
                None => Ok(Applied::rejected(
                    self.accent,
                    format!(
                        "Accent '{}' not available, keeping {}",
                        code, self.accent.display_name
                    ),
                )),
            },
        };
        log::info!("Speech will be in {}", self.accent.display_name);
        result
    }

    /// Pick any registered voice
    pub fn randomize_voice(&mut self, rng: &mut dyn RandomSource) -> &'static str {
        if let Some(voice) = rng::choose(rng, VOICE_IDS) {
            self.voice = voice;
        }
        log::info!("Using random voice {}", self.voice);
        self.voice
    }

    /// Pick any registered accent
    pub fn randomize_accent(&mut self, rng: &mut dyn RandomSource) -> &'static Accent {
        if let Some(accent) = rng::choose(rng, ACCENTS) {
            self.accent = accent;
        }
        log::info!("Using random accent: {}", self.accent.display_name);
        self.accent
    }
}
