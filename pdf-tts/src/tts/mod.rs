// Speech synthesis trait and request/response types

pub mod polly;

use crate::error::Result;
use crate::options::{OutputFormat, SampleRate};
use crate::settings::VoiceSettings;
use async_trait::async_trait;
use aws_sdk_polly::primitives::ByteStream;

/// Everything the speech service needs for one call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisRequest {
    pub text: String,
    pub voice_id: &'static str,
    pub output_format: OutputFormat,
    pub sample_rate: SampleRate,
    /// Accent language code (e.g., "en-GB")
    pub language_code: &'static str,
}

impl SynthesisRequest {
    pub fn new(text: impl Into<String>, settings: &VoiceSettings) -> Self {
        Self {
            text: text.into(),
            voice_id: settings.voice(),
            output_format: settings.output_format(),
            sample_rate: settings.sample_rate(),
            language_code: settings.accent().code,
        }
    }
}

/// Response from the speech service
#[derive(Debug)]
pub struct SynthesisResponse {
    /// Audio bytes in the requested format; must be read at most once
    pub audio_stream: Option<ByteStream>,
    pub content_type: Option<String>,
}

/// Speech backend trait - the orchestrator only talks to this
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Submit text for synthesis
    async fn synthesize(&self, request: &SynthesisRequest) -> Result<SynthesisResponse>;

    /// Backend name
    fn name(&self) -> &str;
}
