//! AWS Polly speech synthesis

use super::{SpeechSynthesizer, SynthesisRequest, SynthesisResponse};
use crate::error::{Result, TtsError};
use async_trait::async_trait;
use aws_sdk_polly::Client;
use aws_sdk_polly::config::{Credentials, Region};
use aws_sdk_polly::error::DisplayErrorContext;
use aws_sdk_polly::types::{LanguageCode, OutputFormat as PollyFormat, VoiceId};

/// Environment variable holding the access key id
pub const ACCESS_KEY_VAR: &str = "AWS_ACCESS_KEY";

/// Environment variable holding the secret access key
pub const SECRET_KEY_VAR: &str = "AWS_SECRET_ACCESS_KEY";

/// Static AWS credentials
#[derive(Clone)]
pub struct AwsCredentials {
    access_key_id: String,
    secret_access_key: String,
}

impl std::fmt::Debug for AwsCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AwsCredentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"** redacted **")
            .finish()
    }
}

impl AwsCredentials {
    /// Read credentials from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_values(
            std::env::var(ACCESS_KEY_VAR).ok(),
            std::env::var(SECRET_KEY_VAR).ok(),
        )
    }

    fn from_values(access_key_id: Option<String>, secret_access_key: Option<String>) -> Result<Self> {
        let require = |value: Option<String>, var: &str| {
            value
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| TtsError::Credentials(format!("{} is not set", var)))
        };

        Ok(Self {
            access_key_id: require(access_key_id, ACCESS_KEY_VAR)?,
            secret_access_key: require(secret_access_key, SECRET_KEY_VAR)?,
        })
    }
}

/// AWS Polly speech backend
pub struct PollySynthesizer {
    client: Client,
}

impl PollySynthesizer {
    /// Create a Polly client for the given region
    pub async fn connect(credentials: AwsCredentials, region: &str) -> Self {
        let provider = Credentials::new(
            credentials.access_key_id,
            credentials.secret_access_key,
            None,
            None,
            "pdf-tts",
        );

        let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .credentials_provider(provider)
            .load()
            .await;

        log::info!("AWS Polly client initialized ({})", region);
        Self {
            client: Client::new(&aws_config),
        }
    }
}

#[async_trait]
impl SpeechSynthesizer for PollySynthesizer {
    async fn synthesize(&self, request: &SynthesisRequest) -> Result<SynthesisResponse> {
        let output = self
            .client
            .synthesize_speech()
            .text(&request.text)
            .voice_id(VoiceId::from(request.voice_id))
            .output_format(PollyFormat::from(request.output_format.as_str()))
            .language_code(LanguageCode::from(request.language_code))
            .sample_rate(request.sample_rate.as_str())
            .send()
            .await
            .map_err(|e| TtsError::Synthesis(DisplayErrorContext(&e).to_string()))?;

        log::info!("Speech successfully synthesized");

        Ok(SynthesisResponse {
            audio_stream: Some(output.audio_stream),
            content_type: output.content_type,
        })
    }

    fn name(&self) -> &str {
        "aws-polly"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_require_both_keys() {
        let err = AwsCredentials::from_values(Some("AKIA".to_string()), None).unwrap_err();
        assert!(err.to_string().contains(SECRET_KEY_VAR));

        let err = AwsCredentials::from_values(None, Some("secret".to_string())).unwrap_err();
        assert!(err.to_string().contains(ACCESS_KEY_VAR));
    }

    #[test]
    fn test_blank_credentials_rejected() {
        let result = AwsCredentials::from_values(Some("  ".to_string()), Some("secret".to_string()));
        assert!(matches!(result, Err(TtsError::Credentials(_))));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let creds =
            AwsCredentials::from_values(Some("AKIA123".to_string()), Some("hunter2".to_string()))
                .unwrap();
        let debug = format!("{:?}", creds);
        assert!(debug.contains("AKIA123"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_registry_matches_polly_enums() {
        for voice in crate::options::VOICE_IDS {
            assert!(VoiceId::values().contains(voice), "unknown voice {}", voice);
        }
        for accent in crate::options::ACCENTS {
            assert!(LanguageCode::values().contains(&accent.code));
        }
        for format in crate::options::OutputFormat::ALL {
            assert!(PollyFormat::values().contains(&format.as_str()));
        }
    }
}
