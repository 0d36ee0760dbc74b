// Run one text-to-speech job from input to audio file

use crate::error::{Result, TtsError};
use crate::input::{self, PdfExtractor};
use crate::output::{self, OutputDir, OutputTarget};
use crate::rng::RandomSource;
use crate::settings::VoiceSettings;
use crate::tts::{SpeechSynthesizer, SynthesisRequest, SynthesisResponse};
use std::path::PathBuf;

/// Requested changes to the default voice settings
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub voice: Option<String>,
    pub output_format: Option<String>,
    pub sample_rate: Option<String>,
    pub accent: Option<String>,
    pub random_voice: bool,
    pub random_accent: bool,
}

impl Overrides {
    /// Apply each requested value through its validating setter
    pub fn apply(&self, settings: &mut VoiceSettings, rng: &mut dyn RandomSource) -> Result<()> {
        if let Some(voice) = self.voice.as_deref() {
            settings.set_voice(Some(voice))?;
        }
        if let Some(format) = self.output_format.as_deref() {
            settings.set_output_format(Some(format))?;
        }
        if let Some(rate) = self.sample_rate.as_deref() {
            settings.set_sample_rate(Some(rate))?;
        }
        if let Some(accent) = self.accent.as_deref() {
            settings.set_accent(Some(accent))?;
        }
        if self.random_voice {
            settings.randomize_voice(rng);
        }
        if self.random_accent {
            settings.randomize_accent(rng);
        }
        Ok(())
    }
}

/// Inputs for a single run
#[derive(Debug, Clone, Default)]
pub struct Job {
    pub pdf_path: Option<PathBuf>,
    pub text: Option<String>,
    /// Skip PDF and string input and speak a sample sentence
    pub random_text: bool,
    pub prefix: Option<String>,
    pub use_temp_dir: bool,
    /// Values from the config file, applied first
    pub defaults: Overrides,
    /// Values from the command line, applied last
    pub overrides: Overrides,
}

/// Resolve text and settings, synthesize, and write the audio file.
///
/// Returns the path of the written file.
pub async fn run(
    job: &Job,
    synthesizer: &dyn SpeechSynthesizer,
    extractor: &dyn PdfExtractor,
    rng: &mut dyn RandomSource,
) -> Result<PathBuf> {
    let prefix = output::resolve_prefix(job.prefix.as_deref(), rng);

    let resolved = if job.random_text {
        input::random_sample(rng)
    } else {
        input::resolve_text(job.pdf_path.as_deref(), job.text.as_deref(), extractor, rng)?
    };

    log::debug!("Text source: {:?}", resolved.source);

    let mut settings = VoiceSettings::default();
    job.defaults.apply(&mut settings, rng)?;
    job.overrides.apply(&mut settings, rng)?;

    // Composed after every setter has run so the extension matches the final format
    let target = OutputTarget::new(
        &prefix,
        settings.output_format(),
        OutputDir::from_temp_flag(job.use_temp_dir),
    );

    log::debug!("Output file: {}", target.filename());

    let request = SynthesisRequest::new(resolved.text, &settings);
    log::debug!(
        "Synthesizing with {}: voice={} format={} rate={} language={}",
        synthesizer.name(),
        request.voice_id,
        request.output_format,
        request.sample_rate,
        request.language_code
    );

    let response = synthesizer.synthesize(&request).await?;
    write_audio(response, &target).await
}

/// Read the response audio to completion and write it to the target.
///
/// The stream is consumed here. Nothing is written unless the whole stream
/// was read successfully.
pub async fn write_audio(response: SynthesisResponse, target: &OutputTarget) -> Result<PathBuf> {
    log::debug!("Content type: {:?}", response.content_type);
    let stream = response.audio_stream.ok_or(TtsError::MissingAudioStream)?;

    let audio = stream
        .collect()
        .await
        .map_err(|e| TtsError::AudioStream(e.to_string()))?
        .into_bytes();

    let path = target.full_path();
    tokio::fs::write(&path, &audio)
        .await
        .map_err(|source| TtsError::Write {
            path: path.clone(),
            source,
        })?;

    log::info!(
        "Audio file successfully written to {} ({} bytes)",
        path.display(),
        audio.len()
    );
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::testing::FakeExtractor;
    use crate::options::{OutputFormat, SAMPLE_SENTENCES};
    use crate::rng::testing::ScriptedRandom;
    use async_trait::async_trait;
    use aws_sdk_polly::primitives::ByteStream;
    use std::sync::Mutex;

    const AUDIO: &[u8] = b"ID3\x04\x00fake-mp3-frames";

    /// Records requests and replies with fixed audio, or no audio at all
    struct FakeSynthesizer {
        requests: Mutex<Vec<SynthesisRequest>>,
        audio: Option<&'static [u8]>,
        fail: bool,
    }

    impl FakeSynthesizer {
        fn returning(audio: Option<&'static [u8]>) -> Self {
            Self {
                requests: Mutex::new(Vec::new()),
                audio,
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::returning(None)
            }
        }

        fn requests(&self) -> Vec<SynthesisRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl SpeechSynthesizer for FakeSynthesizer {
        async fn synthesize(&self, request: &SynthesisRequest) -> Result<SynthesisResponse> {
            self.requests.lock().unwrap().push(request.clone());
            if self.fail {
                return Err(TtsError::Synthesis("ThrottlingException".to_string()));
            }
            Ok(SynthesisResponse {
                audio_stream: self.audio.map(|a| ByteStream::from(a.to_vec())),
                content_type: Some("audio/mpeg".to_string()),
            })
        }

        fn name(&self) -> &str {
            "fake"
        }
    }

    fn temp_job(prefix: &str) -> Job {
        Job {
            prefix: Some(prefix.to_string()),
            use_temp_dir: true,
            ..Job::default()
        }
    }

    #[tokio::test]
    async fn test_missing_pdf_with_literal_writes_audio() {
        let synthesizer = FakeSynthesizer::returning(Some(AUDIO));
        let mut rng = ScriptedRandom::default();
        let job = Job {
            pdf_path: Some(PathBuf::from("does/not/exist.pdf")),
            text: Some("Hello world".to_string()),
            ..temp_job("greet")
        };

        let path = run(&job, &synthesizer, &FakeExtractor::default(), &mut rng)
            .await
            .unwrap();

        assert_eq!(path.file_name().unwrap(), "greet.mp3");
        assert_eq!(std::fs::read(&path).unwrap(), AUDIO);
        std::fs::remove_file(&path).unwrap();

        let requests = synthesizer.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].text, "Hello world");
        assert_eq!(requests[0].voice_id, "Joanna");
        assert_eq!(requests[0].language_code, "en-US");
    }

    #[tokio::test]
    async fn test_missing_audio_stream_writes_nothing() {
        let synthesizer = FakeSynthesizer::returning(None);
        let mut rng = ScriptedRandom::default();
        let job = temp_job("pdf_tts_test_no_stream");
        let expected = std::env::temp_dir().join("pdf_tts_test_no_stream.mp3");

        let result = run(&job, &synthesizer, &FakeExtractor::default(), &mut rng).await;

        assert!(matches!(result, Err(TtsError::MissingAudioStream)));
        assert!(!expected.exists());
    }

    #[tokio::test]
    async fn test_synthesis_failure_is_returned() {
        let synthesizer = FakeSynthesizer::failing();
        let mut rng = ScriptedRandom::default();
        let job = temp_job("pdf_tts_test_failure");

        let result = run(&job, &synthesizer, &FakeExtractor::default(), &mut rng).await;

        assert!(matches!(result, Err(TtsError::Synthesis(_))));
        assert!(!std::env::temp_dir().join("pdf_tts_test_failure.mp3").exists());
    }

    #[tokio::test]
    async fn test_extension_follows_final_format() {
        let synthesizer = FakeSynthesizer::returning(Some(AUDIO));
        let mut rng = ScriptedRandom::default();
        let job = Job {
            text: Some("Format check".to_string()),
            defaults: Overrides {
                output_format: Some("pcm".to_string()),
                ..Overrides::default()
            },
            overrides: Overrides {
                output_format: Some("ogg_vorbis".to_string()),
                sample_rate: Some("24000".to_string()),
                ..Overrides::default()
            },
            ..temp_job("pdf_tts_test_format")
        };

        let path = run(&job, &synthesizer, &FakeExtractor::default(), &mut rng)
            .await
            .unwrap();

        assert_eq!(path.file_name().unwrap(), "pdf_tts_test_format.ogg_vorbis");
        std::fs::remove_file(&path).unwrap();

        let request = &synthesizer.requests()[0];
        assert_eq!(request.output_format, OutputFormat::OggVorbis);
        assert_eq!(request.sample_rate.as_str(), "24000");
    }

    #[tokio::test]
    async fn test_pdf_text_and_random_settings() {
        let synthesizer = FakeSynthesizer::returning(Some(AUDIO));
        let extractor = FakeExtractor::default().with_document("hope.pdf", &["Hope is", "the thing"]);
        // voice index 2, then accent index 5
        let mut rng = ScriptedRandom::new(&[2, 5]);
        let job = Job {
            pdf_path: Some(PathBuf::from("hope.pdf")),
            overrides: Overrides {
                voice: Some("Nobody".to_string()),
                random_voice: true,
                random_accent: true,
                ..Overrides::default()
            },
            ..temp_job("pdf_tts_test_random")
        };

        let path = run(&job, &synthesizer, &extractor, &mut rng).await.unwrap();
        std::fs::remove_file(&path).unwrap();

        let request = &synthesizer.requests()[0];
        assert_eq!(request.text, "Hope is\nthe thing");
        assert_eq!(request.voice_id, "Astrid");
        assert_eq!(request.language_code, "en-GB");
    }

    #[tokio::test]
    async fn test_random_text_skips_inputs() {
        let synthesizer = FakeSynthesizer::returning(Some(AUDIO));
        let mut rng = ScriptedRandom::new(&[4]);
        let job = Job {
            text: Some("not spoken".to_string()),
            random_text: true,
            ..temp_job("pdf_tts_test_sample")
        };

        let path = run(&job, &synthesizer, &FakeExtractor::default(), &mut rng)
            .await
            .unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(synthesizer.requests()[0].text, SAMPLE_SENTENCES[4]);
    }

    #[tokio::test]
    async fn test_write_failure_is_fatal() {
        let response = SynthesisResponse {
            audio_stream: Some(ByteStream::from(AUDIO.to_vec())),
            content_type: None,
        };
        let target = OutputTarget::new(
            "pdf_tts_missing_dir/clip",
            OutputFormat::Mp3,
            OutputDir::TempDir,
        );

        let result = write_audio(response, &target).await;
        assert!(matches!(result, Err(TtsError::Write { .. })));
    }
}
