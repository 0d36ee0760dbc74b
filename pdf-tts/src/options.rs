// Allow-lists of values accepted by AWS Polly

use std::fmt;

/// Voice used when nothing else is selected
pub const DEFAULT_VOICE: &str = "Joanna";

/// Accent code used when nothing else is selected
pub const DEFAULT_ACCENT: &str = "en-US";

/// Voices available on the AWS free tier
pub const VOICE_IDS: &[&str] = &[
    "Aditi", "Amy", "Astrid", "Bianca", "Brian", "Camila", "Carla", "Carmen", "Celine",
    "Chantal", "Conchita", "Cristiano", "Dora", "Emma", "Enrique", "Ewa", "Filiz", "Gabrielle",
    "Geraint", "Giorgio", "Gwyneth", "Hans", "Ines", "Ivy", "Jacek", "Jan", "Joanna", "Joey",
    "Justin", "Karl", "Kendra", "Kevin", "Kimberly", "Lea", "Liv", "Lotte", "Lucia", "Lupe",
    "Mads", "Maja", "Marlene", "Mathieu", "Matthew", "Maxim", "Mia", "Miguel", "Mizuki", "Naja",
    "Nicole", "Olivia", "Penelope", "Raveena", "Ricardo", "Ruben", "Russell", "Salli", "Seoyeon",
    "Takumi", "Tatyana", "Vicki", "Vitoria", "Zeina", "Zhiyu",
];

/// An English accent Polly can speak in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accent {
    /// Language code sent to Polly (e.g., "en-GB")
    pub code: &'static str,
    /// Human-readable name, used in log output only
    pub display_name: &'static str,
}

pub const ACCENTS: &[Accent] = &[
    Accent { code: "en-AU", display_name: "Australian" },
    Accent { code: "en-IN", display_name: "Indian" },
    Accent { code: "en-IE", display_name: "Irish" },
    Accent { code: "en-NZ", display_name: "New Zealander Kiwi" },
    Accent { code: "en-ZA", display_name: "South African" },
    Accent { code: "en-GB", display_name: "English" },
    Accent { code: "en-US", display_name: "American" },
    Accent { code: "en-GB-WLS", display_name: "Welsh" },
];

/// Sentences spoken when no PDF or text input is available
pub const SAMPLE_SENTENCES: &[&str] = &[
    "Hope is the thing with feathers that perches in the soul.",
    "The quick brown fox jumps over the lazy dog.",
    "A journey of a thousand miles begins with a single step.",
    "Every morning the lighthouse keeper counted the ships returning to harbour.",
    "She sells sea shells by the sea shore, and the shells she sells are surely seashells.",
    "The library was quiet except for the slow turning of pages.",
    "Rain drummed against the window while the kettle began to sing.",
    "Somewhere beyond the hills, a train whistled into the evening.",
    "It was the best of times, it was the worst of times.",
    "Curiosity is the engine of achievement.",
    "The old clock in the hallway chimed thirteen times and then fell silent.",
    "Stars are only visible in darkness.",
];

/// Look up a voice in the registry
pub fn find_voice(id: &str) -> Option<&'static str> {
    VOICE_IDS.iter().copied().find(|v| *v == id)
}

/// Look up an accent by its language code
pub fn find_accent(code: &str) -> Option<&'static Accent> {
    ACCENTS.iter().find(|a| a.code == code)
}

/// Audio formats Polly can return
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    Json,
    #[default]
    Mp3,
    OggVorbis,
    Pcm,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 4] = [Self::Json, Self::Mp3, Self::OggVorbis, Self::Pcm];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Mp3 => "mp3",
            Self::OggVorbis => "ogg_vorbis",
            Self::Pcm => "pcm",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == value)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output sample rates in Hz
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SampleRate {
    Hz8000,
    #[default]
    Hz16000,
    Hz22050,
    Hz24000,
}

impl SampleRate {
    pub const ALL: [SampleRate; 4] = [Self::Hz8000, Self::Hz16000, Self::Hz22050, Self::Hz24000];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hz8000 => "8000",
            Self::Hz16000 => "16000",
            Self::Hz22050 => "22050",
            Self::Hz24000 => "24000",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == value)
    }
}

impl fmt::Display for SampleRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
