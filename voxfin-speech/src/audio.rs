//! Audio format definitions and the audio buffer type passed between stages.

use serde::{Deserialize, Serialize};

/// Audio encodings accepted and produced at the speech seams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AudioEncoding {
    /// 16-bit PCM samples.
    #[default]
    Pcm16,
    /// RIFF/WAVE container around PCM samples.
    Wav,
    /// MPEG layer III, the usual synthesis output format.
    Mp3,
}

impl std::fmt::Display for AudioEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pcm16 => write!(f, "pcm16"),
            Self::Wav => write!(f, "wav"),
            Self::Mp3 => write!(f, "mp3"),
        }
    }
}

/// Complete audio format specification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioFormat {
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of channels (1 = mono, 2 = stereo).
    pub channels: u8,
    /// Bits per sample.
    pub bits_per_sample: u8,
    /// Encoding of the byte stream.
    pub encoding: AudioEncoding,
}

impl Default for AudioFormat {
    fn default() -> Self {
        Self::pcm16_16khz()
    }
}

impl AudioFormat {
    /// PCM16 mono at 16kHz, the usual microphone capture format.
    pub fn pcm16_16khz() -> Self {
        Self { sample_rate: 16000, channels: 1, bits_per_sample: 16, encoding: AudioEncoding::Pcm16 }
    }

    /// PCM16 mono at 24kHz.
    pub fn pcm16_24khz() -> Self {
        Self { sample_rate: 24000, channels: 1, bits_per_sample: 16, encoding: AudioEncoding::Pcm16 }
    }

    /// MP3 mono at 24kHz, the usual synthesis output format.
    pub fn mp3_24khz() -> Self {
        Self { sample_rate: 24000, channels: 1, bits_per_sample: 16, encoding: AudioEncoding::Mp3 }
    }

    /// Bytes per second of uncompressed audio in this format.
    ///
    /// Only meaningful for PCM encodings.
    pub fn bytes_per_second(&self) -> u32 {
        self.sample_rate * self.channels as u32 * (self.bits_per_sample / 8) as u32
    }
}

/// An owned audio buffer with its format.
///
/// Requests hand these between the orchestrator and the speech backends;
/// they are plain owned values, dropped on every exit path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioChunk {
    /// Raw audio bytes.
    pub data: Vec<u8>,
    /// Format of the bytes.
    pub format: AudioFormat,
}

impl AudioChunk {
    /// Create an audio chunk.
    pub fn new(data: Vec<u8>, format: AudioFormat) -> Self {
        Self { data, format }
    }

    /// Duration in milliseconds, for PCM data.
    pub fn duration_ms(&self) -> f64 {
        let per_ms = self.format.bytes_per_second() as f64 / 1000.0;
        if per_ms == 0.0 { 0.0 } else { self.data.len() as f64 / per_ms }
    }
}
