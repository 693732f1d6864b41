//! Song content: bitrate-based compression plus license metadata.

use std::fmt;

use serde::Serialize;

use super::{
    Content, ContentInfo, ContentKind, PLAYBACK_FOOTER, auditory_compression_ratio, describe_line,
};

/// A music track entry in the catalog.
#[derive(Debug, Clone, Serialize)]
pub struct Song {
    info: ContentInfo,
    bitrate: f64,
    license: String,
}

impl Song {
    /// Creates a song. A negative duration is stored as zero.
    ///
    /// The bitrate is in kbps and is not validated; values outside
    /// (0, 500) feed straight into the unclamped compression formula.
    pub fn new(
        title: impl Into<String>,
        duration_minutes: f64,
        bitrate: f64,
        license: impl Into<String>,
    ) -> Self {
        Self {
            info: ContentInfo::new(title, duration_minutes),
            bitrate,
            license: license.into(),
        }
    }

    pub fn bitrate(&self) -> f64 {
        self.bitrate
    }

    pub fn license(&self) -> &str {
        &self.license
    }
}

impl Content for Song {
    fn info(&self) -> &ContentInfo {
        &self.info
    }

    fn kind(&self) -> ContentKind {
        ContentKind::Song
    }

    fn compression_ratio(&self) -> f64 {
        auditory_compression_ratio(self.bitrate)
    }

    fn describe(&self) -> String {
        format!("Song: {}", describe_line(&self.info))
    }

    fn play(&self) -> String {
        format!(
            "[PLAYING SONG]\n\
             Title: {}\n\
             Bitrate: {}\n\
             License: {}\n\
             Compression ratio: {}\n\
             Duration: {} minutes\n\
             {PLAYBACK_FOOTER}",
            self.info.title(),
            self.bitrate,
            self.license,
            self.compression_ratio(),
            self.info.duration_minutes(),
        )
    }
}

impl fmt::Display for Song {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | Bitrate: {}", self.info, self.bitrate)
    }
}
