//! Movie content: resolution-based compression plus director metadata.

use std::fmt;

use serde::Serialize;

use super::{
    Content, ContentInfo, ContentKind, PLAYBACK_FOOTER, describe_line, visual_compression_ratio,
};

/// A film entry in the catalog.
#[derive(Debug, Clone, Serialize)]
pub struct Movie {
    info: ContentInfo,
    screen_resolution: String,
    director: String,
}

impl Movie {
    /// Creates a movie. A negative duration is stored as zero.
    ///
    /// The resolution is a free-form label ("2160p", "480p", ...);
    /// only "2160p" affects the compression ratio.
    pub fn new(
        title: impl Into<String>,
        duration_minutes: f64,
        screen_resolution: impl Into<String>,
        director: impl Into<String>,
    ) -> Self {
        Self {
            info: ContentInfo::new(title, duration_minutes),
            screen_resolution: screen_resolution.into(),
            director: director.into(),
        }
    }

    pub fn screen_resolution(&self) -> &str {
        &self.screen_resolution
    }

    pub fn director(&self) -> &str {
        &self.director
    }
}

impl Content for Movie {
    fn info(&self) -> &ContentInfo {
        &self.info
    }

    fn kind(&self) -> ContentKind {
        ContentKind::Movie
    }

    fn compression_ratio(&self) -> f64 {
        visual_compression_ratio(&self.screen_resolution)
    }

    fn describe(&self) -> String {
        format!("Movie: {}", describe_line(&self.info))
    }

    fn play(&self) -> String {
        format!(
            "[PLAYING MOVIE]\n\
             Title: {}\n\
             Director: {}\n\
             Resolution: {}\n\
             Compression ratio: {}\n\
             Duration: {} minutes\n\
             {PLAYBACK_FOOTER}",
            self.info.title(),
            self.director,
            self.screen_resolution,
            self.compression_ratio(),
            self.info.duration_minutes(),
        )
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | Resolution: {}", self.info, self.screen_resolution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interstellar() -> Movie {
        Movie::new("Interstellar", 169.0, "2160p", "Christopher Nolan")
    }

    #[test]
    fn test_describe_format() {
        assert_eq!(
            interstellar().describe(),
            "Movie: Interstellar (169 minutes)"
        );
    }

    #[test]
    fn test_uhd_compression_ratio() {
        assert_eq!(interstellar().compression_ratio(), 0.6);
    }

    #[test]
    fn test_non_uhd_compression_ratio() {
        let movie = Movie::new("Feast", 7.0, "480p", "Patrick Osborne");
        assert_eq!(movie.compression_ratio(), 0.9);
    }

    #[test]
    fn test_play_block() {
        let movie = interstellar();
        let block = movie.play();

        assert!(block.starts_with("[PLAYING MOVIE]"));
        assert!(block.ends_with(PLAYBACK_FOOTER));
        assert!(block.contains("Title: Interstellar"));
        assert!(block.contains("Director: Christopher Nolan"));
        assert!(block.contains("Resolution: 2160p"));
        assert!(block.contains("Compression ratio: 0.6"));
        assert!(block.contains("Duration: 169 minutes"));
    }

    #[test]
    fn test_play_is_idempotent() {
        let movie = interstellar();
        assert_eq!(movie.play(), movie.play());
        assert_eq!(movie.describe(), movie.describe());
    }

    #[test]
    fn test_extended_rendering() {
        assert_eq!(
            interstellar().to_string(),
            "Title: Interstellar, minutes: 169 | Resolution: 2160p"
        );
    }

    #[test]
    fn test_negative_duration_clamped() {
        let movie = Movie::new("Broken", -30.0, "1080p", "Nobody");
        assert_eq!(movie.info().duration_minutes(), 0.0);
        assert_eq!(movie.describe(), "Movie: Broken (0 minutes)");
    }
}
