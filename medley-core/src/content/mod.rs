//! Polymorphic content model: shared attributes plus per-kind
//! description, compression-rate, and playback formatting.

mod movie;
mod song;

use std::fmt;

use serde::Serialize;

pub use movie::Movie;
pub use song::Song;

/// Footer line closing every playback block.
pub const PLAYBACK_FOOTER: &str = "[END OF PLAYBACK]";

/// Kind of catalog content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ContentKind {
    Movie,
    Song,
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentKind::Movie => write!(f, "Movie"),
            ContentKind::Song => write!(f, "Song"),
        }
    }
}

/// Shared attributes embedded by value in every content variant.
///
/// Durations are clamped to the non-negative range at every write, so
/// `duration_minutes() >= 0.0` holds for the lifetime of the value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentInfo {
    title: String,
    duration_minutes: f64,
}

impl ContentInfo {
    /// Creates shared content attributes. A negative duration stores zero.
    pub fn new(title: impl Into<String>, duration_minutes: f64) -> Self {
        Self {
            title: title.into(),
            duration_minutes: clamp_duration(duration_minutes),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Duration in minutes, never negative.
    pub fn duration_minutes(&self) -> f64 {
        self.duration_minutes
    }

    /// Replaces the duration. A negative value stores zero.
    pub fn set_duration_minutes(&mut self, minutes: f64) {
        self.duration_minutes = clamp_duration(minutes);
    }
}

impl fmt::Display for ContentInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Title: {}, minutes: {}",
            self.title, self.duration_minutes
        )
    }
}

fn clamp_duration(minutes: f64) -> f64 {
    if minutes < 0.0 { 0.0 } else { minutes }
}

/// Behavior contract every catalog entry satisfies.
///
/// All methods are pure queries over the constructed value: calling
/// them any number of times yields identical results and has no side
/// effects beyond producing text.
pub trait Content {
    /// Shared title/duration attributes.
    fn info(&self) -> &ContentInfo;

    /// Which concrete variant this entry is.
    fn kind(&self) -> ContentKind;

    /// Variant-specific encoding-efficiency estimate.
    fn compression_ratio(&self) -> f64;

    /// One-line catalog listing.
    fn describe(&self) -> String;

    /// Multi-line "now playing" block.
    fn play(&self) -> String;
}

/// Compression ratio for resolution-based content.
///
/// Two-bucket step function: exactly 0.6 for the "2160p" label, 0.9
/// for every other resolution. No interpolation between labels.
pub fn visual_compression_ratio(screen_resolution: &str) -> f64 {
    if screen_resolution == "2160p" { 0.6 } else { 0.9 }
}

/// Compression ratio for bitrate-based content.
///
/// Unclamped: bitrates above 500 produce negative ratios and negative
/// bitrates produce ratios above 1.
pub fn auditory_compression_ratio(bitrate: f64) -> f64 {
    1.0 - bitrate / 500.0
}

/// Shared one-line listing body: `"{title} ({duration} minutes)"`.
pub fn describe_line(info: &ContentInfo) -> String {
    format!("{} ({} minutes)", info.title(), info.duration_minutes())
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_negative_duration_clamped_on_construction() {
        let info = ContentInfo::new("Short", -5.0);
        assert_eq!(info.duration_minutes(), 0.0);
    }

    #[test]
    fn test_negative_duration_clamped_on_assignment() {
        let mut info = ContentInfo::new("Short", 12.0);
        info.set_duration_minutes(-1.0);
        assert_eq!(info.duration_minutes(), 0.0);

        info.set_duration_minutes(3.5);
        assert_eq!(info.duration_minutes(), 3.5);
    }

    #[test]
    fn test_base_rendering() {
        let info = ContentInfo::new("Interstellar", 169.0);
        assert_eq!(info.to_string(), "Title: Interstellar, minutes: 169");
    }

    #[test]
    fn test_visual_ratio_buckets() {
        assert_eq!(visual_compression_ratio("2160p"), 0.6);
        assert_eq!(visual_compression_ratio("480p"), 0.9);
        assert_eq!(visual_compression_ratio("1080p"), 0.9);
        assert_eq!(visual_compression_ratio(""), 0.9);
    }

    #[test]
    fn test_auditory_ratio_formula() {
        assert!((auditory_compression_ratio(320.0) - 0.36).abs() < 1e-12);
        assert!((auditory_compression_ratio(120.0) - 0.76).abs() < 1e-12);
    }

    #[test]
    fn test_auditory_ratio_unclamped() {
        assert!(auditory_compression_ratio(750.0) < 0.0);
        assert!(auditory_compression_ratio(-50.0) > 1.0);
    }

    #[test]
    fn test_describe_line_format() {
        let info = ContentInfo::new("Feast", 7.0);
        assert_eq!(describe_line(&info), "Feast (7 minutes)");
    }

    #[test]
    fn test_content_kind_display() {
        assert_eq!(ContentKind::Movie.to_string(), "Movie");
        assert_eq!(ContentKind::Song.to_string(), "Song");
    }

    proptest! {
        #[test]
        fn duration_invariant_holds_for_any_input(minutes in -1.0e6..1.0e6f64) {
            let info = ContentInfo::new("x", minutes);
            prop_assert!(info.duration_minutes() >= 0.0);
        }

        #[test]
        fn visual_ratio_is_two_bucket(resolution in "[0-9]{0,4}[a-z]?") {
            let ratio = visual_compression_ratio(&resolution);
            if resolution == "2160p" {
                prop_assert_eq!(ratio, 0.6);
            } else {
                prop_assert_eq!(ratio, 0.9);
            }
        }
    }
}
