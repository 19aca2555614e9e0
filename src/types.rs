//! Shared types and constants used across stickerfit.
//! Includes `Color`, `CanvasSize`, `BackgroundSource`, the supported `InputFormat`s,
//! and the process-wide defaults (target canvas, tolerance, soft margin).
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const STICKER_WIDTH: u32 = 370;
pub const STICKER_HEIGHT: u32 = 320;

pub const DEFAULT_TOLERANCE: u8 = 18;
pub const MAX_TOLERANCE: u8 = 64;

/// Width of the distance band above the tolerance where alpha ramps from 0 back
/// to the source alpha.
pub const DEFAULT_SOFT_MARGIN: u8 = 24;

pub const DEFAULT_OUTPUT_DIR: &str = "output_370x320";

pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "bmp", "gif"];

/// An RGB color. Alpha is never part of a background reference.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Euclidean RGB distance scaled by 1/sqrt(3), so a uniform per-channel offset
    /// of `t` has distance `t`.
    pub fn distance(&self, other: &Color) -> f32 {
        let dr = self.r as f32 - other.r as f32;
        let dg = self.g as f32 - other.g as f32;
        let db = self.b as f32 - other.b as f32;
        ((dr * dr + dg * dg + db * db) / 3.0).sqrt()
    }
}

impl From<[u8; 3]> for Color {
    fn from(c: [u8; 3]) -> Self {
        Color::new(c[0], c[1], c[2])
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);

        let expanded: String = match hex.len() {
            3 => hex.chars().flat_map(|c| [c, c]).collect(),
            6 => hex.to_string(),
            _ => {
                return Err(format!(
                    "invalid color '{}': expected 3 or 6 hex digits, e.g. #fff or #ffffff",
                    s
                ));
            }
        };

        if !expanded.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(format!("invalid color '{}': not a hex value", s));
        }

        let channel = |i: usize| {
            expanded
                .get(i..i + 2)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .ok_or_else(|| format!("invalid color '{}': not a hex value", s))
        };

        Ok(Color::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

/// Exact pixel size of the output canvas.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    pub const STICKER: CanvasSize = CanvasSize {
        width: STICKER_WIDTH,
        height: STICKER_HEIGHT,
    };
}

impl Default for CanvasSize {
    fn default() -> Self {
        CanvasSize::STICKER
    }
}

impl std::fmt::Display for CanvasSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Where the keyer takes its reference color from.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum BackgroundSource {
    /// Most frequent of the four corner colors.
    #[default]
    Auto,
    Explicit(Color),
}

impl From<Option<Color>> for BackgroundSource {
    fn from(color: Option<Color>) -> Self {
        match color {
            Some(c) => BackgroundSource::Explicit(c),
            None => BackgroundSource::Auto,
        }
    }
}

impl std::fmt::Display for BackgroundSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BackgroundSource::Auto => write!(f, "auto (corners)"),
            BackgroundSource::Explicit(c) => write!(f, "{}", c),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum InputFormat {
    Png,
    Jpeg,
    Webp,
    Bmp,
    Gif,
}

impl InputFormat {
    /// Classify a path by its (case-insensitive) extension.
    pub fn from_path(path: &Path) -> Option<InputFormat> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "png" => Some(InputFormat::Png),
            "jpg" | "jpeg" => Some(InputFormat::Jpeg),
            "webp" => Some(InputFormat::Webp),
            "bmp" => Some(InputFormat::Bmp),
            "gif" => Some(InputFormat::Gif),
            _ => None,
        }
    }
}

impl std::fmt::Display for InputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            InputFormat::Png => "PNG",
            InputFormat::Jpeg => "JPEG",
            InputFormat::Webp => "WEBP",
            InputFormat::Bmp => "BMP",
            InputFormat::Gif => "GIF",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_and_short_hex() {
        assert_eq!("#FFFFFF".parse::<Color>().unwrap(), Color::WHITE);
        assert_eq!("00ff7f".parse::<Color>().unwrap(), Color::new(0, 255, 127));
        assert_eq!(" #f0a ".parse::<Color>().unwrap(), Color::new(0xff, 0x00, 0xaa));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert!("#FFFF".parse::<Color>().is_err());
        assert!("#GGGGGG".parse::<Color>().is_err());
        assert!("".parse::<Color>().is_err());
        assert!("#ééé".parse::<Color>().is_err());
        assert!("#+f+f+f".parse::<Color>().is_err());
        assert!("+ff".parse::<Color>().is_err());
    }

    #[test]
    fn display_round_trips_through_parse() {
        let c = Color::new(18, 52, 86);
        assert_eq!(c.to_string(), "#123456");
        assert_eq!(c.to_string().parse::<Color>().unwrap(), c);
    }

    #[test]
    fn distance_reads_per_channel() {
        let a = Color::new(100, 100, 100);
        let b = Color::new(110, 110, 110);
        assert!((a.distance(&b) - 10.0).abs() < 1e-4);
        assert_eq!(a.distance(&a), 0.0);
    }

    #[test]
    fn classifies_extensions_case_insensitively() {
        assert_eq!(InputFormat::from_path(Path::new("a/b.JPG")), Some(InputFormat::Jpeg));
        assert_eq!(InputFormat::from_path(Path::new("x.webp")), Some(InputFormat::Webp));
        assert_eq!(InputFormat::from_path(Path::new("notes.txt")), None);
        assert_eq!(InputFormat::from_path(Path::new("noext")), None);
    }
}
