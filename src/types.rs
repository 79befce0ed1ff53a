//! Shared types and enums used across PACKSHOT.
//! Includes `OutputFormat`, the `Background` color presets, and the
//! `ScalePolicy` governing whether crops may be upscaled to the target.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum OutputFormat {
    JPEG,
    PNG,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::JPEG => "jpg",
            OutputFormat::PNG => "png",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::JPEG => write!(f, "JPEG"),
            OutputFormat::PNG => write!(f, "PNG"),
        }
    }
}

/// Opaque background presets for composited output images.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum Background {
    UltraLight,
    Light,
    Medium,
    Dark,
    VeryDark,
}

impl Background {
    /// RGB triple for this preset.
    pub fn rgb(&self) -> [u8; 3] {
        match self {
            Background::UltraLight => [240, 240, 240],
            Background::Light => [128, 128, 128],
            Background::Medium => [64, 64, 64],
            Background::Dark => [32, 32, 32],
            Background::VeryDark => [16, 16, 12],
        }
    }
}

impl std::fmt::Display for Background {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [r, g, b] = self.rgb();
        write!(f, "#{:02x}{:02x}{:02x}", r, g, b)
    }
}

/// Whether a crop smaller than the target may be scaled up to fill it.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum ScalePolicy {
    /// Never scale above 1.0; small content stays its original size.
    ShrinkOnly,
    /// Scale up or down to fit the target exactly on the long side.
    Fit,
}

impl std::fmt::Display for ScalePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScalePolicy::ShrinkOnly => write!(f, "ShrinkOnly"),
            ScalePolicy::Fit => write!(f, "Fit"),
        }
    }
}
