use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{Background, OutputFormat, ScalePolicy};

/// Render-stage parameters suitable for config files and presets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderParams {
    /// Square frame resolution in pixels.
    pub resolution: u32,
    /// If true, existing frame files are re-rendered instead of skipped.
    pub force: bool,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            resolution: 2048,
            force: false,
        }
    }
}

/// Process-stage parameters suitable for config files and presets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessParams {
    pub width: u32,
    pub height: u32,
    pub background: Background,
    pub scale_policy: ScalePolicy,
    pub format: OutputFormat,
    /// JPEG quality, ignored for PNG output.
    pub jpeg_quality: u8,
    pub force: bool,
}

impl Default for ProcessParams {
    fn default() -> Self {
        Self {
            width: 768,
            height: 1024,
            background: Background::Light,
            scale_policy: ScalePolicy::ShrinkOnly,
            format: OutputFormat::JPEG,
            jpeg_quality: 93,
            force: false,
        }
    }
}

impl ProcessParams {
    /// Loads parameters from a JSON preset file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        serde_json::from_str(&text).map_err(Error::external)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn process_params_preset_round_trip() {
        let params = ProcessParams {
            width: 640,
            height: 1536,
            background: Background::Dark,
            scale_policy: ScalePolicy::Fit,
            format: OutputFormat::PNG,
            jpeg_quality: 80,
            force: true,
        };

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preset.json");
        std::fs::write(&path, serde_json::to_string_pretty(&params).unwrap()).unwrap();

        let loaded = ProcessParams::from_json_file(&path).unwrap();
        assert_eq!(loaded.width, 640);
        assert_eq!(loaded.height, 1536);
        assert_eq!(loaded.background, Background::Dark);
        assert_eq!(loaded.scale_policy, ScalePolicy::Fit);
        assert_eq!(loaded.format, OutputFormat::PNG);
    }

    #[test]
    fn missing_preset_file_is_an_io_error() {
        let err = ProcessParams::from_json_file(Path::new("/nonexistent/preset.json"))
            .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
