use crate::{
    algebra::{color4_from_array, Color4},
    color::hsv_to_color4,
    error::{DuotoneError, Result},
    tonemap::{ToneConfig, TONE_SATURATION, TONE_VALUE},
};
use serde::Deserialize;
use std::path::Path;

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct HueTone {
    hue: f32,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct HsvTone {
    hsv: [f32; 3],
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RgbaTone {
    #[serde(deserialize_with = "color4_from_array")]
    rgba: Color4,
}

// each form is strict, so a tone with extra or mixed keys matches none
#[derive(Deserialize)]
#[serde(untagged)]
enum ToneJson {
    Hue(HueTone),
    Hsv(HsvTone),
    Rgba(RgbaTone),
}

impl ToneJson {
    fn into_color(self) -> Color4 {
        match self {
            ToneJson::Hue(HueTone { hue }) => hsv_to_color4(hue, TONE_SATURATION, TONE_VALUE),
            ToneJson::Hsv(HsvTone { hsv: [h, s, v] }) => hsv_to_color4(h, s, v),
            ToneJson::Rgba(RgbaTone { rgba }) => rgba,
        }
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)] // falls back to the preset tone
    dark: Option<ToneJson>,
    #[serde(default)]
    light: Option<ToneJson>,
    #[serde(default)]
    strength: Option<f32>,
}

/// Parse a tone config from JSON text.
pub fn from_json_str(data: &str) -> Result<ToneConfig> {
    let file: ConfigFile = serde_json::from_str(data)?;
    let preset = ToneConfig::default();

    let config = ToneConfig {
        dark_color: file.dark.map_or(preset.dark_color, ToneJson::into_color),
        light_color: file.light.map_or(preset.light_color, ToneJson::into_color),
        strength: file.strength.unwrap_or(preset.strength),
    };
    validate(&config)?;
    Ok(config)
}

/// Read and parse a tone config file.
pub fn load(path: impl AsRef<Path>) -> Result<ToneConfig> {
    let path = path.as_ref();
    let data = std::fs::read_to_string(path).map_err(|source| DuotoneError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = from_json_str(&data)?;
    log::debug!(
        "loaded tone config from {}: dark {:?}, light {:?}, strength {}",
        path.display(),
        config.dark_color,
        config.light_color,
        config.strength
    );
    Ok(config)
}

/// Reject NaN and infinities. Range is not checked: strength may extrapolate.
pub fn validate(config: &ToneConfig) -> Result<()> {
    if !config.dark_color.is_finite() {
        return Err(DuotoneError::NonFinite { field: "dark" });
    }
    if !config.light_color.is_finite() {
        return Err(DuotoneError::NonFinite { field: "light" });
    }
    if !config.strength.is_finite() {
        return Err(DuotoneError::NonFinite { field: "strength" });
    }
    Ok(())
}
