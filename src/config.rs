use log::{error, Level};
use serde::Deserialize;
use thiserror::Error;

const VARIANTS_JSON: &str = include_str!("variants.json");

pub const DEFAULT_VARIANT: &str = "crimson";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Palette {
    pub background: String,
    pub foreground: String,
    pub accent: String,
    pub accent_soft: String,
    pub surface: String,
}

/// Everything that differs between the two page designs.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SiteVariant {
    pub key: String,
    pub brand: String,
    pub palette: Palette,
    pub hero_title: String,
    pub hero_subtitle: String,
    pub about_title: String,
    #[serde(default)]
    pub show_scene: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid variant config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unknown site variant `{0}`")]
    UnknownVariant(String),
}

impl SiteVariant {
    /// Used when the embedded config cannot be read. Plain crimson, no scene.
    pub fn fallback() -> Self {
        Self {
            key: DEFAULT_VARIANT.to_string(),
            brand: "TechGuard Solutions".to_string(),
            palette: Palette {
                background: "#000000".to_string(),
                foreground: "#ffffff".to_string(),
                accent: "#ff3e3e".to_string(),
                accent_soft: "#ff6b6b".to_string(),
                surface: "rgba(255, 255, 255, 0.05)".to_string(),
            },
            hero_title: "Innovative Tech Solutions".to_string(),
            hero_subtitle: "Web scraping, IoT and development solutions.".to_string(),
            about_title: "About Us".to_string(),
            show_scene: false,
        }
    }
}

pub fn load_variants() -> Result<Vec<SiteVariant>, ConfigError> {
    parse_variants(VARIANTS_JSON)
}

fn parse_variants(json: &str) -> Result<Vec<SiteVariant>, ConfigError> {
    Ok(serde_json::from_str(json)?)
}

pub fn variant(key: &str) -> Result<SiteVariant, ConfigError> {
    load_variants()?
        .into_iter()
        .find(|v| v.key == key)
        .ok_or_else(|| ConfigError::UnknownVariant(key.to_string()))
}

pub fn variant_or_fallback(key: &str) -> SiteVariant {
    variant(key).unwrap_or_else(|err| {
        error!("{}, rendering fallback design", err);
        SiteVariant::fallback()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_variants_parse() {
        let variants = load_variants().unwrap();
        let keys: Vec<&str> = variants.iter().map(|v| v.key.as_str()).collect();
        assert_eq!(keys, vec!["crimson", "slate"]);
    }

    #[test]
    fn only_crimson_shows_the_scene() {
        assert!(variant("crimson").unwrap().show_scene);
        assert!(!variant("slate").unwrap().show_scene);
    }

    #[test]
    fn unknown_key_is_an_error() {
        match variant("neon") {
            Err(ConfigError::UnknownVariant(key)) => assert_eq!(key, "neon"),
            other => panic!("expected unknown variant, got {:?}", other),
        }
        assert_eq!(variant_or_fallback("neon"), SiteVariant::fallback());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(parse_variants("[{\"key\": 1}]"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn show_scene_defaults_to_off() {
        let json = r##"[{
            "key": "bare",
            "brand": "B",
            "palette": {"background": "#000", "foreground": "#fff", "accent": "#f00", "accent_soft": "#f66", "surface": "#111"},
            "hero_title": "t",
            "hero_subtitle": "s",
            "about_title": "a"
        }]"##;
        let variants = parse_variants(json).unwrap();
        assert!(!variants[0].show_scene);
    }
}
