//! Page configuration
//!
//! Everything the page shows that is content rather than behaviour: the
//! tracks behind the audio players, slides, gallery, stats, calendar
//! availability and booking contact. Stored as TOML; every section is
//! optional and falls back to the built-in demo page.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::widgets::{Availability, CarouselConfig, GalleryImage, Stat};

/// Errors loading or saving the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine the config directory")]
    NoConfigDir,

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Site-wide contact details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Name used in booking messages
    pub artist: String,
    /// WhatsApp number, international format without `+`
    pub phone: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            artist: "DJ Nova".to_string(),
            phone: "254700000000".to_string(),
        }
    }
}

/// One audio preview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackConfig {
    pub title: String,
    #[serde(default)]
    pub src: String,
    /// Length reported once metadata has loaded
    pub duration_secs: f64,
    /// Simulated time before metadata is available
    #[serde(default)]
    pub metadata_delay_ms: u64,
}

/// Slides plus their rotation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlidesConfig {
    #[serde(default)]
    pub slides: Vec<String>,
    #[serde(flatten)]
    pub timing: CarouselConfig,
}

/// Terminal previewer settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// Redraw and clock tick interval in milliseconds
    pub tick_ms: u64,
    /// Colour theme: "classic", "ocean" or "neon"
    pub theme: String,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            tick_ms: 100,
            theme: "neon".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub site: SiteConfig,
    pub players: Vec<TrackConfig>,
    pub slideshow: SlidesConfig,
    pub testimonials: SlidesConfig,
    pub calendar: Availability,
    pub gallery: Vec<GalleryImage>,
    pub stats: Vec<Stat>,
    /// Service names offered on booking cards
    pub services: Vec<String>,
    /// Section ids in page order
    pub sections: Vec<String>,
    pub preview: PreviewConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site: SiteConfig::default(),
            players: vec![
                TrackConfig {
                    title: "Afro House Sunset Mix".to_string(),
                    src: "audio/afro-house.mp3".to_string(),
                    duration_secs: 184.0,
                    metadata_delay_ms: 300,
                },
                TrackConfig {
                    title: "Amapiano Warmup".to_string(),
                    src: "audio/amapiano.mp3".to_string(),
                    duration_secs: 152.5,
                    metadata_delay_ms: 600,
                },
                TrackConfig {
                    title: "Wedding Reception Set".to_string(),
                    src: "audio/wedding.mp3".to_string(),
                    duration_secs: 95.9,
                    metadata_delay_ms: 0,
                },
            ],
            slideshow: SlidesConfig {
                slides: vec![
                    "Live at the Beach Festival".to_string(),
                    "Corporate Gala Highlights".to_string(),
                    "Wedding Party Recap".to_string(),
                ],
                timing: CarouselConfig::slideshow(),
            },
            testimonials: SlidesConfig {
                slides: vec![
                    "\"Kept the floor full all night.\" - Wanjiru K.".to_string(),
                    "\"Professional, punctual and fun.\" - Brian O.".to_string(),
                    "\"Our guests still talk about it.\" - Faith & Tom".to_string(),
                ],
                timing: CarouselConfig::testimonials(),
            },
            calendar: Availability::default(),
            gallery: vec![
                GalleryImage {
                    src: "img/gallery/stage.jpg".to_string(),
                    alt: "Main stage lights".to_string(),
                },
                GalleryImage {
                    src: "img/gallery/decks.jpg".to_string(),
                    alt: "Decks close-up".to_string(),
                },
                GalleryImage {
                    src: "img/gallery/crowd.jpg".to_string(),
                    alt: "Crowd at sunset".to_string(),
                },
            ],
            stats: vec![
                Stat {
                    label: "Events played".to_string(),
                    target: 350,
                },
                Stat {
                    label: "Happy clients".to_string(),
                    target: 280,
                },
                Stat {
                    label: "Years on the decks".to_string(),
                    target: 8,
                },
            ],
            services: vec![
                "Wedding".to_string(),
                "Corporate Event".to_string(),
                "Club Night".to_string(),
            ],
            sections: ["home", "about", "mixes", "services", "gallery", "booking", "contact"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            preview: PreviewConfig::default(),
        }
    }
}

impl Config {
    /// Default location: `<config dir>/stagelight/config.toml`.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(dir.join("stagelight").join("config.toml"))
    }

    /// Load from the default location, or the built-in page if absent.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path()?;
        if !path.exists() {
            tracing::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Write to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = self.to_toml()?;
        let write_err = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        fs::write(path, content).map_err(write_err)
    }
}
