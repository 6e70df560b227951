use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::surface::SurfaceSize;

/// Host/client URL sync parameters (optional section in config.toml).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Seconds between host sync checks (e.g. 0.1 = 100ms).
    pub interval_secs: f64,
    /// Whether this instance drives the shared URL.
    pub host: bool,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            interval_secs: 0.1,
            host: false,
        }
    }
}

impl SyncConfig {
    pub fn interval(&self) -> Duration {
        secs_or_zero(self.interval_secs)
    }
}

/// Global configuration loaded from `~/.config/vrwv/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VrwvConfig {
    /// URL loaded when the view is set up. Trusted; not run through admission.
    pub default_url: String,
    /// Seconds the loading indicator stays up after a load.
    #[serde(default = "default_loading_hold_secs")]
    pub loading_hold_secs: f64,
    /// URLs cycled by `vrwv demo`.
    #[serde(default = "default_demo_urls")]
    pub demo_urls: Vec<String>,
    /// Physical size of the web surface.
    #[serde(default)]
    pub surface: SurfaceSize,
    #[serde(default)]
    pub sync: SyncConfig,
}

fn default_loading_hold_secs() -> f64 {
    1.0
}

fn default_demo_urls() -> Vec<String> {
    vec![
        "https://docs.google.com/presentation/d/example1".to_string(),
        "https://docs.google.com/presentation/d/example2".to_string(),
        "https://www.youtube.com/watch?v=example".to_string(),
    ]
}

impl Default for VrwvConfig {
    fn default() -> Self {
        Self {
            default_url: "https://docs.google.com/presentation/".to_string(),
            loading_hold_secs: default_loading_hold_secs(),
            demo_urls: default_demo_urls(),
            surface: SurfaceSize::default(),
            sync: SyncConfig::default(),
        }
    }
}

impl VrwvConfig {
    pub fn loading_hold(&self) -> Duration {
        secs_or_zero(self.loading_hold_secs)
    }
}

/// Negative, NaN or overflowing values collapse to zero.
fn secs_or_zero(secs: f64) -> Duration {
    Duration::try_from_secs_f64(secs).unwrap_or(Duration::ZERO)
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("vrwv")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<VrwvConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let cfg: VrwvConfig = toml::from_str(&data)
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}

/// Load configuration from `path`, writing the defaults there if it does not exist.
pub fn load_or_init_at(path: &Path) -> Result<VrwvConfig> {
    if !path.exists() {
        let default_cfg = VrwvConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(path)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<VrwvConfig> {
    load_or_init_at(&config_path()?)
}
