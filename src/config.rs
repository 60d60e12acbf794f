//! Configuration loader plus strongly typed settings structures.
//!
//! The embedded `defaults/config.toml` is always the base layer; a user file
//! only needs the keys it changes; tables are merged key by key, arrays are
//! replaced wholesale. Command-line and environment overrides go on top.
//! Nothing is ever written back.

use crate::widgets::clock::is_valid_time_format;
use crate::widgets::color::Rgb;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

// Embed default configuration at compile time
const DEFAULT_CONFIG: &str = include_str!("../defaults/config.toml");

/// Environment variable that relocates the data directory
pub const DIR_ENV: &str = "WIDGET_GALLERY_DIR";

/// Environment variable carrying the weather API key
pub const API_KEY_ENV: &str = "WIDGET_GALLERY_API_KEY";

/// Top-level configuration object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub weather: WeatherConfig,
    pub timers: TimerConfig,
    pub clock: ClockConfig,
    pub wizard: WizardConfig,
    pub expenses: ExpenseConfig,
    pub filters: FilterConfig,
    pub color: ColorConfig,
    pub catalog: CatalogConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    pub endpoint: String,
    pub api_key: String,
    pub units: Units,
    pub time_format: String,
    /// `{icon}` is replaced by the condition icon code
    pub icon_url: String,
}

/// Measurement system requested from the weather service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    Metric,
    Imperial,
    Standard,
}

impl Units {
    /// Value of the `units` query parameter
    pub fn as_param(&self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
            Units::Standard => "standard",
        }
    }

    pub fn temperature_suffix(&self) -> &'static str {
        match self {
            Units::Metric => "°C",
            Units::Imperial => "°F",
            Units::Standard => "K",
        }
    }

    pub fn speed_suffix(&self) -> &'static str {
        match self {
            Units::Imperial => " mph",
            Units::Metric | Units::Standard => " m/s",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerConfig {
    pub tick_ms: u64,
}

impl TimerConfig {
    pub fn period(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClockConfig {
    pub format: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WizardConfig {
    pub steps: Vec<StepDef>,
}

/// One stage of the multi-step form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepDef {
    pub title: String,
    /// Key the entered value is stored under
    pub field: String,
    #[serde(default)]
    pub placeholder: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseConfig {
    pub currency: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    pub fruits: Vec<String>,
    pub movies: Vec<MovieDef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieDef {
    pub title: String,
    pub year: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorConfig {
    /// `#rrggbb`
    pub initial: String,
}

/// Fixed content shown by the browsing widgets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub quotes: Vec<String>,
    pub tabs: Vec<TabDef>,
    pub faqs: Vec<FaqDef>,
    pub recipes: Vec<RecipeDef>,
    pub products: Vec<ProductDef>,
    pub images: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabDef {
    pub name: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqDef {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeDef {
    pub name: String,
    pub ingredients: Vec<String>,
    pub steps: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDef {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    pub poll_ms: u64,
}

/// Values supplied on the command line or via the environment
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub api_key: Option<String>,
    pub tick_ms: Option<u64>,
}

impl Overrides {
    /// CLI values win; the API key falls back to `WIDGET_GALLERY_API_KEY`
    pub fn with_env(mut self) -> Self {
        if self.api_key.is_none() {
            self.api_key = std::env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty());
        }
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        // The embedded file is covered by tests
        toml::from_str(DEFAULT_CONFIG).expect("embedded default config is valid")
    }
}

impl Config {
    /// Load `path` if given, else `{base_dir}/config.toml` if it exists, else defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => Some(p.to_path_buf()),
            None => {
                let candidate = Self::config_path()?;
                candidate.exists().then_some(candidate)
            }
        };

        match path {
            Some(path) => {
                let contents = fs::read_to_string(&path)
                    .context(format!("Failed to read config file: {:?}", path))?;
                let config = Self::from_toml(&contents)
                    .context(format!("Failed to parse config file: {:?}", path))?;
                tracing::info!("Loaded config from {:?}", path);
                Ok(config)
            }
            None => {
                tracing::debug!("No config file found, using embedded defaults");
                Self::from_toml("")
            }
        }
    }

    /// Parse a (possibly partial) TOML document layered over the defaults
    pub fn from_toml(contents: &str) -> Result<Self> {
        let mut base: toml::Table =
            toml::from_str(DEFAULT_CONFIG).context("Embedded default config is invalid")?;
        let user: toml::Table = toml::from_str(contents).context("Invalid TOML")?;
        merge_tables(&mut base, user);

        let config: Config = toml::Value::Table(base)
            .try_into()
            .context("Config does not match the expected shape")?;
        Ok(config)
    }

    pub fn apply_overrides(&mut self, overrides: &Overrides) {
        if let Some(key) = &overrides.api_key {
            self.weather.api_key = key.clone();
        }
        if let Some(tick_ms) = overrides.tick_ms {
            self.timers.tick_ms = tick_ms;
        }
    }

    /// Reject settings the widgets cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.timers.tick_ms == 0 {
            bail!("timers.tick_ms must be greater than zero");
        }
        if self.ui.poll_ms == 0 {
            bail!("ui.poll_ms must be greater than zero");
        }
        if self.weather.endpoint.trim().is_empty() {
            bail!("weather.endpoint must not be empty");
        }
        if !is_valid_time_format(&self.weather.time_format) {
            bail!("weather.time_format '{}' is not a valid time format", self.weather.time_format);
        }
        if !is_valid_time_format(&self.clock.format) {
            bail!("clock.format '{}' is not a valid time format", self.clock.format);
        }
        if Rgb::parse(&self.color.initial).is_none() {
            bail!("color.initial '{}' must look like #rrggbb", self.color.initial);
        }
        if self.catalog.tabs.is_empty() {
            bail!("catalog.tabs needs at least one tab");
        }
        if self.wizard.steps.is_empty() {
            bail!("wizard.steps needs at least one step");
        }

        let mut seen = HashSet::new();
        for step in &self.wizard.steps {
            if step.field.trim().is_empty() {
                bail!("wizard step '{}' has an empty field name", step.title);
            }
            if !seen.insert(step.field.as_str()) {
                bail!("wizard field '{}' is used by more than one step", step.field);
            }
        }
        Ok(())
    }

    /// Data directory: `$WIDGET_GALLERY_DIR` or `~/.widget-gallery`
    pub fn base_dir() -> Result<PathBuf> {
        if let Ok(custom_dir) = std::env::var(DIR_ENV) {
            return Ok(PathBuf::from(custom_dir));
        }

        let home = dirs::home_dir().context("Could not find home directory")?;
        Ok(home.join(".widget-gallery"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::base_dir()?.join("config.toml"))
    }
}

/// Recursively overlay `overlay` onto `base`
fn merge_tables(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        match (base.get_mut(&key), value) {
            (Some(toml::Value::Table(existing)), toml::Value::Table(incoming)) => {
                merge_tables(existing, incoming);
            }
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}
