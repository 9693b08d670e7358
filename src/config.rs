use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_FEED_URL: &str = "https://script.google.com/macros/s/AKfycbz8HBkvSlt7Z2oyWCfjUPj9KQ1mBxtiNN5kfzveliN3SgWYKJ8FbdFTEYMUjYdPXaFfCQ/exec";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WidgetConfig {
    #[serde(default = "default_feed_url")]
    pub feed_url: String,

    #[serde(default = "default_page_size")]
    pub page_size: usize,

    // Directory the floor plan and unit photos are served from
    #[serde(default = "default_image_base")]
    pub image_base: String,

    // Building context used when the page does not supply one
    #[serde(default)]
    pub building: Option<String>,

    #[serde(default)]
    pub price: PriceConfig,

    #[serde(default)]
    pub filters: FilterOptionsConfig,
}

/// Fixed price slider domain. Not derived from the data so the scale stays
/// the same when switching buildings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct PriceConfig {
    #[serde(default = "default_price_floor")]
    pub floor: u32,
    #[serde(default = "default_price_ceiling")]
    pub ceiling: u32,
    #[serde(default = "default_price_step")]
    pub step: u32,
}

impl Default for PriceConfig {
    fn default() -> Self {
        Self {
            floor: default_price_floor(),
            ceiling: default_price_ceiling(),
            step: default_price_step(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct OptionConfig {
    pub label: String,
    pub value: String,
}

impl OptionConfig {
    fn new(label: &str, value: &str) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FilterOptionsConfig {
    #[serde(default = "default_bedroom_options")]
    pub bedrooms: Vec<OptionConfig>,
    #[serde(default = "default_bathroom_options")]
    pub bathrooms: Vec<OptionConfig>,
    #[serde(default = "default_outdoor_options")]
    pub outdoor: Vec<OptionConfig>,
}

impl Default for FilterOptionsConfig {
    fn default() -> Self {
        Self {
            bedrooms: default_bedroom_options(),
            bathrooms: default_bathroom_options(),
            outdoor: default_outdoor_options(),
        }
    }
}

fn default_feed_url() -> String {
    DEFAULT_FEED_URL.to_string()
}

fn default_page_size() -> usize {
    10
}

fn default_image_base() -> String {
    "assets/images/units/".to_string()
}

fn default_price_floor() -> u32 {
    2900
}

fn default_price_ceiling() -> u32 {
    5500
}

fn default_price_step() -> u32 {
    25
}

fn default_bedroom_options() -> Vec<OptionConfig> {
    vec![
        OptionConfig::new("All Bedrooms", "all"),
        OptionConfig::new("1 Bedroom", "1"),
        OptionConfig::new("2 Bedrooms", "2"),
        OptionConfig::new("3 Bedrooms", "3"),
    ]
}

fn default_bathroom_options() -> Vec<OptionConfig> {
    vec![
        OptionConfig::new("All Bathrooms", "all"),
        OptionConfig::new("1 Bathroom", "1"),
        OptionConfig::new("1.5 Bathrooms", "1.5"),
        OptionConfig::new("2 Bathrooms", "2"),
    ]
}

fn default_outdoor_options() -> Vec<OptionConfig> {
    vec![
        OptionConfig::new("All Outdoor Space", "all"),
        OptionConfig::new("Balcony", "balcony"),
        OptionConfig::new("Terrace", "terrace"),
        OptionConfig::new("Patio", "patio"),
        OptionConfig::new("None", "none"),
    ]
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            feed_url: default_feed_url(),
            page_size: default_page_size(),
            image_base: default_image_base(),
            building: None,
            price: PriceConfig::default(),
            filters: FilterOptionsConfig::default(),
        }
    }
}

impl WidgetConfig {
    pub fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::load_from_str(&content)
    }

    pub fn load_from_str(content: &str) -> Result<Self, ConfigError> {
        let config: WidgetConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::Invalid("page_size must be at least 1".to_string()));
        }
        if self.price.step == 0 {
            return Err(ConfigError::Invalid("price.step must be at least 1".to_string()));
        }
        if self.price.ceiling < self.price.floor
            || self.price.ceiling - self.price.floor < self.price.step
        {
            return Err(ConfigError::Invalid(format!(
                "price range {}..{} must span at least one step of {}",
                self.price.floor, self.price.ceiling, self.price.step
            )));
        }
        for (name, options) in [
            ("bedrooms", &self.filters.bedrooms),
            ("bathrooms", &self.filters.bathrooms),
            ("outdoor", &self.filters.outdoor),
        ] {
            if options.is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "filters.{} needs at least one option",
                    name
                )));
            }
        }
        Ok(())
    }
}
