//! Interaction tuning, with optional per-page overrides.
//!
//! Overrides come as string key/value pairs (the web front-end reads them from
//! `data-folio-*` attributes). Invalid overrides are reported, never applied.

use crate::{SpotlightPosition, TiltParams, PERCENT_MAX};
use thiserror::Error;

pub const DEFAULT_HERO_ELEMENT_ID: &str = "hero-card";
pub const DEFAULT_HOVERABLE_SELECTOR: &str = "[data-hoverable]";

/// Keys accepted by [`InteractionConfig::with_overrides`].
pub const OVERRIDE_KEYS: [&str; 5] = [
    "tilt-gain",
    "tilt-limit",
    "spotlight-x",
    "spotlight-y",
    "hero-id",
];

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("invalid number for `{key}`: {value:?}")]
    InvalidNumber { key: &'static str, value: String },
    #[error("`{key}` must be {expected}, got {value}")]
    OutOfRange {
        key: &'static str,
        value: f32,
        expected: &'static str,
    },
    #[error("`hero-id` must not be empty")]
    EmptyHeroId,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InteractionConfig {
    pub tilt: TiltParams,
    pub spotlight_origin: SpotlightPosition,
    pub hero_element_id: String,
    pub hoverable_selector: String,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            tilt: TiltParams::default(),
            spotlight_origin: SpotlightPosition::default(),
            hero_element_id: DEFAULT_HERO_ELEMENT_ID.to_string(),
            hoverable_selector: DEFAULT_HOVERABLE_SELECTOR.to_string(),
        }
    }
}

impl InteractionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check("tilt-gain", self.tilt.gain_deg, |v| v >= 0.0, "a non-negative number")?;
        check("tilt-limit", self.tilt.limit_deg, |v| v > 0.0, "greater than zero")?;
        check("spotlight-x", self.spotlight_origin.x, in_percent, "within 0..=100")?;
        check("spotlight-y", self.spotlight_origin.y, in_percent, "within 0..=100")?;
        if self.hero_element_id.trim().is_empty() {
            return Err(ConfigError::EmptyHeroId);
        }
        Ok(())
    }

    /// Apply overrides found through `lookup`, then validate the result.
    ///
    /// Keys that `lookup` does not know are left at their current value.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = parse_number(&lookup, "tilt-gain")? {
            self.tilt.gain_deg = v;
        }
        if let Some(v) = parse_number(&lookup, "tilt-limit")? {
            self.tilt.limit_deg = v;
        }
        if let Some(v) = parse_number(&lookup, "spotlight-x")? {
            self.spotlight_origin.x = v;
        }
        if let Some(v) = parse_number(&lookup, "spotlight-y")? {
            self.spotlight_origin.y = v;
        }
        if let Some(id) = lookup("hero-id") {
            self.hero_element_id = id.trim().to_string();
        }
        self.validate()?;
        Ok(self)
    }
}

fn in_percent(v: f32) -> bool {
    (0.0..=PERCENT_MAX).contains(&v)
}

fn check(
    key: &'static str,
    value: f32,
    ok: impl Fn(f32) -> bool,
    expected: &'static str,
) -> Result<(), ConfigError> {
    if value.is_finite() && ok(value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            key,
            value,
            expected,
        })
    }
}

fn parse_number<F>(lookup: &F, key: &'static str) -> Result<Option<f32>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    raw.trim()
        .parse::<f32>()
        .map(Some)
        .map_err(|_| ConfigError::InvalidNumber { key, value: raw })
}
