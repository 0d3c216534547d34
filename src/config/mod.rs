use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::types::{BandType, Edges, FilterSpec};

/// Top-level configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FilterConfig {
    /// Sampling rate in Hz shared by every filter that does not set its own
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_rate: Option<f64>,

    #[serde(default)]
    pub filters: Vec<FilterInstanceConfig>,
}

impl FilterConfig {
    /// Load configuration from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config = Self::from_yaml(&content)
            .with_context(|| format!("Failed to load config: {}", path.display()))?;
        Ok(config)
    }

    /// Parse and validate configuration text
    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: FilterConfig =
            serde_yaml::from_str(content).context("Failed to parse YAML config")?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.filters.is_empty() {
            return Err(anyhow!("Configuration must have at least one filter"));
        }

        if let Some(rate) = self.sample_rate {
            validate_sample_rate(rate)?;
        }

        for (idx, filter) in self.filters.iter().enumerate() {
            filter
                .validate(self.sample_rate)
                .with_context(|| format!("Invalid configuration for filter {} ({})", idx, filter.name))?;
        }

        Ok(())
    }
}

/// Individual filter design configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FilterInstanceConfig {
    #[serde(default = "default_name", skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(rename = "type")]
    pub band: BandType,

    pub passband: EdgeSpec,
    pub stopband: EdgeSpec,

    /// Maximum passband loss in dB
    #[serde(default = "default_ripple")]
    pub ripple: f64,

    /// Minimum stopband attenuation in dB
    #[serde(default = "default_attenuation")]
    pub attenuation: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_rate: Option<f64>,
}

impl FilterInstanceConfig {
    /// Validate this filter against the shared sampling rate
    pub fn validate(&self, shared_rate: Option<f64>) -> Result<()> {
        if let Some(rate) = self.sample_rate {
            validate_sample_rate(rate)?;
        }
        self.to_spec(shared_rate)?;
        Ok(())
    }

    /// Sampling rate in effect for this filter, if any
    pub fn effective_sample_rate(&self, shared_rate: Option<f64>) -> Option<f64> {
        self.sample_rate.or(shared_rate)
    }

    /// Sampling period `T`, 1 when edges are given pre-normalized
    pub fn sampling_time(&self, shared_rate: Option<f64>) -> f64 {
        self.effective_sample_rate(shared_rate)
            .map_or(1.0, |rate| 1.0 / rate)
    }

    /// Build the normalized design specification.
    ///
    /// Hz edges are divided by the Nyquist rate, the scale the design
    /// realizes at `z = exp(i * pi * f)`. Normalized edges must stay below
    /// 0.5, so Hz edges must stay below a quarter of the sampling rate.
    pub fn to_spec(&self, shared_rate: Option<f64>) -> Result<FilterSpec> {
        let rate = self.effective_sample_rate(shared_rate);
        if let Some(rate) = rate {
            let limit = rate / 4.0;
            let edges = self.passband.edges().to_vec().into_iter().chain(self.stopband.edges().to_vec());
            for hz in edges {
                if hz >= limit {
                    return Err(anyhow!(
                        "Edge {} Hz must be below {} Hz (a quarter of the {} Hz sample rate)",
                        hz,
                        limit,
                        rate
                    ));
                }
            }
        }

        let normalize = |edges: Edges| match rate {
            Some(rate) => edges.map(|f| f / (rate / 2.0)),
            None => edges,
        };

        let spec = FilterSpec::new(
            self.band,
            normalize(self.passband.edges()),
            normalize(self.stopband.edges()),
            self.ripple,
            self.attenuation,
        )?;
        Ok(spec)
    }
}

/// Band edge - either a single frequency or a `[low, high]` pair
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum EdgeSpec {
    Single(f64),
    Pair([f64; 2]),
}

impl EdgeSpec {
    pub fn edges(&self) -> Edges {
        match *self {
            EdgeSpec::Single(f) => Edges::Single(f),
            EdgeSpec::Pair([low, high]) => Edges::Pair(low, high),
        }
    }
}

fn validate_sample_rate(rate: f64) -> Result<()> {
    if !(rate.is_finite() && rate > 0.0) {
        return Err(anyhow!("Sample rate must be a positive number of Hz, got {}", rate));
    }
    Ok(())
}

// Default value functions for serde
fn default_name() -> String {
    "Untitled".to_string()
}

fn default_ripple() -> f64 {
    3.0
}

fn default_attenuation() -> f64 {
    40.0
}
