//! Tunables for the heatmap. Launchers provide a `HeatmapConfig` through Dioxus
//! context; anything left out of an override keeps its default.

use serde::{Deserialize, Serialize};

use super::color::Rgb;
use super::error::Result;

pub const DEFAULT_DATA_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/global-temperature.json";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Padding {
    fn default() -> Self {
        Self {
            top: 25.0,
            right: 25.0,
            bottom: 100.0,
            left: 100.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeatmapConfig {
    pub data_url: String,
    pub padding: Padding,
    /// CSS color for the lowest variance.
    pub cold_color: String,
    /// CSS color for the highest variance.
    pub warm_color: String,
    pub legend_steps: usize,
    pub tooltip_fade_ms: u64,
    /// Gap between the grid and each axis line.
    pub axis_offset: f64,
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        Self {
            data_url: DEFAULT_DATA_URL.to_string(),
            padding: Padding::default(),
            cold_color: "darkblue".to_string(),
            warm_color: "crimson".to_string(),
            legend_steps: 9,
            tooltip_fade_ms: 250,
            axis_offset: 5.0,
        }
    }
}

impl HeatmapConfig {
    pub fn from_json_str(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Gradient stops, falling back to the defaults for unparseable colors.
    pub fn palette(&self) -> (Rgb, Rgb) {
        let cold = Rgb::parse(&self.cold_color).unwrap_or_else(|| {
            tracing::warn!(color = %self.cold_color, "unknown cold color, using darkblue");
            Rgb::new(0, 0, 139)
        });
        let warm = Rgb::parse(&self.warm_color).unwrap_or_else(|| {
            tracing::warn!(color = %self.warm_color, "unknown warm color, using crimson");
            Rgb::new(220, 20, 60)
        });
        (cold, warm)
    }

    pub fn legend_steps(&self) -> usize {
        self.legend_steps.max(1)
    }
}
