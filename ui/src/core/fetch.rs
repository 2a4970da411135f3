//! Dataset retrieval and the single setup-failure path.
//!
//! Setup either produces a fully validated [`Heatmap`] or fails once: the error
//! is logged, the user gets exactly one alert asking for a refresh, and nothing
//! of the grid is kept.

use std::rc::Rc;

use super::dataset::{Heatmap, TemperatureDataset};
use super::error::{HeatmapError, Result};
use super::platform;

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Ready(Rc<Heatmap>),
    Failed(String),
}

impl LoadState {
    pub fn heatmap(&self) -> Option<&Rc<Heatmap>> {
        match self {
            Self::Ready(heatmap) => Some(heatmap),
            _ => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

pub async fn load_dataset(url: &str) -> Result<TemperatureDataset> {
    tracing::info!(url, "fetching dataset");
    let body = fetch_text(url).await?;
    TemperatureDataset::from_json(&body)
}

/// Fetches and validates the dataset, alerting the user on failure.
pub async fn setup(url: &str) -> LoadState {
    let outcome = match load_dataset(url).await {
        Ok(dataset) => Heatmap::from_dataset(dataset),
        Err(err) => Err(err),
    };
    finish_setup(outcome, platform::alert)
}

pub fn finish_setup<A>(outcome: Result<Heatmap>, alert: A) -> LoadState
where
    A: FnOnce(&str),
{
    match outcome {
        Ok(heatmap) => {
            tracing::info!(
                readings = heatmap.len(),
                base_temperature = heatmap.base_temperature,
                "dataset ready"
            );
            LoadState::Ready(Rc::new(heatmap))
        }
        Err(err) => fail_setup(&err, alert),
    }
}

pub fn fail_setup<E, A>(err: &E, alert: A) -> LoadState
where
    E: std::fmt::Display + ?Sized,
    A: FnOnce(&str),
{
    tracing::error!(error = %err, "heatmap setup failed");
    let message = crate::t!("alert-setup-failed");
    alert(message.as_str());
    LoadState::Failed(err.to_string())
}

#[cfg(target_arch = "wasm32")]
async fn fetch_text(url: &str) -> Result<String> {
    let response = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|err| HeatmapError::Request(err.to_string()))?;

    if !response.ok() {
        return Err(HeatmapError::Http {
            status: response.status(),
        });
    }

    response
        .text()
        .await
        .map_err(|err| HeatmapError::Request(err.to_string()))
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_text(url: &str) -> Result<String> {
    let response = reqwest::get(url)
        .await
        .map_err(|err| HeatmapError::Request(err.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(HeatmapError::Http {
            status: status.as_u16(),
        });
    }

    response
        .text()
        .await
        .map_err(|err| HeatmapError::Request(err.to_string()))
}
