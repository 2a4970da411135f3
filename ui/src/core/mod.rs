//! Platform-agnostic building blocks: data model, scales, layout and UI state.

pub mod color;
pub mod config;
pub mod dataset;
pub mod error;
pub mod fetch;
pub mod format;
pub mod layout;
pub mod legend;
pub mod platform;
pub mod scale;
pub mod timing;
pub mod tooltip;
