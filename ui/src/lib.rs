//! Shared UI crate for Tempgrid. Data model, layout math and views live here;
//! the `web` and `desktop` crates only launch them.

pub mod core;
pub mod heatmap;
pub mod i18n;
pub mod views;

pub mod components {
    // Localized application header (components/app_header.rs)
    pub mod app_header;
    pub use app_header::AppHeader;
}

#[cfg(test)]
mod tests;
