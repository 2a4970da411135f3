mod heatmap;
pub use heatmap::Heatmap;
