mod chart;
pub use chart::HeatmapChart;

mod grid;
pub use grid::{HeatmapGrid, HeatmapHoverOutline};

mod axes;
pub use axes::HeatmapAxes;

mod legend;
pub use legend::HeatmapLegend;

mod tooltip;
pub use tooltip::HeatmapTooltip;

mod header;
pub use header::HeatmapHeader;

mod scene;
pub use scene::{HeatmapScene, SceneCell};

mod utils;
pub use utils::{cell_class, hover_outline};
pub(crate) use utils::*;
