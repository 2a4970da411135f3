//! Render model: every reading resolved to a rectangle, a fill and a legend bin.
//! Built once per (dataset, container size) and shared by the components.

use crate::core::{
    color::ColorScale,
    config::HeatmapConfig,
    dataset::{CellKey, Heatmap},
    error::Result,
    layout::{CellRect, GridLayout},
    legend::Legend,
};

#[derive(Debug, Clone, PartialEq)]
pub struct SceneCell {
    pub key: CellKey,
    pub rect: CellRect,
    pub fill: String,
    pub bin: usize,
    pub variance: f64,
    pub temperature: f64,
    /// Index of the source reading in [`Heatmap::readings`].
    pub reading: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapScene {
    pub layout: GridLayout,
    pub legend: Legend,
    pub cells: Vec<SceneCell>,
}

impl HeatmapScene {
    pub fn build(heatmap: &Heatmap, width: f64, height: f64, config: &HeatmapConfig) -> Result<Self> {
        let layout = GridLayout::compute(width, height, config.padding, config.axis_offset, heatmap)?;

        let (cold, warm) = config.palette();
        let variance_extent = heatmap.variance_extent();
        let colors = ColorScale::new(variance_extent, cold, warm);
        let legend = Legend::new(
            variance_extent,
            heatmap.base_temperature,
            config.legend_steps(),
            &colors,
        );

        let cells = heatmap
            .readings
            .iter()
            .enumerate()
            .map(|(index, reading)| {
                let key = reading.key();
                SceneCell {
                    key,
                    rect: layout.cell_rect(key),
                    fill: colors.color_at(reading.variance).to_string(),
                    bin: legend.bin_for(reading.variance),
                    variance: reading.variance,
                    temperature: reading.temperature,
                    reading: index,
                }
            })
            .collect();

        Ok(Self {
            layout,
            legend,
            cells,
        })
    }

    pub fn cell(&self, key: CellKey) -> Option<&SceneCell> {
        self.cells.iter().find(|cell| cell.key == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dataset::{MonthlyVariance, TemperatureDataset};

    fn heatmap() -> Heatmap {
        let monthly_variance = (1990..=1994)
            .flat_map(|year| {
                (1..=12u8).map(move |month| MonthlyVariance {
                    year,
                    month,
                    variance: f64::from(month) * 0.25 - 1.5,
                })
            })
            .collect();
        Heatmap::from_dataset(TemperatureDataset {
            base_temperature: 8.66,
            monthly_variance,
        })
        .unwrap()
    }

    #[test]
    fn one_cell_per_reading() {
        let h = heatmap();
        let scene = HeatmapScene::build(&h, 900.0, 600.0, &HeatmapConfig::default()).unwrap();
        assert_eq!(scene.cells.len(), h.len());
        assert_eq!(scene.cells[7].reading, 7);
    }

    #[test]
    fn fills_depend_only_on_variance() {
        let h = heatmap();
        let scene = HeatmapScene::build(&h, 900.0, 600.0, &HeatmapConfig::default()).unwrap();
        let march: Vec<&SceneCell> = scene.cells.iter().filter(|c| c.key.month == 3).collect();
        assert!(march.windows(2).all(|w| w[0].fill == w[1].fill && w[0].bin == w[1].bin));
    }

    #[test]
    fn cell_lookup_by_key() {
        let h = heatmap();
        let scene = HeatmapScene::build(&h, 900.0, 600.0, &HeatmapConfig::default()).unwrap();
        let cell = scene.cell(CellKey { year: 1992, month: 6 }).unwrap();
        assert_eq!(cell.variance, 0.0);
        assert!(scene.cell(CellKey { year: 2050, month: 6 }).is_none());
    }
}
