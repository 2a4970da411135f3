//! Pixel geometry for the grid: one column per year, one row per month.
//!
//! Columns are placed by a linear year scale whose range stops one cell short
//! of the inner area's right edge, so the last column ends flush with it. Rows
//! run from the bottom (earliest month) to the top, positioned by their centers.

use super::config::Padding;
use super::dataset::{CellKey, Heatmap};
use super::error::{HeatmapError, Result};
use super::scale::LinearScale;

const YEAR_TICK_TARGET: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisTick<T> {
    pub value: T,
    pub position: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GridLayout {
    pub width: f64,
    pub height: f64,
    pub padding: Padding,
    pub inner_width: f64,
    pub inner_height: f64,
    pub columns: usize,
    pub rows: usize,
    pub cell_width: f64,
    pub cell_height: f64,
    pub axis_offset: f64,
    x_scale: LinearScale,
    y_scale: LinearScale,
    months: Vec<u8>,
}

impl GridLayout {
    pub fn compute(
        width: f64,
        height: f64,
        padding: Padding,
        axis_offset: f64,
        heatmap: &Heatmap,
    ) -> Result<Self> {
        let inner_width = width - padding.left - padding.right;
        let inner_height = height - padding.top - padding.bottom;
        if !(inner_width > 0.0 && inner_height > 0.0) {
            return Err(HeatmapError::EmptyCanvas { width, height });
        }
        if heatmap.is_empty() {
            return Err(HeatmapError::EmptyDataset);
        }

        let columns = heatmap.distinct_years().len();
        let months: Vec<u8> = heatmap.distinct_months().into_iter().collect();
        let rows = months.len();
        let cell_width = inner_width / columns as f64;
        let cell_height = inner_height / rows as f64;

        let (min_year, max_year) = heatmap.year_extent();
        let x_scale = LinearScale::new(
            (min_year as f64, max_year as f64),
            (padding.left, padding.left + inner_width - cell_width),
        );

        let (min_month, max_month) = heatmap.month_extent();
        let y_scale = LinearScale::new(
            (min_month as f64, max_month as f64),
            (
                padding.top + inner_height - cell_height / 2.0,
                padding.top + cell_height / 2.0,
            ),
        );

        tracing::debug!(
            width,
            height,
            columns,
            rows,
            cell_width,
            cell_height,
            "computed grid layout"
        );

        Ok(Self {
            width,
            height,
            padding,
            inner_width,
            inner_height,
            columns,
            rows,
            cell_width,
            cell_height,
            axis_offset,
            x_scale,
            y_scale,
            months,
        })
    }

    pub fn x(&self, year: i32) -> f64 {
        self.x_scale.map(year as f64)
    }

    /// Vertical center of the row for `month`.
    pub fn y_center(&self, month: u8) -> f64 {
        self.y_scale.map(month as f64)
    }

    pub fn cell_rect(&self, key: CellKey) -> CellRect {
        CellRect {
            x: self.x(key.year),
            y: self.y_center(key.month) - self.cell_height / 2.0,
            width: self.cell_width,
            height: self.cell_height,
        }
    }

    /// Translation applied to the horizontal (year) axis group.
    pub fn x_axis_offset(&self) -> f64 {
        self.padding.top + self.inner_height + self.axis_offset
    }

    /// Translation applied to the vertical (month) axis group.
    pub fn y_axis_offset(&self) -> f64 {
        self.padding.left - self.axis_offset
    }

    pub fn x_axis_ticks(&self) -> Vec<AxisTick<i32>> {
        self.x_scale
            .ticks(YEAR_TICK_TARGET)
            .into_iter()
            .filter(|value| value.fract() == 0.0)
            .map(|value| {
                let year = value as i32;
                AxisTick {
                    value: year,
                    position: self.x(year),
                }
            })
            .collect()
    }

    pub fn y_axis_ticks(&self) -> Vec<AxisTick<u8>> {
        self.months
            .iter()
            .map(|&month| AxisTick {
                value: month,
                position: self.y_center(month),
            })
            .collect()
    }

    /// Horizontal extent of the x axis line.
    pub fn x_axis_span(&self) -> (f64, f64) {
        (self.padding.left, self.padding.left + self.inner_width)
    }

    /// Vertical extent of the y axis line.
    pub fn y_axis_span(&self) -> (f64, f64) {
        (self.padding.top, self.padding.top + self.inner_height)
    }
}
