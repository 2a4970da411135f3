//! Color key: equal-width variance bins plus the set of bins the user has
//! picked out. Picking bins highlights the matching cells and fades the rest;
//! toggling the same bin again undoes it.

use std::collections::BTreeSet;

use super::color::{ColorScale, Rgb};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegendBin {
    pub index: usize,
    pub variance_from: f64,
    pub variance_to: f64,
    pub temperature_from: f64,
    pub temperature_to: f64,
    /// Fill at the bin's midpoint.
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    pub bins: Vec<LegendBin>,
}

impl Legend {
    pub fn new(
        variance_extent: (f64, f64),
        base_temperature: f64,
        steps: usize,
        colors: &ColorScale,
    ) -> Self {
        let steps = steps.max(1);
        let (lower, upper) = variance_extent;
        let width = (upper - lower) / steps as f64;

        let bins = (0..steps)
            .map(|index| {
                let variance_from = lower + width * index as f64;
                let variance_to = if index + 1 == steps {
                    upper
                } else {
                    lower + width * (index + 1) as f64
                };
                LegendBin {
                    index,
                    variance_from,
                    variance_to,
                    temperature_from: base_temperature + variance_from,
                    temperature_to: base_temperature + variance_to,
                    color: colors.color_at((variance_from + variance_to) / 2.0),
                }
            })
            .collect();

        Self { bins }
    }

    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Bin holding `variance`, looked up against the same edges the swatches
    /// display. Values outside the extent clamp to the edge bins and the upper
    /// bound belongs to the last bin.
    pub fn bin_for(&self, variance: f64) -> usize {
        let (Some(first), Some(last)) = (self.bins.first(), self.bins.last()) else {
            return 0;
        };
        if variance.is_nan() || first.variance_from >= last.variance_to {
            return 0;
        }
        self.bins
            .partition_point(|bin| bin.variance_from <= variance)
            .saturating_sub(1)
    }
}

/// How a cell is drawn relative to the legend selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellEmphasis {
    Normal,
    Highlighted,
    Faded,
}

impl CellEmphasis {
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Normal => "",
            Self::Highlighted => "cell--highlighted",
            Self::Faded => "cell--faded",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LegendSelection {
    active: BTreeSet<usize>,
}

impl LegendSelection {
    /// Flips `bin`; returns whether it is now active.
    pub fn toggle(&mut self, bin: usize) -> bool {
        if self.active.remove(&bin) {
            false
        } else {
            self.active.insert(bin);
            true
        }
    }

    pub fn is_active(&self, bin: usize) -> bool {
        self.active.contains(&bin)
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn clear(&mut self) {
        self.active.clear();
    }

    pub fn emphasis(&self, bin: usize) -> CellEmphasis {
        if self.active.is_empty() {
            CellEmphasis::Normal
        } else if self.active.contains(&bin) {
            CellEmphasis::Highlighted
        } else {
            CellEmphasis::Faded
        }
    }
}
