//! Tooltip bookkeeping for hover, leave and click.
//!
//! Hovering shows the tooltip for a cell. Leaving hands out a [`FadeToken`];
//! the view sleeps for the fade delay and then calls [`TooltipState::expire`],
//! which only hides if nothing happened in between. Clicking pins the tooltip
//! so it survives mouse-leave until the same cell is clicked again.

use super::dataset::{CellKey, Reading};
use super::format;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadeToken(u64);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TooltipState {
    target: Option<CellKey>,
    sticky: bool,
    generation: u64,
}

impl TooltipState {
    pub fn target(&self) -> Option<CellKey> {
        self.target
    }

    pub fn is_visible(&self) -> bool {
        self.target.is_some()
    }

    pub fn is_sticky(&self) -> bool {
        self.sticky
    }

    pub fn is_highlighted(&self, cell: CellKey) -> bool {
        self.target == Some(cell)
    }

    pub fn hover(&mut self, cell: CellKey) {
        self.generation = self.generation.wrapping_add(1);
        if !self.sticky {
            self.target = Some(cell);
        }
    }

    pub fn leave(&mut self) -> Option<FadeToken> {
        if self.sticky || self.target.is_none() {
            return None;
        }
        self.generation = self.generation.wrapping_add(1);
        Some(FadeToken(self.generation))
    }

    /// Returns whether the tooltip was hidden.
    pub fn expire(&mut self, token: FadeToken) -> bool {
        if self.sticky || token.0 != self.generation {
            return false;
        }
        self.target = None;
        true
    }

    pub fn click(&mut self, cell: CellKey) {
        self.generation = self.generation.wrapping_add(1);
        if self.sticky && self.target == Some(cell) {
            self.sticky = false;
        } else {
            self.sticky = true;
            self.target = Some(cell);
        }
    }

    pub fn dismiss(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.sticky = false;
        self.target = None;
    }
}

/// Text shown inside the tooltip for one reading.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipContent {
    /// `"<Month> <Year>"`, e.g. `"January 1753"`.
    pub heading: String,
    pub temperature: String,
    pub variance: String,
}

impl TooltipContent {
    pub fn for_reading(reading: &Reading) -> Self {
        let month = crate::i18n::month_name(reading.month);
        Self {
            heading: format!("{month} {}", reading.year),
            temperature: format::format_temperature(reading.temperature),
            variance: format::format_variance(reading.variance),
        }
    }

    pub fn text(&self) -> String {
        format!("{}\n{}\n{}", self.heading, self.temperature, self.variance)
    }
}
