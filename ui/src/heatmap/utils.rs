use dioxus::prelude::*;

use crate::core::{
    layout::{CellRect, GridLayout},
    legend::CellEmphasis,
    tooltip::TooltipState,
};
use crate::heatmap::HeatmapScene;

/// Gap between a cell and its tooltip, in pixels.
const TOOLTIP_GAP: f64 = 10.0;
/// Reserved tooltip width used to decide which side of the cell it goes on.
const TOOLTIP_WIDTH: f64 = 180.0;

/// CSS classes for one grid cell.
pub fn cell_class(emphasis: CellEmphasis) -> String {
    match emphasis.css_class() {
        "" => String::from("cell"),
        modifier => format!("cell {modifier}"),
    }
}

/// Rect of the cell the tooltip currently points at, if it is on screen.
pub fn hover_outline(scene: &HeatmapScene, tooltip: &TooltipState) -> Option<CellRect> {
    let key = tooltip.target()?;
    scene.cell(key).map(|cell| cell.rect)
}

/// Tooltip anchor (left, top) in container pixels. Placed right of the cell
/// unless that would overflow the container.
pub(crate) fn tooltip_anchor(layout: &GridLayout, rect: &CellRect) -> (f64, f64) {
    let right = rect.x + rect.width + TOOLTIP_GAP;
    let left = if right + TOOLTIP_WIDTH > layout.width {
        (rect.x - TOOLTIP_GAP - TOOLTIP_WIDTH).max(0.0)
    } else {
        right
    };
    let top = (rect.y - TOOLTIP_GAP).max(0.0);
    (left, top)
}

/// Subscribes the calling component to the global language code (if the
/// platform provided one) so localized text refreshes on switch.
pub(crate) fn use_lang_marker() -> String {
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    lang_code.map(|code| code()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Padding;
    use crate::core::dataset::{CellKey, Heatmap, MonthlyVariance, TemperatureDataset};

    #[test]
    fn class_list_combines_modifiers() {
        assert_eq!(cell_class(CellEmphasis::Normal), "cell");
        assert_eq!(cell_class(CellEmphasis::Faded), "cell cell--faded");
        assert_eq!(cell_class(CellEmphasis::Highlighted), "cell cell--highlighted");
    }

    #[test]
    fn outline_follows_the_tooltip_target() {
        let heatmap = Heatmap::from_dataset(TemperatureDataset {
            base_temperature: 8.66,
            monthly_variance: vec![
                MonthlyVariance { year: 2000, month: 1, variance: -1.0 },
                MonthlyVariance { year: 2001, month: 2, variance: 1.0 },
            ],
        })
        .unwrap();
        let scene =
            HeatmapScene::build(&heatmap, 625.0, 325.0, &crate::core::config::HeatmapConfig::default()).unwrap();
        let key = CellKey { year: 2001, month: 2 };

        let mut state = TooltipState::default();
        assert_eq!(hover_outline(&scene, &state), None);

        state.hover(key);
        assert_eq!(hover_outline(&scene, &state), Some(scene.cell(key).unwrap().rect));

        let token = state.leave().unwrap();
        state.expire(token);
        assert_eq!(hover_outline(&scene, &state), None);
    }

    #[test]
    fn tooltip_flips_near_right_edge() {
        let heatmap = Heatmap::from_dataset(TemperatureDataset {
            base_temperature: 8.66,
            monthly_variance: vec![
                MonthlyVariance { year: 2000, month: 1, variance: 0.0 },
                MonthlyVariance { year: 2001, month: 1, variance: 0.0 },
            ],
        })
        .unwrap();
        let layout = GridLayout::compute(625.0, 325.0, Padding::default(), 5.0, &heatmap).unwrap();

        let near_left = CellRect { x: 100.0, y: 50.0, width: 20.0, height: 20.0 };
        assert_eq!(tooltip_anchor(&layout, &near_left), (130.0, 40.0));

        let near_right = CellRect { x: 580.0, y: 5.0, width: 20.0, height: 20.0 };
        assert_eq!(tooltip_anchor(&layout, &near_right), (390.0, 0.0));
    }
}
