use dioxus::prelude::*;

use crate::core::{legend::LegendSelection, platform, timing, tooltip::TooltipState};
use crate::heatmap::{cell_class, hover_outline, HeatmapScene};

/// The cells. Only the legend selection is read here; tooltip state is
/// written from the handlers but never subscribed to, so hovering does not
/// re-render the grid.
#[component]
pub fn HeatmapGrid(
    scene: HeatmapScene,
    tooltip: Signal<TooltipState>,
    selection: Signal<LegendSelection>,
    fade_ms: u64,
) -> Element {
    let mut tooltip = tooltip;
    let legend_selection = selection();

    rsx! {
        g { class: "heatmap__cells",
            for cell in scene.cells.iter() {
                {
                    let cell_key = cell.key;
                    let class = cell_class(legend_selection.emphasis(cell.bin));
                    rsx! {
                        rect {
                            key: "{cell_key.year}-{cell_key.month}",
                            class: "{class}",
                            x: "{cell.rect.x}",
                            y: "{cell.rect.y}",
                            width: "{cell.rect.width}",
                            height: "{cell.rect.height}",
                            fill: "{cell.fill}",
                            "data-year": "{cell_key.year}",
                            "data-month": "{cell_key.month}",
                            "data-temp": "{cell.temperature}",
                            onmouseenter: move |_| tooltip.with_mut(|state| state.hover(cell_key)),
                            onmouseleave: move |_| {
                                if let Some(token) = tooltip.with_mut(|state| state.leave()) {
                                    platform::spawn_future(async move {
                                        timing::sleep_ms(fade_ms).await;
                                        tooltip.with_mut(|state| {
                                            state.expire(token);
                                        });
                                    });
                                }
                            },
                            onclick: move |_| tooltip.with_mut(|state| state.click(cell_key)),
                        }
                    }
                }
            }
        }
    }
}

/// Outline drawn over the hovered or pinned cell.
#[component]
pub fn HeatmapHoverOutline(scene: HeatmapScene, tooltip: Signal<TooltipState>) -> Element {
    let state = tooltip();
    let Some(rect) = hover_outline(&scene, &state) else {
        return rsx! {};
    };

    rsx! {
        rect {
            class: "cell-outline",
            x: "{rect.x}",
            y: "{rect.y}",
            width: "{rect.width}",
            height: "{rect.height}",
        }
    }
}
