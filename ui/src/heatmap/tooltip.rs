use std::rc::Rc;

use dioxus::prelude::*;

use crate::core::{
    dataset::Heatmap,
    tooltip::{TooltipContent, TooltipState},
};
use crate::heatmap::{tooltip_anchor, use_lang_marker, HeatmapScene};
use crate::t;

#[component]
pub fn HeatmapTooltip(
    heatmap: Rc<Heatmap>,
    scene: HeatmapScene,
    tooltip: Signal<TooltipState>,
) -> Element {
    let _lang = use_lang_marker();
    let mut tooltip = tooltip;
    let state = tooltip();

    let Some(cell) = state.target().and_then(|key| scene.cell(key)) else {
        return rsx! {};
    };
    let Some(reading) = heatmap.readings.get(cell.reading) else {
        return rsx! {};
    };

    let content = TooltipContent::for_reading(reading);
    let (left, top) = tooltip_anchor(&scene.layout, &cell.rect);
    let sticky = state.is_sticky();

    rsx! {
        div {
            id: "tooltip",
            class: if sticky { "tooltip tooltip--pinned" } else { "tooltip" },
            role: "status",
            style: "left: {left}px; top: {top}px;",
            "data-year": "{reading.year}",
            strong { class: "tooltip__heading", "{content.heading}" }
            span { class: "tooltip__line", "{content.temperature}" }
            span { class: "tooltip__line tooltip__line--muted", "{content.variance}" }
            if sticky {
                button {
                    r#type: "button",
                    class: "tooltip__close",
                    onclick: move |_| tooltip.with_mut(|s| s.dismiss()),
                    {t!("tooltip-close")}
                }
            }
        }
    }
}
