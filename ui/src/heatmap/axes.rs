use dioxus::prelude::*;
use time::Month;

use crate::core::layout::GridLayout;
use crate::heatmap::use_lang_marker;
use crate::{i18n, t};

const TICK_SIZE: f64 = 6.0;

#[component]
pub fn HeatmapAxes(layout: GridLayout) -> Element {
    let _lang = use_lang_marker();

    let x_offset = layout.x_axis_offset();
    let y_offset = layout.y_axis_offset();
    let (x_start, x_end) = layout.x_axis_span();
    let (y_start, y_end) = layout.y_axis_span();

    let year_ticks = layout.x_axis_ticks();
    let month_ticks: Vec<(f64, String)> = layout
        .y_axis_ticks()
        .into_iter()
        .filter_map(|tick| {
            Month::try_from(tick.value)
                .ok()
                .map(|month| (tick.position, i18n::month_short(month)))
        })
        .collect();

    let label_gap = TICK_SIZE + 3.0;
    let inward_tick = -TICK_SIZE;
    let inward_label = -label_gap;

    let x_caption_x = (x_start + x_end) / 2.0;
    let x_caption_y = x_offset + layout.padding.bottom * 0.55;
    let y_caption_x = -(y_start + y_end) / 2.0;
    let y_caption_y = layout.padding.left * 0.3;

    rsx! {
        g {
            id: "x-axis",
            class: "axis axis--x",
            transform: "translate(0, {x_offset})",
            line { class: "axis__domain", x1: "{x_start}", x2: "{x_end}", y1: "0", y2: "0" }
            for tick in year_ticks {
                g {
                    key: "year-{tick.value}",
                    class: "axis__tick",
                    transform: "translate({tick.position}, 0)",
                    line { y2: "{TICK_SIZE}" }
                    text { y: "{label_gap}", dy: "0.71em", "text-anchor": "middle", "{tick.value}" }
                }
            }
        }

        g {
            id: "y-axis",
            class: "axis axis--y",
            transform: "translate({y_offset}, 0)",
            line { class: "axis__domain", x1: "0", x2: "0", y1: "{y_start}", y2: "{y_end}" }
            for (position, label) in month_ticks {
                g {
                    key: "month-{label}",
                    class: "axis__tick",
                    transform: "translate(0, {position})",
                    line { x2: "{inward_tick}" }
                    text { x: "{inward_label}", dy: "0.32em", "text-anchor": "end", "{label}" }
                }
            }
        }

        text {
            class: "axis__caption",
            x: "{x_caption_x}",
            y: "{x_caption_y}",
            "text-anchor": "middle",
            {t!("axis-years")}
        }
        text {
            class: "axis__caption",
            transform: "rotate(-90)",
            x: "{y_caption_x}",
            y: "{y_caption_y}",
            "text-anchor": "middle",
            {t!("axis-months")}
        }
    }
}
